//! Claims page handlers

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

use domain_claims::ClaimFilter;
use infra_claims_api::CancelClaimRequest;

use crate::dto::claims::{CancelOutcomeView, ClaimDetailView, ClaimsListView};
use crate::error::ApiError;
use crate::AppState;

/// List page filter parameters
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub search: Option<String>,
    pub status: Option<String>,
    #[serde(rename = "type")]
    pub claim_type: Option<String>,
}

impl ListParams {
    fn into_filter(self) -> ClaimFilter {
        let defaults = ClaimFilter::default();
        ClaimFilter {
            search: self.search.unwrap_or(defaults.search),
            status: self.status.unwrap_or(defaults.status),
            claim_type: self.claim_type.unwrap_or(defaults.claim_type),
        }
    }
}

/// Renders the claims list page
///
/// Filtering happens entirely over the fetched list; the upstream is
/// never asked to filter.
pub async fn list_claims(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<ClaimsListView>, ApiError> {
    let claims = state
        .gateway
        .list_claims()
        .await
        .map_err(ApiError::from_list_fetch)?;

    let filter = params.into_filter();
    Ok(Json(ClaimsListView::build(&claims, &filter)))
}

/// Renders the claim detail page
pub async fn view_claim(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ClaimDetailView>, ApiError> {
    let claim = state
        .gateway
        .fetch_claim(&id)
        .await
        .map_err(|error| ApiError::from_detail_fetch(error, &id))?;

    Ok(Json(ClaimDetailView::from_detail(&claim)))
}

/// Submits a cancellation for a loaded claim
///
/// The current record is fetched first to name the cancel actor, then the
/// cancellation is posted; the two requests run strictly in sequence. On
/// success the response carries the replacement record, so the client
/// swaps its detail state wholesale. On rejection the client keeps its
/// record untouched and shows the notice.
pub async fn cancel_claim(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<CancelOutcomeView>, ApiError> {
    let claim = state
        .gateway
        .fetch_claim(&id)
        .await
        .map_err(|error| ApiError::from_detail_fetch(error, &id))?;

    let request = CancelClaimRequest::for_requestor(claim.requestor_name.as_deref());
    let cancelled = state
        .gateway
        .cancel_claim(&id, &request)
        .await
        .map_err(|error| ApiError::from_cancel(error, &id))?;

    Ok(Json(CancelOutcomeView::new(&id, &cancelled)))
}
