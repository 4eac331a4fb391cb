//! Session handlers backing the user-menu widget

use axum::{
    extract::{Query, State},
    response::Redirect,
    Json,
};
use serde::Deserialize;

use crate::dto::session::SessionView;
use crate::AppState;

/// Returns the user-menu contents
pub async fn current_session(State(state): State<AppState>) -> Json<SessionView> {
    let profile = state.identity.current_profile();
    Json(SessionView::from_profile(&profile))
}

/// Sign-out parameters
#[derive(Debug, Default, Deserialize)]
pub struct SignOutParams {
    /// Post-logout destination; the configured default applies when absent
    pub redirect: Option<String>,
}

/// Signs out and redirects to the post-logout destination
pub async fn sign_out(
    State(state): State<AppState>,
    Query(params): Query<SignOutParams>,
) -> Redirect {
    let target = params
        .redirect
        .unwrap_or_else(|| state.config.sign_out_redirect.clone());
    let destination = state.identity.sign_out(&target);
    Redirect::to(&destination)
}
