//! Route tests for the web layer
//!
//! The upstream gateway is faked in memory; every response still flows
//! through the production normalizer, so these tests cover the full
//! fetch -> normalize -> policy -> view model pipeline.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::{json, Value};

use domain_claims::{normalize, ClaimDetail, ClaimSummary};
use infra_claims_api::{CancelClaimRequest, ClaimsGateway, GatewayError};
use interface_web::{config::WebConfig, create_router, identity::PlaceholderIdentity, AppState};
use test_utils::{CancelFixtures, DetailFixtures, ListFixtures};

/// How the fake answers a cancel submission.
#[derive(Clone)]
enum CancelBehavior {
    Accept(Value),
    Reject(String),
}

/// In-memory stand-in for the upstream claims service.
#[derive(Clone, Default)]
struct FakeGateway {
    list: Option<Value>,
    details: HashMap<String, Value>,
    cancel: Option<CancelBehavior>,
    cancel_requests: Arc<Mutex<Vec<CancelClaimRequest>>>,
}

impl FakeGateway {
    fn with_list(mut self, payload: Value) -> Self {
        self.list = Some(payload);
        self
    }

    fn with_detail(mut self, id: &str, payload: Value) -> Self {
        self.details.insert(id.to_string(), payload);
        self
    }

    fn with_cancel(mut self, behavior: CancelBehavior) -> Self {
        self.cancel = Some(behavior);
        self
    }

    fn recorded_cancels(&self) -> Vec<CancelClaimRequest> {
        self.cancel_requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl ClaimsGateway for FakeGateway {
    async fn list_claims(&self) -> Result<Vec<ClaimSummary>, GatewayError> {
        match &self.list {
            Some(payload) => Ok(normalize::claim_list(payload)),
            None => Err(GatewayError::upstream(503, "Service Unavailable")),
        }
    }

    async fn fetch_claim(&self, id: &str) -> Result<ClaimDetail, GatewayError> {
        let payload = self
            .details
            .get(id)
            .ok_or_else(|| GatewayError::NotFound { id: id.to_string() })?;
        normalize::claim_detail(payload).ok_or_else(|| GatewayError::NotFound { id: id.to_string() })
    }

    async fn cancel_claim(
        &self,
        _id: &str,
        request: &CancelClaimRequest,
    ) -> Result<ClaimDetail, GatewayError> {
        self.cancel_requests.lock().unwrap().push(request.clone());
        match &self.cancel {
            Some(CancelBehavior::Accept(payload)) => Ok(normalize::cancelled_claim(payload)),
            Some(CancelBehavior::Reject(message)) => Err(GatewayError::Rejected {
                message: message.clone(),
            }),
            None => Err(GatewayError::Rejected {
                message: "Failed to cancel claim.".to_string(),
            }),
        }
    }
}

fn server_with(gateway: FakeGateway) -> TestServer {
    let state = AppState {
        gateway: Arc::new(gateway),
        identity: Arc::new(PlaceholderIdentity),
        config: WebConfig::default(),
    };
    TestServer::new(create_router(state)).unwrap()
}

// ============================================================================
// List Page Tests
// ============================================================================

mod list_page_tests {
    use super::*;

    #[tokio::test]
    async fn test_pending_claim_row_rendering() {
        let server = server_with(FakeGateway::default().with_list(ListFixtures::wrapped_pending_list()));

        let response = server.get("/claims").await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["total"], 1);

        let row = &body["claims"][0];
        assert_eq!(row["display_id"], "TSR-001");
        assert_eq!(row["amount"], "USD 120.50");
        assert_eq!(row["badge"], "in_progress");
        assert_eq!(row["submitted_date"], "05 Jan 2024");
        // Pending Verification sits in both the editable and cancellable
        // sets.
        assert_eq!(row["actions"]["can_edit"], true);
        assert_eq!(row["actions"]["can_cancel"], true);
    }

    #[tokio::test]
    async fn test_bare_array_list_renders_identically() {
        let server = server_with(FakeGateway::default().with_list(ListFixtures::bare_pending_list()));

        let body: Value = server.get("/claims").await.json();
        assert_eq!(body["claims"][0]["display_id"], "TSR-001");
    }

    #[tokio::test]
    async fn test_malformed_list_shape_renders_empty() {
        let server = server_with(FakeGateway::default().with_list(json!({"unexpected": true})));

        let response = server.get("/claims").await;
        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["total"], 0);
    }

    #[tokio::test]
    async fn test_filters_narrow_in_memory() {
        let server = server_with(FakeGateway::default().with_list(ListFixtures::mixed_status_list()));

        let body: Value = server
            .get("/claims")
            .add_query_param("status", "Approved")
            .await
            .json();
        assert_eq!(body["total"], 1);
        assert_eq!(body["claims"][0]["badge"], "positive");

        let body: Value = server
            .get("/claims")
            .add_query_param("search", "tsr-003")
            .await
            .json();
        assert_eq!(body["total"], 1);
        assert_eq!(body["claims"][0]["display_id"], "TSR-003");
    }

    #[tokio::test]
    async fn test_type_filter_matches_nothing_on_documented_payloads() {
        let server = server_with(FakeGateway::default().with_list(ListFixtures::mixed_status_list()));

        let body: Value = server
            .get("/claims")
            .add_query_param("type", "Travel")
            .await
            .json();
        assert_eq!(body["total"], 0);
        assert_eq!(body["filter"]["type"], "Travel");
    }

    #[tokio::test]
    async fn test_upstream_failure_is_page_level_error() {
        let server = server_with(FakeGateway::default());

        let response = server.get("/claims").await;
        response.assert_status(StatusCode::BAD_GATEWAY);
        let body: Value = response.json();
        assert_eq!(body["error"], "fetch_failed");
        assert_eq!(body["message"], "Error fetching claims: Service Unavailable");
    }
}

// ============================================================================
// Detail Page Tests
// ============================================================================

mod detail_page_tests {
    use super::*;

    #[tokio::test]
    async fn test_pending_detail_offers_both_actions() {
        let server = server_with(
            FakeGateway::default().with_detail("C1", DetailFixtures::pending_travel_claim()),
        );

        let body: Value = server.get("/claims/C1").await.json();
        assert_eq!(body["display_id"], "TSR-001");
        assert_eq!(body["actions"]["can_edit"], true);
        assert_eq!(body["actions"]["can_cancel"], true);
        assert_eq!(body["expense_items"][0]["mileage"], "150");
        assert_eq!(body["expense_items"][0]["details"], "HQ - Site B - Hotel Indah");
        assert_eq!(body["fx_rates"][0]["selling_rate"], "4.2000");
        assert_eq!(
            body["financial_summary"]["balance_claim_repayment"],
            "USD 233.25"
        );
    }

    #[tokio::test]
    async fn test_approved_detail_offers_no_actions() {
        let server =
            server_with(FakeGateway::default().with_detail("C2", DetailFixtures::approved_claim()));

        let body: Value = server.get("/claims/C2").await.json();
        assert_eq!(body["badge"], "positive");
        assert_eq!(body["actions"]["can_edit"], false);
        assert_eq!(body["actions"]["can_cancel"], false);
    }

    #[tokio::test]
    async fn test_medical_section_visibility() {
        let server = server_with(
            FakeGateway::default().with_detail("C5", DetailFixtures::family_medical_claim()),
        );

        let body: Value = server.get("/claims/C5").await.json();
        let medical = &body["medical_claim_details"];
        assert_eq!(medical["is_for_family"], "Yes");
        assert_eq!(medical["family"]["for_spouse"], "Yes");
        assert_eq!(medical["family"]["for_other"], "Parent");

        // Non-medical claims omit the section entirely.
        let server =
            server_with(FakeGateway::default().with_detail("C2", DetailFixtures::approved_claim()));
        let body: Value = server.get("/claims/C2").await.json();
        assert!(body.get("medical_claim_details").is_none());
    }

    #[tokio::test]
    async fn test_empty_sequences_are_omitted() {
        let server =
            server_with(FakeGateway::default().with_detail("C2", DetailFixtures::approved_claim()));

        let body: Value = server.get("/claims/C2").await.json();
        assert!(body.get("expense_items").is_none());
        assert!(body.get("fx_rates").is_none());
    }

    #[tokio::test]
    async fn test_missing_claim_is_distinct_not_found_state() {
        let server = server_with(FakeGateway::default());

        let response = server.get("/claims/C404").await;
        response.assert_status(StatusCode::NOT_FOUND);
        let body: Value = response.json();
        assert_eq!(body["error"], "not_found");
        assert!(body["message"].as_str().unwrap().contains("C404"));
    }
}

// ============================================================================
// Cancel Action Tests
// ============================================================================

mod cancel_tests {
    use super::*;

    #[tokio::test]
    async fn test_successful_cancel_replaces_record() {
        let fake = FakeGateway::default()
            .with_detail("C1", DetailFixtures::pending_travel_claim())
            .with_cancel(CancelBehavior::Accept(CancelFixtures::cancelled_response()));
        let recorder = fake.clone();
        let server = server_with(fake);

        let response = server.post("/claims/C1/cancel").await;
        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["notice"], "Claim ID C1 has been cancelled.");
        assert_eq!(body["claim"]["status"], "Cancelled");
        assert_eq!(body["claim"]["actions"]["can_cancel"], false);

        let submitted = recorder.recorded_cancels();
        assert_eq!(submitted.len(), 1);
        assert_eq!(submitted[0].comments, "Cancelled by user.");
        assert_eq!(submitted[0].cancelled_by, "Jane Lim");
    }

    #[tokio::test]
    async fn test_cancel_actor_falls_back_without_requestor_name() {
        let detail = test_utils::DetailPayloadBuilder::new()
            .with_id("C8")
            .without_requestor_name()
            .build();
        let fake = FakeGateway::default()
            .with_detail("C8", detail)
            .with_cancel(CancelBehavior::Accept(CancelFixtures::cancelled_response()));
        let recorder = fake.clone();
        let server = server_with(fake);

        server.post("/claims/C8/cancel").await.assert_status_ok();
        assert_eq!(recorder.recorded_cancels()[0].cancelled_by, "User");
    }

    #[tokio::test]
    async fn test_rejected_cancel_surfaces_upstream_message() {
        let fake = FakeGateway::default()
            .with_detail("C1", DetailFixtures::pending_travel_claim())
            .with_cancel(CancelBehavior::Reject("Already processed".to_string()));
        let server = server_with(fake);

        let response = server.post("/claims/C1/cancel").await;
        response.assert_status(StatusCode::CONFLICT);
        let body: Value = response.json();
        assert_eq!(body["error"], "action_rejected");
        assert_eq!(body["message"], "Already processed");

        // The record itself is untouched; a re-fetch still shows the
        // original status.
        let body: Value = server.get("/claims/C1").await.json();
        assert_eq!(body["status"], "Pending Verification");
    }
}

// ============================================================================
// Session Tests
// ============================================================================

mod session_tests {
    use super::*;

    #[tokio::test]
    async fn test_user_menu_contents() {
        let server = server_with(FakeGateway::default());

        let body: Value = server.get("/session").await.json();
        assert_eq!(body["display_name"], "Admin User");
        assert_eq!(body["email"], "admin@example.com");
        assert_eq!(body["role"], "Admin Focal");
        assert_eq!(body["initials"], "AU");
    }

    #[tokio::test]
    async fn test_sign_out_uses_configured_default() {
        let server = server_with(FakeGateway::default());

        let response = server.post("/session/sign-out").await;
        response.assert_status(StatusCode::SEE_OTHER);
        assert_eq!(response.header("location"), "/login");
    }

    #[tokio::test]
    async fn test_sign_out_honors_explicit_target() {
        let server = server_with(FakeGateway::default());

        let response = server
            .post("/session/sign-out")
            .add_query_param("redirect", "/goodbye")
            .await;
        response.assert_status(StatusCode::SEE_OTHER);
        assert_eq!(response.header("location"), "/goodbye");
    }
}

// ============================================================================
// Health Tests
// ============================================================================

mod health_tests {
    use super::*;

    #[tokio::test]
    async fn test_health_check() {
        let server = server_with(FakeGateway::default());

        let body: Value = server.get("/health").await.json();
        assert_eq!(body["status"], "healthy");
    }
}
