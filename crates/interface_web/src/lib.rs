//! HTTP Presentation Layer
//!
//! This crate serves render-ready view models for the expense claims
//! pages using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: One module per page surface (claims, session, health)
//! - **DTOs**: View models with display strings already formatted
//! - **Middleware**: Request logging
//! - **Error Handling**: Gateway failures mapped to the page-level error,
//!   not-found, and notification states the client renders
//!
//! Handlers hold no claim state: every request fetches upstream through
//! the [`infra_claims_api::ClaimsGateway`] port, normalizes, and projects.
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_web::{create_router, AppState};
//!
//! let app = create_router(state);
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod identity;
pub mod middleware;

use std::sync::Arc;

use axum::{
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use infra_claims_api::ClaimsGateway;

use crate::config::WebConfig;
use crate::handlers::{claims, health, session};
use crate::identity::IdentityProvider;
use crate::middleware::request_log_middleware;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub gateway: Arc<dyn ClaimsGateway>,
    pub identity: Arc<dyn IdentityProvider>,
    pub config: WebConfig,
}

/// Creates the main router
///
/// # Arguments
///
/// * `state` - Shared application state (gateway, identity, config)
///
/// # Returns
///
/// Configured Axum router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    // Claims routes
    let claims_routes = Router::new()
        .route("/", get(claims::list_claims))
        .route("/:id", get(claims::view_claim))
        .route("/:id/cancel", post(claims::cancel_claim));

    // Session routes backing the user-menu widget
    let session_routes = Router::new()
        .route("/", get(session::current_session))
        .route("/sign-out", post(session::sign_out));

    Router::new()
        .route("/health", get(health::health_check))
        .nest("/claims", claims_routes)
        .nest("/session", session_routes)
        .layer(axum_middleware::from_fn(request_log_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
