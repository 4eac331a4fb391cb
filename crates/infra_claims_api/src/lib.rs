//! Infrastructure Claims API Layer
//!
//! This crate adapts the upstream claims REST API behind the
//! [`ClaimsGateway`] port, hiding transport details from the presentation
//! layer.
//!
//! # Architecture
//!
//! The gateway trait is the seam: handlers depend on `dyn ClaimsGateway`,
//! the HTTP adapter implements it with `reqwest`, and tests substitute an
//! in-memory fake. Responses are canonicalized through
//! `domain_claims::normalize`, so envelope and field-spelling variation
//! never leaks past this crate.
//!
//! # Request discipline
//!
//! One request per page interaction, no retries, no local timeout beyond
//! the transport's own, no caching. Malformed list payloads normalize to
//! an empty list rather than an error.

pub mod error;
pub mod gateway;
pub mod http;

pub use error::GatewayError;
pub use gateway::{CancelClaimRequest, ClaimsGateway};
pub use http::{GatewayConfig, HttpClaimsGateway};
