//! Test Utilities Crate
//!
//! Provides shared payload builders and canned fixtures for the expense
//! claims test suite. Everything here produces raw backend JSON, in either
//! historical field-naming convention, so tests exercise the same
//! normalization paths production traffic does.
//!
//! # Modules
//!
//! - `builders`: Builder patterns for claim payload construction
//! - `fixtures`: Pre-built payloads for common scenarios

pub mod builders;
pub mod fixtures;

pub use builders::*;
pub use fixtures::*;
