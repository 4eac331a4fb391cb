//! Core Kernel - Foundational value handling for the expense claims system
//!
//! This crate provides the building blocks used across all domain modules:
//! - Tolerant field resolution over backend JSON payloads
//! - Lenient numeric values with fixed-precision display
//! - Lenient date values with fail-soft display
//!
//! The claims backend emits records under two historical field-naming
//! conventions (snake_case and camelCase) and with loosely-typed values.
//! Everything here is designed to absorb that variation: resolution and
//! formatting never fail, they degrade to documented fallback output.

pub mod dates;
pub mod fields;
pub mod numeric;

pub use dates::{DateStyle, LenientDate};
pub use numeric::LenientNumber;
