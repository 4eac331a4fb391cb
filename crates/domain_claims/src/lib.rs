//! Expense Claims Domain
//!
//! This crate implements the claim records served by the expense claims
//! backend, the normalizer that canonicalizes its heterogeneously-shaped
//! responses, and the status-driven lifecycle policy deciding which actions
//! a claim currently permits.
//!
//! # Claim Lifecycle
//!
//! ```text
//! Pending Verification -> Pending Approval -> Approved/Rejected -> Processed
//!                      \-> Cancelled
//! ```
//!
//! Statuses are an open, server-defined string set; the policy and the
//! badge classifier both tolerate values they have never seen.

pub mod badge;
pub mod detail;
pub mod filter;
pub mod lifecycle;
pub mod normalize;
pub mod summary;

pub use badge::{badge_label, BadgeTone};
pub use detail::{
    BankDetails, ClaimDetail, Declaration, ExpenseItem, FinancialSummary, FxRateEntry,
    HeaderDetails, MedicalClaimDetails, TravelDetails, DECLARATION_STATEMENT,
};
pub use filter::{ClaimFilter, FILTER_ALL};
pub use lifecycle::{
    can_cancel, can_edit, ClaimActions, CANCELLABLE_STATUSES, EDITABLE_STATUSES, TERMINAL_STATUSES,
};
pub use summary::ClaimSummary;
