//! Stable DTOs and IDs used across the brandguard workspace.
//!
//! This crate is intentionally boring:
//! - data types for the emitted compliance report
//! - stable string IDs and finding codes
//! - explain registry for remediation guidance

#![forbid(unsafe_code)]

pub mod explain;
pub mod ids;
pub mod report;

pub use explain::{lookup_explanation, ExamplePair, Explanation};
pub use report::{ComplianceReport, Finding, Severity, FALLBACK_SCORE, MAX_SCORE};
