//! Pure compliance evaluation (no IO).
//!
//! Input: a canvas description and guideline options decoded elsewhere.
//! Output: a compliance report with score, violations, warnings and recommendations.

#![forbid(unsafe_code)]

pub mod color;
pub mod model;
pub mod policy;
pub mod report;
pub mod scoring;

mod checks;
mod engine;

pub use checks::{logo_area, safe_zone_violations, text_coverage};
pub use engine::{evaluate, evaluate_effective, try_evaluate, EvaluationError};
pub use scoring::score;

#[cfg(test)]
mod properties;
#[cfg(test)]
mod test_support;
