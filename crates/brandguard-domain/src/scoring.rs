//! Compliance score arithmetic.

use brandguard_types::MAX_SCORE;

/// Points deducted per violation.
pub const VIOLATION_PENALTY: u64 = 15;
/// Points deducted per warning.
pub const WARNING_PENALTY: u64 = 5;

/// `max(0, 100 - 15 * violations - 5 * warnings)`, clamped to `[0, 100]`.
///
/// Recommendations carry no weight.
pub fn score(violations: usize, warnings: usize, _recommendations: usize) -> u8 {
    let penalty = (violations as u64)
        .saturating_mul(VIOLATION_PENALTY)
        .saturating_add((warnings as u64).saturating_mul(WARNING_PENALTY));
    let raw = u64::from(MAX_SCORE).saturating_sub(penalty);
    u8::try_from(raw.min(u64::from(MAX_SCORE))).unwrap_or(MAX_SCORE)
}
