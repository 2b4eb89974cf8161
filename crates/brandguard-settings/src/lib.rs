//! Config parsing and profile/preset resolution.
//!
//! This crate is IO-free: it parses and resolves configuration provided as strings.

#![forbid(unsafe_code)]

mod model;
mod presets;
mod resolve;

pub use model::{CheckConfig, GuidelinesConfigV1};
pub use presets::{known_profiles, preset, DEFAULT_PROFILE};
pub use resolve::{Overrides, ResolvedConfig};

/// Parse `brandguard.toml` (or equivalent) into a typed model.
pub fn parse_config_toml(input: &str) -> anyhow::Result<GuidelinesConfigV1> {
    let cfg: GuidelinesConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}

/// Resolve the guidelines used by the engine (profile + file values + overrides).
pub fn resolve_config(
    cfg: GuidelinesConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    resolve::resolve_config(cfg, overrides)
}
