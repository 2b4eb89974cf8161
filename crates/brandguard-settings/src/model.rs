use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// `brandguard.toml` schema v1.
///
/// A *user-facing* config model: unknown keys are ignored so newer files still load.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct GuidelinesConfigV1 {
    /// Optional schema string for tooling (`brandguard.config.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Preset to start from: `default`, `strict` or `lenient`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,

    /// Maximum text coverage, in percent of the canvas area.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_text_coverage: Option<f64>,

    /// Minimum logo area in square pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_logo_size: Option<f64>,

    /// Edge margin in pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub safe_zone_margin: Option<f64>,

    /// Enables the text contrast advisory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_contrast_ratio: Option<f64>,

    /// Map of check_id -> config.
    #[serde(default)]
    pub checks: BTreeMap<String, CheckConfig>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CheckConfig {
    /// Override preset enable/disable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}
