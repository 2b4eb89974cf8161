use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Maximum percentage of the canvas area text may cover.
pub const DEFAULT_MAX_TEXT_COVERAGE: f64 = 20.0;
/// Minimum logo area in square pixels.
pub const DEFAULT_MIN_LOGO_SIZE: f64 = 100.0;
/// Minimum distance in pixels between every element and each canvas edge.
pub const DEFAULT_SAFE_ZONE_MARGIN: f64 = 10.0;

/// Guideline options as supplied by a caller.
///
/// Every option is optional; absent options take the documented defaults when
/// resolved into [`EffectiveGuidelines`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Guidelines {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_text_coverage: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_logo_size: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub safe_zone_margin: Option<f64>,

    /// Enables the contrast advisory when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_contrast_ratio: Option<f64>,

    /// Check ids (e.g. `canvas.logo_size`) to skip.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub disabled_checks: Vec<String>,
}

impl Guidelines {
    /// Layer `top` over `self`: options set in `top` win, disabled checks accumulate.
    pub fn overlay(mut self, top: &Guidelines) -> Guidelines {
        if top.max_text_coverage.is_some() {
            self.max_text_coverage = top.max_text_coverage;
        }
        if top.min_logo_size.is_some() {
            self.min_logo_size = top.min_logo_size;
        }
        if top.safe_zone_margin.is_some() {
            self.safe_zone_margin = top.safe_zone_margin;
        }
        if top.min_contrast_ratio.is_some() {
            self.min_contrast_ratio = top.min_contrast_ratio;
        }
        for check_id in &top.disabled_checks {
            if !self.disabled_checks.contains(check_id) {
                self.disabled_checks.push(check_id.clone());
            }
        }
        self
    }
}

/// Guidelines with every default applied; what the checks read.
#[derive(Clone, Debug, PartialEq)]
pub struct EffectiveGuidelines {
    pub max_text_coverage: f64,
    pub min_logo_size: f64,
    pub safe_zone_margin: f64,
    pub min_contrast_ratio: Option<f64>,
    pub disabled_checks: BTreeSet<String>,
}

impl Default for EffectiveGuidelines {
    fn default() -> Self {
        Self {
            max_text_coverage: DEFAULT_MAX_TEXT_COVERAGE,
            min_logo_size: DEFAULT_MIN_LOGO_SIZE,
            safe_zone_margin: DEFAULT_SAFE_ZONE_MARGIN,
            min_contrast_ratio: None,
            disabled_checks: BTreeSet::new(),
        }
    }
}

impl EffectiveGuidelines {
    pub fn resolve(guidelines: &Guidelines) -> Self {
        let defaults = Self::default();
        Self {
            max_text_coverage: guidelines
                .max_text_coverage
                .unwrap_or(defaults.max_text_coverage),
            min_logo_size: guidelines.min_logo_size.unwrap_or(defaults.min_logo_size),
            safe_zone_margin: guidelines
                .safe_zone_margin
                .unwrap_or(defaults.safe_zone_margin),
            min_contrast_ratio: guidelines.min_contrast_ratio,
            disabled_checks: guidelines.disabled_checks.iter().cloned().collect(),
        }
    }

    pub fn is_enabled(&self, check_id: &str) -> bool {
        !self.disabled_checks.contains(check_id)
    }

    /// Numeric options paired with their wire names, for validation and display.
    pub fn numeric_options(&self) -> Vec<(&'static str, f64)> {
        let mut options = vec![
            ("maxTextCoverage", self.max_text_coverage),
            ("minLogoSize", self.min_logo_size),
            ("safeZoneMargin", self.safe_zone_margin),
        ];
        if let Some(ratio) = self.min_contrast_ratio {
            options.push(("minContrastRatio", ratio));
        }
        options
    }
}

/// Check ids that can appear in `disabledChecks`.
pub fn known_check_ids() -> &'static [&'static str] {
    brandguard_types::explain::all_check_ids()
}

pub fn is_known_check_id(check_id: &str) -> bool {
    known_check_ids().contains(&check_id)
}
