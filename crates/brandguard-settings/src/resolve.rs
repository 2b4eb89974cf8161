use crate::{model::GuidelinesConfigV1, presets};
use anyhow::Context;
use brandguard_domain::policy::{is_known_check_id, known_check_ids, Guidelines};

/// Command-line values; they win over the config file.
#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub profile: Option<String>,
    pub max_text_coverage: Option<f64>,
    pub min_logo_size: Option<f64>,
    pub safe_zone_margin: Option<f64>,
    pub min_contrast_ratio: Option<f64>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedConfig {
    pub profile: String,
    /// Fully populated guidelines; request payloads layer on top of these.
    pub guidelines: Guidelines,
}

pub fn resolve_config(
    cfg: GuidelinesConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    // Unknown names resolve to the default preset and are recorded as such.
    let profile = overrides
        .profile
        .clone()
        .or(cfg.profile.clone())
        .filter(|name| presets::known_profiles().contains(&name.as_str()))
        .unwrap_or_else(|| presets::DEFAULT_PROFILE.to_string());

    let mut guidelines = presets::preset(&profile);

    // File values, then command-line values.
    for layer in [file_layer(&cfg), override_layer(&overrides)] {
        validate_numbers(&layer)?;
        guidelines = guidelines.overlay(&layer);
    }

    // per-check toggles
    for (check_id, cc) in cfg.checks.iter() {
        if !is_known_check_id(check_id) {
            anyhow::bail!(
                "unknown check id in [checks]: {check_id} (expected one of {})",
                known_check_ids().join(", ")
            );
        }
        match cc.enabled {
            Some(false) if !guidelines.disabled_checks.contains(check_id) => {
                guidelines.disabled_checks.push(check_id.clone());
            }
            Some(true) => guidelines.disabled_checks.retain(|id| id != check_id),
            _ => {}
        }
    }

    Ok(ResolvedConfig {
        profile,
        guidelines,
    })
}

fn file_layer(cfg: &GuidelinesConfigV1) -> Guidelines {
    Guidelines {
        max_text_coverage: cfg.max_text_coverage,
        min_logo_size: cfg.min_logo_size,
        safe_zone_margin: cfg.safe_zone_margin,
        min_contrast_ratio: cfg.min_contrast_ratio,
        disabled_checks: Vec::new(),
    }
}

fn override_layer(overrides: &Overrides) -> Guidelines {
    Guidelines {
        max_text_coverage: overrides.max_text_coverage,
        min_logo_size: overrides.min_logo_size,
        safe_zone_margin: overrides.safe_zone_margin,
        min_contrast_ratio: overrides.min_contrast_ratio,
        disabled_checks: Vec::new(),
    }
}

fn validate_numbers(layer: &Guidelines) -> anyhow::Result<()> {
    let values = [
        ("max_text_coverage", layer.max_text_coverage),
        ("min_logo_size", layer.min_logo_size),
        ("safe_zone_margin", layer.safe_zone_margin),
        ("min_contrast_ratio", layer.min_contrast_ratio),
    ];
    for (name, value) in values {
        if let Some(v) = value {
            parse_threshold(v).with_context(|| format!("invalid value for {name}"))?;
        }
    }
    Ok(())
}

fn parse_threshold(v: f64) -> anyhow::Result<f64> {
    if !v.is_finite() {
        anyhow::bail!("{v} is not a finite number");
    }
    if v < 0.0 {
        anyhow::bail!("{v} is negative (expected a value >= 0)");
    }
    Ok(v)
}
