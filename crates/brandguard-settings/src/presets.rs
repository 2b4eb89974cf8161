use brandguard_domain::policy::{
    Guidelines, DEFAULT_MAX_TEXT_COVERAGE, DEFAULT_MIN_LOGO_SIZE, DEFAULT_SAFE_ZONE_MARGIN,
};

pub const DEFAULT_PROFILE: &str = "default";

/// Profile names accepted by [`preset`].
pub fn known_profiles() -> &'static [&'static str] {
    &[DEFAULT_PROFILE, "strict", "lenient"]
}

/// Preset profiles are opinionated starting points.
///
/// Keep these small and readable. Anything brand-specific belongs in a config file.
pub fn preset(profile: &str) -> Guidelines {
    match profile {
        "strict" => strict_profile(),
        "lenient" => lenient_profile(),
        // default
        _ => default_profile(),
    }
}

fn default_profile() -> Guidelines {
    Guidelines {
        max_text_coverage: Some(DEFAULT_MAX_TEXT_COVERAGE),
        min_logo_size: Some(DEFAULT_MIN_LOGO_SIZE),
        safe_zone_margin: Some(DEFAULT_SAFE_ZONE_MARGIN),
        min_contrast_ratio: None,
        disabled_checks: Vec::new(),
    }
}

fn strict_profile() -> Guidelines {
    // Retail media style: small copy, prominent logo, readable text.
    Guidelines {
        max_text_coverage: Some(15.0),
        min_logo_size: Some(2500.0),
        safe_zone_margin: Some(20.0),
        min_contrast_ratio: Some(4.5),
        disabled_checks: Vec::new(),
    }
}

fn lenient_profile() -> Guidelines {
    Guidelines {
        max_text_coverage: Some(30.0),
        min_logo_size: Some(DEFAULT_MIN_LOGO_SIZE),
        safe_zone_margin: Some(0.0),
        min_contrast_ratio: None,
        disabled_checks: Vec::new(),
    }
}
