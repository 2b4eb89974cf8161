//! The `check` use case: resolve guidelines, evaluate the canvas, produce a report.

use anyhow::Context;
use brandguard_domain::policy::{is_known_check_id, EffectiveGuidelines};
use brandguard_settings::{GuidelinesConfigV1, Overrides, ResolvedConfig};
use brandguard_types::ComplianceReport;

use crate::payload;

/// Input for the check use case.
#[derive(Clone, Debug)]
pub struct CheckInput<'a> {
    /// Canvas payload: a bare canvas or a `{ canvasState, guidelines }` request.
    pub payload_text: &'a str,
    /// Config file contents (empty string if not found).
    pub config_text: &'a str,
    /// CLI overrides.
    pub overrides: Overrides,
}

/// Output from the check use case.
#[derive(Clone, Debug)]
pub struct CheckOutput {
    /// The generated report.
    pub report: ComplianceReport,
    /// The resolved configuration used.
    pub resolved_config: ResolvedConfig,
    /// Guidelines the engine actually applied (configuration plus request guidelines).
    pub guidelines: EffectiveGuidelines,
}

/// Run the check use case: parse config, decode the payload, evaluate, produce report.
pub fn run_check(input: CheckInput<'_>) -> anyhow::Result<CheckOutput> {
    // Parse config (empty is allowed, defaults apply).
    let cfg = if input.config_text.trim().is_empty() {
        GuidelinesConfigV1::default()
    } else {
        brandguard_settings::parse_config_toml(input.config_text).context("parse config")?
    };

    if let Some(profile) = input.overrides.profile.as_deref().or(cfg.profile.as_deref()) {
        if !brandguard_settings::known_profiles().contains(&profile) {
            tracing::warn!(
                profile,
                known = ?brandguard_settings::known_profiles(),
                "unknown profile; using the default profile"
            );
        }
    }

    let resolved_config = brandguard_settings::resolve_config(cfg, input.overrides.clone())
        .context("resolve config")?;

    let request = payload::parse_payload_json(input.payload_text).context("read payload")?;

    for check_id in &request.guidelines.disabled_checks {
        if !is_known_check_id(check_id) {
            tracing::warn!(check_id = %check_id, "ignoring unknown check id in disabledChecks");
        }
    }

    let merged = resolved_config
        .guidelines
        .clone()
        .overlay(&request.guidelines);
    let guidelines = EffectiveGuidelines::resolve(&merged);

    tracing::debug!(
        profile = %resolved_config.profile,
        elements = request.canvas_state.elements.len(),
        "running compliance check"
    );

    let report = brandguard_domain::evaluate_effective(&request.canvas_state, &guidelines);

    tracing::info!(
        score = report.score,
        violations = report.violations.len(),
        warnings = report.warnings.len(),
        compliant = report.is_compliant,
        "compliance check finished"
    );

    Ok(CheckOutput {
        report,
        resolved_config,
        guidelines,
    })
}

/// Map a report to an exit code: 0 = compliant, 2 = not compliant.
pub fn report_exit_code(report: &ComplianceReport) -> i32 {
    if report.is_compliant {
        0
    } else {
        2
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use brandguard_types::ids;

    const TIDY_CANVAS: &str = r#"{
        "width": 1080,
        "height": 1080,
        "elements": [
            { "type": "image", "x": 100, "y": 100, "width": 400, "height": 400 },
            { "type": "text", "x": 100, "y": 600, "width": 400, "height": 100 }
        ]
    }"#;

    fn input<'a>(payload_text: &'a str, config_text: &'a str) -> CheckInput<'a> {
        CheckInput {
            payload_text,
            config_text,
            overrides: Overrides::default(),
        }
    }

    #[test]
    fn empty_config_uses_defaults() {
        let output = run_check(input(TIDY_CANVAS, "")).expect("run check");
        assert_eq!(output.resolved_config.profile, "default");
        assert_eq!(output.guidelines, EffectiveGuidelines::default());
        assert_eq!(output.report.score, 100);
        assert!(output.report.is_compliant);
    }

    #[test]
    fn request_guidelines_layer_over_config() {
        let payload = r#"{
            "canvasState": {
                "elements": [
                    { "type": "image", "x": 15, "y": 100, "width": 400, "height": 400 },
                    { "type": "text", "x": 100, "y": 600, "width": 400, "height": 100 }
                ]
            },
            "guidelines": { "safeZoneMargin": 10 }
        }"#;
        let config = "profile = \"strict\"\n";

        let output = run_check(input(payload, config)).expect("run check");
        assert_eq!(output.guidelines.safe_zone_margin, 10.0);
        assert_eq!(output.guidelines.min_logo_size, 2500.0);
        assert!(!output.report.has_code(ids::CODE_SAFE_ZONE_VIOLATION));
    }

    #[test]
    fn config_can_disable_checks() {
        let payload = r#"{ "elements": [ { "type": "text", "x": 0, "y": 0, "width": 10, "height": 10 } ] }"#;
        let config = "[checks.\"canvas.safe_zone\"]\nenabled = false\n";

        let output = run_check(input(payload, config)).expect("run check");
        assert!(!output.report.has_code(ids::CODE_SAFE_ZONE_VIOLATION));
        assert!(output.report.has_code(ids::CODE_NO_PRODUCT_IMAGE));
    }

    #[test]
    fn overrides_reach_the_engine() {
        let output = run_check(CheckInput {
            payload_text: TIDY_CANVAS,
            config_text: "",
            overrides: Overrides {
                max_text_coverage: Some(1.0),
                ..Overrides::default()
            },
        })
        .expect("run check");
        assert!(output.report.has_code(ids::CODE_TEXT_COVERAGE));
        assert_eq!(report_exit_code(&output.report), 2);
    }

    #[test]
    fn malformed_elements_still_produce_a_report() {
        let payload = r#"{
            "elements": [
                null,
                { "type": "image", "x": 100, "y": 100, "width": 400, "height": 400, "data": "hero" },
                { "type": "text", "x": 100, "y": 600, "width": 400, "height": 100 }
            ]
        }"#;

        let output = run_check(input(payload, "")).expect("run check");
        assert_eq!(output.report.score, 100);
        assert!(output.report.is_compliant);
    }

    #[test]
    fn misspelled_profile_falls_back_to_default() {
        let output = run_check(CheckInput {
            payload_text: TIDY_CANVAS,
            config_text: "",
            overrides: Overrides {
                profile: Some("strictt".to_string()),
                ..Overrides::default()
            },
        })
        .expect("run check");
        assert_eq!(output.resolved_config.profile, "default");
        assert_eq!(output.guidelines, EffectiveGuidelines::default());
    }

    #[test]
    fn invalid_config_is_an_error_with_context() {
        let err = run_check(input(TIDY_CANVAS, "min_logo_size = -5\n")).expect_err("bad config");
        assert!(format!("{err:#}").contains("resolve config"));

        let err = run_check(input(TIDY_CANVAS, "profile = [")).expect_err("bad toml");
        assert!(format!("{err:#}").contains("parse config"));
    }

    #[test]
    fn unreadable_payload_is_an_error() {
        let err = run_check(input("[]", "")).expect_err("bad payload");
        assert!(format!("{err:#}").contains("read payload"));
    }

    #[test]
    fn report_exit_codes() {
        let mut report = ComplianceReport::fallback();
        assert_eq!(report_exit_code(&report), 2);
        report.is_compliant = true;
        assert_eq!(report_exit_code(&report), 0);
    }
}
