//! Render use cases: JSON, Markdown and JSON schema for compliance reports.

use anyhow::Context;
use brandguard_types::{ComplianceReport, Finding, MAX_SCORE};

pub fn serialize_report(report: &ComplianceReport) -> anyhow::Result<Vec<u8>> {
    serde_json::to_vec_pretty(report).context("serialize compliance report")
}

/// Human-readable summary suitable for a PR comment or terminal.
pub fn render_markdown(report: &ComplianceReport) -> String {
    let mut out = String::new();

    out.push_str("# Brand compliance report\n\n");
    let verdict = if report.is_compliant {
        "COMPLIANT"
    } else {
        "NOT COMPLIANT"
    };
    out.push_str(&format!(
        "- Verdict: **{}**\n- Score: {}/{}\n- Findings: {} violation(s), {} warning(s), {} recommendation(s)\n\n",
        verdict,
        report.score,
        MAX_SCORE,
        report.violations.len(),
        report.warnings.len(),
        report.recommendations.len()
    ));

    if report.findings().next().is_none() {
        out.push_str("No findings.\n");
        return out;
    }

    push_section(&mut out, "Violations", &report.violations);
    push_section(&mut out, "Warnings", &report.warnings);
    push_section(&mut out, "Recommendations", &report.recommendations);

    out
}

fn push_section(out: &mut String, heading: &str, findings: &[Finding]) {
    if findings.is_empty() {
        return;
    }
    out.push_str(&format!("## {heading}\n\n"));
    for f in findings {
        out.push_str(&format!(
            "- [{}] `{}`: {}\n",
            f.severity.as_str(),
            f.code,
            f.message
        ));
        if !f.suggestion.is_empty() {
            out.push_str(&format!("  - fix: {}\n", f.suggestion));
        }
    }
    out.push('\n');
}

/// JSON schema of the emitted report.
pub fn report_schema() -> anyhow::Result<String> {
    let schema = schemars::schema_for!(ComplianceReport);
    serde_json::to_string_pretty(&schema).context("serialize report schema")
}

#[cfg(test)]
mod tests {
    use super::*;
    use brandguard_types::{ids, Severity};
    use serde_json::Value;

    fn sample_report() -> ComplianceReport {
        ComplianceReport {
            score: 80,
            violations: vec![Finding::new(
                ids::CODE_NO_PRODUCT_IMAGE,
                Severity::Error,
                "No product image found.",
                "Add at least one product image to the creative.",
            )],
            warnings: vec![Finding::new(
                ids::CODE_NO_HEADLINE,
                Severity::Warning,
                "No headline text found.",
                "Add a headline to communicate the offer.",
            )],
            recommendations: Vec::new(),
            is_compliant: false,
        }
    }

    #[test]
    fn serialized_report_is_pretty_json() {
        let bytes = serialize_report(&sample_report()).expect("serialize");
        let text = String::from_utf8(bytes).expect("utf8");
        assert!(text.contains('\n'));
        let value: Value = serde_json::from_str(&text).expect("parse");
        assert_eq!(value["isCompliant"], Value::Bool(false));
        assert_eq!(value["violations"][0]["type"], "no_product_image");
    }

    #[test]
    fn markdown_lists_each_bucket() {
        let md = render_markdown(&sample_report());
        assert!(md.contains("**NOT COMPLIANT**"));
        assert!(md.contains("Score: 80/100"));
        assert!(md.contains("## Violations"));
        assert!(md.contains("- [error] `no_product_image`: No product image found."));
        assert!(md.contains("- [warning] `no_headline`: No headline text found."));
        assert!(md.contains("## Warnings"));
        assert!(!md.contains("## Recommendations"));
    }

    #[test]
    fn markdown_for_clean_report() {
        let report = ComplianceReport {
            score: 100,
            violations: Vec::new(),
            warnings: Vec::new(),
            recommendations: Vec::new(),
            is_compliant: true,
        };
        let md = render_markdown(&report);
        assert!(md.contains("**COMPLIANT**"));
        assert!(md.ends_with("No findings.\n"));
    }

    #[test]
    fn schema_describes_report_fields() {
        let schema: Value = serde_json::from_str(&report_schema().expect("schema")).expect("json");
        let properties = &schema["properties"];
        for field in ["score", "violations", "warnings", "recommendations", "isCompliant"] {
            assert!(properties.get(field).is_some(), "missing {field}");
        }
    }
}
