use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Upper bound of the compliance score.
pub const MAX_SCORE: u8 = 100;

/// Score reported when an evaluation could not be completed at all.
pub const FALLBACK_SCORE: u8 = 50;

/// Severity decides which report bucket a finding lands in.
///
/// `error` -> `violations`, `warning` -> `warnings`, `info` -> `recommendations`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

/// One rule outcome.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Finding {
    /// Stable machine-readable identifier (see [`crate::ids`]). Serialized as `type`.
    #[serde(rename = "type")]
    pub code: String,
    pub severity: Severity,
    pub message: String,
    pub suggestion: String,
}

impl Finding {
    pub fn new(
        code: &str,
        severity: Severity,
        message: impl Into<String>,
        suggestion: impl Into<String>,
    ) -> Self {
        Self {
            code: code.to_string(),
            severity,
            message: message.into(),
            suggestion: suggestion.into(),
        }
    }
}

/// The evaluator's output.
///
/// Built by the domain crate from an ordered finding list; `is_compliant` is always
/// `violations.is_empty()` and every finding sits in the bucket of its severity.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceReport {
    pub score: u8,
    pub violations: Vec<Finding>,
    pub warnings: Vec<Finding>,
    /// Advisory findings. They never change `score` or `is_compliant`.
    pub recommendations: Vec<Finding>,
    pub is_compliant: bool,
}

impl ComplianceReport {
    /// Neutral report returned when evaluation could not be completed.
    pub fn fallback() -> Self {
        Self {
            score: FALLBACK_SCORE,
            violations: Vec::new(),
            warnings: Vec::new(),
            recommendations: Vec::new(),
            is_compliant: false,
        }
    }

    pub fn findings(&self) -> impl Iterator<Item = &Finding> {
        self.violations
            .iter()
            .chain(self.warnings.iter())
            .chain(self.recommendations.iter())
    }

    pub fn has_code(&self, code: &str) -> bool {
        self.findings().any(|f| f.code == code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn severity_label_matches_wire_name() {
        for severity in [Severity::Info, Severity::Warning, Severity::Error] {
            assert_eq!(
                serde_json::to_value(severity).expect("serialize severity"),
                json!(severity.as_str())
            );
        }
    }

    #[test]
    fn fallback_is_neutral_and_not_compliant() {
        let report = ComplianceReport::fallback();
        assert_eq!(report.score, 50);
        assert!(report.violations.is_empty());
        assert!(report.warnings.is_empty());
        assert!(report.recommendations.is_empty());
        assert!(!report.is_compliant);
    }

    #[test]
    fn report_serializes_with_consumer_field_names() {
        let report = ComplianceReport {
            score: 85,
            violations: vec![Finding::new(
                "no_product_image",
                Severity::Error,
                "No product image found.",
                "Add at least one product image to the creative.",
            )],
            warnings: Vec::new(),
            recommendations: Vec::new(),
            is_compliant: false,
        };

        let value = serde_json::to_value(&report).expect("serialize report");
        assert_eq!(
            value,
            json!({
                "score": 85,
                "violations": [{
                    "type": "no_product_image",
                    "severity": "error",
                    "message": "No product image found.",
                    "suggestion": "Add at least one product image to the creative."
                }],
                "warnings": [],
                "recommendations": [],
                "isCompliant": false
            })
        );
    }

    #[test]
    fn findings_iterates_all_buckets_in_order() {
        let mut report = ComplianceReport::fallback();
        report.violations.push(Finding::new("a", Severity::Error, "", ""));
        report.warnings.push(Finding::new("b", Severity::Warning, "", ""));
        report
            .recommendations
            .push(Finding::new("c", Severity::Info, "", ""));

        let codes: Vec<&str> = report.findings().map(|f| f.code.as_str()).collect();
        assert_eq!(codes, vec!["a", "b", "c"]);
        assert!(report.has_code("b"));
        assert!(!report.has_code("d"));
    }
}
