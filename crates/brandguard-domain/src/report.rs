use crate::scoring::score;
use brandguard_types::{ComplianceReport, Finding, Severity};

/// Count of findings per severity.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SeverityCounts {
    pub info: usize,
    pub warning: usize,
    pub error: usize,
}

impl SeverityCounts {
    pub fn from_findings(findings: &[Finding]) -> Self {
        let mut counts = SeverityCounts::default();
        for f in findings {
            match f.severity {
                Severity::Info => counts.info += 1,
                Severity::Warning => counts.warning += 1,
                Severity::Error => counts.error += 1,
            }
        }
        counts
    }
}

/// Build the report from findings in check order.
///
/// Each finding goes to the bucket of its severity, keeping relative order, so
/// bucket membership and `is_compliant` cannot disagree with the findings.
pub fn assemble(findings: Vec<Finding>) -> ComplianceReport {
    let mut violations = Vec::new();
    let mut warnings = Vec::new();
    let mut recommendations = Vec::new();

    for f in findings {
        match f.severity {
            Severity::Error => violations.push(f),
            Severity::Warning => warnings.push(f),
            Severity::Info => recommendations.push(f),
        }
    }

    ComplianceReport {
        score: score(violations.len(), warnings.len(), recommendations.len()),
        is_compliant: violations.is_empty(),
        violations,
        warnings,
        recommendations,
    }
}
