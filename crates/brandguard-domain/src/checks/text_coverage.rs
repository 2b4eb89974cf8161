use crate::model::CanvasState;
use crate::policy::EffectiveGuidelines;
use brandguard_types::{ids, Finding, Severity};

/// Percentage of the canvas area covered by text elements.
///
/// Text elements without a usable extent add nothing. A canvas with zero (or
/// otherwise non-positive) area has 0% coverage.
pub fn text_coverage(canvas: &CanvasState) -> f64 {
    let canvas_area = canvas.area();
    if canvas_area.is_nan() || canvas_area <= 0.0 {
        return 0.0;
    }
    let text_area: f64 = canvas.texts().filter_map(|e| e.area()).sum();
    text_area / canvas_area * 100.0
}

pub fn run(canvas: &CanvasState, cfg: &EffectiveGuidelines, out: &mut Vec<Finding>) {
    if !cfg.is_enabled(ids::CHECK_CANVAS_TEXT_COVERAGE) {
        return;
    }

    let coverage = text_coverage(canvas);
    tracing::debug!(coverage, max = cfg.max_text_coverage, "text coverage");

    if coverage > cfg.max_text_coverage {
        out.push(Finding::new(
            ids::CODE_TEXT_COVERAGE,
            Severity::Error,
            format!(
                "Text covers {coverage:.1}% (max {}%)",
                cfg.max_text_coverage
            ),
            "Reduce text elements or decrease text size.",
        ));
    }
}
