use crate::model::CanvasState;
use crate::policy::EffectiveGuidelines;
use brandguard_types::{ids, Finding, Severity};

/// One `safe_zone_violation` per element that crosses the inset of `margin`
/// pixels from any canvas edge.
///
/// An element exactly on the margin line is inside. Elements missing a
/// position or extent are skipped.
pub fn safe_zone_violations(canvas: &CanvasState, margin: f64) -> Vec<Finding> {
    let right_limit = canvas.width - margin;
    let bottom_limit = canvas.height - margin;

    canvas
        .elements
        .iter()
        .enumerate()
        .filter_map(|(index, element)| {
            let b = element.bounds()?;
            let outside = b.x < margin
                || b.y < margin
                || b.right() > right_limit
                || b.bottom() > bottom_limit;
            outside.then(|| {
                Finding::new(
                    ids::CODE_SAFE_ZONE_VIOLATION,
                    Severity::Error,
                    format!("Element {} outside safe zone", element.label(index)),
                    format!("Keep {margin}px margin from edges"),
                )
            })
        })
        .collect()
}

pub fn run(canvas: &CanvasState, cfg: &EffectiveGuidelines, out: &mut Vec<Finding>) {
    if !cfg.is_enabled(ids::CHECK_CANVAS_SAFE_ZONE) {
        return;
    }
    out.extend(safe_zone_violations(canvas, cfg.safe_zone_margin));
}
