use crate::model::CanvasState;
use crate::policy::EffectiveGuidelines;
use brandguard_types::{ids, Finding, Severity};

/// Area of the first logo-tagged element, in square pixels.
///
/// Only the first `data.elementType == "logo"` element in canvas order is
/// considered. Returns 0 when there is none or its extent is unusable.
pub fn logo_area(canvas: &CanvasState) -> f64 {
    canvas
        .elements
        .iter()
        .find(|e| e.is_logo())
        .and_then(|e| e.area())
        .unwrap_or(0.0)
}

pub fn run(canvas: &CanvasState, cfg: &EffectiveGuidelines, out: &mut Vec<Finding>) {
    if !cfg.is_enabled(ids::CHECK_CANVAS_LOGO_SIZE) {
        return;
    }

    let area = logo_area(canvas);
    if area > 0.0 && area < cfg.min_logo_size {
        out.push(Finding::new(
            ids::CODE_LOGO_SIZE,
            Severity::Warning,
            format!(
                "Logo size {area}px² below minimum ({}px²).",
                cfg.min_logo_size
            ),
            "Increase logo size for better visibility.",
        ));
    }
}
