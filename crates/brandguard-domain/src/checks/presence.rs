use crate::model::CanvasState;
use crate::policy::EffectiveGuidelines;
use brandguard_types::{ids, Finding, Severity};

/// More text blocks than this reads as clutter.
const MAX_TEXT_ELEMENTS: usize = 2;

pub fn run(canvas: &CanvasState, cfg: &EffectiveGuidelines, out: &mut Vec<Finding>) {
    if !cfg.is_enabled(ids::CHECK_CANVAS_PRESENCE) {
        return;
    }

    let image_count = canvas.images().count();
    let text_count = canvas.texts().count();

    if canvas.elements.is_empty() {
        out.push(Finding::new(
            ids::CODE_EMPTY_CANVAS,
            Severity::Error,
            "Canvas has no elements. Add product image and text.",
            "Upload a packshot and add a headline.",
        ));
    }

    if image_count == 0 {
        out.push(Finding::new(
            ids::CODE_NO_PRODUCT_IMAGE,
            Severity::Error,
            "No product image found.",
            "Add at least one product image to the creative.",
        ));
    }

    if text_count == 0 {
        out.push(Finding::new(
            ids::CODE_NO_HEADLINE,
            Severity::Warning,
            "No headline text found.",
            "Add a clear headline to improve communication.",
        ));
    }

    if text_count > MAX_TEXT_ELEMENTS {
        out.push(Finding::new(
            ids::CODE_TOO_MUCH_TEXT,
            Severity::Warning,
            format!("There are {text_count} text blocks which may feel cluttered."),
            "Reduce the number of text elements.",
        ));
    }
}
