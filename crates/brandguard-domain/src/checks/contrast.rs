use crate::color::{contrast_ratio, parse_hex};
use crate::model::{CanvasState, ElementKind};
use crate::policy::EffectiveGuidelines;
use brandguard_types::{ids, Finding, Severity};

const DEFAULT_BACKGROUND: &str = "#ffffff";
const DEFAULT_TEXT_COLOR: &str = "#000000";

pub fn run(canvas: &CanvasState, cfg: &EffectiveGuidelines, out: &mut Vec<Finding>) {
    if !cfg.is_enabled(ids::CHECK_CANVAS_CONTRAST) {
        return;
    }
    let Some(min_ratio) = cfg.min_contrast_ratio else {
        return;
    };

    let background_hex = canvas
        .background_color
        .as_deref()
        .unwrap_or(DEFAULT_BACKGROUND);
    let Some(background) = parse_hex(background_hex) else {
        tracing::debug!(background = background_hex, "unparseable background colour");
        return;
    };

    for (index, element) in canvas.elements.iter().enumerate() {
        if element.kind != ElementKind::Text {
            continue;
        }
        let Some(color) = parse_hex(element.color().unwrap_or(DEFAULT_TEXT_COLOR)) else {
            continue;
        };

        let ratio = contrast_ratio(color, background);
        if ratio < min_ratio {
            out.push(Finding::new(
                ids::CODE_LOW_CONTRAST,
                Severity::Info,
                format!(
                    "Text element {} has contrast ratio {ratio:.1}:1",
                    element.label(index)
                ),
                format!("Increase contrast to at least {min_ratio}:1 for accessibility."),
            ));
        }
    }
}
