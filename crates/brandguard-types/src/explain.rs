//! Explain registry for checks and codes.
//!
//! Maps check IDs and finding codes to human-readable explanations with remediation guidance.

use crate::ids;

/// Explanation entry for a check or code.
#[derive(Debug, Clone)]
pub struct Explanation {
    /// Short description of the check/code.
    pub title: &'static str,
    /// What the check does and why it exists.
    pub description: &'static str,
    /// How to fix findings.
    pub remediation: &'static str,
    /// Before/after canvas examples (JSON).
    pub examples: ExamplePair,
}

/// Before and after canvas examples.
#[derive(Debug, Clone)]
pub struct ExamplePair {
    /// Canvas that would trigger a finding.
    pub before: &'static str,
    /// Canvas that passes the check.
    pub after: &'static str,
}

/// Look up an explanation by check_id or code.
///
/// Returns `None` if the identifier is not recognized.
pub fn lookup_explanation(identifier: &str) -> Option<Explanation> {
    match identifier {
        // Check IDs
        ids::CHECK_CANVAS_PRESENCE => Some(explain_presence()),
        ids::CHECK_CANVAS_TEXT_COVERAGE | ids::CODE_TEXT_COVERAGE => Some(explain_text_coverage()),
        ids::CHECK_CANVAS_LOGO_SIZE | ids::CODE_LOGO_SIZE => Some(explain_logo_size()),
        ids::CHECK_CANVAS_SAFE_ZONE | ids::CODE_SAFE_ZONE_VIOLATION => Some(explain_safe_zone()),
        ids::CHECK_CANVAS_CONTRAST | ids::CODE_LOW_CONTRAST => Some(explain_contrast()),

        // Codes
        ids::CODE_EMPTY_CANVAS => Some(explain_empty_canvas()),
        ids::CODE_NO_PRODUCT_IMAGE => Some(explain_no_product_image()),
        ids::CODE_NO_HEADLINE => Some(explain_no_headline()),
        ids::CODE_TOO_MUCH_TEXT => Some(explain_too_much_text()),

        _ => None,
    }
}

/// List all known check IDs.
pub fn all_check_ids() -> &'static [&'static str] {
    &[
        ids::CHECK_CANVAS_PRESENCE,
        ids::CHECK_CANVAS_TEXT_COVERAGE,
        ids::CHECK_CANVAS_LOGO_SIZE,
        ids::CHECK_CANVAS_SAFE_ZONE,
        ids::CHECK_CANVAS_CONTRAST,
    ]
}

/// List all known codes.
pub fn all_codes() -> &'static [&'static str] {
    &[
        ids::CODE_EMPTY_CANVAS,
        ids::CODE_NO_PRODUCT_IMAGE,
        ids::CODE_NO_HEADLINE,
        ids::CODE_TOO_MUCH_TEXT,
        ids::CODE_TEXT_COVERAGE,
        ids::CODE_LOGO_SIZE,
        ids::CODE_SAFE_ZONE_VIOLATION,
        ids::CODE_LOW_CONTRAST,
    ]
}

/// Finding codes emitted by a check, in emission order. Empty for unknown ids.
pub fn codes_for_check(check_id: &str) -> &'static [&'static str] {
    match check_id {
        ids::CHECK_CANVAS_PRESENCE => &[
            ids::CODE_EMPTY_CANVAS,
            ids::CODE_NO_PRODUCT_IMAGE,
            ids::CODE_NO_HEADLINE,
            ids::CODE_TOO_MUCH_TEXT,
        ],
        ids::CHECK_CANVAS_TEXT_COVERAGE => &[ids::CODE_TEXT_COVERAGE],
        ids::CHECK_CANVAS_LOGO_SIZE => &[ids::CODE_LOGO_SIZE],
        ids::CHECK_CANVAS_SAFE_ZONE => &[ids::CODE_SAFE_ZONE_VIOLATION],
        ids::CHECK_CANVAS_CONTRAST => &[ids::CODE_LOW_CONTRAST],
        _ => &[],
    }
}

/// The check that emits `code`.
pub fn check_for_code(code: &str) -> Option<&'static str> {
    all_check_ids()
        .iter()
        .copied()
        .find(|check_id| codes_for_check(check_id).contains(&code))
}

// --- Check-level explanations ---

fn explain_presence() -> Explanation {
    Explanation {
        title: "Required Elements",
        description: "\
Checks that the creative carries the elements every brand asset needs.

- An empty canvas is a violation (`empty_canvas`).
- A canvas without any `image` element is a violation (`no_product_image`).
- A canvas without any `text` element gets a warning (`no_headline`).
- More than two `text` elements get a warning (`too_much_text`).",
        remediation: "\
Place at least one product image and one or two text blocks (a headline, and
optionally a short supporting line).",
        examples: ExamplePair {
            before: r#"{ "elements": [] }"#,
            after: r#"{ "elements": [
  { "type": "image", "x": 40, "y": 40, "width": 500, "height": 500 },
  { "type": "text",  "x": 40, "y": 600, "width": 400, "height": 100 }
] }"#,
        },
    }
}

fn explain_text_coverage() -> Explanation {
    Explanation {
        title: "Text Coverage",
        description: "\
Sums the area of all `text` elements and compares it with the canvas area.
When the share exceeds `maxTextCoverage` percent (default 20) the creative is
flagged with a `text_coverage` violation.

A canvas with zero area has 0% coverage.",
        remediation: "\
Shorten copy, reduce the font size, or remove secondary text blocks until the
text covers no more than the configured percentage of the canvas.",
        examples: ExamplePair {
            before: r#"{ "width": 1080, "height": 1080, "elements": [
  { "type": "text", "x": 10, "y": 10, "width": 1000, "height": 400 }
] }"#,
            after: r#"{ "width": 1080, "height": 1080, "elements": [
  { "type": "text", "x": 40, "y": 40, "width": 600, "height": 120 }
] }"#,
        },
    }
}

fn explain_logo_size() -> Explanation {
    Explanation {
        title: "Minimum Logo Size",
        description: "\
Finds the first element tagged `data.elementType = \"logo\"` and computes its
area in square pixels. A logo smaller than `minLogoSize` (default 100) gets a
`logo_size` warning. Canvases without a logo are not flagged.",
        remediation: "\
Scale the logo up until its area reaches the configured minimum.",
        examples: ExamplePair {
            before: r#"{ "type": "image", "x": 20, "y": 20, "width": 8, "height": 8,
  "data": { "elementType": "logo" } }"#,
            after: r#"{ "type": "image", "x": 20, "y": 20, "width": 80, "height": 80,
  "data": { "elementType": "logo" } }"#,
        },
    }
}

fn explain_safe_zone() -> Explanation {
    Explanation {
        title: "Safe Zone",
        description: "\
Every element must sit fully inside the canvas inset by `safeZoneMargin`
pixels (default 10) on each side. Each element that crosses the inset yields
one `safe_zone_violation`.

An element exactly on the margin line is inside the safe zone.",
        remediation: "\
Move or shrink the element so that x >= margin, y >= margin,
x + width <= canvasWidth - margin and y + height <= canvasHeight - margin.",
        examples: ExamplePair {
            before: r#"{ "type": "text", "x": 0, "y": 0, "width": 300, "height": 80 }"#,
            after: r#"{ "type": "text", "x": 10, "y": 10, "width": 300, "height": 80 }"#,
        },
    }
}

fn explain_contrast() -> Explanation {
    Explanation {
        title: "Text Contrast",
        description: "\
Advisory check, enabled when `minContrastRatio` is configured. Computes the
WCAG contrast ratio between each text element's `data.color` (default
#000000) and the canvas `backgroundColor` (default #ffffff). Ratios below the
minimum produce a `low_contrast` recommendation. Recommendations do not
change the score.",
        remediation: "\
Darken the text or lighten the background (or the reverse) until the ratio
reaches the configured minimum; 4.5:1 is the WCAG AA level for body text.",
        examples: ExamplePair {
            before: r##"{ "backgroundColor": "#ffffff", "elements": [
  { "type": "text", "data": { "color": "#cccccc" } }
] }"##,
            after: r##"{ "backgroundColor": "#ffffff", "elements": [
  { "type": "text", "data": { "color": "#333333" } }
] }"##,
        },
    }
}

// --- Code-level explanations ---

fn explain_empty_canvas() -> Explanation {
    Explanation {
        title: "Empty Canvas",
        description: "\
The canvas contains no elements at all. An empty canvas also lacks a product
image, so it always carries a `no_product_image` violation too.",
        remediation: "Upload a packshot and add a headline.",
        examples: explain_presence().examples,
    }
}

fn explain_no_product_image() -> Explanation {
    Explanation {
        title: "No Product Image",
        description: "No element of type `image` was found on the canvas.",
        remediation: "Add at least one product image to the creative.",
        examples: ExamplePair {
            before: r#"{ "elements": [
  { "type": "text", "x": 40, "y": 600, "width": 400, "height": 100 }
] }"#,
            after: r#"{ "elements": [
  { "type": "image", "x": 40, "y": 40, "width": 500, "height": 500 },
  { "type": "text",  "x": 40, "y": 600, "width": 400, "height": 100 }
] }"#,
        },
    }
}

fn explain_no_headline() -> Explanation {
    Explanation {
        title: "No Headline",
        description: "No element of type `text` was found on the canvas.",
        remediation: "Add a clear headline to improve communication.",
        examples: ExamplePair {
            before: r#"{ "elements": [
  { "type": "image", "x": 40, "y": 40, "width": 500, "height": 500 }
] }"#,
            after: r#"{ "elements": [
  { "type": "image", "x": 40, "y": 40, "width": 500, "height": 500 },
  { "type": "text",  "x": 40, "y": 600, "width": 400, "height": 100 }
] }"#,
        },
    }
}

fn explain_too_much_text() -> Explanation {
    Explanation {
        title: "Too Much Text",
        description: "\
More than two `text` elements were found. Multiple text blocks tend to make a
creative feel cluttered.",
        remediation: "Reduce the number of text elements to two or fewer.",
        examples: ExamplePair {
            before: r#"{ "elements": [
  { "type": "text" }, { "type": "text" }, { "type": "text" }
] }"#,
            after: r#"{ "elements": [
  { "type": "text" }, { "type": "text" }
] }"#,
        },
    }
}
