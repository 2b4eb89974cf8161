//! Stable identifiers for checks and finding codes.
//!
//! `check_id` is a dotted namespace used to enable or disable a rule. `code` is the
//! snake_case finding `type` consumers match on; it must never change once shipped.

// Checks
pub const CHECK_CANVAS_PRESENCE: &str = "canvas.presence";
pub const CHECK_CANVAS_TEXT_COVERAGE: &str = "canvas.text_coverage";
pub const CHECK_CANVAS_LOGO_SIZE: &str = "canvas.logo_size";
pub const CHECK_CANVAS_SAFE_ZONE: &str = "canvas.safe_zone";
pub const CHECK_CANVAS_CONTRAST: &str = "canvas.contrast";

// Codes: canvas.presence
pub const CODE_EMPTY_CANVAS: &str = "empty_canvas";
pub const CODE_NO_PRODUCT_IMAGE: &str = "no_product_image";
pub const CODE_NO_HEADLINE: &str = "no_headline";
pub const CODE_TOO_MUCH_TEXT: &str = "too_much_text";

// Codes: canvas.text_coverage
pub const CODE_TEXT_COVERAGE: &str = "text_coverage";

// Codes: canvas.logo_size
pub const CODE_LOGO_SIZE: &str = "logo_size";

// Codes: canvas.safe_zone
pub const CODE_SAFE_ZONE_VIOLATION: &str = "safe_zone_violation";

// Codes: canvas.contrast
pub const CODE_LOW_CONTRAST: &str = "low_contrast";
