use crate::model::CanvasState;
use crate::policy::EffectiveGuidelines;
use brandguard_types::Finding;

mod contrast;
mod logo_size;
mod presence;
mod safe_zone;
mod text_coverage;


pub use logo_size::logo_area;
pub use safe_zone::safe_zone_violations;
pub use text_coverage::text_coverage;

/// Run every enabled check in order. Checks never fail fast: each sees the same input.
pub fn run_all(canvas: &CanvasState, cfg: &EffectiveGuidelines, out: &mut Vec<Finding>) {
    presence::run(canvas, cfg, out);
    text_coverage::run(canvas, cfg, out);
    logo_size::run(canvas, cfg, out);
    safe_zone::run(canvas, cfg, out);
    contrast::run(canvas, cfg, out);
}
