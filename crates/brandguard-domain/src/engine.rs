use crate::checks;
use crate::model::CanvasState;
use crate::policy::{EffectiveGuidelines, Guidelines};
use crate::report::{assemble, SeverityCounts};
use brandguard_types::{ComplianceReport, Finding};
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use thiserror::Error;

/// Conditions under which no meaningful report can be produced.
///
/// Missing or malformed element fields are not errors; the affected check
/// simply skips that element.
#[derive(Debug, Error, PartialEq)]
pub enum EvaluationError {
    #[error("canvas dimensions must be finite and non-negative, got {width}x{height}")]
    InvalidCanvas { width: f64, height: f64 },

    #[error("guideline {name} must be a finite number, got {value}")]
    InvalidGuideline { name: &'static str, value: f64 },
}

/// Evaluate a canvas against caller guidelines.
///
/// Never fails: when the evaluation cannot be completed the neutral
/// [`ComplianceReport::fallback`] is returned and the cause is logged.
pub fn evaluate(canvas: &CanvasState, guidelines: &Guidelines) -> ComplianceReport {
    evaluate_effective(canvas, &EffectiveGuidelines::resolve(guidelines))
}

/// Like [`evaluate`], for guidelines that are already resolved.
pub fn evaluate_effective(canvas: &CanvasState, cfg: &EffectiveGuidelines) -> ComplianceReport {
    match panic::catch_unwind(AssertUnwindSafe(|| run(canvas, cfg))) {
        Ok(Ok(report)) => report,
        Ok(Err(err)) => {
            tracing::error!(error = %err, "compliance evaluation failed; returning fallback report");
            ComplianceReport::fallback()
        }
        Err(payload) => {
            tracing::error!(
                panic = panic_message(payload.as_ref()),
                "compliance evaluation panicked; returning fallback report"
            );
            ComplianceReport::fallback()
        }
    }
}

/// Evaluate, surfacing the reason when no report can be produced.
pub fn try_evaluate(
    canvas: &CanvasState,
    guidelines: &Guidelines,
) -> Result<ComplianceReport, EvaluationError> {
    run(canvas, &EffectiveGuidelines::resolve(guidelines))
}

fn run(
    canvas: &CanvasState,
    cfg: &EffectiveGuidelines,
) -> Result<ComplianceReport, EvaluationError> {
    validate(canvas, cfg)?;

    tracing::debug!(
        width = canvas.width,
        height = canvas.height,
        elements = canvas.elements.len(),
        "evaluating canvas"
    );

    let mut findings: Vec<Finding> = Vec::new();
    checks::run_all(canvas, cfg, &mut findings);

    let counts = SeverityCounts::from_findings(&findings);
    let report = assemble(findings);

    tracing::debug!(
        score = report.score,
        errors = counts.error,
        warnings = counts.warning,
        info = counts.info,
        "evaluation complete"
    );

    Ok(report)
}

fn validate(canvas: &CanvasState, cfg: &EffectiveGuidelines) -> Result<(), EvaluationError> {
    let dimension_ok = |v: f64| v.is_finite() && v >= 0.0;
    if !dimension_ok(canvas.width) || !dimension_ok(canvas.height) {
        return Err(EvaluationError::InvalidCanvas {
            width: canvas.width,
            height: canvas.height,
        });
    }

    for (name, value) in cfg.numeric_options() {
        if !value.is_finite() {
            return Err(EvaluationError::InvalidGuideline { name, value });
        }
    }

    Ok(())
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(s) = payload.downcast_ref::<&'static str>() {
        s
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.as_str()
    } else {
        "unknown panic payload"
    }
}
