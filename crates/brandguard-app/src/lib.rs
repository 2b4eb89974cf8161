//! Use case orchestration for brandguard.
//!
//! This crate provides the application layer: use cases that coordinate the settings and
//! domain crates. It is thin and delegates the evaluation itself to the domain.
//!
//! The CLI crate depends on this; it only handles argument parsing and I/O.

#![forbid(unsafe_code)]

mod check;
mod explain;
mod payload;
mod render;

pub use check::{report_exit_code, run_check, CheckInput, CheckOutput};
pub use explain::{format_explanation, format_not_found, run_explain};
pub use payload::{parse_canvas_json, parse_payload_json, parse_request_json, CheckRequest};
pub use render::{render_markdown, report_schema, serialize_report};
