//! The `explain` use case: remediation guidance for a check id or finding code.

use brandguard_types::explain::{
    all_check_ids, check_for_code, codes_for_check, lookup_explanation, Explanation,
};
use serde_json::Value;

/// Guidance for `identifier`, or `None` when it is neither a check id nor a code.
pub fn run_explain(identifier: &str) -> Option<String> {
    let exp = lookup_explanation(identifier)?;
    Some(format_explanation(identifier, &exp))
}

/// Render an explanation with the check/code relationship and both example canvases.
pub fn format_explanation(identifier: &str, exp: &Explanation) -> String {
    let heading = format!("{} ({identifier})", exp.title);
    let mut out = format!("{heading}\n{}\n\n{}\n\n", "=".repeat(heading.len()), exp.description);

    let codes = codes_for_check(identifier);
    if !codes.is_empty() {
        out.push_str(&format!("Emits: {}\n\n", codes.join(", ")));
    } else if let Some(check_id) = check_for_code(identifier) {
        out.push_str(&format!("Emitted by: {check_id}\n\n"));
    }

    out.push_str(&format!("How to fix:\n{}\n\n", exp.remediation));
    out.push_str(&format!("Flagged:\n```json\n{}\n```\n\n", pretty(exp.examples.before)));
    out.push_str(&format!("Passes:\n```json\n{}\n```\n", pretty(exp.examples.after)));
    out
}

/// Message for an unknown identifier, listing every check with the codes it emits.
pub fn format_not_found(identifier: &str) -> String {
    let mut out = format!("Unknown check id or finding code: {identifier}\n\nKnown checks:\n");
    for check_id in all_check_ids() {
        out.push_str(&format!(
            "  {check_id}: {}\n",
            codes_for_check(check_id).join(", ")
        ));
    }
    out
}

fn pretty(example: &str) -> String {
    serde_json::from_str::<Value>(example)
        .and_then(|value| serde_json::to_string_pretty(&value))
        .unwrap_or_else(|_| example.to_string())
}
