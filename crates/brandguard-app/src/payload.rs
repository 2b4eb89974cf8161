//! Decoding of canvas payloads.

use anyhow::Context;
use brandguard_domain::model::CanvasState;
use brandguard_domain::policy::Guidelines;
use serde::Deserialize;
use serde_json::Value;

/// A compliance request: `{ "canvasState": {...}, "guidelines": {...} }`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckRequest {
    pub canvas_state: CanvasState,

    #[serde(default, deserialize_with = "null_as_default")]
    pub guidelines: Guidelines,
}

/// Decode a request envelope. `canvasState` is required; `guidelines` may be omitted.
pub fn parse_request_json(text: &str) -> anyhow::Result<CheckRequest> {
    serde_json::from_str(text).context("decode compliance request")
}

/// Decode a bare canvas document.
pub fn parse_canvas_json(text: &str) -> anyhow::Result<CanvasState> {
    serde_json::from_str(text).context("decode canvas state")
}

/// Decode either shape: an object carrying `canvasState` is a request envelope, any other
/// object is a bare canvas evaluated with no request guidelines.
pub fn parse_payload_json(text: &str) -> anyhow::Result<CheckRequest> {
    let value: Value = serde_json::from_str(text).context("parse payload json")?;
    let Value::Object(map) = &value else {
        anyhow::bail!("payload must be a JSON object, got {}", kind_name(&value));
    };

    if map.contains_key("canvasState") {
        serde_json::from_value(value).context("decode compliance request")
    } else {
        let canvas_state = serde_json::from_value(value).context("decode canvas state")?;
        Ok(CheckRequest {
            canvas_state,
            guidelines: Guidelines::default(),
        })
    }
}

fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn null_as_default<'de, D>(deserializer: D) -> Result<Guidelines, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<Guidelines>::deserialize(deserializer)?.unwrap_or_default())
}
