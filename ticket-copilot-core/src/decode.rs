//! Strict decoding of the processor's loosely-typed result mapping.
//!
//! Every one of the six keys is required. A missing key is reported as
//! [`DecodeError::MissingField`], separately from a key whose value has the
//! wrong shape.

use serde_json::{Map, Value};
use tracing::debug;

use crate::contract::{Intent, TicketResult, TicketStatus};
use crate::error::DecodeError;

/// Decode a JSON value into a [`TicketResult`].
pub fn decode_result(value: Value) -> Result<TicketResult, DecodeError> {
    let mut map = match value {
        Value::Object(map) => map,
        other => return Err(DecodeError::NotAnObject(json_kind(&other))),
    };

    let employee_id = take_string(&mut map, "employee_id")?;
    let intent_raw = take_string(&mut map, "intent")?;
    let intent = intent_raw
        .parse::<Intent>()
        .map_err(|e| DecodeError::InvalidField {
            field: "intent",
            reason: e.to_string(),
        })?;
    let kb_relevance = match take(&mut map, "kb_relevance")? {
        Value::Number(n) => n.as_f64().ok_or_else(|| DecodeError::InvalidField {
            field: "kb_relevance",
            reason: format!("{n} is not representable as f64"),
        })?,
        other => return Err(wrong_type("kb_relevance", "number", &other)),
    };
    let status = TicketStatus::from(take_string(&mut map, "status")?.as_str());
    let message = take_string(&mut map, "message")?;
    let debug_info = take(&mut map, "debug_info")?;

    if !map.is_empty() {
        debug!(extra_keys = ?map.keys().collect::<Vec<_>>(), "Ignoring extra result keys");
    }

    Ok(TicketResult {
        employee_id,
        intent,
        kb_relevance,
        status,
        message,
        debug_info,
    })
}

/// Parse JSON text, then decode it with [`decode_result`].
pub fn decode_result_str(raw: &str) -> Result<TicketResult, DecodeError> {
    let value: Value = serde_json::from_str(raw)?;
    decode_result(value)
}

fn take(map: &mut Map<String, Value>, field: &'static str) -> Result<Value, DecodeError> {
    map.remove(field).ok_or(DecodeError::MissingField(field))
}

fn take_string(map: &mut Map<String, Value>, field: &'static str) -> Result<String, DecodeError> {
    match take(map, field)? {
        Value::String(s) => Ok(s),
        other => Err(wrong_type(field, "string", &other)),
    }
}

fn wrong_type(field: &'static str, expected: &str, got: &Value) -> DecodeError {
    DecodeError::InvalidField {
        field,
        reason: format!("expected {expected}, got {}", json_kind(got)),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
