use serde_json::{Map, Value};

use crate::utils::AppError;

/// Schema-free user document. Fields keep their insertion order.
pub type UserRecord = Map<String, Value>;

/// Field every user carries; unique across the collection
pub const ID_FIELD: &str = "id";

/// Parse a request body into a user record.
///
/// Bodies may be relaxed JSON (single-quoted strings, unquoted keys,
/// trailing commas). Anything other than an object is malformed input.
pub fn parse_record(json: &str) -> Result<UserRecord, AppError> {
    match json5::from_str::<Value>(json) {
        Ok(Value::Object(record)) => Ok(record),
        Ok(other) => Err(AppError::MalformedInput(format!(
            "Expected a JSON object but got {}",
            json_kind(&other)
        ))),
        Err(e) => Err(AppError::MalformedInput(format!("Invalid JSON: {}", e))),
    }
}

/// The record's `id`, when present as a string
pub fn record_id(record: &UserRecord) -> Option<&str> {
    record.get(ID_FIELD).and_then(Value::as_str)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
