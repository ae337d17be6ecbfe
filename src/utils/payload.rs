// src/utils/payload.rs

use serde_json::Value;

use crate::error::AppError;

/// Reads a required integer field.
///
/// Browser clients often send ids picked from a `<select>` as strings,
/// so a string holding an integer is accepted as well. Floats, booleans
/// and anything else are rejected.
pub fn integer_field(value: Option<&Value>, name: &str) -> Result<i64, AppError> {
    match value {
        None | Some(Value::Null) => Err(AppError::BadRequest(format!("'{}' is required", name))),
        Some(Value::Number(n)) => n
            .as_i64()
            .ok_or_else(|| AppError::BadRequest(format!("'{}' must be an integer", name))),
        Some(Value::String(s)) => s
            .trim()
            .parse::<i64>()
            .map_err(|_| AppError::BadRequest(format!("'{}' must be an integer", name))),
        Some(_) => Err(AppError::BadRequest(format!("'{}' must be an integer", name))),
    }
}

/// Reads a required string field.
pub fn string_field(value: Option<&Value>, name: &str) -> Result<String, AppError> {
    match value {
        None | Some(Value::Null) => Err(AppError::BadRequest(format!("'{}' is required", name))),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(AppError::BadRequest(format!("'{}' must be a string", name))),
    }
}
