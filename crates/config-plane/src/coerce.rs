use serde_json::{Number, Value};
use thiserror::Error;

use crate::keys::TypeTag;

#[derive(Debug, Error)]
pub enum CoerceError {
    #[error("not a valid integer: {0}")]
    Int(String),
    #[error("not a valid float: {0}")]
    Float(String),
    #[error("not a valid boolean: {0}")]
    Boolean(String),
    #[error("not valid json: {0}")]
    Json(String),
}

pub fn coerce(value: &Value, tag: TypeTag) -> Result<Value, CoerceError> {
    match tag {
        TypeTag::String => Ok(value.clone()),
        TypeTag::Int => coerce_int(value),
        TypeTag::Float => coerce_float(value),
        TypeTag::Boolean => coerce_boolean(value),
        TypeTag::Json => coerce_json(value),
    }
}

fn coerce_int(value: &Value) -> Result<Value, CoerceError> {
    match value {
        Value::Number(number) if number.is_i64() || number.is_u64() => Ok(value.clone()),
        Value::String(text) => text
            .trim()
            .parse::<i64>()
            .map(Value::from)
            .map_err(|_| CoerceError::Int(text.clone())),
        other => Err(CoerceError::Int(other.to_string())),
    }
}

fn coerce_float(value: &Value) -> Result<Value, CoerceError> {
    match value {
        Value::Number(_) => Ok(value.clone()),
        Value::String(text) => {
            let trimmed = text.trim();
            if let Ok(integer) = trimmed.parse::<i64>() {
                return Ok(Value::from(integer));
            }
            trimmed
                .parse::<f64>()
                .ok()
                .and_then(Number::from_f64)
                .map(Value::Number)
                .ok_or_else(|| CoerceError::Float(text.clone()))
        }
        other => Err(CoerceError::Float(other.to_string())),
    }
}

fn coerce_boolean(value: &Value) -> Result<Value, CoerceError> {
    match value {
        Value::Bool(_) => Ok(value.clone()),
        Value::String(text) => match text.trim().to_lowercase().as_str() {
            "true" | "1" | "yes" => Ok(Value::Bool(true)),
            "false" | "0" | "no" => Ok(Value::Bool(false)),
            _ => Err(CoerceError::Boolean(text.clone())),
        },
        other => Err(CoerceError::Boolean(other.to_string())),
    }
}

fn coerce_json(value: &Value) -> Result<Value, CoerceError> {
    match value {
        Value::Object(_) | Value::Array(_) => Ok(value.clone()),
        Value::String(text) => {
            serde_json::from_str(text).map_err(|_| CoerceError::Json(text.clone()))
        }
        other => Err(CoerceError::Json(other.to_string())),
    }
}
