//! Request body checks shared by the resource handlers.
//!
//! Create routes reject the first declared field that is missing or null
//! (empty strings and zero are accepted). A few routes use the stricter
//! truthy check instead. Update routes need at least one truthy field and
//! then forward every declared field that is present, falsy values included.

use serde_json::{Map, Value};

use crate::database::{Assignments, ColumnKind, Param};
use crate::error::ApiError;

/// A writable column and how body values are bound to it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: ColumnKind,
}

impl FieldSpec {
    pub const fn text(name: &'static str) -> Self {
        Self { name, kind: ColumnKind::Text }
    }

    pub const fn integer(name: &'static str) -> Self {
        Self { name, kind: ColumnKind::Integer }
    }
}

/// JavaScript-style truthiness of a JSON value
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Every field must be present and non-null; the first offender is reported.
pub fn require_fields(
    body: &Map<String, Value>,
    fields: &[FieldSpec],
) -> Result<Assignments, ApiError> {
    check_fields(body, fields, |v| !v.is_null())
}

/// Like [`require_fields`] but also rejects empty strings, zero and `false`.
pub fn require_truthy_fields(
    body: &Map<String, Value>,
    fields: &[FieldSpec],
) -> Result<Assignments, ApiError> {
    check_fields(body, fields, is_truthy)
}

fn check_fields(
    body: &Map<String, Value>,
    fields: &[FieldSpec],
    accept: impl Fn(&Value) -> bool,
) -> Result<Assignments, ApiError> {
    let mut values = Vec::with_capacity(fields.len());
    for field in fields {
        match body.get(field.name) {
            Some(value) if accept(value) => {
                values.push((field.name, Param::from_json(value, field.kind)))
            }
            _ => {
                tracing::error!("'{}' is required", field.name);
                return Err(ApiError::bad_request(format!(
                    "Missing '{}' in request body",
                    field.name
                )));
            }
        }
    }
    Ok(values)
}

/// Fields for a partial update. Rejects bodies with no truthy updatable field;
/// unknown keys are ignored.
pub fn partial_update(
    body: &Map<String, Value>,
    fields: &[FieldSpec],
) -> Result<Assignments, ApiError> {
    let truthy = fields
        .iter()
        .filter(|f| body.get(f.name).map_or(false, is_truthy))
        .count();

    if truthy == 0 {
        tracing::error!("Invalid update without required fields");
        return Err(ApiError::bad_request(update_required_message(fields)));
    }

    Ok(fields
        .iter()
        .filter_map(|f| body.get(f.name).map(|v| (f.name, Param::from_json(v, f.kind))))
        .collect())
}

/// "Request body must contain either 'a', 'b', or 'c'"
pub fn update_required_message(fields: &[FieldSpec]) -> String {
    let quoted: Vec<String> = fields.iter().map(|f| format!("'{}'", f.name)).collect();
    let list = match quoted.as_slice() {
        [] => String::new(),
        [only] => only.clone(),
        [first, second] => format!("either {} or {}", first, second),
        [init @ .., last] => format!("either {}, or {}", init.join(", "), last),
    };
    format!("Request body must contain {}", list)
}
