//! Field checks shared by the entity constructors.

use crate::errors::ModelError;

/// Trimmed, non-empty, at most `max_len` characters.
pub fn required(field: &str, value: &str, max_len: usize) -> Result<String, ModelError> {
    let v = value.trim();
    if v.is_empty() {
        return Err(ModelError::Validation(format!("{field} required")));
    }
    if v.chars().count() > max_len {
        return Err(ModelError::Validation(format!("{field} too long (<= {max_len})")));
    }
    Ok(v.to_string())
}

/// Like [`required`] but blank input becomes `None`.
pub fn optional(field: &str, value: Option<&str>, max_len: usize) -> Result<Option<String>, ModelError> {
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(v) => required(field, v, max_len).map(Some),
    }
}

pub fn email(value: &str) -> Result<String, ModelError> {
    let v = required("email", value, 255)?;
    let valid = match v.split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty() && !domain.contains('@'),
        None => false,
    };
    if !valid {
        return Err(ModelError::Validation("invalid email".into()));
    }
    Ok(v)
}

/// Long free-text fields (message, requirements); only non-blank is enforced.
pub fn text(field: &str, value: &str) -> Result<String, ModelError> {
    let v = value.trim();
    if v.is_empty() {
        return Err(ModelError::Validation(format!("{field} required")));
    }
    Ok(v.to_string())
}
