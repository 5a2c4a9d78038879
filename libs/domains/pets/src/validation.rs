//! Field-level request validation
//!
//! Validation never touches storage and never fails: problems come back as a
//! [`FieldErrors`] map keyed by the camelCase JSON field name. An empty map
//! means the request is valid.

use std::borrow::Cow;
use std::collections::BTreeMap;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::models::{CreatePet, UpdatePet};

/// Field name to ordered error messages
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// Rejects empty and whitespace-only strings.
pub fn required(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("required")
            .with_message(Cow::Borrowed("This field is required.")));
    }
    Ok(())
}

/// Accepts only `http`, `https` and `ftp` URLs; `url` checks the rest.
pub fn web_scheme(value: &str) -> Result<(), ValidationError> {
    let scheme = value.split_once(':').map(|(scheme, _)| scheme.to_ascii_lowercase());
    match scheme.as_deref() {
        Some("http" | "https" | "ftp") => Ok(()),
        _ => Err(ValidationError::new("web_scheme")
            .with_message(Cow::Borrowed("URL scheme must be http, https or ftp."))),
    }
}

/// Check every field of a create request.
pub fn validate_create(input: &CreatePet) -> FieldErrors {
    input.validate().map(|_| FieldErrors::new()).unwrap_or_else(collect)
}

/// Check only the fields an update request carries.
pub fn validate_update(input: &UpdatePet) -> FieldErrors {
    input.validate().map(|_| FieldErrors::new()).unwrap_or_else(collect)
}

fn collect(errors: ValidationErrors) -> FieldErrors {
    let mut out = FieldErrors::new();
    for (field, errs) in errors.field_errors() {
        let messages = out.entry(camel_case(field.as_ref())).or_default();
        messages.extend(errs.iter().map(|e| match &e.message {
            Some(message) => message.to_string(),
            None => format!("Invalid value ({})", e.code),
        }));
    }
    out
}

fn camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper = false;
    for c in field.chars() {
        if c == '_' {
            upper = true;
        } else if upper {
            out.extend(c.to_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }
    out
}
