//! Field-scoped validation of a route draft.
//!
//! # Design Decisions
//! - Every failing field is reported, not just the first
//! - Errors are values attached to a field; nothing here panics or logs
//! - Expression checks are syntactic only (balanced `${…}`); meaning is
//!   the gateway's business

use std::fmt;

use thiserror::Error;

/// Editable fields of the route form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Path,
    Method,
    BindingType,
    Component,
    ComponentVersion,
    WorkerName,
    Response,
    IdempotencyKey,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Path => "path",
            Field::Method => "method",
            Field::BindingType => "bindingType",
            Field::Component => "component",
            Field::ComponentVersion => "component.version",
            Field::WorkerName => "workerName",
            Field::Response => "response",
            Field::IdempotencyKey => "idempotencyKey",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct FieldError {
    pub field: Field,
    pub message: String,
}

impl FieldError {
    pub fn new(field: Field, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// All field errors found in one validation pass.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{} invalid field(s): {}", .0.len(), join(.0))]
pub struct ValidationErrors(pub Vec<FieldError>);

fn join(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl ValidationErrors {
    pub fn errors(&self) -> &[FieldError] {
        &self.0
    }

    pub fn for_field(&self, field: Field) -> impl Iterator<Item = &FieldError> {
        self.0.iter().filter(move |e| e.field == field)
    }

    pub fn has(&self, field: Field) -> bool {
        self.for_field(field).next().is_some()
    }
}

/// Check that every `${` opens an interpolation that is closed.
///
/// Braces nest inside an interpolation; double-quoted string literals are
/// skipped so braces inside them do not count.
pub fn check_interpolation(text: &str) -> Result<(), String> {
    let bytes = text.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'$' && bytes.get(i + 1) == Some(&b'{') {
            let start = i;
            i += 2;
            let body_start = i;
            let mut depth = 1usize;
            let mut in_string = false;
            while i < bytes.len() && depth > 0 {
                match (in_string, bytes[i]) {
                    (true, b'\\') => i += 1,
                    (true, b'"') => in_string = false,
                    (false, b'"') => in_string = true,
                    (false, b'{') => depth += 1,
                    (false, b'}') => depth -= 1,
                    _ => {}
                }
                i += 1;
            }
            if depth > 0 {
                return Err(format!("unterminated interpolation at offset {}", start));
            }
            if text[body_start..i - 1].trim().is_empty() {
                return Err(format!("empty interpolation at offset {}", start));
            }
        } else {
            i += 1;
        }
    }
    Ok(())
}

/// Syntactic checks on a path template.
pub fn check_path_template(path: &str) -> Result<(), String> {
    if path.is_empty() {
        return Err("path is required".to_string());
    }
    if !path.starts_with('/') {
        return Err("path must start with '/'".to_string());
    }
    if path.chars().any(char::is_whitespace) {
        return Err("path must not contain whitespace".to_string());
    }
    let mut open: Option<usize> = None;
    for (idx, c) in path.char_indices() {
        match (c, open) {
            ('{', None) => open = Some(idx),
            ('{', Some(_)) => return Err(format!("nested '{{' at offset {}", idx)),
            ('}', None) => return Err(format!("unmatched '}}' at offset {}", idx)),
            ('}', Some(start)) if idx == start + 1 => {
                return Err(format!("empty placeholder at offset {}", start))
            }
            ('}', Some(_)) => open = None,
            _ => {}
        }
    }
    match open {
        Some(start) => Err(format!("unclosed '{{' at offset {}", start)),
        None => Ok(()),
    }
}
