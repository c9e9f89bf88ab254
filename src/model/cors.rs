//! Structured CORS-preflight payload.
//!
//! The response editor only deals in text, so the structured value is
//! encoded to text for editing and strictly decoded back on save.
//! `decode(&encode(x)) == x` for every value.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Headers answered to a CORS preflight request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CorsPreflight {
    pub allow_origin: String,
    pub allow_methods: String,
    pub allow_headers: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expose_headers: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_age: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_credentials: Option<bool>,
}

impl Default for CorsPreflight {
    fn default() -> Self {
        Self {
            allow_origin: "*".to_string(),
            allow_methods: "GET, POST, PUT, DELETE, OPTIONS".to_string(),
            allow_headers: "Content-Type, Authorization".to_string(),
            expose_headers: None,
            max_age: None,
            allow_credentials: None,
        }
    }
}

/// Edited text no longer describes a CORS-preflight payload.
#[derive(Debug, Error)]
pub enum CorsDecodeError {
    #[error("invalid CORS preflight payload: {0}")]
    Syntax(#[from] serde_json::Error),

    #[error("CORS preflight field '{0}' must not be empty")]
    EmptyField(&'static str),
}

impl CorsPreflight {
    /// Render as editable text.
    pub fn encode(&self) -> String {
        // Plain struct of strings and scalars; serialization cannot fail.
        serde_json::to_string_pretty(self).unwrap_or_default()
    }

    /// Parse edited text back into a structured value.
    pub fn decode(text: &str) -> Result<Self, CorsDecodeError> {
        let value: CorsPreflight = serde_json::from_str(text.trim())?;
        if value.allow_origin.trim().is_empty() {
            return Err(CorsDecodeError::EmptyField("allowOrigin"));
        }
        if value.allow_methods.trim().is_empty() {
            return Err(CorsDecodeError::EmptyField("allowMethods"));
        }
        Ok(value)
    }
}
