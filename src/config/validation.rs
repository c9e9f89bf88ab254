//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate enumerated string settings
//! - Check that example expressions are well formed
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: EditorConfig → Result<(), Vec<ValidationError>>

use thiserror::Error;

use crate::config::schema::EditorConfig;
use crate::editor::validation::check_interpolation;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
const LOG_FORMATS: [&str; 2] = ["pretty", "json"];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("unknown log level '{0}'")]
    LogLevel(String),

    #[error("unknown log format '{0}'")]
    LogFormat(String),

    #[error("example expression '{label}': {reason}")]
    ExampleExpression { label: String, reason: String },
}

pub fn validate_config(config: &EditorConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let level = config.observability.log_level.to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ValidationError::LogLevel(config.observability.log_level.clone()));
    }

    if !LOG_FORMATS.contains(&config.observability.log_format.as_str()) {
        errors.push(ValidationError::LogFormat(config.observability.log_format.clone()));
    }

    for example in &config.editor.example_expressions {
        if let Err(reason) = check_interpolation(&example.expression) {
            errors.push(ValidationError::ExampleExpression {
                label: example.label.clone(),
                reason,
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::ExampleExpression;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&EditorConfig::default()).is_ok());
    }

    #[test]
    fn test_log_level_is_case_insensitive() {
        let mut config = EditorConfig::default();
        config.observability.log_level = "DEBUG".into();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_broken_example_expression() {
        let mut config = EditorConfig::default();
        config.editor.example_expressions.push(ExampleExpression {
            label: "Broken".into(),
            expression: "${request.path.id".into(),
        });
        let errors = validate_config(&config).unwrap_err();
        assert!(matches!(
            &errors[0],
            ValidationError::ExampleExpression { label, .. } if label == "Broken"
        ));
    }
}
