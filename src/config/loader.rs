//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::EditorConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<EditorConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config = parse_config(&content)?;
    tracing::info!(path = %path.display(), "Configuration loaded");
    Ok(config)
}

/// Parse and validate configuration from TOML text.
pub fn parse_config(content: &str) -> Result<EditorConfig, ConfigError> {
    let config: EditorConfig = toml::from_str(content)?;
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::BindingType;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = parse_config("").unwrap();
        assert_eq!(config.editor.default_binding_type, BindingType::Default);
        assert_eq!(config.editor.default_component_version, 0);
        assert!(config.editor.reject_conflicting_routes);
        assert_eq!(config.observability.log_level, "info");
    }

    #[test]
    fn test_full_file() {
        let toml = r#"
            [editor]
            default_binding_type = "cors-preflight"
            default_component_version = 1
            reject_conflicting_routes = false

            [[editor.example_expressions]]
            label = "Path parameter"
            expression = "${request.path.id}"

            [observability]
            log_level = "debug"
            log_format = "json"
            metrics_enabled = false
        "#;
        let config = parse_config(toml).unwrap();
        assert_eq!(config.editor.default_binding_type, BindingType::CorsPreflight);
        assert_eq!(config.editor.example_expressions.len(), 1);
        assert_eq!(config.observability.log_format, "json");
        assert!(!config.observability.metrics_enabled);
    }

    #[test]
    fn test_unknown_binding_type_is_parse_error() {
        let err = parse_config("[editor]\ndefault_binding_type = \"grpc\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_semantic_errors_are_all_reported() {
        let toml = r#"
            [observability]
            log_level = "loud"
            log_format = "xml"
        "#;
        match parse_config(toml) {
            Err(ConfigError::Validation(errors)) => assert_eq!(errors.len(), 2),
            other => panic!("expected validation errors, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_config(Path::new("/nonexistent/route-binder.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
