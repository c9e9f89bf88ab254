//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.
//! Every field has a default, so an empty file is a valid configuration.

use serde::{Deserialize, Serialize};

use crate::model::BindingType;

/// Root configuration for the route editor.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct EditorConfig {
    /// Route form behaviour.
    pub editor: EditorSettings,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Route form behaviour.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct EditorSettings {
    /// Binding type of a freshly created route.
    pub default_binding_type: BindingType,

    /// Version selected when the component changes.
    pub default_component_version: u64,

    /// Fail an immediate submit that would overwrite an unrelated route.
    /// When off, the reconciler silently drops the overwritten route.
    pub reject_conflicting_routes: bool,

    /// Example interpolation expressions shown next to the editors.
    pub example_expressions: Vec<ExampleExpression>,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            default_binding_type: BindingType::Default,
            default_component_version: 0,
            reject_conflicting_routes: true,
            example_expressions: Vec::new(),
        }
    }
}

/// One entry of the example expression table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ExampleExpression {
    /// Short label (e.g., "Path parameter").
    pub label: String,

    /// The expression itself (e.g., "${request.path.id}").
    pub expression: String,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Log output format (pretty, json).
    pub log_format: String,

    /// Record editor metrics through the `metrics` facade.
    pub metrics_enabled: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: "pretty".to_string(),
            metrics_enabled: true,
        }
    }
}
