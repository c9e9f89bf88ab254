//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → EditorConfig (validated, immutable)
//!     → handed to each editing session
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; a session keeps the copy it started with
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::EditorConfig;
pub use schema::EditorSettings;
pub use schema::ExampleExpression;
pub use schema::ObservabilityConfig;
