//! Autocomplete suggestions for the response expression editor.
//!
//! # Data Flow
//! ```text
//! (catalog, component name, version)
//!     → resolver.rs (locate version entry, walk exports)
//!     → types.rs (shorten each parameter type)
//!     → SuggestionSet
//! ```
//!
//! Suggestions are advisory; nothing checks them against the expression.

pub mod resolver;
pub mod types;

pub use resolver::{resolve, resolve_version, SuggestionSet};
pub use types::short_type_name;
