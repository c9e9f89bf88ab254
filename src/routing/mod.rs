//! Route-level rules.
//!
//! # Data Flow
//! ```text
//! Path edit
//!     → path_template.rs (placeholders for autocomplete)
//!
//! Binding type edit
//!     → policy.rs (allowed methods, field visibility, method reset)
//!
//! Submit
//!     → reconcile.rs (old collection + candidate + original key
//!                     → new collection)
//! ```
//!
//! # Design Decisions
//! - Everything here is pure and synchronous
//! - Deterministic: same input always yields the same output
//! - (method, path) is the only identity a route has

pub mod path_template;
pub mod policy;
pub mod reconcile;

pub use path_template::{parse, ParsedPathParams};
pub use policy::{allowed_methods, FieldVisibility};
