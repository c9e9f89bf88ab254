//! Data model shared by every subsystem.
//!
//! # Data Flow
//! ```text
//! Api (whole document, owned by the gateway)
//!     → routes: Vec<Route>
//!         → Route { path, method, binding, cors, security }
//!             → Binding { binding_type, component, worker_name, response, .. }
//!
//! ComponentCatalog (owned by the host, read-only here)
//!     → ComponentEntry { name, versions }
//!         → ComponentVersionEntry { version, exports }
//!             → ExportedInterface → ExportedFunction → FunctionParameter
//! ```
//!
//! # Design Decisions
//! - A route's identity is its (method, path) pair, see [`RouteKey`]
//! - Versions are `u64` everywhere; text input is normalized before use
//! - `cors` and `security` on a route are opaque pass-through values

pub mod api;
pub mod catalog;
pub mod cors;
pub mod route;

pub use api::Api;
pub use catalog::{ComponentCatalog, ComponentEntry, ComponentVersionEntry, ValueType};
pub use cors::CorsPreflight;
pub use route::{Binding, BindingType, ComponentRef, Method, Route, RouteKey};
