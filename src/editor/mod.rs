//! Route editing subsystem.
//!
//! # Data Flow
//! ```text
//! session.rs (load API + catalog concurrently)
//!     → controller.rs (draft + field cascades)
//!         → derived.rs (placeholders, methods, visibility, suggestions)
//!         → draft.rs / validation.rs (finalize into a Route)
//!     → submit.rs (deferred callback | merge + save + navigate)
//! ```
//!
//! # Design Decisions
//! - One controller per editing session, owned by the host
//! - Only loading and submitting suspend; every field edit is synchronous
//! - Failures become values the host renders; nothing panics

pub mod controller;
pub mod derived;
pub mod draft;
pub mod session;
pub mod submit;
pub mod validation;

pub use controller::RouteFormController;
pub use derived::{AutocompleteContext, DerivedState};
pub use draft::RouteDraft;
pub use session::{open_deferred, open_immediate, LoadError};
pub use submit::{NavigationSignal, SubmitError, SubmitMode, SubmitOutcome};
pub use validation::{Field, FieldError, ValidationErrors};
