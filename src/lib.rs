//! Route binding configuration engine for an API gateway.
//!
//! Defines or edits one HTTP route of an API definition: method + path
//! template bound to a worker invocation, with expressions for the worker
//! name and the response.

pub mod config;
pub mod editor;
pub mod gateway;
pub mod model;
pub mod observability;
pub mod routing;
pub mod suggest;

pub use config::EditorConfig;
pub use editor::{RouteFormController, SubmitMode};
pub use gateway::{GatewayService, InMemoryGateway};
pub use model::{Api, Binding, BindingType, ComponentCatalog, Method, Route, RouteKey};
