//! Binding type policy.
//!
//! # Responsibilities
//! - Map a binding type to the HTTP methods a route may use
//! - Derive which editor fields are visible for a binding type

use crate::model::{BindingType, Method};

const DEFAULT_METHODS: [Method; 5] = [
    Method::Get,
    Method::Post,
    Method::Put,
    Method::Delete,
    Method::Patch,
];

const CORS_PREFLIGHT_METHODS: [Method; 4] = [
    Method::Options,
    Method::Head,
    Method::Trace,
    Method::Connect,
];

/// Methods allowed for a binding type given as text.
///
/// Unknown binding types allow nothing.
pub fn allowed_methods(binding_type: &str) -> Vec<Method> {
    binding_type
        .parse::<BindingType>()
        .map(|b| methods_for(b).to_vec())
        .unwrap_or_default()
}

/// Methods allowed for a binding type, in presentation order.
pub fn methods_for(binding_type: BindingType) -> &'static [Method] {
    match binding_type {
        BindingType::Default => &DEFAULT_METHODS,
        BindingType::CorsPreflight => &CORS_PREFLIGHT_METHODS,
        BindingType::FileServer | BindingType::HttpHandler => &[],
    }
}

/// Which parts of the route form are shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldVisibility {
    /// The method selector and the path override.
    pub method_and_path: bool,
    pub worker_name: bool,
}

impl FieldVisibility {
    pub fn for_binding(binding_type: BindingType) -> Self {
        Self {
            method_and_path: !methods_for(binding_type).is_empty(),
            worker_name: binding_type != BindingType::CorsPreflight,
        }
    }
}

/// The method a draft should carry after its binding type changed.
///
/// Keeps `current` when still allowed, otherwise falls back to the first
/// allowed method, or `None` when the binding type allows none.
pub fn reconcile_method(binding_type: BindingType, current: Option<Method>) -> Option<Method> {
    let allowed = methods_for(binding_type);
    match current {
        Some(m) if allowed.contains(&m) => Some(m),
        _ => allowed.first().copied(),
    }
}
