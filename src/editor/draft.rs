//! The editable route draft.
//!
//! # Responsibilities
//! - Hold every form field as the user sees it (text, not structure)
//! - Hydrate from an existing route
//! - Finalize into a validated [`Route`]
//!
//! # Design Decisions
//! - The CORS-preflight payload is edited as text; `from_route` encodes it
//!   and `finalize` strictly decodes it again
//! - Finalizing never mutates the draft

use crate::editor::validation::{
    check_interpolation, check_path_template, Field, FieldError, ValidationErrors,
};
use crate::model::{
    Binding, BindingType, ComponentCatalog, ComponentRef, CorsPreflight, Method, Route,
};
use crate::routing::policy::{methods_for, reconcile_method};

#[derive(Debug, Clone, PartialEq)]
pub struct RouteDraft {
    pub path: String,
    pub method: Option<Method>,
    pub binding_type: BindingType,
    pub component_name: Option<String>,
    pub component_version: u64,
    pub worker_name: String,
    /// Response expression, or the encoded CORS payload for CORS preflight.
    pub response: String,
    /// Empty means no idempotency key.
    pub idempotency_key: String,
    pub cors: Option<serde_json::Value>,
    pub security: Option<serde_json::Value>,
}

impl RouteDraft {
    /// Empty draft for a new route.
    pub fn new(binding_type: BindingType) -> Self {
        let mut draft = Self {
            path: String::new(),
            method: reconcile_method(binding_type, None),
            binding_type,
            component_name: None,
            component_version: 0,
            worker_name: String::new(),
            response: String::new(),
            idempotency_key: String::new(),
            cors: None,
            security: None,
        };
        if binding_type == BindingType::CorsPreflight {
            draft.response = CorsPreflight::default().encode();
        }
        draft
    }

    /// Draft populated from an existing route.
    pub fn from_route(route: &Route) -> Self {
        let binding = &route.binding;
        let response = match (&binding.binding_type, &binding.cors_preflight) {
            (BindingType::CorsPreflight, Some(cors)) => cors.encode(),
            _ => binding.response.clone(),
        };
        let (component_name, component_version) = match &binding.component {
            Some(c) => (Some(c.name.clone()), c.version),
            None => (None, 0),
        };

        Self {
            path: route.path.clone(),
            method: route
                .method
                .or_else(|| reconcile_method(binding.binding_type, None)),
            binding_type: binding.binding_type,
            component_name,
            component_version,
            worker_name: binding.worker_name.clone(),
            response,
            idempotency_key: binding.idempotency_key.clone().unwrap_or_default(),
            cors: route.cors.clone(),
            security: route.security.clone(),
        }
    }

    /// Validate every field and build the route.
    pub fn finalize(&self, catalog: &ComponentCatalog) -> Result<Route, ValidationErrors> {
        let mut errors = Vec::new();

        if let Err(msg) = check_path_template(&self.path) {
            errors.push(FieldError::new(Field::Path, msg));
        }

        let allowed = methods_for(self.binding_type);
        match self.method {
            None if !allowed.is_empty() => {
                errors.push(FieldError::new(Field::Method, "method is required"));
            }
            Some(m) if !allowed.contains(&m) => {
                errors.push(FieldError::new(
                    Field::Method,
                    format!("{} is not allowed for binding type {}", m, self.binding_type),
                ));
            }
            _ => {}
        }

        let component = self.component_ref(catalog, &mut errors);

        let cors_preflight = self.binding_type == BindingType::CorsPreflight;
        if !cors_preflight {
            if self.worker_name.trim().is_empty() {
                errors.push(FieldError::new(Field::WorkerName, "worker name is required"));
            } else if let Err(msg) = check_interpolation(&self.worker_name) {
                errors.push(FieldError::new(Field::WorkerName, msg));
            }
        }

        let mut decoded_cors = None;
        if cors_preflight {
            match CorsPreflight::decode(&self.response) {
                Ok(cors) => decoded_cors = Some(cors),
                Err(e) => errors.push(FieldError::new(Field::Response, e.to_string())),
            }
        } else if self.response.trim().is_empty() {
            if self.binding_type != BindingType::HttpHandler {
                errors.push(FieldError::new(Field::Response, "response is required"));
            }
        } else if let Err(msg) = check_interpolation(&self.response) {
            errors.push(FieldError::new(Field::Response, msg));
        }

        if let Err(msg) = check_interpolation(&self.idempotency_key) {
            errors.push(FieldError::new(Field::IdempotencyKey, msg));
        }

        if !errors.is_empty() {
            return Err(ValidationErrors(errors));
        }

        let response = match &decoded_cors {
            Some(cors) => cors.encode(),
            None => self.response.clone(),
        };
        let idempotency_key = Some(self.idempotency_key.trim())
            .filter(|k| !k.is_empty())
            .map(str::to_string);

        Ok(Route {
            path: self.path.clone(),
            method: if allowed.is_empty() { None } else { self.method },
            binding: Binding {
                binding_type: self.binding_type,
                component,
                worker_name: if cors_preflight {
                    String::new()
                } else {
                    self.worker_name.clone()
                },
                response,
                idempotency_key,
                cors_preflight: decoded_cors,
            },
            cors: self.cors.clone(),
            security: self.security.clone(),
        })
    }

    fn component_ref(
        &self,
        catalog: &ComponentCatalog,
        errors: &mut Vec<FieldError>,
    ) -> Option<ComponentRef> {
        let name = self.component_name.as_ref()?;
        match catalog.find_by_name(name) {
            None => {
                errors.push(FieldError::new(
                    Field::Component,
                    format!("unknown component '{}'", name),
                ));
            }
            Some(entry) if !entry.has_version(self.component_version) => {
                errors.push(FieldError::new(
                    Field::ComponentVersion,
                    format!(
                        "version {} is not published for component '{}'",
                        self.component_version, name
                    ),
                ));
            }
            Some(_) => {}
        }
        Some(ComponentRef {
            name: name.clone(),
            version: self.component_version,
        })
    }
}
