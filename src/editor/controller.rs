//! Route form controller.
//!
//! # Responsibilities
//! - Own the draft route for the lifetime of one editing session
//! - Apply field edits and their cascades
//! - Hydrate the draft from an existing route
//! - Finalize the draft into a route
//!
//! # Field cascades
//! ```text
//! path            → path placeholders
//! binding type    → allowed methods → method reset → field visibility
//! component name  → version reset → version list → suggestions
//! component ver.  → suggestions
//! ```
//!
//! # Design Decisions
//! - Edits mutate the draft only; everything else is re-derived from it
//! - No edit suspends; each one runs to completion
//! - Submission lives in `submit.rs`

use std::sync::Arc;

use crate::config::{EditorConfig, EditorSettings};
use crate::editor::derived::{AutocompleteContext, DerivedState};
use crate::editor::draft::RouteDraft;
use crate::editor::submit::SubmitMode;
use crate::editor::validation::ValidationErrors;
use crate::model::{BindingType, ComponentCatalog, CorsPreflight, Method, Route, RouteKey};
use crate::observability::metrics;
use crate::routing::path_template::ParsedPathParams;
use crate::routing::policy::{reconcile_method, FieldVisibility};
use crate::suggest::resolver::SuggestionSet;

pub struct RouteFormController {
    pub(crate) draft: RouteDraft,
    /// Identity of the route being edited; `None` when creating.
    pub(crate) original_key: Option<RouteKey>,
    pub(crate) catalog: Arc<ComponentCatalog>,
    pub(crate) settings: EditorSettings,
    pub(crate) derived: DerivedState,
    pub(crate) mode: SubmitMode,
    /// Revision of the API document as of the last load or save.
    pub(crate) loaded_revision: Option<u64>,
    pub(crate) metrics_enabled: bool,
}

impl RouteFormController {
    /// Controller with an empty draft.
    pub fn new(catalog: Arc<ComponentCatalog>, config: &EditorConfig, mode: SubmitMode) -> Self {
        let draft = RouteDraft::new(config.editor.default_binding_type);
        let derived = DerivedState::derive(&draft, &catalog);
        Self {
            draft,
            original_key: None,
            catalog,
            settings: config.editor.clone(),
            derived,
            mode,
            loaded_revision: None,
            metrics_enabled: config.observability.metrics_enabled,
        }
    }

    /// Populate the draft from the route at `key`, if there is one.
    ///
    /// Suggestions for the route's component are resolved before this
    /// returns. Returns whether a route was found.
    pub fn hydrate(&mut self, routes: &[Route], key: &RouteKey) -> bool {
        match routes.iter().find(|r| r.has_key(key)) {
            Some(route) => {
                self.draft = RouteDraft::from_route(route);
                self.original_key = Some(key.clone());
                self.rederive();
                tracing::debug!(
                    route = %key,
                    suggestions = self.derived.suggestions.len(),
                    "Draft hydrated from existing route"
                );
                true
            }
            None => {
                tracing::info!(route = %key, "Route to edit not found, starting from defaults");
                false
            }
        }
    }

    pub fn set_path(&mut self, path: impl Into<String>) {
        self.draft.path = path.into();
        self.rederive();
    }

    pub fn set_method(&mut self, method: Method) {
        self.draft.method = Some(method);
        self.rederive();
    }

    /// Switch binding type, resetting the method if it is no longer allowed.
    ///
    /// Entering CORS preflight seeds an empty response with the default
    /// payload; leaving it drops a response that is still a CORS payload.
    pub fn set_binding_type(&mut self, binding_type: BindingType) {
        let previous = self.draft.method;
        let leaving_cors = self.draft.binding_type == BindingType::CorsPreflight
            && binding_type != BindingType::CorsPreflight;
        self.draft.binding_type = binding_type;
        self.draft.method = reconcile_method(binding_type, previous);
        if previous != self.draft.method {
            tracing::debug!(
                binding_type = %binding_type,
                from = ?previous,
                to = ?self.draft.method,
                "Method reset for binding type"
            );
        }
        if binding_type == BindingType::CorsPreflight && self.draft.response.trim().is_empty() {
            self.draft.response = CorsPreflight::default().encode();
        } else if leaving_cors && CorsPreflight::decode(&self.draft.response).is_ok() {
            self.draft.response.clear();
        }
        self.rederive();
    }

    /// Select a component (or none). The version falls back to the default.
    pub fn set_component_name(&mut self, name: Option<String>) {
        self.draft.component_name = name;
        self.draft.component_version = self.settings.default_component_version;
        self.rederive();
        self.record_resolution();
    }

    pub fn set_component_version(&mut self, version: u64) {
        self.draft.component_version = version;
        self.rederive();
        self.record_resolution();
    }

    pub fn set_worker_name(&mut self, worker_name: impl Into<String>) {
        self.draft.worker_name = worker_name.into();
    }

    pub fn set_response(&mut self, response: impl Into<String>) {
        self.draft.response = response.into();
    }

    pub fn set_idempotency_key(&mut self, key: impl Into<String>) {
        self.draft.idempotency_key = key.into();
    }

    pub fn set_cors(&mut self, cors: Option<serde_json::Value>) {
        self.draft.cors = cors;
    }

    pub fn set_security(&mut self, security: Option<serde_json::Value>) {
        self.draft.security = security;
    }

    /// Validate the draft and build the route it describes.
    pub fn finalize(&self) -> Result<Route, ValidationErrors> {
        let result = self.draft.finalize(&self.catalog);
        if let Err(errors) = &result {
            tracing::debug!(errors = %errors, "Draft rejected");
            if self.metrics_enabled {
                metrics::record_validation_failure(errors.errors().len());
            }
        }
        result
    }

    /// Drop the draft and start over with an empty one.
    pub fn reset(&mut self) {
        self.draft = RouteDraft::new(self.settings.default_binding_type);
        self.original_key = None;
        self.rederive();
    }

    pub fn draft(&self) -> &RouteDraft {
        &self.draft
    }

    pub fn original_key(&self) -> Option<&RouteKey> {
        self.original_key.as_ref()
    }

    pub fn is_editing(&self) -> bool {
        self.original_key.is_some()
    }

    /// Revision of the stored API this session last loaded or saved.
    pub fn loaded_revision(&self) -> Option<u64> {
        self.loaded_revision
    }

    pub fn mode(&self) -> &SubmitMode {
        &self.mode
    }

    pub fn catalog(&self) -> &ComponentCatalog {
        &self.catalog
    }

    pub fn allowed_methods(&self) -> &[Method] {
        &self.derived.allowed_methods
    }

    pub fn visibility(&self) -> FieldVisibility {
        self.derived.visibility
    }

    pub fn path_params(&self) -> &ParsedPathParams {
        &self.derived.path_params
    }

    pub fn versions(&self) -> &[u64] {
        &self.derived.versions
    }

    pub fn suggestions(&self) -> &SuggestionSet {
        &self.derived.suggestions
    }

    pub fn autocomplete(&self) -> AutocompleteContext<'_> {
        AutocompleteContext::new(&self.derived, &self.settings.example_expressions)
    }

    pub(crate) fn rederive(&mut self) {
        self.derived = DerivedState::derive(&self.draft, &self.catalog);
    }

    fn record_resolution(&self) {
        if self.metrics_enabled && self.draft.component_name.is_some() {
            metrics::record_suggestions(!self.derived.suggestions.is_empty());
        }
    }
}
