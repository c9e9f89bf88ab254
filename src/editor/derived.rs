//! State derived from the draft.
//!
//! Recomputed wholesale after every field change; never patched in place
//! and never stored anywhere but the controller.

use crate::config::ExampleExpression;
use crate::editor::draft::RouteDraft;
use crate::model::{ComponentCatalog, Method};
use crate::routing::path_template::{self, ParsedPathParams};
use crate::routing::policy::{methods_for, FieldVisibility};
use crate::suggest::resolver::{resolve_version, SuggestionSet};

#[derive(Debug, Clone, PartialEq)]
pub struct DerivedState {
    pub path_params: ParsedPathParams,
    pub allowed_methods: Vec<Method>,
    pub visibility: FieldVisibility,
    /// Versions published for the selected component.
    pub versions: Vec<u64>,
    pub suggestions: SuggestionSet,
}

impl DerivedState {
    /// Pure function of the draft and the catalog.
    pub fn derive(draft: &RouteDraft, catalog: &ComponentCatalog) -> Self {
        let (versions, suggestions) = match &draft.component_name {
            Some(name) => (
                catalog
                    .find_by_name(name)
                    .map(|c| c.version_list())
                    .unwrap_or_default(),
                resolve_version(catalog, name, draft.component_version),
            ),
            None => (Vec::new(), SuggestionSet::empty()),
        };

        Self {
            path_params: path_template::parse(&draft.path),
            allowed_methods: methods_for(draft.binding_type).to_vec(),
            visibility: FieldVisibility::for_binding(draft.binding_type),
            versions,
            suggestions,
        }
    }
}

/// What the expression editors can offer while typing.
#[derive(Debug, Clone, PartialEq)]
pub struct AutocompleteContext<'a> {
    /// `request.path.<name>` for every path placeholder.
    pub path_variables: Vec<String>,
    /// `request.query.<name>` for every query placeholder.
    pub query_variables: Vec<String>,
    pub functions: &'a [String],
    pub examples: &'a [ExampleExpression],
}

impl<'a> AutocompleteContext<'a> {
    pub fn new(derived: &'a DerivedState, examples: &'a [ExampleExpression]) -> Self {
        Self {
            path_variables: derived
                .path_params
                .path_params
                .keys()
                .map(|name| format!("request.path.{}", name))
                .collect(),
            query_variables: derived
                .path_params
                .query_params
                .values()
                .map(|name| format!("request.query.{}", name))
                .collect(),
            functions: derived.suggestions.as_slice(),
            examples,
        }
    }
}
