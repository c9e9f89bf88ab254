//! Function-call suggestions from component export metadata.
//!
//! # Responsibilities
//! - Find a component version in the catalog by display name + version
//! - Render every exported function as `interface.{function}(p: type, ..)`
//!
//! # Design Decisions
//! - Lookup misses are not errors; they produce an empty set
//! - Version text is normalized before it is compared
//! - Catalog order is preserved at every level

use crate::model::catalog::{normalize_version, ComponentCatalog, ExportedFunction};
use crate::suggest::types::short_type_name;

/// Ordered function-call signatures for the response editor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuggestionSet {
    items: Vec<String>,
}

impl SuggestionSet {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.items
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn into_vec(self) -> Vec<String> {
        self.items
    }
}

impl FromIterator<String> for SuggestionSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

/// Resolve suggestions for a component version given as text.
pub fn resolve(catalog: &ComponentCatalog, component_name: &str, version: &str) -> SuggestionSet {
    match normalize_version(version) {
        Some(v) => resolve_version(catalog, component_name, v),
        None => {
            tracing::debug!(
                component = %component_name,
                version = %version,
                "Unparseable component version, no suggestions"
            );
            SuggestionSet::empty()
        }
    }
}

/// Resolve suggestions for a component version.
pub fn resolve_version(catalog: &ComponentCatalog, component_name: &str, version: u64) -> SuggestionSet {
    let Some(entry) = catalog
        .find_by_name(component_name)
        .and_then(|c| c.find_version(version))
    else {
        tracing::debug!(
            component = %component_name,
            version,
            "Component version not in catalog, no suggestions"
        );
        return SuggestionSet::empty();
    };

    let suggestions: SuggestionSet = entry
        .exports
        .iter()
        .flat_map(|interface| {
            interface
                .functions
                .iter()
                .map(move |function| render_signature(&interface.name, function))
        })
        .collect();

    tracing::debug!(
        component = %component_name,
        version,
        count = suggestions.len(),
        "Resolved function suggestions"
    );
    suggestions
}

/// `interface.{function}(p1: t1, p2: t2)`
pub fn render_signature(interface: &str, function: &ExportedFunction) -> String {
    let params: Vec<String> = function
        .parameters
        .iter()
        .map(|p| format!("{}: {}", p.name, short_type_name(&p.typ)))
        .collect();
    format!("{}.{{{}}}({})", interface, function.name, params.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::catalog::{
        ComponentEntry, ComponentVersionEntry, ExportedInterface, FunctionParameter, ValueType,
    };

    fn function(name: &str, params: Vec<(&str, ValueType)>) -> ExportedFunction {
        ExportedFunction {
            name: name.to_string(),
            parameters: params
                .into_iter()
                .map(|(name, typ)| FunctionParameter {
                    name: name.to_string(),
                    typ,
                })
                .collect(),
        }
    }

    fn cart_catalog() -> ComponentCatalog {
        ComponentCatalog::new(vec![ComponentEntry {
            id: "c-cart".into(),
            name: "cart".into(),
            versions: vec![
                ComponentVersionEntry {
                    version: 1,
                    exports: vec![],
                },
                ComponentVersionEntry {
                    version: 2,
                    exports: vec![ExportedInterface {
                        name: "api".into(),
                        functions: vec![function(
                            "checkout",
                            vec![(
                                "items",
                                ValueType::List {
                                    inner: Box::new(ValueType::Str),
                                },
                            )],
                        )],
                    }],
                },
            ],
        }])
    }

    #[test]
    fn test_resolve_cart_checkout() {
        let suggestions = resolve(&cart_catalog(), "cart", "2");
        assert_eq!(
            suggestions.as_slice(),
            ["api.{checkout}(items: list<string>)".to_string()]
        );
    }

    #[test]
    fn test_resolve_tolerates_version_formatting() {
        assert_eq!(resolve(&cart_catalog(), "cart", " 02 ").len(), 1);
        assert_eq!(resolve(&cart_catalog(), "cart", "2.0").len(), 1);
        assert!(resolve(&cart_catalog(), "cart", "two").is_empty());
    }

    #[test]
    fn test_lookup_misses_are_empty() {
        assert!(resolve(&cart_catalog(), "unknown", "2").is_empty());
        assert!(resolve(&cart_catalog(), "cart", "9").is_empty());
        assert!(resolve(&cart_catalog(), "cart", "1").is_empty());
        assert!(resolve(&ComponentCatalog::default(), "cart", "2").is_empty());
    }

    #[test]
    fn test_order_is_preserved() {
        let mut catalog = cart_catalog();
        catalog.components[0].versions[1].exports = vec![
            ExportedInterface {
                name: "api".into(),
                functions: vec![
                    function("add", vec![("sku", ValueType::Str), ("qty", ValueType::U32)]),
                    function("clear", vec![]),
                ],
            },
            ExportedInterface {
                name: "admin".into(),
                functions: vec![function("purge", vec![("older-than", ValueType::U64)])],
            },
        ];
        let suggestions = resolve_version(&catalog, "cart", 2);
        assert_eq!(
            suggestions.into_vec(),
            vec![
                "api.{add}(sku: string, qty: u32)".to_string(),
                "api.{clear}()".to_string(),
                "admin.{purge}(older-than: u64)".to_string(),
            ]
        );
    }
}
