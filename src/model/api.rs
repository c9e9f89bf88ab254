//! API definition document.

use serde::{Deserialize, Serialize};

use crate::model::route::{Route, RouteKey};

/// An API definition: a named, versioned collection of routes.
///
/// Written back whole on every save. `revision` is bumped by the store on
/// each accepted write so readers can tell whether someone else wrote in
/// between; it is not a lock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Api {
    pub id: String,
    pub name: String,
    pub version: String,

    #[serde(default)]
    pub routes: Vec<Route>,

    #[serde(default)]
    pub revision: u64,

    #[serde(default)]
    pub draft: bool,
}

impl Api {
    pub fn new(id: impl Into<String>, name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            version: version.into(),
            routes: Vec::new(),
            revision: 0,
            draft: true,
        }
    }

    pub fn find_route(&self, key: &RouteKey) -> Option<&Route> {
        self.routes.iter().find(|r| r.has_key(key))
    }
}
