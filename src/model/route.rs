//! Route and binding types.
//!
//! # Responsibilities
//! - Define the route record owned by an API's route collection
//! - Define the binding that dispatches a route to a worker
//! - Provide the (method, path) identity used for uniqueness

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::cors::CorsPreflight;

/// HTTP verbs a route can be bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
    Patch,
    Head,
    Options,
    Trace,
    Connect,
}

impl Method {
    /// Every method, in declaration order.
    pub const ALL: [Method; 9] = [
        Method::Get,
        Method::Post,
        Method::Put,
        Method::Delete,
        Method::Patch,
        Method::Head,
        Method::Options,
        Method::Trace,
        Method::Connect,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "Get",
            Method::Post => "Post",
            Method::Put => "Put",
            Method::Delete => "Delete",
            Method::Patch => "Patch",
            Method::Head => "Head",
            Method::Options => "Options",
            Method::Trace => "Trace",
            Method::Connect => "Connect",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for unknown enumeration text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind}: '{value}'")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

impl FromStr for Method {
    type Err = UnknownVariant;

    /// Case-insensitive, so both `GET` and `Get` parse.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Method::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownVariant {
                kind: "method",
                value: s.to_string(),
            })
    }
}

/// How a route resolves to a backend action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BindingType {
    /// Dispatches to a worker and renders a response expression.
    #[default]
    Default,
    /// Answers CORS preflight requests without touching a worker.
    CorsPreflight,
    /// Serves files from a component's file system.
    FileServer,
    /// Hands the raw request to a component's HTTP handler export.
    HttpHandler,
}

impl BindingType {
    pub const ALL: [BindingType; 4] = [
        BindingType::Default,
        BindingType::CorsPreflight,
        BindingType::FileServer,
        BindingType::HttpHandler,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BindingType::Default => "default",
            BindingType::CorsPreflight => "cors-preflight",
            BindingType::FileServer => "file-server",
            BindingType::HttpHandler => "http-handler",
        }
    }
}

impl fmt::Display for BindingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BindingType {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BindingType::ALL
            .into_iter()
            .find(|b| b.as_str() == s)
            .ok_or_else(|| UnknownVariant {
                kind: "binding type",
                value: s.to_string(),
            })
    }
}

/// Reference to a deployed component version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentRef {
    /// Display name of the component.
    pub name: String,
    /// Published version number.
    pub version: u64,
}

/// Binding configuration of a single route.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Binding {
    pub binding_type: BindingType,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component: Option<ComponentRef>,

    /// Expression naming the worker instance.
    #[serde(default)]
    pub worker_name: String,

    /// Expression producing the HTTP response.
    #[serde(default)]
    pub response: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub idempotency_key: Option<String>,

    /// Structured payload, only meaningful for [`BindingType::CorsPreflight`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cors_preflight: Option<CorsPreflight>,
}

/// One gateway route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Route {
    pub path: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<Method>,

    pub binding: Binding,

    /// Passed through untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cors: Option<serde_json::Value>,

    /// Passed through untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub security: Option<serde_json::Value>,
}

impl Route {
    /// The (method, path) identity of this route.
    pub fn key(&self) -> RouteKey {
        RouteKey {
            path: self.path.clone(),
            method: self.method,
        }
    }

    pub fn has_key(&self, key: &RouteKey) -> bool {
        self.method == key.method && self.path == key.path
    }
}

/// Identity of a route inside one API's collection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RouteKey {
    pub path: String,
    pub method: Option<Method>,
}

impl RouteKey {
    pub fn new(path: impl Into<String>, method: Option<Method>) -> Self {
        Self {
            path: path.into(),
            method,
        }
    }
}

impl fmt::Display for RouteKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.method {
            Some(m) => write!(f, "{} {}", m, self.path),
            None => write!(f, "* {}", self.path),
        }
    }
}
