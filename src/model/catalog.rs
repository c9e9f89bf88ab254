//! Component catalog and export metadata.
//!
//! Read-only to the editor. The host owns the catalog and refreshes it;
//! the editor only looks things up by display name and version.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Every component the editor can bind a route to.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComponentCatalog {
    #[serde(default)]
    pub components: Vec<ComponentEntry>,
}

/// One component with all its published versions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentEntry {
    /// Stable identifier.
    pub id: String,
    /// Display name, used for lookups.
    pub name: String,
    #[serde(default)]
    pub versions: Vec<ComponentVersionEntry>,
}

/// Export metadata of one component version.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentVersionEntry {
    #[serde(deserialize_with = "deserialize_version")]
    pub version: u64,
    #[serde(default)]
    pub exports: Vec<ExportedInterface>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportedInterface {
    pub name: String,
    #[serde(default)]
    pub functions: Vec<ExportedFunction>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportedFunction {
    pub name: String,
    #[serde(default)]
    pub parameters: Vec<FunctionParameter>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionParameter {
    pub name: String,
    #[serde(rename = "type")]
    pub typ: ValueType,
}

/// WIT value types as they appear in export metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValueType {
    Bool,
    S8,
    U8,
    S16,
    U16,
    S32,
    U32,
    S64,
    U64,
    F32,
    F64,
    Chr,
    Str,
    List { inner: Box<ValueType> },
    Option { inner: Box<ValueType> },
    Result {
        #[serde(default)]
        ok: Option<Box<ValueType>>,
        #[serde(default)]
        err: Option<Box<ValueType>>,
    },
    Tuple { items: Vec<ValueType> },
    Record { fields: Vec<NamedType> },
    Variant { cases: Vec<VariantCase> },
    Enum { cases: Vec<String> },
    Flags { names: Vec<String> },
    Handle { resource: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedType {
    pub name: String,
    #[serde(rename = "type")]
    pub typ: ValueType,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariantCase {
    pub name: String,
    #[serde(default, rename = "type")]
    pub typ: Option<ValueType>,
}

impl ComponentCatalog {
    pub fn new(components: Vec<ComponentEntry>) -> Self {
        Self { components }
    }

    /// First entry whose display name equals `name`.
    pub fn find_by_name(&self, name: &str) -> Option<&ComponentEntry> {
        self.components.iter().find(|c| c.name == name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.components.iter().map(|c| c.name.as_str())
    }
}

impl ComponentEntry {
    pub fn find_version(&self, version: u64) -> Option<&ComponentVersionEntry> {
        self.versions.iter().find(|v| v.version == version)
    }

    /// Published versions in catalog order.
    pub fn version_list(&self) -> Vec<u64> {
        self.versions.iter().map(|v| v.version).collect()
    }

    pub fn has_version(&self, version: u64) -> bool {
        self.find_version(version).is_some()
    }
}

/// Normalize a version given as text.
///
/// Accepts `"2"`, `" 2 "`, `"02"`, `"+2"` and integral decimals like `"2.0"`.
pub fn normalize_version(text: &str) -> Option<u64> {
    let text = text.trim();
    if let Ok(v) = text.parse::<u64>() {
        return Some(v);
    }
    let f = text.parse::<f64>().ok()?;
    if f.is_finite() && f >= 0.0 && f.fract() == 0.0 && f <= u64::MAX as f64 {
        Some(f as u64)
    } else {
        None
    }
}

fn deserialize_version<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawVersion {
        Number(u64),
        Text(String),
    }

    match RawVersion::deserialize(deserializer)? {
        RawVersion::Number(v) => Ok(v),
        RawVersion::Text(s) => normalize_version(&s)
            .ok_or_else(|| D::Error::custom(format!("invalid component version '{}'", s))),
    }
}
