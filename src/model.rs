//! Data model for extracted documentation — format-agnostic.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Documentation extracted from a single Jsonnet source file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceDocument {
    /// Base file name without its extension ("lib/foo.libsonnet" → "foo")
    pub name: String,
    pub functions: Vec<FunctionRecord>,
}

/// One parsed `/** ... */` doc block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionRecord {
    pub description: String,
    /// @name
    pub name: String,
    /// @param entries keyed by parameter name
    pub params: BTreeMap<String, String>,
    /// @method entries keyed by method signature
    pub methods: BTreeMap<String, String>,
    /// @return
    #[serde(rename = "return")]
    pub returns: String,
}

impl FunctionRecord {
    pub fn is_empty(&self) -> bool {
        self.description.is_empty()
            && self.name.is_empty()
            && self.params.is_empty()
            && self.methods.is_empty()
            && self.returns.is_empty()
    }
}
