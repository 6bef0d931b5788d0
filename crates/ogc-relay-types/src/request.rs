//! The OGC API Processes execution envelope.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::geometry::Geometry;

/// One value in the `inputs` object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum InputValue {
    Boolean(bool),
    Number(serde_json::Number),
    Text(String),
    Geometry(Geometry),
    /// A caller-supplied JSON document, forwarded without re-encoding.
    Document(Value),
}

impl InputValue {
    pub fn text(value: impl Into<String>) -> Self {
        InputValue::Text(value.into())
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            InputValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_geometry(&self) -> Option<&Geometry> {
        match self {
            InputValue::Geometry(g) => Some(g),
            _ => None,
        }
    }

    pub fn as_document(&self) -> Option<&Value> {
        match self {
            InputValue::Document(v) => Some(v),
            _ => None,
        }
    }
}

impl From<Geometry> for InputValue {
    fn from(geometry: Geometry) -> Self {
        InputValue::Geometry(geometry)
    }
}

impl From<bool> for InputValue {
    fn from(value: bool) -> Self {
        InputValue::Boolean(value)
    }
}

/// Body of a `POST /processes/{id}/execution` call.
///
/// Serializes as `{"inputs": {...}}`. Built once per invocation and not
/// mutated afterwards; construct it with [`ExecutionRequest::from_inputs`] or
/// by collecting `(name, value)` pairs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExecutionRequest {
    inputs: BTreeMap<String, InputValue>,
}

impl ExecutionRequest {
    pub fn from_inputs(inputs: BTreeMap<String, InputValue>) -> Self {
        Self { inputs }
    }

    pub fn inputs(&self) -> &BTreeMap<String, InputValue> {
        &self.inputs
    }

    /// Look up an input by its OGC-facing name.
    pub fn get(&self, name: &str) -> Option<&InputValue> {
        self.inputs.get(name)
    }

    pub fn len(&self) -> usize {
        self.inputs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, InputValue)> for ExecutionRequest {
    fn from_iter<I: IntoIterator<Item = (K, InputValue)>>(iter: I) -> Self {
        Self {
            inputs: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}
