//! Caller-supplied adapter parameters.
//!
//! Parameters arrive from up to three places, in increasing priority:
//! declared defaults (applied later by the normalizer), a structured params
//! file, and explicit CLI flags. A params file is a JSON or TOML document
//! whose top-level keys are the adapter's CLI parameter names:
//!
//! ```toml
//! method = "distance"
//! distance = 500
//! coordinate_csv = """
//! -13.763611,-43.595833
//! -17.25355,-44.885825
//! """
//! ```
//!
//! Nested values (e.g. a GeoJSON object for `coordinate_geojson`) are kept as
//! serialized JSON text.

use std::collections::BTreeMap;
use std::path::Path;

use serde_json::Value;

use crate::error::{ConfigError, Result};
use crate::types::{AdapterConfig, InputSource};

/// Parameters keyed by CLI name, as text.
///
/// File parameters that went through [`RawArgs::stage_files`] also keep the
/// file's exact bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawArgs {
    values: BTreeMap<String, String>,
    staged: BTreeMap<String, Vec<u8>>,
}

impl RawArgs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a parameter, replacing any previous value.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }

    /// Set a parameter only if a value is present.
    pub fn set_opt(&mut self, name: impl Into<String>, value: Option<impl Into<String>>) {
        if let Some(v) = value {
            self.set(name, v);
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Exact bytes of a staged file parameter.
    pub fn staged(&self, name: &str) -> Option<&[u8]> {
        self.staged.get(name).map(Vec::as_slice)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Layer `other` on top of `self` (`other` takes priority).
    pub fn merge(&mut self, other: RawArgs) {
        self.values.extend(other.values);
        self.staged.extend(other.staged);
    }

    /// Reject parameters the adapter does not declare.
    pub fn validate_for(&self, adapter: &AdapterConfig) -> Result<()> {
        match self.values.keys().find(|name| !adapter.accepts(name)) {
            Some(name) => Err(ConfigError::UnknownParameter {
                name: name.clone(),
                adapter: adapter.name.to_string(),
            }),
            None => Ok(()),
        }
    }

    /// Replace each `File` input's path with the text of that file.
    ///
    /// The bytes are kept as read (see [`RawArgs::staged`]). Text that is not
    /// valid UTF-8 is decoded lossily for the request. Absent file parameters
    /// are left absent; the normalizer reports them.
    pub fn stage_files(mut self, adapter: &AdapterConfig) -> Result<Self> {
        for spec in adapter.inputs {
            let InputSource::File { flag } = spec.source else {
                continue;
            };
            let Some(path) = self.values.get(flag) else {
                continue;
            };

            let bytes = std::fs::read(path).map_err(|source| ConfigError::ReadFile {
                path: path.clone(),
                source,
            })?;
            let content = match std::str::from_utf8(&bytes) {
                Ok(text) => text.to_string(),
                Err(_) => {
                    tracing::warn!(parameter = flag, path = %path, "input file is not valid UTF-8, sending it lossily");
                    String::from_utf8_lossy(&bytes).into_owned()
                }
            };
            tracing::debug!(parameter = flag, path = %path, bytes = bytes.len(), "staged input file");
            self.values.insert(flag.to_string(), content);
            self.staged.insert(flag.to_string(), bytes);
        }
        Ok(self)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RawArgs {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
            staged: BTreeMap::new(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Params files
// ─────────────────────────────────────────────────────────────────────────────

/// Load a `.json` or `.toml` params file and check it against the adapter.
pub fn load_params_file(path: &Path, adapter: &AdapterConfig) -> Result<RawArgs> {
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
        path: path.display().to_string(),
        source,
    })?;

    let root: Value = match path.extension().and_then(|e| e.to_str()) {
        Some("json") => serde_json::from_str(&text)?,
        Some("toml") => toml::from_str(&text)?,
        _ => {
            return Err(ConfigError::UnsupportedFormat {
                path: path.display().to_string(),
            });
        }
    };

    let args = params_from_value(root).ok_or_else(|| ConfigError::NotAnObject {
        path: path.display().to_string(),
    })?;
    args.validate_for(adapter)?;

    tracing::debug!(path = %path.display(), count = args.len(), "loaded params file");
    Ok(args)
}

fn params_from_value(root: Value) -> Option<RawArgs> {
    let Value::Object(map) = root else {
        return None;
    };

    Some(
        map.into_iter()
            .filter(|(_, v)| !v.is_null())
            .map(|(k, v)| {
                let text = match v {
                    Value::String(s) => s,
                    other => other.to_string(),
                };
                (k, text)
            })
            .collect(),
    )
}
