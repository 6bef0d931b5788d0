//! Adapter definition types.
//!
//! An adapter binds one OGC process to a fixed input schema:
//! ```text
//! snap-to-network
//!   process  = snap-to-network
//!   inputs   = method (text), distance (number), accumulation (number),
//!              coordinate_multipoint (geometry from coordinate_csv | coordinate_geojson)
//!   output   = response JSON
//! ```
//! All of it is `'static` data; nothing here is derived from runtime state.

use std::fmt;

// ─────────────────────────────────────────────────────────────────────────────
// Adapter
// ─────────────────────────────────────────────────────────────────────────────

/// Static description of one adapter.
#[derive(Debug, Clone, Copy)]
pub struct AdapterConfig {
    /// CLI-facing adapter name (the subcommand).
    pub name: &'static str,
    /// Process path segment in `/processes/{process}/execution`.
    pub process: &'static str,
    /// One-line description for help output.
    pub summary: &'static str,
    /// Declared inputs, in request order.
    pub inputs: &'static [InputSpec],
    /// What gets written to the output file on success.
    pub output: OutputMode,
    /// Base URL used when the caller supplies none.
    pub default_service_url: &'static str,
}

impl AdapterConfig {
    /// Every CLI parameter name this adapter accepts.
    pub fn parameter_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.inputs.iter().flat_map(|spec| spec.source.flags())
    }

    /// Whether `name` is a CLI parameter of this adapter.
    pub fn accepts(&self, name: &str) -> bool {
        self.parameter_names().any(|n| n == name)
    }

    /// Look up a declared input by its OGC-facing key.
    pub fn input(&self, key: &str) -> Option<&'static InputSpec> {
        self.inputs.iter().find(|spec| spec.key == key)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Inputs
// ─────────────────────────────────────────────────────────────────────────────

/// One entry of the process's `inputs` object.
#[derive(Debug, Clone, Copy)]
pub struct InputSpec {
    /// OGC-facing input name (may differ from the CLI name).
    pub key: &'static str,
    /// Where the value comes from.
    pub source: InputSource,
    /// Help text for the CLI flag(s).
    pub help: &'static str,
}

/// How an input's value is obtained from the caller's parameters.
#[derive(Debug, Clone, Copy)]
pub enum InputSource {
    /// A single scalar flag, coerced to `kind`, with an optional default.
    Scalar {
        flag: &'static str,
        kind: ScalarKind,
        default: Option<&'static str>,
    },
    /// A local file whose text content becomes the value.
    File { flag: &'static str },
    /// A MultiPoint given either as a CSV coordinate list or as an inline
    /// geometry document.
    Geometry {
        csv_flag: &'static str,
        document_flag: &'static str,
    },
}

impl InputSource {
    /// CLI parameter names feeding this input.
    pub fn flags(&self) -> Vec<&'static str> {
        match *self {
            InputSource::Scalar { flag, .. } | InputSource::File { flag } => vec![flag],
            InputSource::Geometry {
                csv_flag,
                document_flag,
            } => vec![csv_flag, document_flag],
        }
    }
}

/// JSON type a scalar parameter is sent as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarKind {
    Text,
    Number,
    Boolean,
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScalarKind::Text => write!(f, "text"),
            ScalarKind::Number => write!(f, "number"),
            ScalarKind::Boolean => write!(f, "boolean"),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Output
// ─────────────────────────────────────────────────────────────────────────────

/// What a successful invocation writes to the output file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// The parsed JSON response, re-serialized (raw text if it was not JSON).
    ResponseJson,
    /// The response body, verbatim.
    ResponseText,
    /// The original content of the named input parameter, regardless of the
    /// response body.
    Passthrough { flag: &'static str },
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputMode::ResponseJson => write!(f, "response-json"),
            OutputMode::ResponseText => write!(f, "response-text"),
            OutputMode::Passthrough { flag } => write!(f, "passthrough({flag})"),
        }
    }
}
