//! Adapter parameters to execution request.

use std::collections::BTreeMap;

use ogc_relay_config::{AdapterConfig, InputSource, RawArgs};
use ogc_relay_types::{ExecutionRequest, InputValue};

use crate::csv::CsvOptions;
use crate::error::{NormalizeError, Result};
use crate::geometry::{GeometrySources, resolve_geometry};
use crate::scalar::coerce_scalar;

/// Builds [`ExecutionRequest`]s from raw adapter parameters.
#[derive(Debug, Clone, Copy, Default)]
pub struct Normalizer {
    csv: CsvOptions,
}

impl Normalizer {
    pub fn new(csv: CsvOptions) -> Self {
        Self { csv }
    }

    /// Build the request for `adapter` from `args`.
    ///
    /// `args` is keyed by CLI parameter name; file parameters must already
    /// hold the file text (see [`RawArgs::stage_files`]).
    pub fn normalize(&self, adapter: &AdapterConfig, args: &RawArgs) -> Result<ExecutionRequest> {
        let mut inputs = BTreeMap::new();

        for spec in adapter.inputs {
            let value = match spec.source {
                InputSource::Scalar {
                    flag,
                    kind,
                    default,
                } => {
                    let raw = args
                        .get(flag)
                        .or(default)
                        .ok_or_else(|| missing(flag))?;
                    coerce_scalar(flag, raw, kind)?
                }
                InputSource::File { flag } => {
                    InputValue::Text(args.get(flag).ok_or_else(|| missing(flag))?.to_string())
                }
                InputSource::Geometry {
                    csv_flag,
                    document_flag,
                } => resolve_geometry(
                    args.get(csv_flag),
                    args.get(document_flag),
                    GeometrySources {
                        csv_flag,
                        document_flag,
                    },
                    self.csv,
                )?,
            };

            tracing::debug!(input = spec.key, "normalized input");
            inputs.insert(spec.key.to_string(), value);
        }

        let request = ExecutionRequest::from_inputs(inputs);
        tracing::info!(
            adapter = adapter.name,
            inputs = request.len(),
            "assembled execution request"
        );
        Ok(request)
    }
}

/// Normalize with default CSV options.
pub fn normalize(adapter: &AdapterConfig, args: &RawArgs) -> Result<ExecutionRequest> {
    Normalizer::default().normalize(adapter, args)
}

fn missing(flag: &str) -> NormalizeError {
    NormalizeError::MissingInput {
        name: flag.to_string(),
    }
}
