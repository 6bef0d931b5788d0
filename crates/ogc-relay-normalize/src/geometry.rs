//! Resolution of the dual-representation geometry parameter.

use ogc_relay_types::InputValue;
use serde_json::Value;

use crate::csv::{CsvOptions, coordinate_lines, csv_to_multipoint};
use crate::error::{NormalizeError, Result};

/// Names of the two parameters carrying the geometry, for error messages.
#[derive(Debug, Clone, Copy)]
pub struct GeometrySources<'a> {
    pub csv_flag: &'a str,
    pub document_flag: &'a str,
}

/// Pick the geometry from a CSV list or an inline GeoJSON document.
///
/// A non-empty CSV list always wins, even when a document is also given.
/// An inline document is already in `[lon, lat]` order; once it is known to
/// be a MultiPoint it is forwarded unchanged, including extra ordinates and
/// foreign members such as `bbox`.
pub fn resolve_geometry(
    csv: Option<&str>,
    document: Option<&str>,
    sources: GeometrySources<'_>,
    options: CsvOptions,
) -> Result<InputValue> {
    let csv = csv.filter(|s| coordinate_lines(s).next().is_some());
    let document = document.filter(|s| !s.trim().is_empty());

    match (csv, document) {
        (Some(csv), document) => {
            if document.is_some() {
                tracing::warn!(
                    csv = sources.csv_flag,
                    document = sources.document_flag,
                    "both coordinate inputs are filled, using the CSV coordinates"
                );
            }
            tracing::info!(coordinates = csv, "using CSV coordinates");
            Ok(csv_to_multipoint(csv, options)?.into())
        }
        (None, Some(document)) => {
            tracing::info!("using GeoJSON coordinates");
            let document: Value = serde_json::from_str(document)?;
            check_multi_point(&document)?;
            Ok(InputValue::Document(document))
        }
        (None, None) => Err(NormalizeError::MissingGeometryInput {
            csv_flag: sources.csv_flag.to_string(),
            document_flag: sources.document_flag.to_string(),
        }),
    }
}

/// Check the shape of a GeoJSON MultiPoint without rewriting it.
fn check_multi_point(document: &Value) -> Result<()> {
    let Value::Object(object) = document else {
        return Err(NormalizeError::not_multi_point("expected a JSON object"));
    };

    match object.get("type").and_then(Value::as_str) {
        Some("MultiPoint") => {}
        Some(other) => {
            return Err(NormalizeError::not_multi_point(format!(
                "expected type 'MultiPoint', found '{other}'"
            )));
        }
        None => return Err(NormalizeError::not_multi_point("missing 'type' member")),
    }

    let Some(positions) = object.get("coordinates").and_then(Value::as_array) else {
        return Err(NormalizeError::not_multi_point(
            "'coordinates' must be an array of positions",
        ));
    };

    // A position holds at least longitude and latitude; altitude may follow.
    for (index, position) in positions.iter().enumerate() {
        let valid = position
            .as_array()
            .is_some_and(|p| p.len() >= 2 && p.iter().all(Value::is_number));
        if !valid {
            return Err(NormalizeError::not_multi_point(format!(
                "position {index} must be an array of at least two numbers"
            )));
        }
    }
    Ok(())
}
