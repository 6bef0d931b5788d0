//! CSV coordinate lists.
//!
//! A coordinate list is one `latitude<delim>longitude` pair per line. Callers
//! that cannot pass a raw newline inside a command-line argument separate
//! lines with [`LINE_BREAK_MARKER`] instead; real newlines are accepted too.

use ogc_relay_types::{Geometry, Position};

use crate::error::{NormalizeError, Result};

/// Literal token standing in for a newline inside a single argument.
pub const LINE_BREAK_MARKER: &str = "__cn__";

/// How coordinate lines are split into fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CsvOptions {
    pub delimiter: char,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self { delimiter: ',' }
    }
}

/// Non-blank coordinate lines, in input order.
pub(crate) fn coordinate_lines(input: &str) -> impl Iterator<Item = &str> {
    input
        .split(LINE_BREAK_MARKER)
        .flat_map(str::lines)
        .filter(|line| !line.trim().is_empty())
}

/// Convert a `lat,lon` coordinate list into a MultiPoint in `[lon, lat]`
/// order.
///
/// Fails on the first line that is not exactly two numbers; no partial
/// geometry is returned.
pub fn csv_to_multipoint(input: &str, options: CsvOptions) -> Result<Geometry> {
    let mut coordinates = Vec::new();

    for line in coordinate_lines(input) {
        tracing::debug!(line, "found coordinate line");
        coordinates.push(parse_line(line, options.delimiter)?);
    }

    tracing::debug!(count = coordinates.len(), "converted CSV coordinates to MultiPoint");
    Ok(Geometry::multi_point(coordinates))
}

fn parse_line(line: &str, delimiter: char) -> Result<Position> {
    let fields: Vec<&str> = line.trim().split(delimiter).map(str::trim).collect();

    let [lat, lon] = fields.as_slice() else {
        return Err(NormalizeError::malformed(
            line,
            format!(
                "expected 2 fields separated by '{delimiter}', found {}",
                fields.len()
            ),
        ));
    };

    Ok(Position::from_lat_lon(
        parse_coordinate(line, lat)?,
        parse_coordinate(line, lon)?,
    ))
}

fn parse_coordinate(line: &str, field: &str) -> Result<f64> {
    match field.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(NormalizeError::malformed(
            line,
            format!("'{field}' is not a number"),
        )),
    }
}
