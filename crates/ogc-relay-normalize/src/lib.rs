//! Input normalization for OGC API Processes adapters.
//!
//! Turns an adapter's caller-supplied parameters ([`RawArgs`]) into the
//! [`ExecutionRequest`] the process expects:
//!
//! - scalar parameters are renamed to their OGC-facing key and coerced to the
//!   declared JSON type, falling back to declared defaults
//! - the geometry parameter is resolved from either a CSV coordinate list
//!   (`lat,lon` per line) or an inline GeoJSON MultiPoint (`[lon, lat]`)
//! - file parameters contribute the (already staged) file text
//!
//! Normalization is a pure function of its inputs; it never touches the
//! network or the filesystem.
//!
//! [`RawArgs`]: ogc_relay_config::RawArgs
//! [`ExecutionRequest`]: ogc_relay_types::ExecutionRequest

pub mod csv;
pub mod error;
pub mod geometry;
pub mod normalizer;
pub mod scalar;

pub use csv::{CsvOptions, LINE_BREAK_MARKER, csv_to_multipoint};
pub use error::{NormalizeError, Result};
pub use geometry::{GeometrySources, resolve_geometry};
pub use normalizer::{Normalizer, normalize};
pub use scalar::coerce_scalar;
