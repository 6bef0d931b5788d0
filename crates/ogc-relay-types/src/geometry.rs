//! GeoJSON geometry accepted by the processes.

use serde::{Deserialize, Serialize};

/// A single `[longitude, latitude]` position.
///
/// Serialized as a two-element JSON array, the GeoJSON position layout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Position {
    pub lon: f64,
    pub lat: f64,
}

impl Position {
    pub fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }

    /// Build a position from a `(latitude, longitude)` pair, the order used by
    /// coordinate tables.
    pub fn from_lat_lon(lat: f64, lon: f64) -> Self {
        Self { lon, lat }
    }
}

impl From<[f64; 2]> for Position {
    fn from([lon, lat]: [f64; 2]) -> Self {
        Self { lon, lat }
    }
}

impl From<Position> for [f64; 2] {
    fn from(p: Position) -> Self {
        [p.lon, p.lat]
    }
}

/// Canonical geometry passed to a process.
///
/// Only `MultiPoint` is modelled; the `type` discriminator is fixed by the
/// variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Geometry {
    MultiPoint { coordinates: Vec<Position> },
}

impl Geometry {
    /// Create a MultiPoint from positions already in `[lon, lat]` order.
    pub fn multi_point(coordinates: Vec<Position>) -> Self {
        Geometry::MultiPoint { coordinates }
    }

    /// Positions in storage order.
    pub fn positions(&self) -> &[Position] {
        match self {
            Geometry::MultiPoint { coordinates } => coordinates,
        }
    }

    pub fn len(&self) -> usize {
        self.positions().len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions().is_empty()
    }
}
