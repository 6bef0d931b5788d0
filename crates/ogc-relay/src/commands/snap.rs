//! snap-to-network adapter.
//!
//! Coordinates come either as CSV (`lat,lon` per line, lines separated by a
//! newline or by `__cn__`) or as a GeoJSON MultiPoint in `[lon, lat]` order.
//! When both are given the CSV wins.

use clap::Args;
use ogc_relay_config::catalog::SNAP_TO_NETWORK;
use ogc_relay_config::{AdapterConfig, RawArgs};
use ogc_relay_normalize::CsvOptions;

use super::{AdapterArgs, ServiceArgs};

/// Arguments for the snap-to-network adapter.
#[derive(Args, Debug)]
pub struct SnapToNetworkArgs {
    /// "distance", "accumulation" or "both" [default: distance]
    #[arg(long)]
    pub method: Option<String>,

    /// Maximum snapping radius in map pixels [default: 500]
    #[arg(long)]
    pub distance: Option<String>,

    /// Minimum flow accumulation of the target stream [default: 0.5]
    #[arg(long)]
    pub accumulation: Option<String>,

    /// Coordinates as "lat,lon" lines
    #[arg(long = "coordinate_csv")]
    pub coordinate_csv: Option<String>,

    /// Coordinates as a GeoJSON MultiPoint
    #[arg(long = "coordinate_geojson")]
    pub coordinate_geojson: Option<String>,

    /// Field delimiter of the CSV coordinates
    #[arg(long = "csv_delimiter", default_value_t = ',')]
    pub csv_delimiter: char,

    #[command(flatten)]
    pub service: ServiceArgs,
}

impl AdapterArgs for SnapToNetworkArgs {
    fn adapter(&self) -> &'static AdapterConfig {
        &SNAP_TO_NETWORK
    }

    fn raw_args(&self) -> RawArgs {
        let mut raw = RawArgs::new();
        raw.set_opt("method", self.method.clone());
        raw.set_opt("distance", self.distance.clone());
        raw.set_opt("accumulation", self.accumulation.clone());
        raw.set_opt("coordinate_csv", self.coordinate_csv.clone());
        raw.set_opt("coordinate_geojson", self.coordinate_geojson.clone());
        raw
    }

    fn service(&self) -> &ServiceArgs {
        &self.service
    }

    fn csv_options(&self) -> CsvOptions {
        CsvOptions {
            delimiter: self.csv_delimiter,
        }
    }
}
