//! The built-in adapters.

use crate::error::{ConfigError, Result};
use crate::types::{AdapterConfig, InputSource, InputSpec, OutputMode, ScalarKind};

const LOCAL_SERVICE_URL: &str = "http://localhost:5000";
const HELCOM_SERVICE_URL: &str = "http://130.225.37.27:5000";

const ASSESSMENT_PERIOD: InputSpec = InputSpec {
    key: "assessmentPeriod",
    source: InputSource::Scalar {
        flag: "assessment_period",
        kind: ScalarKind::Text,
        default: Some("2011-2016"),
    },
    help: "HELCOM assessment period: \"1877-9999\", \"2011-2016\" or \"2016-2021\"",
};

/// Species occurrences from GBIF, filtered by basin.
pub const GET_SPECIES_DATA: AdapterConfig = AdapterConfig {
    name: "get-species-data",
    process: "get-species-data",
    summary: "Fetch species occurrences from GBIF for one basin",
    inputs: &[
        InputSpec {
            key: "species_name",
            source: InputSource::Scalar {
                flag: "species_name",
                kind: ScalarKind::Text,
                default: Some("Conorhynchos conirostris"),
            },
            help: "Scientific name of the species",
        },
        InputSpec {
            key: "basin_id",
            source: InputSource::Scalar {
                flag: "basin_id",
                kind: ScalarKind::Text,
                default: Some("481051"),
            },
            help: "Id of the basin to search in",
        },
    ],
    output: OutputMode::ResponseJson,
    default_service_url: LOCAL_SERVICE_URL,
};

/// Snap points to the nearest stream segment.
pub const SNAP_TO_NETWORK: AdapterConfig = AdapterConfig {
    name: "snap-to-network",
    process: "snap-to-network",
    summary: "Snap coordinates to the stream network",
    inputs: &[
        InputSpec {
            key: "method",
            source: InputSource::Scalar {
                flag: "method",
                kind: ScalarKind::Text,
                default: Some("distance"),
            },
            help: "\"distance\", \"accumulation\" or \"both\"",
        },
        InputSpec {
            key: "distance",
            source: InputSource::Scalar {
                flag: "distance",
                kind: ScalarKind::Number,
                default: Some("500"),
            },
            help: "Maximum snapping radius in map pixels",
        },
        InputSpec {
            key: "accumulation",
            source: InputSource::Scalar {
                flag: "accumulation",
                kind: ScalarKind::Number,
                default: Some("0.5"),
            },
            help: "Minimum flow accumulation of the target stream",
        },
        InputSpec {
            key: "coordinate_multipoint",
            source: InputSource::Geometry {
                csv_flag: "coordinate_csv",
                document_flag: "coordinate_geojson",
            },
            help: "Points as \"lat,lon\" lines or a GeoJSON MultiPoint in [lon, lat] order",
        },
    ],
    output: OutputMode::ResponseJson,
    default_service_url: LOCAL_SERVICE_URL,
};

/// HELCOM HEAT annual indicator.
pub const HELCOM_ANNUAL_INDICATOR: AdapterConfig = AdapterConfig {
    name: "helcom-annual-indicator",
    process: "annual-indicator",
    summary: "Compute the HELCOM HEAT annual indicator",
    inputs: &[
        ASSESSMENT_PERIOD,
        InputSpec {
            key: "combined_Chlorophylla_IsWeighted",
            source: InputSource::Scalar {
                flag: "combined_chlorophylla_is_weighted",
                kind: ScalarKind::Boolean,
                default: Some("true"),
            },
            help: "Weight the combined chlorophyll-a indicator",
        },
    ],
    output: OutputMode::ResponseText,
    default_service_url: HELCOM_SERVICE_URL,
};

/// HELCOM HEAT assessment from a previously computed annual indicator table.
pub const HELCOM_ASSESSMENT_B: AdapterConfig = AdapterConfig {
    name: "helcom-assessment-b",
    process: "assessment-b",
    summary: "Run the HELCOM HEAT assessment on an annual indicator CSV",
    inputs: &[
        ASSESSMENT_PERIOD,
        InputSpec {
            key: "assessment_indicators_csv",
            source: InputSource::File { flag: "input_csv" },
            help: "Path to the annual indicator CSV",
        },
    ],
    output: OutputMode::Passthrough { flag: "input_csv" },
    default_service_url: HELCOM_SERVICE_URL,
};

/// All adapters, in help order.
pub static ADAPTERS: &[AdapterConfig] = &[
    GET_SPECIES_DATA,
    SNAP_TO_NETWORK,
    HELCOM_ANNUAL_INDICATOR,
    HELCOM_ASSESSMENT_B,
];

/// Find an adapter by its CLI name.
pub fn find_adapter(name: &str) -> Result<&'static AdapterConfig> {
    ADAPTERS
        .iter()
        .find(|a| a.name == name)
        .ok_or_else(|| ConfigError::AdapterNotFound(name.to_string()))
}
