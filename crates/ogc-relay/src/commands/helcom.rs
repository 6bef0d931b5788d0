//! HELCOM HEAT adapters.

use clap::Args;
use ogc_relay_config::catalog::{HELCOM_ANNUAL_INDICATOR, HELCOM_ASSESSMENT_B};
use ogc_relay_config::{AdapterConfig, RawArgs};

use super::{AdapterArgs, ServiceArgs};

/// Arguments for the annual indicator adapter.
#[derive(Args, Debug)]
pub struct AnnualIndicatorArgs {
    /// Assessment period: "1877-9999", "2011-2016" or "2016-2021" [default: 2011-2016]
    #[arg(long = "assessment_period")]
    pub assessment_period: Option<String>,

    /// Weight the combined chlorophyll-a indicator, true or false [default: true]
    #[arg(long = "combined_chlorophylla_is_weighted")]
    pub combined_chlorophylla_is_weighted: Option<String>,

    #[command(flatten)]
    pub service: ServiceArgs,
}

impl AdapterArgs for AnnualIndicatorArgs {
    fn adapter(&self) -> &'static AdapterConfig {
        &HELCOM_ANNUAL_INDICATOR
    }

    fn raw_args(&self) -> RawArgs {
        let mut raw = RawArgs::new();
        raw.set_opt("assessment_period", self.assessment_period.clone());
        raw.set_opt(
            "combined_chlorophylla_is_weighted",
            self.combined_chlorophylla_is_weighted.clone(),
        );
        raw
    }

    fn service(&self) -> &ServiceArgs {
        &self.service
    }
}

/// Arguments for the assessment adapter.
///
/// The output file receives the input CSV unchanged; the service call only
/// has to succeed.
#[derive(Args, Debug)]
pub struct AssessmentBArgs {
    /// Assessment period: "1877-9999", "2011-2016" or "2016-2021" [default: 2011-2016]
    #[arg(long = "assessment_period")]
    pub assessment_period: Option<String>,

    /// Path to the annual indicator CSV; copied byte for byte to --output
    #[arg(long = "input_csv", value_name = "PATH")]
    pub input_csv: Option<String>,

    #[command(flatten)]
    pub service: ServiceArgs,
}

impl AdapterArgs for AssessmentBArgs {
    fn adapter(&self) -> &'static AdapterConfig {
        &HELCOM_ASSESSMENT_B
    }

    fn raw_args(&self) -> RawArgs {
        let mut raw = RawArgs::new();
        raw.set_opt("assessment_period", self.assessment_period.clone());
        raw.set_opt("input_csv", self.input_csv.clone());
        raw
    }

    fn service(&self) -> &ServiceArgs {
        &self.service
    }
}
