//! get-species-data adapter.

use clap::Args;
use ogc_relay_config::catalog::GET_SPECIES_DATA;
use ogc_relay_config::{AdapterConfig, RawArgs};

use super::{AdapterArgs, ServiceArgs};

/// Arguments for the get-species-data adapter.
#[derive(Args, Debug)]
pub struct SpeciesDataArgs {
    /// Scientific name of the species [default: Conorhynchos conirostris]
    #[arg(long = "species_name")]
    pub species_name: Option<String>,

    /// Id of the basin to search in [default: 481051]
    #[arg(long = "basin_id")]
    pub basin_id: Option<String>,

    #[command(flatten)]
    pub service: ServiceArgs,
}

impl AdapterArgs for SpeciesDataArgs {
    fn adapter(&self) -> &'static AdapterConfig {
        &GET_SPECIES_DATA
    }

    fn raw_args(&self) -> RawArgs {
        let mut raw = RawArgs::new();
        raw.set_opt("species_name", self.species_name.clone());
        raw.set_opt("basin_id", self.basin_id.clone());
        raw
    }

    fn service(&self) -> &ServiceArgs {
        &self.service
    }
}
