//! ogc-relay - OGC API Processes adapters for workflow engines
//!
//! Main entry point for the ogc-relay CLI. Each adapter subcommand runs one
//! blocking execution request and writes the result to `--output`.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

mod commands;
mod logging;

use commands::{adapters, helcom, snap, species};

// ─────────────────────────────────────────────────────────────────────────────
// CLI Structure
// ─────────────────────────────────────────────────────────────────────────────

/// ogc-relay - Call OGC API Processes services and capture the result as a file
#[derive(Parser)]
#[command(name = "ogc-relay")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Also write JSON logs to a daily file in this directory
    #[arg(long, global = true, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch species occurrences from GBIF for one basin
    GetSpeciesData(species::SpeciesDataArgs),

    /// Snap coordinates to the stream network
    SnapToNetwork(snap::SnapToNetworkArgs),

    /// Compute the HELCOM HEAT annual indicator
    HelcomAnnualIndicator(helcom::AnnualIndicatorArgs),

    /// Run the HELCOM HEAT assessment on an annual indicator CSV
    HelcomAssessmentB(helcom::AssessmentBArgs),

    /// List the available adapters
    Adapters(adapters::AdaptersArgs),
}

// ─────────────────────────────────────────────────────────────────────────────
// Main
// ─────────────────────────────────────────────────────────────────────────────

fn main() -> ExitCode {
    let cli = Cli::parse();

    let _guard = match logging::init(cli.verbose, cli.log_dir.as_deref()) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("error: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let ctx = commands::Context {
        verbose: cli.verbose,
    };

    let result = match cli.command {
        Commands::GetSpeciesData(args) => commands::invoke(&args, &ctx),
        Commands::SnapToNetwork(args) => commands::invoke(&args, &ctx),
        Commands::HelcomAnnualIndicator(args) => commands::invoke(&args, &ctx),
        Commands::HelcomAssessmentB(args) => commands::invoke(&args, &ctx),
        Commands::Adapters(args) => adapters::run(args, &ctx),
    };

    // Return instead of exiting so `_guard` flushes the file log.
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %format!("{e:#}"), "invocation failed");
            ExitCode::FAILURE
        }
    }
}
