//! CLI command handlers.
//!
//! Every adapter subcommand goes through [`invoke`]: collect parameters,
//! normalize them into an execution request, call the service once, and
//! persist the result.

pub mod adapters;
pub mod helcom;
pub mod snap;
pub mod species;

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context as _, Result, anyhow};
use clap::Args;
use ogc_relay_client::{Emit, ExecutionClient, persist};
use ogc_relay_config::{AdapterConfig, OutputMode, RawArgs, load_params_file};
use ogc_relay_normalize::{CsvOptions, Normalizer};
use uuid::Uuid;

/// Shared context for all commands.
#[derive(Debug, Clone)]
pub struct Context {
    /// Verbose output enabled.
    pub verbose: bool,
}

/// Service and output flags common to every adapter.
#[derive(Args, Debug)]
pub struct ServiceArgs {
    /// Base URL of the OGC API Processes service, e.g. http://localhost:5000
    /// [default: the adapter's service]
    #[arg(long = "ogc_service_url", env = "OGC_SERVICE_URL", value_name = "URL")]
    pub ogc_service_url: Option<String>,

    /// File the result is written to
    #[arg(long, value_name = "PATH")]
    pub output: PathBuf,

    /// Username for HTTP basic auth
    #[arg(long, env = "OGC_USERNAME")]
    pub username: Option<String>,

    /// Password for HTTP basic auth
    #[arg(long, env = "OGC_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Do not verify the service's TLS certificate
    #[arg(long)]
    pub insecure: bool,

    /// Request timeout in seconds
    #[arg(long, value_name = "SECONDS", default_value_t = 300)]
    pub timeout: u64,

    /// JSON or TOML file with adapter parameters; flags given on the command
    /// line take precedence
    #[arg(long, value_name = "FILE")]
    pub params: Option<PathBuf>,
}

/// A parsed adapter subcommand.
pub trait AdapterArgs {
    /// The adapter this subcommand drives.
    fn adapter(&self) -> &'static AdapterConfig;

    /// Parameters given as flags, keyed by CLI name.
    fn raw_args(&self) -> RawArgs;

    fn service(&self) -> &ServiceArgs;

    fn csv_options(&self) -> CsvOptions {
        CsvOptions::default()
    }
}

/// Run one adapter invocation end to end.
pub fn invoke(args: &impl AdapterArgs, ctx: &Context) -> Result<()> {
    let adapter = args.adapter();
    let service = args.service();

    let span = tracing::info_span!("invocation", adapter = adapter.name, run_id = %Uuid::new_v4());
    let _enter = span.enter();

    let raw = collect_args(adapter, args.raw_args(), service.params.as_deref())?;
    let raw = raw
        .stage_files(adapter)
        .context("failed to stage input files")?;

    let request = Normalizer::new(args.csv_options())
        .normalize(adapter, &raw)
        .context("invalid tool inputs")?;

    let client = build_client(adapter, service)?;
    let outcome = client.execute(adapter.process, &request);

    let emit = match adapter.output {
        OutputMode::ResponseJson => Emit::ResponseJson,
        OutputMode::ResponseText => Emit::ResponseText,
        OutputMode::Passthrough { flag } => Emit::Passthrough(
            raw.staged(flag)
                .ok_or_else(|| anyhow!("no '{flag}' input to pass through"))?,
        ),
    };

    let written = persist(outcome, emit, &service.output)?;
    if ctx.verbose {
        println!(
            "{} wrote {written} bytes to {}",
            console::style("✓").green(),
            service.output.display()
        );
    }
    Ok(())
}

/// Layer flags over the params file.
fn collect_args(
    adapter: &AdapterConfig,
    flags: RawArgs,
    params: Option<&std::path::Path>,
) -> Result<RawArgs> {
    let mut raw = match params {
        Some(path) => load_params_file(path, adapter)
            .with_context(|| format!("failed to load params file {}", path.display()))?,
        None => RawArgs::new(),
    };
    raw.merge(flags);
    tracing::debug!(parameters = ?raw.iter().map(|(k, _)| k).collect::<Vec<_>>(), "collected parameters");
    Ok(raw)
}

fn build_client(adapter: &AdapterConfig, service: &ServiceArgs) -> Result<ExecutionClient> {
    let base_url = service
        .ogc_service_url
        .clone()
        .unwrap_or_else(|| adapter.default_service_url.to_string());

    let mut builder = ExecutionClient::builder()
        .base_url(&base_url)
        .verify_tls(!service.insecure)
        .timeout(Duration::from_secs(service.timeout));

    if let Some(username) = &service.username {
        builder = builder.basic_auth(username, service.password.clone());
    }

    builder
        .build()
        .with_context(|| format!("failed to configure client for {base_url}"))
}
