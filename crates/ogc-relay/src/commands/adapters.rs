//! Adapters command - lists the built-in adapters and their inputs.

use anyhow::Result;
use clap::Args;
use console::{Style, style};
use ogc_relay_config::{ADAPTERS, AdapterConfig, InputSource};
use serde::Serialize;

use super::Context;

/// Arguments for the adapters command.
#[derive(Args, Debug)]
pub struct AdaptersArgs {
    /// Output as JSON (for scripting)
    #[arg(long)]
    pub json: bool,
}

/// Adapter entry for JSON output.
#[derive(Debug, Serialize)]
struct AdapterOutput {
    name: &'static str,
    process: &'static str,
    summary: &'static str,
    output: String,
    default_service_url: &'static str,
    inputs: Vec<InputOutput>,
}

#[derive(Debug, Serialize)]
struct InputOutput {
    key: &'static str,
    parameters: Vec<&'static str>,
    kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    default: Option<&'static str>,
}

impl From<&AdapterConfig> for AdapterOutput {
    fn from(adapter: &AdapterConfig) -> Self {
        Self {
            name: adapter.name,
            process: adapter.process,
            summary: adapter.summary,
            output: adapter.output.to_string(),
            default_service_url: adapter.default_service_url,
            inputs: adapter
                .inputs
                .iter()
                .map(|spec| {
                    let (kind, default) = match spec.source {
                        InputSource::Scalar { kind, default, .. } => (kind.to_string(), default),
                        InputSource::File { .. } => ("file".to_string(), None),
                        InputSource::Geometry { .. } => ("geometry".to_string(), None),
                    };
                    InputOutput {
                        key: spec.key,
                        parameters: spec.source.flags(),
                        kind,
                        default,
                    }
                })
                .collect(),
        }
    }
}

/// Run the adapters command.
pub fn run(args: AdaptersArgs, _ctx: &Context) -> Result<()> {
    let adapters: Vec<AdapterOutput> = ADAPTERS.iter().map(AdapterOutput::from).collect();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&adapters)?);
        return Ok(());
    }

    let dim = Style::new().dim();
    let cyan = Style::new().cyan();

    for adapter in &adapters {
        println!();
        println!("{}  {}", style(adapter.name).bold(), adapter.summary);
        println!(
            "  {} /processes/{}/execution",
            dim.apply_to("Process:"),
            adapter.process
        );
        println!("  {} {}", dim.apply_to("Output: "), adapter.output);
        println!(
            "  {} {}",
            dim.apply_to("Service:"),
            adapter.default_service_url
        );

        for input in &adapter.inputs {
            let flags = input
                .parameters
                .iter()
                .map(|p| format!("--{p}"))
                .collect::<Vec<_>>()
                .join(" | ");
            let default = input
                .default
                .map(|d| format!(" (default: {d})"))
                .unwrap_or_default();
            println!(
                "    {} -> {} [{}]{}",
                cyan.apply_to(flags),
                input.key,
                input.kind,
                dim.apply_to(default)
            );
        }
    }
    println!();

    Ok(())
}
