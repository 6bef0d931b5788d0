//! Adapter configuration for the OGC API Processes relay.
//!
//! Provides:
//! - The compile-time adapter catalog (one [`AdapterConfig`] per backend
//!   process: process path, declared inputs, output mode, default service URL)
//! - [`RawArgs`], the adapter's parameters as the caller supplied them
//! - Structured parameter files (`--params file.json|file.toml`) as the
//!   side channel for values a caller cannot pass literally on a command line

pub mod catalog;
pub mod error;
pub mod params;
pub mod types;

pub use catalog::{ADAPTERS, find_adapter};
pub use error::{ConfigError, Result};
pub use params::{RawArgs, load_params_file};
pub use types::*;
