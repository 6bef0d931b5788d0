//! Execution client for OGC API Processes services.
//!
//! Posts an [`ExecutionRequest`] to `{base}/processes/{id}/execution`,
//! classifies the reply and writes the successful payload to a file.
//!
//! # Example
//!
//! ```no_run
//! use ogc_relay_client::{Emit, ExecutionClient, persist};
//! use ogc_relay_types::{ExecutionRequest, InputValue};
//!
//! # fn example() -> ogc_relay_client::Result<()> {
//! let client = ExecutionClient::builder()
//!     .base_url("http://localhost:5000")
//!     .build()?;
//!
//! let request: ExecutionRequest = [("basin_id", InputValue::text("481051"))]
//!     .into_iter()
//!     .collect();
//!
//! let outcome = client.execute("get-species-data", &request);
//! persist(outcome, Emit::ResponseJson, "output.json".as_ref())?;
//! # Ok(())
//! # }
//! ```
//!
//! # Outcome classification
//!
//! The services report some rejections with HTTP 200, so the status code
//! alone is not enough. Rules, first match wins:
//!
//! 1. status other than 200: [`ExecutionOutcome::TransportFailure`]
//! 2. body is not JSON: [`ExecutionOutcome::Success`] with the raw text
//! 3. JSON body with `code == "InvalidParameterValue"` or
//!    `description == "Error updating job"`: [`ExecutionOutcome::SemanticFailure`]
//! 4. anything else: [`ExecutionOutcome::Success`]
//!
//! [`ExecutionRequest`]: ogc_relay_types::ExecutionRequest

pub mod client;
pub mod error;
pub mod outcome;
pub mod persist;

pub use client::{ClientBuilder, ExecutionClient};
pub use error::{ClientError, Result};
pub use outcome::{ExecutionOutcome, ResponseBody, classify};
pub use persist::{Emit, persist};
