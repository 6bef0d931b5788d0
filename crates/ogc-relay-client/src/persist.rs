//! Writing the successful payload to the output file.

use std::path::Path;

use crate::error::{ClientError, Result};
use crate::outcome::{ExecutionOutcome, ResponseBody};

/// Which payload a successful outcome writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emit<'a> {
    /// Parsed JSON, re-serialized; the raw text if the body was not JSON.
    ResponseJson,
    /// The response text, verbatim.
    ResponseText,
    /// Caller-supplied bytes (the original input), ignoring the response.
    Passthrough(&'a [u8]),
}

/// Write the payload of a successful outcome to `path`, overwriting it.
///
/// Failure outcomes are returned as errors and nothing is written. Returns
/// the number of bytes written.
pub fn persist(outcome: ExecutionOutcome, emit: Emit<'_>, path: &Path) -> Result<usize> {
    let body = outcome.into_result()?;
    let payload = payload(&body, emit)?;

    std::fs::write(path, &payload).map_err(|source| ClientError::Write {
        path: path.display().to_string(),
        source,
    })?;

    tracing::info!(path = %path.display(), bytes = payload.len(), "output written to file");
    Ok(payload.len())
}

fn payload(body: &ResponseBody, emit: Emit<'_>) -> Result<Vec<u8>> {
    Ok(match emit {
        Emit::ResponseJson => match &body.json {
            Some(json) => serde_json::to_vec(json)?,
            None => body.text.clone().into_bytes(),
        },
        Emit::ResponseText => body.text.clone().into_bytes(),
        Emit::Passthrough(content) => content.to_vec(),
    })
}
