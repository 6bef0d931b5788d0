//! Classification of execution responses.

use serde_json::Value;

use crate::error::{ClientError, Result};

/// `code` value the services use for rejected inputs.
const INVALID_PARAMETER_CODE: &str = "InvalidParameterValue";

/// `description` value the services use when a job failed.
const JOB_FAILED_DESCRIPTION: &str = "Error updating job";

/// Body of a successful response.
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseBody {
    /// Response text as received.
    pub text: String,
    /// Parsed body, `None` when the text is not JSON.
    pub json: Option<Value>,
}

/// Result of one execution call. Exactly one is produced per invocation.
#[derive(Debug, Clone, PartialEq)]
pub enum ExecutionOutcome {
    Success(ResponseBody),
    /// Non-200 status, or no response at all (`status` is `None`).
    TransportFailure {
        status: Option<u16>,
        detail: String,
    },
    /// 200 status carrying a service-side rejection.
    SemanticFailure { reason: String, payload: Value },
}

impl ExecutionOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, ExecutionOutcome::Success(_))
    }

    /// Convert failures into [`ClientError`]s.
    pub fn into_result(self) -> Result<ResponseBody> {
        match self {
            ExecutionOutcome::Success(body) => Ok(body),
            ExecutionOutcome::TransportFailure { status, detail } => {
                Err(ClientError::TransportFailure { status, detail })
            }
            ExecutionOutcome::SemanticFailure { reason, payload } => {
                Err(ClientError::SemanticFailure { reason, payload })
            }
        }
    }
}

/// Classify a response from its status code and body text.
pub fn classify(status: u16, text: String) -> ExecutionOutcome {
    if status != 200 {
        return ExecutionOutcome::TransportFailure {
            status: Some(status),
            detail: format!("server responded with HTTP status code {status} (expected 200)"),
        };
    }

    let json = match serde_json::from_str::<Value>(&text) {
        Ok(json) => json,
        Err(_) => {
            tracing::info!("the server's response is not a JSON response, skipping body parsing");
            return ExecutionOutcome::Success(ResponseBody { text, json: None });
        }
    };

    if let Some(reason) = rejection_reason(&json) {
        return ExecutionOutcome::SemanticFailure {
            reason,
            payload: json,
        };
    }

    ExecutionOutcome::Success(ResponseBody {
        text,
        json: Some(json),
    })
}

fn rejection_reason(json: &Value) -> Option<String> {
    let code = json.get("code").and_then(Value::as_str);
    let description = json.get("description").and_then(Value::as_str);

    let rejected =
        code == Some(INVALID_PARAMETER_CODE) || description == Some(JOB_FAILED_DESCRIPTION);
    if !rejected {
        return None;
    }

    Some(match (description, code) {
        (Some(d), Some(c)) => format!("{c}: {d}"),
        (Some(d), None) => d.to_string(),
        (None, Some(c)) => c.to_string(),
        (None, None) => json.to_string(),
    })
}
