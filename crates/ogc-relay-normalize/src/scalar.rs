//! Scalar parameter coercion.

use ogc_relay_config::ScalarKind;
use ogc_relay_types::InputValue;
use serde_json::Number;

use crate::error::{NormalizeError, Result};

/// Convert a textual parameter to the JSON type its input declares.
///
/// Text is passed through verbatim. Numbers keep integer form when the text
/// is an integer. Booleans accept `true`/`false` in any case.
pub fn coerce_scalar(name: &str, value: &str, kind: ScalarKind) -> Result<InputValue> {
    let invalid = || NormalizeError::InvalidValue {
        name: name.to_string(),
        value: value.to_string(),
        expected: kind,
    };

    match kind {
        ScalarKind::Text => Ok(InputValue::Text(value.to_string())),
        ScalarKind::Number => {
            let trimmed = value.trim();
            let number = match trimmed.parse::<i64>() {
                Ok(i) => Number::from(i),
                Err(_) => trimmed
                    .parse::<f64>()
                    .ok()
                    .and_then(Number::from_f64)
                    .ok_or_else(invalid)?,
            };
            Ok(InputValue::Number(number))
        }
        ScalarKind::Boolean => match value.trim().to_ascii_lowercase().as_str() {
            "true" => Ok(InputValue::Boolean(true)),
            "false" => Ok(InputValue::Boolean(false)),
            _ => Err(invalid()),
        },
    }
}
