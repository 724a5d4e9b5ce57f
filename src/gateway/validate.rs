use super::types::PredictionRequest;
use crate::{Error, Result};
use serde_json::Value;

/// Parse and normalize the raw request body.
///
/// Field extraction works on the raw JSON value rather than a typed
/// deserialize so that a missing field, a non-string field, and a
/// whitespace-only field all report the same validation failure instead of
/// leaking parser wording to the caller.
pub fn parse_prediction_request(body: &[u8], max_chars: usize) -> Result<PredictionRequest> {
    let payload: Value = serde_json::from_slice(body).map_err(|_| Error::InvalidJson)?;

    let specs = payload
        .get("specs")
        .and_then(Value::as_str)
        .ok_or(Error::MissingSpecs)?
        .trim();

    if specs.is_empty() {
        return Err(Error::MissingSpecs);
    }

    if specs.chars().count() > max_chars {
        return Err(Error::SpecsTooLong { max: max_chars });
    }

    Ok(PredictionRequest {
        specs: specs.to_string(),
    })
}
