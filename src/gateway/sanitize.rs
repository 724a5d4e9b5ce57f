use super::types::PredictionResult;
use crate::{Error, Result};
use chrono::{DateTime, Utc};
use serde_json::Value;

/// Upper bound on the raw-output excerpt surfaced for diagnostics.
const EXCERPT_MAX_CHARS: usize = 200;

/// Parse, validate, and minimally repair the model's generated text.
///
/// `now` is injected by the caller so the transformation itself stays
/// deterministic.
pub fn sanitize(raw: &str, now: DateTime<Utc>) -> Result<PredictionResult> {
    let mut payload: Value = serde_json::from_str(raw).map_err(|_| Error::MalformedAiJson {
        excerpt: excerpt(raw),
    })?;

    let object = payload.as_object_mut().ok_or_else(|| Error::IncompleteAiResult {
        detail: "response is not a JSON object".to_string(),
    })?;

    for field in ["predicted_price_inr", "range_inr", "product"] {
        if !object.contains_key(field) {
            return Err(Error::IncompleteAiResult {
                detail: format!("missing field '{field}'"),
            });
        }
    }

    require_price(object.get("predicted_price_inr"), "predicted_price_inr")?;
    let range = &object["range_inr"];
    let min = require_price(range.get("min"), "range_inr.min")?;
    let max = require_price(range.get("max"), "range_inr.max")?;

    if min > max {
        return Err(Error::InvalidPriceValue {
            field: "range_inr".to_string(),
        });
    }

    if !object.contains_key("last_updated") {
        object.insert(
            "last_updated".to_string(),
            Value::String(now.to_rfc3339()),
        );
    }

    serde_json::from_value(payload).map_err(|e| Error::IncompleteAiResult {
        detail: e.to_string(),
    })
}

/// A price field must be a finite, non-negative number.
fn require_price(value: Option<&Value>, field: &str) -> Result<f64> {
    let number = value.and_then(Value::as_f64).ok_or_else(|| Error::InvalidPriceValue {
        field: field.to_string(),
    })?;

    if !number.is_finite() || number < 0.0 {
        return Err(Error::InvalidPriceValue {
            field: field.to_string(),
        });
    }

    Ok(number)
}

fn excerpt(raw: &str) -> String {
    raw.chars().take(EXCERPT_MAX_CHARS).collect()
}
