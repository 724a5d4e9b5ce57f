use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Normalized caller input: the trimmed product description.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionRequest {
    pub specs: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

/// The sanitized prediction returned to the caller. Only the price fields
/// and the product name are hard requirements of the upstream output; the
/// rest defaults when the model leaves it out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub predicted_price_inr: f64,
    pub range_inr: PriceRange,
    #[serde(default)]
    pub confidence: f64,
    pub product: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub specs_extracted: HashMap<String, String>,
    #[serde(default)]
    pub explanation_bullets: Vec<String>,
    #[serde(default)]
    pub anomalies: Vec<String>,
    #[serde(default)]
    pub market_sources: Vec<String>,
    pub last_updated: DateTime<Utc>,
    /// Fields the model emitted beyond the declared schema pass through
    /// to the caller untouched.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}
