use super::types::PredictionRequest;
use crate::config::PredictionConfig;
use crate::llm::{Content, GenerateContentRequest, GenerationConfig};
use serde_json::{Value, json};

const SYSTEM_INSTRUCTION: &str = "You are a pricing analyst for the Indian retail market. \
Given a product description, estimate its current price in Indian rupees (INR). Weigh the \
factors that move Indian prices: product condition, brand standing, demand and supply, \
seasonality, import duties and GST, currency movement, and regional variance between metros \
and smaller cities. Respond only with JSON matching the requested schema.";

/// Assemble the outbound AI request for a normalized prediction request.
/// Pure data transformation, no I/O.
pub fn build_request(
    request: &PredictionRequest,
    settings: &PredictionConfig,
) -> GenerateContentRequest {
    let user_prompt = format!(
        "Estimate the current market price for the following product.\n\n\
         Product description:\n{}",
        request.specs
    );

    GenerateContentRequest {
        system_instruction: Some(Content::system(SYSTEM_INSTRUCTION)),
        contents: vec![Content::user(user_prompt)],
        generation_config: Some(GenerationConfig {
            temperature: Some(settings.temperature),
            max_output_tokens: Some(settings.max_output_tokens),
            response_mime_type: Some("application/json".to_string()),
            response_schema: Some(response_schema()),
        }),
    }
}

/// Output contract the AI service is asked to honor. Mirrors
/// `PredictionResult`, including the bound on the explanation list.
fn response_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "predicted_price_inr": {"type": "number"},
            "range_inr": {
                "type": "object",
                "properties": {
                    "min": {"type": "number"},
                    "max": {"type": "number"}
                },
                "required": ["min", "max"]
            },
            "confidence": {"type": "number", "minimum": 0, "maximum": 1},
            "product": {"type": "string"},
            "category": {"type": "string"},
            "specs_extracted": {
                "type": "object",
                "description": "Key attributes extracted from the description, values as strings"
            },
            "explanation_bullets": {
                "type": "array",
                "items": {"type": "string"},
                "minItems": 3,
                "maxItems": 8
            },
            "anomalies": {"type": "array", "items": {"type": "string"}},
            "market_sources": {"type": "array", "items": {"type": "string"}},
            "last_updated": {"type": "string"}
        },
        "required": [
            "predicted_price_inr",
            "range_inr",
            "confidence",
            "product",
            "category",
            "explanation_bullets"
        ]
    })
}
