use async_trait::async_trait;
use pricelens::{
    Error, Result,
    llm::{
        Candidate, CompletionClient, Content, GenerateContentRequest, GenerateContentResponse,
        Part,
    },
};
use serde_json::json;
use std::sync::{Arc, Mutex};

/// Mock completion client scripted with canned responses or a failure.
pub struct MockCompletionClient {
    responses: Arc<Mutex<Vec<GenerateContentResponse>>>,
    pub requests: Arc<Mutex<Vec<GenerateContentRequest>>>,
    fail_with: Mutex<Option<Error>>,
}

impl MockCompletionClient {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(Vec::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
            fail_with: Mutex::new(None),
        }
    }

    /// Client scripted with a single text completion.
    pub fn with_text(text: &str) -> Self {
        Self::new().with_responses(vec![text_response(text)])
    }

    pub fn with_responses(self, responses: Vec<GenerateContentResponse>) -> Self {
        *self.responses.lock().unwrap() = responses;
        self
    }

    /// Client whose next call fails with the given error.
    pub fn with_error(self, error: Error) -> Self {
        *self.fail_with.lock().unwrap() = Some(error);
        self
    }

    pub fn get_requests(&self) -> Vec<GenerateContentRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionClient for MockCompletionClient {
    async fn generate_content(
        &self,
        request: GenerateContentRequest,
    ) -> Result<GenerateContentResponse> {
        self.requests.lock().unwrap().push(request);

        if let Some(error) = self.fail_with.lock().unwrap().take() {
            return Err(error);
        }

        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            return Err(Error::internal("No more mock responses available"));
        }

        Ok(responses.remove(0))
    }
}

impl Default for MockCompletionClient {
    fn default() -> Self {
        Self::new()
    }
}

// Helper functions for creating test data

pub fn text_response(text: &str) -> GenerateContentResponse {
    GenerateContentResponse {
        candidates: vec![Candidate {
            content: Content {
                role: Some("model".to_string()),
                parts: vec![Part {
                    text: text.to_string(),
                }],
            },
            finish_reason: Some("STOP".to_string()),
        }],
        usage_metadata: None,
    }
}

pub fn empty_response() -> GenerateContentResponse {
    GenerateContentResponse::default()
}

/// A schema-conforming prediction payload, without `last_updated`.
pub fn valid_prediction_json() -> serde_json::Value {
    json!({
        "predicted_price_inr": 54999.0,
        "range_inr": {"min": 49999.0, "max": 59999.0},
        "confidence": 0.82,
        "product": "Samsung Galaxy S23",
        "category": "smartphone",
        "specs_extracted": {"storage": "256GB", "condition": "used"},
        "explanation_bullets": [
            "flagship launched in 2023",
            "strong resale demand in metros",
            "GST included in street price"
        ],
        "anomalies": [],
        "market_sources": ["flipkart.com", "amazon.in"]
    })
}
