use super::types::{GenerateContentRequest, GenerateContentResponse};
use crate::{Error, Result, config::LlmConfig};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::{debug, warn};

#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn generate_content(
        &self,
        request: GenerateContentRequest,
    ) -> Result<GenerateContentResponse>;
}

pub struct GeminiClient {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl GeminiClient {
    pub fn new(config: LlmConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(120))
            .build()
            .map_err(Error::Network)?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key,
            model: config.model,
        })
    }

    fn api_url(&self, method: &str) -> String {
        format!("{}/models/{}:{}", self.base_url, self.model, method)
    }

    /// User-facing message for a non-success upstream status. The raw
    /// upstream body is logged, never relayed to the caller.
    fn user_message_for(status: StatusCode) -> &'static str {
        match status {
            StatusCode::TOO_MANY_REQUESTS => {
                "The AI service is receiving too many requests. Please try again in a moment."
            }
            StatusCode::FORBIDDEN => "Access to the AI service is restricted.",
            _ => "The AI service is temporarily unavailable.",
        }
    }
}

#[async_trait]
impl CompletionClient for GeminiClient {
    async fn generate_content(
        &self,
        request: GenerateContentRequest,
    ) -> Result<GenerateContentResponse> {
        if self.api_key.is_empty() {
            return Err(Error::config("AI service API key is not set"));
        }

        let url = self.api_url("generateContent");

        debug!(model = %self.model, "Dispatching generateContent request");

        // The key travels in a header so it can never surface in a URL
        // carried by a transport error.
        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(
                status = status.as_u16(),
                body_len = body.len(),
                "AI service returned an error status"
            );
            return Err(Error::Upstream {
                status: status.as_u16(),
                message: Self::user_message_for(status).to_string(),
            });
        }

        let api_response: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| Error::internal(format!("Failed to decode AI service response: {e}")))?;

        debug!(
            candidates = api_response.candidates.len(),
            "Received generateContent response"
        );

        Ok(api_response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::types::Content;
    use pretty_assertions::assert_eq;

    fn create_test_config() -> LlmConfig {
        LlmConfig {
            base_url: "https://generativelanguage.googleapis.com/v1beta/".to_string(),
            api_key: "test-api-key".to_string(),
            model: "gemini-2.0-flash".to_string(),
        }
    }

    #[test]
    fn api_url_joins_base_model_and_method() {
        let client = GeminiClient::new(create_test_config()).unwrap();
        assert_eq!(
            client.api_url("generateContent"),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.0-flash:generateContent"
        );
    }

    #[test]
    fn status_messages_distinguish_rate_limit_and_forbidden() {
        assert!(
            GeminiClient::user_message_for(StatusCode::TOO_MANY_REQUESTS)
                .contains("too many requests")
        );
        assert!(GeminiClient::user_message_for(StatusCode::FORBIDDEN).contains("restricted"));
        assert!(
            GeminiClient::user_message_for(StatusCode::INTERNAL_SERVER_ERROR)
                .contains("temporarily unavailable")
        );
    }

    #[tokio::test]
    async fn missing_api_key_fails_before_any_network_call() {
        let mut config = create_test_config();
        config.api_key = String::new();
        // An unroutable base URL proves no request is attempted.
        config.base_url = "http://127.0.0.1:1".to_string();

        let client = GeminiClient::new(config).unwrap();
        let request = GenerateContentRequest {
            system_instruction: None,
            contents: vec![Content::user("hello")],
            generation_config: None,
        };

        let err = client.generate_content(request).await.unwrap_err();
        assert_eq!(err.code(), "CONFIGURATION_ERROR");
        assert!(!err.to_string().contains("test-api-key"));
    }
}
