use super::fsm::{RequestEvent, RequestLifecycle};
use super::types::{PredictionRequest, PredictionResult};
use super::{prompt, sanitize};
use crate::config::{LlmConfig, PredictionConfig};
use crate::llm::{CompletionClient, GeminiClient};
use crate::{Error, Result};
use chrono::Utc;
use tracing::debug;

/// Drives one prediction end to end: prompt construction, the single
/// upstream call, and response sanitation.
pub struct Predictor {
    client: Box<dyn CompletionClient>,
    settings: PredictionConfig,
}

impl Predictor {
    pub fn new(llm_config: LlmConfig, settings: PredictionConfig) -> Result<Self> {
        Ok(Self {
            client: Box::new(GeminiClient::new(llm_config)?),
            settings,
        })
    }

    /// Build a predictor over any completion client. Lets tests substitute
    /// a scripted upstream.
    pub fn with_client(client: Box<dyn CompletionClient>, settings: PredictionConfig) -> Self {
        Self { client, settings }
    }

    pub async fn predict(
        &self,
        request: &PredictionRequest,
        lifecycle: &mut RequestLifecycle,
    ) -> Result<PredictionResult> {
        let outbound = prompt::build_request(request, &self.settings);
        lifecycle.advance(RequestEvent::PromptConstructed)?;

        lifecycle.advance(RequestEvent::UpstreamDispatched)?;
        let response = self.client.generate_content(outbound).await?;

        let text = response.first_text().ok_or(Error::EmptyUpstreamResponse)?;
        debug!(output_len = text.len(), "Extracted generated text");

        let result = sanitize::sanitize(text, Utc::now())?;
        lifecycle.advance(RequestEvent::ResultSanitized)?;

        Ok(result)
    }
}
