use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::{debug, error, info, instrument, warn};

use crate::config::{CONNECT_TIMEOUT_SECS, SuggestionConfig};
use crate::suggestions::SuggestionError;
use crate::suggestions::prompt::build_messages;
use crate::suggestions::types::{
    ApiErrorResponse, ChatCompletionRequest, ChatCompletionResponse, SuggestionRequest,
};

/// Shown to the user whenever a suggestion fetch fails for any reason.
pub const FALLBACK_MESSAGE: &str = "Failed to get meal suggestions";

/// Longest slice of an error body kept in [`SuggestionError::Status`].
const ERROR_BODY_PREVIEW: usize = 200;

/// Source of free-text meal suggestions for a plan.
#[async_trait]
pub trait MealSuggester: Send + Sync {
    /// One attempt; no retries.
    async fn suggest(&self, request: &SuggestionRequest) -> Result<String, SuggestionError>;
}

/// Client for DeepSeek or any other OpenAI-compatible chat-completion endpoint.
pub struct DeepSeekClient {
    client: Client,
    config: SuggestionConfig,
}

impl DeepSeekClient {
    pub fn new(config: SuggestionConfig) -> Result<Self, SuggestionError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .timeout(config.timeout)
            .build()?;

        Ok(Self { client, config })
    }

    fn status_error(status: StatusCode, body: &str) -> SuggestionError {
        let message = match serde_json::from_str::<ApiErrorResponse>(body) {
            Ok(parsed) => parsed.error.message,
            Err(_) => body.chars().take(ERROR_BODY_PREVIEW).collect(),
        };
        SuggestionError::Status { status, message }
    }
}

#[async_trait]
impl MealSuggester for DeepSeekClient {
    #[instrument(skip_all, fields(model = %self.config.model, calories = request.daily_calories))]
    async fn suggest(&self, request: &SuggestionRequest) -> Result<String, SuggestionError> {
        let body = ChatCompletionRequest {
            model: self.config.model.clone(),
            messages: build_messages(request),
        };
        let url = self.config.completions_url();
        debug!(%url, messages = body.messages.len(), "sending chat completion request");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, "chat completion request failed");
                SuggestionError::Http(e)
            })?;

        let status = response.status();
        let text = response.text().await.map_err(|e| {
            error!(error = %e, "failed to read chat completion response");
            SuggestionError::Http(e)
        })?;

        if !status.is_success() {
            let err = Self::status_error(status, &text);
            error!(%status, error = %err, "chat completion service returned an error");
            return Err(err);
        }

        let parsed: ChatCompletionResponse = serde_json::from_str(&text).map_err(|e| {
            error!(error = %e, "malformed chat completion response");
            SuggestionError::Parse(e)
        })?;

        let content = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.trim().is_empty())
            .ok_or(SuggestionError::EmptyResponse)?;

        info!(chars = content.len(), "received meal suggestions");
        Ok(content)
    }
}

/// Fetch suggestions, replacing any failure with [`FALLBACK_MESSAGE`].
pub async fn fetch_or_fallback(suggester: &dyn MealSuggester, request: &SuggestionRequest) -> String {
    match suggester.suggest(request).await {
        Ok(text) => text,
        Err(e) => {
            warn!(error = %e, "falling back to generic suggestion failure message");
            FALLBACK_MESSAGE.to_string()
        }
    }
}
