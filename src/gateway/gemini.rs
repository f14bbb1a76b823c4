use async_trait::async_trait;
use tracing::{debug, warn};

use super::wire::{GenerateContentRequest, GenerateContentResponse};
use super::{CompletionBackend, Feature, GatewayConfig, PromptRequest};
use crate::error::{Result, TaazaError};

/// Longest slice of an error body kept in the upstream reason.
const ERROR_BODY_LIMIT: usize = 200;

/// Gemini `generateContent` over HTTPS.
pub struct GeminiBackend {
    client: reqwest::Client,
    endpoint: String,
    model: String,
    api_key: String,
    timeout_secs: u64,
}

impl GeminiBackend {
    pub fn new(config: &GatewayConfig, api_key: String) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| TaazaError::HttpClient(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: format!(
                "{}/models/{}:generateContent",
                config.base_url.trim_end_matches('/'),
                config.model
            ),
            model: config.model.clone(),
            api_key,
            timeout_secs: config.timeout_secs,
        })
    }

    fn transport_error(&self, feature: Feature, e: reqwest::Error) -> TaazaError {
        if e.is_timeout() {
            TaazaError::Timeout {
                feature,
                seconds: self.timeout_secs,
            }
        } else {
            // without_url keeps the endpoint out of logs
            TaazaError::upstream(feature, e.without_url().to_string())
        }
    }
}

#[async_trait]
impl CompletionBackend for GeminiBackend {
    async fn complete(&self, request: &PromptRequest) -> Result<String> {
        let feature = request.feature;
        let body = GenerateContentRequest::from(request);

        debug!(
            %feature,
            model = %self.model,
            structured = request.response_schema.is_some(),
            "sending completion request"
        );

        let response = self
            .client
            .post(&self.endpoint)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| self.transport_error(feature, e))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            let snippet: String = error_text.chars().take(ERROR_BODY_LIMIT).collect();
            warn!(%feature, %status, "completion endpoint returned an error");
            return Err(TaazaError::upstream(
                feature,
                format!("HTTP {}: {}", status, snippet),
            ));
        }

        let payload: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| TaazaError::upstream(feature, format!("unreadable response: {}", e)))?;

        if let Some(reason) = payload.block_reason() {
            return Err(TaazaError::upstream(
                feature,
                format!("prompt blocked: {}", reason),
            ));
        }

        let finish_reason = payload.finish_reason().map(str::to_string);
        payload.into_text().ok_or_else(|| {
            TaazaError::upstream(
                feature,
                format!(
                    "no text in response (finish reason: {})",
                    finish_reason.as_deref().unwrap_or("unknown")
                ),
            )
        })
    }

    fn model(&self) -> &str {
        &self.model
    }
}
