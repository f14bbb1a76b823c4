//! Prompt/response gateway to the hosted text-generation model.
//!
//! The gateway is built once from a [`GatewayConfig`] and handed to whoever
//! needs it. When no credential is configured it still constructs, but every
//! call fails with [`TaazaError::NotConfigured`] before touching the network,
//! so the rest of the service keeps working with AI features switched off.

pub mod config;
mod gemini;
mod wire;

pub use config::GatewayConfig;
pub use gemini::GeminiBackend;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

use crate::error::{Result, TaazaError};

/// The AI-backed features of the landing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Feature {
    MealPlan,
    Projection,
    FaqSearch,
}

impl Feature {
    /// Whether the feature asks the model for schema-constrained JSON.
    pub fn is_structured(&self) -> bool {
        matches!(self, Feature::Projection)
    }
}

impl std::fmt::Display for Feature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Feature::MealPlan => write!(f, "meal_plan"),
            Feature::Projection => write!(f, "projection"),
            Feature::FaqSearch => write!(f, "faq_search"),
        }
    }
}

/// Primitive JSON types a schema field can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    String,
    Number,
    Integer,
    Boolean,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaField {
    pub name: String,
    pub field_type: FieldType,
    pub description: Option<String>,
    /// Closed set of allowed values, only meaningful for string fields.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<String>>,
}

/// Flat object schema: every listed field is required.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SchemaDescriptor {
    pub fields: Vec<SchemaField>,
}

impl SchemaDescriptor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, name: &str, field_type: FieldType, description: &str) -> Self {
        self.fields.push(SchemaField {
            name: name.to_string(),
            field_type,
            description: Some(description.to_string()).filter(|d| !d.is_empty()),
            enum_values: None,
        });
        self
    }

    /// A string field the model must fill with one of `values`.
    pub fn enum_field(mut self, name: &str, description: &str, values: &[&str]) -> Self {
        self = self.field(name, FieldType::String, description);
        if let Some(field) = self.fields.last_mut() {
            field.enum_values = Some(values.iter().map(|v| v.to_string()).collect());
        }
        self
    }

    pub fn required(&self) -> Vec<&str> {
        self.fields.iter().map(|f| f.name.as_str()).collect()
    }
}

/// One outbound completion call. Built fresh per user action.
#[derive(Debug, Clone, PartialEq)]
pub struct PromptRequest {
    pub feature: Feature,
    pub system_instruction: String,
    pub user_query: String,
    pub response_schema: Option<SchemaDescriptor>,
}

impl PromptRequest {
    pub fn text(feature: Feature, system_instruction: String, user_query: String) -> Self {
        Self {
            feature,
            system_instruction,
            user_query,
            response_schema: None,
        }
    }

    pub fn structured(
        feature: Feature,
        system_instruction: String,
        user_query: String,
        schema: SchemaDescriptor,
    ) -> Self {
        Self {
            feature,
            system_instruction,
            user_query,
            response_schema: Some(schema),
        }
    }

    fn validate(&self) -> Result<()> {
        if self.user_query.trim().is_empty() {
            return Err(TaazaError::InvalidInput("Prompt must not be empty.".to_string()));
        }
        if self.system_instruction.trim().is_empty() {
            return Err(TaazaError::InvalidInput(
                "System instruction must not be empty.".to_string(),
            ));
        }
        Ok(())
    }
}

/// A hosted model that turns one prompt into one text reply.
///
/// Implementations make exactly one outbound call per invocation and never
/// retry.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    /// Returns the raw reply text; for structured requests, the JSON text.
    async fn complete(&self, request: &PromptRequest) -> Result<String>;

    /// Model identifier used for logging.
    fn model(&self) -> &str;
}

#[derive(Clone)]
pub struct Gateway {
    backend: Option<Arc<dyn CompletionBackend>>,
    timeout: Duration,
}

impl std::fmt::Debug for Gateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Gateway")
            .field("model", &self.backend.as_ref().map(|b| b.model().to_string()))
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl Gateway {
    pub fn new(backend: Arc<dyn CompletionBackend>, timeout: Duration) -> Self {
        Self {
            backend: Some(backend),
            timeout,
        }
    }

    /// A gateway whose every call fails with `NotConfigured`.
    pub fn unconfigured() -> Self {
        Self {
            backend: None,
            timeout: Duration::from_secs(config::DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Validate the configuration once and build the Gemini-backed gateway.
    pub fn from_config(config: &GatewayConfig) -> Result<Self> {
        match &config.api_key {
            Some(key) => {
                let backend = GeminiBackend::new(config, key.clone())?;
                debug!(model = %config.model, timeout_secs = config.timeout_secs, "AI gateway configured");
                Ok(Self::new(Arc::new(backend), config.timeout()))
            }
            None => {
                warn!("no API key configured, AI features are disabled");
                Ok(Self::unconfigured())
            }
        }
    }

    pub fn is_configured(&self) -> bool {
        self.backend.is_some()
    }

    /// Free-text completion.
    pub async fn request_completion(
        &self,
        feature: Feature,
        prompt: String,
        system_instruction: String,
    ) -> Result<String> {
        self.dispatch(PromptRequest::text(feature, system_instruction, prompt))
            .await
    }

    /// Completion constrained to JSON matching `schema`.
    pub async fn request_structured_completion(
        &self,
        feature: Feature,
        prompt: String,
        system_instruction: String,
        schema: SchemaDescriptor,
    ) -> Result<String> {
        self.dispatch(PromptRequest::structured(
            feature,
            system_instruction,
            prompt,
            schema,
        ))
        .await
    }

    async fn dispatch(&self, request: PromptRequest) -> Result<String> {
        let backend = self.backend.as_ref().ok_or(TaazaError::NotConfigured)?;
        request.validate()?;

        let feature = request.feature;
        let started = Instant::now();
        let text = match tokio::time::timeout(self.timeout, backend.complete(&request)).await {
            Ok(Ok(text)) => text,
            Ok(Err(e)) => {
                warn!(%feature, error = %e, "completion failed");
                return Err(e);
            }
            Err(_) => {
                warn!(%feature, timeout_secs = self.timeout.as_secs(), "completion timed out");
                return Err(TaazaError::Timeout {
                    feature,
                    seconds: self.timeout.as_secs(),
                });
            }
        };

        if text.trim().is_empty() {
            warn!(%feature, "completion returned no text");
            return Err(TaazaError::upstream(feature, "empty response"));
        }

        debug!(
            %feature,
            model = backend.model(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            chars = text.len(),
            "completion received"
        );
        Ok(text)
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::sync::Mutex;

    /// Backend that answers every call with a fixed reply and records requests.
    pub struct ScriptedBackend {
        reply: std::result::Result<String, String>,
        delay: Option<Duration>,
        pub calls: Mutex<Vec<PromptRequest>>,
    }

    impl ScriptedBackend {
        pub fn replying(text: &str) -> Self {
            Self {
                reply: Ok(text.to_string()),
                delay: None,
                calls: Mutex::new(Vec::new()),
            }
        }

        pub fn failing(reason: &str) -> Self {
            Self {
                reply: Err(reason.to_string()),
                delay: None,
                calls: Mutex::new(Vec::new()),
            }
        }

        pub fn with_delay(mut self, delay: Duration) -> Self {
            self.delay = Some(delay);
            self
        }

        pub fn call_count(&self) -> usize {
            self.calls.lock().unwrap().len()
        }

        pub fn last_call(&self) -> Option<PromptRequest> {
            self.calls.lock().unwrap().last().cloned()
        }
    }

    #[async_trait]
    impl CompletionBackend for ScriptedBackend {
        async fn complete(&self, request: &PromptRequest) -> Result<String> {
            self.calls.lock().unwrap().push(request.clone());
            if let Some(delay) = self.delay {
                tokio::time::sleep(delay).await;
            }
            self.reply
                .clone()
                .map_err(|reason| TaazaError::upstream(request.feature, reason))
        }

        fn model(&self) -> &str {
            "scripted"
        }
    }

    pub fn gateway_with(backend: Arc<ScriptedBackend>) -> Gateway {
        Gateway::new(backend, Duration::from_secs(5))
    }
}
