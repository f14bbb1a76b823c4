use serde::Serialize;
use thiserror::Error;

use crate::gateway::Feature;

pub const NOT_CONFIGURED_MESSAGE: &str = "AI Key is not configured. AI features are unavailable.";
pub const UPSTREAM_MESSAGE: &str = "Failed to get a response from the AI. Please try again.";
pub const STRUCTURED_UPSTREAM_MESSAGE: &str =
    "AI failed to generate a valid plan. Please check your inputs and try again.";
pub const FORMAT_MESSAGE: &str = "AI response was not in the expected format.";
pub const INTERNAL_MESSAGE: &str = "An unexpected error occurred.";

#[derive(Error, Debug)]
pub enum TaazaError {
    #[error("AI Key is not configured. AI features are unavailable.")]
    NotConfigured,

    #[error("Upstream error during {feature}: {reason}")]
    Upstream { feature: Feature, reason: String },

    #[error("Upstream timeout during {feature} after {seconds}s")]
    Timeout { feature: Feature, seconds: u64 },

    #[error("Response format error: {0}")]
    Format(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("HTTP client error: {0}")]
    HttpClient(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Coarse error class shown next to the form that triggered the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// Credential missing; AI stays unavailable for the whole process.
    Configuration,
    /// Network, timeout or non-success answer; the user may resubmit.
    Upstream,
    /// The model answered but not in the agreed shape.
    Format,
    InvalidInput,
    Internal,
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorCategory::Configuration => write!(f, "configuration"),
            ErrorCategory::Upstream => write!(f, "upstream"),
            ErrorCategory::Format => write!(f, "format"),
            ErrorCategory::InvalidInput => write!(f, "invalid_input"),
            ErrorCategory::Internal => write!(f, "internal"),
        }
    }
}

impl TaazaError {
    pub fn upstream(feature: Feature, reason: impl Into<String>) -> Self {
        TaazaError::Upstream {
            feature,
            reason: reason.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            TaazaError::NotConfigured => ErrorCategory::Configuration,
            TaazaError::Upstream { .. } | TaazaError::Timeout { .. } => ErrorCategory::Upstream,
            TaazaError::Format(_) => ErrorCategory::Format,
            TaazaError::InvalidInput(_) => ErrorCategory::InvalidInput,
            TaazaError::HttpClient(_) | TaazaError::Io(_) | TaazaError::Json(_) => {
                ErrorCategory::Internal
            }
        }
    }

    /// Single-line message safe to render inline. Never carries upstream
    /// details or credentials.
    pub fn user_message(&self) -> String {
        match self {
            TaazaError::NotConfigured => NOT_CONFIGURED_MESSAGE.to_string(),
            TaazaError::Upstream { feature, .. } | TaazaError::Timeout { feature, .. } => {
                if feature.is_structured() {
                    STRUCTURED_UPSTREAM_MESSAGE.to_string()
                } else {
                    UPSTREAM_MESSAGE.to_string()
                }
            }
            TaazaError::Format(_) => FORMAT_MESSAGE.to_string(),
            TaazaError::InvalidInput(reason) => reason.clone(),
            TaazaError::HttpClient(_) | TaazaError::Io(_) | TaazaError::Json(_) => {
                INTERNAL_MESSAGE.to_string()
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, TaazaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_message() {
        let err = TaazaError::NotConfigured;
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert_eq!(
            err.user_message(),
            "AI Key is not configured. AI features are unavailable."
        );
    }

    #[test]
    fn test_upstream_message_depends_on_mode() {
        let text = TaazaError::upstream(Feature::MealPlan, "HTTP 500");
        let structured = TaazaError::Timeout {
            feature: Feature::Projection,
            seconds: 30,
        };
        assert_eq!(text.category(), ErrorCategory::Upstream);
        assert_eq!(structured.category(), ErrorCategory::Upstream);
        assert_eq!(text.user_message(), UPSTREAM_MESSAGE);
        assert_eq!(structured.user_message(), STRUCTURED_UPSTREAM_MESSAGE);
    }

    #[test]
    fn test_user_message_hides_details() {
        let err = TaazaError::upstream(Feature::FaqSearch, "HTTP 403: API key invalid");
        assert!(!err.user_message().contains("403"));
        assert!(err.to_string().contains("403"));

        let err = TaazaError::Format("missing field `projectionText`".to_string());
        assert_eq!(err.user_message(), "AI response was not in the expected format.");
    }

    #[test]
    fn test_invalid_input_passes_reason_through() {
        let err = TaazaError::InvalidInput("Please enter a question.".to_string());
        assert_eq!(err.category(), ErrorCategory::InvalidInput);
        assert_eq!(err.user_message(), "Please enter a question.");
    }
}
