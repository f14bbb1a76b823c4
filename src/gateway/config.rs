use serde::{Deserialize, Serialize};

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Environment variables consulted for the credential, in order.
pub const API_KEY_VARS: [&str; 2] = ["API_KEY", "GEMINI_API_KEY"];

/// Configuration for the hosted completion endpoint.
#[derive(Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// Credential for the hosted model. `None` disables every AI feature.
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
    /// Model identifier, e.g. "gemini-2.5-flash"
    pub model: String,
    /// Base URL up to and including the API version segment.
    pub base_url: String,
    /// Upper bound for one completion call.
    pub timeout_secs: u64,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_API_BASE.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl std::fmt::Debug for GatewayConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GatewayConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl GatewayConfig {
    /// Read the configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    ///
    /// Blank values are treated as unset. An unparsable timeout falls back
    /// to the default.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let defaults = Self::default();
        Self {
            api_key: API_KEY_VARS.iter().find_map(|key| non_blank(key)),
            model: non_blank("TAAZA_MODEL").unwrap_or(defaults.model),
            base_url: non_blank("TAAZA_API_BASE").unwrap_or(defaults.base_url),
            timeout_secs: non_blank("TAAZA_TIMEOUT_SECS")
                .and_then(|v| v.parse().ok())
                .filter(|secs| *secs > 0)
                .unwrap_or(defaults.timeout_secs),
        }
    }

    pub fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }

    pub fn timeout(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = GatewayConfig::default();
        assert_eq!(config.model, "gemini-2.5-flash");
        assert_eq!(config.timeout_secs, 30);
        assert!(!config.has_credential());
    }

    #[test]
    fn test_empty_environment_has_no_credential() {
        let config = GatewayConfig::from_lookup(lookup_from(&[]));
        assert!(!config.has_credential());
        assert_eq!(config.base_url, DEFAULT_API_BASE);
    }

    #[test]
    fn test_blank_key_counts_as_missing() {
        let config = GatewayConfig::from_lookup(lookup_from(&[("API_KEY", "   ")]));
        assert!(!config.has_credential());
    }

    #[test]
    fn test_api_key_takes_precedence() {
        let config = GatewayConfig::from_lookup(lookup_from(&[
            ("API_KEY", "primary"),
            ("GEMINI_API_KEY", "fallback"),
        ]));
        assert_eq!(config.api_key.as_deref(), Some("primary"));

        let config = GatewayConfig::from_lookup(lookup_from(&[("GEMINI_API_KEY", "fallback")]));
        assert_eq!(config.api_key.as_deref(), Some("fallback"));
    }

    #[test]
    fn test_overrides_and_bad_timeout() {
        let config = GatewayConfig::from_lookup(lookup_from(&[
            ("TAAZA_MODEL", "gemini-2.0-flash"),
            ("TAAZA_TIMEOUT_SECS", "soon"),
        ]));
        assert_eq!(config.model, "gemini-2.0-flash");
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);

        let config = GatewayConfig::from_lookup(lookup_from(&[("TAAZA_TIMEOUT_SECS", "5")]));
        assert_eq!(config.timeout(), std::time::Duration::from_secs(5));
    }

    #[test]
    fn test_debug_redacts_key() {
        let config = GatewayConfig::from_lookup(lookup_from(&[("API_KEY", "sk-secret")]));
        let printed = format!("{:?}", config);
        assert!(!printed.contains("sk-secret"));
        assert!(printed.contains("<redacted>"));
    }

    #[test]
    fn test_serialization_skips_key() {
        let config = GatewayConfig::from_lookup(lookup_from(&[("API_KEY", "sk-secret")]));
        let json = serde_json::to_string(&config).unwrap();
        assert!(!json.contains("sk-secret"));
        let parsed: GatewayConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.model, config.model);
        assert!(parsed.api_key.is_none());
    }
}
