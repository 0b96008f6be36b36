//! Data models and structures
//!
//! Defines the raw and normalized model outputs for both tools plus the
//! runtime configuration shared by the binaries.

use serde::Serialize;
use serde_json::{Map, Value};
use std::time::Duration;

/// Untyped JSON object returned by the model, with no guarantee on keys,
/// value types, or list lengths.
pub type RawModelOutput = Map<String, Value>;

/// Output of the multi-field tagger.
///
/// Carries every key the model returned, in the order it returned them.
/// Only `search_queries` is normalized; `description`, `keywords`, `moods`
/// and `genre` are passed through as-is.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct TagResult {
    fields: Map<String, Value>,
}

impl TagResult {
    pub(crate) fn from_fields(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// The normalized search queries. Always present after normalization.
    pub fn search_queries(&self) -> Vec<&str> {
        self.fields
            .get("search_queries")
            .and_then(Value::as_array)
            .map(|queries| queries.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default()
    }

    pub fn into_inner(self) -> Map<String, Value> {
        self.fields
    }
}

/// Output of the genre-only classifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenreResult {
    pub genre: String,
}

pub const DEFAULT_MODEL: &str = "gpt-5-mini";
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com";

// Configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub timeout: Option<Duration>,
}

impl Config {
    /// Load configuration from `.env` (if present) and the process environment.
    pub fn from_env() -> crate::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source. Empty values are
    /// treated as unset; whitespace-only values are kept.
    pub fn from_lookup<F>(lookup: F) -> crate::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|value| !value.is_empty());

        let api_key = var("OPENAI_API_KEY").ok_or_else(|| {
            crate::Error::Config("Missing OPENAI_API_KEY. Set it in your env or .env.".to_string())
        })?;

        let timeout = var("REQUEST_TIMEOUT_SECS")
            .map(|raw| match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
                _ => Err(crate::Error::Config(format!(
                    "REQUEST_TIMEOUT_SECS must be a positive integer, got '{}'",
                    raw
                ))),
            })
            .transpose()?;

        Ok(Self {
            api_key,
            model: var("MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            base_url: var("OPENAI_BASE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            timeout,
        })
    }

    /// Replace the model identifier, e.g. from a `--model` flag.
    pub fn with_model_override(mut self, model: Option<String>) -> Self {
        if let Some(model) = model.filter(|m| !m.trim().is_empty()) {
            self.model = model;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_config_defaults() {
        let config = Config::from_lookup(lookup(&[("OPENAI_API_KEY", "sk-test")])).unwrap();

        assert_eq!(config.api_key, "sk-test");
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert!(config.timeout.is_none());
    }

    #[test]
    fn test_config_missing_api_key() {
        let err = Config::from_lookup(lookup(&[("MODEL", "gpt-4o")])).unwrap_err();
        assert!(matches!(err, Error::Config(ref msg) if msg.contains("OPENAI_API_KEY")));
    }

    #[test]
    fn test_config_empty_api_key_counts_as_missing() {
        let err = Config::from_lookup(lookup(&[("OPENAI_API_KEY", "")])).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_config_whitespace_api_key_is_kept() {
        let config = Config::from_lookup(lookup(&[("OPENAI_API_KEY", " ")])).unwrap();
        assert_eq!(config.api_key, " ");
    }

    #[test]
    fn test_config_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("OPENAI_API_KEY", "sk-test"),
            ("MODEL", "gpt-4o-mini"),
            ("OPENAI_BASE_URL", "http://localhost:8080/"),
            ("REQUEST_TIMEOUT_SECS", "45"),
        ]))
        .unwrap();

        assert_eq!(config.model, "gpt-4o-mini");
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.timeout, Some(Duration::from_secs(45)));
    }

    #[test]
    fn test_config_rejects_bad_timeout() {
        for bad in ["0", "soon", "-3"] {
            let err = Config::from_lookup(lookup(&[
                ("OPENAI_API_KEY", "sk-test"),
                ("REQUEST_TIMEOUT_SECS", bad),
            ]))
            .unwrap_err();
            assert!(matches!(err, Error::Config(_)), "accepted {}", bad);
        }
    }

    #[test]
    fn test_model_override_ignores_blank() {
        let config = Config::from_lookup(lookup(&[("OPENAI_API_KEY", "sk-test")])).unwrap();

        let config = config.with_model_override(Some("  ".to_string()));
        assert_eq!(config.model, DEFAULT_MODEL);

        let config = config.with_model_override(Some("gpt-4.1".to_string()));
        assert_eq!(config.model, "gpt-4.1");
    }

    #[test]
    fn test_genre_result_serializes_single_key() {
        let result = GenreResult {
            genre: "jazz".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            serde_json::json!({ "genre": "jazz" })
        );
    }

    #[test]
    fn test_tag_result_search_queries_accessor() {
        let mut fields = Map::new();
        fields.insert("search_queries".to_string(), serde_json::json!(["a", "b"]));
        let result = TagResult::from_fields(fields);

        assert_eq!(result.search_queries(), vec!["a", "b"]);
        assert!(result.get("genre").is_none());
    }
}
