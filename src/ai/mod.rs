//! Model gateway
//!
//! Sends a system instruction plus a multimodal user message to a chat model
//! that has been asked for a JSON object, and hands back the parsed object.
//! Shape checking beyond "is this a JSON object" is left to
//! [`crate::normalize`].

pub mod mime;
pub mod mock;
pub mod openai;

pub use mock::MockGateway;
pub use openai::OpenAiGateway;

use crate::models::{Config, RawModelOutput};
use crate::request::MultipartMessage;
use crate::{Error, Result};
use async_trait::async_trait;
use serde_json::Value;

#[async_trait]
pub trait ModelGateway: Send + Sync {
    async fn complete_json(
        &self,
        system: &str,
        message: &MultipartMessage,
    ) -> Result<RawModelOutput>;
}

/// Build the production gateway from configuration.
pub fn gateway_from_config(config: &Config) -> Box<dyn ModelGateway> {
    tracing::info!("Model provider: OpenAI (model: {})", config.model);
    Box::new(OpenAiGateway::from_config(config))
}

/// Parse model text as a JSON object. Valid JSON of any other shape is
/// rejected; missing keys are not.
pub fn parse_json_object(text: &str) -> Result<RawModelOutput> {
    let value: Value = serde_json::from_str(text).map_err(|e| {
        tracing::error!("Model returned invalid JSON: {}\nContent: {}", e, text);
        Error::MalformedResponse(format!("Model output is not valid JSON: {}", e))
    })?;

    match value {
        Value::Object(map) => Ok(map),
        other => Err(Error::MalformedResponse(format!(
            "Expected a JSON object, got: {}",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_json_object_accepts_objects() {
        let map = parse_json_object(r#"{"genre": "jazz", "extra": [1, 2]}"#).unwrap();
        assert_eq!(map.get("genre"), Some(&Value::from("jazz")));
    }

    #[test]
    fn test_parse_json_object_accepts_missing_keys() {
        assert!(parse_json_object("{}").unwrap().is_empty());
    }

    #[test]
    fn test_parse_json_object_rejects_invalid_json() {
        let err = parse_json_object("genre: jazz").unwrap_err();
        assert!(matches!(err, Error::MalformedResponse(_)));
    }

    #[test]
    fn test_parse_json_object_rejects_non_objects() {
        for text in ["[\"jazz\"]", "\"jazz\"", "null", "3"] {
            let err = parse_json_object(text).unwrap_err();
            assert!(matches!(err, Error::MalformedResponse(_)), "accepted {}", text);
        }
    }
}
