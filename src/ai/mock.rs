use super::ModelGateway;
use crate::models::RawModelOutput;
use crate::request::MultipartMessage;
use crate::Result;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::{Arc, Mutex};

/// A request captured by [`MockGateway`].
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub system: String,
    pub message: MultipartMessage,
}

/// In-memory gateway that replays canned JSON objects in rotation.
pub struct MockGateway {
    responses: Arc<Mutex<Vec<RawModelOutput>>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockGateway {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(Vec::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Queue a response. Non-object values are wrapped as `{"value": ...}`.
    pub fn with_response(self, response: Value) -> Self {
        let object = match response {
            Value::Object(map) => map,
            other => {
                let mut map = RawModelOutput::new();
                map.insert("value".to_string(), other);
                map
            }
        };
        self.responses.lock().unwrap().push(object);
        self
    }

    pub fn get_call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl Default for MockGateway {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ModelGateway for MockGateway {
    async fn complete_json(
        &self,
        system: &str,
        message: &MultipartMessage,
    ) -> Result<RawModelOutput> {
        let mut requests = self.requests.lock().unwrap();
        requests.push(RecordedRequest {
            system: system.to_string(),
            message: message.clone(),
        });

        let responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            // Default mock response
            Ok(RawModelOutput::new())
        } else {
            let index = (requests.len() - 1) % responses.len();
            Ok(responses[index].clone())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_mock_gateway_default_response() {
        let gateway = MockGateway::new();
        let out = tokio_test::block_on(gateway.complete_json("s", &MultipartMessage::new()))
            .unwrap();
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn test_mock_gateway_custom_responses() {
        let gateway = MockGateway::new()
            .with_response(json!({ "genre": "jazz" }))
            .with_response(json!({ "genre": "funk" }));

        let message = MultipartMessage::new();
        let first = gateway.complete_json("s", &message).await.unwrap();
        assert_eq!(first["genre"], "jazz");

        let second = gateway.complete_json("s", &message).await.unwrap();
        assert_eq!(second["genre"], "funk");

        // Should cycle back
        let third = gateway.complete_json("s", &message).await.unwrap();
        assert_eq!(third["genre"], "jazz");
    }

    #[tokio::test]
    async fn test_mock_gateway_records_requests() {
        let gateway = MockGateway::new();
        let mut message = MultipartMessage::new();
        message.push_text("TEXT: hi");

        assert_eq!(gateway.get_call_count(), 0);
        gateway.complete_json("system prompt", &message).await.unwrap();

        assert_eq!(gateway.get_call_count(), 1);
        let requests = gateway.requests();
        assert_eq!(requests[0].system, "system prompt");
        assert_eq!(requests[0].message, message);
    }
}
