use super::client::OpenAiHttpClient;
use super::types::{ChatCompletionRequest, ChatMessage, ChatMessageContent, ResponseFormat};
use crate::ai::{parse_json_object, ModelGateway};
use crate::models::{Config, RawModelOutput};
use crate::request::MultipartMessage;
use crate::{Error, Result};
use async_trait::async_trait;

/// [`ModelGateway`] backed by OpenAI chat completions in JSON-object mode.
pub struct OpenAiGateway {
    http: OpenAiHttpClient,
    model: String,
}

impl OpenAiGateway {
    pub fn new(api_key: String, model: String) -> Self {
        Self::new_with_client(api_key, model, reqwest::Client::new())
    }

    pub fn new_with_client(api_key: String, model: String, client: reqwest::Client) -> Self {
        Self {
            http: OpenAiHttpClient::new_with_client(api_key, client),
            model,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        let mut gateway = Self::new(config.api_key.clone(), config.model.clone());
        gateway.http = gateway
            .http
            .with_base_url(config.base_url.clone())
            .with_timeout(config.timeout);
        gateway
    }

    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.http = self.http.with_base_url(base_url);
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl ModelGateway for OpenAiGateway {
    async fn complete_json(
        &self,
        system: &str,
        message: &MultipartMessage,
    ) -> Result<RawModelOutput> {
        tracing::debug!(
            "Sending {}-part chat completion request to OpenAI (model: {})",
            message.parts().len(),
            self.model
        );

        let request = ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage::system(system), ChatMessage::user(message)],
            response_format: Some(ResponseFormat::json_object()),
        };

        let response = self.http.chat_completion(&request).await?;

        let choice = response
            .choices
            .first()
            .ok_or_else(|| Error::AiProvider("No response from OpenAI chat API".to_string()))?;

        let content = match &choice.message.content {
            Some(ChatMessageContent::Text(text)) => text,
            _ => {
                return Err(Error::MalformedResponse(format!(
                    "OpenAI returned no text content (finish_reason: {})",
                    choice.finish_reason.as_deref().unwrap_or("none")
                )))
            }
        };

        parse_json_object(content)
    }
}
