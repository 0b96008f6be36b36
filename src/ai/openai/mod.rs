pub mod chat;
pub mod client;
pub mod types;

pub use chat::OpenAiGateway;
pub use client::OpenAiHttpClient;

#[cfg(test)]
pub(crate) mod test_support {
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockBuilder, ResponseTemplate};

    pub use super::client::CHAT_COMPLETIONS_PATH;

    pub fn post(endpoint: &str) -> MockBuilder {
        Mock::given(method("POST")).and(path(endpoint))
    }

    /// A successful chat completion whose message text is `content`.
    pub fn chat_reply(content: &str) -> ResponseTemplate {
        ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "choices": [{
                "message": { "role": "assistant", "content": content },
                "finish_reason": "stop"
            }]
        }))
    }
}
