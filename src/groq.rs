use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use tracing::{info, error};

use crate::error::GenerationError;

pub const GROQ_MODEL: &str = "llama-3.3-70b-versatile";

/// Seam between the pipeline and the completion endpoint, so tests can swap
/// in a scripted transport.
#[async_trait]
pub trait CompletionApi: Send + Sync {
    /// Send one prompt, get back the raw text of the first completion choice.
    async fn complete(&self, prompt: &str) -> Result<String, GenerationError>;
}

pub struct GroqClient {
    client: Client,
    api_key: Option<String>,
    base_url: String,
}

impl GroqClient {
    /// The credential is injected here and never read again; a missing key
    /// is reported on the first request rather than crashing startup.
    pub fn new(api_key: Option<String>) -> Self {
        let base_url = std::env::var("GROQ_API_BASE")
            .unwrap_or_else(|_| "https://api.groq.com/openai/v1".to_string());
        Self {
            client: Client::new(),
            api_key,
            base_url,
        }
    }
}

#[async_trait]
impl CompletionApi for GroqClient {
    async fn complete(&self, prompt: &str) -> Result<String, GenerationError> {
        let api_key = self
            .api_key
            .as_deref()
            .filter(|k| !k.is_empty())
            .ok_or_else(|| GenerationError::Transport("GROQ_API_KEY is not set".into()))?;

        let url = format!("{}/chat/completions", self.base_url);
        let request_body = json!({
            "model": GROQ_MODEL,
            "messages": [
                { "role": "user", "content": prompt }
            ]
        });

        info!("📤 Sending completion request to {} (model {})", url, GROQ_MODEL);

        let response = self.client
            .post(&url)
            .bearer_auth(api_key)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| GenerationError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            error!("❌ Completion API error: status={} body={}", status, error_body);
            return Err(GenerationError::Transport(format!("status={status} body={error_body}")));
        }

        let response_text = response
            .text()
            .await
            .map_err(|e| GenerationError::Transport(e.to_string()))?;
        let parsed: ChatResponse = serde_json::from_str(&response_text)
            .map_err(|e| GenerationError::Transport(format!("envelope parse error: {e}")))?;

        let content = parsed
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| GenerationError::Transport("no choices in completion response".into()))?;

        info!("📥 Received completion ({} chars)", content.len());
        Ok(content)
    }
}

// --- Response Parsing Helpers ---

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn envelope_takes_the_first_choice() {
        let body = r#"{
            "id": "chatcmpl-123",
            "object": "chat.completion",
            "choices": [
                { "index": 0, "message": { "role": "assistant", "content": "first" }, "finish_reason": "stop" },
                { "index": 1, "message": { "role": "assistant", "content": "second" }, "finish_reason": "stop" }
            ],
            "usage": { "total_tokens": 42 }
        }"#;
        let parsed: ChatResponse = serde_json::from_str(body).unwrap();
        let content = parsed.choices.into_iter().next().unwrap().message.content;
        assert_eq!(content, "first");
    }

    #[test]
    fn envelope_without_choices_parses_empty() {
        let parsed: ChatResponse = serde_json::from_str(r#"{"id":"x"}"#).unwrap();
        assert!(parsed.choices.is_empty());
    }

    #[tokio::test]
    async fn missing_credential_fails_before_any_request() {
        let client = GroqClient::new(None);
        match client.complete("hello").await {
            Err(GenerationError::Transport(msg)) => assert!(msg.contains("GROQ_API_KEY")),
            other => panic!("expected Transport error, got {other:?}"),
        }

        let client = GroqClient::new(Some(String::new()));
        assert!(matches!(
            client.complete("hello").await,
            Err(GenerationError::Transport(_))
        ));
    }
}
