/// LLM Client — the single point of entry for the outbound model call.
///
/// ARCHITECTURAL RULE: No other module may call the text-generation API
/// directly. All model interactions MUST go through this module.
///
/// The endpoint speaks the OpenAI-compatible chat-completions wire format.
/// A call is a single attempt: failures are reported to the caller, which
/// falls back to template mode instead of retrying.
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

const CHAT_COMPLETIONS_URL: &str = "https://api.groq.com/openai/v1/chat/completions";
/// The model used for all generation calls.
/// Intentionally hardcoded to prevent accidental drift.
pub const MODEL: &str = "mixtral-8x7b-32768";
const MAX_TOKENS: u32 = 1500;
const TEMPERATURE: f32 = 0.7;
const REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("LLM returned empty content")]
    EmptyContent,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
    temperature: f32,
    stream: bool,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    pub choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
pub struct ResponseMessage {
    pub content: String,
}

impl ChatResponse {
    /// Extracts the text content of the first choice.
    pub fn text(&self) -> Option<&str> {
        self.choices.first().map(|c| c.message.content.as_str())
    }
}

#[derive(Debug, Deserialize)]
struct ApiError {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// The single LLM client used for content generation.
/// Wraps the chat-completions API behind one `complete` call.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_key: String,
}

impl LlmClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
        }
    }

    /// Makes one call to the chat-completions endpoint and returns the
    /// generated text, trimmed of surrounding whitespace.
    ///
    /// No retry, no backoff: any failure is returned so the caller can
    /// downgrade to template mode.
    pub async fn complete(&self, system: &str, prompt: &str) -> Result<String, LlmError> {
        let request_body = ChatRequest {
            model: MODEL,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
            stream: false,
        };

        let response = self
            .client
            .post(CHAT_COMPLETIONS_URL)
            .bearer_auth(&self.api_key)
            .header("content-type", "application/json")
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            // Prefer the structured error message when the body parses
            let message = serde_json::from_str::<ApiError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let chat_response: ChatResponse = response.json().await?;

        let text = chat_response.text().ok_or(LlmError::EmptyContent)?;
        let text = text.trim();
        if text.is_empty() {
            return Err(LlmError::EmptyContent);
        }

        debug!("LLM call succeeded: {} chars of content", text.len());

        Ok(text.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_response_text_extracts_first_choice() {
        let json = r#"{
            "choices": [
                {"message": {"role": "assistant", "content": "Dear Hiring Manager,"}},
                {"message": {"role": "assistant", "content": "second choice"}}
            ]
        }"#;
        let response: ChatResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.text(), Some("Dear Hiring Manager,"));
    }

    #[test]
    fn test_chat_response_without_choices_has_no_text() {
        let json = r#"{"choices": []}"#;
        let response: ChatResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.text(), None);
    }

    #[test]
    fn test_api_error_body_parses() {
        let json = r#"{"error": {"message": "Invalid API key", "type": "auth_error"}}"#;
        let parsed: ApiError = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.error.message, "Invalid API key");
    }

    #[test]
    fn test_chat_request_serializes_system_and_user_roles() {
        let request = ChatRequest {
            model: MODEL,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: "You are a professional letter writer.",
                },
                ChatMessage {
                    role: "user",
                    content: "Write a letter.",
                },
            ],
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
            stream: false,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["model"], MODEL);
        assert_eq!(value["messages"][0]["role"], "system");
        assert_eq!(value["messages"][1]["role"], "user");
        assert_eq!(value["stream"], false);
    }
}
