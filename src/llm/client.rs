//! Client for an OpenAI-compatible chat-completion endpoint

use crate::advisor::category::detect_category;
use crate::advisor::demo::AdviceResponse;
use crate::config::{LlmConfig, API_KEY_ENV};
use crate::error::{Result, SkillSyncError};
use crate::llm::prompts::CAREER_ADVISOR_SYSTEM_PROMPT;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

const API_KEY_PREFIX: &str = "sk-";

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
    top_p: f32,
    frequency_penalty: f32,
    presence_penalty: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: String,
}

#[derive(Debug, Deserialize)]
struct ApiErrorEnvelope {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// Single-shot chat-completion client. No retries.
#[derive(Clone)]
pub struct ChatCompletionClient {
    client: Client,
    api_key: Option<String>,
    settings: LlmConfig,
}

impl ChatCompletionClient {
    pub fn new(settings: LlmConfig, api_key: Option<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()
            .map_err(|e| SkillSyncError::Network(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_key,
            settings,
        })
    }

    /// True when a key with the expected prefix is present.
    pub fn is_configured(&self) -> bool {
        self.validated_key().is_ok()
    }

    fn validated_key(&self) -> Result<&str> {
        let key = self
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .ok_or_else(|| {
                SkillSyncError::Configuration(format!(
                    "OpenAI API key is not configured. Set {} or llm.api_key.",
                    API_KEY_ENV
                ))
            })?;

        if !key.starts_with(API_KEY_PREFIX) {
            return Err(SkillSyncError::Configuration(
                "Invalid OpenAI API key format. The key should start with \"sk-\".".to_string(),
            ));
        }

        Ok(key)
    }

    /// Ask the model a career question. The key is validated before any
    /// request is sent.
    pub async fn career_advice(&self, question: &str) -> Result<AdviceResponse> {
        let api_key = self.validated_key()?;

        let request = ChatRequest {
            model: &self.settings.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: CAREER_ADVISOR_SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: question,
                },
            ],
            temperature: self.settings.temperature,
            max_tokens: self.settings.max_tokens,
            top_p: self.settings.top_p,
            frequency_penalty: self.settings.frequency_penalty,
            presence_penalty: self.settings.presence_penalty,
        };

        log::debug!("Requesting career advice from {}", self.settings.api_url);

        let response = self
            .client
            .post(&self.settings.api_url)
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiErrorEnvelope>(&body)
                .map(|envelope| envelope.error.message)
                .unwrap_or_else(|_| status.canonical_reason().unwrap_or_default().to_string());
            log::warn!("Chat completion failed with {}: {}", status, message);
            return Err(SkillSyncError::Api {
                status: status.as_u16(),
                message,
            });
        }

        // A body that does not decode is a bad response, not a network failure.
        let body = response.text().await?;
        let body: ChatResponse = serde_json::from_str(&body)?;
        let answer = body
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content.trim().to_string())
            .ok_or(SkillSyncError::EmptyResponse)?;

        Ok(AdviceResponse {
            answer,
            category: detect_category(question),
            is_ai_generated: true,
        })
    }
}

/// Short message suitable for a toast or status line.
pub fn user_facing_message(err: &SkillSyncError) -> &'static str {
    match err {
        SkillSyncError::Configuration(message) if message.contains("API key") => {
            "OpenAI API key is not configured. Please check your environment settings."
        }
        SkillSyncError::Api { status: 429, .. } => "Rate limit exceeded. Please try again in a moment.",
        SkillSyncError::Api { status: 401, .. } => {
            "Invalid API key. Please check your OpenAI configuration."
        }
        SkillSyncError::Network(_) => "Network error. Please check your internet connection.",
        _ => "Failed to generate AI response. Please try again.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::advisor::catalog::Category;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serve one canned HTTP response on a local port and return its URL.
    async fn serve_once(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 4096];
            loop {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
                if request_complete(&request) {
                    break;
                }
            }
            let response = format!(
                "HTTP/1.1 {}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
        });

        format!("http://{}/v1/chat/completions", addr)
    }

    fn request_complete(request: &[u8]) -> bool {
        let text = String::from_utf8_lossy(request);
        let Some(header_end) = text.find("\r\n\r\n") else {
            return false;
        };
        let content_length = text[..header_end]
            .lines()
            .find_map(|line| {
                let (name, value) = line.split_once(':')?;
                name.eq_ignore_ascii_case("content-length")
                    .then(|| value.trim().parse::<usize>().ok())
                    .flatten()
            })
            .unwrap_or(0);
        request.len() >= header_end + 4 + content_length
    }

    fn client_for(url: String, key: Option<&str>) -> ChatCompletionClient {
        let settings = LlmConfig {
            api_url: url,
            timeout_secs: 5,
            ..LlmConfig::default()
        };
        ChatCompletionClient::new(settings, key.map(str::to_string)).unwrap()
    }

    #[tokio::test]
    async fn test_missing_key_fails_before_network() {
        // nothing listens on this port; a request would be a network error
        let client = client_for("http://127.0.0.1:9/unused".to_string(), None);
        let err = client.career_advice("hello").await.unwrap_err();
        assert!(matches!(err, SkillSyncError::Configuration(_)));
        assert!(!client.is_configured());
        assert_eq!(
            user_facing_message(&err),
            "OpenAI API key is not configured. Please check your environment settings."
        );
    }

    #[tokio::test]
    async fn test_key_prefix_is_checked() {
        let client = client_for("http://127.0.0.1:9/unused".to_string(), Some("pk-123"));
        let err = client.career_advice("hello").await.unwrap_err();
        assert!(err.to_string().contains("should start with \"sk-\""));
    }

    #[tokio::test]
    async fn test_successful_completion() {
        let url = serve_once(
            "200 OK",
            r#"{"choices":[{"message":{"role":"assistant","content":"  Learn Python first.  "}}]}"#,
        )
        .await;
        let client = client_for(url, Some("sk-test"));

        let advice = client.career_advice("Should I learn python?").await.unwrap();
        assert_eq!(advice.answer, "Learn Python first.");
        assert_eq!(advice.category, Category::Tech);
        assert!(advice.is_ai_generated);
    }

    #[tokio::test]
    async fn test_error_status_carries_server_message() {
        let url = serve_once(
            "429 Too Many Requests",
            r#"{"error":{"message":"Rate limit reached"}}"#,
        )
        .await;
        let client = client_for(url, Some("sk-test"));

        let err = client.career_advice("hello").await.unwrap_err();
        match &err {
            SkillSyncError::Api { status, message } => {
                assert_eq!(*status, 429);
                assert_eq!(message, "Rate limit reached");
            }
            other => panic!("unexpected error: {:?}", other),
        }
        assert_eq!(
            user_facing_message(&err),
            "Rate limit exceeded. Please try again in a moment."
        );
    }

    #[tokio::test]
    async fn test_empty_choices() {
        let url = serve_once("200 OK", r#"{"choices":[]}"#).await;
        let client = client_for(url, Some("sk-test"));

        let err = client.career_advice("hello").await.unwrap_err();
        assert!(matches!(err, SkillSyncError::EmptyResponse));
    }

    #[tokio::test]
    async fn test_undecodable_body_is_not_a_network_error() {
        let url = serve_once("200 OK", "<html>gateway page</html>").await;
        let client = client_for(url, Some("sk-test"));

        let err = client.career_advice("hello").await.unwrap_err();
        assert!(matches!(err, SkillSyncError::Serialization(_)));
        assert_eq!(
            user_facing_message(&err),
            "Failed to generate AI response. Please try again."
        );
    }

    #[test]
    fn test_user_facing_messages() {
        let unauthorized = SkillSyncError::Api {
            status: 401,
            message: "bad key".to_string(),
        };
        assert_eq!(
            user_facing_message(&unauthorized),
            "Invalid API key. Please check your OpenAI configuration."
        );
        assert_eq!(
            user_facing_message(&SkillSyncError::Network("reset".into())),
            "Network error. Please check your internet connection."
        );
        assert_eq!(
            user_facing_message(&SkillSyncError::EmptyResponse),
            "Failed to generate AI response. Please try again."
        );
    }
}
