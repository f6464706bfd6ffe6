use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::LlmConfig;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("no LLM API key configured")]
    NotConfigured,

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("api error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("json parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("llm returned empty content")]
    EmptyContent,

    #[error("llm returned no usable courses")]
    NoCourses,
}

/// Chat-completion backend. The single seam through which the service talks to
/// a model; handlers only ever see this trait.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Sends one system + user exchange in JSON mode and returns the raw text of
    /// the first choice.
    async fn complete_json(&self, system: &str, user: &str) -> Result<String, LlmError>;
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    response_format: ResponseFormat,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorEnvelope {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// OpenAI-compatible `/chat/completions` client.
#[derive(Clone)]
pub struct OpenAiClient {
    client: Client,
    api_key: Option<String>,
    model: String,
    endpoint: String,
}

impl OpenAiClient {
    pub fn from_config(cfg: &LlmConfig) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(cfg.timeout_secs))
            .build()
            .context("build llm http client")?;
        if cfg.api_key.is_none() {
            warn!("OPENAI_API_KEY not set; recommendations are disabled");
        }
        Ok(Self {
            client,
            api_key: cfg.api_key.clone(),
            model: cfg.model.clone(),
            endpoint: format!("{}/chat/completions", cfg.base_url.trim_end_matches('/')),
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl CompletionClient for OpenAiClient {
    async fn complete_json(&self, system: &str, user: &str) -> Result<String, LlmError> {
        let api_key = self.api_key.as_deref().ok_or(LlmError::NotConfigured)?;

        let body = ChatRequest {
            model: &self.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: user,
                },
            ],
            response_format: ResponseFormat {
                kind: "json_object",
            },
            temperature: 0.7,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiErrorEnvelope>(&text)
                .map(|e| e.error.message)
                .unwrap_or(text);
            warn!(status = status.as_u16(), %message, "llm api error");
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: ChatResponse = response.json().await?;
        let content = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .filter(|c| !c.trim().is_empty())
            .ok_or(LlmError::EmptyContent)?;

        debug!(model = %self.model, chars = content.len(), "llm call succeeded");
        Ok(content)
    }
}

/// Strips ```json ... ``` or ``` ... ``` fences some models wrap JSON in.
pub fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    let inner = text
        .strip_prefix("```json")
        .or_else(|| text.strip_prefix("```"));
    match inner {
        Some(rest) => {
            let rest = rest.trim_start();
            rest.strip_suffix("```").map(str::trim).unwrap_or(rest)
        }
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(api_key: Option<&str>) -> LlmConfig {
        LlmConfig {
            api_key: api_key.map(str::to_string),
            model: "gpt-test".into(),
            base_url: "http://127.0.0.1:9/v1/".into(),
            timeout_secs: 1,
        }
    }

    #[test]
    fn strips_fences_with_json_tag() {
        let input = "```json\n{\"courses\": []}\n```";
        assert_eq!(strip_json_fences(input), "{\"courses\": []}");
    }

    #[test]
    fn strips_bare_fences() {
        let input = "```\n{\"courses\": []}\n```";
        assert_eq!(strip_json_fences(input), "{\"courses\": []}");
    }

    #[test]
    fn leaves_plain_json_alone() {
        let input = "  {\"courses\": []}  ";
        assert_eq!(strip_json_fences(input), "{\"courses\": []}");
    }

    #[test]
    fn endpoint_has_single_slash() {
        let client = OpenAiClient::from_config(&config(Some("k"))).unwrap();
        assert_eq!(client.endpoint, "http://127.0.0.1:9/v1/chat/completions");
        assert_eq!(client.model(), "gpt-test");
    }

    #[tokio::test]
    async fn missing_key_short_circuits() {
        let client = OpenAiClient::from_config(&config(None)).unwrap();
        let err = client.complete_json("sys", "user").await.unwrap_err();
        assert!(matches!(err, LlmError::NotConfigured));
    }

    #[test]
    fn request_serializes_json_mode() {
        let body = ChatRequest {
            model: "m",
            messages: [
                ChatMessage {
                    role: "system",
                    content: "s",
                },
                ChatMessage {
                    role: "user",
                    content: "u",
                },
            ],
            response_format: ResponseFormat {
                kind: "json_object",
            },
            temperature: 0.7,
        };
        let v = serde_json::to_value(&body).unwrap();
        assert_eq!(v["response_format"]["type"], "json_object");
        assert_eq!(v["messages"][0]["role"], "system");
        assert_eq!(v["messages"][1]["content"], "u");
    }
}
