use crate::config::Config;
use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use log::warn;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// A hosted chat-completion provider constrained to JSON-object output.
#[async_trait]
pub trait ChatClient: Send + Sync + Debug {
    /// Send one system/user message pair and return the raw assistant text.
    /// A choice with no content comes back as `"{}"` so downstream parsing
    /// sees an empty object rather than an error.
    async fn chat_json(&self, system: &str, user: &str) -> Result<String>;
}

pub fn create_client(config: &Config) -> Result<Box<dyn ChatClient>> {
    match config.llm.provider.as_str() {
        "groq" => {
            let cfg = config.llm.groq.clone().unwrap_or_default();
            let api_key = resolve_api_key(cfg.api_key.as_deref(), "GROQ_API_KEY")?;
            Ok(Box::new(GroqClient::new(&api_key, &cfg.model, &cfg.base_url)))
        }
        "openai" => {
            let cfg = config.llm.openai.as_ref().context("OpenAI config missing")?;
            let api_key = resolve_api_key(cfg.api_key.as_deref(), "OPENAI_API_KEY")?;
            let base_url = cfg.base_url.as_deref().unwrap_or("https://api.openai.com/v1");
            Ok(Box::new(GroqClient::new(&api_key, &cfg.model, base_url)))
        }
        other => Err(anyhow!("Unknown LLM provider: {}", other)),
    }
}

fn resolve_api_key(configured: Option<&str>, env_var: &str) -> Result<String> {
    if let Some(key) = configured {
        return Ok(key.to_string());
    }
    std::env::var(env_var).map_err(|_| anyhow!("API key not set in config or {}", env_var))
}

/// OpenAI-compatible chat-completion client. Groq speaks the same wire
/// format, so one client covers both providers.
#[derive(Debug)]
pub struct GroqClient {
    api_key: String,
    model: String,
    base_url: String,
    client: reqwest::Client,
}

impl GroqClient {
    pub fn new(api_key: &str, model: &str, base_url: &str) -> Self {
        Self {
            api_key: api_key.to_string(),
            model: model.to_string(),
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }
}

#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f64,
    response_format: ResponseFormat,
}

#[derive(Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    format_type: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatMessageResponse,
}

#[derive(Deserialize)]
struct ChatMessageResponse {
    content: Option<String>,
}

// Higher than the provider default so repeated requests for the same game
// still produce novel storylines.
const TEMPERATURE: f64 = 0.8;

#[async_trait]
impl ChatClient for GroqClient {
    async fn chat_json(&self, system: &str, user: &str) -> Result<String> {
        let url = format!("{}/chat/completions", self.base_url);

        let request_body = ChatRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: system.to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: user.to_string(),
                },
            ],
            temperature: TEMPERATURE,
            response_format: ResponseFormat {
                format_type: "json_object".to_string(),
            },
        };

        let resp = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&request_body)
            .send()
            .await?;

        if !resp.status().is_success() {
            let error_text = resp.text().await?;
            return Err(anyhow!("Completion API error: {}", error_text));
        }

        let result: ChatResponse = resp.json().await?;
        match result.choices.first().and_then(|c| c.message.content.clone()) {
            Some(content) => Ok(content),
            None => {
                warn!("Completion response carried no content, treating as empty object");
                Ok("{}".to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LlmConfig;

    #[test]
    fn test_unknown_provider_is_rejected() {
        let config = Config {
            llm: LlmConfig {
                provider: "palm".to_string(),
                groq: None,
                openai: None,
            },
            ..Config::default()
        };
        let err = create_client(&config).unwrap_err();
        assert!(err.to_string().contains("Unknown LLM provider"));
    }

    #[test]
    fn test_configured_key_wins_over_env() {
        let key = resolve_api_key(Some("from-config"), "SHOWRUNNER_TEST_UNSET").unwrap();
        assert_eq!(key, "from-config");
    }

    #[test]
    fn test_missing_key_is_an_error() {
        let err = resolve_api_key(None, "SHOWRUNNER_TEST_UNSET").unwrap_err();
        assert!(err.to_string().contains("SHOWRUNNER_TEST_UNSET"));
    }

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let client = GroqClient::new("k", "m", "https://api.groq.com/openai/v1/");
        assert_eq!(client.base_url, "https://api.groq.com/openai/v1");
    }

    #[test]
    fn test_request_body_shape() {
        let body = ChatRequest {
            model: "llama-3.3-70b-versatile".to_string(),
            messages: vec![ChatMessage {
                role: "system".to_string(),
                content: "directive".to_string(),
            }],
            temperature: TEMPERATURE,
            response_format: ResponseFormat {
                format_type: "json_object".to_string(),
            },
        };
        let json: serde_json::Value = serde_json::to_value(&body).unwrap();
        assert_eq!(json["temperature"], 0.8);
        assert_eq!(json["response_format"]["type"], "json_object");
        assert_eq!(json["messages"][0]["role"], "system");
    }
}
