//! HTTP inference client for supported providers.
//!
//! This module provides the `InferenceClient`, a single-turn completion
//! client for the Anthropic, Google, and Groq APIs. All provider calls
//! go through `complete`, which dispatches on the provider ID, so the
//! rest of the app never touches provider wire formats.

use super::types::Provider;
use std::time::Duration;
use thiserror::Error;

const ANTHROPIC_BASE_URL: &str = "https://api.anthropic.com";
const GOOGLE_BASE_URL: &str = "https://generativelanguage.googleapis.com";
const GROQ_BASE_URL: &str = "https://api.groq.com/openai/v1";

/// Completion budget for a single generation
const MAX_TOKENS: u64 = 1000;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Errors from a completion request
#[derive(Debug, Error)]
pub enum InferenceError {
    /// The provider answered with a non-success status
    #[error("{message}")]
    Api { status: u16, message: String },

    /// The request never completed (DNS, connect, timeout, body read)
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// The response parsed but held no text content
    #[error("response contained no text content")]
    MissingContent,

    /// No wire format known for this provider ID
    #[error("unsupported provider: {0}")]
    UnsupportedProvider(String),
}

impl InferenceError {
    /// Whether this error indicates a rejected credential
    pub fn is_auth_error(&self) -> bool {
        matches!(self, InferenceError::Api { status: 401, .. })
    }
}

/// Single-turn completion client for LLM APIs
pub struct InferenceClient {
    client: reqwest::Client,
}

impl InferenceClient {
    pub fn new() -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self { client })
    }

    /// Send a prompt to a provider and return the response text
    pub async fn complete(
        &self,
        provider: &Provider,
        model: &str,
        api_key: &str,
        prompt: &str,
    ) -> Result<String, InferenceError> {
        match provider.id.as_str() {
            "anthropic" => self.complete_anthropic(provider, model, api_key, prompt).await,
            "google" => self.complete_google(provider, model, api_key, prompt).await,
            "groq" => self.complete_openai(provider, model, api_key, prompt).await,
            other => Err(InferenceError::UnsupportedProvider(other.to_string())),
        }
    }

    /// Complete via the Anthropic Messages API
    async fn complete_anthropic(
        &self,
        provider: &Provider,
        model: &str,
        api_key: &str,
        prompt: &str,
    ) -> Result<String, InferenceError> {
        let base_url = provider.base_url().unwrap_or(ANTHROPIC_BASE_URL);

        let request_body = serde_json::json!({
            "model": model,
            "max_tokens": MAX_TOKENS,
            "messages": [{ "role": "user", "content": prompt }],
        });

        let response = self
            .client
            .post(format!("{}/v1/messages", base_url.trim_end_matches('/')))
            .header("x-api-key", api_key)
            .header("anthropic-version", "2023-06-01")
            .header("content-type", "application/json")
            .json(&request_body)
            .send()
            .await?;

        let body = Self::read_success_body(response).await?;
        extract_anthropic_text(&body).ok_or(InferenceError::MissingContent)
    }

    /// Complete via the Gemini generateContent API
    async fn complete_google(
        &self,
        provider: &Provider,
        model: &str,
        api_key: &str,
        prompt: &str,
    ) -> Result<String, InferenceError> {
        let base_url = provider.base_url().unwrap_or(GOOGLE_BASE_URL);

        // Gemini passes the key as a query parameter, not a header
        let url = format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            base_url.trim_end_matches('/'),
            model,
            urlencoding::encode(api_key)
        );

        let request_body = serde_json::json!({
            "contents": [{ "parts": [{ "text": prompt }] }],
        });

        let response = self
            .client
            .post(url)
            .header("content-type", "application/json")
            .json(&request_body)
            .send()
            .await?;

        let body = Self::read_success_body(response).await?;
        extract_google_text(&body).ok_or(InferenceError::MissingContent)
    }

    /// Complete via an OpenAI-compatible chat completions API (Groq)
    async fn complete_openai(
        &self,
        provider: &Provider,
        model: &str,
        api_key: &str,
        prompt: &str,
    ) -> Result<String, InferenceError> {
        let base_url = provider.base_url().unwrap_or(GROQ_BASE_URL);

        let request_body = serde_json::json!({
            "model": model,
            "max_tokens": MAX_TOKENS,
            "messages": [{ "role": "user", "content": prompt }],
        });

        let response = self
            .client
            .post(format!(
                "{}/chat/completions",
                base_url.trim_end_matches('/')
            ))
            .header("authorization", format!("Bearer {}", api_key))
            .header("content-type", "application/json")
            .json(&request_body)
            .send()
            .await?;

        let body = Self::read_success_body(response).await?;
        extract_openai_text(&body).ok_or(InferenceError::MissingContent)
    }

    /// Check the response status and parse the JSON body
    async fn read_success_body(
        response: reqwest::Response,
    ) -> Result<serde_json::Value, InferenceError> {
        let status = response.status();
        if !status.is_success() {
            let text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(InferenceError::Api {
                status: status.as_u16(),
                message: extract_error_message(&text, status.as_u16()),
            });
        }

        Ok(response.json().await?)
    }
}

/// Pull the provider's error message out of an error body, falling back
/// to a generic message built from the status code
fn extract_error_message(body: &str, status: u16) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| {
            v.get("error")
                .and_then(|e| e.get("message"))
                .and_then(|m| m.as_str())
                .map(|s| s.to_string())
        })
        .unwrap_or_else(|| format!("API Error: {}", status))
}

/// First text block from an Anthropic messages response
fn extract_anthropic_text(body: &serde_json::Value) -> Option<String> {
    body.get("content")
        .and_then(|c| c.as_array())
        .and_then(|blocks| {
            blocks
                .iter()
                .find(|b| b.get("type").and_then(|t| t.as_str()) == Some("text"))
        })
        .and_then(|b| b.get("text"))
        .and_then(|t| t.as_str())
        .map(|s| s.to_string())
}

/// First candidate text from a Gemini generateContent response
fn extract_google_text(body: &serde_json::Value) -> Option<String> {
    body.get("candidates")
        .and_then(|c| c.get(0))
        .and_then(|c| c.get("content"))
        .and_then(|c| c.get("parts"))
        .and_then(|p| p.get(0))
        .and_then(|p| p.get("text"))
        .and_then(|t| t.as_str())
        .map(|s| s.to_string())
}

/// First choice message content from an OpenAI-compatible response
fn extract_openai_text(body: &serde_json::Value) -> Option<String> {
    body.get("choices")
        .and_then(|c| c.get(0))
        .and_then(|c| c.get("message"))
        .and_then(|m| m.get("content"))
        .and_then(|c| c.as_str())
        .map(|s| s.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    mod error_messages {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_extracts_provider_error_message() {
            let body = r#"{"error": {"message": "invalid x-api-key", "type": "authentication_error"}}"#;
            assert_eq!(extract_error_message(body, 401), "invalid x-api-key");
        }

        #[test]
        fn test_falls_back_to_status_for_non_json() {
            assert_eq!(
                extract_error_message("<html>Bad Gateway</html>", 502),
                "API Error: 502"
            );
        }

        #[test]
        fn test_falls_back_when_shape_differs() {
            assert_eq!(
                extract_error_message(r#"{"detail": "nope"}"#, 429),
                "API Error: 429"
            );
        }
    }

    mod extraction {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_anthropic_picks_text_block() {
            let body = json!({
                "content": [
                    { "type": "tool_use", "id": "t1" },
                    { "type": "text", "text": "Here are 5 ideas" }
                ]
            });
            assert_eq!(
                extract_anthropic_text(&body),
                Some("Here are 5 ideas".to_string())
            );
        }

        #[test]
        fn test_anthropic_missing_text_block() {
            let body = json!({ "content": [{ "type": "tool_use", "id": "t1" }] });
            assert_eq!(extract_anthropic_text(&body), None);
        }

        #[test]
        fn test_google_first_candidate() {
            let body = json!({
                "candidates": [{
                    "content": { "parts": [{ "text": "Trend analysis" }] }
                }]
            });
            assert_eq!(
                extract_google_text(&body),
                Some("Trend analysis".to_string())
            );
        }

        #[test]
        fn test_google_empty_candidates() {
            let body = json!({ "candidates": [] });
            assert_eq!(extract_google_text(&body), None);
        }

        #[test]
        fn test_openai_first_choice() {
            let body = json!({
                "choices": [{
                    "message": { "role": "assistant", "content": "15 hashtags" }
                }]
            });
            assert_eq!(extract_openai_text(&body), Some("15 hashtags".to_string()));
        }

        #[test]
        fn test_openai_no_choices() {
            let body = json!({ "choices": [] });
            assert_eq!(extract_openai_text(&body), None);
        }
    }

    mod errors {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_auth_error_detection() {
            let err = InferenceError::Api {
                status: 401,
                message: "invalid x-api-key".to_string(),
            };
            assert!(err.is_auth_error());

            let err = InferenceError::Api {
                status: 500,
                message: "server error".to_string(),
            };
            assert!(!err.is_auth_error());
        }

        #[test]
        fn test_api_error_displays_message_only() {
            let err = InferenceError::Api {
                status: 429,
                message: "rate limit exceeded".to_string(),
            };
            assert_eq!(err.to_string(), "rate limit exceeded");
        }
    }
}
