//! Cohere chat provider.
//!
//! Implements `ChatProvider` against Cohere's chat endpoint, passing the
//! grounding chunks as `documents` and letting the API handle prompt
//! truncation (`prompt_truncation: AUTO`). No retries: transport and API
//! failures are returned to the caller as-is.

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::provider::ChatProvider;
use super::types::{Role, Turn};
use crate::chunking::Chunk;

const COHERE_API_URL: &str = "https://api.cohere.com/v1/chat";

/// Cohere provider configuration and state.
pub struct CohereProvider {
    client: Client,
    api_key: String,
    model: String,
}

impl CohereProvider {
    pub fn new(api_key: String, model: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            model,
        }
    }
}

#[async_trait]
impl ChatProvider for CohereProvider {
    fn model(&self) -> &str {
        &self.model
    }

    async fn chat(&self, message: &str, history: &[Turn], documents: &[Chunk]) -> Result<String> {
        let request = ChatRequest {
            model: &self.model,
            message,
            chat_history: history.iter().map(ApiTurn::from).collect(),
            documents,
            prompt_truncation: "AUTO",
        };

        let response = self
            .client
            .post(COHERE_API_URL)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .context("Failed to send request to Cohere")?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            anyhow::bail!("Cohere API error ({}): {}", status, error_text);
        }

        let chat_response: ChatResponse = response
            .json()
            .await
            .context("Failed to parse Cohere response")?;

        Ok(chat_response.text)
    }
}

// -----------------------------------------------------------------------------
// Cohere DTOs (Data Transfer Objects)
// -----------------------------------------------------------------------------

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    message: &'a str,
    chat_history: Vec<ApiTurn>,
    documents: &'a [Chunk],
    prompt_truncation: &'a str,
}

#[derive(Serialize)]
struct ApiTurn {
    role: String,
    message: String,
}

impl From<&Turn> for ApiTurn {
    fn from(turn: &Turn) -> Self {
        Self {
            role: match turn.role {
                Role::User => "USER".to_string(),
                Role::Assistant => "CHATBOT".to_string(),
            },
            message: turn.text.clone(),
        }
    }
}

#[derive(Deserialize)]
struct ChatResponse {
    text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_shape_matches_the_chat_api() {
        let history = vec![Turn::assistant("How can I help you?"), Turn::user("hi")];
        let documents = vec![Chunk {
            title: "Page 1 Part 1".to_string(),
            snippet: "snippet text".to_string(),
        }];

        let request = ChatRequest {
            model: "command-r",
            message: "what does page 1 say?",
            chat_history: history.iter().map(ApiTurn::from).collect(),
            documents: &documents,
            prompt_truncation: "AUTO",
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "command-r");
        assert_eq!(json["message"], "what does page 1 say?");
        assert_eq!(json["prompt_truncation"], "AUTO");
        assert_eq!(json["chat_history"][0]["role"], "CHATBOT");
        assert_eq!(json["chat_history"][0]["message"], "How can I help you?");
        assert_eq!(json["chat_history"][1]["role"], "USER");
        assert_eq!(json["documents"][0]["title"], "Page 1 Part 1");
        assert_eq!(json["documents"][0]["snippet"], "snippet text");
    }

    #[test]
    fn test_response_parsing_takes_the_text_field() {
        let body = r#"{"text": "The bus leaves at 7:45.", "generation_id": "abc", "finish_reason": "COMPLETE"}"#;
        let parsed: ChatResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.text, "The bus leaves at 7:45.");
    }
}
