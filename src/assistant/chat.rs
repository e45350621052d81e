//! Study-advisor chat backed by Google's Gemini API.
//!
//! `ChatService` is an enum over backends so callers need no trait objects.
//! Replies are always plain text: configuration problems and request
//! failures turn into apology messages and are logged, never returned.

use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::Mutex;

use crate::config::Config;

pub const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

pub const SYSTEM_PROMPT: &str = "You are a professional education advisor who helps students plan \
their learning paths and course selections. You should:
1. Give personalized suggestions based on the courses a student has taken and their interests
2. Take course difficulty, prerequisites and career direction into account
3. Give concrete course recommendations and study plans
4. Use a friendly, professional tone and explain your reasoning in detail";

pub const NOT_CONFIGURED_REPLY: &str =
    "The chat assistant is not configured. Please contact the administrator.";
pub const EMPTY_REPLY: &str = "Sorry, no valid reply was received.";

/// Keep at most this many turns of conversation history.
const MAX_HISTORY: usize = 40;

#[derive(Debug, Error)]
pub enum ChatError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("failed to build HTTP client: {0}")]
    Client(reqwest::Error),

    #[error("Gemini returned {status}: {body}")]
    Status { status: u16, body: String },
}

#[derive(Debug, Clone)]
pub enum ChatService {
    /// No API key; every message gets [`NOT_CONFIGURED_REPLY`].
    Unconfigured,
    Gemini(GeminiClient),
}

impl ChatService {
    pub fn from_config(config: &Config) -> Self {
        match &config.google_api_key {
            Some(key) => match GeminiClient::new(
                GEMINI_BASE_URL,
                config.gemini_model.clone(),
                key.clone(),
                config.chat_timeout,
            ) {
                Ok(client) => Self::Gemini(client),
                Err(e) => {
                    tracing::error!("Chat assistant disabled: {}", e);
                    Self::Unconfigured
                }
            },
            None => {
                tracing::warn!("GOOGLE_API_KEY not set, chat assistant disabled");
                Self::Unconfigured
            }
        }
    }

    pub fn is_configured(&self) -> bool {
        matches!(self, Self::Gemini(_))
    }

    pub async fn reply(&self, message: &str) -> String {
        let client = match self {
            Self::Unconfigured => return NOT_CONFIGURED_REPLY.to_string(),
            Self::Gemini(client) => client,
        };

        match client.send(message).await {
            Ok(Some(text)) => text,
            Ok(None) => EMPTY_REPLY.to_string(),
            Err(e) => {
                tracing::error!("Error calling Gemini API: {}", e);
                format!("Sorry, an error occurred while calling the API: {}", e)
            }
        }
    }
}

// ============================================================
// Gemini wire types
// ============================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Content {
    #[serde(default)]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<Part>,
}

impl Content {
    fn text(role: &str, text: &str) -> Self {
        Self {
            role: Some(role.to_string()),
            parts: vec![Part {
                text: text.to_string(),
            }],
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest<'a> {
    system_instruction: Content,
    contents: &'a [Content],
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

// ============================================================
// Client
// ============================================================

/// A single ongoing conversation with a Gemini model.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    base_url: String,
    model: String,
    api_key: String,
    client: Client,
    history: Arc<Mutex<Vec<Content>>>,
}

impl GeminiClient {
    pub fn new(
        base_url: impl Into<String>,
        model: impl Into<String>,
        api_key: String,
        timeout: Duration,
    ) -> Result<Self, ChatError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(ChatError::Client)?;

        Ok(Self {
            base_url: base_url.into(),
            model: model.into(),
            api_key,
            client,
            history: Arc::new(Mutex::new(Vec::new())),
        })
    }

    /// Send a user message and return the model's text, if it produced any.
    ///
    /// The history lock is held only to snapshot and to append, never across
    /// the request. The exchange is recorded only on success.
    pub async fn send(&self, message: &str) -> Result<Option<String>, ChatError> {
        let mut contents = self.history.lock().await.clone();
        contents.push(Content::text("user", message));

        let url = format!("{}/models/{}:generateContent", self.base_url, self.model);
        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&GenerateRequest {
                system_instruction: Content {
                    role: None,
                    parts: vec![Part {
                        text: SYSTEM_PROMPT.to_string(),
                    }],
                },
                contents: &contents,
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ChatError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: GenerateResponse = response.json().await?;
        let text: String = parsed
            .candidates
            .into_iter()
            .filter_map(|c| c.content)
            .flat_map(|c| c.parts)
            .map(|p| p.text)
            .collect();

        if text.trim().is_empty() {
            return Ok(None);
        }

        let mut history = self.history.lock().await;
        history.push(Content::text("user", message));
        history.push(Content::text("model", &text));
        let overflow = history.len().saturating_sub(MAX_HISTORY);
        history.drain(..overflow);

        Ok(Some(text))
    }

    pub async fn history_len(&self) -> usize {
        self.history.lock().await.len()
    }
}
