//! Topic-explainer client.
//!
//! Thin wrapper over a hosted chat-completions API used to produce
//! natural-language topic explanations. The scheduler never depends on
//! this: a failed explanation leaves the computed plan untouched, and
//! retry policy is the caller's business.

use std::time::Duration;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::api::{StudentProfile, WeekSchedule, Weekday};

/// Default chat-completions endpoint.
pub const DEFAULT_API_URL: &str = "https://openrouter.ai/api/v1/chat/completions";

/// Default model id.
pub const DEFAULT_MODEL: &str = "deepseek/deepseek-r1-0528:free";

const SYSTEM_PROMPT: &str = "You are an AI study assistant for engineering students. \
You must ALWAYS respond in English only, regardless of the language the user uses. \
Always use proper English grammar and spelling.";

const REQUEST_TIMEOUT_SECS: u64 = 60;

/// Number of past turns sent with each request.
const HISTORY_WINDOW: usize = 10;

/// Number of turns retained in memory.
const HISTORY_LIMIT: usize = 20;

/// Categorized explainer failure. Each variant's message is the
/// user-facing text for that failure class.
#[derive(Debug, Error)]
pub enum ExplainerError {
    #[error("Your API key may be invalid. Please check the API key.")]
    Unauthorized,
    #[error("Too many requests. Please wait a moment and try again.")]
    RateLimited,
    #[error("Network error. Please check your internet connection.")]
    Network(#[source] reqwest::Error),
    #[error("The explainer request failed. Please try again.")]
    Unknown(String),
}

/// Explainer configuration, environment-driven.
#[derive(Debug, Clone)]
pub struct ExplainerConfig {
    pub api_url: String,
    pub model: String,
    pub api_key: String,
}

impl ExplainerConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_key: api_key.into(),
        }
    }

    /// Load configuration from environment variables.
    ///
    /// # Environment Variables
    /// - `OPENROUTER_API_KEY` (required): API key for the hosted model
    /// - `EXPLAINER_API_URL` (optional): chat-completions endpoint
    /// - `EXPLAINER_MODEL` (optional): model id
    pub fn from_env() -> Result<Self, String> {
        let api_key = std::env::var("OPENROUTER_API_KEY")
            .map_err(|_| "OPENROUTER_API_KEY environment variable not set".to_string())?;
        let mut config = Self::new(api_key);
        if let Ok(url) = std::env::var("EXPLAINER_API_URL") {
            config.api_url = url;
        }
        if let Ok(model) = std::env::var("EXPLAINER_MODEL") {
            config.model = model;
        }
        Ok(config)
    }
}

/// Role of one chat turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    System,
    User,
    Assistant,
}

/// One retained chat turn.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: ChatRole,
    pub content: String,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: &'a [ChatTurn],
    temperature: f64,
    max_tokens: u32,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Deserialize)]
struct ChatMessage {
    content: String,
}

/// Client for the topic-explainer service with a bounded chat history.
pub struct ExplainerClient {
    config: ExplainerConfig,
    client: reqwest::Client,
    history: Vec<ChatTurn>,
}

impl ExplainerClient {
    pub fn new(config: ExplainerConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .unwrap_or_default();
        Self {
            config,
            client,
            history: Vec::new(),
        }
    }

    /// The fixed prompt sent for a topic explanation.
    pub fn explanation_prompt(topic: &str, subject: &str) -> String {
        format!(
            "Can you explain {} in {} for engineering students? \
             Include key concepts and study tips.",
            topic, subject
        )
    }

    /// Ask for an explanation of a topic within a subject.
    pub async fn explain_topic(
        &mut self,
        topic: &str,
        subject: &str,
    ) -> Result<String, ExplainerError> {
        self.ask(Self::explanation_prompt(topic, subject)).await
    }

    /// Send one user message, returning the assistant's reply.
    pub async fn ask(&mut self, message: String) -> Result<String, ExplainerError> {
        let mut messages = vec![ChatTurn {
            role: ChatRole::System,
            content: SYSTEM_PROMPT.to_string(),
        }];
        let tail_start = self.history.len().saturating_sub(HISTORY_WINDOW);
        messages.extend(self.history[tail_start..].iter().cloned());
        messages.push(ChatTurn {
            role: ChatRole::User,
            content: message.clone(),
        });

        let request = ChatRequest {
            model: &self.config.model,
            messages: &messages,
            temperature: 0.7,
            max_tokens: 1024,
        };

        let response = self
            .client
            .post(&self.config.api_url)
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await
            .map_err(ExplainerError::Network)?;

        let status = response.status();
        match status.as_u16() {
            401 | 403 => return Err(ExplainerError::Unauthorized),
            429 => return Err(ExplainerError::RateLimited),
            _ if !status.is_success() => {
                return Err(ExplainerError::Unknown(format!(
                    "API request failed: {}",
                    status
                )))
            }
            _ => {}
        }

        let body: ChatResponse = response
            .json()
            .await
            .map_err(|e| ExplainerError::Unknown(format!("Invalid response format: {}", e)))?;
        let reply = body
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| {
                ExplainerError::Unknown("Response contained no choices".to_string())
            })?;

        self.history.push(ChatTurn {
            role: ChatRole::User,
            content: message,
        });
        self.history.push(ChatTurn {
            role: ChatRole::Assistant,
            content: reply.clone(),
        });
        if self.history.len() > HISTORY_LIMIT {
            self.history.drain(..self.history.len() - HISTORY_LIMIT);
        }

        Ok(reply)
    }

    pub fn history(&self) -> &[ChatTurn] {
        &self.history
    }
}

/// Contextual preamble describing the student's situation, suitable for
/// prefixing explainer conversations.
pub fn study_context(
    profile: &StudentProfile,
    schedule: &WeekSchedule,
    today: NaiveDate,
) -> String {
    let mut context = String::from("The student is studying: ");
    let summaries: Vec<String> = profile
        .subjects
        .iter()
        .map(|s| {
            format!(
                "{} (Confidence: {}/5, Weak Areas: {})",
                s.name, s.confidence, s.weak_areas
            )
        })
        .collect();
    context.push_str(&summaries.join(", "));

    let day = Weekday::from_chrono(today.weekday());
    if let Some(slots) = schedule.get(&day) {
        if !slots.is_empty() {
            context.push_str(" Current focus topics: ");
            for slot in slots {
                context.push_str(&format!("{} in {}, ", slot.topic, slot.subject));
            }
        }
    }
    context
}
