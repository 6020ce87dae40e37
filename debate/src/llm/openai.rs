//! OpenAI Chat Completions client implementing `TextGenerator` (ChatOpenAI).
//!
//! Sends the system instruction as a system message followed by one user message per
//! user turn. Requires `OPENAI_API_KEY` (or explicit config); `OPENAI_BASE_URL` /
//! `OPENAI_API_BASE` select a compatible endpoint.
//!
//! **Interaction**: Implements `TextGenerator`; built by `DebateRunner::from_config`.

use async_trait::async_trait;
use tracing::{debug, trace};

use crate::error::GenerationError;
use crate::llm::TextGenerator;
use crate::message::Message;

use async_openai::{
    config::OpenAIConfig,
    types::chat::{
        ChatCompletionRequestMessage, ChatCompletionRequestSystemMessage,
        ChatCompletionRequestUserMessage, CreateChatCompletionRequestArgs,
    },
    Client,
};

/// Model used when none is configured.
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Temperature used when none is configured; deterministic output for the same topic.
pub const DEFAULT_TEMPERATURE: f32 = 0.0;

/// OpenAI Chat Completions client.
///
/// Uses `OPENAI_API_KEY` from the environment by default; or provide config via
/// `ChatOpenAI::with_config`.
pub struct ChatOpenAI {
    client: Client<OpenAIConfig>,
    model: String,
    temperature: Option<f32>,
}

impl ChatOpenAI {
    /// Build client with default config (API key from `OPENAI_API_KEY` env).
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            model: model.into(),
            temperature: Some(DEFAULT_TEMPERATURE),
        }
    }

    /// Build client with custom config (e.g. custom API key or base URL).
    pub fn with_config(config: OpenAIConfig, model: impl Into<String>) -> Self {
        Self {
            client: Client::with_config(config),
            model: model.into(),
            temperature: Some(DEFAULT_TEMPERATURE),
        }
    }

    /// Set temperature (0–2). `None` leaves it to the provider default.
    pub fn with_temperature(mut self, temperature: Option<f32>) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Chat completions URL for logging (base from OPENAI_BASE_URL or OPENAI_API_BASE env,
    /// else default). Does not append /v1 when base already ends with /v1.
    fn chat_completions_url() -> String {
        let base = std::env::var("OPENAI_BASE_URL")
            .or_else(|_| std::env::var("OPENAI_API_BASE"))
            .unwrap_or_else(|_| "https://api.openai.com".to_string());
        let base = base.trim_end_matches('/');
        if base.ends_with("/v1") {
            format!("{}/chat/completions", base)
        } else {
            format!("{}/v1/chat/completions", base)
        }
    }

    fn messages_to_request(messages: &[Message]) -> Vec<ChatCompletionRequestMessage> {
        messages
            .iter()
            .map(|m| match m {
                Message::System(s) => ChatCompletionRequestMessage::System(
                    ChatCompletionRequestSystemMessage::from(s.as_str()),
                ),
                Message::User(s) => ChatCompletionRequestMessage::User(
                    ChatCompletionRequestUserMessage::from(s.as_str()),
                ),
            })
            .collect()
    }
}

#[async_trait]
impl TextGenerator for ChatOpenAI {
    async fn generate(
        &self,
        system_instruction: &str,
        user_turns: &[String],
    ) -> Result<String, GenerationError> {
        let trace_id = uuid::Uuid::new_v4().to_string();
        let messages = Message::prompt(system_instruction, user_turns);
        let mut args = CreateChatCompletionRequestArgs::default();
        args.model(self.model.clone());
        args.messages(Self::messages_to_request(&messages));
        if let Some(t) = self.temperature {
            args.temperature(t);
        }
        let request = args
            .build()
            .map_err(|e| GenerationError::Request(e.to_string()))?;

        let url = Self::chat_completions_url();
        debug!(
            trace_id = %trace_id,
            url = %url,
            model = %self.model,
            message_count = messages.len(),
            temperature = ?self.temperature,
            "OpenAI chat create"
        );
        if let Ok(js) = serde_json::to_string_pretty(&request) {
            trace!(trace_id = %trace_id, request = %js, "OpenAI request body");
        }

        let response = self
            .client
            .chat()
            .create(request)
            .await
            .map_err(|e| GenerationError::Provider(format!("OpenAI API error: {}", e)))?;

        if let Ok(js) = serde_json::to_string_pretty(&response) {
            trace!(trace_id = %trace_id, response = %js, "OpenAI response body");
        }

        let choice = response.choices.into_iter().next().ok_or_else(|| {
            GenerationError::MalformedResponse("OpenAI returned no choices".to_string())
        })?;
        choice.message.content.ok_or_else(|| {
            GenerationError::MalformedResponse("OpenAI choice has no content".to_string())
        })
    }
}
