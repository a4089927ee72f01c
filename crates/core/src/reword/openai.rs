use std::env;

use serde::Deserialize;

use crate::config::OpenAiConfig;
use crate::reword::types::{ChatRequest, ReplyMessage};
use crate::reword::{OPENAI_KEY_ENV, RewordError, Rewriter, clean_reply, post_json};

#[derive(Debug, Deserialize)]
struct Completion {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ReplyMessage,
}

/// Rewords notes through an OpenAI-compatible chat-completions endpoint.
pub struct OpenAiRewriter {
    config: OpenAiConfig,
    api_key: String,
    agent: ureq::Agent,
}

impl OpenAiRewriter {
    pub fn new(config: OpenAiConfig, api_key: impl Into<String>) -> Self {
        Self { config, api_key: api_key.into(), agent: ureq::Agent::new() }
    }

    /// Use the configured key, falling back to `OPENAI_API_KEY`.
    pub fn from_config(config: &OpenAiConfig) -> Result<Self, RewordError> {
        let api_key = config
            .api_key
            .clone()
            .filter(|k| !k.trim().is_empty())
            .or_else(|| env::var(OPENAI_KEY_ENV).ok().filter(|k| !k.trim().is_empty()))
            .ok_or(RewordError::MissingApiKey)?;

        Ok(Self::new(config.clone(), api_key))
    }
}

impl Rewriter for OpenAiRewriter {
    fn reword(&self, note: &str) -> Result<String, RewordError> {
        let payload = ChatRequest::new(
            &self.config.model,
            &self.config.system_prompt,
            format!("Original note: \"{note}\""),
        );

        let request = self
            .agent
            .post(&self.config.endpoint)
            .set("Authorization", &format!("Bearer {}", self.api_key));
        let completion: Completion = post_json(request, &self.config.endpoint, &payload)?;

        let content = completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or(RewordError::EmptyResponse)?;

        clean_reply(&content)
    }
}
