use serde::Deserialize;

use crate::config::OllamaConfig;
use crate::reword::types::{ChatRequest, ReplyMessage};
use crate::reword::{RewordError, Rewriter, clean_reply, post_json};

#[derive(Debug, Deserialize)]
struct OllamaReply {
    message: ReplyMessage,
}

/// Rewords notes through an Ollama `/api/chat` endpoint.
pub struct OllamaRewriter {
    config: OllamaConfig,
    agent: ureq::Agent,
}

impl OllamaRewriter {
    pub fn new(config: OllamaConfig) -> Self {
        Self { config, agent: ureq::Agent::new() }
    }
}

impl Rewriter for OllamaRewriter {
    fn reword(&self, note: &str) -> Result<String, RewordError> {
        let payload = ChatRequest::new(
            &self.config.model,
            &self.config.system_prompt,
            format!("Reword this note: \"{note}\""),
        );

        let request = self.agent.post(&self.config.endpoint);
        let reply: OllamaReply = post_json(request, &self.config.endpoint, &payload)?;

        clean_reply(reply.message.content.as_deref().unwrap_or_default())
    }
}
