//! Optional rewording of a note through a chat-style language model.
//!
//! Backends are picked by name from [`LlmSettings`]; every failure is a
//! [`RewordError`] and aborts the note flow without touching the document.

pub mod ollama;
pub mod openai;
pub mod types;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;

use crate::config::LlmSettings;
use crate::insert::normalize_note;

pub use ollama::OllamaRewriter;
pub use openai::OpenAiRewriter;

/// Environment variable consulted when no OpenAI key is configured.
pub const OPENAI_KEY_ENV: &str = "OPENAI_API_KEY";

#[derive(Debug, Error)]
pub enum RewordError {
    #[error("unsupported backend: {0}")]
    UnsupportedBackend(String),

    #[error("no OpenAI API key configured (set openai.api_key or OPENAI_API_KEY)")]
    MissingApiKey,

    #[error("request to {endpoint} failed: {message}")]
    Transport { endpoint: String, message: String },

    #[error("bad status: {code}, body: {body}")]
    Status { code: u16, body: String },

    #[error("could not decode response: {0}")]
    Decode(String),

    #[error("backend returned no text")]
    EmptyResponse,
}

/// A text transform applied to a note before insertion.
pub trait Rewriter {
    fn reword(&self, note: &str) -> Result<String, RewordError>;
}

/// Build the rewriter named by `settings.backend`.
pub fn rewriter_for(settings: &LlmSettings) -> Result<Box<dyn Rewriter>, RewordError> {
    match settings.backend.trim().to_ascii_lowercase().as_str() {
        "ollama" => Ok(Box::new(OllamaRewriter::new(settings.ollama.clone()))),
        "openai" => Ok(Box::new(OpenAiRewriter::from_config(&settings.openai)?)),
        _ => Err(RewordError::UnsupportedBackend(settings.backend.clone())),
    }
}

/// Reduce a model reply to a usable single-line note.
///
/// Models like to echo the quotes the note was sent in; one surrounding pair
/// is dropped.
pub fn clean_reply(reply: &str) -> Result<String, RewordError> {
    let trimmed = reply.trim();
    let unquoted = trimmed
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(trimmed);

    let note = normalize_note(unquoted);
    if note.is_empty() {
        return Err(RewordError::EmptyResponse);
    }
    Ok(note)
}

/// POST `payload` as JSON and decode a JSON reply.
pub(crate) fn post_json<T, P>(
    request: ureq::Request,
    endpoint: &str,
    payload: &P,
) -> Result<T, RewordError>
where
    T: DeserializeOwned,
    P: Serialize,
{
    debug!(endpoint, "sending reword request");

    match request.send_json(payload) {
        Ok(response) => {
            response.into_json::<T>().map_err(|e| RewordError::Decode(e.to_string()))
        }
        Err(ureq::Error::Status(code, response)) => {
            let body = response.into_string().unwrap_or_default();
            Err(RewordError::Status { code, body })
        }
        Err(ureq::Error::Transport(transport)) => Err(RewordError::Transport {
            endpoint: endpoint.to_string(),
            message: transport.to_string(),
        }),
    }
}
