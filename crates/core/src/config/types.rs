use std::path::PathBuf;

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ConfigFile {
    pub version: u32,
    #[serde(default)]
    pub llm: LlmConfig,
    #[serde(default)]
    pub ollama: OllamaConfig,
    #[serde(default)]
    pub openai: OpenAiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LlmConfig {
    /// Rewording backend name: "ollama" or "openai"
    #[serde(default = "default_backend")]
    pub backend: String,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self { backend: default_backend() }
    }
}

fn default_backend() -> String {
    "ollama".to_string()
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct OllamaConfig {
    #[serde(default = "default_ollama_model")]
    pub model: String,
    #[serde(default = "default_ollama_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_system_prompt")]
    pub system_prompt: String,
}

impl Default for OllamaConfig {
    fn default() -> Self {
        Self {
            model: default_ollama_model(),
            endpoint: default_ollama_endpoint(),
            system_prompt: default_system_prompt(),
        }
    }
}

fn default_ollama_model() -> String {
    "llama3.1:latest".to_string()
}

fn default_ollama_endpoint() -> String {
    "http://localhost:11434/api/chat".to_string()
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct OpenAiConfig {
    #[serde(default = "default_openai_model")]
    pub model: String,
    /// Empty or missing falls back to the OPENAI_API_KEY environment variable
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_openai_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_system_prompt")]
    pub system_prompt: String,
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self {
            model: default_openai_model(),
            api_key: None,
            endpoint: default_openai_endpoint(),
            system_prompt: default_system_prompt(),
        }
    }
}

fn default_openai_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_openai_endpoint() -> String {
    "https://api.openai.com/v1/chat/completions".to_string()
}

fn default_system_prompt() -> String {
    "You are an assistant that rewrites notes for developer documentation. \
     Keep the meaning exactly the same, do not add new information, make it clear \
     and direct, and return exactly one line without any greeting."
        .to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub file_level: Option<String>,
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: default_log_level(), file_level: None, file: None }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

/// Everything the rewording collaborator needs, and nothing else.
#[derive(Debug, Clone, Default)]
pub struct LlmSettings {
    pub backend: String,
    pub ollama: OllamaConfig,
    pub openai: OpenAiConfig,
}

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// Path the configuration was (or would have been) read from
    pub path: PathBuf,
    /// False when the file did not exist and defaults are in use
    pub loaded: bool,
    pub llm: LlmSettings,
    pub logging: LoggingConfig,
}

impl ResolvedConfig {
    /// Built-in defaults, used when no configuration file exists.
    pub fn defaults(path: PathBuf) -> Self {
        Self {
            path,
            loaded: false,
            llm: LlmSettings {
                backend: default_backend(),
                ..LlmSettings::default()
            },
            logging: LoggingConfig::default(),
        }
    }
}
