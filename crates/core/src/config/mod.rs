pub mod loader;
pub mod types;

pub use loader::{
    CONFIG_ENV, ConfigError, ConfigLoader, DEFAULT_CONFIG, default_config_path, resolve_path,
};
pub use types::{LlmSettings, LoggingConfig, OllamaConfig, OpenAiConfig, ResolvedConfig};
