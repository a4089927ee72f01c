use crate::config::types::{ConfigFile, LlmSettings, LoggingConfig, ResolvedConfig};
use shellexpand::full;
use std::path::{Path, PathBuf};
use std::{env, fs, io};

use dirs::home_dir;
use thiserror::Error;
use tracing::debug;

/// Environment variable overriding the configuration file location.
pub const CONFIG_ENV: &str = "WRITEME_CONFIG";

/// Template written by `writeme config init`.
pub const DEFAULT_CONFIG: &str = r#"version = 1

[llm]
# Rewording backend used by `writeme note --ai`: "ollama" or "openai"
backend = "ollama"

[ollama]
model = "llama3.1:latest"
endpoint = "http://localhost:11434/api/chat"
system_prompt = """
You are an assistant that rewrites notes for developer documentation.
- Keep the meaning exactly the same.
- Do NOT add new context.
- Make it clear, concise, and direct.
- Return exactly one line.
- Do not say "Sure", "Here", or any greeting.
"""

[openai]
model = "gpt-4o-mini"
# Leave empty to use the OPENAI_API_KEY environment variable
api_key = ""
endpoint = "https://api.openai.com/v1/chat/completions"
system_prompt = """
You are an assistant that rewrites notes for developer documentation.
Follow these rules:
- Keep the meaning exactly the same.
- Do not add or infer new information.
- Make it direct and clear.
- Output only the reworded line.
"""

[logging]
level = "warn"
# file = "~/.local/state/writeme/writeme.log"
# file_level = "debug"
"#;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found at {0}")]
    NotFound(String),

    #[error("failed to read config file {0}: {1}")]
    ReadError(String, #[source] io::Error),

    #[error("failed to parse TOML in {0}: {1}")]
    ParseError(String, #[source] toml::de::Error),

    #[error("version {0} is unsupported (expected 1)")]
    BadVersion(u32),

    #[error("home directory not available to expand '~'")]
    NoHome,

    #[error("config file already exists at {0}")]
    AlreadyExists(String),

    #[error("failed to write config file {0}: {1}")]
    WriteError(String, #[source] io::Error),
}

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load and resolve the configuration file.
    ///
    /// `config_path` wins over [`default_config_path`].
    pub fn load(config_path: Option<&Path>) -> Result<ResolvedConfig, ConfigError> {
        let path = resolve_path(config_path);

        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()));
        }

        let s = fs::read_to_string(&path)
            .map_err(|e| ConfigError::ReadError(path.display().to_string(), e))?;

        let cf: ConfigFile = toml::from_str(&s)
            .map_err(|e| ConfigError::ParseError(path.display().to_string(), e))?;

        if cf.version != 1 {
            return Err(ConfigError::BadVersion(cf.version));
        }

        debug!(path = %path.display(), backend = %cf.llm.backend, "loaded config");
        Self::resolve(path, cf)
    }

    /// Like [`ConfigLoader::load`], but a missing file yields the defaults.
    pub fn load_or_default(config_path: Option<&Path>) -> Result<ResolvedConfig, ConfigError> {
        match Self::load(config_path) {
            Err(ConfigError::NotFound(_)) => {
                Ok(ResolvedConfig::defaults(resolve_path(config_path)))
            }
            other => other,
        }
    }

    fn resolve(path: PathBuf, cf: ConfigFile) -> Result<ResolvedConfig, ConfigError> {
        let logging = match cf.logging.file {
            Some(ref file) => LoggingConfig {
                file: Some(expand_path(&file.to_string_lossy())?),
                ..cf.logging.clone()
            },
            None => cf.logging.clone(),
        };

        let mut openai = cf.openai;
        if openai.api_key.as_deref().is_some_and(|k| k.trim().is_empty()) {
            openai.api_key = None;
        }

        Ok(ResolvedConfig {
            path,
            loaded: true,
            llm: LlmSettings { backend: cf.llm.backend, ollama: cf.ollama, openai },
            logging,
        })
    }

    /// Write [`DEFAULT_CONFIG`] to `path`, creating parent directories.
    pub fn write_default(path: &Path, overwrite: bool) -> Result<(), ConfigError> {
        if path.exists() && !overwrite {
            return Err(ConfigError::AlreadyExists(path.display().to_string()));
        }

        let write_err = |e| ConfigError::WriteError(path.display().to_string(), e);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(write_err)?;
        }
        fs::write(path, DEFAULT_CONFIG).map_err(write_err)
    }
}

/// `config_path` if given, otherwise [`default_config_path`].
pub fn resolve_path(config_path: Option<&Path>) -> PathBuf {
    config_path.map_or_else(default_config_path, Path::to_path_buf)
}

/// Location of `config.toml`.
///
/// Checked in order: `WRITEME_CONFIG`, `$XDG_CONFIG_HOME/writeme/`, the
/// platform config directory on Windows (`%APPDATA%`), `~/.config/writeme/`.
pub fn default_config_path() -> PathBuf {
    if let Some(explicit) = non_empty_env(CONFIG_ENV) {
        return PathBuf::from(explicit);
    }
    if let Some(xdg) = non_empty_env("XDG_CONFIG_HOME") {
        return Path::new(&xdg).join("writeme").join("config.toml");
    }
    if cfg!(windows) {
        if let Some(dir) = dirs::config_dir() {
            return dir.join("writeme").join("config.toml");
        }
    }
    let home = home_dir().unwrap_or_else(|| PathBuf::from("~"));
    home.join(".config").join("writeme").join("config.toml")
}

fn non_empty_env(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.is_empty())
}

fn expand_path(input: &str) -> Result<PathBuf, ConfigError> {
    let expanded = full(input).map_err(|_| ConfigError::NoHome)?;
    Ok(PathBuf::from(expanded.to_string()))
}
