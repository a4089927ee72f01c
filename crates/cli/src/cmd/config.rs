use std::path::Path;
use std::process::Command;

use color_eyre::eyre::{Result, WrapErr, bail};
use tracing::debug;
use writeme_core::config::{ConfigError, ConfigLoader, resolve_path};

use crate::ConfigCommand;
use crate::prompt::confirm;

pub fn run(config_path: Option<&Path>, action: &ConfigCommand) -> Result<()> {
    let path = resolve_path(config_path);

    match action {
        ConfigCommand::Init { force } => init(&path, *force),
        ConfigCommand::Edit => edit(&path),
        ConfigCommand::Path => {
            println!("{}", path.display());
            Ok(())
        }
    }
}

fn init(path: &Path, force: bool) -> Result<()> {
    match ConfigLoader::write_default(path, force) {
        Ok(()) => {}
        Err(ConfigError::AlreadyExists(_)) => {
            let question = format!("{} already exists. Overwrite it?", path.display());
            if !confirm(&question)? {
                println!("Canceled.");
                return Ok(());
            }
            ConfigLoader::write_default(path, true)?;
        }
        Err(e) => return Err(e.into()),
    }

    println!("Wrote default configuration to {}", path.display());
    Ok(())
}

fn edit(path: &Path) -> Result<()> {
    if !path.exists() {
        bail!(
            "no configuration file at {} (run `writeme config init` first)",
            path.display()
        );
    }

    let editor = std::env::var("EDITOR")
        .ok()
        .filter(|e| !e.trim().is_empty())
        .unwrap_or_else(|| default_editor().to_string());

    // $EDITOR may carry arguments, e.g. "code --wait"
    let mut parts = editor.split_whitespace();
    let Some(program) = parts.next() else {
        bail!("EDITOR is empty");
    };

    debug!(%editor, path = %path.display(), "opening configuration");
    let status = Command::new(program)
        .args(parts)
        .arg(path)
        .status()
        .wrap_err_with(|| format!("could not launch editor '{editor}'"))?;

    if !status.success() {
        bail!("editor '{editor}' exited with {status}");
    }
    Ok(())
}

fn default_editor() -> &'static str {
    if cfg!(windows) { "notepad" } else { "vi" }
}
