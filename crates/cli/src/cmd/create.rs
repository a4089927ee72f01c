use std::fs;

use color_eyre::eyre::{Result, WrapErr};
use tracing::info;
use writeme_core::notes::{document_title, fresh_document};

use crate::CreateArgs;
use crate::prompt::confirm;

pub fn run(args: &CreateArgs) -> Result<()> {
    let path = &args.file;

    if path.exists() && !args.force {
        let question = format!("{} already exists. Overwrite it?", path.display());
        if !confirm(&question)? {
            println!("Canceled.");
            return Ok(());
        }
    }

    let title = document_title(path)?;
    fs::write(path, fresh_document(&title))
        .wrap_err_with(|| format!("could not write {}", path.display()))?;

    info!(file = %path.display(), %title, "created notes file");
    println!("Created {}", path.display());
    Ok(())
}
