use std::fs;
use std::path::Path;

use color_eyre::eyre::{Result, WrapErr, bail, eyre};
use tracing::{debug, info};
use writeme_core::config::ConfigLoader;
use writeme_core::insert::{commit, insert_note, normalize_note};
use writeme_core::notes::{document_title, ensure_top_level_heading};
use writeme_core::outline::parse;
use writeme_core::placement::{PlacementError, select_placement};
use writeme_core::preview::{PreviewSession, PreviewSurface};
use writeme_core::reword::rewriter_for;

use crate::NoteArgs;
use crate::prompt::{DialoguerPrompt, is_interactive};
use crate::tui::TerminalPreview;

const CANCELLED: &str = "Note insertion cancelled.";

pub fn run(config_path: Option<&Path>, args: &NoteArgs) -> Result<()> {
    let note = normalize_note(&args.text.join(" "));
    if note.is_empty() {
        bail!("note text is empty");
    }

    // Rewording needs a real config file; fail before touching anything else
    let rewriter = if args.ai {
        let cfg = ConfigLoader::load(config_path)
            .wrap_err("--ai needs a configuration file (run `writeme config init`)")?;
        Some(rewriter_for(&cfg.llm)?)
    } else {
        None
    };

    let path = &args.file;
    let original = fs::read_to_string(path).wrap_err_with(|| {
        format!("could not read {} (run `writeme create` first?)", path.display())
    })?;

    let title = document_title(path)?;
    let text = match ensure_top_level_heading(&original, &title) {
        Some(with_heading) => {
            debug!(%title, "document has no heading; adding a top-level one");
            with_heading
        }
        None => original,
    };

    if !is_interactive() {
        bail!("writeme note needs an interactive terminal to pick a section");
    }

    let tree = parse(&text);
    let placement = match select_placement(&tree, &mut DialoguerPrompt::default()) {
        Ok(placement) => placement,
        Err(PlacementError::Aborted) => {
            println!("{CANCELLED}");
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };
    debug!(?placement, "placement selected");

    let note = match rewriter {
        Some(rewriter) => {
            let reworded = rewriter.reword(&note)?;
            debug!(original = %note, %reworded, "note reworded");
            reworded
        }
        None => note,
    };

    let inserted = insert_note(&text, &placement, &note);
    let window = inserted.preview_window().ok_or_else(|| {
        eyre!("section '{}' not found in {}", placement.join(" > "), path.display())
    })?;

    let session = PreviewSession::new(window, &note);
    let outcome = TerminalPreview.run(session)?;

    match commit(&text, &placement, &outcome) {
        Some(committed) => {
            fs::write(path, &committed.content)
                .wrap_err_with(|| format!("could not write {}", path.display()))?;

            info!(file = %path.display(), line = ?committed.inserted_line, "note inserted");
            println!("Note inserted!");
        }
        None => println!("{CANCELLED}"),
    }

    Ok(())
}
