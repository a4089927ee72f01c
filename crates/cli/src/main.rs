mod cmd;
mod completions;
mod logging;
mod prompt;
mod tui;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use color_eyre::eyre::Result;
use writeme_core::config::{ConfigLoader, ResolvedConfig, resolve_path};
use writeme_core::notes::NOTES_FILE;

#[derive(Debug, Parser)]
#[command(
    name = "writeme",
    version,
    about = "Drop notes into the right section of your project's NOTES.md"
)]
struct Cli {
    /// Path to config.toml (defaults to $WRITEME_CONFIG or ~/.config/writeme/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Insert a note under a heading you pick interactively
    Note(NoteArgs),

    /// Create a notes file titled after the current directory
    Create(CreateArgs),

    /// Manage the configuration file
    #[command(subcommand)]
    Config(ConfigCommand),

    /// Print a shell completion script
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

#[derive(Debug, Args)]
pub struct NoteArgs {
    /// The note text; several words are joined with spaces
    #[arg(required = true)]
    pub text: Vec<String>,

    /// Reword the note with the configured language model first
    #[arg(short, long)]
    pub ai: bool,

    /// Notes file to insert into
    #[arg(short, long, default_value = NOTES_FILE)]
    pub file: PathBuf,
}

#[derive(Debug, Args)]
pub struct CreateArgs {
    /// Overwrite an existing file without asking
    #[arg(long)]
    pub force: bool,

    /// Notes file to create
    #[arg(short, long, default_value = NOTES_FILE)]
    pub file: PathBuf,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Write the default configuration file
    Init {
        /// Overwrite an existing file without asking
        #[arg(long)]
        force: bool,
    },
    /// Open the configuration file in $EDITOR
    Edit,
    /// Print where the configuration file is read from
    Path,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    let cfg = load_config(&cli);
    logging::init(&cfg.logging, cli.verbose);

    match cli.command {
        Commands::Note(args) => cmd::note::run(cli.config.as_deref(), &args),
        Commands::Create(args) => cmd::create::run(&args),
        Commands::Config(action) => cmd::config::run(cli.config.as_deref(), &action),
        Commands::Completions { shell } => {
            completions::print(shell);
            Ok(())
        }
    }
}

/// Configuration for the ambient stack; commands that need more load it themselves.
fn load_config(cli: &Cli) -> ResolvedConfig {
    match ConfigLoader::load_or_default(cli.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            // No subscriber yet, so this goes straight to stderr
            eprintln!("warning: {e}; using default settings");
            ResolvedConfig::defaults(resolve_path(cli.config.as_deref()))
        }
    }
}
