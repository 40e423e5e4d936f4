//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `check`: Run catalog health checks (unfinished, placeholders, etc.)
//! - `lookup`: Resolve one UI string against a catalog file
//! - `stats`: Per-catalog translation coverage
//! - `init`: Initialize tscat configuration file
//! - `serve`: Start MCP server for AI integration

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

use super::commands::check::CheckRule;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Check(cmd)) => cmd.args.common.verbose,
            Some(Command::Stats(cmd)) => cmd.common.verbose,
            Some(Command::Lookup(cmd)) => cmd.verbose,
            Some(Command::Init) | Some(Command::Serve) | None => false,
        }
    }
}

/// Common arguments shared by commands that scan a project.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Project root used to find .tscatrc.json
    #[arg(long, default_value = ".")]
    pub path: PathBuf,

    /// Translations directory (overrides config file)
    #[arg(long)]
    pub translations_dir: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Parser)]
pub struct CheckArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    /// Rules to run (default: all except vanished)
    #[arg(value_enum)]
    pub checks: Vec<CheckRule>,
    #[command(flatten)]
    pub args: CheckArgs,
}

#[derive(Debug, Args)]
pub struct LookupCommand {
    /// Catalog file (.ts)
    pub file: PathBuf,

    /// Context name, usually the class that owns the string
    #[arg(long)]
    pub context: String,

    /// Source text as written in the code
    #[arg(long)]
    pub source: String,

    /// Disambiguation comment of the message
    #[arg(long)]
    pub disambiguation: Option<String>,

    /// Value for %1, %2, ... in order (repeatable)
    #[arg(long = "arg")]
    pub args: Vec<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct StatsCommand {
    /// Catalog files (default: every .ts file under the translations directory)
    pub files: Vec<PathBuf>,

    /// Print machine-readable JSON
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check catalogs for unfinished, vanished, duplicate and placeholder issues
    Check(CheckCommand),
    /// Print the display text of one message
    Lookup(LookupCommand),
    /// Show translation coverage per catalog
    Stats(StatsCommand),
    /// Initialize a new .tscatrc.json configuration file
    Init,
    /// Start MCP server for AI coding agents
    Serve,
}
