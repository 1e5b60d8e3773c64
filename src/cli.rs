//! CLI argument parser
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

use crate::util::validate_story_name;

/// Command-line argument parser for `autocompleter`.
#[derive(Debug, Parser)]
#[command(name = "autocompleter")]
#[command(
    about = "An interactive autocomplete / multi-select input",
    long_about = "autocompleter - An autocomplete and multi-select input for the terminal.

Key Features:
 - Live, case-insensitive filtering with highlighted matches.
 - Keyboard navigation that wraps around the suggestion list.
 - Single or multiple selection, shown as removable chips.
 - Built-in and user-defined demo stories.

Examples:
 autocompleter run Apple Banana Avocado  # pick one of three values
 autocompleter run -m -f tags.yaml       # pick several values from a file
 autocompleter story default             # open the `default` story
 autocompleter stories                   # list available stories

The selection is printed to stdout, one value per line, on exit.

Use `autocompleter <COMMAND> --help` for more details."
)]
pub struct Args {
    /// Write logs to this file instead of the cache directory
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Display options shared by the interactive subcommands.
#[derive(Debug, Clone, Copy, Default, clap::Args)]
pub struct DisplayFlags {
    #[clap(long, short, help = "Allow selecting several values")]
    pub multiple: bool,
    #[clap(
        long,
        short = 'b',
        help = "Draw the header on the alternate background"
    )]
    pub alternate_background: bool,
    #[clap(long, help = "Use fuzzy instead of substring matching")]
    pub fuzzy: bool,
}

/// CLI subcommands for `autocompleter`.
#[derive(Debug, Subcommand)]
pub enum Commands {
    #[command(
        about = "Pick from the given candidates",
        long_about = "Open the widget over candidates given as arguments
and/or read from --file (YAML list or one candidate per line).",
        alias = "r"
    )]
    Run {
        /// Candidate values
        candidates: Vec<String>,
        /// Read additional candidates from this file
        #[arg(long, short, value_name = "FILE")]
        file: Option<PathBuf>,
        /// Text of the label column
        #[arg(long, short)]
        label: Option<String>,
        #[command(flatten)]
        flags: DisplayFlags,
    },

    #[command(
        about = "Open a named story",
        long_about = "Open one of the built-in stories or a story declared in
the config file ($AUTOCOMPLETER_CONFIG or <config dir>/autocompleter/config.toml).",
        arg_required_else_help = true,
        alias = "s"
    )]
    Story {
        /// Name of the story
        #[arg(value_parser = validate_story_name)]
        name: String,
        #[command(flatten)]
        flags: DisplayFlags,
    },

    #[command(about = "List available stories", alias = "ls")]
    Stories,

    #[command(about = "Generate shell completions")]
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}
