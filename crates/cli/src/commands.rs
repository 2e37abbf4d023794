use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use strum_macros::Display;

#[derive(Debug, Parser)]
#[command(name = "glint")]
#[command(about = "glint is a source code highlighter", long_about = None, version=env!("CARGO_PKG_VERSION")
)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Commands {
    #[command(
        name = "highlight",
        about = "Highlight source files via passing a list of files or using stdin"
    )]
    Highlight(HighlightArgs),
    #[command(name = "languages", about = "List the available languages")]
    Languages,
}

#[derive(Debug, Parser)]
pub(crate) struct HighlightArgs {
    /// Files to highlight. Use `-` to read from stdin.
    pub paths: Vec<PathBuf>,
    /// Language whose grammar classifies the input.
    #[arg(short, long, default_value = "qark")]
    pub language: String,
    #[arg(default_value_t, short, long)]
    pub format: Format,
}

#[derive(Debug, Clone, Copy, Default, ValueEnum, Display)]
#[strum(serialize_all = "kebab-case")]
pub(crate) enum Format {
    #[default]
    Ansi,
    Html,
}
