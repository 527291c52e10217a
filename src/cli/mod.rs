//! Command-line interface implementation
//!
//! This module provides the CLI entry point and dispatches to submodules
//! for specific command implementations.

mod css;
mod page;
mod split;
mod trace;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use crate::logging::init_logging;

/// Exit codes
pub(crate) const EXIT_SUCCESS: u8 = 0;
pub(crate) const EXIT_ERROR: u8 = 1;
pub(crate) const EXIT_INVALID_ARGS: u8 = 2;

/// Titlewave - Staggered per-character heading animations
#[derive(Parser)]
#[command(name = "titlewave")]
#[command(about = "Titlewave - Split headings into animated glyphs and emit the CSS and page to run them")]
#[command(version)]
pub struct Cli {
    /// Log debug output to stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for the split command
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum SplitFormat {
    /// Inline HTML spans
    #[default]
    Markup,
    /// JSON array of segments
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Split heading text into per-character spans
    Split {
        /// Heading text
        text: String,

        /// Output format
        #[arg(long, value_enum, default_value = "markup")]
        format: SplitFormat,
    },
    /// Print the companion stylesheet
    Css {
        /// Minify the output
        #[arg(long)]
        minify: bool,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Generate a standalone host page for a heading
    Page {
        /// Heading text
        text: String,

        /// Output file (default: {build.out}/index.html)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Path to titlewave.toml (default: discovered from the current directory)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Minify the embedded stylesheet
        #[arg(long)]
        minify: bool,

        /// Document language (overrides page.lang)
        #[arg(long)]
        lang: Option<String>,
    },
    /// Simulate the animation timeline and print each tick
    Trace {
        /// Heading text
        text: String,

        /// Simulated time to run, in milliseconds
        #[arg(long, default_value = "6000")]
        ms: u64,

        /// Emit one JSON object per line
        #[arg(long)]
        json: bool,
    },
}

/// Run the CLI application
pub fn run() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Split { text, format } => split::run_split(&text, format),
        Commands::Css { minify, output } => css::run_css(minify, output.as_deref()),
        Commands::Page { text, output, config, minify, lang } => {
            page::run_page(&text, output.as_deref(), config.as_deref(), minify, lang)
        }
        Commands::Trace { text, ms, json } => trace::run_trace(&text, ms, json),
    }
}

/// Write `contents` to `path`, creating parent directories
pub(crate) fn write_output(path: &Path, contents: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, contents)
}
