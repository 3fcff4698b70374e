use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::output::ReportFormat;

/// Color output control
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Parser, Debug)]
#[command(name = "doc-guard")]
#[command(author, version, about = "Document review guard - audit Word documents against a fixed rubric")]
#[command(long_about = "A tool that reviews a .docx document against a fixed rubric:\n\
    expected font and spacing, required sections, identity fields,\n\
    passive-voice usage, and page/figure labeling.\n\n\
    Exit codes:\n  \
    0 - Document is compliant\n  \
    1 - Findings reported\n  \
    2 - Configuration or runtime error")]
pub struct Cli {
    /// Increase output verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto", global = true)]
    pub color: ColorChoice,

    /// Skip loading a rubric file
    #[arg(long, global = true)]
    pub no_config: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Review a document against the rubric
    Check(CheckArgs),

    /// Display word count, page count, and keywords without running checks
    Stats(StatsArgs),

    /// Generate a default rubric file
    Init(InitArgs),
}

#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Document to review (.docx)
    pub file: PathBuf,

    /// Path to rubric file
    #[arg(short, long)]
    pub rubric: Option<PathBuf>,

    /// Output format [possible values: text, json, html]
    #[arg(short, long, default_value = "text")]
    pub format: ReportFormat,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Exit successfully even when findings are present
    #[arg(long)]
    pub warn_only: bool,
}

#[derive(Parser, Debug)]
pub struct StatsArgs {
    /// Document to analyze (.docx)
    pub file: PathBuf,

    /// Path to rubric file
    #[arg(short, long)]
    pub rubric: Option<PathBuf>,

    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: ReportFormat,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Output path for the rubric file
    #[arg(short, long, default_value = ".doc-guard.toml")]
    pub output: PathBuf,

    /// Overwrite an existing rubric file
    #[arg(long)]
    pub force: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
