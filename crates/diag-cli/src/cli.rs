//! CLI argument definitions for the diagnosis tool.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "diag",
    version,
    about = "IT problem diagnosis - map a problem description to likely causes",
    long_about = "Match a free-text description of a computer problem against a rule set\n\
                  and list the most likely diagnoses with a confidence, a severity,\n\
                  and a recommended remedy.\n\n\
                  Without a subcommand, starts an interactive session when stdin is a\n\
                  terminal and runs the demo otherwise."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Rule document (JSON). Defaults to $DIAG_RULES_PATH, then the built-in rules.
    #[arg(long = "rules", value_name = "PATH", global = true)]
    pub rules: Option<PathBuf>,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Diagnose a single description.
    Analyze(AnalyzeArgs),

    /// Prompt for descriptions until 'sair'/'exit' or end of input.
    Interactive(OutputArgs),

    /// Run the built-in example descriptions.
    Demo(OutputArgs),

    /// List the loaded rules.
    Rules,
}

#[derive(Args)]
pub struct AnalyzeArgs {
    /// Problem description (multiple words are joined with spaces).
    #[arg(value_name = "TEXT", required = true)]
    pub text: Vec<String>,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Args, Clone, Copy, Default)]
pub struct OutputArgs {
    /// Output format for diagnoses.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,

    /// Show how each matched term contributed to the confidence.
    #[arg(long = "explain")]
    pub explain: bool,

    /// Show every matching rule instead of the top 3.
    #[arg(long = "all")]
    pub all: bool,
}

#[derive(Clone, Copy, Default, ValueEnum)]
pub enum OutputFormatArg {
    #[default]
    Table,
    Plain,
    Json,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
