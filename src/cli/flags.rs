use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};

use crate::core::types::OutputFormat;

#[derive(Parser, Debug)]
#[command(
    name = "squatguard",
    version,
    about = "Offline typosquatting/phishing URL classifier"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Increase verbosity (debug, trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Also write logs to this file
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Measure false positives and false negatives against labelled URL lists
    Evaluate {
        /// Classifier config (JSON, or TOML by extension)
        config: PathBuf,
        /// File of legitimate URLs, one per line
        legit: PathBuf,
        /// File of scam URLs, one per line
        scam: PathBuf,
        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormatArg,
        /// Write the report here instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
        /// Exit non-zero when any URL is misclassified
        #[arg(long)]
        fail_on_mismatch: bool,
    },
    /// Classify individual URLs and show which signals fired
    Check {
        /// Classifier config (JSON, or TOML by extension)
        config: PathBuf,
        /// URLs to classify
        #[arg(required = true)]
        urls: Vec<String>,
        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormatArg,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum OutputFormatArg {
    Text,
    Json,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(value: OutputFormatArg) -> Self {
        match value {
            OutputFormatArg::Text => OutputFormat::Text,
            OutputFormatArg::Json => OutputFormat::Json,
        }
    }
}
