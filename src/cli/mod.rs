pub mod explain;
pub mod output;

use clap::{Parser, Subcommand, ValueEnum};
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "outputcheck",
    version,
    about = "Parse and validate CHECK directives embedded in test files"
)]
pub struct Cli {
    /// Log level used when RUST_LOG is not set (error, warn, info, debug, trace)
    #[arg(short, long, global = true, default_value = "warn")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Parse check files and report structural errors
    Check {
        /// Check files, or directories to search for them
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// Output format
        #[arg(short, long)]
        format: Option<OutputFormat>,

        /// Path to config file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Prefix that starts every directive (overrides the config file)
        #[arg(long)]
        check_prefix: Option<String>,

        /// Line comment prefix of the host language (overrides the config file)
        #[arg(long)]
        comment_prefix: Option<String>,

        /// List every parsed directive
        #[arg(short, long)]
        verbose: bool,
    },
    /// Create a default .outputcheckrc.toml
    Init,
    /// Explain what a directive kind means (omit kind to list all)
    Explain {
        /// Directive kind (e.g., check, check-next, check-not, check-literal)
        kind: Option<String>,

        /// Prefix used when listing kinds (overrides the config file)
        #[arg(long)]
        check_prefix: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Github,
}
