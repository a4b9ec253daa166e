use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "atomlint", version, about = "Atomic design import hierarchy linter")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
    /// Config file (default: ./atomlint.toml when present)
    #[arg(long, short, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,
    /// Only log errors
    #[arg(long, short, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check files for hierarchy violations
    Check {
        /// Files or directories to check
        #[arg(default_value = ".")]
        paths: Vec<PathBuf>,
        /// Print violations as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the configured levels and what each may contain
    Levels,
    /// Show the level and module membership of paths
    Classify {
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },
}
