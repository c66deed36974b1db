use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Table preview on the terminal
    Terminal,
    /// Chart configurations as one JSON document
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "saberdash")]
#[command(about = "Saber 11 results dashboard", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Directory containing the report JSON files
    #[arg(long, default_value = "data", env = "SABERDASH_DATA_DIR")]
    pub data_dir: PathBuf,

    /// Optional TOML configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "terminal")]
    pub format: OutputFormat,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render the cross-area global score view
    Global,

    /// Render a subject-area detail view
    Area {
        /// Report file name inside the data directory
        resource: String,
    },
}
