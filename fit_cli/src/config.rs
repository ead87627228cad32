//! Command-line configuration.

use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser, Debug, Clone, PartialEq, Eq, Default)]
#[command(
    name = "fit_cli",
    about = "Prints one workout summary per sensor package",
    after_help = "Without a file the built-in demo batch is used.\n\
                  Logging is controlled with RUST_LOG (default: warn)."
)]
pub struct CliConfig {
    /// JSON file of sensor packages
    pub input: Option<PathBuf>,

    /// Print summaries as a JSON array
    #[arg(long)]
    pub json: bool,
}

impl CliConfig {
    pub fn format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}
