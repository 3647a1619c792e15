use std::path::PathBuf;

use clap::Args;

use crate::output::OutputFormat;

#[derive(Debug, Args, Clone)]
pub struct OutputArgs {
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    pub format: OutputFormat,
    #[arg(long, short, global = true)]
    pub quiet: bool,
}

#[derive(Debug, Args, Clone)]
pub struct PollArgs {
    /// Seconds between status checks
    #[arg(long, default_value_t = 5)]
    pub poll_interval: u64,
    /// Total seconds to wait for a terminal status
    #[arg(long, default_value_t = 60)]
    pub timeout: u64,
    /// Retry budget for each individual status check
    #[arg(long, default_value_t = 3)]
    pub max_retries: u32,
}

#[derive(Debug, Args, Clone)]
pub struct IdStoreArgs {
    /// JSON file remembering ids created by previous invocations
    #[arg(long, default_value = ".postman-ids.json")]
    pub ids_file: PathBuf,
}
