use clap::builder::BoolishValueParser;
use clap::{ArgAction, Parser};
use std::path::PathBuf;
use wisesaying::store::fs::DEFAULT_BASE_DIR;

#[derive(Parser, Debug)]
#[command(name = "wisesaying", bin_name = "wisesaying", version)]
#[command(about = "Interactive wise saying (quote) manager", long_about = None)]
pub struct Cli {
    /// Delete all stored quotes before starting
    #[arg(
        long,
        env = "WS_RESET",
        action = ArgAction::SetTrue,
        value_parser = BoolishValueParser::new(),
        help_heading = "Startup"
    )]
    pub reset: bool,

    /// Register N synthetic quotes before starting
    #[arg(long, env = "WS_SEED", value_name = "N", default_value_t = 0, help_heading = "Startup")]
    pub seed: usize,

    /// Directory holding the quote files
    #[arg(long = "db", env = "WS_DB", value_name = "DIR", default_value = DEFAULT_BASE_DIR)]
    pub db_dir: PathBuf,

    /// Export file written by the build command (overrides config.json)
    #[arg(long = "export", value_name = "PATH")]
    pub export_path: Option<PathBuf>,

    /// Quotes per list page (overrides config.json)
    #[arg(long, value_name = "N")]
    pub page_size: Option<usize>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
