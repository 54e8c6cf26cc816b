//! Configuration and CLI argument handling

use std::{path::PathBuf, time::Duration};

use clap::Parser;

/// CLI argument parsing structure
#[derive(Parser, Debug, Clone)]
#[command(name = "result-watch")]
#[command(about = "Countdown and result-link tracker for exam result releases")]
#[command(version = "1.0.0")]
pub struct Config {
    /// URL of the JSON feed describing the result date and links
    #[arg(long, env = "RESULT_LINKS_URL")]
    pub feed_url: String,

    /// Port to bind the server to
    #[arg(short, long, default_value = "20554")]
    pub port: u16,

    /// Host address to bind to
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// File holding the last used link selection
    #[arg(long, default_value = ".result-watch.json")]
    pub store_path: PathBuf,

    /// URL handed to the share action (defaults to the served address)
    #[arg(long)]
    pub share_url: Option<String>,

    /// Countdown tick period in milliseconds
    #[arg(long, default_value = "1000")]
    pub tick_ms: u64,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the server address as a formatted string
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// URL shared with classmates
    pub fn share_url(&self) -> String {
        self.share_url
            .clone()
            .unwrap_or_else(|| format!("http://{}/", self.address()))
    }

    /// Countdown period, never shorter than one millisecond
    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(self.tick_ms.max(1))
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }
}
