//! Configuration and CLI argument handling

use std::time::Duration;
use clap::{Parser, Subcommand};

use crate::api::DEFAULT_API_URL;

/// CLI argument parsing structure
#[derive(Parser, Debug)]
#[command(name = "countdown-timer")]
#[command(about = "Configure a single countdown target on the backend and watch it tick")]
#[command(version)]
pub struct Config {
    /// URL of the singleton timer resource
    #[arg(long, default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Request timeout in seconds
    #[arg(long, default_value = "10")]
    pub timeout: u64,

    /// Countdown refresh interval in milliseconds
    #[arg(long, default_value = "1000", value_parser = clap::value_parser!(u64).range(1..))]
    pub tick_ms: u64,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Load the stored timer and render the countdown until interrupted
    Watch,

    /// Create or update the timer, then watch it
    Set {
        /// Counter name, 2-32 characters
        #[arg(short, long)]
        name: String,

        /// Target as local YYYY-MM-DDTHH:MM or an RFC 3339 timestamp
        #[arg(short, long)]
        at: String,

        /// Exit after saving instead of watching
        #[arg(long)]
        no_watch: bool,
    },

    /// Delete the stored timer
    Reset,

    /// Print the stored timer and its current countdown once
    Show,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// The subcommand to run, `watch` when none was given
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Watch)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }

    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_watching_the_backend() {
        let config = Config::try_parse_from(["countdown-timer"]).unwrap();

        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.request_timeout(), Duration::from_secs(10));
        assert_eq!(config.tick(), Duration::from_millis(1000));
        assert_eq!(config.command(), Command::Watch);
        assert_eq!(config.log_level(), "info");
    }

    #[test]
    fn parses_set_subcommand() {
        let config = Config::try_parse_from([
            "countdown-timer", "-v", "--api-url", "http://localhost:8080/api/timer",
            "set", "--name", "Launch Event", "--at", "2030-06-01T12:30", "--no-watch",
        ])
        .unwrap();

        assert_eq!(config.log_level(), "debug");
        assert_eq!(config.api_url, "http://localhost:8080/api/timer");
        assert_eq!(
            config.command(),
            Command::Set {
                name: "Launch Event".to_string(),
                at: "2030-06-01T12:30".to_string(),
                no_watch: true,
            }
        );
    }

    #[test]
    fn zero_tick_is_rejected() {
        assert!(Config::try_parse_from(["countdown-timer", "--tick-ms", "0"]).is_err());
    }
}
