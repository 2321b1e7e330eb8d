//! CLI module for hypersize
//!
//! Command-line interface for the portfolio viewer and position sizer. Uses
//! clap for argument parsing with one args struct and one execute function
//! per command.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod commands;

use crate::data_paths::{DataPaths, DEFAULT_DATA_DIR};
use crate::hyperliquid::{MAINNET_INFO_URL, TESTNET_INFO_URL};
use crate::logging::{self, LoggingConfig};

use commands::positions::PositionsArgs;
use commands::sizer::SizerArgs;
use commands::version::VersionArgs;
use commands::watch::WatchArgs;

#[derive(Parser)]
#[command(name = "hypersize")]
#[command(version)]
#[command(about = "Hyperliquid portfolio risk viewer and position sizer", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Use the Hyperliquid testnet info endpoint
    #[arg(long, global = true)]
    pub testnet: bool,

    /// Data directory path (default: ./data)
    #[arg(long, global = true, default_value = DEFAULT_DATA_DIR)]
    pub data_dir: PathBuf,

    /// Verbose logging
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show positions and estimated risk for an address
    Positions(PositionsArgs),

    /// Poll an address and re-render the portfolio on an interval
    Watch(WatchArgs),

    /// Size a planned trade from balance, risk percent, entry and stop
    Sizer(SizerArgs),

    /// Show version information
    Version(VersionArgs),
}

impl Cli {
    /// Get the info endpoint URL based on the testnet flag
    pub fn info_url(&self) -> &'static str {
        if self.testnet {
            TESTNET_INFO_URL
        } else {
            MAINNET_INFO_URL
        }
    }

    /// Execute the CLI command
    pub async fn execute(self) -> Result<()> {
        let info_url = self.info_url();
        let data_paths = DataPaths::new(&self.data_dir);

        logging::init_logging(LoggingConfig::new(data_paths), self.verbose)?;

        match self.command {
            Commands::Positions(args) => commands::positions::execute(info_url, args).await,
            Commands::Watch(args) => commands::watch::execute(info_url, args).await,
            Commands::Sizer(args) => commands::sizer::execute(args).await,
            Commands::Version(args) => commands::version::execute(args).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_testnet_switches_endpoint() {
        let cli = Cli::parse_from(["hypersize", "--testnet", "version"]);
        assert_eq!(cli.info_url(), TESTNET_INFO_URL);

        let cli = Cli::parse_from(["hypersize", "version"]);
        assert_eq!(cli.info_url(), MAINNET_INFO_URL);
    }
}
