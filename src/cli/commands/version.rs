//! Version command for displaying hypersize version information

use anyhow::Result;
use clap::Args;
use owo_colors::OwoColorize;

#[derive(Args, Clone, Debug)]
pub struct VersionArgs {}

pub async fn execute(_args: VersionArgs) -> Result<()> {
    // Get version from Cargo.toml
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const PKG_NAME: &str = env!("CARGO_PKG_NAME");
    const PKG_DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

    println!(
        "{} v{}",
        PKG_NAME.bright_blue().bold(),
        VERSION.bright_green()
    );
    if !PKG_DESCRIPTION.is_empty() {
        println!("{}", PKG_DESCRIPTION);
    }

    println!();
    println!("{}", "Build Information:".bright_yellow());
    println!(
        "  Profile: {}",
        if cfg!(debug_assertions) {
            "debug"
        } else {
            "release"
        }
    );

    Ok(())
}
