//! Periodic portfolio refresh
//!
//! Re-runs the fetch + format + render pass on a fixed interval. Passes run
//! sequentially, so a slow refresh delays the next tick instead of
//! overlapping with it.

use std::time::Duration;

use anyhow::{bail, Result};
use clap::Args;
use tokio::time::{interval, MissedTickBehavior};
use tracing::{info, warn};

use crate::display;
use crate::engine::format_positions;
use crate::hyperliquid::{is_valid_address, InfoClient};

#[derive(Args, Debug)]
pub struct WatchArgs {
    /// Account address (0x...)
    pub address: String,

    /// Refresh interval in seconds
    #[arg(long, default_value_t = 15)]
    pub interval: u64,

    /// Also list the raw open-order feed
    #[arg(long)]
    pub show_orders: bool,
}

pub async fn execute(info_url: &str, args: WatchArgs) -> Result<()> {
    if !is_valid_address(&args.address) {
        bail!(
            "invalid address '{}': expected 0x followed by 40 hex digits",
            args.address
        );
    }
    if args.interval == 0 {
        bail!("refresh interval must be at least 1 second");
    }

    let client = InfoClient::new(info_url)?;

    info!(
        address = %args.address,
        interval_secs = args.interval,
        "Starting watch loop (Ctrl-C to stop)"
    );

    let mut ticker = interval(Duration::from_secs(args.interval));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                if let Err(e) = refresh_once(&client, &args).await {
                    warn!("Refresh failed, retrying next tick: {}", e);
                }
            }
            _ = tokio::signal::ctrl_c() => {
                println!();
                info!("Watch stopped");
                return Ok(());
            }
        }
    }
}

async fn refresh_once(client: &InfoClient, args: &WatchArgs) -> Result<()> {
    let (state, orders) = client.fetch_snapshot(&args.address).await?;

    // Clear screen before re-rendering
    print!("\x1B[2J\x1B[1;1H");

    let Some(state) = state else {
        println!("No account state found for {}", args.address);
        return Ok(());
    };

    let positions = format_positions(&state, &orders);

    display::print_account_overview(&args.address, &state, &positions);
    display::print_positions_table(&positions);

    if args.show_orders {
        display::print_orders_table(&orders);
    }

    println!(
        "\nRefreshing every {}s. Press Ctrl-C to stop.",
        args.interval
    );

    Ok(())
}
