//! One-shot portfolio view for an address

use anyhow::{bail, Result};
use clap::Args;
use tracing::info;

use crate::display;
use crate::engine::format_positions;
use crate::hyperliquid::types::{parse_or_zero, ClearinghouseState};
use crate::hyperliquid::{is_valid_address, InfoClient};

#[derive(Args, Debug)]
pub struct PositionsArgs {
    /// Account address (0x...)
    pub address: String,

    /// Also list the raw open-order feed
    #[arg(long)]
    pub show_orders: bool,

    /// Print the fetched account value as a ready-to-use sizer balance
    #[arg(long)]
    pub sizer_balance: bool,
}

pub async fn execute(info_url: &str, args: PositionsArgs) -> Result<()> {
    if !is_valid_address(&args.address) {
        bail!(
            "invalid address '{}': expected 0x followed by 40 hex digits",
            args.address
        );
    }

    let client = InfoClient::new(info_url)?;
    let (state, orders) = client.fetch_snapshot(&args.address).await?;

    let Some(state) = state else {
        println!("No account state found for {}", args.address);
        return Ok(());
    };

    let positions = format_positions(&state, &orders);
    info!(
        positions = positions.len(),
        orders = orders.len(),
        "Snapshot formatted"
    );

    display::print_account_overview(&args.address, &state, &positions);
    display::print_positions_table(&positions);

    if args.show_orders {
        display::print_orders_table(&orders);
    }

    if args.sizer_balance {
        println!("\n{}", sizer_balance_hint(&state));
    }

    Ok(())
}

/// Seed the sizer from the live account value, the way the original viewer
/// pre-filled its calculator balance from the fetched account.
fn sizer_balance_hint(state: &ClearinghouseState) -> String {
    let account_value = parse_or_zero(&state.margin_summary.account_value);
    format!(
        "Sizer balance from this account: hypersize sizer --balance {:.2} --entry <ENTRY> --stop <STOP>",
        account_value
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hyperliquid::types::MarginSummary;

    fn state(account_value: &str) -> ClearinghouseState {
        let summary = MarginSummary {
            account_value: account_value.to_string(),
            total_margin_used: "0".to_string(),
            total_ntl_pos: "0".to_string(),
            total_raw_usd: account_value.to_string(),
        };
        ClearinghouseState {
            asset_positions: Vec::new(),
            margin_summary: summary.clone(),
            cross_margin_summary: summary,
        }
    }

    #[test]
    fn test_sizer_balance_hint_surfaces_account_value() {
        let hint = sizer_balance_hint(&state("10432.513"));
        assert!(hint.contains("--balance 10432.51"));
    }

    #[test]
    fn test_sizer_balance_hint_with_unparseable_value() {
        // Parse-or-zero convention carries through to the seeded balance
        let hint = sizer_balance_hint(&state("not-a-number"));
        assert!(hint.contains("--balance 0.00"));
    }
}
