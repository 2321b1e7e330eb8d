//! Terminal rendering for portfolio and sizer output

use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use owo_colors::OwoColorize;
use rust_decimal::Decimal;

use crate::engine::types::{FormattedPosition, PositionSide, SizerInput, SizerResult};
use crate::engine::{total_risk_at_stop, total_unrealized_pnl};
use crate::hyperliquid::types::{parse_or_zero, ClearinghouseState, OpenOrder, OrderSide};

fn signed_money(value: Decimal) -> String {
    if value >= Decimal::ZERO {
        format!("+${:.2}", value).bright_green().to_string()
    } else {
        format!("-${:.2}", value.abs()).bright_red().to_string()
    }
}

/// Render the account header: value, margin usage, PnL, detected risk.
pub fn print_account_overview(
    address: &str,
    state: &ClearinghouseState,
    positions: &[FormattedPosition],
) {
    let account_value = parse_or_zero(&state.margin_summary.account_value);
    let margin_used = parse_or_zero(&state.margin_summary.total_margin_used);
    let unrealized = total_unrealized_pnl(positions);
    let detected_risk = total_risk_at_stop(positions);
    let undetected = positions.iter().filter(|p| !p.has_stop()).count();

    println!("\n{}", "ACCOUNT OVERVIEW".bright_yellow());
    println!("{}", "─".repeat(50).bright_black());
    println!("👤 Address: {}", address.bright_cyan());
    println!("💰 Account Value: ${:.2}", account_value);
    println!("🔒 Margin Used: ${:.2}", margin_used);
    println!("📈 Unrealized PnL: {}", signed_money(unrealized));

    if positions.iter().any(|p| p.has_stop()) {
        println!(
            "🛑 Detected Risk at Stops: {}",
            format!("-${:.2}", detected_risk).bright_red()
        );
    }
    if undetected > 0 {
        println!(
            "{}",
            format!(
                "⚠️  {} position(s) with no stop detected in the public order feed",
                undetected
            )
            .yellow()
        );
    }
}

/// Render the positions table. Absent stops show as "—" so an undetected
/// stop is never confused with zero risk.
pub fn print_positions_table(positions: &[FormattedPosition]) {
    println!("\n{}", "ACTIVE POSITIONS".bright_yellow());
    println!("{}", "─".repeat(50).bright_black());

    if positions.is_empty() {
        println!("{}", "No open positions".bright_black().italic());
        return;
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            "Coin", "Side", "Size", "Entry", "Mark", "Liq.", "uPnL", "ROE %", "Lev",
            "Est. Stop", "Risk @ Stop",
        ]);

    for position in positions {
        let side_display = match position.side {
            PositionSide::Long => position.side.as_str().bright_green().to_string(),
            PositionSide::Short => position.side.as_str().bright_red().to_string(),
        };

        let liq_display = position
            .liquidation_price
            .map(|p| format!("{:.4}", p))
            .unwrap_or_else(|| "—".to_string());

        let stop_display = position
            .matched_stop_price
            .map(|p| format!("{:.4}", p))
            .unwrap_or_else(|| "—".to_string());

        let risk_display = position
            .risk_at_stop
            .map(|r| format!("-${:.2}", r).bright_red().to_string())
            .unwrap_or_else(|| "—".to_string());

        table.add_row(vec![
            position.ticker.clone(),
            side_display,
            format!("{}", position.size),
            format!("{:.4}", position.entry_price),
            format!("{:.4}", position.mark_price),
            liq_display,
            signed_money(position.pnl),
            format!("{:.2}", position.pnl_percent),
            format!("{}x", position.leverage),
            stop_display,
            risk_display,
        ]);
    }

    println!("{table}");
}

/// Render the raw open-order feed.
pub fn print_orders_table(orders: &[OpenOrder]) {
    println!("\n{}", "OPEN ORDERS".bright_yellow());
    println!("{}", "─".repeat(50).bright_black());

    if orders.is_empty() {
        println!("{}", "No open orders".bright_black().italic());
        return;
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Coin", "Side", "Limit Price", "Size", "Order ID"]);

    for order in orders {
        let side_display = match order.side {
            OrderSide::Buy => "BUY".bright_green().to_string(),
            OrderSide::Sell => "SELL".bright_red().to_string(),
        };

        table.add_row(vec![
            order.coin.clone(),
            side_display,
            order.limit_px.clone(),
            order.sz.clone(),
            order.oid.to_string(),
        ]);
    }

    println!("{table}");
}

/// Render the sizer result card, with a leverage warning above the
/// configured threshold.
pub fn print_sizer_result(input: &SizerInput, result: &SizerResult, warn_leverage: Decimal) {
    let side_display = match result.side {
        PositionSide::Long => result.side.as_str().bright_green().to_string(),
        PositionSide::Short => result.side.as_str().bright_red().to_string(),
    };

    println!("\n{}", "POSITION SIZER".bright_yellow());
    println!("{}", "─".repeat(50).bright_black());
    println!("Direction: {}", side_display);
    println!(
        "Account Risk ({}%): {}",
        input.risk_percent,
        format!("-${:.2}", result.risk_amount).bright_red()
    );
    println!(
        "Position Size: {} ({:.4} coins)",
        format!("${:.2}", result.position_size_notional).bright_white(),
        result.position_size_coins
    );
    println!("Required Leverage: {:.1}x", result.leverage);

    if let (Some(reward), Some(ratio)) = (result.reward, result.risk_reward) {
        println!(
            "Risk : Reward: 1 : {:.2} ({})",
            ratio,
            format!("+${:.2}", reward).bright_green()
        );
    }

    if result.leverage > warn_leverage {
        println!(
            "\n{}",
            format!(
                "⚠️  Required leverage exceeds {}x. Be extremely careful with liquidation risk.",
                warn_leverage
            )
            .bright_red()
        );
    }
}
