//! Position formatting pass
//!
//! Walks the raw clearinghouse positions in exchange order, drops closed
//! (zero-size) entries, reconstructs mark price, runs stop matching, and
//! assembles the display-ready records.

use rust_decimal::Decimal;

use crate::engine::mark::{notional, reconstruct_mark};
use crate::engine::stops::{match_stop, risk_at_stop};
use crate::engine::types::{FormattedPosition, PositionSide};
use crate::hyperliquid::types::{parse_or_zero, ClearinghouseState, OpenOrder};

/// Derive the risk-annotated view of every open position.
///
/// Output preserves the order of the exchange's raw sequence and contains no
/// zero-size entries.
pub fn format_positions(
    state: &ClearinghouseState,
    orders: &[OpenOrder],
) -> Vec<FormattedPosition> {
    state
        .asset_positions
        .iter()
        .filter_map(|item| {
            let pos = &item.position;

            let size = parse_or_zero(&pos.szi);
            if size.is_zero() {
                return None;
            }

            let entry_price = parse_or_zero(&pos.entry_px);
            let pnl = parse_or_zero(&pos.unrealized_pnl);
            let side = if size > Decimal::ZERO {
                PositionSide::Long
            } else {
                PositionSide::Short
            };

            let mark_price = reconstruct_mark(entry_price, size, pnl);

            // ROE is exchange-reported, not recomputed here
            let pnl_percent = parse_or_zero(&pos.return_on_equity) * Decimal::ONE_HUNDRED;

            let matched_stop_price = match_stop(side, &pos.coin, mark_price, orders);
            let risk = matched_stop_price.map(|stop| risk_at_stop(entry_price, stop, size));

            Some(FormattedPosition {
                ticker: pos.coin.clone(),
                size,
                entry_price,
                mark_price,
                pnl,
                pnl_percent,
                liquidation_price: pos.liquidation_px.as_deref().map(parse_or_zero),
                side,
                notional: notional(size, mark_price),
                leverage: pos.leverage.value,
                matched_stop_price,
                risk_at_stop: risk,
            })
        })
        .collect()
}

/// Total detected capital-at-risk across the portfolio.
///
/// Positions without a matched stop contribute zero to the sum; the display
/// layer still distinguishes "no stop detected" from an actual zero.
pub fn total_risk_at_stop(positions: &[FormattedPosition]) -> Decimal {
    positions.iter().filter_map(|p| p.risk_at_stop).sum()
}

/// Sum of unrealized PnL across the formatted sequence
pub fn total_unrealized_pnl(positions: &[FormattedPosition]) -> Decimal {
    positions.iter().map(|p| p.pnl).sum()
}
