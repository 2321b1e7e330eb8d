//! Best-effort stop detection from public limit orders
//!
//! The public order feed usually carries plain limit orders only; true
//! stop-trigger orders tend to live behind authenticated endpoints. The
//! matcher therefore estimates: among orders that would reduce the position,
//! the one closest to mark on the losing side is assumed to be the stop.
//! Callers must present the result as an estimate, never as verified safety.

use rust_decimal::Decimal;

use crate::engine::types::PositionSide;
use crate::hyperliquid::types::{parse_decimal, OpenOrder, OrderSide};

/// Find the order price acting as this position's stop, if any.
///
/// A long is reduced by sells, a short by buys. Only prices strictly on the
/// losing side of mark qualify: a sell above mark is a take-profit, not a
/// stop. Among qualifying prices the one closest to mark wins, since that is
/// the first the market would hit. An order exactly at mark is ambiguous and
/// deliberately excluded, matching the original design.
pub fn match_stop(
    side: PositionSide,
    coin: &str,
    mark: Decimal,
    orders: &[OpenOrder],
) -> Option<Decimal> {
    let reducing_side = match side {
        PositionSide::Long => OrderSide::Sell,
        PositionSide::Short => OrderSide::Buy,
    };

    // Malformed prices drop out of the candidate set entirely; coercing them
    // to zero would fabricate a below-mark "stop" for longs
    let candidates = orders
        .iter()
        .filter(|o| o.coin == coin && o.side == reducing_side)
        .filter_map(|o| parse_decimal(&o.limit_px));

    match side {
        PositionSide::Long => candidates.filter(|p| *p < mark).max(),
        PositionSide::Short => candidates.filter(|p| *p > mark).min(),
    }
}

/// Estimated loss if the stop executes, measured from entry.
///
/// Entry distance (not mark distance) models total capital-at-risk from the
/// original fill rather than incremental risk from the current price.
pub fn risk_at_stop(entry: Decimal, stop: Decimal, size: Decimal) -> Decimal {
    (entry - stop).abs() * size.abs()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn order(coin: &str, side: OrderSide, limit_px: &str) -> OpenOrder {
        OpenOrder {
            coin: coin.to_string(),
            side,
            limit_px: limit_px.to_string(),
            sz: "1.0".to_string(),
            oid: 0,
            timestamp: 0,
        }
    }

    #[test]
    fn test_long_picks_highest_price_below_mark() {
        let orders = vec![
            order("ETH", OrderSide::Sell, "90"),
            order("ETH", OrderSide::Sell, "95"),
            order("ETH", OrderSide::Sell, "98"),
            order("ETH", OrderSide::Sell, "105"),
        ];

        // 105 is above mark: a take-profit, not a stop
        let stop = match_stop(PositionSide::Long, "ETH", dec!(100), &orders);
        assert_eq!(stop, Some(dec!(98)));
    }

    #[test]
    fn test_short_picks_lowest_price_above_mark() {
        let orders = vec![
            order("ETH", OrderSide::Buy, "110"),
            order("ETH", OrderSide::Buy, "103"),
            order("ETH", OrderSide::Buy, "97"),
        ];

        let stop = match_stop(PositionSide::Short, "ETH", dec!(100), &orders);
        assert_eq!(stop, Some(dec!(103)));
    }

    #[test]
    fn test_wrong_side_orders_never_match() {
        // Buys cannot reduce a long, sells cannot reduce a short
        let orders = vec![
            order("ETH", OrderSide::Buy, "95"),
            order("ETH", OrderSide::Sell, "105"),
        ];

        assert_eq!(
            match_stop(PositionSide::Long, "ETH", dec!(100), &orders),
            None
        );
        assert_eq!(
            match_stop(PositionSide::Short, "ETH", dec!(100), &orders),
            None
        );
    }

    #[test]
    fn test_other_coins_ignored() {
        let orders = vec![
            order("BTC", OrderSide::Sell, "95"),
            order("ETH", OrderSide::Sell, "90"),
        ];

        let stop = match_stop(PositionSide::Long, "ETH", dec!(100), &orders);
        assert_eq!(stop, Some(dec!(90)));
    }

    #[test]
    fn test_order_exactly_at_mark_excluded() {
        let orders = vec![order("ETH", OrderSide::Sell, "100")];
        assert_eq!(
            match_stop(PositionSide::Long, "ETH", dec!(100), &orders),
            None
        );

        let orders = vec![order("ETH", OrderSide::Buy, "100")];
        assert_eq!(
            match_stop(PositionSide::Short, "ETH", dec!(100), &orders),
            None
        );
    }

    #[test]
    fn test_malformed_price_is_not_a_candidate() {
        // A bogus limitPx must not become a price-0 stop for a long
        let orders = vec![order("ETH", OrderSide::Sell, "not-a-price")];
        assert_eq!(
            match_stop(PositionSide::Long, "ETH", dec!(100), &orders),
            None
        );

        // Valid candidates still win alongside malformed ones
        let orders = vec![
            order("ETH", OrderSide::Sell, "not-a-price"),
            order("ETH", OrderSide::Sell, "95"),
        ];
        assert_eq!(
            match_stop(PositionSide::Long, "ETH", dec!(100), &orders),
            Some(dec!(95))
        );
    }

    #[test]
    fn test_no_orders_is_no_match() {
        assert_eq!(match_stop(PositionSide::Long, "ETH", dec!(100), &[]), None);
    }

    #[test]
    fn test_duplicate_prices_collapse() {
        let orders = vec![
            order("ETH", OrderSide::Sell, "98"),
            order("ETH", OrderSide::Sell, "98"),
        ];

        let stop = match_stop(PositionSide::Long, "ETH", dec!(100), &orders);
        assert_eq!(stop, Some(dec!(98)));
    }

    #[test]
    fn test_risk_at_stop_uses_entry_distance() {
        // Entry 100, stop 95, 10 coins => 50 at risk regardless of mark
        assert_eq!(risk_at_stop(dec!(100), dec!(95), dec!(10)), dec!(50));
        // Short side, negative size
        assert_eq!(risk_at_stop(dec!(100), dec!(103), dec!(-10)), dec!(30));
    }
}
