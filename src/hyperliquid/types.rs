//! Typed models of the Hyperliquid info API responses
//!
//! Prices and sizes arrive as decimal strings to avoid floating-point
//! artifacts at the API boundary; conversion happens at the engine edge via
//! [`parse_or_zero`].

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Parse a decimal string, falling back to zero.
///
/// The original viewer coerced unparseable numeric strings to zero and this
/// convention is kept. It is a latent precision risk: a malformed feed value
/// silently becomes 0 rather than an error.
pub fn parse_or_zero(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap_or(Decimal::ZERO)
}

/// Parse a decimal string, dropping unparseable values.
///
/// Used where zero-coercion would be unsafe: a malformed order price turned
/// into 0 would sit strictly below mark and could win stop selection for a
/// long. The original's `parseFloat` produced NaN there, which its
/// comparison filters excluded; this is the equivalent.
pub fn parse_decimal(s: &str) -> Option<Decimal> {
    Decimal::from_str(s).ok()
}

/// Account-level clearinghouse state for one address
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClearinghouseState {
    #[serde(default)]
    pub asset_positions: Vec<AssetPosition>,
    pub margin_summary: MarginSummary,
    pub cross_margin_summary: MarginSummary,
}

/// Wrapper the API puts around each position
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetPosition {
    pub position: RawPosition,
    /// "oneWay" or "hedge"
    #[serde(rename = "type")]
    pub kind: String,
}

/// Raw per-instrument position as reported by the exchange
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPosition {
    pub coin: String,
    /// Signed size: magnitude = contracts in base units, sign = direction
    pub szi: String,
    pub entry_px: String,
    pub position_value: String,
    pub unrealized_pnl: String,
    /// ROE as a fraction (0.05 = 5%)
    pub return_on_equity: String,
    /// Absent when no liquidation risk exists at current leverage
    pub liquidation_px: Option<String>,
    pub leverage: Leverage,
    pub margin_used: String,
}

/// Leverage setting for a position
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Leverage {
    /// "cross" or "isolated"
    #[serde(rename = "type")]
    pub kind: String,
    pub value: u32,
}

/// Account margin totals
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarginSummary {
    pub account_value: String,
    pub total_margin_used: String,
    pub total_ntl_pos: String,
    pub total_raw_usd: String,
}

/// Order side: the API reports bids as "B" and asks as "A"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderSide {
    #[serde(rename = "B")]
    Buy,
    #[serde(rename = "A")]
    Sell,
}

/// Open limit order from the public order feed
///
/// True stop-trigger orders are often kept outside this feed, which is why
/// stop detection downstream is best-effort only.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenOrder {
    pub coin: String,
    pub side: OrderSide,
    pub limit_px: String,
    pub sz: String,
    pub oid: u64,
    pub timestamp: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parse_or_zero() {
        assert_eq!(parse_or_zero("2500.5"), dec!(2500.5));
        assert_eq!(parse_or_zero("-0.25"), dec!(-0.25));
        assert_eq!(parse_or_zero("not a number"), Decimal::ZERO);
        assert_eq!(parse_or_zero(""), Decimal::ZERO);
    }

    #[test]
    fn test_parse_decimal() {
        assert_eq!(parse_decimal("98"), Some(dec!(98)));
        assert_eq!(parse_decimal("not a number"), None);
        assert_eq!(parse_decimal(""), None);
    }

    #[test]
    fn test_deserialize_clearinghouse_state() {
        let raw = r#"{
            "assetPositions": [{
                "type": "oneWay",
                "position": {
                    "coin": "ETH",
                    "szi": "2.5",
                    "entryPx": "2500.0",
                    "positionValue": "6300.0",
                    "unrealizedPnl": "50.0",
                    "returnOnEquity": "0.04",
                    "liquidationPx": null,
                    "leverage": {"type": "cross", "value": 5},
                    "marginUsed": "1260.0"
                }
            }],
            "marginSummary": {
                "accountValue": "10000.0",
                "totalMarginUsed": "1260.0",
                "totalNtlPos": "6300.0",
                "totalRawUsd": "10000.0"
            },
            "crossMarginSummary": {
                "accountValue": "10000.0",
                "totalMarginUsed": "1260.0",
                "totalNtlPos": "6300.0",
                "totalRawUsd": "10000.0"
            }
        }"#;

        let state: ClearinghouseState = serde_json::from_str(raw).unwrap();
        assert_eq!(state.asset_positions.len(), 1);
        let pos = &state.asset_positions[0].position;
        assert_eq!(pos.coin, "ETH");
        assert_eq!(parse_or_zero(&pos.szi), dec!(2.5));
        assert!(pos.liquidation_px.is_none());
        assert_eq!(pos.leverage.value, 5);
    }

    #[test]
    fn test_deserialize_open_order_sides() {
        let raw = r#"[
            {"coin": "ETH", "side": "A", "limitPx": "2600.0", "sz": "1.0", "oid": 1, "timestamp": 1700000000000},
            {"coin": "BTC", "side": "B", "limitPx": "61000", "sz": "0.1", "oid": 2, "timestamp": 1700000000001}
        ]"#;

        let orders: Vec<OpenOrder> = serde_json::from_str(raw).unwrap();
        assert_eq!(orders[0].side, OrderSide::Sell);
        assert_eq!(orders[1].side, OrderSide::Buy);
    }
}
