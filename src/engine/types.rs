//! Engine type definitions with strong typing

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Position side (long/short)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PositionSide {
    Long,
    Short,
}

impl PositionSide {
    pub fn as_str(&self) -> &'static str {
        match self {
            PositionSide::Long => "LONG",
            PositionSide::Short => "SHORT",
        }
    }
}

/// Risk-annotated view of one open position, derived fresh on every
/// formatting pass. There is no identity across polls: a later position with
/// the same ticker is an independently reconstructed value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormattedPosition {
    pub ticker: String,
    /// Signed size; never zero (closed positions are filtered out)
    pub size: Decimal,
    pub entry_price: Decimal,
    /// Reconstructed from entry price and unrealized PnL, not reported
    pub mark_price: Decimal,
    pub pnl: Decimal,
    /// Exchange-reported return on equity scaled to percent
    pub pnl_percent: Decimal,
    pub liquidation_price: Option<Decimal>,
    pub side: PositionSide,
    /// |size| x mark price, in quote currency
    pub notional: Decimal,
    pub leverage: u32,
    /// Best-effort stop estimate; `None` means "no stop detected", which is
    /// not the same as zero risk
    pub matched_stop_price: Option<Decimal>,
    /// Loss from entry if the matched stop executes
    pub risk_at_stop: Option<Decimal>,
}

impl FormattedPosition {
    pub fn has_stop(&self) -> bool {
        self.matched_stop_price.is_some()
    }
}

/// Inputs to the position sizer
#[derive(Debug, Clone, Copy)]
pub struct SizerInput {
    pub balance: Decimal,
    /// Percent of balance to risk, e.g. 1.0 for 1%
    pub risk_percent: Decimal,
    pub entry: Decimal,
    pub stop_loss: Decimal,
    pub target: Option<Decimal>,
}

/// Sizer output, fully determined by the input
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SizerResult {
    pub risk_amount: Decimal,
    pub position_size_notional: Decimal,
    pub position_size_coins: Decimal,
    /// Implied, never clamped; display layers warn above a threshold
    pub leverage: Decimal,
    pub side: PositionSide,
    pub reward: Option<Decimal>,
    pub risk_reward: Option<Decimal>,
}
