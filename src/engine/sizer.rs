//! Position sizing calculator
//!
//! Independent of the live-data pipeline: a pure function of balance, risk
//! percent, entry, stop, and optional target. Invalid input produces no
//! result at all rather than a zero-filled one, so absence can never be
//! mistaken for "zero risk".

use rust_decimal::Decimal;

use crate::engine::types::{PositionSide, SizerInput, SizerResult};

/// Compute the sized position for the given trade plan.
///
/// Returns `None` when the input is degenerate: non-positive balance, entry,
/// or stop, or a zero entry-to-stop distance. Implied leverage is reported
/// as-is, even beyond anything an exchange would grant; clamping and warning
/// are display concerns.
pub fn size_position(input: &SizerInput) -> Option<SizerResult> {
    let SizerInput {
        balance,
        risk_percent,
        entry,
        stop_loss,
        target,
    } = *input;

    if balance <= Decimal::ZERO
        || entry <= Decimal::ZERO
        || stop_loss <= Decimal::ZERO
        || entry == stop_loss
    {
        return None;
    }

    let risk_amount = balance * risk_percent / Decimal::ONE_HUNDRED;
    let price_diff_pct = (entry - stop_loss).abs() / entry;

    let position_size_notional = risk_amount / price_diff_pct;
    let position_size_coins = position_size_notional / entry;
    let leverage = position_size_notional / balance;

    let side = if entry > stop_loss {
        PositionSide::Long
    } else {
        PositionSide::Short
    };

    let (reward, risk_reward) = match target.filter(|t| *t > Decimal::ZERO) {
        Some(target) => {
            let target_diff_pct = (target - entry).abs() / entry;
            let reward = position_size_notional * target_diff_pct;
            // risk_percent = 0 is allowed and sizes to zero; the ratio is
            // undefined there
            let ratio = if risk_amount.is_zero() {
                None
            } else {
                Some(reward / risk_amount)
            };
            (Some(reward), ratio)
        }
        None => (None, None),
    };

    Some(SizerResult {
        risk_amount,
        position_size_notional,
        position_size_coins,
        leverage,
        side,
        reward,
        risk_reward,
    })
}
