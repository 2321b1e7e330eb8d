//! Mark price reconstruction
//!
//! The public info feed does not report mark price directly, but it does
//! report entry price and unrealized PnL, and the PnL formulas are exactly
//! invertible:
//!
//! - long:  `P = S * (M - E)`  =>  `M = P/S + E`
//! - short: `P = |S| * (E - M)` => `M = E - P/|S|`
//!
//! Precision is bounded only by the decimal conversion of the inputs.

use rust_decimal::Decimal;

/// Reconstruct the mark price from entry price, signed size, and unrealized
/// PnL.
///
/// Contract: `size != 0`. Zero-size positions represent closed positions and
/// must be filtered before reaching this routine; feeding one in is a caller
/// bug, not a recoverable condition.
pub fn reconstruct_mark(entry: Decimal, size: Decimal, pnl: Decimal) -> Decimal {
    debug_assert!(!size.is_zero(), "zero-size position reached reconstruction");

    if size > Decimal::ZERO {
        pnl / size + entry
    } else {
        entry - pnl / size.abs()
    }
}

/// Position notional in quote currency
pub fn notional(size: Decimal, mark: Decimal) -> Decimal {
    size.abs() * mark
}
