//! Position sizer command
//!
//! Pure calculator, no network access. Mirrors the engine's validity rules:
//! invalid input produces an explanation, never a zero-filled result.

use anyhow::Result;
use clap::Args;
use owo_colors::OwoColorize;
use rust_decimal::Decimal;

use crate::display;
use crate::engine::types::SizerInput;
use crate::engine::size_position;

#[derive(Args, Debug)]
pub struct SizerArgs {
    /// Account balance in quote currency
    #[arg(long)]
    pub balance: Decimal,

    /// Percent of balance to risk per trade
    #[arg(long, default_value = "1.0")]
    pub risk: Decimal,

    /// Planned entry price
    #[arg(long)]
    pub entry: Decimal,

    /// Stop-loss price
    #[arg(long)]
    pub stop: Decimal,

    /// Optional take-profit target price
    #[arg(long)]
    pub target: Option<Decimal>,

    /// Warn when required leverage exceeds this multiple
    #[arg(long, default_value = "50")]
    pub warn_leverage: Decimal,
}

pub async fn execute(args: SizerArgs) -> Result<()> {
    let input = SizerInput {
        balance: args.balance,
        risk_percent: args.risk,
        entry: args.entry,
        stop_loss: args.stop,
        target: args.target,
    };

    match size_position(&input) {
        Some(result) => display::print_sizer_result(&input, &result, args.warn_leverage),
        None => {
            println!("\n{}", "No sizing possible for this input:".yellow());
            for reason in invalid_reasons(&input) {
                println!("  • {}", reason);
            }
        }
    }

    Ok(())
}

fn invalid_reasons(input: &SizerInput) -> Vec<&'static str> {
    let mut reasons = Vec::new();
    if input.balance <= Decimal::ZERO {
        reasons.push("balance must be positive");
    }
    if input.entry <= Decimal::ZERO {
        reasons.push("entry price must be positive");
    }
    if input.stop_loss <= Decimal::ZERO {
        reasons.push("stop-loss price must be positive");
    }
    if input.entry > Decimal::ZERO && input.entry == input.stop_loss {
        reasons.push("entry and stop-loss must differ");
    }
    reasons
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_invalid_reasons_cover_each_precondition() {
        let input = SizerInput {
            balance: Decimal::ZERO,
            risk_percent: dec!(1),
            entry: dec!(-1),
            stop_loss: Decimal::ZERO,
            target: None,
        };
        let reasons = invalid_reasons(&input);
        assert_eq!(reasons.len(), 3);

        let input = SizerInput {
            balance: dec!(1000),
            risk_percent: dec!(1),
            entry: dec!(100),
            stop_loss: dec!(100),
            target: None,
        };
        assert_eq!(invalid_reasons(&input), vec!["entry and stop-loss must differ"]);
    }
}
