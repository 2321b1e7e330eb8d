//! Derivation engine
//!
//! Pure, synchronous transformations over data already held in memory:
//! mark-price reconstruction, best-effort stop matching, position
//! formatting, and the standalone position sizer. Nothing in here performs
//! I/O or keeps state between invocations.

pub mod formatter;
pub mod mark;
pub mod sizer;
pub mod stops;
pub mod types;

pub use formatter::{format_positions, total_risk_at_stop, total_unrealized_pnl};
pub use mark::{notional, reconstruct_mark};
pub use sizer::size_position;
pub use stops::{match_stop, risk_at_stop};
pub use types::{FormattedPosition, PositionSide, SizerInput, SizerResult};
