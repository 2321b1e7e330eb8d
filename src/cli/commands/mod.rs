//! CLI Commands module
//!
//! Each command follows a consistent pattern: a dedicated Args struct and an
//! `execute` function invoked by the top-level dispatcher.

pub mod positions;
pub mod sizer;
pub mod version;
pub mod watch;
