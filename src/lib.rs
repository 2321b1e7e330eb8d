pub mod cli;
pub mod data_paths;
pub mod display;
pub mod engine;
pub mod hyperliquid;
pub mod logging;
