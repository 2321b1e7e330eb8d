//! Hyperliquid public info API integration
//!
//! This module provides access to the unauthenticated info endpoint for
//! fetching an account's clearinghouse state and open orders. Only public
//! data is used; trigger orders behind authentication are not visible here.

pub mod client;
pub mod types;

pub use client::{InfoClient, InfoError, MAINNET_INFO_URL, TESTNET_INFO_URL};

/// Check that an address looks like an EVM account address (0x + 40 hex digits).
pub fn is_valid_address(address: &str) -> bool {
    address.len() == 42
        && address.starts_with("0x")
        && address[2..].chars().all(|c| c.is_ascii_hexdigit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_address() {
        assert!(is_valid_address(
            "0x1234567890abcdefABCDEF1234567890abcdefAB"
        ));
    }

    #[test]
    fn test_invalid_addresses() {
        assert!(!is_valid_address(""));
        assert!(!is_valid_address("0x1234"));
        // Missing 0x prefix
        assert!(!is_valid_address(
            "121234567890abcdefABCDEF1234567890abcdefAB"
        ));
        // Non-hex character
        assert!(!is_valid_address(
            "0x1234567890abcdefABCDEF1234567890abcdefAZ"
        ));
    }
}
