//! Native currency unit conversion.
//!
//! Amounts cross the facade boundary as human-decimal strings; internally
//! every value is denominated in the chain's smallest unit (wei, 18
//! decimals for KLAY). Conversion truncates below one wei, so a round trip
//! is exact for inputs with at most 18 decimal places.

use alloy::primitives::utils::{format_ether, parse_ether};
use alloy::primitives::U256;

use crate::chain::types::{ChainError, ChainResult};

/// Parse a human-decimal amount (e.g. "0.1") into the smallest unit.
pub fn to_smallest_unit(amount: &str) -> ChainResult<U256> {
    parse_ether(amount.trim())
        .map_err(|e| ChainError::InvalidInput(format!("Invalid amount '{}': {}", amount, e)))
}

/// Format a smallest-unit value as a human-decimal string.
///
/// Trailing fractional zeros are trimmed; whole values keep a single
/// trailing zero ("1.0") to make the decimal form unambiguous.
pub fn from_smallest_unit(value: U256) -> String {
    let formatted = format_ether(value);
    match formatted.split_once('.') {
        Some((whole, frac)) => {
            let frac = frac.trim_end_matches('0');
            if frac.is_empty() {
                format!("{}.0", whole)
            } else {
                format!("{}.{}", whole, frac)
            }
        }
        None => formatted,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        for amount in ["0.1", "1.0", "0.000000000000000001", "42.5", "0.0"] {
            let wei = to_smallest_unit(amount).unwrap();
            assert_eq!(from_smallest_unit(wei), amount, "round trip for {}", amount);
        }
    }

    #[test]
    fn test_whole_amounts_normalized() {
        let wei = to_smallest_unit("1").unwrap();
        assert_eq!(from_smallest_unit(wei), "1.0");
    }

    #[test]
    fn test_known_conversion() {
        let wei = to_smallest_unit("0.1").unwrap();
        assert_eq!(wei, U256::from(100_000_000_000_000_000u64));
    }

    #[test]
    fn test_invalid_amount() {
        for bad in ["abc", "1.2.3", "", "1,5"] {
            let result = to_smallest_unit(bad);
            assert!(
                matches!(result, Err(ChainError::InvalidInput(_))),
                "expected InvalidInput for '{}'",
                bad
            );
        }
    }

    #[test]
    fn test_whitespace_tolerated() {
        let wei = to_smallest_unit(" 0.5 ").unwrap();
        assert_eq!(from_smallest_unit(wei), "0.5");
    }
}
