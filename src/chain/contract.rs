//! Fixed demo contract interactions.
//!
//! The demo targets one deployed storage contract whose address is
//! process-wide configuration. Its interface is two operations: a view
//! read of the stored value and a state-mutating write.

use alloy::sol;

use crate::chain::types::{ChainError, ChainResult, PendingTx, TxReceipt};
use crate::session::handle::ChainHandle;

sol! {
    #[sol(rpc)]
    interface Storage {
        function retrieve() external view returns (uint256);
        function store(uint256 value) external;
    }
}

/// Read the stored value via a view call.
pub async fn read_stored_value(handle: &ChainHandle) -> ChainResult<String> {
    let contract = Storage::new(handle.contract_address(), handle.provider().clone());
    let value = handle
        .rpc("Contract read", contract.retrieve().call())
        .await?;
    Ok(value.to_string())
}

/// Write a value to the contract; return as soon as the node accepts it.
///
/// # Arguments
/// * `value` - Decimal integer string (the contract stores a uint256)
pub async fn store_value(handle: &ChainHandle, value: &str) -> ChainResult<PendingTx> {
    let value = parse_value(value)?;
    let contract = Storage::new(handle.contract_address(), handle.provider().clone());

    let pending = handle.submit(contract.store(value).send()).await?;

    Ok(PendingTx {
        tx_hash: format!("{:#x}", pending.tx_hash()),
    })
}

/// Write a value to the contract and wait for inclusion.
pub async fn store_value_confirmed(
    handle: &ChainHandle,
    value: &str,
) -> ChainResult<TxReceipt> {
    let value = parse_value(value)?;
    let contract = Storage::new(handle.contract_address(), handle.provider().clone());

    let pending = handle.submit(contract.store(value).send()).await?;
    let tx_hash = *pending.tx_hash();
    tracing::debug!(tx_hash = %tx_hash, "Contract write broadcast, awaiting inclusion");

    let receipt = handle.confirm(pending.get_receipt()).await?;
    if !receipt.status() {
        return Err(ChainError::TxRejected("Transaction reverted".to_string()));
    }

    Ok(TxReceipt {
        tx_hash: format!("{:#x}", receipt.transaction_hash),
        block_number: receipt.block_number.unwrap_or_default(),
        from: receipt.from.to_checksum(None),
    })
}

fn parse_value(value: &str) -> ChainResult<alloy::primitives::U256> {
    value
        .trim()
        .parse()
        .map_err(|e| ChainError::InvalidInput(format!("Invalid contract value '{}': {}", value, e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::U256;

    #[test]
    fn test_parse_value() {
        assert_eq!(parse_value("100").unwrap(), U256::from(100u64));
        assert_eq!(parse_value(" 7 ").unwrap(), U256::from(7u64));
    }

    #[test]
    fn test_parse_value_rejects_garbage() {
        for bad in ["abc", "-1", "1.5", ""] {
            assert!(
                matches!(parse_value(bad), Err(ChainError::InvalidInput(_))),
                "expected InvalidInput for '{}'",
                bad
            );
        }
    }
}
