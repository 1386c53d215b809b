//! Stateless chain facade operations.
//!
//! # Responsibilities
//! - Translate UI-level intents into one-shot calls on a supplied handle
//! - Normalize results to strings and plain records the UI renders directly
//! - Map every failure into the ChainError taxonomy
//!
//! # Design Decisions
//! - Every operation takes the handle as its first argument and retains
//!   nothing between calls
//! - Waiting and non-waiting submission are separate, explicitly named
//!   operations; the caller chooses

use alloy::network::TransactionBuilder;
use alloy::primitives::{Address, U256};
use alloy::providers::Provider;
use alloy::rpc::types::TransactionRequest;

use crate::chain::types::{ChainError, ChainResult, PaymentReceipt, PendingTx};
use crate::chain::units;
use crate::session::handle::ChainHandle;

/// Get the connected network's chain ID as a decimal string.
pub async fn network_id(handle: &ChainHandle) -> ChainResult<String> {
    let id = handle
        .rpc("Chain ID query", handle.provider().get_chain_id())
        .await?;
    Ok(id.to_string())
}

/// Get the checksummed account address bound to the handle.
pub async fn account(handle: &ChainHandle) -> ChainResult<String> {
    Ok(handle.address().to_checksum(None))
}

/// Get the account's native balance as a human-decimal string.
pub async fn balance(handle: &ChainHandle) -> ChainResult<String> {
    let wei = handle
        .rpc("Balance query", handle.provider().get_balance(handle.address()))
        .await?;
    Ok(units::from_smallest_unit(wei))
}

/// Sign a UTF-8 message with the session key (EIP-191 personal sign).
///
/// Returns the 65-byte signature as a 0x-prefixed hex string.
pub async fn sign_message(handle: &ChainHandle, message: &str) -> ChainResult<String> {
    let signature = handle.wallet().sign_message(message.as_bytes()).await?;
    Ok(format!(
        "0x{}",
        alloy::primitives::hex::encode(signature.as_bytes())
    ))
}

/// Send native currency and wait for inclusion.
///
/// # Arguments
/// * `destination` - Recipient address string
/// * `amount` - Human-decimal amount (e.g. "0.1")
pub async fn send_payment(
    handle: &ChainHandle,
    destination: &str,
    amount: &str,
) -> ChainResult<PaymentReceipt> {
    let (to, value) = parse_payment(destination, amount)?;
    let tx = TransactionRequest::default().with_to(to).with_value(value);

    let pending = handle
        .submit(handle.provider().send_transaction(tx))
        .await?;
    let tx_hash = *pending.tx_hash();
    tracing::debug!(tx_hash = %tx_hash, "Payment broadcast, awaiting inclusion");

    let receipt = handle.confirm(pending.get_receipt()).await?;
    if !receipt.status() {
        return Err(ChainError::TxRejected("Transaction reverted".to_string()));
    }

    Ok(PaymentReceipt {
        tx_hash: format!("{:#x}", receipt.transaction_hash),
        block_number: receipt.block_number.unwrap_or_default(),
        from: receipt.from.to_checksum(None),
        to: to.to_checksum(None),
        amount: units::from_smallest_unit(value),
    })
}

/// Send native currency and return as soon as the node accepts it.
pub async fn submit_payment(
    handle: &ChainHandle,
    destination: &str,
    amount: &str,
) -> ChainResult<PendingTx> {
    let (to, value) = parse_payment(destination, amount)?;
    let tx = TransactionRequest::default().with_to(to).with_value(value);

    let pending = handle
        .submit(handle.provider().send_transaction(tx))
        .await?;

    Ok(PendingTx {
        tx_hash: format!("{:#x}", pending.tx_hash()),
    })
}

fn parse_payment(destination: &str, amount: &str) -> ChainResult<(Address, U256)> {
    let to: Address = destination.parse().map_err(|e| {
        ChainError::InvalidInput(format!("Invalid destination address '{}': {}", destination, e))
    })?;
    let value = units::to_smallest_unit(amount)?;
    Ok((to, value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_payment() {
        let (to, value) =
            parse_payment("0x75Bc50a5664657c869Edc0E058d192EeEfD570eb", "0.1").unwrap();
        assert_eq!(
            to.to_checksum(None),
            "0x75Bc50a5664657c869Edc0E058d192EeEfD570eb"
        );
        assert_eq!(units::from_smallest_unit(value), "0.1");
    }

    #[test]
    fn test_parse_payment_bad_address() {
        let result = parse_payment("not-an-address", "0.1");
        assert!(matches!(result, Err(ChainError::InvalidInput(_))));
    }

    #[test]
    fn test_parse_payment_bad_amount() {
        let result = parse_payment("0x75Bc50a5664657c869Edc0E058d192EeEfD570eb", "lots");
        assert!(matches!(result, Err(ChainError::InvalidInput(_))));
    }
}
