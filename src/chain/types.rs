//! Chain-specific types and error definitions.

use serde::Serialize;
use thiserror::Error;

/// Errors that can occur during chain operations.
///
/// Every facade operation reports failure through this type; a failure is
/// never encoded in the success value.
#[derive(Debug, Error)]
pub enum ChainError {
    /// No authenticated transport handle is available (not logged in).
    #[error("Transport unavailable: {0}")]
    TransportUnavailable(String),

    /// The chain node rejected or could not process a request.
    #[error("RPC error: {0}")]
    Rpc(String),

    /// A remote call did not complete within the configured timeout.
    #[error("RPC timeout after {0} seconds")]
    Timeout(u64),

    /// A submitted transaction failed validation or reverted on-chain.
    #[error("Transaction rejected: {0}")]
    TxRejected(String),

    /// Caller supplied a malformed address, amount, or value.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Invalid private key format or signing failure.
    #[error("Wallet error: {0}")]
    Wallet(String),

    /// Connected node reports a different chain than configured.
    #[error("Chain ID mismatch: expected {expected}, got {actual}")]
    ChainMismatch { expected: u64, actual: u64 },
}

/// Result type for chain operations.
pub type ChainResult<T> = Result<T, ChainError>;

/// Inclusion record for a confirmed value transfer.
#[derive(Debug, Clone, Serialize)]
pub struct PaymentReceipt {
    /// Transaction hash, 0x-prefixed.
    pub tx_hash: String,
    /// Block the transaction was included in.
    pub block_number: u64,
    /// Sender address (checksummed).
    pub from: String,
    /// Destination address (checksummed).
    pub to: String,
    /// Transferred amount in human-decimal units.
    pub amount: String,
}

/// Inclusion record for a confirmed contract call.
#[derive(Debug, Clone, Serialize)]
pub struct TxReceipt {
    /// Transaction hash, 0x-prefixed.
    pub tx_hash: String,
    /// Block the transaction was included in.
    pub block_number: u64,
    /// Sender address (checksummed).
    pub from: String,
}

/// A broadcast transaction that has not been waited on.
#[derive(Debug, Clone, Serialize)]
pub struct PendingTx {
    /// Transaction hash, 0x-prefixed.
    pub tx_hash: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ChainError::Timeout(10);
        assert_eq!(err.to_string(), "RPC timeout after 10 seconds");

        let err = ChainError::ChainMismatch {
            expected: 1001,
            actual: 1,
        };
        assert!(err.to_string().contains("1001"));

        let err = ChainError::TransportUnavailable("not logged in".to_string());
        assert!(err.to_string().contains("not logged in"));
    }

    #[test]
    fn test_receipt_serialization() {
        let receipt = PaymentReceipt {
            tx_hash: "0xabc".to_string(),
            block_number: 42,
            from: "0x1".to_string(),
            to: "0x2".to_string(),
            amount: "0.1".to_string(),
        };
        let json = serde_json::to_value(&receipt).unwrap();
        assert_eq!(json["tx_hash"], "0xabc");
        assert_eq!(json["block_number"], 42);
        assert_eq!(json["amount"], "0.1");
    }
}
