//! Kaia Wallet Demo Library
//!
//! A small demo that logs a local wallet into the Kaia Kairos testnet and
//! performs basic chain operations through a stateless facade: balance
//! reads, message signing, native transfers, and a fixed storage contract
//! read/write.

pub mod chain;
pub mod config;
pub mod session;

pub use chain::{ChainError, ChainResult, PaymentReceipt, PendingTx, TxReceipt};
pub use config::DemoConfig;
pub use session::{ChainHandle, Session, Wallet};
