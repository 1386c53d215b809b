//! Chain facade subsystem.
//!
//! # Data Flow
//! ```text
//! Session (authenticated ChainHandle)
//!     → facade.rs (reads, signing, native transfers)
//!     → contract.rs (fixed storage contract read/write)
//!     → units.rs (human-decimal ↔ smallest-unit)
//!     → normalized strings / receipts back to the caller
//! ```
//!
//! # Design Decisions
//! - The facade is stateless: every operation takes the handle explicitly
//!   and holds nothing between calls
//! - Failures travel through ChainResult, never through the success type
//! - Remote calls run under the configured timeout; a dead node surfaces
//!   as ChainError::Timeout instead of hanging the caller

pub mod contract;
pub mod facade;
pub mod types;
pub mod units;

pub use types::{ChainError, ChainResult, PaymentReceipt, PendingTx, TxReceipt};
