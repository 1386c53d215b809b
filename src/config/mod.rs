//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → DemoConfig (validated, immutable)
//!     → session + facade read it, never mutate it
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; chain coordinates are process-wide
//!   constants
//! - All fields have defaults (Kairos testnet) to allow running with no
//!   config file at all
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use schema::ChainConfig;
pub use schema::DemoConfig;
pub use schema::PaymentConfig;
