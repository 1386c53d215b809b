//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the demo.
//! All types derive Serde traits for deserialization from config files.
//! Defaults are the Kaia Kairos testnet coordinates, so a missing config
//! file yields a working setup.

use serde::{Deserialize, Serialize};

/// Root configuration for the wallet demo.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct DemoConfig {
    /// Chain coordinates (RPC endpoint, chain ID, contract).
    pub chain: ChainConfig,

    /// Payment defaults for the demo send flow.
    pub payment: PaymentConfig,
}

/// Process-wide constant chain configuration.
///
/// Supplied at startup and never mutated (the explorer URL is only used
/// for output formatting).
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ChainConfig {
    /// JSON-RPC endpoint URL.
    pub rpc_url: String,

    /// Chain ID (1001 for the Kairos testnet).
    pub chain_id: u64,

    /// Block explorer base URL for transaction links.
    pub explorer_url: String,

    /// Native currency ticker.
    pub ticker: String,

    /// Address of the fixed demo storage contract.
    pub contract_address: String,

    /// RPC request timeout in seconds.
    pub rpc_timeout_secs: u64,

    /// Maximum time to wait for transaction inclusion in seconds.
    pub confirmation_timeout_secs: u64,
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            rpc_url: "https://public-en-kairos.node.kaia.io".to_string(),
            chain_id: 1001,
            explorer_url: "https://kairos.kaiascan.io".to_string(),
            ticker: "KLAY".to_string(),
            contract_address: "0x2c6e199e0cfd8fdb73e8489ac4e59a6e6b63ec25".to_string(),
            rpc_timeout_secs: 10,
            confirmation_timeout_secs: 60,
        }
    }
}

/// Defaults for the demo payment flow.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct PaymentConfig {
    /// Destination used when the CLI is not given one.
    pub default_destination: String,

    /// Amount in human-decimal units used when the CLI is not given one.
    pub default_amount: String,
}

impl Default for PaymentConfig {
    fn default() -> Self {
        Self {
            default_destination: "0x75Bc50a5664657c869Edc0E058d192EeEfD570eb".to_string(),
            default_amount: "0.1".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_kairos() {
        let config = DemoConfig::default();
        assert_eq!(config.chain.chain_id, 1001);
        assert!(config.chain.rpc_url.contains("kairos"));
        assert_eq!(config.chain.ticker, "KLAY");
        assert_eq!(config.chain.rpc_timeout_secs, 10);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: DemoConfig = toml::from_str(
            r#"
            [chain]
            rpc_url = "http://localhost:8545"
            chain_id = 31337
            "#,
        )
        .unwrap();
        assert_eq!(config.chain.chain_id, 31337);
        assert_eq!(config.chain.rpc_url, "http://localhost:8545");
        // Untouched fields keep their defaults
        assert_eq!(config.chain.ticker, "KLAY");
        assert_eq!(config.payment.default_amount, "0.1");
    }
}
