//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, chain ID non-zero)
//! - Validate chain coordinates parse (URLs, addresses, amounts)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: DemoConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use alloy::primitives::utils::parse_ether;
use alloy::primitives::Address;
use thiserror::Error;

use crate::config::schema::DemoConfig;

/// A single semantic configuration problem.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Invalid RPC URL '{url}': {reason}")]
    InvalidRpcUrl { url: String, reason: String },

    #[error("Invalid explorer URL '{url}': {reason}")]
    InvalidExplorerUrl { url: String, reason: String },

    #[error("Chain ID must be non-zero")]
    ZeroChainId,

    #[error("RPC timeout must be non-zero")]
    ZeroRpcTimeout,

    #[error("Confirmation timeout must be non-zero")]
    ZeroConfirmationTimeout,

    #[error("Invalid contract address '{address}': {reason}")]
    InvalidContractAddress { address: String, reason: String },

    #[error("Invalid default destination '{address}': {reason}")]
    InvalidDestination { address: String, reason: String },

    #[error("Invalid default amount '{amount}': {reason}")]
    InvalidAmount { amount: String, reason: String },
}

/// Validate a configuration, collecting every problem found.
pub fn validate_config(config: &DemoConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if let Err(e) = config.chain.rpc_url.parse::<url::Url>() {
        errors.push(ValidationError::InvalidRpcUrl {
            url: config.chain.rpc_url.clone(),
            reason: e.to_string(),
        });
    }

    if let Err(e) = config.chain.explorer_url.parse::<url::Url>() {
        errors.push(ValidationError::InvalidExplorerUrl {
            url: config.chain.explorer_url.clone(),
            reason: e.to_string(),
        });
    }

    if config.chain.chain_id == 0 {
        errors.push(ValidationError::ZeroChainId);
    }

    if config.chain.rpc_timeout_secs == 0 {
        errors.push(ValidationError::ZeroRpcTimeout);
    }

    if config.chain.confirmation_timeout_secs == 0 {
        errors.push(ValidationError::ZeroConfirmationTimeout);
    }

    if let Err(e) = config.chain.contract_address.parse::<Address>() {
        errors.push(ValidationError::InvalidContractAddress {
            address: config.chain.contract_address.clone(),
            reason: e.to_string(),
        });
    }

    if let Err(e) = config.payment.default_destination.parse::<Address>() {
        errors.push(ValidationError::InvalidDestination {
            address: config.payment.default_destination.clone(),
            reason: e.to_string(),
        });
    }

    if let Err(e) = parse_ether(&config.payment.default_amount) {
        errors.push(ValidationError::InvalidAmount {
            amount: config.payment.default_amount.clone(),
            reason: e.to_string(),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&DemoConfig::default()).is_ok());
    }

    #[test]
    fn test_collects_all_errors() {
        let mut config = DemoConfig::default();
        config.chain.rpc_url = "not a url".to_string();
        config.chain.chain_id = 0;
        config.chain.rpc_timeout_secs = 0;
        config.chain.contract_address = "0x123".to_string();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 4);
    }

    #[test]
    fn test_bad_default_amount() {
        let mut config = DemoConfig::default();
        config.payment.default_amount = "a lot".to_string();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].to_string().contains("a lot"));
    }
}
