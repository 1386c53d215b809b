//! Authenticated transport handle construction.
//!
//! # Responsibilities
//! - Connect an alloy provider with the session wallet attached
//! - Verify the connected chain ID against configuration
//! - Apply the configured timeout to every remote call

use std::future::{Future, IntoFuture};
use std::time::Duration;

use alloy::network::Ethereum;
use alloy::primitives::Address;
use alloy::providers::{DynProvider, Provider, ProviderBuilder};
use tokio::time::timeout;

use crate::chain::types::{ChainError, ChainResult};
use crate::config::schema::ChainConfig;
use crate::session::wallet::Wallet;

/// An authenticated, chain-connected transport handle.
///
/// Built once at login and passed explicitly into every facade operation.
/// The facade never retains one; dropping the handle ends the connection.
#[derive(Clone)]
pub struct ChainHandle {
    /// Type-erased provider with the wallet filler attached.
    provider: DynProvider<Ethereum>,
    /// The session's signing identity.
    wallet: Wallet,
    /// Chain ID from configuration.
    chain_id: u64,
    /// Fixed demo contract address.
    contract_address: Address,
    /// Per-call timeout for one-shot RPC reads and broadcasts.
    rpc_timeout: Duration,
    /// Timeout for waiting on transaction inclusion.
    confirmation_timeout: Duration,
}

impl ChainHandle {
    /// Connect to the configured RPC endpoint with the wallet attached.
    ///
    /// Verifies the reported chain ID against configuration; a mismatch is
    /// logged but does not fail the connection, so the demo stays usable
    /// against forks and local nodes.
    pub async fn connect(config: &ChainConfig, wallet: Wallet) -> ChainResult<Self> {
        let contract_address: Address = config.contract_address.parse().map_err(|e| {
            ChainError::InvalidInput(format!(
                "Invalid contract address '{}': {}",
                config.contract_address, e
            ))
        })?;

        let provider: DynProvider<Ethereum> = ProviderBuilder::new()
            .wallet(wallet.signer().clone())
            .connect(&config.rpc_url)
            .await
            .map_err(|e| {
                ChainError::Rpc(format!("Failed to connect to '{}': {}", config.rpc_url, e))
            })?
            .erased();

        let handle = Self {
            provider,
            wallet,
            chain_id: config.chain_id,
            contract_address,
            rpc_timeout: Duration::from_secs(config.rpc_timeout_secs),
            confirmation_timeout: Duration::from_secs(config.confirmation_timeout_secs),
        };

        match handle.verify_chain_id().await {
            Ok(()) => {
                tracing::info!(
                    address = %handle.wallet.address(),
                    chain_id = config.chain_id,
                    rpc_url = %config.rpc_url,
                    "Session connected"
                );
            }
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    "Session connected but chain verification failed"
                );
            }
        }

        Ok(handle)
    }

    /// Verify the connected chain ID matches configuration.
    pub async fn verify_chain_id(&self) -> ChainResult<()> {
        let reported = self.rpc("Chain ID query", self.provider.get_chain_id()).await?;
        if reported != self.chain_id {
            return Err(ChainError::ChainMismatch {
                expected: self.chain_id,
                actual: reported,
            });
        }
        Ok(())
    }

    /// Run a one-shot remote read under the RPC timeout.
    pub(crate) async fn rpc<T, E, F>(&self, what: &str, fut: F) -> ChainResult<T>
    where
        F: IntoFuture<Output = Result<T, E>>,
        E: std::fmt::Display,
    {
        match timeout(self.rpc_timeout, fut).await {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(e)) => Err(ChainError::Rpc(format!("{} failed: {}", what, e))),
            Err(_) => Err(ChainError::Timeout(self.rpc_timeout.as_secs())),
        }
    }

    /// Broadcast a transaction under the RPC timeout.
    ///
    /// Submission failures map to [`ChainError::TxRejected`] since the node
    /// refused the transaction itself, not the transport.
    pub(crate) async fn submit<T, E, F>(&self, fut: F) -> ChainResult<T>
    where
        F: Future<Output = Result<T, E>>,
        E: std::fmt::Display,
    {
        match timeout(self.rpc_timeout, fut).await {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(e)) => Err(ChainError::TxRejected(format!("Broadcast failed: {}", e))),
            Err(_) => Err(ChainError::Timeout(self.rpc_timeout.as_secs())),
        }
    }

    /// Wait for transaction inclusion under the confirmation timeout.
    pub(crate) async fn confirm<T, E, F>(&self, fut: F) -> ChainResult<T>
    where
        F: Future<Output = Result<T, E>>,
        E: std::fmt::Display,
    {
        match timeout(self.confirmation_timeout, fut).await {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(e)) => Err(ChainError::Rpc(format!("Receipt retrieval failed: {}", e))),
            Err(_) => Err(ChainError::Timeout(self.confirmation_timeout.as_secs())),
        }
    }

    /// Get the underlying provider.
    pub(crate) fn provider(&self) -> &DynProvider<Ethereum> {
        &self.provider
    }

    /// Get the session wallet.
    pub(crate) fn wallet(&self) -> &Wallet {
        &self.wallet
    }

    /// Get the account address bound to this handle.
    pub fn address(&self) -> Address {
        self.wallet.address()
    }

    /// Get the configured chain ID.
    pub fn chain_id(&self) -> u64 {
        self.chain_id
    }

    /// Get the fixed demo contract address.
    pub fn contract_address(&self) -> Address {
        self.contract_address
    }
}

impl std::fmt::Debug for ChainHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChainHandle")
            .field("address", &self.address())
            .field("chain_id", &self.chain_id)
            .field("contract_address", &self.contract_address)
            .finish_non_exhaustive()
    }
}
