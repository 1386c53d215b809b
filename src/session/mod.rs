//! Session lifecycle subsystem.
//!
//! # Data Flow
//! ```text
//! Environment variable (private key)
//!     → wallet.rs (key loading, signing identity)
//!     → handle.rs (provider connection, chain verification)
//!     → Session (login/logout state, handle access)
//!     → chain facade (handle passed per call)
//! ```
//!
//! # Design Decisions
//! - The transport handle is explicitly initialized and explicitly passed;
//!   there is no module-level singleton
//! - A logged-out session yields TransportUnavailable, never a panic
//! - The facade never retains the handle; only the session owns it

pub mod handle;
pub mod wallet;

pub use handle::ChainHandle;
pub use wallet::Wallet;

use crate::chain::types::{ChainError, ChainResult};
use crate::config::schema::DemoConfig;

/// Login/logout state for the demo.
///
/// Owns the one [`ChainHandle`] while logged in and hands out references
/// for facade calls.
#[derive(Debug)]
pub struct Session {
    config: DemoConfig,
    handle: Option<ChainHandle>,
}

impl Session {
    /// Create a logged-out session with the given configuration.
    pub fn new(config: DemoConfig) -> Self {
        Self {
            config,
            handle: None,
        }
    }

    /// Log in: connect a transport handle for the given wallet.
    ///
    /// Replaces any existing handle.
    pub async fn login(&mut self, wallet: Wallet) -> ChainResult<()> {
        let handle = ChainHandle::connect(&self.config.chain, wallet).await?;
        self.handle = Some(handle);
        Ok(())
    }

    /// Log out: drop the transport handle.
    pub fn logout(&mut self) {
        if self.handle.take().is_some() {
            tracing::info!("Session logged out");
        }
    }

    /// Whether a transport handle is currently held.
    pub fn is_logged_in(&self) -> bool {
        self.handle.is_some()
    }

    /// Borrow the transport handle for a facade call.
    ///
    /// # Errors
    /// [`ChainError::TransportUnavailable`] if not logged in.
    pub fn handle(&self) -> ChainResult<&ChainHandle> {
        self.handle
            .as_ref()
            .ok_or_else(|| ChainError::TransportUnavailable("not logged in".to_string()))
    }

    /// Get the session configuration.
    pub fn config(&self) -> &DemoConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logged_out_session() {
        let session = Session::new(DemoConfig::default());
        assert!(!session.is_logged_in());

        let result = session.handle();
        assert!(matches!(
            result,
            Err(ChainError::TransportUnavailable(_))
        ));
    }

    #[test]
    fn test_logout_is_idempotent() {
        let mut session = Session::new(DemoConfig::default());
        session.logout();
        session.logout();
        assert!(!session.is_logged_in());
    }
}
