//! Fee transfer abstraction.
//!
//! Registration charges the platform fee from the registering caller to the
//! authority. Moving the money is the environment's job; implementations may
//! call a payment contract, a billing service, or an in-process ledger. The
//! registry only requires that a transfer either settles or reports failure
//! before anything is committed.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use content_registry_core::PrincipalId;

/// Failure reported by a fee transfer backend.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{reason}")]
pub struct FeeTransferError {
    /// Backend-specific description of what went wrong.
    pub reason: String,
}

impl FeeTransferError {
    /// Create a transfer failure with the given reason.
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// A single settled transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeRecord {
    /// Amount moved.
    pub amount: u64,

    /// The paying principal (the registering caller).
    pub from: PrincipalId,

    /// The receiving principal (the authority).
    pub to: PrincipalId,
}

/// Trait for moving the platform fee between principals.
///
/// Implementations must be thread-safe (Send + Sync). The registry commits
/// the registration immediately after a transfer returns `Ok`, while still
/// holding its write guard, so implementations must not report success
/// speculatively.
#[async_trait]
pub trait FeeTransfer: Send + Sync {
    /// Move `amount` from `from` to `to`.
    ///
    /// Called once per accepted registration, including when `amount` is
    /// zero.
    async fn transfer(
        &self,
        amount: u64,
        from: &PrincipalId,
        to: &PrincipalId,
    ) -> Result<(), FeeTransferError>;
}

// Shared backends, mirroring the shared-clock impl.
#[async_trait]
impl<F: FeeTransfer + ?Sized> FeeTransfer for std::sync::Arc<F> {
    async fn transfer(
        &self,
        amount: u64,
        from: &PrincipalId,
        to: &PrincipalId,
    ) -> Result<(), FeeTransferError> {
        (**self).transfer(amount, from, to).await
    }
}

/// An in-memory backend that accepts every transfer and logs it.
///
/// The log is the sequence of fee emissions in registration order, which is
/// all most embeddings (and every test) need from the payment side.
#[derive(Debug, Default)]
pub struct FeeLedger {
    transfers: tokio::sync::RwLock<Vec<FeeRecord>>,
}

impl FeeLedger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every settled transfer, oldest first.
    pub async fn transfers(&self) -> Vec<FeeRecord> {
        self.transfers.read().await.clone()
    }

    /// Number of settled transfers.
    pub async fn len(&self) -> usize {
        self.transfers.read().await.len()
    }

    /// Whether no transfer has settled yet.
    pub async fn is_empty(&self) -> bool {
        self.transfers.read().await.is_empty()
    }
}

#[async_trait]
impl FeeTransfer for FeeLedger {
    async fn transfer(
        &self,
        amount: u64,
        from: &PrincipalId,
        to: &PrincipalId,
    ) -> Result<(), FeeTransferError> {
        self.transfers.write().await.push(FeeRecord {
            amount,
            from: *from,
            to: *to,
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_ledger_records_in_order() {
        let ledger = FeeLedger::new();
        let a = PrincipalId::derive("a");
        let b = PrincipalId::derive("b");

        assert!(ledger.is_empty().await);
        ledger.transfer(10, &a, &b).await.unwrap();
        ledger.transfer(0, &b, &a).await.unwrap();

        let transfers = ledger.transfers().await;
        assert_eq!(ledger.len().await, 2);
        assert_eq!(
            transfers,
            vec![
                FeeRecord {
                    amount: 10,
                    from: a,
                    to: b
                },
                FeeRecord {
                    amount: 0,
                    from: b,
                    to: a
                },
            ]
        );
    }

    #[tokio::test]
    async fn test_shared_ledger_through_arc() {
        let ledger = std::sync::Arc::new(FeeLedger::new());
        let handle = std::sync::Arc::clone(&ledger);
        handle
            .transfer(5, &PrincipalId::derive("x"), &PrincipalId::derive("y"))
            .await
            .unwrap();
        assert_eq!(ledger.len().await, 1);
    }
}
