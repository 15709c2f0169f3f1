//! The content registry service.
//!
//! Wraps the pure state machine from `content-registry-core` in a
//! single-writer/multi-reader lock and wires in the two environment seams:
//! the logical clock and the fee transfer.

use tokio::sync::RwLock;

use content_registry_core::{
    ContentId, ContentPatch, ContentRecord, ContentSubmission, PrincipalId, RegistryState,
    UpdateRecord,
};

use crate::clock::Clock;
use crate::error::Result;
use crate::fees::FeeTransfer;

/// Default platform fee charged per registration.
pub const DEFAULT_PLATFORM_FEE: u64 = 100;

/// Configuration for the registry service.
#[derive(Debug, Clone)]
pub struct RegistryConfig {
    /// Fee charged per registration, payable to the authority. Adjustable
    /// later through `set_platform_fee`.
    pub platform_fee: u64,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            platform_fee: DEFAULT_PLATFORM_FEE,
        }
    }
}

/// The content registry service.
///
/// Provides the full registry interface:
/// - One-time authority setup and fee administration
/// - Registration with fee emission
/// - Creator-gated field updates
/// - Lookups by id and by content hash
///
/// Every mutating operation holds the write guard for its full duration,
/// including the fee transfer on registration, so concurrent callers are
/// serialized and nobody observes a half-applied write. Reads share the
/// read guard.
pub struct ContentRegistry<F: FeeTransfer, C: Clock> {
    /// The registry state, behind a single-writer/multi-reader lock.
    state: RwLock<RegistryState>,
    /// The fee transfer backend.
    fees: F,
    /// The logical clock.
    clock: C,
}

impl<F: FeeTransfer, C: Clock> ContentRegistry<F, C> {
    /// Create an empty registry.
    pub fn new(fees: F, clock: C, config: RegistryConfig) -> Self {
        Self {
            state: RwLock::new(RegistryState::new(config.platform_fee)),
            fees,
            clock,
        }
    }

    /// Get the fee backend.
    pub fn fees(&self) -> &F {
        &self.fees
    }

    /// Get the clock.
    pub fn clock(&self) -> &C {
        &self.clock
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Administration
    // ─────────────────────────────────────────────────────────────────────────

    /// Set the authority principal.
    ///
    /// Succeeds exactly once per registry; every later call fails and
    /// leaves the stored authority untouched.
    pub async fn set_authority(&self, authority: PrincipalId) -> Result<()> {
        let mut state = self.state.write().await;
        state.set_authority(authority)?;
        Ok(())
    }

    /// Replace the platform fee.
    ///
    /// Fails until the authority has been set. Takes effect for every
    /// registration that starts after this call returns.
    pub async fn set_platform_fee(&self, new_fee: u64) -> Result<()> {
        let mut state = self.state.write().await;
        state.set_platform_fee(new_fee)?;
        Ok(())
    }

    /// The current platform fee.
    pub async fn platform_fee(&self) -> u64 {
        self.state.read().await.platform_fee()
    }

    /// The authority principal, if set.
    pub async fn authority(&self) -> Option<PrincipalId> {
        self.state.read().await.authority().copied()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Writes
    // ─────────────────────────────────────────────────────────────────────────

    /// Register new content on behalf of `caller`.
    ///
    /// Validates in contract order, moves the platform fee from the caller
    /// to the authority, then commits and returns the assigned id. The
    /// write guard spans the whole sequence: a rejected transfer aborts
    /// with the registry unchanged, and no other operation can slip in
    /// between the transfer and the commit.
    pub async fn register_content(
        &self,
        caller: PrincipalId,
        submission: ContentSubmission,
    ) -> Result<ContentId> {
        let mut state = self.state.write().await;
        let now = self.clock.now();

        let prepared = state.prepare_registration(submission)?;

        if let Err(e) = self
            .fees
            .transfer(prepared.fee(), &caller, prepared.authority())
            .await
        {
            tracing::warn!("fee transfer rejected, registration aborted: {}", e);
            return Err(e.into());
        }

        Ok(state.commit_registration(prepared, caller, now))
    }

    /// Update the editable fields of `id` on behalf of `caller`.
    ///
    /// Only the record's creator may update it. On success the record's
    /// `updated_at` is restamped and the update history entry for `id` is
    /// overwritten.
    pub async fn update_content(
        &self,
        caller: PrincipalId,
        id: ContentId,
        patch: ContentPatch,
    ) -> Result<()> {
        let mut state = self.state.write().await;
        let now = self.clock.now();
        state.update(caller, now, id, patch)?;
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Reads
    // ─────────────────────────────────────────────────────────────────────────

    /// Get a record by id.
    pub async fn content(&self, id: ContentId) -> Option<ContentRecord> {
        self.state.read().await.content(id).cloned()
    }

    /// Get a record by its 32-byte content hash.
    pub async fn content_by_hash(&self, hash: &[u8]) -> Option<ContentRecord> {
        self.state.read().await.content_by_hash(hash).cloned()
    }

    /// The last update applied to `id`, if it was ever updated.
    pub async fn last_update(&self, id: ContentId) -> Option<UpdateRecord> {
        self.state.read().await.last_update(id).cloned()
    }

    /// Total number of registrations ever accepted.
    pub async fn content_count(&self) -> u64 {
        self.state.read().await.content_count()
    }

    /// Whether the exact hash bytes are registered.
    pub async fn is_content_registered(&self, hash: &[u8]) -> bool {
        self.state.read().await.is_registered(hash)
    }
}
