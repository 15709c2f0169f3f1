//! The registry state machine.
//!
//! [`RegistryState`] owns everything the registry knows: the record store,
//! the hash index, the update history, the id counter, the platform fee and
//! the authority. Every mutating method validates fully before touching any
//! structure, so a failed call leaves the state exactly as it found it.
//!
//! This module is pure computation. Concurrency, fee transfers and the
//! logical clock live in the `content-registry` service crate.

use std::collections::HashMap;

use crate::error::{AuthorityAlreadySet, RegistryError};
use crate::record::{ContentPatch, ContentRecord, ContentSubmission, UpdateRecord};
use crate::types::{ContentHash, ContentId, PrincipalId};
use crate::validation::{validate_editable_fields, validate_submission};

/// The registry's complete state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryState {
    /// All records indexed by content id.
    records: HashMap<ContentId, ContentRecord>,

    /// Index: content hash -> content id. Kept in lockstep with `records`.
    by_hash: HashMap<ContentHash, ContentId>,

    /// Last update per content id, overwritten on every update.
    updates: HashMap<ContentId, UpdateRecord>,

    /// The next id to assign; equals the number of registrations accepted.
    next_content_id: u64,

    /// Fee charged on registration, payable to the authority.
    platform_fee: u64,

    /// The authority principal. Writable exactly once.
    authority: Option<PrincipalId>,
}

/// A registration that has passed every check and is waiting to commit.
///
/// Produced by [`RegistryState::prepare_registration`]; carries the fee
/// quote so the caller can perform the transfer between prepare and commit.
/// The state must not change in between, which the service layer guarantees
/// by holding its write guard across both calls.
#[derive(Debug, Clone)]
pub struct PreparedRegistration {
    hash: ContentHash,
    submission: ContentSubmission,
    fee: u64,
    authority: PrincipalId,
}

impl PreparedRegistration {
    /// The parsed content hash.
    pub fn hash(&self) -> &ContentHash {
        &self.hash
    }

    /// The fee to transfer before committing.
    pub fn fee(&self) -> u64 {
        self.fee
    }

    /// The principal the fee is owed to.
    pub fn authority(&self) -> &PrincipalId {
        &self.authority
    }
}

impl RegistryState {
    /// Create an empty registry charging `platform_fee` per registration.
    pub fn new(platform_fee: u64) -> Self {
        Self {
            records: HashMap::new(),
            by_hash: HashMap::new(),
            updates: HashMap::new(),
            next_content_id: 0,
            platform_fee,
            authority: None,
        }
    }

    // ────────────────────────────────────────────────────────────────────
    // Administration
    // ────────────────────────────────────────────────────────────────────

    /// The authority principal, if configured.
    pub fn authority(&self) -> Option<&PrincipalId> {
        self.authority.as_ref()
    }

    /// The current per-registration fee.
    pub fn platform_fee(&self) -> u64 {
        self.platform_fee
    }

    /// Set the authority principal.
    ///
    /// Succeeds exactly once; every later call fails and leaves the stored
    /// value untouched.
    pub fn set_authority(&mut self, authority: PrincipalId) -> Result<(), AuthorityAlreadySet> {
        if self.authority.is_some() {
            return Err(AuthorityAlreadySet);
        }
        self.authority = Some(authority);
        Ok(())
    }

    /// Replace the platform fee.
    ///
    /// Requires the authority to be configured first. Verifying that the
    /// caller speaks for the authority is the embedding's concern, not ours.
    pub fn set_platform_fee(&mut self, new_fee: u64) -> Result<(), RegistryError> {
        if self.authority.is_none() {
            return Err(RegistryError::AuthorityNotSet);
        }
        self.platform_fee = new_fee;
        Ok(())
    }

    // ────────────────────────────────────────────────────────────────────
    // Registration
    // ────────────────────────────────────────────────────────────────────

    /// Run every registration check, in contract order, without mutating.
    ///
    /// This performs:
    /// - Authority presence
    /// - Field validation (hash length through tags)
    /// - Hash uniqueness
    ///
    /// On success the returned [`PreparedRegistration`] holds the parsed
    /// hash plus the fee quote (amount and recipient) for the caller to
    /// settle before [`commit_registration`](Self::commit_registration).
    pub fn prepare_registration(
        &self,
        submission: ContentSubmission,
    ) -> Result<PreparedRegistration, RegistryError> {
        // 1. Nothing is accepted until the authority exists
        let authority = self.authority.ok_or(RegistryError::AuthorityNotSet)?;

        // 2-9. Field checks, yielding the parsed hash
        let hash = validate_submission(&submission)?;

        // 10. Uniqueness on the exact hash bytes
        if self.by_hash.contains_key(&hash) {
            return Err(RegistryError::DuplicateContent);
        }

        Ok(PreparedRegistration {
            hash,
            submission,
            fee: self.platform_fee,
            authority,
        })
    }

    /// Insert a prepared registration, assigning the next id.
    ///
    /// Both the record map and the hash index are updated here, in one call,
    /// so no reader can ever see a record without its index entry. Debug
    /// builds assert that the prepared hash is still free; committing a
    /// preparation after the state has moved breaks the uniqueness invariant.
    pub fn commit_registration(
        &mut self,
        prepared: PreparedRegistration,
        creator: PrincipalId,
        now: u64,
    ) -> ContentId {
        let PreparedRegistration {
            hash, submission, ..
        } = prepared;

        debug_assert!(
            !self.by_hash.contains_key(&hash),
            "stale preparation: hash registered since prepare"
        );

        let id = ContentId::new(self.next_content_id);
        let record = ContentRecord {
            content_hash: hash,
            creator,
            title: submission.title,
            description: submission.description,
            ipfs_link: submission.ipfs_link,
            price: submission.price,
            royalty_rate: submission.royalty_rate,
            category: submission.category,
            tags: submission.tags,
            created_at: now,
            updated_at: now,
            is_active: true,
        };

        // Insert record and index together
        self.records.insert(id, record);
        self.by_hash.insert(hash, id);
        self.next_content_id += 1;

        id
    }

    /// Validate and insert in one step, without a fee transfer.
    ///
    /// Embeddings that charge no fee (or settle it elsewhere) use this; the
    /// service layer uses the prepare/commit pair so the transfer can sit
    /// between validation and insertion.
    pub fn register(
        &mut self,
        creator: PrincipalId,
        now: u64,
        submission: ContentSubmission,
    ) -> Result<ContentId, RegistryError> {
        let prepared = self.prepare_registration(submission)?;
        Ok(self.commit_registration(prepared, creator, now))
    }

    // ────────────────────────────────────────────────────────────────────
    // Update
    // ────────────────────────────────────────────────────────────────────

    /// Replace the editable fields of an existing record.
    ///
    /// This performs, in order:
    /// - Existence of `id`
    /// - Caller is the creator
    /// - Field validation (title, description, link, price)
    ///
    /// On success the record is rewritten, its `updated_at` stamped with
    /// `now`, and the update history entry for `id` overwritten. Hash,
    /// creator, royalty, category, tags and `created_at` never change.
    pub fn update(
        &mut self,
        caller: PrincipalId,
        now: u64,
        id: ContentId,
        patch: ContentPatch,
    ) -> Result<(), RegistryError> {
        let record = self
            .records
            .get_mut(&id)
            .ok_or(RegistryError::ContentNotFound)?;

        if record.creator != caller {
            return Err(RegistryError::NotAuthorized);
        }

        validate_editable_fields(&patch.title, &patch.description, &patch.ipfs_link, patch.price)?;

        // All checks passed; apply to the record and the history together
        record.title = patch.title.clone();
        record.description = patch.description.clone();
        record.ipfs_link = patch.ipfs_link.clone();
        record.price = patch.price;
        record.updated_at = now;

        self.updates.insert(
            id,
            UpdateRecord {
                title: patch.title,
                description: patch.description,
                ipfs_link: patch.ipfs_link,
                price: patch.price,
                updated_at: now,
                updater: caller,
            },
        );

        Ok(())
    }

    // ────────────────────────────────────────────────────────────────────
    // Reads
    // ────────────────────────────────────────────────────────────────────

    /// Get a record by id.
    pub fn content(&self, id: ContentId) -> Option<&ContentRecord> {
        self.records.get(&id)
    }

    /// Get a record by its 32-byte content hash.
    ///
    /// Byte strings of any other length are never in the index, so they
    /// simply come back absent.
    pub fn content_by_hash(&self, hash: &[u8]) -> Option<&ContentRecord> {
        let hash = ContentHash::from_slice(hash)?;
        let id = self.by_hash.get(&hash)?;
        self.records.get(id)
    }

    /// The last update applied to `id`, if it was ever updated.
    pub fn last_update(&self, id: ContentId) -> Option<&UpdateRecord> {
        self.updates.get(&id)
    }

    /// Total number of registrations ever accepted.
    pub fn content_count(&self) -> u64 {
        self.next_content_id
    }

    /// Whether the exact hash bytes are registered.
    pub fn is_registered(&self, hash: &[u8]) -> bool {
        match ContentHash::from_slice(hash) {
            Some(hash) => self.by_hash.contains_key(&hash),
            None => false,
        }
    }
}
