//! End-to-end tests for the registry service.
//!
//! Exercises the full interface the way an embedding would: one-time
//! authority setup, fee-charged registrations, creator-gated updates, and
//! the lookup surface, with the logical clock advanced in between.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;

use content_registry::{
    BlockClock, ContentPatch, ContentRegistry, ContentRegistryError, ContentSubmission,
    FeeLedger, FeeRecord, FeeTransfer, FeeTransferError, PrincipalId, RegistryConfig,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

fn authority() -> PrincipalId {
    PrincipalId::derive("authority")
}

fn creator() -> PrincipalId {
    PrincipalId::derive("creator")
}

fn submission(hash_byte: u8) -> ContentSubmission {
    ContentSubmission::new([hash_byte; 32], "Video", "ipfs://test", "video")
        .description("A test video")
        .price(100)
        .royalty_rate(10)
        .tags(["tag1", "tag2"])
}

/// A registry with the default config and the authority already set.
async fn ready_registry() -> ContentRegistry<FeeLedger, BlockClock> {
    let registry = ContentRegistry::new(
        FeeLedger::new(),
        BlockClock::new(),
        RegistryConfig::default(),
    );
    registry.set_authority(authority()).await.unwrap();
    registry
}

#[tokio::test]
async fn register_and_look_up_both_ways() {
    let registry = ready_registry().await;

    let id = registry
        .register_content(creator(), submission(0x01))
        .await
        .unwrap();
    assert_eq!(id.value(), 0);

    let record = registry.content(id).await.unwrap();
    assert_eq!(record.title, "Video");
    assert_eq!(record.description, "A test video");
    assert_eq!(record.ipfs_link, "ipfs://test");
    assert_eq!(record.price, 100);
    assert_eq!(record.royalty_rate, 10);
    assert_eq!(record.category, "video");
    assert_eq!(record.tags, vec!["tag1", "tag2"]);
    assert_eq!(record.creator, creator());
    assert_eq!(record.created_at, 0);
    assert_eq!(record.updated_at, 0);
    assert!(record.is_active);

    let by_hash = registry.content_by_hash(&[0x01u8; 32]).await.unwrap();
    assert_eq!(by_hash, record);

    assert_eq!(registry.content_count().await, 1);
    assert!(registry.is_content_registered(&[0x01u8; 32]).await);
    assert!(!registry.is_content_registered(&[0x02u8; 32]).await);
    assert!(registry.content(99u64.into()).await.is_none());
}

#[tokio::test]
async fn registration_emits_exactly_one_fee() {
    let registry = ready_registry().await;

    registry
        .register_content(creator(), submission(0x01))
        .await
        .unwrap();

    let transfers = registry.fees().transfers().await;
    assert_eq!(
        transfers,
        vec![FeeRecord {
            amount: 100,
            from: creator(),
            to: authority(),
        }]
    );
}

#[tokio::test]
async fn zero_fee_is_still_emitted() {
    let registry = ContentRegistry::new(
        FeeLedger::new(),
        BlockClock::new(),
        RegistryConfig { platform_fee: 0 },
    );
    registry.set_authority(authority()).await.unwrap();

    registry
        .register_content(creator(), submission(0x01))
        .await
        .unwrap();

    let transfers = registry.fees().transfers().await;
    assert_eq!(transfers.len(), 1);
    assert_eq!(transfers[0].amount, 0);
}

#[tokio::test]
async fn duplicate_hash_is_rejected_for_everyone() {
    let registry = ready_registry().await;
    registry
        .register_content(creator(), submission(0x01))
        .await
        .unwrap();

    // Same hash, different caller and different metadata: still a duplicate.
    let other = PrincipalId::derive("other");
    let mut retry = submission(0x01);
    retry.title = "Different title".into();
    let err = registry.register_content(other, retry).await.unwrap_err();
    assert_eq!(err.code(), Some(100));

    // Nothing changed: one record, one fee, original creator.
    assert_eq!(registry.content_count().await, 1);
    assert_eq!(registry.fees().len().await, 1);
    let record = registry.content(0u64.into()).await.unwrap();
    assert_eq!(record.creator, creator());
    assert_eq!(record.title, "Video");
}

#[tokio::test]
async fn nothing_registers_before_authority_is_set() {
    let registry = ContentRegistry::new(
        FeeLedger::new(),
        BlockClock::new(),
        RegistryConfig::default(),
    );

    let err = registry
        .register_content(creator(), submission(0x01))
        .await
        .unwrap_err();
    assert_eq!(err.code(), Some(112));

    // The authority gate outranks field validation.
    let mut bad = submission(0x02);
    bad.hash = vec![1, 2, 3];
    let err = registry.register_content(creator(), bad).await.unwrap_err();
    assert_eq!(err.code(), Some(112));

    assert_eq!(registry.content_count().await, 0);
    assert!(registry.fees().is_empty().await);
}

#[tokio::test]
async fn authority_can_only_be_set_once() {
    let registry = ready_registry().await;
    assert_eq!(registry.authority().await, Some(authority()));

    let usurper = PrincipalId::derive("usurper");
    let err = registry.set_authority(usurper).await.unwrap_err();
    assert!(matches!(err, ContentRegistryError::AuthorityAlreadySet(_)));
    assert_eq!(err.code(), None);

    // The original authority keeps receiving fees.
    assert_eq!(registry.authority().await, Some(authority()));
    registry
        .register_content(creator(), submission(0x01))
        .await
        .unwrap();
    assert_eq!(registry.fees().transfers().await[0].to, authority());
}

#[tokio::test]
async fn platform_fee_is_authority_gated_and_applies_to_later_registrations() {
    let registry = ContentRegistry::new(
        FeeLedger::new(),
        BlockClock::new(),
        RegistryConfig::default(),
    );

    let err = registry.set_platform_fee(250).await.unwrap_err();
    assert_eq!(err.code(), Some(112));
    assert_eq!(registry.platform_fee().await, 100);

    registry.set_authority(authority()).await.unwrap();
    registry
        .register_content(creator(), submission(0x01))
        .await
        .unwrap();

    registry.set_platform_fee(250).await.unwrap();
    assert_eq!(registry.platform_fee().await, 250);
    registry
        .register_content(creator(), submission(0x02))
        .await
        .unwrap();

    let amounts: Vec<u64> = registry
        .fees()
        .transfers()
        .await
        .iter()
        .map(|t| t.amount)
        .collect();
    assert_eq!(amounts, vec![100, 250]);
}

#[tokio::test]
async fn invalid_submissions_are_rejected_with_their_codes() {
    let registry = ready_registry().await;

    let mut s = submission(0x01);
    s.hash = vec![0x01; 31];
    assert_eq!(
        registry
            .register_content(creator(), s)
            .await
            .unwrap_err()
            .code(),
        Some(103)
    );

    let mut s = submission(0x01);
    s.description = "d".repeat(501);
    assert_eq!(
        registry
            .register_content(creator(), s)
            .await
            .unwrap_err()
            .code(),
        Some(105)
    );

    let mut s = submission(0x01);
    s.royalty_rate = 101;
    assert_eq!(
        registry
            .register_content(creator(), s)
            .await
            .unwrap_err()
            .code(),
        Some(108)
    );

    // Rejections consume no ids: the next success is still id 0.
    let id = registry
        .register_content(creator(), submission(0x01))
        .await
        .unwrap();
    assert_eq!(id.value(), 0);
}

#[tokio::test]
async fn update_rewrites_record_and_history() {
    let registry = ready_registry().await;
    let id = registry
        .register_content(creator(), submission(0x01))
        .await
        .unwrap();

    // Move the chain forward a few blocks before editing.
    registry.clock().advance();
    registry.clock().advance();

    let patch = ContentPatch::new("Updated Video", "ipfs://updated")
        .description("Updated description")
        .price(200);
    registry.update_content(creator(), id, patch).await.unwrap();

    let record = registry.content(id).await.unwrap();
    assert_eq!(record.title, "Updated Video");
    assert_eq!(record.description, "Updated description");
    assert_eq!(record.ipfs_link, "ipfs://updated");
    assert_eq!(record.price, 200);
    assert_eq!(record.created_at, 0);
    assert_eq!(record.updated_at, 2);

    // Immutable fields survive the edit.
    assert_eq!(record.royalty_rate, 10);
    assert_eq!(record.category, "video");
    assert_eq!(record.creator, creator());

    let update = registry.last_update(id).await.unwrap();
    assert_eq!(update.title, "Updated Video");
    assert_eq!(update.price, 200);
    assert_eq!(update.updated_at, 2);
    assert_eq!(update.updater, creator());

    // A second update overwrites the history entry.
    registry.clock().advance();
    registry
        .update_content(creator(), id, ContentPatch::new("Final", "ipfs://final"))
        .await
        .unwrap();
    let update = registry.last_update(id).await.unwrap();
    assert_eq!(update.title, "Final");
    assert_eq!(update.updated_at, 3);
}

#[tokio::test]
async fn only_the_creator_may_update() {
    let registry = ready_registry().await;
    let id = registry
        .register_content(creator(), submission(0x01))
        .await
        .unwrap();

    let stranger = PrincipalId::derive("stranger");
    let err = registry
        .update_content(stranger, id, ContentPatch::new("Hijacked", "ipfs://x"))
        .await
        .unwrap_err();
    assert_eq!(err.code(), Some(102));

    // Even the authority is not the creator.
    let err = registry
        .update_content(authority(), id, ContentPatch::new("Hijacked", "ipfs://x"))
        .await
        .unwrap_err();
    assert_eq!(err.code(), Some(102));

    // The ownership check outranks field validation: a stranger's
    // oversized description still reports 102, not 105.
    let err = registry
        .update_content(
            stranger,
            id,
            ContentPatch::new("ok", "ipfs://x").description("d".repeat(501)),
        )
        .await
        .unwrap_err();
    assert_eq!(err.code(), Some(102));

    let record = registry.content(id).await.unwrap();
    assert_eq!(record.title, "Video");
    assert!(registry.last_update(id).await.is_none());
}

#[tokio::test]
async fn invalid_update_changes_nothing() {
    let registry = ready_registry().await;
    let id = registry
        .register_content(creator(), submission(0x01))
        .await
        .unwrap();

    let err = registry
        .update_content(
            creator(),
            id,
            ContentPatch::new("ok", "ipfs://x").description("d".repeat(501)),
        )
        .await
        .unwrap_err();
    assert_eq!(err.code(), Some(105));

    let record = registry.content(id).await.unwrap();
    assert_eq!(record.description, "A test video");
    assert!(registry.last_update(id).await.is_none());

    let err = registry
        .update_content(creator(), 42u64.into(), ContentPatch::new("x", "ipfs://x"))
        .await
        .unwrap_err();
    assert_eq!(err.code(), Some(101));
}

/// A fee backend that rejects its first transfer, then settles normally.
struct FailOnce {
    failed: AtomicBool,
}

impl FailOnce {
    fn new() -> Self {
        Self {
            failed: AtomicBool::new(false),
        }
    }
}

#[async_trait]
impl FeeTransfer for FailOnce {
    async fn transfer(
        &self,
        _amount: u64,
        _from: &PrincipalId,
        _to: &PrincipalId,
    ) -> Result<(), FeeTransferError> {
        if !self.failed.swap(true, Ordering::SeqCst) {
            return Err(FeeTransferError::new("payment backend offline"));
        }
        Ok(())
    }
}

#[tokio::test]
async fn failed_fee_transfer_aborts_the_registration() {
    init_tracing();

    let registry = ContentRegistry::new(
        FailOnce::new(),
        BlockClock::new(),
        RegistryConfig::default(),
    );
    registry.set_authority(authority()).await.unwrap();

    let err = registry
        .register_content(creator(), submission(0x01))
        .await
        .unwrap_err();
    assert!(matches!(err, ContentRegistryError::FeeTransfer(_)));
    assert_eq!(err.code(), None);

    // Nothing committed, and the hash was not burned by the attempt.
    assert_eq!(registry.content_count().await, 0);
    assert!(!registry.is_content_registered(&[0x01u8; 32]).await);

    let id = registry
        .register_content(creator(), submission(0x01))
        .await
        .unwrap();
    assert_eq!(id.value(), 0);
    assert!(registry.is_content_registered(&[0x01u8; 32]).await);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_registrations_serialize_cleanly() {
    let registry = Arc::new(ready_registry().await);

    let mut handles = Vec::new();
    for n in 0u8..16 {
        let registry = Arc::clone(&registry);
        handles.push(tokio::spawn(async move {
            registry
                .register_content(creator(), submission(n))
                .await
                .unwrap()
                .value()
        }));
    }

    let mut ids = Vec::new();
    for handle in handles {
        ids.push(handle.await.unwrap());
    }
    ids.sort_unstable();

    // Dense ids, one record and one fee per registration.
    assert_eq!(ids, (0..16).collect::<Vec<u64>>());
    assert_eq!(registry.content_count().await, 16);
    assert_eq!(registry.fees().len().await, 16);
}
