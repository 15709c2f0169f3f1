//! Test fixtures and helpers.
//!
//! Common setup code for registry tests.

use content_registry::{
    BlockClock, ContentRegistry, FeeLedger, FeeTransfer, FeeTransferError, RegistryConfig,
    Result,
};
use content_registry_core::{ContentHash, ContentId, ContentSubmission, PrincipalId};
use rand::Rng;

/// A principal with a stable identity derived from `name`.
pub fn principal(name: &str) -> PrincipalId {
    PrincipalId::derive(name)
}

/// A fresh random principal.
pub fn random_principal() -> PrincipalId {
    let mut bytes = [0u8; 32];
    rand::thread_rng().fill(&mut bytes);
    PrincipalId::from_bytes(bytes)
}

/// Distinct principals for multi-party tests.
pub fn multi_party_principals(count: usize) -> Vec<PrincipalId> {
    (0..count)
        .map(|i| principal(&format!("party-{i}")))
        .collect()
}

/// A 32-byte hash filled with `byte`.
pub fn patterned_hash(byte: u8) -> ContentHash {
    ContentHash::from_bytes([byte; 32])
}

/// The hash of the given content bytes.
///
/// For tests that want the hash to actually fingerprint something, rather
/// than a recognizable pattern.
pub fn hash_of(data: &[u8]) -> ContentHash {
    ContentHash::digest(data)
}

/// A submission that passes every validation rule.
pub fn submission(hash: ContentHash) -> ContentSubmission {
    ContentSubmission::new(hash.as_bytes().to_vec(), "Video", "ipfs://test", "video")
        .description("A test video")
        .price(100)
        .royalty_rate(10)
        .tags(["tag1", "tag2"])
}

/// A ready-to-use registry with its authority configured.
pub struct RegistryFixture {
    pub registry: ContentRegistry<FeeLedger, BlockClock>,
    pub authority: PrincipalId,
    pub creator: PrincipalId,
}

impl RegistryFixture {
    /// A fresh registry with the default fee and the authority already set.
    pub async fn new() -> Self {
        Self::with_config(RegistryConfig::default()).await
    }

    /// A fresh registry with a custom config and the authority already set.
    pub async fn with_config(config: RegistryConfig) -> Self {
        let registry = ContentRegistry::new(FeeLedger::new(), BlockClock::new(), config);
        let authority = principal("authority");
        let creator = principal("creator");
        registry
            .set_authority(authority)
            .await
            .expect("fresh registry accepts its first authority");
        Self {
            registry,
            authority,
            creator,
        }
    }

    /// Register a submission as the fixture's creator.
    pub async fn register(&self, submission: ContentSubmission) -> Result<ContentId> {
        self.registry.register_content(self.creator, submission).await
    }

    /// Register a patterned-hash submission as the fixture's creator.
    pub async fn register_patterned(&self, byte: u8) -> Result<ContentId> {
        self.register(submission(patterned_hash(byte))).await
    }

    /// Advance the logical clock by one block; returns the new height.
    pub fn advance_block(&self) -> u64 {
        self.registry.clock().advance()
    }
}

/// A fee backend that rejects every transfer.
///
/// For exercising the registration abort path.
#[derive(Debug, Default)]
pub struct RejectingFees;

#[async_trait::async_trait]
impl FeeTransfer for RejectingFees {
    async fn transfer(
        &self,
        _amount: u64,
        _from: &PrincipalId,
        _to: &PrincipalId,
    ) -> std::result::Result<(), FeeTransferError> {
        Err(FeeTransferError::new("rejected by test backend"))
    }
}
