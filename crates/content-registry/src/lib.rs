//! # Content Registry
//!
//! A content registration ledger - records keyed by sequential id and by
//! 32-byte content hash, with creator-gated updates and a fee emitted per
//! registration.
//!
//! ## Overview
//!
//! The registry provides:
//!
//! - **Records**: Validated content entries, reachable by id or by hash
//! - **Uniqueness**: Each content hash registers at most once, forever
//! - **Ownership**: Only a record's creator may edit its editable fields
//! - **History**: A last-write marker per record (title, link, price, updater)
//! - **Fees**: A platform fee moved from caller to authority on every
//!   registration, atomically with the insert
//!
//! ## Key Concepts
//!
//! - **Authority**: A principal set exactly once; receives fees and gates
//!   fee changes. Nothing registers until it is set.
//! - **Logical height**: Records are stamped from a [`Clock`], not wall
//!   time. [`BlockClock`] is an atomic counter the environment advances.
//! - **Rejection codes**: Every state machine rejection carries a stable
//!   numeric code (100-112, 111 reserved) for wire compatibility.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use content_registry::{BlockClock, ContentRegistry, FeeLedger, RegistryConfig};
//! use content_registry::{ContentSubmission, PrincipalId};
//!
//! async fn example() {
//!     let registry = ContentRegistry::new(
//!         FeeLedger::new(),
//!         BlockClock::new(),
//!         RegistryConfig::default(),
//!     );
//!
//!     // One-time setup: the fee recipient.
//!     let authority = PrincipalId::derive("authority");
//!     registry.set_authority(authority).await.unwrap();
//!
//!     // Register a piece of content.
//!     let creator = PrincipalId::derive("creator");
//!     let submission = ContentSubmission::new(
//!         [0x01u8; 32],
//!         "Video",
//!         "ipfs://bafybeigdyrzt.../video.mp4",
//!         "video",
//!     )
//!     .description("A test video")
//!     .price(100)
//!     .royalty_rate(10);
//!
//!     let id = registry.register_content(creator, submission).await.unwrap();
//!
//!     // Look it up both ways.
//!     let record = registry.content(id).await.unwrap();
//!     assert_eq!(record.content_hash.as_bytes(), &[0x01u8; 32]);
//!     assert!(registry.is_content_registered(&[0x01u8; 32]).await);
//! }
//! ```
//!
//! ## Re-exports
//!
//! The core crate is re-exported as `content_registry::core`, and its
//! commonly used types at the crate root.

pub mod clock;
pub mod error;
pub mod fees;
pub mod registry;

// Re-export the core crate
pub use content_registry_core as core;

// Re-export main types for convenience
pub use clock::{BlockClock, Clock};
pub use error::{ContentRegistryError, Result};
pub use fees::{FeeLedger, FeeRecord, FeeTransfer, FeeTransferError};
pub use registry::{ContentRegistry, RegistryConfig, DEFAULT_PLATFORM_FEE};

// Re-export commonly used core types
pub use content_registry_core::{
    ContentHash, ContentId, ContentPatch, ContentRecord, ContentSubmission, PrincipalId,
    RegistryError, RegistryState, UpdateRecord,
};
