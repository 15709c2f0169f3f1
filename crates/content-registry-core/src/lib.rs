//! # Content Registry Core
//!
//! Pure primitives for the content registry: records, validation, and the
//! registry state machine.
//!
//! This crate contains no I/O, no clock, no fee plumbing. It is pure
//! computation over registry state; the `content-registry` service crate
//! adds the concurrency discipline and the environment seams on top.
//!
//! ## Key Types
//!
//! - [`RegistryState`] - The single owned state container
//! - [`ContentRecord`] / [`UpdateRecord`] - The stored values
//! - [`ContentSubmission`] / [`ContentPatch`] - Operation inputs
//! - [`RegistryError`] - The coded rejection taxonomy
//!
//! ## Rejection Codes
//!
//! Every [`RegistryError`] maps to a stable numeric code (100-112, with 111
//! reserved) kept compatible with pre-existing consumers of the registry.

pub mod error;
pub mod record;
pub mod state;
pub mod types;
pub mod validation;

pub use error::{AuthorityAlreadySet, RegistryError};
pub use record::{
    ContentPatch, ContentRecord, ContentSubmission, UpdateRecord, MAX_CATEGORY_LEN,
    MAX_DESCRIPTION_LEN, MAX_IPFS_LINK_LEN, MAX_ROYALTY_RATE, MAX_TAGS, MAX_TAG_LEN,
    MAX_TITLE_LEN,
};
pub use state::{PreparedRegistration, RegistryState};
pub use types::{ContentHash, ContentId, PrincipalId, CONTENT_HASH_LEN};
pub use validation::{validate_editable_fields, validate_submission};
