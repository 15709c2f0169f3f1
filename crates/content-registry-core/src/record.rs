//! Content records: the values the registry stores and the inputs that
//! produce them.
//!
//! A record is immutable except for its four caller-editable fields (title,
//! description, link, price), which only the creator may change.

use serde::{Deserialize, Serialize};

use crate::types::{ContentHash, PrincipalId};

/// Maximum title length, in characters.
pub const MAX_TITLE_LEN: usize = 100;

/// Maximum description length, in characters.
pub const MAX_DESCRIPTION_LEN: usize = 500;

/// Maximum IPFS link length, in characters.
pub const MAX_IPFS_LINK_LEN: usize = 100;

/// Maximum category length, in characters.
pub const MAX_CATEGORY_LEN: usize = 50;

/// Maximum number of tags on a record.
pub const MAX_TAGS: usize = 10;

/// Maximum length of a single tag, in characters.
pub const MAX_TAG_LEN: usize = 20;

/// Highest allowed royalty rate, as a percentage.
pub const MAX_ROYALTY_RATE: u64 = 100;

/// A registered piece of content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentRecord {
    /// The unique 32-byte fingerprint of the content.
    pub content_hash: ContentHash,

    /// The principal that registered the content. Fixed for life.
    pub creator: PrincipalId,

    /// Display title (1-100 characters).
    pub title: String,

    /// Free-form description (up to 500 characters, may be empty).
    pub description: String,

    /// Where the content lives (1-100 characters).
    pub ipfs_link: String,

    /// Asking price, in the environment's smallest currency unit.
    pub price: u64,

    /// Creator royalty percentage (0-100). Fixed at registration.
    pub royalty_rate: u64,

    /// Category label (1-50 characters). Fixed at registration.
    pub category: String,

    /// Up to 10 tags of 1-20 characters each. Fixed at registration.
    pub tags: Vec<String>,

    /// Logical height at registration.
    pub created_at: u64,

    /// Logical height of the most recent change (registration counts).
    pub updated_at: u64,

    /// Reserved for future takedown support; always true today.
    pub is_active: bool,
}

/// The most recent update applied to a record.
///
/// One entry per content id, overwritten by each update. This is a
/// last-write marker, not an append-only log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateRecord {
    /// Title as of this update.
    pub title: String,

    /// Description as of this update.
    pub description: String,

    /// Link as of this update.
    pub ipfs_link: String,

    /// Price as of this update.
    pub price: u64,

    /// Logical height the update was applied at.
    pub updated_at: u64,

    /// The principal that applied it (always the creator).
    pub updater: PrincipalId,
}

/// Input to content registration.
///
/// The hash is carried as raw bytes rather than a parsed [`ContentHash`] so
/// that length checking happens inside the registry, in contract order,
/// instead of at the type boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentSubmission {
    /// Claimed content hash; must be exactly 32 bytes.
    pub hash: Vec<u8>,

    /// Display title.
    pub title: String,

    /// Free-form description.
    pub description: String,

    /// Where the content lives.
    pub ipfs_link: String,

    /// Asking price.
    pub price: u64,

    /// Creator royalty percentage.
    pub royalty_rate: u64,

    /// Category label.
    pub category: String,

    /// Tags.
    pub tags: Vec<String>,
}

impl ContentSubmission {
    /// Start a submission from the required fields.
    ///
    /// Description defaults to empty, price and royalty to zero, tags to
    /// none; use the builder methods to fill them in.
    pub fn new(
        hash: impl Into<Vec<u8>>,
        title: impl Into<String>,
        ipfs_link: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            hash: hash.into(),
            title: title.into(),
            description: String::new(),
            ipfs_link: ipfs_link.into(),
            price: 0,
            royalty_rate: 0,
            category: category.into(),
            tags: Vec::new(),
        }
    }

    /// Set the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the price.
    pub fn price(mut self, price: u64) -> Self {
        self.price = price;
        self
    }

    /// Set the royalty rate.
    pub fn royalty_rate(mut self, rate: u64) -> Self {
        self.royalty_rate = rate;
        self
    }

    /// Replace the tag list.
    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Add a single tag.
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }
}

/// Input to a content update: the four caller-editable fields, replaced
/// wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentPatch {
    /// New title.
    pub title: String,

    /// New description.
    pub description: String,

    /// New link.
    pub ipfs_link: String,

    /// New price.
    pub price: u64,
}

impl ContentPatch {
    /// Start a patch from the required fields.
    pub fn new(title: impl Into<String>, ipfs_link: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            ipfs_link: ipfs_link.into(),
            price: 0,
        }
    }

    /// Set the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the price.
    pub fn price(mut self, price: u64) -> Self {
        self.price = price;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submission_builder_defaults() {
        let s = ContentSubmission::new([1u8; 32], "Video", "ipfs://x", "video");
        assert_eq!(s.hash, vec![1u8; 32]);
        assert_eq!(s.title, "Video");
        assert_eq!(s.description, "");
        assert_eq!(s.price, 0);
        assert_eq!(s.royalty_rate, 0);
        assert!(s.tags.is_empty());
    }

    #[test]
    fn test_submission_builder_chaining() {
        let s = ContentSubmission::new([1u8; 32], "Video", "ipfs://x", "video")
            .description("a clip")
            .price(250)
            .royalty_rate(10)
            .tags(["music", "live"])
            .tag("remix");
        assert_eq!(s.description, "a clip");
        assert_eq!(s.price, 250);
        assert_eq!(s.royalty_rate, 10);
        assert_eq!(s.tags, vec!["music", "live", "remix"]);
    }

    #[test]
    fn test_patch_builder() {
        let p = ContentPatch::new("New title", "ipfs://y")
            .description("updated")
            .price(5);
        assert_eq!(p.title, "New title");
        assert_eq!(p.description, "updated");
        assert_eq!(p.ipfs_link, "ipfs://y");
        assert_eq!(p.price, 5);
    }

    #[test]
    fn test_record_json_roundtrip() {
        let record = ContentRecord {
            content_hash: ContentHash::from_bytes([9u8; 32]),
            creator: PrincipalId::derive("creator"),
            title: "Video".into(),
            description: "A test video".into(),
            ipfs_link: "ipfs://test".into(),
            price: 100,
            royalty_rate: 10,
            category: "video".into(),
            tags: vec!["tag1".into(), "tag2".into()],
            created_at: 3,
            updated_at: 7,
            is_active: true,
        };
        let json = serde_json::to_string(&record).unwrap();
        let back: ContentRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, back);
    }
}
