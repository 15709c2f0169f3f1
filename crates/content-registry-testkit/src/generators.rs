//! Proptest generators for property-based testing.

use proptest::prelude::*;

use content_registry_core::{ContentHash, ContentSubmission, PrincipalId, CONTENT_HASH_LEN};

/// Generate a random ContentHash.
pub fn content_hash() -> impl Strategy<Value = ContentHash> {
    any::<[u8; 32]>().prop_map(ContentHash::from_bytes)
}

/// Generate a random PrincipalId.
pub fn principal_id() -> impl Strategy<Value = PrincipalId> {
    any::<[u8; 32]>().prop_map(PrincipalId::from_bytes)
}

/// Generate hash bytes that fail the exact-length rule.
pub fn wrong_length_hash() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..64)
        .prop_filter("must not be exactly 32 bytes", |v| {
            v.len() != CONTENT_HASH_LEN
        })
}

/// Generate a valid title (1-100 characters).
pub fn title() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ]{1,100}".prop_map(String::from)
}

/// Generate a valid description (0-500 characters).
pub fn description() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ]{0,500}".prop_map(String::from)
}

/// Generate a valid IPFS link (1-100 characters).
pub fn ipfs_link() -> impl Strategy<Value = String> {
    "ipfs://[a-z0-9]{1,80}".prop_map(String::from)
}

/// Generate a valid category (1-50 characters).
pub fn category() -> impl Strategy<Value = String> {
    "[a-z]{1,50}".prop_map(String::from)
}

/// Generate a valid tag (1-20 characters).
pub fn tag() -> impl Strategy<Value = String> {
    "[a-z0-9]{1,20}".prop_map(String::from)
}

/// Generate a valid tag list (0-10 tags).
pub fn tags() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(tag(), 0..=10)
}

/// Generate any price.
pub fn price() -> impl Strategy<Value = u64> {
    any::<u64>()
}

/// Generate a valid royalty rate (0-100).
pub fn royalty_rate() -> impl Strategy<Value = u64> {
    0u64..=100u64
}

/// Generate a reasonable logical height.
pub fn height() -> impl Strategy<Value = u64> {
    0u64..=10_000_000u64
}

/// Generate a submission that passes every field rule.
pub fn valid_submission() -> impl Strategy<Value = ContentSubmission> {
    (
        content_hash(),
        title(),
        description(),
        ipfs_link(),
        price(),
        royalty_rate(),
        category(),
        tags(),
    )
        .prop_map(
            |(hash, title, description, ipfs_link, price, royalty_rate, category, tags)| {
                ContentSubmission {
                    hash: hash.as_bytes().to_vec(),
                    title,
                    description,
                    ipfs_link,
                    price,
                    royalty_rate,
                    category,
                    tags,
                }
            },
        )
}
