//! Field validation for registrations and updates.
//!
//! Checks run in a fixed order and the first violated rule wins. The order
//! is part of the registry's contract: a submission that breaks several
//! rules always reports the same rejection.

use crate::error::RegistryError;
use crate::record::{
    ContentSubmission, MAX_CATEGORY_LEN, MAX_DESCRIPTION_LEN, MAX_IPFS_LINK_LEN,
    MAX_ROYALTY_RATE, MAX_TAGS, MAX_TAG_LEN, MAX_TITLE_LEN,
};
use crate::types::ContentHash;

/// Validate the caller-editable fields shared by registration and update.
///
/// This performs, in order:
/// - Title: non-empty, at most 100 characters
/// - Description: at most 500 characters
/// - IPFS link: non-empty, at most 100 characters
/// - Price: non-negative
///
/// Lengths count characters, not bytes. The price check holds by
/// construction for `u64`; [`RegistryError::InvalidPrice`] stays in the
/// taxonomy for consumers of the numeric codes.
pub fn validate_editable_fields(
    title: &str,
    description: &str,
    ipfs_link: &str,
    _price: u64,
) -> Result<(), RegistryError> {
    // 1. Title bounds
    let title_len = title.chars().count();
    if title_len == 0 || title_len > MAX_TITLE_LEN {
        return Err(RegistryError::InvalidTitle);
    }

    // 2. Description bound (empty is fine)
    if description.chars().count() > MAX_DESCRIPTION_LEN {
        return Err(RegistryError::InvalidDescription);
    }

    // 3. Link bounds
    let link_len = ipfs_link.chars().count();
    if link_len == 0 || link_len > MAX_IPFS_LINK_LEN {
        return Err(RegistryError::InvalidIpfsLink);
    }

    // 4. Price is non-negative by construction

    Ok(())
}

/// Validate a registration submission's fields and parse its hash.
///
/// This performs, in order:
/// - Hash: exactly 32 bytes
/// - The editable-field checks (title, description, link, price)
/// - Royalty rate: at most 100
/// - Category: non-empty, at most 50 characters
/// - Tags: at most 10, each non-empty and at most 20 characters
///
/// The two state-dependent registration rules, authority presence and hash
/// uniqueness, live in `RegistryState` and bracket these checks.
pub fn validate_submission(
    submission: &ContentSubmission,
) -> Result<ContentHash, RegistryError> {
    // 1. Hash length; everything downstream may assume 32 bytes
    let hash =
        ContentHash::from_slice(&submission.hash).ok_or(RegistryError::InvalidHash)?;

    // 2-5. Editable fields
    validate_editable_fields(
        &submission.title,
        &submission.description,
        &submission.ipfs_link,
        submission.price,
    )?;

    // 6. Royalty bound
    if submission.royalty_rate > MAX_ROYALTY_RATE {
        return Err(RegistryError::InvalidRoyalty);
    }

    // 7. Category bounds
    let category_len = submission.category.chars().count();
    if category_len == 0 || category_len > MAX_CATEGORY_LEN {
        return Err(RegistryError::InvalidCategory);
    }

    // 8. Tag count, then each tag's bounds
    if submission.tags.len() > MAX_TAGS {
        return Err(RegistryError::InvalidTag);
    }
    for tag in &submission.tags {
        let tag_len = tag.chars().count();
        if tag_len == 0 || tag_len > MAX_TAG_LEN {
            return Err(RegistryError::InvalidTag);
        }
    }

    Ok(hash)
}
