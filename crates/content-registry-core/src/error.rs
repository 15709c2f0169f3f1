//! Error types for the content registry core.

use thiserror::Error;

/// Rejections produced by registry operations.
///
/// Every variant carries a stable numeric code for wire compatibility with
/// existing consumers of the registry; see [`RegistryError::code`]. Code 111
/// is reserved and deliberately unassigned.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegistryError {
    #[error("content hash is already registered")]
    DuplicateContent,

    #[error("content not found")]
    ContentNotFound,

    #[error("caller is not the content creator")]
    NotAuthorized,

    #[error("content hash must be exactly 32 bytes")]
    InvalidHash,

    #[error("title must be 1-100 characters")]
    InvalidTitle,

    #[error("description must be at most 500 characters")]
    InvalidDescription,

    #[error("ipfs link must be 1-100 characters")]
    InvalidIpfsLink,

    #[error("price must be non-negative")]
    InvalidPrice,

    #[error("royalty rate must be at most 100")]
    InvalidRoyalty,

    #[error("category must be 1-50 characters")]
    InvalidCategory,

    #[error("tags are limited to 10 entries of 1-20 characters")]
    InvalidTag,

    #[error("authority contract is not set")]
    AuthorityNotSet,
}

impl RegistryError {
    /// The stable numeric code for this rejection.
    pub const fn code(self) -> u16 {
        match self {
            Self::DuplicateContent => 100,
            Self::ContentNotFound => 101,
            Self::NotAuthorized => 102,
            Self::InvalidHash => 103,
            Self::InvalidTitle => 104,
            Self::InvalidDescription => 105,
            Self::InvalidIpfsLink => 106,
            Self::InvalidPrice => 107,
            Self::InvalidRoyalty => 108,
            Self::InvalidCategory => 109,
            Self::InvalidTag => 110,
            // 111 is reserved and never produced.
            Self::AuthorityNotSet => 112,
        }
    }

    /// Look up a rejection by its numeric code.
    ///
    /// Returns `None` for the reserved code 111 and for anything outside
    /// the taxonomy.
    pub fn from_code(code: u16) -> Option<Self> {
        match code {
            100 => Some(Self::DuplicateContent),
            101 => Some(Self::ContentNotFound),
            102 => Some(Self::NotAuthorized),
            103 => Some(Self::InvalidHash),
            104 => Some(Self::InvalidTitle),
            105 => Some(Self::InvalidDescription),
            106 => Some(Self::InvalidIpfsLink),
            107 => Some(Self::InvalidPrice),
            108 => Some(Self::InvalidRoyalty),
            109 => Some(Self::InvalidCategory),
            110 => Some(Self::InvalidTag),
            112 => Some(Self::AuthorityNotSet),
            _ => None,
        }
    }
}

/// Rejection of `set_authority` once the authority is already configured.
///
/// Kept outside the numeric taxonomy on purpose: the original interface
/// reports this as a bare failure with no code attached.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("authority contract is already set")]
pub struct AuthorityAlreadySet;

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [RegistryError; 12] = [
        RegistryError::DuplicateContent,
        RegistryError::ContentNotFound,
        RegistryError::NotAuthorized,
        RegistryError::InvalidHash,
        RegistryError::InvalidTitle,
        RegistryError::InvalidDescription,
        RegistryError::InvalidIpfsLink,
        RegistryError::InvalidPrice,
        RegistryError::InvalidRoyalty,
        RegistryError::InvalidCategory,
        RegistryError::InvalidTag,
        RegistryError::AuthorityNotSet,
    ];

    #[test]
    fn test_codes_roundtrip() {
        for err in ALL {
            assert_eq!(RegistryError::from_code(err.code()), Some(err));
        }
    }

    #[test]
    fn test_codes_are_unique() {
        for (i, a) in ALL.iter().enumerate() {
            for b in &ALL[i + 1..] {
                assert_ne!(a.code(), b.code());
            }
        }
    }

    #[test]
    fn test_code_111_is_reserved() {
        assert_eq!(RegistryError::from_code(111), None);
        for err in ALL {
            assert_ne!(err.code(), 111);
        }
    }

    #[test]
    fn test_unknown_codes_rejected() {
        assert_eq!(RegistryError::from_code(0), None);
        assert_eq!(RegistryError::from_code(99), None);
        assert_eq!(RegistryError::from_code(113), None);
    }

    #[test]
    fn test_messages_are_lowercase() {
        for err in ALL {
            let msg = err.to_string();
            assert!(msg.chars().next().unwrap().is_lowercase(), "{msg}");
        }
    }
}
