//! Error types for the registry service.

use content_registry_core::{AuthorityAlreadySet, RegistryError};
use thiserror::Error;

use crate::fees::FeeTransferError;

/// Errors that can occur during registry service operations.
#[derive(Debug, Error)]
pub enum ContentRegistryError {
    /// Coded rejection from the registry state machine.
    #[error("registry error: {0}")]
    Registry(#[from] RegistryError),

    /// The authority was already configured.
    #[error("authority error: {0}")]
    AuthorityAlreadySet(#[from] AuthorityAlreadySet),

    /// The fee transfer was rejected; the registration was not committed.
    #[error("fee transfer error: {0}")]
    FeeTransfer(#[from] FeeTransferError),
}

impl ContentRegistryError {
    /// The stable numeric code, for rejections that carry one.
    ///
    /// Authority-already-set and fee-transfer failures are deliberately
    /// uncoded; the numeric taxonomy only covers state machine rejections.
    pub fn code(&self) -> Option<u16> {
        match self {
            Self::Registry(e) => Some(e.code()),
            Self::AuthorityAlreadySet(_) | Self::FeeTransfer(_) => None,
        }
    }
}

/// Result type for registry service operations.
pub type Result<T> = std::result::Result<T, ContentRegistryError>;
