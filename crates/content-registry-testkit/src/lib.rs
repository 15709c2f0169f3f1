//! # Content Registry Testkit
//!
//! Testing utilities for the content registry.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Fixtures**: Ready-made registries, principals and submissions
//! - **Generators**: Proptest strategies for property-based testing
//!
//! ## Test Fixtures
//!
//! Quickly set up a registry with its authority configured:
//!
//! ```rust,no_run
//! use content_registry_testkit::fixtures::RegistryFixture;
//!
//! async fn example() {
//!     let fixture = RegistryFixture::new().await;
//!     let id = fixture.register_patterned(0x01).await.unwrap();
//!     assert_eq!(id.value(), 0);
//! }
//! ```
//!
//! ## Property Testing
//!
//! Use the generators with proptest:
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use content_registry_core::validate_submission;
//! use content_registry_testkit::generators::valid_submission;
//!
//! proptest! {
//!     #[test]
//!     fn generated_submissions_validate(s in valid_submission()) {
//!         prop_assert!(validate_submission(&s).is_ok());
//!     }
//! }
//! ```

pub mod fixtures;
pub mod generators;

pub use fixtures::{
    hash_of, multi_party_principals, patterned_hash, principal, random_principal,
    submission, RegistryFixture, RejectingFees,
};
pub use generators::valid_submission;
