//! blog_core — Core entity types, identifier newtypes, and field helpers.
//!
//! This crate is **I/O-free**. It defines the stable types shared across the
//! engine (`blog_io`, `blog_validate`, `blog_pipeline`, `blog_report`,
//! `blog_cli`):
//!
//! - Entity IDs: `UserId`, `ArticleId` (u64 newtypes, strict parsing)
//! - Entities: `User`, `Article`, `BlogBatch` (all fields optional by design)
//! - Field helpers: email shape check, placeholder-reference detection
//!
//! Serialization derives are gated behind the `serde` feature.

#![forbid(unsafe_code)]

pub mod entities;
pub mod ids;

pub mod errors {
    use core::fmt;

    /// Minimal error set for core-domain parsing.
    #[derive(Clone, Copy, Debug, Eq, PartialEq)]
    pub enum CoreError {
        InvalidId,
        InvalidEmail,
    }

    impl fmt::Display for CoreError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match self {
                CoreError::InvalidId => write!(f, "invalid id"),
                CoreError::InvalidEmail => write!(f, "invalid email"),
            }
        }
    }

    impl std::error::Error for CoreError {}
}

pub use entities::{Article, BlogBatch, User};
pub use ids::{is_valid_email, ArticleId, UserId, PLACEHOLDER_ID};
