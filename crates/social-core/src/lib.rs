//! Social Core Library
//!
//! Domain errors and storage ports for the posts/comments backend.

// Re-export pure types from social-types
pub use social_types::*;

pub mod error;
pub mod ports;

pub use error::{Result, SocialError};
