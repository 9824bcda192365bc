//! Social Types - Pure type definitions
//!
//! This crate contains only the wire/data types shared by the store ports and
//! the HTTP layer. It has no async runtime dependencies.

pub mod comment;
pub mod post;

pub use comment::*;
pub use post::*;

use serde::{Deserialize, Serialize};

/// Identifier assigned to posts and comments by their store
pub type RecordId = i64;

/// Payload returned by the root endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Greeting {
    pub message: String,
}

impl Default for Greeting {
    fn default() -> Self {
        Self {
            message: "Hello World".to_string(),
        }
    }
}
