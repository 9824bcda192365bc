//! HTTP handlers

pub mod comments;
pub mod health;
pub mod posts;

pub use health::{health, root};
