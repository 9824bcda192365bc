//! Storage layer
//!
//! Process-memory stores only; nothing survives a restart.

pub mod memory;

pub use memory::{MemoryCommentStore, MemoryPostStore};
