//! Business logic services

pub mod feed;

pub use feed::FeedService;
