//! Shared building blocks for the TikTiny web client.
//!
//! Everything here is plain Rust with no browser dependencies: the wire
//! models exchanged with the video API, the client session model, and the
//! hashtag derivation used by the feed.

pub mod hashtags;
pub mod models;
pub mod session;

pub use hashtags::{BRAND_TAG, MAX_TAGS, extract_hashtags, search_term_for_tag};
pub use session::{MemoryStorage, Session, SessionStorage, StorageError};
