//! Kernel module - server infrastructure shared across domains.

pub mod cache;

pub use cache::{TagCache, TagCached};
