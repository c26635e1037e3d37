// Job listing domain - opportunities posted by organizations
//
// Responsibilities:
// - Listing storage and queries (models/)
// - The cache tag guarding listing reads (cache.rs)

pub mod cache;
pub mod models;

pub use models::*;
