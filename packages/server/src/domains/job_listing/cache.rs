//! Cache tag for job-listing data.
//!
//! Cached views of listing data record this tag's version when they are
//! computed; bumping the tag (see `kernel::cache::TagCache::invalidate`)
//! forces those views to recompute on their next read.

/// Global tag covering every cached job-listing read.
pub const JOB_LISTINGS_TAG: &str = "job-listings";
