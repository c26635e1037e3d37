//! In-process tag-versioned cache.
//!
//! Each tag carries a monotonically increasing version. A cached value
//! records the version of its tag at the moment it was computed; once the
//! tag is invalidated the recorded version no longer matches and the value
//! is recomputed on the next read.

use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;

use tokio::sync::RwLock;

/// Monotonic version counter per tag name. Tags start at version 0.
#[derive(Debug, Default)]
pub struct TagCache {
    versions: RwLock<HashMap<String, u64>>,
}

impl TagCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current version of a tag
    pub async fn version(&self, tag: &str) -> u64 {
        self.versions.read().await.get(tag).copied().unwrap_or(0)
    }

    /// Invalidate a tag, returning its new version
    pub async fn invalidate(&self, tag: &str) -> u64 {
        let mut versions = self.versions.write().await;
        let version = versions.entry(tag.to_string()).or_insert(0);
        *version += 1;
        *version
    }
}

/// A single value cached under one tag.
///
/// `get_or_refresh` serves the stored value while its recorded version
/// matches the tag's current version and recomputes otherwise. The version
/// is captured before the refresh future runs, so an invalidation that lands
/// mid-refresh leaves the stored value stale and the next reader recomputes.
pub struct TagCached<T> {
    tag: &'static str,
    slot: RwLock<Option<(u64, Arc<T>)>>,
}

impl<T> TagCached<T> {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            slot: RwLock::new(None),
        }
    }

    /// Return the cached value, recomputing it through `refresh` when the
    /// tag has been invalidated since it was stored (or nothing is stored)
    pub async fn get_or_refresh<F, Fut, E>(&self, tags: &TagCache, refresh: F) -> Result<Arc<T>, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        let version = tags.version(self.tag).await;
        if let Some((stored_version, value)) = &*self.slot.read().await {
            if *stored_version == version {
                return Ok(value.clone());
            }
        }

        let value = Arc::new(refresh().await?);
        let mut slot = self.slot.write().await;
        match &*slot {
            // A concurrent reader already refreshed at this version or newer
            Some((stored_version, stored)) if *stored_version >= version => Ok(stored.clone()),
            _ => {
                *slot = Some((version, value.clone()));
                Ok(value)
            }
        }
    }
}
