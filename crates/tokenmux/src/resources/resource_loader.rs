//! # Resource Loader

use std::path::PathBuf;

use crate::{TMResult, TokenmuxError, resources::ConstKeyedResource};

/// A trait for loading resources.
pub trait ResourceLoader {
    /// Load a resource, returning a local path to its contents.
    ///
    /// ## Returns
    /// * `Ok(path)` - on success.
    /// * `Err(TokenmuxError::ResourceLoad)` - if the resource is unavailable.
    fn load_resource_path(
        &mut self,
        resource: &ConstKeyedResource,
    ) -> TMResult<PathBuf>;
}

#[cfg(feature = "download")]
impl ResourceLoader for crate::disk_cache::TokenmuxDiskCache {
    fn load_resource_path(
        &mut self,
        resource: &ConstKeyedResource,
    ) -> TMResult<PathBuf> {
        let download = !self.offline();
        self.load_cached_path(resource.key, resource.resource.urls, download)
            .map_err(|e| TokenmuxError::ResourceLoad {
                key: resource.key_string(),
                reason: format!("{e:#}"),
            })
    }
}

/// The loader used when none is supplied.
///
/// With the "download" feature, this opens a default
/// [`TokenmuxDiskCache`](crate::disk_cache::TokenmuxDiskCache)
/// on first use; models that need no artifact never touch the disk.
/// Without it, every load fails.
#[derive(Default)]
pub struct DefaultResourceLoader {
    #[cfg(feature = "download")]
    cache: Option<crate::disk_cache::TokenmuxDiskCache>,
}

impl ResourceLoader for DefaultResourceLoader {
    #[cfg(feature = "download")]
    fn load_resource_path(
        &mut self,
        resource: &ConstKeyedResource,
    ) -> TMResult<PathBuf> {
        use crate::disk_cache::{TokenmuxDiskCache, TokenmuxDiskCacheOptions};

        let cache = match self.cache.take() {
            Some(cache) => cache,
            None => TokenmuxDiskCache::new(TokenmuxDiskCacheOptions::default()).map_err(|e| {
                TokenmuxError::ResourceLoad {
                    key: resource.key_string(),
                    reason: format!("{e:#}"),
                }
            })?,
        };
        let cache = self.cache.insert(cache);
        cache.load_resource_path(resource)
    }

    #[cfg(not(feature = "download"))]
    fn load_resource_path(
        &mut self,
        resource: &ConstKeyedResource,
    ) -> TMResult<PathBuf> {
        Err(TokenmuxError::ResourceLoad {
            key: resource.key_string(),
            reason: "built without the \"download\" feature".to_string(),
        })
    }
}
