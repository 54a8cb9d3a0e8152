//! # tokenmux-disk-cache
//!
//! Local storage for model artifacts (`tokenizer.json` files and the like);
//! fetched once from mirror URLs, then served from disk.
#![warn(missing_docs)]

use crate::path_resolver::PathResolver;

pub mod disk_cache;
pub mod path_resolver;

pub use disk_cache::{TokenmuxDiskCache, TokenmuxDiskCacheOptions};

/// Environment variable key to override the default cache directory.
pub const TOKENMUX_CACHE_DIR: &str = "TOKENMUX_CACHE_DIR";
/// Environment variable key to override the default data directory.
pub const TOKENMUX_DATA_DIR: &str = "TOKENMUX_DATA_DIR";
/// Environment variable key to forbid network access ("1", "true", "yes", "on").
pub const TOKENMUX_OFFLINE: &str = "TOKENMUX_OFFLINE";

/// Default [`PathResolver`] for tokenmux.
pub const TOKENMUX_CACHE_CONFIG: PathResolver = PathResolver {
    qualifier: "io.crates.tokenmux",
    organization: "",
    application: "tokenmux",
    cache_env_vars: &[TOKENMUX_CACHE_DIR],
    data_env_vars: &[TOKENMUX_DATA_DIR],
    offline_env_vars: &[TOKENMUX_OFFLINE],
};
