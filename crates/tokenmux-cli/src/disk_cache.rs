use tokenmux::disk_cache::{TokenmuxDiskCache, TokenmuxDiskCacheOptions};

/// Disk cache argument group.
#[derive(clap::Args, Debug)]
pub struct DiskCacheArgs {
    /// Cache directory; defaults to `$TOKENMUX_CACHE_DIR`, then the platform cache dir.
    #[arg(long, default_value = None)]
    cache_dir: Option<String>,

    /// Data directory for pre-placed artifacts; defaults to `$TOKENMUX_DATA_DIR`,
    /// then the platform data dir.
    #[arg(long, default_value = None)]
    data_dir: Option<String>,

    /// Never download; only use artifacts already on disk.
    #[arg(long)]
    offline: bool,
}

impl DiskCacheArgs {
    /// Build the disk cache options.
    pub fn options(&self) -> TokenmuxDiskCacheOptions {
        TokenmuxDiskCacheOptions::default()
            .with_cache_dir(self.cache_dir.as_ref())
            .with_data_dir(self.data_dir.as_ref())
            .with_offline(self.offline.then_some(true))
    }

    /// Initialize the disk cache.
    pub fn init_disk_cache(&self) -> Result<TokenmuxDiskCache, Box<dyn std::error::Error>> {
        Ok(TokenmuxDiskCache::new(self.options())?)
    }
}
