//! # Tokenmux Disk Cache

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;
use downloader::{Download, Downloader};

use crate::TOKENMUX_CACHE_CONFIG;

/// Options for [`TokenmuxDiskCache`].
#[derive(Clone, Default, Debug)]
pub struct TokenmuxDiskCacheOptions {
    /// Optional path to the cache directory.
    pub cache_dir: Option<PathBuf>,

    /// Optional path to the data directory.
    pub data_dir: Option<PathBuf>,

    /// Optional [`Downloader`] builder.
    pub downloader: Option<fn() -> Downloader>,

    /// Forbid downloads; `None` defers to `$TOKENMUX_OFFLINE`.
    pub offline: Option<bool>,
}

impl TokenmuxDiskCacheOptions {
    /// Set the cache directory.
    pub fn with_cache_dir<P: AsRef<Path>>(
        mut self,
        cache_dir: Option<P>,
    ) -> Self {
        self.cache_dir = cache_dir.map(|p| p.as_ref().to_path_buf());
        self
    }

    /// Set the data directory.
    pub fn with_data_dir<P: AsRef<Path>>(
        mut self,
        data_dir: Option<P>,
    ) -> Self {
        self.data_dir = data_dir.map(|p| p.as_ref().to_path_buf());
        self
    }

    /// Set the downloader builder.
    pub fn with_downloader(
        mut self,
        downloader: Option<fn() -> Downloader>,
    ) -> Self {
        self.downloader = downloader;
        self
    }

    /// Set offline mode.
    pub fn with_offline(
        mut self,
        offline: Option<bool>,
    ) -> Self {
        self.offline = offline;
        self
    }
}

/// Disk cache for downloaded model artifacts.
///
/// Leverages [`Downloader`] for downloading files,
/// and [`PathResolver`](`crate::path_resolver::PathResolver`) for resolving cache and data paths
/// appropriate for a user/system combo, and any environment overrides.
pub struct TokenmuxDiskCache {
    /// Cache directory.
    cache_dir: PathBuf,

    /// Data directory.
    data_dir: PathBuf,

    /// Whether downloads are forbidden.
    offline: bool,

    /// Connection pool for downloading files.
    downloader: Downloader,
}

impl TokenmuxDiskCache {
    /// Construct a new [`TokenmuxDiskCache`].
    ///
    /// No network or disk access happens here.
    pub fn new(options: TokenmuxDiskCacheOptions) -> anyhow::Result<Self> {
        let cache_dir = TOKENMUX_CACHE_CONFIG
            .resolve_cache_dir(options.cache_dir)
            .context("failed to resolve cache directory")?;

        let data_dir = TOKENMUX_CACHE_CONFIG
            .resolve_data_dir(options.data_dir)
            .context("failed to resolve data directory")?;

        let offline = TOKENMUX_CACHE_CONFIG.resolve_offline(options.offline);

        let downloader = match options.downloader {
            Some(builder) => builder(),
            None => Downloader::builder().build()?,
        };

        Ok(Self {
            cache_dir,
            data_dir,
            offline,
            downloader,
        })
    }

    /// Get the cache directory.
    pub fn cache_dir(&self) -> &Path {
        &self.cache_dir
    }

    /// Get the data directory.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Is the cache forbidden from downloading?
    pub fn offline(&self) -> bool {
        self.offline
    }

    /// Get the cache path for the given key.
    ///
    /// * Does not check that the path exists.
    /// * Does not initialize the containing directories.
    ///
    /// # Arguments
    /// * `context` - prefix dirs, inserted between `self.cache_dir` and `file`.
    /// * `file` - the final file name.
    pub fn cache_path<C, F>(
        &self,
        context: &[C],
        file: F,
    ) -> PathBuf
    where
        C: AsRef<Path>,
        F: AsRef<Path>,
    {
        extend_path(&self.cache_dir, context, file)
    }

    /// Get the data path for the given key; see [`Self::cache_path`].
    pub fn data_path<C, F>(
        &self,
        context: &[C],
        file: F,
    ) -> PathBuf
    where
        C: AsRef<Path>,
        F: AsRef<Path>,
    {
        extend_path(&self.data_dir, context, file)
    }

    /// Loads a cached file or downloads it if it does not exist.
    ///
    /// Lookup order:
    /// 1. the data path (user-provided artifacts, never downloaded);
    /// 2. the cache path;
    /// 3. a download into the cache path, if `download` is set;
    ///    mirrors are tried in order until one succeeds.
    ///
    /// Downloads land in a `.part` sibling, and are only renamed into
    /// the cache path on success; a failed download leaves no file behind.
    ///
    /// # Arguments
    /// * `context` - path components keying the artifact; must be unique per artifact.
    /// * `urls` - mirror URLs; the file name is taken from the first.
    /// * `download` - whether a missing file may be fetched.
    ///
    /// # Errors
    /// * the file is missing and `download` is `false`.
    /// * every mirror fails.
    pub fn load_cached_path<C, S>(
        &mut self,
        context: &[C],
        urls: &[S],
        download: bool,
    ) -> anyhow::Result<PathBuf>
    where
        C: AsRef<Path>,
        S: AsRef<str>,
    {
        let urls: Vec<_> = urls.iter().map(|s| s.as_ref()).collect();
        anyhow::ensure!(!urls.is_empty(), "no urls for resource");

        let file_name = Download::new(urls[0]).file_name;
        anyhow::ensure!(
            !file_name.as_os_str().is_empty(),
            "no file name in url: {}",
            urls[0]
        );

        let data_path = self.data_path(context, &file_name);
        if data_path.exists() {
            log::debug!("using data artifact: {}", data_path.display());
            return Ok(data_path);
        }

        let path = self.cache_path(context, &file_name);
        if path.exists() {
            log::debug!("using cached artifact: {}", path.display());
            return Ok(path);
        }

        if !download {
            anyhow::bail!("cached file not found: {}", path.display());
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }

        let part_path = partial_path(&path);
        let mut failures = Vec::with_capacity(urls.len());
        for url in &urls {
            log::info!("downloading {url} -> {}", path.display());
            match self.download_to(url, &part_path) {
                Ok(()) => {
                    fs::rename(&part_path, &path).with_context(|| {
                        format!("failed to move download into {}", path.display())
                    })?;
                    return Ok(path);
                }
                Err(err) => {
                    log::warn!("download failed: {url}: {err:#}");
                    failures.push(format!("{url}: {err:#}"));
                }
            }
        }

        anyhow::bail!(
            "download failed for {}:\n  {}",
            path.display(),
            failures.join("\n  ")
        )
    }

    /// Download one url to `target`; on failure, `target` is removed.
    fn download_to(
        &mut self,
        url: &str,
        target: &Path,
    ) -> anyhow::Result<()> {
        // Stale partials would block the exclusive create.
        remove_if_exists(target)?;

        let result = self
            .downloader
            .download(&[Download::new(url).file_name(target)])
            .map_err(anyhow::Error::from)
            .and_then(|summaries| match summaries.into_iter().next() {
                Some(summary) => summary.map(|_| ()).map_err(anyhow::Error::from),
                None => Err(anyhow::anyhow!("download was not attempted")),
            });

        if result.is_err() {
            remove_if_exists(target)?;
        }
        result
    }
}

/// The in-progress sibling of a download target.
fn partial_path(path: &Path) -> PathBuf {
    let mut part = path.as_os_str().to_owned();
    part.push(".part");
    PathBuf::from(part)
}

fn remove_if_exists(path: &Path) -> anyhow::Result<()> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(err) => Err(err).with_context(|| format!("failed to remove {}", path.display())),
    }
}

/// Extend a path with a context and filename.
fn extend_path<P, S, F>(
    path: P,
    context: &[S],
    filename: F,
) -> PathBuf
where
    P: AsRef<Path>,
    S: AsRef<Path>,
    F: AsRef<Path>,
{
    let mut path = path.as_ref().to_path_buf();
    path.extend(context.iter().map(|s| s.as_ref()));
    path.push(filename.as_ref());
    path
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempdir::TempDir;

    use super::*;

    fn test_cache(root: &TempDir) -> TokenmuxDiskCache {
        TokenmuxDiskCache::new(
            TokenmuxDiskCacheOptions::default()
                .with_cache_dir(Some(root.path().join("cache")))
                .with_data_dir(Some(root.path().join("data")))
                .with_offline(Some(true)),
        )
        .unwrap()
    }

    #[test]
    fn test_extend_path() {
        let path = extend_path("/tmp/tokenmux", &["cache", "data"], "file.txt");
        assert_eq!(path, PathBuf::from("/tmp/tokenmux/cache/data/file.txt"));
    }

    #[test]
    fn test_paths() {
        let root = TempDir::new("tokenmux_paths").unwrap();
        let cache = test_cache(&root);

        assert!(cache.offline());
        assert_eq!(
            cache.cache_path(&["prefix"], "file.txt"),
            root.path().join("cache").join("prefix").join("file.txt")
        );
        assert_eq!(
            cache.data_path(&["prefix"], "file.txt"),
            root.path().join("data").join("prefix").join("file.txt")
        );
    }

    #[test]
    fn test_offline_miss() {
        let root = TempDir::new("tokenmux_miss").unwrap();
        let mut cache = test_cache(&root);

        let err = cache
            .load_cached_path(
                &["hf", "model"],
                &["https://example.invalid/tokenizer.json"],
                false,
            )
            .unwrap_err();
        assert!(err.to_string().contains("cached file not found"));
    }

    #[test]
    fn test_cached_and_data_hits() {
        let root = TempDir::new("tokenmux_hits").unwrap();
        let mut cache = test_cache(&root);
        let urls = ["https://example.invalid/tokenizer.json"];

        let cached = cache.cache_path(&["hf", "model"], "tokenizer.json");
        fs::create_dir_all(cached.parent().unwrap()).unwrap();
        fs::write(&cached, b"{}").unwrap();
        assert_eq!(
            cache.load_cached_path(&["hf", "model"], &urls, false).unwrap(),
            cached
        );

        // A user-provided data artifact shadows the cache.
        let data = cache.data_path(&["hf", "model"], "tokenizer.json");
        fs::create_dir_all(data.parent().unwrap()).unwrap();
        fs::write(&data, b"{}").unwrap();
        assert_eq!(
            cache.load_cached_path(&["hf", "model"], &urls, false).unwrap(),
            data
        );
    }

    fn quick_downloader() -> Downloader {
        Downloader::builder().retries(1).build().unwrap()
    }

    #[test]
    fn test_partial_path() {
        assert_eq!(
            partial_path(Path::new("/tmp/hf/tokenizer.json")),
            PathBuf::from("/tmp/hf/tokenizer.json.part")
        );
    }

    #[test]
    fn test_failed_download_leaves_no_file() {
        let root = TempDir::new("tokenmux_failed_download").unwrap();
        let mut cache = TokenmuxDiskCache::new(
            TokenmuxDiskCacheOptions::default()
                .with_cache_dir(Some(root.path().join("cache")))
                .with_data_dir(Some(root.path().join("data")))
                .with_downloader(Some(quick_downloader))
                .with_offline(Some(false)),
        )
        .unwrap();

        let context = ["hf", "model"];
        let urls = [
            "https://example.invalid/mirror/tokenizer.json",
            "https://example.invalid/origin/tokenizer.json",
        ];
        let path = cache.cache_path(&context, "tokenizer.json");

        // A stale partial from an interrupted run is cleared too.
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(partial_path(&path), b"{\"trunc").unwrap();

        let err = cache.load_cached_path(&context, &urls, true).unwrap_err();
        let msg = format!("{err:#}");
        assert!(msg.contains("download failed"), "{msg}");
        assert!(msg.contains("/mirror/") && msg.contains("/origin/"), "{msg}");

        assert!(!path.exists());
        assert!(!partial_path(&path).exists());

        // Nothing was cached, so an offline retry still misses.
        let err = cache.load_cached_path(&context, &urls, false).unwrap_err();
        assert!(err.to_string().contains("cached file not found"));
    }

    #[test]
    fn test_no_urls() {
        let root = TempDir::new("tokenmux_no_urls").unwrap();
        let mut cache = test_cache(&root);
        let urls: [&str; 0] = [];
        assert!(cache.load_cached_path(&["x"], &urls, true).is_err());
    }
}
