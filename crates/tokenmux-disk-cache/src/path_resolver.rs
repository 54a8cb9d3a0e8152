//! # App Path Resolver
//!
//! Static library defaults for cache/data directory resolution.

use std::{
    env,
    path::{Path, PathBuf},
};

use directories_next::ProjectDirs;

/// Which of the [`ProjectDirs`] a path resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirKind {
    /// Re-creatable downloads.
    Cache,

    /// User-provided artifacts.
    Data,
}

/// Static configuration for application path resolution.
pub struct PathResolver {
    /// The qualifier for [`ProjectDirs`].
    pub qualifier: &'static str,

    /// The organization for [`ProjectDirs`].
    pub organization: &'static str,

    /// The application for [`ProjectDirs`].
    pub application: &'static str,

    /// The resolution order for cache directories environment variables.
    pub cache_env_vars: &'static [&'static str],

    /// The resolution order for data directories environment variables.
    pub data_env_vars: &'static [&'static str],

    /// Environment variables which, when truthy, disable downloads.
    pub offline_env_vars: &'static [&'static str],
}

impl PathResolver {
    /// Get the [`ProjectDirs`] for this config.
    pub fn project_dirs(&self) -> Option<ProjectDirs> {
        ProjectDirs::from(self.qualifier, self.organization, self.application)
    }

    /// Resolve a directory for this config.
    ///
    /// Resolution Order:
    /// 1. `path`, if present.
    /// 2. ``env[$VAR]`` for each env var of the `kind`; in order.
    /// 3. the matching [`ProjectDirs`] entry, if present.
    /// 4. `None`
    ///
    /// On Linux, the project dirs are `$XDG_CACHE_HOME/tokenmux`
    /// and `$XDG_DATA_HOME/tokenmux`.
    pub fn resolve_dir<P: AsRef<Path>>(
        &self,
        kind: DirKind,
        path: Option<P>,
    ) -> Option<PathBuf> {
        if let Some(path) = path.as_ref() {
            return Some(path.as_ref().to_path_buf());
        }

        let env_vars = match kind {
            DirKind::Cache => self.cache_env_vars,
            DirKind::Data => self.data_env_vars,
        };
        for env_var in env_vars {
            if let Ok(path) = env::var(env_var) {
                return Some(PathBuf::from(path));
            }
        }

        self.project_dirs().map(|pds| match kind {
            DirKind::Cache => pds.cache_dir().to_path_buf(),
            DirKind::Data => pds.data_dir().to_path_buf(),
        })
    }

    /// Resolve the cache directory; see [`Self::resolve_dir`].
    pub fn resolve_cache_dir<P: AsRef<Path>>(
        &self,
        path: Option<P>,
    ) -> Option<PathBuf> {
        self.resolve_dir(DirKind::Cache, path)
    }

    /// Resolve the data directory; see [`Self::resolve_dir`].
    pub fn resolve_data_dir<P: AsRef<Path>>(
        &self,
        path: Option<P>,
    ) -> Option<PathBuf> {
        self.resolve_dir(DirKind::Data, path)
    }

    /// Resolve offline mode.
    ///
    /// `explicit` wins; otherwise the first set offline env var decides.
    pub fn resolve_offline(
        &self,
        explicit: Option<bool>,
    ) -> bool {
        if let Some(offline) = explicit {
            return offline;
        }
        for env_var in self.offline_env_vars {
            if let Ok(value) = env::var(env_var) {
                return matches!(
                    value.trim().to_ascii_lowercase().as_str(),
                    "1" | "true" | "yes" | "on"
                );
            }
        }
        false
    }
}
