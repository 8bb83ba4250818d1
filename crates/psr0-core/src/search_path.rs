//! Ordered list of directories consulted by loaders without an include root.

use std::ffi::OsStr;
use std::path::{Component, Path, PathBuf};

use crate::loader::concat_path;

/// Environment variable holding extra search directories, separated like `PATH`.
pub const INCLUDE_PATH_ENV: &str = "PSR0_INCLUDE_PATH";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPath {
    entries: Vec<PathBuf>,
}

impl Default for SearchPath {
    /// Current directory only.
    fn default() -> Self {
        Self {
            entries: vec![PathBuf::from(".")],
        }
    }
}

impl SearchPath {
    pub fn new<I, P>(entries: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            entries: entries.into_iter().map(Into::into).collect(),
        }
    }

    /// Parses a platform path list (`:`-separated on Unix). Empty entries are dropped.
    pub fn from_env_value(value: &OsStr) -> Self {
        Self {
            entries: std::env::split_paths(value)
                .filter(|p| !p.as_os_str().is_empty())
                .collect(),
        }
    }

    /// Reads [`INCLUDE_PATH_ENV`]; `None` when it is unset.
    pub fn from_env() -> Option<Self> {
        let value = std::env::var_os(INCLUDE_PATH_ENV)?;
        let sp = Self::from_env_value(&value);
        tracing::debug!(entries = sp.entries.len(), "search path from {}", INCLUDE_PATH_ENV);
        Some(sp)
    }

    pub fn entries(&self) -> &[PathBuf] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Candidate locations for `relative`, in search order.
    ///
    /// A current-directory entry yields the bare relative path; any other
    /// entry yields `entry/relative`.
    pub fn probe<'a>(&'a self, relative: &'a str) -> impl Iterator<Item = PathBuf> + 'a {
        self.entries.iter().map(move |dir| {
            if is_current_dir(dir) {
                PathBuf::from(relative)
            } else {
                concat_path(dir, relative)
            }
        })
    }
}

/// True for any entry consisting of a single `CurDir` component, so `./`
/// counts as the current directory as well as `.`.
fn is_current_dir(dir: &Path) -> bool {
    let mut components = dir.components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::CurDir), None)
    )
}
