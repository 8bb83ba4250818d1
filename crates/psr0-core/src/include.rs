//! Source-unit inclusion: the filesystem side of class loading.
//!
//! Loaders only decide *which* file a class lives in. Whether that file is
//! readable, and what "loading" it means, is delegated to a
//! [`SourceIncluder`]. [`FsIncluder`] is the stock implementation: it reads
//! the file into memory once and remembers it.

use std::collections::HashMap;
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

/// Readability check and include primitive used by loaders.
pub trait SourceIncluder {
    /// Returns true if `path` names a file that can be opened for reading.
    fn is_readable(&self, path: &Path) -> bool;

    /// Brings the source unit at `path` into the process.
    ///
    /// Called at most once per successful resolution. Repeated calls for the
    /// same file are allowed; their behavior is up to the implementation.
    fn include(&mut self, path: &Path) -> io::Result<()>;
}

/// A source file that has been included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceUnit {
    /// Path the unit was requested under.
    pub path: PathBuf,
    /// Canonical path used for include-once bookkeeping.
    pub canonical: PathBuf,
    pub source: Vec<u8>,
}

/// Includer backed by the real filesystem with include-once semantics.
///
/// Files are keyed by canonical path, so `./lib/Foo.php` and
/// `lib/Foo.php` count as the same unit.
#[derive(Debug, Default)]
pub struct FsIncluder {
    units: Vec<SourceUnit>,
    by_path: HashMap<PathBuf, usize>,
}

impl FsIncluder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Units in the order they were first included.
    pub fn units(&self) -> &[SourceUnit] {
        &self.units
    }

    /// Looks up an included unit by any path that resolves to it.
    pub fn get(&self, path: &Path) -> Option<&SourceUnit> {
        let canonical = fs::canonicalize(path).ok()?;
        self.by_path.get(&canonical).map(|&i| &self.units[i])
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}

impl SourceIncluder for FsIncluder {
    fn is_readable(&self, path: &Path) -> bool {
        path.is_file() && File::open(path).is_ok()
    }

    fn include(&mut self, path: &Path) -> io::Result<()> {
        let canonical = fs::canonicalize(path)?;
        if self.by_path.contains_key(&canonical) {
            tracing::trace!(path = %path.display(), "source unit already included");
            return Ok(());
        }

        let source = fs::read(&canonical)?;
        tracing::debug!(
            path = %path.display(),
            bytes = source.len(),
            "included source unit"
        );
        self.by_path.insert(canonical.clone(), self.units.len());
        self.units.push(SourceUnit {
            path: path.to_path_buf(),
            canonical,
            source,
        });
        Ok(())
    }
}
