//! Error type for class loading.
//!
//! A class that cannot be found is not an error: loaders report it as
//! `Ok(false)` so the chain can move on. Only a failure of the include
//! primitive on a file that was just confirmed readable surfaces here.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    /// The includer rejected a path that passed the readability check
    /// (e.g. removed or made unreadable in between, or not a source unit).
    #[error("failed to include {} for class {class}", .path.display())]
    Include {
        class: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl LoadError {
    /// Path of the file that failed to load.
    pub fn path(&self) -> &std::path::Path {
        match self {
            LoadError::Include { path, .. } => path,
        }
    }
}
