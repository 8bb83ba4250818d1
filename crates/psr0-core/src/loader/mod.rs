//! PSR-0 class loader: maps one namespace onto one directory.
//!
//! A loader with namespace `Project\Core` and include root `/myproject/core`
//! resolves `Project\Core\Widgets\Button` to
//! `/myproject/core/Widgets/Button.php`. An empty namespace makes the loader
//! a catch-all, typically for libraries that fake namespaces with
//! underscores (`Zend_Log_Writer`). An empty include root makes the loader
//! resolve against a [`SearchPath`] instead.

mod path;

use std::path::{Path, PathBuf};

use crate::error::LoadError;
use crate::include::SourceIncluder;
use crate::search_path::SearchPath;

pub(crate) use path::concat_path;
pub use path::{class_to_path, split_class_name};

/// Separator between namespace segments in a class name.
pub const NAMESPACE_SEPARATOR: char = '\\';

/// Extension appended when none is configured.
pub const DEFAULT_FILE_EXTENSION: &str = ".php";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassLoader {
    namespace: String,
    /// `namespace` followed by the separator; what class names are matched against.
    match_prefix: String,
    include_root: PathBuf,
    file_extension: String,
    underscore_dirs: bool,
}

impl ClassLoader {
    /// Loader with the default extension and the underscore convention enabled.
    pub fn new(namespace: impl Into<String>, include_root: impl Into<PathBuf>) -> Self {
        Self::with_options(namespace, include_root, DEFAULT_FILE_EXTENSION, true)
    }

    pub fn with_extension(
        namespace: impl Into<String>,
        include_root: impl Into<PathBuf>,
        file_extension: impl Into<String>,
    ) -> Self {
        Self::with_options(namespace, include_root, file_extension, true)
    }

    pub fn with_options(
        namespace: impl Into<String>,
        include_root: impl Into<PathBuf>,
        file_extension: impl Into<String>,
        underscore_dirs: bool,
    ) -> Self {
        let namespace = namespace.into();
        let mut match_prefix = String::with_capacity(namespace.len() + 1);
        match_prefix.push_str(&namespace);
        match_prefix.push(NAMESPACE_SEPARATOR);
        Self {
            namespace,
            match_prefix,
            include_root: include_root.into(),
            file_extension: file_extension.into(),
            underscore_dirs,
        }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// `None` when the loader resolves through the search path.
    pub fn include_root(&self) -> Option<&Path> {
        if self.include_root.as_os_str().is_empty() {
            None
        } else {
            Some(&self.include_root)
        }
    }

    pub fn file_extension(&self) -> &str {
        &self.file_extension
    }

    pub fn underscore_dirs(&self) -> bool {
        self.underscore_dirs
    }

    pub fn is_catch_all(&self) -> bool {
        self.namespace.is_empty()
    }

    /// Whether this loader takes responsibility for `class`.
    ///
    /// Literal, case-sensitive prefix test against `namespace\`, so
    /// `Project` matches `Project\Widgets` but not `ProjectWidgets`.
    pub fn handles(&self, class: &str) -> bool {
        self.is_catch_all() || class.starts_with(&self.match_prefix)
    }

    /// Relative file path for `class`, or `None` if the loader declines it.
    ///
    /// The namespace is stripped only when the loader has an include root;
    /// a search-path loader keeps it so that `Project\Core\Foo` maps to
    /// `Project/Core/Foo.php` under each search directory.
    pub fn relative_path(&self, class: &str) -> Option<String> {
        if !self.handles(class) {
            return None;
        }
        let class = match (self.is_catch_all(), self.include_root()) {
            (false, Some(_)) => &class[self.match_prefix.len()..],
            _ => class,
        };
        Some(class_to_path(
            class,
            &self.file_extension,
            self.underscore_dirs,
        ))
    }

    /// Path to check for `class`: the relative path under the include root,
    /// or the bare relative path for search-path loaders.
    pub fn candidate_path(&self, class: &str) -> Option<PathBuf> {
        let relative = self.relative_path(class)?;
        Some(match self.include_root() {
            Some(root) => concat_path(root, &relative),
            None => PathBuf::from(relative),
        })
    }

    /// Finds the readable file for `class` without including it.
    pub fn locate<I>(&self, class: &str, search_path: &SearchPath, includer: &I) -> Option<PathBuf>
    where
        I: SourceIncluder + ?Sized,
    {
        let Some(relative) = self.relative_path(class) else {
            tracing::trace!(namespace = %self.namespace, class, "loader declined class");
            return None;
        };

        match self.include_root() {
            Some(root) => {
                let path = concat_path(root, &relative);
                tracing::debug!(class, path = %path.display(), "checking candidate");
                includer.is_readable(&path).then_some(path)
            }
            None => search_path.probe(&relative).find(|path| {
                tracing::trace!(class, path = %path.display(), "probing search path");
                includer.is_readable(path)
            }),
        }
    }

    /// Resolves `class` and includes its file.
    ///
    /// Returns `Ok(false)` when the class is outside this loader's namespace
    /// or no readable file exists. Errors only come from `includer.include`.
    pub fn try_load<I>(
        &self,
        class: &str,
        search_path: &SearchPath,
        includer: &mut I,
    ) -> Result<bool, LoadError>
    where
        I: SourceIncluder + ?Sized,
    {
        let Some(path) = self.locate(class, search_path, &*includer) else {
            return Ok(false);
        };

        if let Err(source) = includer.include(&path) {
            return Err(LoadError::Include {
                class: class.to_string(),
                path,
                source,
            });
        }
        tracing::info!(class, path = %path.display(), "class loaded");
        Ok(true)
    }
}
