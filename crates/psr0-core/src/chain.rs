//! Ordered chain of class loaders.
//!
//! Loaders are tried in registration order until one resolves the class.
//! The chain is append-only; loaders themselves are immutable.

use std::path::PathBuf;

use serde::Serialize;

use crate::config::Psr0Config;
use crate::error::LoadError;
use crate::include::SourceIncluder;
use crate::loader::{ClassLoader, DEFAULT_FILE_EXTENSION};
use crate::search_path::SearchPath;

#[derive(Debug, Clone, Default)]
pub struct LoaderChain {
    loaders: Vec<ClassLoader>,
    search_path: SearchPath,
}

/// A class resolved to a readable file by one of the chain's loaders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Located {
    /// Index of the loader in registration order.
    pub loader: usize,
    pub path: PathBuf,
}

/// What a single loader would check for a class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Candidate {
    pub loader: usize,
    pub namespace: String,
    /// `None` when the loader declines the class.
    pub path: Option<PathBuf>,
    /// Whether `path` is resolved against the search path rather than an include root.
    pub uses_search_path: bool,
}

impl LoaderChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a chain from configured loaders, in file order.
    pub fn from_config(cfg: &Psr0Config) -> Self {
        let default_ext = cfg
            .default_extension
            .as_deref()
            .unwrap_or(DEFAULT_FILE_EXTENSION);
        let mut chain = Self::new();
        if !cfg.search_path.is_empty() {
            chain.search_path = SearchPath::new(cfg.search_path.iter().cloned());
        }
        for entry in &cfg.loaders {
            chain.push(entry.to_loader(default_ext));
        }
        tracing::debug!(
            loaders = chain.len(),
            search_path = chain.search_path.entries().len(),
            "loader chain built from config"
        );
        chain
    }

    pub fn with_search_path(mut self, search_path: SearchPath) -> Self {
        self.search_path = search_path;
        self
    }

    /// Registers a loader for `namespace` rooted at `include_root` with the default extension.
    pub fn register(
        &mut self,
        namespace: impl Into<String>,
        include_root: impl Into<PathBuf>,
    ) -> &mut Self {
        self.push(ClassLoader::new(namespace, include_root))
    }

    pub fn register_with_extension(
        &mut self,
        namespace: impl Into<String>,
        include_root: impl Into<PathBuf>,
        file_extension: impl Into<String>,
    ) -> &mut Self {
        self.push(ClassLoader::with_extension(
            namespace,
            include_root,
            file_extension,
        ))
    }

    /// Appends an already-built loader.
    pub fn push(&mut self, loader: ClassLoader) -> &mut Self {
        tracing::debug!(
            namespace = %loader.namespace(),
            root = ?loader.include_root(),
            ext = %loader.file_extension(),
            "registered class loader"
        );
        self.loaders.push(loader);
        self
    }

    pub fn loaders(&self) -> &[ClassLoader] {
        &self.loaders
    }

    pub fn search_path(&self) -> &SearchPath {
        &self.search_path
    }

    pub fn len(&self) -> usize {
        self.loaders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.loaders.is_empty()
    }

    /// Tries each loader in order; true as soon as one loads the class.
    pub fn try_all<I>(&self, class: &str, includer: &mut I) -> Result<bool, LoadError>
    where
        I: SourceIncluder + ?Sized,
    {
        for (idx, loader) in self.loaders.iter().enumerate() {
            if loader.try_load(class, &self.search_path, includer)? {
                tracing::debug!(class, loader = idx, "resolved by loader");
                return Ok(true);
            }
        }
        tracing::debug!(class, loaders = self.loaders.len(), "class not found");
        Ok(false)
    }

    /// Dry run of [`try_all`](Self::try_all): the first readable file, without including it.
    pub fn locate<I>(&self, class: &str, includer: &I) -> Option<Located>
    where
        I: SourceIncluder + ?Sized,
    {
        self.loaders.iter().enumerate().find_map(|(loader, l)| {
            l.locate(class, &self.search_path, includer)
                .map(|path| Located { loader, path })
        })
    }

    /// Every loader's candidate path for `class`. No filesystem access.
    pub fn candidates(&self, class: &str) -> Vec<Candidate> {
        self.loaders
            .iter()
            .enumerate()
            .map(|(loader, l)| Candidate {
                loader,
                namespace: l.namespace().to_string(),
                path: l.candidate_path(class),
                uses_search_path: l.include_root().is_none(),
            })
            .collect()
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use crate::config::LoaderEntry;
    use crate::include::FsIncluder;
    use std::fs;
    use tempfile::tempdir;

    fn write(root: &std::path::Path, rel: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "<?php").unwrap();
    }

    #[test]
    fn empty_chain_resolves_nothing() {
        let chain = LoaderChain::new();
        let mut inc = FsIncluder::new();
        assert!(chain.is_empty());
        assert!(!chain.try_all("Anything", &mut inc).unwrap());
        assert!(chain.locate("Anything", &inc).is_none());
    }

    #[test]
    fn loaders_tried_in_registration_order() {
        let dir = tempdir().unwrap();
        let core = dir.path().join("core");
        let apps = dir.path().join("apps");
        let lib = dir.path().join("lib");
        write(&core, "Widgets/Button.php");
        write(&apps, "Blog/Post.php");
        write(&lib, "Legacy/Widgets/Button.php");

        let mut chain = LoaderChain::new();
        chain
            .register(r"Project\Core", &core)
            .register(r"Project\Apps", &apps)
            .register("", &lib);
        assert_eq!(chain.len(), 3);

        let inc = FsIncluder::new();
        assert_eq!(
            chain.locate(r"Project\Core\Widgets\Button", &inc),
            Some(Located {
                loader: 0,
                path: core.join("Widgets/Button.php"),
            })
        );
        assert_eq!(
            chain.locate(r"Project\Apps\Blog\Post", &inc).map(|l| l.loader),
            Some(1)
        );
        assert_eq!(
            chain.locate("Legacy_Widgets_Button", &inc).map(|l| l.loader),
            Some(2)
        );
    }

    #[test]
    fn falls_through_to_later_loader() {
        let dir = tempdir().unwrap();
        let lib = dir.path().join("lib");
        write(&lib, "Project/Core/Extra.php");

        let mut chain = LoaderChain::new();
        chain
            .register(r"Project\Core", dir.path().join("core"))
            .register("", &lib);

        let mut inc = FsIncluder::new();
        assert!(chain.try_all(r"Project\Core\Extra", &mut inc).unwrap());
        assert_eq!(inc.len(), 1);
        assert!(!chain.try_all(r"Project\Core\Missing", &mut inc).unwrap());
    }

    #[test]
    fn search_path_mode_through_chain() {
        let dir = tempdir().unwrap();
        write(dir.path(), "Zend/Log/Writer.php");

        let mut chain = LoaderChain::new().with_search_path(SearchPath::new([
            dir.path().join("nope"),
            dir.path().to_path_buf(),
        ]));
        chain.register("", "");

        let mut inc = FsIncluder::new();
        assert!(chain.try_all("Zend_Log_Writer", &mut inc).unwrap());
        assert_eq!(inc.units()[0].path, dir.path().join("Zend/Log/Writer.php"));
    }

    #[test]
    fn candidates_report_each_loader() {
        let mut chain = LoaderChain::new();
        chain
            .register(r"Project\Core", "/myproject/core")
            .register_with_extension("Other", "", ".inc")
            .register("", "/myproject/lib");

        let c = chain.candidates(r"Project\Core\Widgets\Button");
        assert_eq!(c.len(), 3);
        assert_eq!(
            c[0].path,
            Some(PathBuf::from("/myproject/core/Widgets/Button.php"))
        );
        assert!(!c[0].uses_search_path);
        assert_eq!(c[1].path, None);
        assert!(c[1].uses_search_path);
        assert_eq!(
            c[2].path,
            Some(PathBuf::from("/myproject/lib/Project/Core/Widgets/Button.php"))
        );
    }

    #[test]
    fn from_config_applies_defaults() {
        let cfg = Psr0Config {
            search_path: vec![PathBuf::from("/usr/share/php")],
            default_extension: Some(".inc".to_string()),
            loaders: vec![
                LoaderEntry {
                    namespace: "Acme".to_string(),
                    include_root: PathBuf::from("/srv/acme"),
                    extension: None,
                    underscore_dirs: None,
                },
                LoaderEntry {
                    namespace: String::new(),
                    include_root: PathBuf::new(),
                    extension: Some(".php".to_string()),
                    underscore_dirs: Some(false),
                },
            ],
        };
        let chain = LoaderChain::from_config(&cfg);
        assert_eq!(chain.len(), 2);
        assert_eq!(chain.loaders()[0].file_extension(), ".inc");
        assert!(chain.loaders()[0].underscore_dirs());
        assert_eq!(chain.loaders()[1].file_extension(), ".php");
        assert!(!chain.loaders()[1].underscore_dirs());
        assert_eq!(
            chain.search_path().entries(),
            &[PathBuf::from("/usr/share/php")]
        );
    }

    #[test]
    fn from_config_keeps_default_search_path_when_unset() {
        let chain = LoaderChain::from_config(&Psr0Config::default());
        assert_eq!(chain.search_path(), &SearchPath::default());
    }
}
