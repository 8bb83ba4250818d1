//! Integration test: config file on disk, loader chain built from it, classes
//! loaded from a temporary project tree.

#![cfg(unix)]

use psr0_core::config;
use psr0_core::{FsIncluder, LoaderChain, SearchPath, SourceIncluder};
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn write(root: &Path, rel: &str, body: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, body).unwrap();
}

#[test]
fn project_layout_from_config_file() {
    let project = tempdir().unwrap();
    let root = project.path();
    write(root, "core/Widgets/Button.php", "<?php namespace Project\\Core\\Widgets; class Button {}");
    write(root, "apps/Blog/Post.php", "<?php namespace Project\\Apps\\Blog; class Post {}");
    write(root, "lib/Legacy/Widgets/Button.php", "<?php class Legacy_Widgets_Button {}");
    write(root, "shared/Vendor/Util.inc", "<?php");

    let cfg_text = format!(
        r#"
search_path = ["{shared}"]

[[loaders]]
namespace = 'Project\Core'
include_root = "{core}"

[[loaders]]
namespace = 'Project\Apps'
include_root = "{apps}"

[[loaders]]
namespace = ""
include_root = "{lib}"

[[loaders]]
namespace = "Vendor"
extension = ".inc"
"#,
        shared = root.join("shared").display(),
        core = root.join("core").display(),
        apps = root.join("apps").display(),
        lib = root.join("lib").display(),
    );
    let cfg_path = root.join("config.toml");
    fs::write(&cfg_path, cfg_text).unwrap();

    let cfg = config::load_from(&cfg_path).unwrap();
    let chain = LoaderChain::from_config(&cfg);
    assert_eq!(chain.len(), 4);

    let mut inc = FsIncluder::new();
    assert!(chain.try_all(r"Project\Core\Widgets\Button", &mut inc).unwrap());
    assert!(chain.try_all(r"Project\Apps\Blog\Post", &mut inc).unwrap());
    assert!(chain.try_all("Legacy_Widgets_Button", &mut inc).unwrap());
    assert!(chain.try_all(r"Vendor\Util", &mut inc).unwrap());
    assert!(!chain.try_all(r"Project\Core\Widgets\Slider", &mut inc).unwrap());
    assert_eq!(inc.len(), 4);

    // Repeated loads succeed and do not duplicate units.
    assert!(chain.try_all(r"Project\Core\Widgets\Button", &mut inc).unwrap());
    assert_eq!(inc.len(), 4);

    let unit = inc.get(&root.join("core/Widgets/Button.php")).unwrap();
    assert!(unit.source.starts_with(b"<?php namespace Project"));
}

#[test]
fn nonexistent_root_never_resolves() {
    let mut chain = LoaderChain::new();
    chain.register(r"Project\Core", "/definitely/not/here");
    let mut inc = FsIncluder::new();
    assert!(!chain.try_all(r"Project\Core\Widgets\Button", &mut inc).unwrap());
    assert!(inc.is_empty());
}

#[test]
fn search_path_directory_wins_in_declared_order() {
    let a = tempdir().unwrap();
    let b = tempdir().unwrap();
    write(a.path(), "Zend/Log.php", "a");
    write(b.path(), "Zend/Log.php", "b");

    let mut chain = LoaderChain::new()
        .with_search_path(SearchPath::new([b.path(), a.path()]));
    chain.register("", "");

    let inc = FsIncluder::new();
    let located = chain.locate("Zend_Log", &inc).unwrap();
    assert_eq!(located.path, b.path().join("Zend/Log.php"));
    assert!(inc.is_readable(&located.path));
}
