//! Class name to relative file path.

use std::ffi::OsString;
use std::path::{Path, PathBuf, MAIN_SEPARATOR};

use super::NAMESPACE_SEPARATOR;

/// Splits a class name at its last namespace separator.
///
/// Returns `(Some(namespace), leaf)` when a separator is present (the
/// namespace may be empty for a leading separator), `(None, class)` otherwise.
pub fn split_class_name(class: &str) -> (Option<&str>, &str) {
    match class.rfind(NAMESPACE_SEPARATOR) {
        Some(pos) => (
            Some(&class[..pos]),
            &class[pos + NAMESPACE_SEPARATOR.len_utf8()..],
        ),
        None => (None, class),
    }
}

/// Builds the relative file path for `class`.
///
/// Namespace separators become directory separators. With `underscore_dirs`,
/// underscores in the leaf name do too, so `Zend_Log_Writer` maps to
/// `Zend/Log/Writer`. Underscores inside the namespace part are kept.
pub fn class_to_path(class: &str, extension: &str, underscore_dirs: bool) -> String {
    let (namespace, leaf) = split_class_name(class);
    let mut path = String::with_capacity(class.len() + extension.len() + 1);

    if let Some(ns) = namespace {
        path.extend(ns.chars().map(|c| {
            if c == NAMESPACE_SEPARATOR {
                MAIN_SEPARATOR
            } else {
                c
            }
        }));
        path.push(MAIN_SEPARATOR);
    }

    if underscore_dirs {
        path.extend(leaf.chars().map(|c| if c == '_' { MAIN_SEPARATOR } else { c }));
    } else {
        path.push_str(leaf);
    }
    path.push_str(extension);
    path
}

/// `base + separator + relative`, without the absolute-path reset of [`Path::join`].
pub(crate) fn concat_path(base: &Path, relative: &str) -> PathBuf {
    let mut joined = OsString::from(base.as_os_str());
    joined.push(MAIN_SEPARATOR.to_string());
    joined.push(relative);
    PathBuf::from(joined)
}
