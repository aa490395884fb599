//! Shared test utilities for the entrykit test suite.
//!
//! Tests build their fixtures programmatically in a `TempDir`: a
//! `templates/` tree, asset source files, and a config pointed at
//! temp-local `templates` and `dist` directories. Helpers here keep the
//! path plumbing out of the tests and panic with context on a miss.
//!
//! # Usage
//!
//! ```rust
//! let tmp = TempDir::new().unwrap();
//! let config = config_at(tmp.path());
//! write_file(tmp.path(), "templates/index.html", "<h1>home</h1>");
//!
//! build::run(&config).unwrap();
//! assert_eq!(read_entry(tmp.path(), "index.html"), "<h1>home</h1>");
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use walkdir::WalkDir;

use crate::config::TemplateConfig;

/// Write a file under `root`, creating intermediate directories.
pub fn write_file(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, content).unwrap();
}

/// A default config rooted in a temp directory: templates from
/// `<root>/templates`, output to `<root>/dist`.
pub fn config_at(root: &Path) -> TemplateConfig {
    TemplateConfig {
        template_root: root.join("templates"),
        out_dir: root.join("dist"),
        ..TemplateConfig::default()
    }
}

/// Read a produced entry file from `<root>/dist`. Panics with the path on
/// a miss.
pub fn read_entry(root: &Path, rel: &str) -> String {
    let path = root.join("dist").join(rel);
    fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("can't read entry {}: {e}", path.display()))
}

/// Snapshot a directory tree as relative path → file bytes, for
/// whole-tree equality assertions.
pub fn snapshot_tree(dir: &Path) -> BTreeMap<String, Vec<u8>> {
    WalkDir::new(dir)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .map(|e| {
            let rel = e
                .path()
                .strip_prefix(dir)
                .unwrap()
                .to_string_lossy()
                .into_owned();
            (rel, fs::read(e.path()).unwrap())
        })
        .collect()
}
