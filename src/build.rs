//! Build orchestration — one build-start cycle.
//!
//! [`run`] owns the output directory for the duration of a build start and
//! drives three sequential steps:
//!
//! 1. Reset: clear the output directory (create if absent, wipe contents
//!    if present).
//! 2. Assets: copy every `(public, private)` pair byte-for-byte. A missing
//!    source file is fatal — assets have no fallback tier.
//! 3. Entries: resolve every page identifier, then every extra HTML entry,
//!    through the [`crate::resolve`] cascade.
//!
//! Everything is blocking and sequential; the function returns only when
//! the output directory is fully materialized, so a host bundler can start
//! reading it as soon as the build-start hook completes. Any failure aborts
//! the remaining steps with no rollback of files already written.
//!
//! Given unchanged configuration and source files, running twice is
//! idempotent: the reset step erases the first run before the second
//! repopulates it identically.

use std::fs;
use std::io;
use std::path::Path;

use thiserror::Error;
use walkdir::WalkDir;

use crate::config::{ConfigError, TemplateConfig};
use crate::ident;
use crate::resolve::{self, Resolution, ResolveError};

#[derive(Error, Debug)]
pub enum BuildError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to reset output directory `{dir}`: {source}")]
    Reset { dir: String, source: io::Error },
    #[error("failed to create output directories for asset `{public}`: {source}")]
    AssetDir { public: String, source: io::Error },
    #[error("failed to copy asset `{private}` to `{public}`: {source}")]
    AssetCopy {
        public: String,
        private: String,
        source: io::Error,
    },
    #[error(transparent)]
    Resolve(#[from] ResolveError),
}

/// Outcome of one build-start cycle, consumed by [`crate::output`].
#[derive(Debug)]
pub struct BuildReport {
    /// Public paths of copied assets, in mapping order.
    pub assets: Vec<String>,
    /// Every resolved entry id with the cascade tier that produced it.
    pub entries: Vec<(String, Resolution)>,
    /// Files present under the output directory after the run.
    pub files_written: usize,
}

/// Run one build-start cycle over a validated configuration.
pub fn run(config: &TemplateConfig) -> Result<BuildReport, BuildError> {
    config.validate()?;
    reset_out_dir(&config.out_dir)?;

    let mut assets = Vec::with_capacity(config.assets.len());
    for (public, private) in &config.assets {
        ident::ensure_nested_dirs(public, &config.out_dir).map_err(|source| {
            BuildError::AssetDir {
                public: public.clone(),
                source,
            }
        })?;
        fs::copy(private, config.out_dir.join(public)).map_err(|source| {
            BuildError::AssetCopy {
                public: public.clone(),
                private: private.clone(),
                source,
            }
        })?;
        assets.push(public.clone());
    }

    let mut entries = Vec::new();
    for id in config.entry_ids() {
        let resolution =
            resolve::provide_template(id, &config.out_dir, &config.template_root, config)?;
        entries.push((id.to_string(), resolution));
    }

    Ok(BuildReport {
        assets,
        entries,
        files_written: count_files(&config.out_dir),
    })
}

/// Clear the output directory: wipe prior contents if present, then
/// recreate it empty. Safe to call when the directory does not exist.
fn reset_out_dir(dir: &Path) -> Result<(), BuildError> {
    let reset_err = |source| BuildError::Reset {
        dir: dir.display().to_string(),
        source,
    };
    match fs::remove_dir_all(dir) {
        Ok(()) => {}
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => return Err(reset_err(e)),
    }
    fs::create_dir_all(dir).map_err(reset_err)
}

fn count_files(dir: &Path) -> usize {
    WalkDir::new(dir)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{config_at, read_entry, snapshot_tree, write_file};
    use std::collections::BTreeMap;
    use tempfile::TempDir;

    fn pages(ids: &[&str]) -> BTreeMap<String, String> {
        ids.iter().map(|id| (id.to_string(), String::new())).collect()
    }

    #[test]
    fn full_cycle_copies_assets_and_resolves_pages() {
        let tmp = TempDir::new().unwrap();
        let mut config = config_at(tmp.path());
        config.pages = pages(&["index", "docs/setup"]);
        config.assets = BTreeMap::from([(
            "img/logo.png".to_string(),
            tmp.path().join("art/logo.png").display().to_string(),
        )]);
        write_file(tmp.path(), "art/logo.png", "png-bytes");
        write_file(tmp.path(), "templates/index.html", "<h1>home</h1>");

        let report = run(&config).unwrap();

        assert_eq!(read_entry(tmp.path(), "index.html"), "<h1>home</h1>");
        assert_eq!(
            fs::read_to_string(config.out_dir.join("img/logo.png")).unwrap(),
            "png-bytes"
        );
        assert!(config.out_dir.join("docs/setup.html").is_file());
        assert_eq!(report.assets, vec!["img/logo.png"]);
        assert_eq!(
            report.entries,
            vec![
                ("docs/setup".to_string(), Resolution::Generated),
                ("index".to_string(), Resolution::Exact),
            ]
        );
        assert_eq!(report.files_written, 3);
    }

    #[test]
    fn reset_wipes_stale_output() {
        let tmp = TempDir::new().unwrap();
        let mut config = config_at(tmp.path());
        config.pages = pages(&["index"]);
        write_file(tmp.path(), "dist/stale.html", "old");
        write_file(tmp.path(), "dist/deep/leftover.js", "old");

        run(&config).unwrap();

        assert!(!config.out_dir.join("stale.html").exists());
        assert!(!config.out_dir.join("deep").exists());
        assert!(config.out_dir.join("index.html").is_file());
    }

    #[test]
    fn run_works_without_existing_out_dir() {
        let tmp = TempDir::new().unwrap();
        let mut config = config_at(tmp.path());
        config.pages = pages(&["index"]);

        assert!(!config.out_dir.exists());
        run(&config).unwrap();
        assert!(config.out_dir.join("index.html").is_file());
    }

    #[test]
    fn missing_asset_source_is_fatal_and_leaves_no_asset() {
        let tmp = TempDir::new().unwrap();
        let mut config = config_at(tmp.path());
        config.pages = pages(&["index"]);
        config.assets = BTreeMap::from([(
            "logo.png".to_string(),
            tmp.path().join("src/logo.png").display().to_string(),
        )]);

        let err = run(&config).unwrap_err();
        assert!(matches!(err, BuildError::AssetCopy { .. }));
        assert!(!config.out_dir.join("logo.png").exists());
        // Assets are copied before entries; the failure aborted resolution.
        assert!(!config.out_dir.join("index.html").exists());
    }

    #[test]
    fn invalid_page_id_aborts_before_reset() {
        let tmp = TempDir::new().unwrap();
        let mut config = config_at(tmp.path());
        config.pages = pages(&["a/b/"]);
        write_file(tmp.path(), "dist/previous.html", "keep");

        let err = run(&config).unwrap_err();
        assert!(matches!(err, BuildError::Config(_)));
        // Validation failed up front, so the previous output survives.
        assert_eq!(read_entry(tmp.path(), "previous.html"), "keep");
    }

    #[test]
    fn html_entries_resolved_after_pages() {
        let tmp = TempDir::new().unwrap();
        let mut config = config_at(tmp.path());
        config.pages = pages(&["index"]);
        config.html_entries = vec!["sandbox".to_string()];

        let report = run(&config).unwrap();
        let ids: Vec<&str> = report.entries.iter().map(|(id, _)| id.as_str()).collect();
        assert_eq!(ids, vec!["index", "sandbox"]);
        assert!(config.out_dir.join("sandbox.html").is_file());
    }

    #[test]
    fn double_run_is_idempotent() {
        let tmp = TempDir::new().unwrap();
        let mut config = config_at(tmp.path());
        config.pages = pages(&["index", "docs/setup"]);
        config.html_entries = vec!["sandbox".to_string()];
        config.assets = BTreeMap::from([(
            "logo.png".to_string(),
            tmp.path().join("art/logo.png").display().to_string(),
        )]);
        write_file(tmp.path(), "art/logo.png", "png-bytes");
        write_file(tmp.path(), "templates/setup.html", "<p>root</p>");

        run(&config).unwrap();
        let first = snapshot_tree(&config.out_dir);
        run(&config).unwrap();
        let second = snapshot_tree(&config.out_dir);

        assert_eq!(first, second);
    }
}
