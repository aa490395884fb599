//! CLI output formatting.
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure — no I/O, no side effects.
//!
//! ## Build
//!
//! ```text
//! Assets
//!     img/logo.png
//!
//! Entries
//!     index.html (exact template)
//!     docs/setup.html (root fallback)
//!     sandbox.html (generated)
//!
//! Materialized 3 entries, 1 asset, 4 files in dist
//! ```
//!
//! ## Check
//!
//! ```text
//! index -> exact template (Home)
//! docs/setup -> root fallback (Setup guide)
//! sandbox -> generated
//!
//! Checked 3 entries against templates
//! ```

use crate::build::BuildReport;
use crate::config::TemplateConfig;
use crate::resolve::Resolution;

/// Pluralize a count noun: `1 entry`, `3 entries`.
fn counted(n: usize, singular: &str, plural: &str) -> String {
    if n == 1 {
        format!("{n} {singular}")
    } else {
        format!("{n} {plural}")
    }
}

/// Format the report of a completed build-start cycle.
pub fn format_build_output(report: &BuildReport, config: &TemplateConfig) -> Vec<String> {
    let mut lines = Vec::new();

    if !report.assets.is_empty() {
        lines.push("Assets".to_string());
        for public in &report.assets {
            lines.push(format!("    {public}"));
        }
        lines.push(String::new());
    }

    lines.push("Entries".to_string());
    for (id, resolution) in &report.entries {
        lines.push(format!("    {id}.html ({resolution})"));
    }
    lines.push(String::new());

    lines.push(format!(
        "Materialized {}, {}, {} in {}",
        counted(report.entries.len(), "entry", "entries"),
        counted(report.assets.len(), "asset", "assets"),
        counted(report.files_written, "file", "files"),
        config.out_dir.display(),
    ));
    lines
}

pub fn print_build_output(report: &BuildReport, config: &TemplateConfig) {
    for line in format_build_output(report, config) {
        println!("{line}");
    }
}

/// Format a dry-run report: which tier each entry would use, with the
/// page description where one is configured.
pub fn format_check_output(
    resolutions: &[(String, Resolution)],
    config: &TemplateConfig,
) -> Vec<String> {
    let mut lines = Vec::new();
    for (id, resolution) in resolutions {
        match config.pages.get(id).filter(|d| !d.is_empty()) {
            Some(description) => lines.push(format!("{id} -> {resolution} ({description})")),
            None => lines.push(format!("{id} -> {resolution}")),
        }
    }
    lines.push(String::new());
    lines.push(format!(
        "Checked {} against templates",
        counted(resolutions.len(), "entry", "entries")
    ));
    lines
}

pub fn print_check_output(resolutions: &[(String, Resolution)], config: &TemplateConfig) {
    for line in format_check_output(resolutions, config) {
        println!("{line}");
    }
}
