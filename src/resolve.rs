//! Template resolution — the three-tier cascade.
//!
//! [`provide_template`] produces exactly one HTML file at
//! `<out_dir>/<id>.html` for a page identifier, from the best available
//! source, never leaving the slot empty:
//!
//! 1. **Exact**: copy `<template_root>/<id>.html` verbatim.
//! 2. **Root fallback**: copy `<template_root>/<fallback_name>.html`
//!    verbatim, where the fallback name is the id's last path segment.
//!    Skipped (with a stderr warning) when
//!    `prevent_template_root_fallback` is set — suppression changes which
//!    tier fires, it never leaves the page without a file.
//! 3. **Generated**: write the configured generator's output, or the fixed
//!    stub referencing `<fallback_name>.css` and `<fallback_name>.js`.
//!
//! The tiers are tried as an ordered chain of functions returning hit or
//! miss; which one fired is reported as a [`Resolution`] so the build
//! report can show where each entry came from.
//!
//! A template file that exists is always copied byte-for-byte — entrykit
//! never rewrites template content. Only tier 3 produces bytes of its own.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use maud::html;
use thiserror::Error;

use crate::config::TemplateConfig;
use crate::ident::{self, IdError};

#[derive(Error, Debug)]
pub enum ResolveError {
    /// Configuration error: fatal, raised before any file I/O.
    #[error("bad page id: {0}")]
    InvalidId(#[from] IdError),
    #[error("failed to create output directories for `{id}`: {source}")]
    DirCreate { id: String, source: io::Error },
    /// Tier 3 failed to write. Not expected under normal conditions — it
    /// implies the directory-creation invariant above was broken.
    #[error("failed to write generated entry for `{id}`: {source}")]
    Write { id: String, source: io::Error },
}

/// Which tier of the cascade produced an entry file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// `<template_root>/<id>.html`, copied verbatim.
    Exact,
    /// `<template_root>/<fallback_name>.html`, copied verbatim.
    RootFallback,
    /// Auto-generated: configured generator or the fixed stub.
    Generated,
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Resolution::Exact => "exact template",
            Resolution::RootFallback => "root fallback",
            Resolution::Generated => "generated",
        })
    }
}

/// Produce the entry file for one page identifier.
///
/// The id must not end with a slash and must have a non-empty final
/// segment; violations fail before anything is written. Nested output
/// directories are created first, so every tier writes into an existing
/// directory.
pub fn provide_template(
    id: &str,
    out_dir: &Path,
    template_root: &Path,
    config: &TemplateConfig,
) -> Result<Resolution, ResolveError> {
    ident::validate(id)?;
    ident::ensure_nested_dirs(id, out_dir).map_err(|source| ResolveError::DirCreate {
        id: id.to_string(),
        source,
    })?;

    let target = entry_path(id, out_dir);

    if copy_template(&entry_path(id, template_root), &target) {
        return Ok(Resolution::Exact);
    }

    let name = ident::fallback_name(id);
    if config.prevent_template_root_fallback {
        eprintln!("warning: couldn't find a template for {id}");
    } else if copy_template(&entry_path(name, template_root), &target) {
        return Ok(Resolution::RootFallback);
    }

    let body = match &config.default_template {
        Some(generate) => generate(name, id),
        None => stub_entry(name),
    };
    fs::write(&target, body).map_err(|source| ResolveError::Write {
        id: id.to_string(),
        source,
    })?;
    Ok(Resolution::Generated)
}

/// Which tier *would* produce `id`, without writing anything.
///
/// Backs the `check` CLI command. Mirrors the tier order of
/// [`provide_template`] but probes the template root instead of copying.
pub fn classify(
    id: &str,
    template_root: &Path,
    config: &TemplateConfig,
) -> Result<Resolution, ResolveError> {
    ident::validate(id)?;
    if entry_path(id, template_root).is_file() {
        return Ok(Resolution::Exact);
    }
    let name = ident::fallback_name(id);
    if !config.prevent_template_root_fallback && entry_path(name, template_root).is_file() {
        return Ok(Resolution::RootFallback);
    }
    Ok(Resolution::Generated)
}

/// `<root>/<id>.html` — the entry file slot for an id under any root.
fn entry_path(id: &str, root: &Path) -> PathBuf {
    root.join(format!("{id}.html"))
}

/// Copy one template file; `false` means "try the next tier".
///
/// Any copy failure — missing file, unreadable file — falls through the
/// cascade rather than surfacing.
fn copy_template(source: &Path, target: &Path) -> bool {
    fs::copy(source, target).is_ok()
}

/// The fixed tier-3 stub: same-named stylesheet plus module script.
fn stub_entry(name: &str) -> String {
    html! {
        link rel="stylesheet" href={ (name) ".css" };
        script src={ (name) ".js" } type="module" {}
    }
    .into_string()
}
