//! Page identifier parsing and the nested-directory helper.
//!
//! A page identifier is a slash-separated relative path naming one HTML
//! output unit: no trailing slash, no file extension. The same nesting
//! rules apply to asset public paths, so the directory helper here serves
//! both the resolver and the orchestrator.
//!
//! ## Examples
//!
//! - `"index"` → entry file `index.html`, fallback name `index`
//! - `"docs/getting-started"` → entry file `docs/getting-started.html`,
//!   fallback name `getting-started`
//! - `"a/b/"` → rejected: trailing slash
//! - `""` → rejected: no usable name segment
//!
//! The fallback name is the id's last path segment. It keys the root-level
//! fallback template (`<template_root>/<name>.html`) and the asset pair
//! referenced by an auto-generated entry (`<name>.css` / `<name>.js`).

use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;

/// Ways an identifier can be malformed. Both are configuration errors:
/// they abort the whole build-start invocation rather than being recovered.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum IdError {
    #[error("`{0}` is not allowed to end with a slash")]
    TrailingSlash(String),
    #[error("`{0}` has no usable name segment")]
    EmptyName(String),
}

/// Validate a page identifier.
pub fn validate(id: &str) -> Result<(), IdError> {
    if id.ends_with('/') {
        return Err(IdError::TrailingSlash(id.to_string()));
    }
    if fallback_name(id).is_empty() {
        return Err(IdError::EmptyName(id.to_string()));
    }
    Ok(())
}

/// Last path segment of an id. Empty only for invalid ids.
pub fn fallback_name(id: &str) -> &str {
    id.rsplit('/').next().unwrap_or(id)
}

/// Ensure every intermediate directory of `<root>/<id>` exists.
///
/// The final segment names a file, so only its ancestors are created.
/// Idempotent; for an id without slashes this creates just `root` itself.
pub fn ensure_nested_dirs(id: &str, root: &Path) -> io::Result<()> {
    match root.join(id).parent() {
        Some(parent) => fs::create_dir_all(parent),
        None => Ok(()),
    }
}
