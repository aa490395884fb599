//! Run configuration.
//!
//! A [`TemplateConfig`] describes one build-start run: where templates live,
//! where output goes, which assets to copy, and which page identifiers need
//! an HTML entry file. It is constructed once — by the host bundler's config
//! code or from an `entrykit.toml` file — and read-only thereafter.
//!
//! ## Config File
//!
//! ```toml
//! # All paths are optional - defaults shown below
//! template_root = "templates"
//! out_dir = "dist"
//! prevent_template_root_fallback = false
//!
//! [pages]
//! index = "Home"
//! "docs/setup" = "Setup guide"
//!
//! [assets]
//! "logo.png" = "art/logo.png"
//! "fonts/body.woff2" = "art/fonts/body.woff2"
//!
//! html_entries = ["sandbox"]
//! ```
//!
//! Page keys map an identifier to a human-readable description (shown by the
//! `check` command); asset keys map a public output path to the private
//! source file it is copied from. Unknown keys are rejected to catch typos
//! early.
//!
//! The one field a config file cannot carry is [`default_template`]: a
//! generator closure producing the HTML for entries with no template on
//! disk. It is only reachable through the library API.
//!
//! [`default_template`]: TemplateConfig::default_template

use serde::Deserialize;
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::ident;

/// Template root directory used when the config does not name one.
pub const DEFAULT_TEMPLATE_ROOT: &str = "templates";
/// Output directory used when the config does not name one.
pub const DEFAULT_OUT_DIR: &str = "dist";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Generator for auto-created entry files: `(fallback_name, id) → HTML`.
pub type DefaultTemplate = Box<dyn Fn(&str, &str) -> String + Send + Sync>;

/// Configuration for one build-start run.
///
/// All fields have defaults, resolved once at construction — callers and
/// config files only specify what they want to override. Unknown keys in
/// config files are rejected.
#[derive(Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TemplateConfig {
    /// Base directory searched for per-page and root fallback templates.
    pub template_root: PathBuf,
    /// Output directory; wiped and repopulated on every build start.
    pub out_dir: PathBuf,
    /// Public output path → private source path, copied byte-for-byte.
    pub assets: BTreeMap<String, String>,
    /// Page identifier → human-readable description.
    pub pages: BTreeMap<String, String>,
    /// Extra HTML-only entry identifiers, resolved after the page keys.
    pub html_entries: Vec<String>,
    /// When set, skip the root-level fallback template tier for pages with
    /// no template of their own (a warning is printed and the entry is
    /// auto-generated instead).
    pub prevent_template_root_fallback: bool,
    /// Generator for entries with no template on disk. When absent, a fixed
    /// stylesheet/script stub is written.
    #[serde(skip)]
    pub default_template: Option<DefaultTemplate>,
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self {
            template_root: PathBuf::from(DEFAULT_TEMPLATE_ROOT),
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            assets: BTreeMap::new(),
            pages: BTreeMap::new(),
            html_entries: Vec::new(),
            prevent_template_root_fallback: false,
            default_template: None,
        }
    }
}

impl fmt::Debug for TemplateConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TemplateConfig")
            .field("template_root", &self.template_root)
            .field("out_dir", &self.out_dir)
            .field("assets", &self.assets)
            .field("pages", &self.pages)
            .field("html_entries", &self.html_entries)
            .field(
                "prevent_template_root_fallback",
                &self.prevent_template_root_fallback,
            )
            .field(
                "default_template",
                &self.default_template.as_ref().map(|_| ".."),
            )
            .finish()
    }
}

impl TemplateConfig {
    /// Load and validate a config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate every identifier the run will resolve.
    ///
    /// Bad identifiers are configuration errors: they abort the build-start
    /// invocation before any filesystem work.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.pages.is_empty() && self.html_entries.is_empty() {
            return Err(ConfigError::Validation(
                "no pages or html_entries configured".into(),
            ));
        }
        for id in self.entry_ids() {
            ident::validate(id)
                .map_err(|e| ConfigError::Validation(format!("bad page id: {e}")))?;
        }
        Ok(())
    }

    /// All entry identifiers in resolution order: page keys first, then the
    /// extra HTML-only entries in list order.
    pub fn entry_ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.pages
            .keys()
            .map(String::as_str)
            .chain(self.html_entries.iter().map(String::as_str))
    }
}

/// Returns a fully-commented stock `entrykit.toml` with all keys explained.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# entrykit Configuration
# ======================
# All settings except [pages] are optional. Values shown are the defaults.
# Unknown keys will cause an error.

# Base directory searched for templates.
# Per-page:       <template_root>/<id>.html
# Root fallback:  <template_root>/<basename of id>.html
template_root = "templates"

# Output directory. Wiped and repopulated on every build start - do not
# point this at a directory holding anything you want to keep.
out_dir = "dist"

# Skip the root-level fallback template tier. Pages without a template of
# their own are then auto-generated (with a warning) instead of sharing a
# root template.
prevent_template_root_fallback = false

# Extra identifiers that get an HTML entry file but no page description.
html_entries = []

# ---------------------------------------------------------------------------
# Pages: identifier -> description
# ---------------------------------------------------------------------------
# Identifiers are slash-separated relative paths with no trailing slash and
# no extension. Each gets an entry file at <out_dir>/<id>.html.
[pages]
index = "Home"

# ---------------------------------------------------------------------------
# Assets: public output path -> private source path
# ---------------------------------------------------------------------------
# Copied byte-for-byte into <out_dir>/<public path>. A missing source file
# fails the build - assets have no fallback tier.
[assets]
"##
}
