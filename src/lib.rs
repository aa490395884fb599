//! # entrykit
//!
//! A build-start materializer for bundler entry files. Given a declarative
//! configuration, entrykit resets an output directory, copies declared
//! static assets into it, and guarantees that every declared page
//! identifier has an HTML entry file at `<out_dir>/<id>.html` — leaving a
//! populated directory tree ready for a separate bundler to consume.
//!
//! # Architecture: Reset, Copy, Resolve
//!
//! One build-start cycle is three sequential steps over an output
//! directory the cycle exclusively owns:
//!
//! ```text
//! 1. Reset     dist/ is wiped and recreated empty
//! 2. Assets    each public → private pair copied byte-for-byte
//! 3. Entries   each page id resolved to an HTML file via the cascade
//! ```
//!
//! The only real decision-making is step 3's template resolution cascade.
//! For a page id like `docs/setup`, three tiers are tried in order:
//!
//! ```text
//! templates/docs/setup.html   exact:    copied verbatim
//! templates/setup.html        fallback: root template, keyed by basename
//! (in-memory stub)            generated: <link …setup.css><script …setup.js>
//! ```
//!
//! A page never ends up without a file: if both template tiers miss, the
//! generated tier always succeeds. The fallback tier can be suppressed per
//! run, which warns and skips straight to generation — useful when shared
//! root templates would mask a missing page template.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`ident`] | Page identifier validation, fallback names, nested output dirs |
//! | [`config`] | The immutable run configuration: TOML loading, defaults, validation |
//! | [`resolve`] | The three-tier template cascade — the core |
//! | [`build`] | Build-start orchestration: reset, assets, entries, report |
//! | [`plugin`] | The plugin boundary a host bundler drives |
//! | [`output`] | CLI output formatting for build and check reports |
//!
//! # Design Decisions
//!
//! ## Tiers Return Hit/Miss, Not Errors
//!
//! A missing template is the normal case, not a fault: the cascade probes
//! each tier and moves on, and only configuration errors (malformed ids)
//! and broken write invariants surface as `Result` errors. Copy failures
//! inside a tier — missing file, unreadable file — simply fall through.
//!
//! ## Maud for Generated Entries
//!
//! The generated stub is rendered with [Maud](https://maud.lambda.xyz/)
//! rather than string pasting: malformed markup is a compile error and
//! interpolated names are escaped. The rendered bytes are stable, so the
//! stub's exact content is a documented contract
//! (`<link rel="stylesheet" href="<name>.css"><script src="<name>.js" type="module"></script>`).
//!
//! ## The Output Directory Is Disposable
//!
//! `dist/` is wiped at every build start and repopulated deterministically
//! from configuration plus template files. There is no incremental state,
//! no cache, and no rollback — a failed run leaves a partial tree that the
//! next run erases. This keeps repeated runs idempotent by construction.
//!
//! ## Assets Are Not Templated
//!
//! Assets are copied byte-for-byte and have no fallback tier; a missing
//! asset source is a hard configuration problem and fails the build, while
//! a missing template is absorbed by the cascade.

pub mod build;
pub mod config;
pub mod ident;
pub mod output;
pub mod plugin;
pub mod resolve;

#[cfg(test)]
pub(crate) mod test_helpers;
