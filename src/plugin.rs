//! Plugin boundary exposed to a host bundler.
//!
//! entrykit integrates as a named plugin with a single lifecycle hook. The
//! host calls [`Plugin::on_build_start`] before its own pipeline reads the
//! output directory; the hook runs synchronously, so completion of the call
//! is the ordering guarantee.

use crate::build::{self, BuildError, BuildReport};
use crate::config::TemplateConfig;

/// A named bundler plugin. entrykit registers exactly one hook: build
/// start. No other lifecycle points are observed.
pub trait Plugin {
    fn name(&self) -> &str;

    /// Materialize the output directory. The directory is complete when
    /// this returns `Ok`.
    fn on_build_start(&self) -> Result<BuildReport, BuildError>;
}

/// The entry-template plugin over one immutable [`TemplateConfig`].
pub struct TemplatePlugin {
    config: TemplateConfig,
}

/// Build the plugin from a run configuration.
pub fn auto_templates(config: TemplateConfig) -> TemplatePlugin {
    TemplatePlugin { config }
}

impl Plugin for TemplatePlugin {
    fn name(&self) -> &str {
        "templates"
    }

    fn on_build_start(&self) -> Result<BuildReport, BuildError> {
        build::run(&self.config)
    }
}
