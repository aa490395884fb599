use clap::{Parser, Subcommand};
use entrykit::{build, config, output, resolve};
use std::path::PathBuf;

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup — trivial, called exactly once
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "entrykit")]
#[command(about = "Materialize bundler entry files and static assets")]
#[command(long_about = "\
Materialize bundler entry files and static assets

Run before your bundler: entrykit wipes the output directory, copies the
configured assets, and makes sure every declared page has an HTML entry
file - copied from a per-page template, from a root-level fallback
template, or auto-generated.

Filesystem layout:

  entrykit.toml                  # Run config (pages, assets, paths)
  templates/
  ├── index.html                 # Per-page template for id \"index\"
  ├── docs/
  │   └── setup.html             # Per-page template for id \"docs/setup\"
  └── app.html                   # Root fallback, matches any id ending in \"app\"
  dist/                          # Output - wiped on every build
  ├── index.html
  ├── docs/setup.html
  └── ...                        # Copied assets, mirrored public paths

Template resolution per page id (first hit wins):
  Exact:     templates/<id>.html
  Fallback:  templates/<basename of id>.html  (unless suppressed)
  Generated: <link …<name>.css><script …<name>.js>

Run 'entrykit gen-config' to generate a documented entrykit.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Run configuration file
    #[arg(long, default_value = "entrykit.toml", global = true)]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Reset the output directory, copy assets, materialize every entry
    Build,
    /// Validate the config and report the template tier each entry would use
    Check,
    /// Print a stock entrykit.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Build => {
            let config = config::TemplateConfig::load(&cli.config)?;
            let report = build::run(&config)?;
            output::print_build_output(&report, &config);
        }
        Command::Check => {
            let config = config::TemplateConfig::load(&cli.config)?;
            let mut resolutions = Vec::new();
            for id in config.entry_ids() {
                let tier = resolve::classify(id, &config.template_root, &config)?;
                resolutions.push((id.to_string(), tier));
            }
            output::print_check_output(&resolutions, &config);
            println!("==> Configuration is valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
