use clap::{Parser, Subcommand};
use simple_landing::types::ArtifactKind;
use simple_landing::{config, generate, output, plan::PagePlan};
use std::io::Write;
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, fmt};

/// Config layers shared by every command that generates or inspects a page.
#[derive(clap::Args, Clone)]
struct ConfigArgs {
    /// Page config file (TOML or JSON). Repeat to layer; later files win.
    #[arg(short, long = "config", value_name = "FILE", required = true)]
    configs: Vec<PathBuf>,
}

impl ConfigArgs {
    fn load(&self) -> Result<config::PageConfig, config::ConfigError> {
        config::load_layered(&self.configs)
    }
}

#[derive(Parser)]
#[command(name = "simple-landing")]
#[command(about = "Generate a single-page product landing site from a config file")]
#[command(long_about = "\
Generate a single-page product landing site from a config file

One config describes the product, its visual style, the optional sections to
show and the interactive features to enable. One build produces four files:

  dist/
  ├── index.html       # the page, links styles.css
  ├── styles.css       # complete stylesheet
  ├── script.js        # behavior script (omitted when nothing is interactive)
  └── preview.html     # self-contained copy with the stylesheet inlined

Config layering: stock defaults ← first --config ← second --config ← ...
Each layer only needs the keys it changes.

Run 'simple-landing gen-config' to generate a documented page.toml.")]
#[command(version)]
struct Cli {
    /// Enable debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate the page and write it to the output directory
    Build {
        #[command(flatten)]
        config: ConfigArgs,

        /// Output directory
        #[arg(short, long, default_value = "dist")]
        output: PathBuf,

        /// Also write the whole artifact as one JSON document
        #[arg(long, value_name = "FILE")]
        json: Option<PathBuf>,
    },
    /// Generate the page and write one artifact to stdout
    Print {
        #[command(flatten)]
        config: ConfigArgs,

        /// Which artifact to print
        #[arg(value_enum)]
        part: ArtifactKind,
    },
    /// Report config values the generator would silently fall back on
    Check {
        #[command(flatten)]
        config: ConfigArgs,

        /// Fail on any reported issue
        #[arg(long)]
        strict: bool,
    },
    /// Print a stock page.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Build {
            config: layers,
            output: output_dir,
            json,
        } => {
            let page = layers.load()?;
            let plan = PagePlan::resolve(&page);
            let artifact = generate::generate(&page);
            let written = generate::write_site(&artifact, &output_dir)?;
            if let Some(json_path) = json {
                generate::write_artifact_json(&artifact, &json_path)?;
            }
            output::print_build_output(&page, &plan, &artifact, &written);
        }
        Command::Print {
            config: layers,
            part,
        } => {
            let page = layers.load()?;
            let artifact = generate::generate(&page);
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(artifact.part(part).as_bytes())?;
            stdout.flush()?;
        }
        Command::Check {
            config: layers,
            strict,
        } => {
            let page = layers.load()?;
            let issues = config::lint(&page);
            output::print_check_output(&issues);
            if strict {
                config::validate_strict(&page)?;
            }
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Log to stderr so `print` output on stdout stays byte-exact.
fn init_tracing(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
