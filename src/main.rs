//! sbom-delta: path-level SBOM reconciliation and binary signature identification

#![allow(clippy::needless_pass_by_value)]

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use sbom_delta::{
    cli,
    config::{
        AppConfig, DiffConfig, DiffPaths, DiffSettings, IdentifyConfig, IdentifySettings,
        OutputConfig, Validatable,
    },
    diff::ComparatorKind,
    pipeline::exit_codes,
    reports::ReportFormat,
};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "sbom-delta")]
#[command(author = "Binarly.io")]
#[command(version)]
#[command(
    about = "Path-level SBOM reconciliation and binary signature identification",
    long_about = None
)]
#[command(after_help = "EXIT CODES:
    0  Success (differences alone do not fail)
    1  Differences reported with --fail-on-change
    3  Error occurred

EXAMPLES:
    # Report what changed between two inventories
    sbom-delta diff before.json after.json

    # Check size as well as SHA-256, failing a CI job on any difference
    sbom-delta diff before.json after.json --compare sha256,size --fail-on-change

    # Classify files by their leading bytes
    sbom-delta identify /usr/bin/ls firmware.bin")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Path to configuration file
    #[arg(long, global = true, env = "SBOM_DELTA_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Arguments for the `diff` subcommand
#[derive(Parser)]
struct DiffArgs {
    /// Path to inventory A (the baseline)
    a: PathBuf,

    /// Path to inventory B
    b: PathBuf,

    /// Criteria to check for paths present in both inventories
    #[arg(long, value_enum, value_delimiter = ',')]
    compare: Vec<ComparatorKind>,

    /// Output format [default: text]
    #[arg(short, long, value_enum)]
    output: Option<ReportFormat>,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,

    /// Exit with code 1 if any difference is reported
    #[arg(long)]
    fail_on_change: bool,
}

/// Arguments for the `identify` subcommand
#[derive(Parser)]
struct IdentifyArgs {
    /// Files to classify
    #[arg(required = true)]
    paths: Vec<PathBuf>,

    /// Only trust signature bytes; never fall back to the file extension
    #[arg(long)]
    no_extension: bool,

    /// Output format [default: text]
    #[arg(short, long, value_enum)]
    output: Option<ReportFormat>,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Reconcile two inventories path by path
    Diff(DiffArgs),

    /// Classify files by their signature bytes
    Identify(IdentifyArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Generate JSON Schema for the config file format
    ConfigSchema {
        /// Write schema to file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show, discover, or initialize configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Sub-subcommands for the `config` command
#[derive(Subcommand)]
enum ConfigAction {
    /// Print current effective configuration (merged from defaults + file)
    Show,
    /// Print config file search paths and discovered config file
    Path,
    /// Generate an example .sbom-delta.yaml in the current directory
    Init,
}

fn main() {
    let cli = Cli::parse();

    // Logs go to stderr so stdout carries only the report
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .init();

    let code = match run(cli) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("{e:#}");
            exit_codes::ERROR
        }
    };
    std::process::exit(code);
}

/// Resolve the effective config: file values, then CLI overrides on top.
fn resolve_config(cli: &Cli, overrides: &AppConfig) -> AppConfig {
    let (config, loaded_from) =
        AppConfig::from_file_with_overrides(cli.config.as_deref(), overrides);
    if let Some(path) = loaded_from {
        tracing::debug!("Loaded config from {}", path.display());
    }
    for error in config.validate() {
        tracing::warn!("Config: {error}");
    }
    config
}

fn run(cli: Cli) -> Result<i32> {
    match &cli.command {
        Commands::Diff(args) => {
            let overrides = AppConfig {
                diff: DiffSettings {
                    comparators: args.compare.clone(),
                    fail_on_change: args.fail_on_change,
                },
                identify: IdentifySettings::default(),
                output: OutputConfig {
                    format: args.output,
                    file: args.output_file.clone(),
                },
            };
            let app = resolve_config(&cli, &overrides);
            let paths = DiffPaths {
                a: args.a.clone(),
                b: args.b.clone(),
            };
            cli::run_diff(DiffConfig::from_app(paths, &app, cli.quiet))
        }

        Commands::Identify(args) => {
            let overrides = AppConfig {
                diff: DiffSettings::default(),
                identify: IdentifySettings {
                    use_extensions: !args.no_extension,
                },
                output: OutputConfig {
                    format: args.output,
                    file: args.output_file.clone(),
                },
            };
            let app = resolve_config(&cli, &overrides);
            cli::run_identify(IdentifyConfig::from_app(args.paths.clone(), &app, cli.quiet))
        }

        Commands::Completions { shell } => {
            generate(*shell, &mut Cli::command(), "sbom-delta", &mut io::stdout());
            Ok(exit_codes::SUCCESS)
        }

        Commands::ConfigSchema { output } => {
            let schema = sbom_delta::config::generate_json_schema()
                .context("failed to generate config schema")?;
            match output {
                Some(path) => {
                    std::fs::write(path, &schema)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    eprintln!("Schema written to {}", path.display());
                }
                None => {
                    println!("{schema}");
                }
            }
            Ok(exit_codes::SUCCESS)
        }

        Commands::Config { action } => match action {
            ConfigAction::Show => {
                let (config, loaded_from) =
                    sbom_delta::config::load_or_default(cli.config.as_deref());
                if let Some(path) = &loaded_from {
                    eprintln!("# Loaded from: {}", path.display());
                } else {
                    eprintln!("# No config file found; showing defaults");
                }
                let yaml =
                    serde_yaml_ng::to_string(&config).context("failed to serialize config")?;
                print!("{yaml}");
                Ok(exit_codes::SUCCESS)
            }
            ConfigAction::Path => {
                eprintln!("Config file search paths (in order):");
                for dir in sbom_delta::config::config_search_dirs() {
                    eprintln!("  {}", dir.display());
                }
                eprintln!();
                eprintln!("Recognized file names:");
                for name in sbom_delta::config::CONFIG_FILE_NAMES {
                    eprintln!("  {name}");
                }
                eprintln!();
                match sbom_delta::config::discover_config_file(cli.config.as_deref()) {
                    Some(path) => eprintln!("Active config file: {}", path.display()),
                    None => eprintln!("No config file found."),
                }
                Ok(exit_codes::SUCCESS)
            }
            ConfigAction::Init => {
                let target = std::env::current_dir()
                    .context("cannot determine current directory")?
                    .join(".sbom-delta.yaml");
                if target.exists() {
                    anyhow::bail!(
                        "{} already exists. Remove it first to re-initialize.",
                        target.display()
                    );
                }
                let content = sbom_delta::config::generate_example_config();
                std::fs::write(&target, content)
                    .with_context(|| format!("failed to write {}", target.display()))?;
                eprintln!("Created {}", target.display());
                Ok(exit_codes::SUCCESS)
            }
        },
    }
}
