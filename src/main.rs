//! ingredient-diff: compare two product ingredient lists
//!
//! Reports the ingredients unique to each product and the relative position
//! of every shared ingredient on both labels.

#![allow(clippy::struct_excessive_bools, clippy::needless_pass_by_value)]

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use ingredient_diff::{
    cli,
    config::{self, AppConfig, CompareConfigBuilder, ConfigPreset, IngredientSource},
    matching::EmptyTokenPolicy,
    pipeline::exit_codes,
    reports::ReportFormat,
};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Build long version string with format support info
const fn build_long_version() -> &'static str {
    concat!(
        env!("CARGO_PKG_VERSION"),
        "\n\nOutput Formats:",
        "\n  summary, table, json, csv, markdown",
        "\n\nPresets:",
        "\n  default, literal, label"
    )
}

#[derive(Parser)]
#[command(name = "ingredient-diff")]
#[command(version, long_version = build_long_version())]
#[command(about = "Compare the ingredient lists of two products", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  Comparison completed
    1  Unique ingredients found (with --fail-on-unique)
    3  Error occurred

EXAMPLES:
    # Compare two lists typed on the command line
    ingredient-diff compare \"Water, Glycerin, Fragrance\" \"Water, Alcohol, Fragrance\"

    # Name the products and export the shared table as CSV
    ingredient-diff compare a.txt b.txt --from-file --name-a \"Day Cream\" --name-b \"Night Cream\" -o csv -O shared.csv

    # Label cleanup: strip qualifiers, group by category, flag misspellings
    ingredient-diff compare a.txt b.txt --from-file --preset label")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored output (also respects `NO_COLOR` env)
    #[arg(long, global = true)]
    no_color: bool,

    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Arguments for the `compare` subcommand
#[derive(Parser)]
struct CompareArgs {
    /// Ingredients of the first product (comma-separated, or a path with --from-file)
    a: String,

    /// Ingredients of the second product (comma-separated, or a path with --from-file)
    b: String,

    /// Treat A and B as paths to text files holding the lists
    #[arg(short = 'f', long)]
    from_file: bool,

    /// Display name of the first product
    #[arg(long)]
    name_a: Option<String>,

    /// Display name of the second product
    #[arg(long)]
    name_b: Option<String>,

    /// Output format (auto detects TTY: table if interactive, summary otherwise)
    #[arg(short, long, default_value = "auto")]
    output: ReportFormat,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,

    /// Start from a named preset instead of the config file (default, literal, label)
    #[arg(long)]
    preset: Option<String>,

    /// Keep blank entries (empty input, trailing commas) as the empty ingredient
    #[arg(long)]
    keep_empty_tokens: bool,

    /// Compare "aqua (water)" as "aqua"
    #[arg(long)]
    strip_parentheticals: bool,

    /// Group shared ingredients by functional category
    #[arg(long)]
    group_by_category: bool,

    /// Flag likely spelling variants between the unique lists
    #[arg(long)]
    suggest_variants: bool,

    /// Similarity threshold for spelling variants (0.0-1.0)
    #[arg(long, requires = "suggest_variants")]
    variant_threshold: Option<f64>,

    /// Print at most this many shared rows in text reports
    #[arg(long)]
    max_rows: Option<usize>,

    /// Report heading (summary, table and markdown formats)
    #[arg(long)]
    title: Option<String>,

    /// Exit with code 1 if either product has unique ingredients
    #[arg(long)]
    fail_on_unique: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare two ingredient lists
    Compare(CompareArgs),

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
    /// Generate an example .ingredient-diff.yaml in the current directory
    Init {
        /// Write the settings of a named preset instead of the commented template
        #[arg(long)]
        preset: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false).with_writer(io::stderr))
        .init();

    match run(cli) {
        Ok(code) => {
            if code != exit_codes::SUCCESS {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("Error: {e:#}");
            std::process::exit(exit_codes::ERROR);
        }
    }
}

/// Dispatch to command handlers, returning the process exit code.
fn run(cli: Cli) -> Result<i32> {
    match cli.command {
        Commands::Compare(args) => {
            let base = match &args.preset {
                Some(name) => AppConfig::from_preset(parse_preset(name)?),
                None => {
                    let (config, loaded_from) = config::load_or_default(cli.config.as_deref());
                    if let Some(path) = loaded_from {
                        tracing::debug!("Loaded config from {}", path.display());
                    }
                    config
                }
            };

            let empty_tokens = if args.keep_empty_tokens {
                EmptyTokenPolicy::Keep
            } else {
                EmptyTokenPolicy::Drop
            };
            let mut overrides = AppConfig::builder()
                .empty_tokens(empty_tokens)
                .strip_parentheticals(args.strip_parentheticals)
                .output_format(args.output)
                .output_file(args.output_file)
                .no_color(cli.no_color)
                .max_rows(args.max_rows)
                .title(args.title)
                .fail_on_unique(args.fail_on_unique)
                .quiet(cli.quiet)
                .group_by_category(args.group_by_category)
                .suggest_variants(args.suggest_variants);
            if let Some(threshold) = args.variant_threshold {
                overrides = overrides.variant_threshold(threshold);
            }

            let mut merged = base;
            merged.merge(&overrides.build());

            let (a, b) = if args.from_file {
                (
                    IngredientSource::File(PathBuf::from(args.a)),
                    IngredientSource::File(PathBuf::from(args.b)),
                )
            } else {
                (IngredientSource::Inline(args.a), IngredientSource::Inline(args.b))
            };

            let config = CompareConfigBuilder::from_app_config(merged)
                .input_a(a)
                .input_b(b)
                .name_a(args.name_a)
                .name_b(args.name_b)
                .build()?;

            cli::run_compare(config)
        }

        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "ingredient-diff", &mut io::stdout());
            Ok(exit_codes::SUCCESS)
        }

        Commands::ConfigSchema { output } => {
            let schema = config::generate_json_schema().context("failed to serialize schema")?;
            match output {
                Some(path) => {
                    std::fs::write(&path, &schema)
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
                let (config, loaded_from) = config::load_or_default(cli.config.as_deref());
                if let Some(path) = &loaded_from {
                    eprintln!("# Loaded from: {}", path.display());
                } else {
                    eprintln!("# No config file found; showing defaults");
                }
                let yaml = serde_yaml::to_string(&config).context("failed to serialize config")?;
                print!("{yaml}");
                Ok(exit_codes::SUCCESS)
            }
            ConfigAction::Path => {
                let search_paths: [Option<String>; 3] = [
                    std::env::current_dir()
                        .ok()
                        .map(|p| p.display().to_string()),
                    config::user_config_dir().map(|p| p.display().to_string()),
                    dirs::home_dir().map(|p| p.display().to_string()),
                ];
                eprintln!("Config file search paths (in order):");
                for path in search_paths.into_iter().flatten() {
                    eprintln!("  {path}");
                }
                eprintln!();
                eprintln!("Recognized file names:");
                for name in &[
                    ".ingredient-diff.yaml",
                    ".ingredient-diff.yml",
                    "ingredient-diff.yaml",
                    "ingredient-diff.yml",
                ] {
                    eprintln!("  {name}");
                }
                eprintln!();
                match config::discover_config_file(cli.config.as_deref()) {
                    Some(path) => eprintln!("Active config file: {}", path.display()),
                    None => eprintln!("No config file found."),
                }
                Ok(exit_codes::SUCCESS)
            }
            ConfigAction::Init { preset } => {
                let target = std::env::current_dir()
                    .context("cannot determine current directory")?
                    .join(".ingredient-diff.yaml");
                if target.exists() {
                    anyhow::bail!(
                        "{} already exists. Remove it first to re-initialize.",
                        target.display()
                    );
                }
                let content = match preset {
                    Some(name) => {
                        config::generate_preset_config(&AppConfig::from_preset(parse_preset(&name)?))
                    }
                    None => config::generate_full_example_config(),
                };
                std::fs::write(&target, content)
                    .with_context(|| format!("failed to write {}", target.display()))?;
                eprintln!("Created {}", target.display());
                Ok(exit_codes::SUCCESS)
            }
        },
    }
}

fn parse_preset(name: &str) -> Result<ConfigPreset> {
    ConfigPreset::from_name(name).ok_or_else(|| {
        let known: Vec<&str> = ConfigPreset::all().iter().map(ConfigPreset::name).collect();
        anyhow::anyhow!("unknown preset '{name}' (expected one of: {})", known.join(", "))
    })
}
