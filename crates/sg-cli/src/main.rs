//! CLI entry point for schemagen.
//!
//! Reads an introspected schema snapshot and writes TypeScript model
//! modules plus an aggregating `index.ts` per configured schema.
//!
//! # Usage
//!
//! ```bash
//! schemagen [OPTIONS] <COMMAND>
//!
//! # Generate models for every configured schema
//! schemagen --config schemagen.json generate --snapshot schema.json
//!
//! # Print the generated modules instead of writing them
//! schemagen generate --snapshot schema.json --dry-run
//!
//! # Show how each entity is classified and named
//! schemagen inspect --snapshot schema.json
//! ```

#![deny(clippy::all)]
#![warn(missing_docs)]

use std::io::Write;

use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};
use sg_codegen::classify::Classification;
use sg_codegen::{
    FsSink, GenerationSummary, MODULE_EXTENSION, MemorySink, NamingPolicy, generate,
};
use sg_core::{Config, DatabaseSnapshot, SchemaEntity};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

// =============================================================================
// CLI ARGUMENT TYPES
// =============================================================================

/// Generate TypeScript models from a database schema snapshot.
#[derive(Parser)]
#[command(name = "schemagen", version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    command: Commands,

    /// Path to the JSON configuration file.
    #[arg(
        short,
        long,
        global = true,
        env = "SCHEMAGEN_CONFIG",
        default_value = "schemagen.json"
    )]
    config: Utf8PathBuf,

    /// Enable verbose logging (debug level).
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored output.
    #[arg(long, global = true)]
    no_color: bool,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Generate model modules for every configured schema.
    Generate {
        /// Path to the introspected schema snapshot (JSON).
        #[arg(short, long)]
        snapshot: Utf8PathBuf,

        /// Print the modules to stdout instead of writing them.
        #[arg(long)]
        dry_run: bool,
    },

    /// Show each entity's declaration, file and key names and derived declarations.
    Inspect {
        /// Path to the introspected schema snapshot (JSON).
        #[arg(short, long)]
        snapshot: Utf8PathBuf,
    },
}

// =============================================================================
// INITIALIZATION FUNCTIONS
// =============================================================================

/// Initializes the tracing subscriber for logging.
///
/// Respects the `RUST_LOG` environment variable if set. Otherwise, uses
/// `debug` level if `--verbose` is set, or `info` level by default.
fn init_tracing(verbose: bool, no_color: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = if verbose { "debug" } else { "info" };
        EnvFilter::new(level)
    });

    // Check if colors should be disabled (flag or NO_COLOR env var)
    let use_ansi = !no_color && std::env::var("NO_COLOR").is_err();

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .with_ansi(use_ansi)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

/// Loads the configuration and the snapshot named on the command line.
fn load_inputs(
    config_path: &Utf8PathBuf,
    snapshot_path: &Utf8PathBuf,
) -> color_eyre::Result<(Config, DatabaseSnapshot)> {
    let config = Config::from_path(config_path).map_err(|e| {
        color_eyre::eyre::eyre!("Failed to load configuration {config_path}: {e}")
    })?;
    let snapshot = DatabaseSnapshot::from_path(snapshot_path)
        .map_err(|e| color_eyre::eyre::eyre!("Failed to load snapshot {snapshot_path}: {e}"))?;

    if config.schemas.is_empty() {
        return Err(color_eyre::eyre::eyre!(
            "No schemas configured in {config_path}"
        ));
    }

    Ok((config, snapshot))
}

// =============================================================================
// COMMAND IMPLEMENTATIONS
// =============================================================================

/// Generates all configured schemas, to disk or to stdout.
fn run_generate(
    config: &Config,
    snapshot: &DatabaseSnapshot,
    dry_run: bool,
) -> color_eyre::Result<()> {
    info!(schemas = config.schemas.len(), dry_run, "Starting generation");

    if dry_run {
        let mut sink = MemorySink::new();
        let summary = generate(config, snapshot, &mut sink)?;

        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        for file in &sink.files {
            writeln!(handle, "// ---- {} ----", file.path)?;
            write!(handle, "{}", file.contents())?;
            writeln!(handle)?;
        }
        print_summary(&summary);
    } else {
        let summary = generate(config, snapshot, &mut FsSink)?;
        print_summary(&summary);
    }

    Ok(())
}

/// Prints every configured schema's entities with their derived names.
fn run_inspect(config: &Config, snapshot: &DatabaseSnapshot) -> color_eyre::Result<()> {
    let naming = NamingPolicy::from_config(config);
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    writeln!(handle, "{}", casing_line(config))?;

    for schema in &config.schemas {
        let Some(schema_snapshot) = snapshot.schema(&schema.name) else {
            return Err(color_eyre::eyre::eyre!(
                "Schema '{}' not found in snapshot",
                schema.name
            ));
        };

        writeln!(handle)?;
        writeln!(handle, "Schema {} -> {}", schema.name, schema.model_folder)?;
        writeln!(
            handle,
            "  {:<28} {:<28} {:<28} {:<28} {:<10} {:<8} {}",
            "entity", "declaration", "file", "key", "kind", "create", "id"
        )?;

        for entity in schema_snapshot.entities(&schema.ignore) {
            writeln!(handle, "{}", inspect_row(&naming, &entity))?;
        }

        if !schema.ignore.is_empty() {
            writeln!(handle, "  ignored: {}", schema.ignore.join(", "))?;
        }
    }

    Ok(())
}

// =============================================================================
// OUTPUT HELPERS
// =============================================================================

/// Prints a per-schema summary of a generation run.
fn print_summary(summary: &GenerationSummary) {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    let _ = writeln!(handle);
    let _ = writeln!(handle, "Generation Summary");
    let _ = writeln!(handle, "==================");
    for schema in &summary.schemas {
        let _ = writeln!(handle);
        let _ = writeln!(handle, "{} -> {}", schema.schema, schema.model_folder);
        let _ = writeln!(handle, "  Entities:      {}", schema.entities);
        let _ = writeln!(handle, "  Creatable:     {}", schema.creatable);
        let _ = writeln!(handle, "  Identifiable:  {}", schema.identifiable);
        let _ = writeln!(handle, "  User types:    {}", schema.user_types);
        let _ = writeln!(handle, "  Files written: {}", schema.files_written);
    }
    let _ = writeln!(handle);
    let _ = writeln!(handle, "Total files: {}", summary.files_written());
}

/// Describes the configured casing profiles.
fn casing_line(config: &Config) -> String {
    format!(
        "Casing: source={} file={} key={}",
        config.source_casing, config.filename_casing, config.key_casing
    )
}

/// Formats one entity as a row of the inspect table.
fn inspect_row(naming: &NamingPolicy, entity: &SchemaEntity) -> String {
    let class = Classification::of(entity);
    let kind = if entity.is_view { "view" } else { "table" };
    let file = format!("{}.{MODULE_EXTENSION}", naming.file_name(&entity.name));
    format!(
        "  {:<28} {:<28} {:<28} {:<28} {:<10} {:<8} {}",
        entity.name,
        naming.pascal_name(&entity.name),
        file,
        naming.key_name(&entity.name),
        kind,
        yes_no(class.creatable),
        yes_no(class.identifiable),
    )
}

const fn yes_no(flag: bool) -> &'static str {
    if flag { "yes" } else { "no" }
}

// =============================================================================
// MAIN ENTRY POINT
// =============================================================================

/// Application entry point.
fn main() -> color_eyre::Result<()> {
    // 1. Install color-eyre FIRST (before any potential panics)
    color_eyre::install()?;

    // 2. Parse CLI arguments
    let cli = Cli::parse();

    // 3. Initialize tracing (handles --no-color for log output)
    init_tracing(cli.verbose, cli.no_color);

    // 4. Route to appropriate command
    match &cli.command {
        Commands::Generate { snapshot, dry_run } => {
            let (config, snapshot) = load_inputs(&cli.config, snapshot)?;
            run_generate(&config, &snapshot, *dry_run)
        }
        Commands::Inspect { snapshot } => {
            let (config, snapshot) = load_inputs(&cli.config, snapshot)?;
            run_inspect(&config, &snapshot)
        }
    }
}
