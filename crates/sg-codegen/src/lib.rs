//! TypeScript model generation from database schema snapshots.
//!
//! For every configured schema this crate writes:
//!
//! - one module per user-defined enum type ([`UserTypeGenerator`])
//! - one module per table and view ([`ModelGenerator`])
//! - an aggregating `index.ts` with unions and name-keyed type maps
//!   ([`IndexAssembler`])
//!
//! All three share a single [`NamingPolicy`], so the import paths written
//! into the index always match the module file names.
//!
//! # Example
//!
//! ```
//! use camino::Utf8Path;
//! use sg_codegen::{MemorySink, generate};
//! use sg_core::{Column, Config, DatabaseSnapshot, SchemaConfig, SchemaEntity, SchemaSnapshot};
//!
//! let mut snapshot = DatabaseSnapshot::default();
//! snapshot.schemas.insert(
//!     "public".to_owned(),
//!     SchemaSnapshot {
//!         tables: vec![SchemaEntity::table("users").with_column(Column::new("id", "int4").primary())],
//!         ..SchemaSnapshot::default()
//!     },
//! );
//!
//! let config = Config {
//!     schemas: vec![SchemaConfig::new("public", "models")],
//!     ..Config::default()
//! };
//!
//! let mut sink = MemorySink::new();
//! let summary = generate(&config, &snapshot, &mut sink)?;
//!
//! assert_eq!(summary.files_written(), 2);
//! assert!(sink.get(Utf8Path::new("models/index.ts")).is_some());
//! # Ok::<(), sg_codegen::GenerateError>(())
//! ```
//!
//! # Architecture
//!
//! ```text
//! generate (per schema, in configuration order)
//!     │
//!     ├── FileSink::prepare_dir (optional pre-delete, then create)
//!     ├── UserTypeGenerator ──┐
//!     ├── ModelGenerator ─────┼── NamingPolicy + classify
//!     └── IndexAssembler ─────┘
//! ```

#![deny(clippy::all)]
#![warn(missing_docs)]

pub mod classify;
mod emit;
mod error;
mod index;
mod model;
mod naming;
mod user_types;

pub use emit::{FileSink, FsSink, GENERATED_HEADER, GeneratedFile, MODULE_EXTENSION, MemorySink};
pub use error::{EmitError, GenerateError};
pub use index::{INDEX_STEM, IndexAssembler};
pub use model::ModelGenerator;
pub use naming::{NameTransform, NamingPolicy, Recase};
pub use user_types::UserTypeGenerator;

use camino::Utf8PathBuf;
use sg_core::{Config, DatabaseSnapshot, SchemaConfig, SchemaSnapshot, TypeMap};
use tracing::{debug, info};

/// What was generated for one schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaSummary {
    /// Schema name.
    pub schema: String,
    /// Folder the modules were written to.
    pub model_folder: Utf8PathBuf,
    /// Tables and views generated (after the ignore list).
    pub entities: usize,
    /// Entities that received an `Initializer` declaration.
    pub creatable: usize,
    /// Entities that received an `Id` declaration.
    pub identifiable: usize,
    /// User-defined type modules generated.
    pub user_types: usize,
    /// Files handed to the sink, including the index module.
    pub files_written: usize,
}

/// What was generated by a whole run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationSummary {
    /// Per-schema summaries, in processing order.
    pub schemas: Vec<SchemaSummary>,
}

impl GenerationSummary {
    /// Total files written across all schemas.
    #[must_use]
    pub fn files_written(&self) -> usize {
        self.schemas.iter().map(|s| s.files_written).sum()
    }
}

/// Generates every configured schema into `sink`.
///
/// Fails with [`GenerateError::MissingSchema`] before anything is written if
/// a configured schema is absent from the snapshot. Sink errors abort the run.
pub fn generate(
    config: &Config,
    snapshot: &DatabaseSnapshot,
    sink: &mut impl FileSink,
) -> Result<GenerationSummary, GenerateError> {
    let mut resolved = Vec::with_capacity(config.schemas.len());
    for schema in &config.schemas {
        let schema_snapshot = snapshot
            .schema(&schema.name)
            .ok_or_else(|| GenerateError::MissingSchema(schema.name.clone()))?;
        resolved.push((schema, schema_snapshot));
    }

    let naming = NamingPolicy::from_config(config);
    let type_map = config.type_map();

    let mut summary = GenerationSummary::default();
    for (schema, schema_snapshot) in resolved {
        if config.pre_delete_model_folder {
            info!(folder = %schema.model_folder, "Clearing old files");
        }
        sink.prepare_dir(&schema.model_folder, config.pre_delete_model_folder)?;

        let (files, schema_summary) = render_schema(schema, schema_snapshot, &naming, &type_map);
        for file in &files {
            sink.write(file)?;
        }

        info!(
            schema = %schema_summary.schema,
            entities = schema_summary.entities,
            creatable = schema_summary.creatable,
            identifiable = schema_summary.identifiable,
            files = schema_summary.files_written,
            "Generated schema"
        );
        summary.schemas.push(schema_summary);
    }

    Ok(summary)
}

/// Renders all modules of one schema without writing them.
///
/// Files come out in write order: user types, models, then the index.
#[must_use]
pub fn render_schema(
    schema: &SchemaConfig,
    snapshot: &SchemaSnapshot,
    naming: &NamingPolicy,
    type_map: &TypeMap,
) -> (Vec<GeneratedFile>, SchemaSummary) {
    let entities = snapshot.entities(&schema.ignore);
    if !schema.ignore.is_empty() {
        debug!(schema = %schema.name, ignore = ?schema.ignore, "Applied ignore list");
    }

    let dir = schema.model_folder.as_path();
    let mut files = Vec::with_capacity(snapshot.types.len() + entities.len() + 1);

    let user_types = UserTypeGenerator::new(naming);
    files.extend(snapshot.types.iter().map(|t| user_types.generate(t, dir)));

    let models = ModelGenerator::new(naming, type_map, &snapshot.types);
    files.extend(entities.iter().map(|entity| models.generate(entity, dir)));

    files.push(IndexAssembler::new(naming).generate(&entities, dir));

    let summary = SchemaSummary {
        schema: schema.name.clone(),
        model_folder: schema.model_folder.clone(),
        entities: entities.len(),
        creatable: entities.iter().filter(|e| classify::is_creatable(e)).count(),
        identifiable: entities.iter().filter(|e| classify::has_identifier(e)).count(),
        user_types: snapshot.types.len(),
        files_written: files.len(),
    };

    (files, summary)
}
