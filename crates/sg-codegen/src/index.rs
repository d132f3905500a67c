//! The aggregating `index.ts` module.
//!
//! The index module imports every model module and exposes, for the whole
//! schema:
//!
//! | Declaration | Members |
//! |-------------|---------|
//! | `Model` / `ModelTypeMap` | every entity |
//! | `ModelId` / `ModelIdTypeMap` | identifiable entities |
//! | `Initializer` / `InitializerTypeMap` | creatable entities |
//!
//! followed by one export block. Every section walks the entity sequence in
//! input order; the `Id` and `Initializer` sections walk the filtered
//! subsets.
//!
//! # Layout
//!
//! ```text
//! import Users, { UsersInitializer, UsersId } from './Users';
//! import AuditLog from './AuditLog';
//!
//! type Model =
//!   | Users
//!   | AuditLog
//!
//! interface ModelTypeMap {
//!   'users': Users;
//!   'auditLog': AuditLog;
//! }
//! ...
//! export {
//!   Users, UsersInitializer, UsersId,
//!   AuditLog,
//!
//!   Model,
//!   ...
//!   InitializerTypeMap
//! };
//! ```

use camino::Utf8Path;
use sg_core::SchemaEntity;

use crate::classify::{Classification, has_identifier, id_name, initializer_name, is_creatable};
use crate::emit::GeneratedFile;
use crate::naming::NamingPolicy;

/// File stem of the index module.
pub const INDEX_STEM: &str = "index";

/// Type-level names exported after the per-model exports.
const AGGREGATE_EXPORTS: [&str; 6] = [
    "Model",
    "ModelTypeMap",
    "ModelId",
    "ModelIdTypeMap",
    "Initializer",
    "InitializerTypeMap",
];

/// Builds the index module of one schema.
///
/// # Examples
///
/// ```
/// use sg_codegen::{IndexAssembler, NamingPolicy};
/// use sg_core::{Column, SchemaEntity};
///
/// let naming = NamingPolicy::default();
/// let entities = [SchemaEntity::table("users").with_column(Column::new("id", "int4").primary())];
///
/// let lines = IndexAssembler::new(&naming).assemble(&entities);
/// assert_eq!(lines[0], "import Users, { UsersInitializer, UsersId } from './Users';");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct IndexAssembler<'a> {
    naming: &'a NamingPolicy,
}

impl<'a> IndexAssembler<'a> {
    /// Creates an assembler using `naming` for every name it prints.
    #[must_use]
    pub const fn new(naming: &'a NamingPolicy) -> Self {
        Self { naming }
    }

    /// Produces the index module as `<model_dir>/index.ts`.
    #[must_use]
    pub fn generate(&self, entities: &[SchemaEntity], model_dir: &Utf8Path) -> GeneratedFile {
        GeneratedFile::module(model_dir, INDEX_STEM, self.assemble(entities))
    }

    /// Produces the lines of the index module.
    #[must_use]
    pub fn assemble(&self, entities: &[SchemaEntity]) -> Vec<String> {
        let creatable: Vec<&SchemaEntity> = entities.iter().filter(|e| is_creatable(e)).collect();
        let identifiable: Vec<&SchemaEntity> =
            entities.iter().filter(|e| has_identifier(e)).collect();

        let mut lines = Vec::with_capacity(entities.len() * 5 + creatable.len() * 2 + 32);

        lines.extend(entities.iter().map(|entity| self.import_line(entity)));
        lines.push(String::new());

        self.push_union(&mut lines, "Model", entities.iter(), |pascal| pascal);
        lines.push(String::new());
        self.push_type_map(&mut lines, "ModelTypeMap", entities.iter(), |pascal| pascal);
        lines.push(String::new());

        self.push_union(&mut lines, "ModelId", identifiable.iter().copied(), |p| id_name(&p));
        lines.push(String::new());
        self.push_type_map(
            &mut lines,
            "ModelIdTypeMap",
            identifiable.iter().copied(),
            |p| id_name(&p),
        );
        lines.push(String::new());

        self.push_union(&mut lines, "Initializer", creatable.iter().copied(), |p| {
            initializer_name(&p)
        });
        lines.push(String::new());
        self.push_type_map(
            &mut lines,
            "InitializerTypeMap",
            creatable.iter().copied(),
            |p| initializer_name(&p),
        );
        lines.push(String::new());

        lines.push("export {".to_owned());
        lines.extend(entities.iter().map(|entity| self.export_line(entity)));
        lines.push(String::new());
        for (i, name) in AGGREGATE_EXPORTS.iter().enumerate() {
            let separator = if i + 1 < AGGREGATE_EXPORTS.len() { "," } else { "" };
            lines.push(format!("  {name}{separator}"));
        }
        lines.push("};".to_owned());

        lines
    }

    /// `import <Pascal>[, { <named> }] from './<file>';`
    fn import_line(&self, entity: &SchemaEntity) -> String {
        let pascal = self.naming.pascal_name(&entity.name);
        let file = self.naming.file_name(&entity.name);
        let named = Classification::of(entity).named_exports(&pascal);

        if named.is_empty() {
            format!("import {pascal} from './{file}';")
        } else {
            format!(
                "import {pascal}, {{ {} }} from './{file}';",
                named.join(", ")
            )
        }
    }

    /// `  <Pascal>[, <named>...],`
    fn export_line(&self, entity: &SchemaEntity) -> String {
        let pascal = self.naming.pascal_name(&entity.name);
        let named = Classification::of(entity).named_exports(&pascal);

        let mut line = format!("  {pascal}");
        for name in &named {
            line.push_str(", ");
            line.push_str(name);
        }
        line.push(',');
        line
    }

    fn push_union<'e>(
        &self,
        lines: &mut Vec<String>,
        name: &str,
        members: impl Iterator<Item = &'e SchemaEntity>,
        variant: impl Fn(String) -> String,
    ) {
        lines.push(format!("type {name} ="));
        lines.extend(
            members.map(|entity| format!("  | {}", variant(self.naming.pascal_name(&entity.name)))),
        );
    }

    fn push_type_map<'e>(
        &self,
        lines: &mut Vec<String>,
        name: &str,
        members: impl Iterator<Item = &'e SchemaEntity>,
        value: impl Fn(String) -> String,
    ) {
        lines.push(format!("interface {name} {{"));
        lines.extend(members.map(|entity| {
            format!(
                "  '{}': {};",
                self.naming.key_name(&entity.name),
                value(self.naming.pascal_name(&entity.name))
            )
        }));
        lines.push("}".to_owned());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sg_core::{Casing, Column, FIXED_TAG, TagValue};

    fn users() -> SchemaEntity {
        SchemaEntity::table("users")
            .with_column(Column::new("id", "int4").primary())
            .with_column(Column::new("email", "text"))
    }

    fn audit_log() -> SchemaEntity {
        SchemaEntity::view("audit_log").with_column(Column::new("id", "int4"))
    }

    fn composite() -> SchemaEntity {
        SchemaEntity::table("user_roles")
            .with_column(Column::new("user_id", "int4").primary())
            .with_column(Column::new("role_id", "int4").primary())
    }

    fn currencies() -> SchemaEntity {
        SchemaEntity::table("currencies")
            .with_tag(FIXED_TAG, TagValue::Flag(true))
            .with_column(Column::new("code", "char").primary())
    }

    /// Lines strictly between `start` and the next line equal to `end`.
    fn section<'l>(lines: &'l [String], start: &str, end: &str) -> &'l [String] {
        let begin = lines
            .iter()
            .position(|l| l == start)
            .expect("section start missing")
            + 1;
        let len = lines[begin..]
            .iter()
            .position(|l| l == end)
            .expect("section end missing");
        &lines[begin..begin + len]
    }

    #[test]
    fn test_users_and_audit_log_module() {
        let naming = NamingPolicy::default();
        let lines = IndexAssembler::new(&naming).assemble(&[users(), audit_log()]);

        insta::assert_snapshot!(lines.join("\n"), @r"
        import Users, { UsersInitializer, UsersId } from './Users';
        import AuditLog from './AuditLog';

        type Model =
          | Users
          | AuditLog

        interface ModelTypeMap {
          'users': Users;
          'auditLog': AuditLog;
        }

        type ModelId =
          | UsersId

        interface ModelIdTypeMap {
          'users': UsersId;
        }

        type Initializer =
          | UsersInitializer

        interface InitializerTypeMap {
          'users': UsersInitializer;
        }

        export {
          Users, UsersInitializer, UsersId,
          AuditLog,

          Model,
          ModelTypeMap,
          ModelId,
          ModelIdTypeMap,
          Initializer,
          InitializerTypeMap
        };
        ");
    }

    #[test]
    fn test_one_import_line_per_entity() {
        let naming = NamingPolicy::default();
        let entities = [users(), audit_log(), composite(), currencies()];
        let lines = IndexAssembler::new(&naming).assemble(&entities);

        let imports: Vec<&String> = lines.iter().take_while(|l| !l.is_empty()).collect();
        assert_eq!(imports.len(), entities.len());
        for (line, entity) in imports.iter().zip(&entities) {
            let pascal = naming.pascal_name(&entity.name);
            assert!(line.starts_with(&format!("import {pascal}")));
        }
    }

    #[test]
    fn test_import_named_clause_variants() {
        let naming = NamingPolicy::default();
        let lines = IndexAssembler::new(&naming).assemble(&[
            users(),
            audit_log(),
            composite(),
            currencies(),
        ]);

        assert_eq!(lines[0], "import Users, { UsersInitializer, UsersId } from './Users';");
        assert_eq!(lines[1], "import AuditLog from './AuditLog';");
        assert_eq!(lines[2], "import UserRoles, { UserRolesInitializer } from './UserRoles';");
        assert_eq!(lines[3], "import Currencies, { CurrenciesId } from './Currencies';");
    }

    #[test]
    fn test_composite_key_excluded_from_id_sections() {
        let naming = NamingPolicy::default();
        let lines = IndexAssembler::new(&naming).assemble(&[composite()]);

        assert_eq!(section(&lines, "type Model =", ""), ["  | UserRoles"]);
        assert_eq!(
            section(&lines, "interface ModelTypeMap {", "}"),
            ["  'userRoles': UserRoles;"]
        );
        assert!(section(&lines, "type ModelId =", "").is_empty());
        assert!(section(&lines, "interface ModelIdTypeMap {", "}").is_empty());
        assert_eq!(
            section(&lines, "type Initializer =", ""),
            ["  | UserRolesInitializer"]
        );
        assert_eq!(
            section(&lines, "interface InitializerTypeMap {", "}"),
            ["  'userRoles': UserRolesInitializer;"]
        );
    }

    #[test]
    fn test_fixed_table_excluded_from_initializer_sections() {
        let naming = NamingPolicy::default();
        let lines = IndexAssembler::new(&naming).assemble(&[currencies(), users()]);

        assert_eq!(
            section(&lines, "type Initializer =", ""),
            ["  | UsersInitializer"]
        );
        assert_eq!(
            section(&lines, "type ModelId =", ""),
            ["  | CurrenciesId", "  | UsersId"]
        );
        assert_eq!(
            section(&lines, "interface ModelIdTypeMap {", "}"),
            ["  'currencies': CurrenciesId;", "  'users': UsersId;"]
        );
    }

    #[test]
    fn test_sections_preserve_input_order() {
        let naming = NamingPolicy::default();
        let entities = [
            SchemaEntity::table("zebras"),
            SchemaEntity::table("apples"),
            SchemaEntity::table("mangos"),
        ];
        let lines = IndexAssembler::new(&naming).assemble(&entities);

        assert_eq!(
            section(&lines, "type Model =", ""),
            ["  | Zebras", "  | Apples", "  | Mangos"]
        );
        assert_eq!(
            section(&lines, "type Initializer =", ""),
            [
                "  | ZebrasInitializer",
                "  | ApplesInitializer",
                "  | MangosInitializer"
            ]
        );
    }

    #[test]
    fn test_export_block() {
        let naming = NamingPolicy::default();
        let lines = IndexAssembler::new(&naming).assemble(&[users(), audit_log(), composite()]);

        assert_eq!(
            section(&lines, "export {", ""),
            [
                "  Users, UsersInitializer, UsersId,",
                "  AuditLog,",
                "  UserRoles, UserRolesInitializer,",
            ]
        );
        assert_eq!(lines.last().map(String::as_str), Some("};"));
        assert_eq!(lines[lines.len() - 2], "  InitializerTypeMap");
        assert_eq!(lines[lines.len() - 7], "  Model,");
    }

    #[test]
    fn test_naming_policy_drives_paths_and_keys() {
        let naming = NamingPolicy::new(Casing::Snake, Casing::Kebab, Casing::Snake);
        let lines = IndexAssembler::new(&naming).assemble(&[audit_log()]);

        assert_eq!(lines[0], "import AuditLog from './audit-log';");
        assert_eq!(
            section(&lines, "interface ModelTypeMap {", "}"),
            ["  'audit_log': AuditLog;"]
        );
    }

    #[test]
    fn test_empty_schema() {
        let naming = NamingPolicy::default();
        let lines = IndexAssembler::new(&naming).assemble(&[]);

        assert_eq!(lines[0], "");
        assert_eq!(lines[1], "type Model =");
        assert!(section(&lines, "export {", "").is_empty());
    }

    #[test]
    fn test_idempotent() {
        let naming = NamingPolicy::default();
        let entities = [users(), audit_log(), composite(), currencies()];
        let assembler = IndexAssembler::new(&naming);

        assert_eq!(assembler.assemble(&entities), assembler.assemble(&entities));
    }

    #[test]
    fn test_generate_targets_index_module() {
        let naming = NamingPolicy::default();
        let file = IndexAssembler::new(&naming).generate(&[users()], Utf8Path::new("src/models"));

        assert_eq!(file.path, "src/models/index.ts");
        assert_eq!(file.lines[0], "import Users, { UsersInitializer, UsersId } from './Users';");
    }
}
