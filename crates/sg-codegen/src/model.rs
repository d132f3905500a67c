//! Per-entity model modules.
//!
//! Each table or view gets `<model_dir>/<file>.ts` declaring:
//!
//! - default imports for the user-defined types its columns use
//! - `export type <Pascal>Id` when the entity is identifiable
//! - `export default interface <Pascal>` with one property per column
//! - `export interface <Pascal>Initializer` when the entity is creatable
//!
//! The `Id` and `Initializer` declarations follow [`Classification`], the
//! same rule the index module uses for its imports.

use camino::Utf8Path;
use sg_core::{Column, FxHashSet, SchemaEntity, TypeMap, UserType};
use tracing::warn;

use crate::classify::{Classification, id_name, initializer_name};
use crate::emit::GeneratedFile;
use crate::naming::NamingPolicy;

/// TypeScript type used when a database type has no mapping.
const FALLBACK_TYPE: &str = "unknown";

/// Generates model modules for the entities of one schema.
#[derive(Debug)]
pub struct ModelGenerator<'a> {
    naming: &'a NamingPolicy,
    type_map: &'a TypeMap,
    user_types: FxHashSet<&'a str>,
}

impl<'a> ModelGenerator<'a> {
    /// Creates a generator resolving column types through `type_map`, then
    /// through the schema's `user_types`.
    #[must_use]
    pub fn new(naming: &'a NamingPolicy, type_map: &'a TypeMap, user_types: &'a [UserType]) -> Self {
        Self {
            naming,
            type_map,
            user_types: user_types.iter().map(|t| t.name.as_str()).collect(),
        }
    }

    /// Produces the module for `entity` inside `model_dir`.
    #[must_use]
    pub fn generate(&self, entity: &SchemaEntity, model_dir: &Utf8Path) -> GeneratedFile {
        GeneratedFile::module(
            model_dir,
            &self.naming.file_name(&entity.name),
            self.render(entity),
        )
    }

    /// Produces the lines of the module for `entity`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sg_codegen::{ModelGenerator, NamingPolicy};
    /// use sg_core::{Column, SchemaEntity, TypeMap};
    ///
    /// let naming = NamingPolicy::default();
    /// let type_map = TypeMap::default();
    /// let generator = ModelGenerator::new(&naming, &type_map, &[]);
    ///
    /// let view = SchemaEntity::view("active_users").with_column(Column::new("email", "text"));
    /// assert_eq!(
    ///     generator.render(&view),
    ///     ["export default interface ActiveUsers {", "  email: string;", "}"]
    /// );
    /// ```
    #[must_use]
    pub fn render(&self, entity: &SchemaEntity) -> Vec<String> {
        let pascal = self.naming.pascal_name(&entity.name);
        let class = Classification::of(entity);
        let mut lines = Vec::with_capacity(entity.columns.len() * 4 + 8);

        let mut imported = FxHashSet::default();
        for column in &entity.columns {
            let type_name = column.type_name.as_str();
            if self.user_types.contains(type_name) && imported.insert(type_name) {
                lines.push(format!(
                    "import {} from './{}';",
                    self.naming.pascal_name(type_name),
                    self.naming.file_name(type_name)
                ));
            }
        }
        if !imported.is_empty() {
            lines.push(String::new());
        }

        let id_type = class.identifiable.then(|| id_name(&pascal));
        if let (Some(id_type), Some(key)) = (&id_type, entity.primary_keys().next()) {
            lines.push(format!(
                "export type {id_type} = {} & {{ __flavor?: '{}' }};",
                self.base_type(entity, key),
                escape_single_quoted(&entity.name)
            ));
            lines.push(String::new());
        }

        push_doc(&mut lines, "", entity.comment.as_deref());
        lines.push(format!("export default interface {pascal} {{"));
        for column in &entity.columns {
            push_doc(&mut lines, "  ", column.comment.as_deref());
            lines.push(format!(
                "  {}: {};",
                column.name,
                self.property_type(entity, column, id_type.as_deref())
            ));
        }
        lines.push("}".to_owned());

        if class.creatable {
            lines.push(String::new());
            lines.push(format!(
                "export interface {} {{",
                initializer_name(&pascal)
            ));
            for column in &entity.columns {
                push_doc(&mut lines, "  ", column.comment.as_deref());
                if let Some(default) = &column.default_value {
                    lines.push(format!("  /** Default value: {default} */"));
                }
                let optional = if column.nullable || column.default_value.is_some() {
                    "?"
                } else {
                    ""
                };
                lines.push(format!(
                    "  {}{optional}: {};",
                    column.name,
                    self.property_type(entity, column, id_type.as_deref())
                ));
            }
            lines.push("}".to_owned());
        }

        lines
    }

    /// Property type of `column`, including array and null modifiers.
    fn property_type(&self, entity: &SchemaEntity, column: &Column, id_type: Option<&str>) -> String {
        let mut ty = match id_type {
            Some(id_type) if column.is_primary => id_type.to_owned(),
            _ => self.base_type(entity, column),
        };
        if column.is_array {
            ty.push_str("[]");
        }
        if column.nullable {
            ty.push_str(" | null");
        }
        ty
    }

    /// TypeScript type for the database type of `column`.
    fn base_type(&self, entity: &SchemaEntity, column: &Column) -> String {
        if let Some(mapped) = self.type_map.get(&column.type_name) {
            return mapped.to_owned();
        }
        if self.user_types.contains(column.type_name.as_str()) {
            return self.naming.pascal_name(&column.type_name);
        }

        warn!(
            entity = %entity.name,
            column = %column.name,
            db_type = %column.type_name,
            fallback = FALLBACK_TYPE,
            "No TypeScript mapping for column type"
        );
        FALLBACK_TYPE.to_owned()
    }
}

/// Pushes a JSDoc comment for `text`, one `*` line per input line.
pub(crate) fn push_doc(lines: &mut Vec<String>, indent: &str, text: Option<&str>) {
    let Some(text) = text.map(str::trim).filter(|t| !t.is_empty()) else {
        return;
    };

    if !text.contains('\n') {
        lines.push(format!("{indent}/** {text} */"));
        return;
    }

    lines.push(format!("{indent}/**"));
    for line in text.lines() {
        let line = line.trim_end();
        if line.is_empty() {
            lines.push(format!("{indent} *"));
        } else {
            lines.push(format!("{indent} * {line}"));
        }
    }
    lines.push(format!("{indent} */"));
}

/// Escapes `value` for use inside a single-quoted TypeScript string.
pub(crate) fn escape_single_quoted(value: &str) -> String {
    value.replace('\\', "\\\\").replace('\'', "\\'")
}
