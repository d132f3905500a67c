//! Tables, views, and their columns.
//!
//! A [`SchemaEntity`] is one table or view as reported by the introspection
//! step. Entities are immutable for the duration of a generation run.
//!
//! # Examples
//!
//! ```
//! use sg_core::{Column, SchemaEntity};
//!
//! let users = SchemaEntity::table("users")
//!     .with_column(Column::new("id", "int4").primary())
//!     .with_column(Column::new("email", "text"));
//!
//! assert_eq!(users.primary_key_count(), 1);
//! assert!(!users.is_view);
//! ```

use serde::{Deserialize, Serialize};

use crate::FxHashMap;

/// The tag that marks a table as fixed (read-only reference data).
pub const FIXED_TAG: &str = "fixed";

/// The value attached to an entity tag.
///
/// Tags are bare flags (`@fixed`) or carry a value (`@owner:billing`,
/// `@fixed:1`). A tag may also be present with no value at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TagValue {
    /// A tag present without a value (`null`).
    Null,
    /// A boolean flag.
    Flag(bool),
    /// A numeric value.
    Number(serde_json::Number),
    /// A textual value.
    Text(String),
}

impl TagValue {
    /// Returns `true` if the tag counts as set.
    ///
    /// `null`, `false`, `0`, `NaN` and `""` are falsy; everything else is
    /// truthy.
    ///
    /// # Examples
    ///
    /// ```
    /// use sg_core::TagValue;
    ///
    /// assert!(TagValue::Flag(true).is_truthy());
    /// assert!(!TagValue::Flag(false).is_truthy());
    /// assert!(TagValue::Number(1_u8.into()).is_truthy());
    /// assert!(!TagValue::Number(0_u8.into()).is_truthy());
    /// assert!(TagValue::Text("yes".to_owned()).is_truthy());
    /// assert!(!TagValue::Text(String::new()).is_truthy());
    /// assert!(!TagValue::Null.is_truthy());
    /// ```
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Null => false,
            Self::Flag(flag) => *flag,
            Self::Number(number) => number
                .as_f64()
                .is_some_and(|value| value != 0.0 && !value.is_nan()),
            Self::Text(text) => !text.is_empty(),
        }
    }
}

/// Tags attached to an entity, keyed by tag name.
pub type Tags = FxHashMap<String, TagValue>;

/// A single column of a table or view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Column {
    /// Column name as stored in the database.
    pub name: String,

    /// Database type name (e.g. `int4`, `text`, or a user-defined enum).
    #[serde(rename = "type")]
    pub type_name: String,

    /// Whether this column is part of the primary key.
    pub is_primary: bool,

    /// Whether the column accepts `NULL`.
    pub nullable: bool,

    /// Whether the column holds an array of `type_name`.
    pub is_array: bool,

    /// Default value expression, if any.
    pub default_value: Option<String>,

    /// Column comment, if any.
    pub comment: Option<String>,
}

impl Column {
    /// Creates a non-null, non-primary column.
    #[must_use]
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            ..Self::default()
        }
    }

    /// Marks the column as part of the primary key.
    #[must_use]
    pub fn primary(mut self) -> Self {
        self.is_primary = true;
        self
    }

    /// Marks the column as nullable.
    #[must_use]
    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    /// Marks the column as an array column.
    #[must_use]
    pub fn array(mut self) -> Self {
        self.is_array = true;
        self
    }

    /// Sets the default value expression.
    #[must_use]
    pub fn with_default(mut self, expr: impl Into<String>) -> Self {
        self.default_value = Some(expr.into());
        self
    }

    /// Sets the column comment.
    #[must_use]
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }
}

/// One table or view of a database schema.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchemaEntity {
    /// Entity name, unique within its schema.
    pub name: String,

    /// Whether the entity is a view.
    pub is_view: bool,

    /// Tags parsed from the entity comment.
    pub tags: Tags,

    /// Entity comment, if any.
    pub comment: Option<String>,

    /// Columns in declaration order.
    pub columns: Vec<Column>,
}

impl SchemaEntity {
    /// Creates an empty table.
    #[must_use]
    pub fn table(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Creates an empty view.
    #[must_use]
    pub fn view(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_view: true,
            ..Self::default()
        }
    }

    /// Appends a column.
    #[must_use]
    pub fn with_column(mut self, column: Column) -> Self {
        self.columns.push(column);
        self
    }

    /// Sets a tag.
    #[must_use]
    pub fn with_tag(mut self, name: impl Into<String>, value: TagValue) -> Self {
        self.tags.insert(name.into(), value);
        self
    }

    /// Sets the entity comment.
    #[must_use]
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Returns `true` if the tag `name` is present and truthy.
    #[must_use]
    pub fn has_tag(&self, name: &str) -> bool {
        self.tags.get(name).is_some_and(TagValue::is_truthy)
    }

    /// Number of columns flagged as primary key.
    #[must_use]
    pub fn primary_key_count(&self) -> usize {
        self.columns.iter().filter(|c| c.is_primary).count()
    }

    /// Iterates over the primary key columns in declaration order.
    pub fn primary_keys(&self) -> impl Iterator<Item = &Column> {
        self.columns.iter().filter(|c| c.is_primary)
    }
}
