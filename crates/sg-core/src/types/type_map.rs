//! Database type to TypeScript type mapping.
//!
//! [`TypeMap`] is a plain value: the built-in Postgres table is produced by
//! [`TypeMap::default`] and caller overrides are merged with
//! [`TypeMap::with_overrides`] at call time.
//!
//! # Examples
//!
//! ```
//! use sg_core::{FxHashMap, TypeMap};
//!
//! let mut custom = FxHashMap::default();
//! custom.insert("jsonb".to_owned(), "Record<string, unknown>".to_owned());
//! custom.insert("uuid".to_owned(), "string".to_owned());
//!
//! let map = TypeMap::default().with_overrides(&custom);
//! assert_eq!(map.get("int4"), Some("number"));
//! assert_eq!(map.get("jsonb"), Some("Record<string, unknown>"));
//! assert_eq!(map.get("uuid"), Some("string"));
//! ```

use crate::FxHashMap;

/// Built-in Postgres type mappings.
const DEFAULT_MAPPINGS: &[(&str, &str)] = &[
    ("int2", "number"),
    ("int4", "number"),
    ("float4", "number"),
    ("numeric", "number"),
    ("bool", "boolean"),
    ("json", "unknown"),
    ("jsonb", "unknown"),
    ("char", "string"),
    ("varchar", "string"),
    ("text", "string"),
    ("date", "Date"),
    ("time", "Date"),
    ("timetz", "Date"),
    ("timestamp", "Date"),
    ("timestamptz", "Date"),
];

/// Mapping from database type names to TypeScript type expressions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeMap {
    entries: FxHashMap<String, String>,
}

impl TypeMap {
    /// Returns a copy of this map with `overrides` merged on top.
    ///
    /// An override replaces the mapping for an existing type.
    #[must_use]
    pub fn with_overrides(&self, overrides: &FxHashMap<String, String>) -> Self {
        let mut entries = self.entries.clone();
        entries.extend(
            overrides
                .iter()
                .map(|(db_type, ts_type)| (db_type.clone(), ts_type.clone())),
        );
        Self { entries }
    }

    /// Looks up the TypeScript type for a database type.
    #[must_use]
    pub fn get(&self, db_type: &str) -> Option<&str> {
        self.entries.get(db_type).map(String::as_str)
    }
}

impl Default for TypeMap {
    fn default() -> Self {
        let entries = DEFAULT_MAPPINGS
            .iter()
            .map(|&(db_type, ts_type)| (db_type.to_owned(), ts_type.to_owned()))
            .collect();
        Self { entries }
    }
}
