//! Introspected schema snapshots.
//!
//! The introspection step runs outside this workspace and hands over a JSON
//! document shaped like [`DatabaseSnapshot`]:
//!
//! ```json
//! {
//!   "schemas": {
//!     "public": {
//!       "tables": [{ "name": "users", "columns": [{ "name": "id", "type": "int4", "is_primary": true }] }],
//!       "views": [],
//!       "types": [{ "name": "mood", "values": ["sad", "happy"] }]
//!     }
//!   }
//! }
//! ```

use std::collections::BTreeMap;

use camino::Utf8Path;
use serde::{Deserialize, Serialize};

use super::{SchemaEntity, UserType};
use crate::error::ConfigError;

/// Tables, views and user-defined types of one database schema.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchemaSnapshot {
    /// Tables in introspection order.
    pub tables: Vec<SchemaEntity>,

    /// Views in introspection order.
    pub views: Vec<SchemaEntity>,

    /// User-defined enum types.
    pub types: Vec<UserType>,
}

impl SchemaSnapshot {
    /// Returns the ordered entity sequence for code generation.
    ///
    /// Tables come first, then views. Every view is marked with
    /// `is_view = true` whatever the snapshot says, and any entity whose
    /// name is listed in `ignore` is left out.
    ///
    /// # Examples
    ///
    /// ```
    /// use sg_core::{SchemaEntity, SchemaSnapshot};
    ///
    /// let snapshot = SchemaSnapshot {
    ///     tables: vec![SchemaEntity::table("users"), SchemaEntity::table("knex_migrations")],
    ///     views: vec![SchemaEntity::table("active_users")],
    ///     types: Vec::new(),
    /// };
    ///
    /// let entities = snapshot.entities(&["knex_migrations".to_owned()]);
    /// let names: Vec<_> = entities.iter().map(|e| e.name.as_str()).collect();
    /// assert_eq!(names, ["users", "active_users"]);
    /// assert!(entities[1].is_view);
    /// ```
    #[must_use]
    pub fn entities(&self, ignore: &[String]) -> Vec<SchemaEntity> {
        let tables = self.tables.iter().cloned().map(|mut table| {
            table.is_view = false;
            table
        });
        let views = self.views.iter().cloned().map(|mut view| {
            view.is_view = true;
            view
        });

        tables
            .chain(views)
            .filter(|entity| !ignore.contains(&entity.name))
            .collect()
    }
}

/// Snapshot of every introspected schema, keyed by schema name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseSnapshot {
    /// Schemas keyed by name.
    pub schemas: BTreeMap<String, SchemaSnapshot>,
}

impl DatabaseSnapshot {
    /// Parses a snapshot from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a snapshot file.
    pub fn from_path(path: &Utf8Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Looks up a schema by name.
    #[must_use]
    pub fn schema(&self, name: &str) -> Option<&SchemaSnapshot> {
        self.schemas.get(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entities_orders_tables_before_views() {
        let snapshot = SchemaSnapshot {
            tables: vec![SchemaEntity::table("b"), SchemaEntity::table("a")],
            views: vec![SchemaEntity::view("v")],
            types: Vec::new(),
        };
        let names: Vec<_> = snapshot
            .entities(&[])
            .into_iter()
            .map(|e| e.name)
            .collect();
        assert_eq!(names, ["b", "a", "v"]);
    }

    #[test]
    fn test_entities_forces_view_flag() {
        let mut table = SchemaEntity::table("t");
        table.is_view = true;
        let snapshot = SchemaSnapshot {
            tables: vec![table],
            views: vec![SchemaEntity::table("v")],
            types: Vec::new(),
        };
        let entities = snapshot.entities(&[]);
        assert!(!entities[0].is_view);
        assert!(entities[1].is_view);
    }

    #[test]
    fn test_entities_filters_ignored_views_too() {
        let snapshot = SchemaSnapshot {
            tables: vec![SchemaEntity::table("users")],
            views: vec![SchemaEntity::view("pg_stat")],
            types: Vec::new(),
        };
        let entities = snapshot.entities(&["pg_stat".to_owned()]);
        assert_eq!(entities.len(), 1);
        assert_eq!(entities[0].name, "users");
    }

    #[test]
    fn test_database_snapshot_from_json() {
        let json = r#"{
            "schemas": {
                "public": {
                    "tables": [{ "name": "users", "columns": [{ "name": "id", "type": "int4", "is_primary": true }] }],
                    "types": [{ "name": "mood", "values": ["sad", "happy"] }]
                }
            }
        }"#;
        let snapshot = DatabaseSnapshot::from_json_str(json).unwrap();
        let public = snapshot.schema("public").unwrap();

        assert_eq!(public.tables.len(), 1);
        assert!(public.views.is_empty());
        assert_eq!(public.types[0].name, "mood");
        assert!(snapshot.schema("other").is_none());
    }

    #[test]
    fn test_database_snapshot_invalid_json() {
        let result = DatabaseSnapshot::from_json_str("{ not json");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }
}
