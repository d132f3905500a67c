//! Domain types for schema snapshots.
//!
//! # Module Organization
//!
//! - [`entity`] - Tables, views, columns, and tags
//! - [`user_type`] - User-defined enum types
//! - [`snapshot`] - Per-schema and whole-database snapshots
//! - [`type_map`] - Database type to TypeScript type mapping
//!
//! All public types are re-exported here and at the crate root:
//!
//! ```
//! use sg_core::{Column, SchemaEntity, SchemaSnapshot, TypeMap};
//! ```

pub mod entity;
pub mod snapshot;
pub mod type_map;
pub mod user_type;

pub use entity::{Column, FIXED_TAG, SchemaEntity, TagValue, Tags};
pub use snapshot::{DatabaseSnapshot, SchemaSnapshot};
pub use type_map::TypeMap;
pub use user_type::UserType;
