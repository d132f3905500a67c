//! Core types, casing profiles, and configuration for schemagen.
//!
//! This crate provides the foundational types used across the workspace:
//!
//! - Schema snapshot types ([`SchemaEntity`], [`Column`], [`UserType`])
//! - Casing profiles for database names ([`Casing`])
//! - The database-to-TypeScript [`TypeMap`]
//! - Configuration structures ([`Config`], [`SchemaConfig`])
//! - Error types ([`ConfigError`])

#![deny(clippy::all)]
#![warn(missing_docs)]

pub mod casing;
pub mod config;
pub mod error;
pub mod types;

pub use casing::Casing;
pub use config::{Config, SchemaConfig};
pub use error::ConfigError;
pub use types::{
    Column, DatabaseSnapshot, FIXED_TAG, SchemaEntity, SchemaSnapshot, TagValue, Tags, TypeMap,
    UserType,
};

/// A [`HashMap`](std::collections::HashMap) using the Fx hash algorithm.
pub type FxHashMap<K, V> = rustc_hash::FxHashMap<K, V>;

/// A [`HashSet`](std::collections::HashSet) using the Fx hash algorithm.
pub type FxHashSet<V> = rustc_hash::FxHashSet<V>;
