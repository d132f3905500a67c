//! Model classification.
//!
//! Decides which declarations an entity gets:
//!
//! - **fixed**: a view, or a table carrying a truthy `fixed` tag. Fixed
//!   entities get no `Initializer` declaration.
//! - **identifiable**: exactly one column is flagged as primary key. Only
//!   identifiable entities get an `Id` declaration; composite primary keys
//!   are skipped.
//!
//! Every generator goes through these functions so the model modules and
//! the index module always agree on an entity's declarations.

use sg_core::{FIXED_TAG, SchemaEntity};
use smallvec::SmallVec;

/// Returns `true` if the entity is a view or tagged as fixed.
///
/// # Examples
///
/// ```
/// use sg_codegen::classify::is_fixed;
/// use sg_core::{FIXED_TAG, SchemaEntity, TagValue};
///
/// assert!(is_fixed(&SchemaEntity::view("active_users")));
/// assert!(is_fixed(&SchemaEntity::table("currencies").with_tag(FIXED_TAG, TagValue::Flag(true))));
/// assert!(!is_fixed(&SchemaEntity::table("users")));
/// ```
#[must_use]
pub fn is_fixed(entity: &SchemaEntity) -> bool {
    entity.is_view || entity.has_tag(FIXED_TAG)
}

/// Returns `true` if the entity has exactly one primary key column.
#[must_use]
pub fn has_identifier(entity: &SchemaEntity) -> bool {
    entity.primary_key_count() == 1
}

/// Returns `true` if rows of this entity can be created by clients.
#[must_use]
pub fn is_creatable(entity: &SchemaEntity) -> bool {
    !is_fixed(entity)
}

/// The derived declaration set of one entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    /// The entity gets an `Initializer` declaration.
    pub creatable: bool,
    /// The entity gets an `Id` declaration.
    pub identifiable: bool,
}

impl Classification {
    /// Classifies an entity.
    #[must_use]
    pub fn of(entity: &SchemaEntity) -> Self {
        Self {
            creatable: is_creatable(entity),
            identifiable: has_identifier(entity),
        }
    }

    /// Named exports besides the default declaration, Initializer before Id.
    ///
    /// # Examples
    ///
    /// ```
    /// use sg_codegen::classify::Classification;
    ///
    /// let both = Classification { creatable: true, identifiable: true };
    /// assert_eq!(both.named_exports("Users").as_slice(), ["UsersInitializer", "UsersId"]);
    ///
    /// let neither = Classification { creatable: false, identifiable: false };
    /// assert!(neither.named_exports("AuditLog").is_empty());
    /// ```
    #[must_use]
    pub fn named_exports(self, pascal: &str) -> SmallVec<[String; 2]> {
        let mut names = SmallVec::new();
        if self.creatable {
            names.push(initializer_name(pascal));
        }
        if self.identifiable {
            names.push(id_name(pascal));
        }
        names
    }
}

/// Name of the initializer declaration for a pascal-cased model name.
#[must_use]
pub fn initializer_name(pascal: &str) -> String {
    format!("{pascal}Initializer")
}

/// Name of the identifier declaration for a pascal-cased model name.
#[must_use]
pub fn id_name(pascal: &str) -> String {
    format!("{pascal}Id")
}
