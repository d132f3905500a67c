//! Casing profiles for database names.
//!
//! A [`Casing`] names the convention a string is written in. Raw database
//! names are read with the configured *source* casing and rewritten into a
//! *target* casing with [`Casing::recase`].
//!
//! # Examples
//!
//! ```
//! use sg_core::Casing;
//!
//! assert_eq!(Casing::Snake.recase(Casing::Pascal, "audit_log"), "AuditLog");
//! assert_eq!(Casing::Snake.recase(Casing::Camel, "audit_log"), "auditLog");
//! assert_eq!(Casing::Snake.recase(Casing::Identity, "audit_log"), "audit_log");
//! ```

use convert_case::{Case, Casing as _};
use serde::{Deserialize, Serialize};

/// A naming convention.
///
/// `Identity` is a pass-through profile: as a target it leaves the name
/// untouched, as a source it lets word boundaries be detected automatically.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum Casing {
    /// `UserAccount`
    Pascal,
    /// `userAccount`
    Camel,
    /// `user_account`
    #[default]
    Snake,
    /// `user-account`
    Kebab,
    /// Leaves names as they are.
    Identity,
}

impl Casing {
    /// Returns the configuration label of this casing.
    ///
    /// # Examples
    ///
    /// ```
    /// use sg_core::Casing;
    ///
    /// assert_eq!(Casing::Pascal.label(), "pascal");
    /// ```
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pascal => "pascal",
            Self::Camel => "camel",
            Self::Snake => "snake",
            Self::Kebab => "kebab",
            Self::Identity => "identity",
        }
    }

    /// Rewrites `name`, read as `self`, into `target`.
    #[must_use]
    pub fn recase(self, target: Self, name: &str) -> String {
        let case_of = |casing: Self| match casing {
            Self::Pascal => Some(Case::Pascal),
            Self::Camel => Some(Case::Camel),
            Self::Snake => Some(Case::Snake),
            Self::Kebab => Some(Case::Kebab),
            Self::Identity => None,
        };

        let Some(to) = case_of(target) else {
            return name.to_owned();
        };

        match case_of(self) {
            Some(from) => name.from_case(from).to_case(to),
            None => name.to_case(to),
        }
    }
}

impl std::fmt::Display for Casing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
