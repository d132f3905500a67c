//! Naming policy for generated declarations and modules.
//!
//! Every raw database name is turned into three strings:
//!
//! | Function | Used for | Default |
//! |----------|----------|---------|
//! | [`NamingPolicy::pascal_name`] | declaration identifiers | always pascal |
//! | [`NamingPolicy::file_name`] | module files and import paths | configured |
//! | [`NamingPolicy::key_name`] | keys of name-keyed type maps | configured |
//!
//! The transforms are injected as [`NameTransform`] values, so callers can
//! supply a [`Recase`] profile or any `Fn(&str) -> String`.
//!
//! # Examples
//!
//! ```
//! use sg_codegen::NamingPolicy;
//! use sg_core::Casing;
//!
//! let naming = NamingPolicy::new(Casing::Snake, Casing::Kebab, Casing::Camel);
//! assert_eq!(naming.pascal_name("audit_log"), "AuditLog");
//! assert_eq!(naming.file_name("audit_log"), "audit-log");
//! assert_eq!(naming.key_name("audit_log"), "auditLog");
//! ```

use sg_core::{Casing, Config};

/// A `name -> transformed name` capability.
pub trait NameTransform {
    /// Transforms a raw name.
    fn apply(&self, name: &str) -> String;
}

impl<F> NameTransform for F
where
    F: Fn(&str) -> String,
{
    fn apply(&self, name: &str) -> String {
        self(name)
    }
}

/// Rewrites names from one [`Casing`] profile into another.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Recase {
    /// Casing of the input names.
    pub from: Casing,
    /// Casing of the output names.
    pub to: Casing,
}

impl Recase {
    /// Creates a transform from `from` to `to`.
    #[must_use]
    pub const fn new(from: Casing, to: Casing) -> Self {
        Self { from, to }
    }
}

impl NameTransform for Recase {
    fn apply(&self, name: &str) -> String {
        self.from.recase(self.to, name)
    }
}

/// The three name transforms shared by every generator of a run.
///
/// Per-entity modules and the index module must be named by the same policy,
/// otherwise import paths stop matching file names.
pub struct NamingPolicy {
    pascal: Box<dyn NameTransform>,
    file: Box<dyn NameTransform>,
    key: Box<dyn NameTransform>,
}

impl NamingPolicy {
    /// Builds a policy from casing profiles.
    ///
    /// Declaration identifiers are always pascal-cased from `source`.
    #[must_use]
    pub fn new(source: Casing, filename: Casing, key: Casing) -> Self {
        Self::with_transforms(
            Recase::new(source, Casing::Pascal),
            Recase::new(source, filename),
            Recase::new(source, key),
        )
    }

    /// Builds a policy from the casing options of a [`Config`].
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.source_casing, config.filename_casing, config.key_casing)
    }

    /// Builds a policy from arbitrary transforms.
    ///
    /// # Examples
    ///
    /// ```
    /// use sg_codegen::NamingPolicy;
    ///
    /// let naming = NamingPolicy::with_transforms(
    ///     |name: &str| name.to_uppercase(),
    ///     |name: &str| name.to_owned(),
    ///     |name: &str| format!("k_{name}"),
    /// );
    /// assert_eq!(naming.pascal_name("users"), "USERS");
    /// assert_eq!(naming.key_name("users"), "k_users");
    /// ```
    #[must_use]
    pub fn with_transforms(
        pascal: impl NameTransform + 'static,
        file: impl NameTransform + 'static,
        key: impl NameTransform + 'static,
    ) -> Self {
        Self {
            pascal: Box::new(pascal),
            file: Box::new(file),
            key: Box::new(key),
        }
    }

    /// Declaration identifier for `name`.
    #[must_use]
    pub fn pascal_name(&self, name: &str) -> String {
        self.pascal.apply(name)
    }

    /// Module file name (without extension) for `name`.
    #[must_use]
    pub fn file_name(&self, name: &str) -> String {
        self.file.apply(name)
    }

    /// Type map key for `name`.
    #[must_use]
    pub fn key_name(&self, name: &str) -> String {
        self.key.apply(name)
    }
}

impl Default for NamingPolicy {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl std::fmt::Debug for NamingPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NamingPolicy").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy() {
        let naming = NamingPolicy::default();
        assert_eq!(naming.pascal_name("user_accounts"), "UserAccounts");
        assert_eq!(naming.file_name("user_accounts"), "UserAccounts");
        assert_eq!(naming.key_name("user_accounts"), "userAccounts");
    }

    #[test]
    fn test_pascal_ignores_filename_casing() {
        let naming = NamingPolicy::new(Casing::Snake, Casing::Snake, Casing::Snake);
        assert_eq!(naming.pascal_name("audit_log"), "AuditLog");
        assert_eq!(naming.file_name("audit_log"), "audit_log");
        assert_eq!(naming.key_name("audit_log"), "audit_log");
    }

    #[test]
    fn test_identity_filename() {
        let naming = NamingPolicy::new(Casing::Snake, Casing::Identity, Casing::Camel);
        assert_eq!(naming.file_name("audit_log"), "audit_log");
    }

    #[test]
    fn test_deterministic() {
        let naming = NamingPolicy::default();
        assert_eq!(naming.key_name("order_items"), naming.key_name("order_items"));
    }

    #[test]
    fn test_from_config() {
        let config = Config {
            filename_casing: Casing::Kebab,
            ..Config::default()
        };
        let naming = NamingPolicy::from_config(&config);
        assert_eq!(naming.file_name("order_items"), "order-items");
    }

    #[test]
    fn test_recase_transform() {
        let transform = Recase::new(Casing::Snake, Casing::Camel);
        assert_eq!(transform.apply("created_at"), "createdAt");
    }
}
