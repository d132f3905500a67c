//! User-defined database types.

use serde::{Deserialize, Serialize};

/// A user-defined enum type, such as `CREATE TYPE mood AS ENUM (...)`.
///
/// # Examples
///
/// ```
/// use sg_core::UserType;
///
/// let mood = UserType::new("mood", ["sad", "ok", "happy"]);
/// assert_eq!(mood.values.len(), 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserType {
    /// Type name as stored in the database.
    pub name: String,

    /// Enum labels in declaration order.
    pub values: Vec<String>,

    /// Type comment, if any.
    pub comment: Option<String>,
}

impl UserType {
    /// Creates an enum type with the given labels.
    #[must_use]
    pub fn new<I, S>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            values: values.into_iter().map(Into::into).collect(),
            comment: None,
        }
    }
}
