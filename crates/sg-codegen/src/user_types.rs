//! Modules for user-defined enum types.
//!
//! ```text
//! type Mood = 'sad' | 'ok' | 'happy';
//!
//! export default Mood;
//! ```

use camino::Utf8Path;
use sg_core::UserType;

use crate::emit::GeneratedFile;
use crate::model::{escape_single_quoted, push_doc};
use crate::naming::NamingPolicy;

/// Generates one module per user-defined type.
#[derive(Debug, Clone, Copy)]
pub struct UserTypeGenerator<'a> {
    naming: &'a NamingPolicy,
}

impl<'a> UserTypeGenerator<'a> {
    /// Creates a generator using `naming` for type and file names.
    #[must_use]
    pub const fn new(naming: &'a NamingPolicy) -> Self {
        Self { naming }
    }

    /// Produces the module for `user_type` inside `model_dir`.
    #[must_use]
    pub fn generate(&self, user_type: &UserType, model_dir: &Utf8Path) -> GeneratedFile {
        GeneratedFile::module(
            model_dir,
            &self.naming.file_name(&user_type.name),
            self.render(user_type),
        )
    }

    /// Produces the lines of the module for `user_type`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sg_codegen::{NamingPolicy, UserTypeGenerator};
    /// use sg_core::UserType;
    ///
    /// let naming = NamingPolicy::default();
    /// let lines = UserTypeGenerator::new(&naming).render(&UserType::new("mood", ["sad", "happy"]));
    /// assert_eq!(lines, ["type Mood = 'sad' | 'happy';", "", "export default Mood;"]);
    /// ```
    #[must_use]
    pub fn render(&self, user_type: &UserType) -> Vec<String> {
        let pascal = self.naming.pascal_name(&user_type.name);
        let variants = if user_type.values.is_empty() {
            "never".to_owned()
        } else {
            user_type
                .values
                .iter()
                .map(|value| format!("'{}'", escape_single_quoted(value)))
                .collect::<Vec<_>>()
                .join(" | ")
        };

        let mut lines = Vec::with_capacity(4);
        push_doc(&mut lines, "", user_type.comment.as_deref());
        lines.push(format!("type {pascal} = {variants};"));
        lines.push(String::new());
        lines.push(format!("export default {pascal};"));
        lines
    }
}
