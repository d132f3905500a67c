//! Error types for the sg-codegen crate.
//!
//! The generators themselves never fail; errors come from the file sink and
//! from a configuration that does not match the snapshot.

use camino::Utf8PathBuf;

/// Errors raised while writing generated files.
#[derive(Debug, thiserror::Error)]
pub enum EmitError {
    /// Failed to create an output directory.
    #[error("failed to create directory {path}: {source}")]
    CreateDir {
        /// The directory that couldn't be created.
        path: Utf8PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to clear an output directory.
    #[error("failed to remove directory {path}: {source}")]
    RemoveDir {
        /// The directory that couldn't be removed.
        path: Utf8PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to write a generated file.
    #[error("failed to write file {path}: {source}")]
    Write {
        /// The file that couldn't be written.
        path: Utf8PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// Errors that abort a generation run.
///
/// # Examples
///
/// ```
/// use sg_codegen::GenerateError;
///
/// let err = GenerateError::MissingSchema("audit".to_owned());
/// assert_eq!(err.to_string(), "schema 'audit' not found in snapshot");
/// ```
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    /// A configured schema is missing from the snapshot.
    #[error("schema '{0}' not found in snapshot")]
    MissingSchema(String),

    /// Writing output failed.
    #[error(transparent)]
    Emit(#[from] EmitError),
}
