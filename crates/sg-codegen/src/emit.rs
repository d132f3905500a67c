//! Writing generated modules.
//!
//! Generators produce [`GeneratedFile`] values (a destination path plus an
//! ordered list of lines) and hand them to a [`FileSink`]:
//!
//! - [`FsSink`] writes to disk, creating and optionally clearing folders
//! - [`MemorySink`] keeps everything in memory (dry runs and tests)

use camino::{Utf8Path, Utf8PathBuf};
use tracing::debug;

use crate::error::EmitError;

/// Header line written at the top of every generated file.
pub const GENERATED_HEADER: &str = "// Automatically generated. Don't change this file manually.";

/// File extension of generated modules.
pub const MODULE_EXTENSION: &str = "ts";

/// A generated module: destination path and lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    /// Destination path.
    pub path: Utf8PathBuf,
    /// Lines without trailing newlines.
    pub lines: Vec<String>,
}

impl GeneratedFile {
    /// Creates a module named `<stem>.ts` inside `dir`.
    #[must_use]
    pub fn module(dir: &Utf8Path, stem: &str, lines: Vec<String>) -> Self {
        Self {
            path: dir.join(format!("{stem}.{MODULE_EXTENSION}")),
            lines,
        }
    }

    /// The file body: header, blank line, and the lines newline-joined.
    ///
    /// # Examples
    ///
    /// ```
    /// use sg_codegen::GeneratedFile;
    /// use camino::Utf8Path;
    ///
    /// let file = GeneratedFile::module(Utf8Path::new("models"), "Mood", vec!["type Mood = 'ok';".to_owned()]);
    /// assert_eq!(file.path, "models/Mood.ts");
    /// assert!(file.contents().ends_with("type Mood = 'ok';\n"));
    /// ```
    #[must_use]
    pub fn contents(&self) -> String {
        let mut out = String::with_capacity(
            GENERATED_HEADER.len() + self.lines.iter().map(|l| l.len() + 1).sum::<usize>() + 2,
        );
        out.push_str(GENERATED_HEADER);
        out.push_str("\n\n");
        for line in &self.lines {
            out.push_str(line);
            out.push('\n');
        }
        out
    }
}

/// Destination for generated modules.
pub trait FileSink {
    /// Makes sure `dir` exists, removing its previous contents if `clear`.
    fn prepare_dir(&mut self, dir: &Utf8Path, clear: bool) -> Result<(), EmitError>;

    /// Writes one generated module.
    fn write(&mut self, file: &GeneratedFile) -> Result<(), EmitError>;
}

/// Writes modules to the filesystem.
#[derive(Debug, Default)]
pub struct FsSink;

impl FileSink for FsSink {
    fn prepare_dir(&mut self, dir: &Utf8Path, clear: bool) -> Result<(), EmitError> {
        if clear && dir.exists() {
            std::fs::remove_dir_all(dir).map_err(|source| EmitError::RemoveDir {
                path: dir.to_owned(),
                source,
            })?;
        }

        std::fs::create_dir_all(dir).map_err(|source| EmitError::CreateDir {
            path: dir.to_owned(),
            source,
        })
    }

    fn write(&mut self, file: &GeneratedFile) -> Result<(), EmitError> {
        std::fs::write(&file.path, file.contents()).map_err(|source| EmitError::Write {
            path: file.path.clone(),
            source,
        })?;
        debug!(path = %file.path, lines = file.lines.len(), "Wrote module");
        Ok(())
    }
}

/// Collects modules in memory, in write order.
#[derive(Debug, Default)]
pub struct MemorySink {
    /// Directories passed to [`FileSink::prepare_dir`], with their `clear` flag.
    pub prepared: Vec<(Utf8PathBuf, bool)>,
    /// Written files.
    pub files: Vec<GeneratedFile>,
}

impl MemorySink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up a written file by path.
    #[must_use]
    pub fn get(&self, path: &Utf8Path) -> Option<&GeneratedFile> {
        self.files.iter().find(|file| file.path.as_path() == path)
    }
}

impl FileSink for MemorySink {
    fn prepare_dir(&mut self, dir: &Utf8Path, clear: bool) -> Result<(), EmitError> {
        self.prepared.push((dir.to_owned(), clear));
        Ok(())
    }

    fn write(&mut self, file: &GeneratedFile) -> Result<(), EmitError> {
        self.files.push(file.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn utf8_dir(temp: &TempDir) -> Utf8PathBuf {
        Utf8PathBuf::from_path_buf(temp.path().to_path_buf()).expect("Invalid path")
    }

    #[test]
    fn test_contents_layout() {
        let file = GeneratedFile::module(
            Utf8Path::new("m"),
            "index",
            vec!["a".to_owned(), String::new(), "b".to_owned()],
        );
        assert_eq!(file.contents(), format!("{GENERATED_HEADER}\n\na\n\nb\n"));
    }

    #[test]
    fn test_fs_sink_creates_nested_dir_and_writes() {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let dir = utf8_dir(&temp).join("generated").join("models");

        let mut sink = FsSink;
        sink.prepare_dir(&dir, false).expect("prepare failed");

        let file = GeneratedFile::module(&dir, "Users", vec!["export {};".to_owned()]);
        sink.write(&file).expect("write failed");

        let written = std::fs::read_to_string(dir.join("Users.ts")).expect("read failed");
        assert_eq!(written, file.contents());
    }

    #[test]
    fn test_fs_sink_clear_removes_stale_files() {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let dir = utf8_dir(&temp).join("models");
        std::fs::create_dir_all(&dir).expect("mkdir failed");
        std::fs::write(dir.join("Stale.ts"), "old").expect("write failed");

        let mut sink = FsSink;
        sink.prepare_dir(&dir, true).expect("prepare failed");

        assert!(dir.exists());
        assert!(!dir.join("Stale.ts").exists());
    }

    #[test]
    fn test_fs_sink_keeps_files_without_clear() {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let dir = utf8_dir(&temp);
        std::fs::write(dir.join("Keep.ts"), "old").expect("write failed");

        FsSink.prepare_dir(&dir, false).expect("prepare failed");
        assert!(dir.join("Keep.ts").exists());
    }

    #[test]
    fn test_fs_sink_write_into_missing_dir_fails() {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let dir = utf8_dir(&temp).join("missing");
        let file = GeneratedFile::module(&dir, "Users", Vec::new());

        match FsSink.write(&file) {
            Err(EmitError::Write { path, .. }) => assert_eq!(path, dir.join("Users.ts")),
            other => panic!("Expected Write error, got {other:?}"),
        }
    }

    #[test]
    fn test_memory_sink_records_everything() {
        let mut sink = MemorySink::new();
        sink.prepare_dir(Utf8Path::new("models"), true).expect("prepare");
        let file = GeneratedFile::module(Utf8Path::new("models"), "index", Vec::new());
        sink.write(&file).expect("write");

        assert_eq!(sink.prepared, [(Utf8PathBuf::from("models"), true)]);
        assert_eq!(sink.get(Utf8Path::new("models/index.ts")), Some(&file));
        assert!(sink.get(Utf8Path::new("models/other.ts")).is_none());
    }
}
