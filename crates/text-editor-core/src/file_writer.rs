use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::buffer::Buffer;

pub const DEFAULT_EXTENSION: &str = "txt";

/// Appends the default extension when the chosen path has none.
pub fn with_default_extension(path: PathBuf) -> PathBuf {
    if path.extension().is_some() {
        path
    } else {
        path.with_extension(DEFAULT_EXTENSION)
    }
}

/// Writes the buffer verbatim to `path`, replacing any existing file.
pub fn write_buffer(path: &Path, buffer: &Buffer) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create file: {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(buffer.as_str().as_bytes())
        .with_context(|| format!("Failed to write file: {}", path.display()))?;
    writer
        .flush()
        .with_context(|| format!("Failed to flush file: {}", path.display()))?;

    tracing::info!(path = %path.display(), bytes = buffer.as_str().len(), "saved buffer");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adds_txt_only_when_missing() {
        assert_eq!(
            with_default_extension(PathBuf::from("/tmp/notes")),
            PathBuf::from("/tmp/notes.txt")
        );
        assert_eq!(
            with_default_extension(PathBuf::from("/tmp/notes.md")),
            PathBuf::from("/tmp/notes.md")
        );
    }

    #[test]
    fn writes_exact_contents_and_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        std::fs::write(&path, "previous content that is longer").unwrap();

        let buffer = Buffer::from_text("line one\nline two without newline");
        write_buffer(&path, &buffer).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), buffer.as_str());
    }

    #[test]
    fn reports_path_on_failure() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.txt");

        let err = write_buffer(&path, &Buffer::from_text("x")).unwrap_err();
        assert!(err.to_string().contains("out.txt"));
    }
}
