use std::path::{Path, PathBuf};

use eyre::{Result, WrapErr};

/// A generated file, fully rendered in memory before it touches the disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
    path: PathBuf,
    content: String,
}

impl File {
    /// Create a new file with the given path and content.
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Get the file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the file content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Write the file, creating parent directories as needed.
    ///
    /// The destination is truncated or created. If the write fails midway,
    /// whatever was created at the destination is removed again.
    pub fn write(&self) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .wrap_err_with(|| format!("failed to create '{}'", parent.display()))?;
        }

        if let Err(err) = std::fs::write(&self.path, &self.content) {
            // A failed cleanup must not mask the write error.
            let _ = std::fs::remove_file(&self.path);
            return Err(err).wrap_err_with(|| format!("failed to write '{}'", self.path.display()));
        }

        Ok(())
    }
}
