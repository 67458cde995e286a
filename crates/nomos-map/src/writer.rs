//! Snapshot and style file output.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use crate::{MapDocument, MapError, MapStyle};

/// Writes snapshot documents and the style scheme to files.
///
/// Creates the output directory on construction if it does not exist.
/// Output files are named `{prefix}_{date}.geojson` and
/// `{prefix}_style.json`.
pub struct SnapshotWriter {
    output_dir: PathBuf,
    prefix: String,
}

impl SnapshotWriter {
    /// Create a writer targeting the given directory and file prefix.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`MapError::InvalidPrefix`] | `prefix` is empty or contains characters outside `[a-zA-Z0-9_-]` |
    /// | [`MapError::OutputDirCreate`] | The directory cannot be created |
    #[instrument(skip_all, fields(dir = %output_dir.display()))]
    pub fn new(output_dir: &Path, prefix: impl Into<String>) -> Result<Self, MapError> {
        let prefix = prefix.into();
        let valid = !prefix.is_empty()
            && prefix
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(MapError::InvalidPrefix { prefix });
        }
        fs::create_dir_all(output_dir).map_err(|e| MapError::OutputDirCreate {
            path: output_dir.to_path_buf(),
            source: e,
        })?;
        debug!(prefix, "output directory ready");
        Ok(Self {
            output_dir: output_dir.to_path_buf(),
            prefix,
        })
    }

    /// Write a snapshot document to `{prefix}_{date}.geojson`.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::WriteFile`] if the file cannot be written.
    #[instrument(skip_all, fields(date = %document.date()))]
    pub fn write_snapshot(&self, document: &MapDocument) -> Result<PathBuf, MapError> {
        let path = self
            .output_dir
            .join(format!("{}_{}.geojson", self.prefix, document.date()));

        fs::write(&path, document.as_json()).map_err(|e| MapError::WriteFile {
            path: path.clone(),
            source: e,
        })?;

        info!(path = %path.display(), bytes = document.as_json().len(), "snapshot written");
        Ok(path)
    }

    /// Write the style scheme to `{prefix}_style.json`.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::WriteFile`] if the file cannot be written.
    #[instrument(skip_all)]
    pub fn write_style(&self, style: &MapStyle) -> Result<PathBuf, MapError> {
        let path = self
            .output_dir
            .join(format!("{}_style.json", self.prefix));

        fs::write(&path, style.to_json()).map_err(|e| MapError::WriteFile {
            path: path.clone(),
            source: e,
        })?;

        info!(path = %path.display(), "style written");
        Ok(path)
    }
}
