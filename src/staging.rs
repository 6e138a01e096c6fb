use std::fs;

use camino::{Utf8Path, Utf8PathBuf};
use tempfile::NamedTempFile;

use crate::config::ExportConfig;
use crate::error::ExportError;

/// Local staging layout: the downloaded archive, the extracted table and the
/// final output file.
#[derive(Debug, Clone)]
pub struct Staging {
    archive: Utf8PathBuf,
    table: Utf8PathBuf,
    output: Utf8PathBuf,
}

impl Staging {
    pub fn new(config: &ExportConfig) -> Self {
        Self {
            archive: config.archive_path.clone(),
            table: config.table_path.clone(),
            output: config.output_path.clone(),
        }
    }

    pub fn archive(&self) -> &Utf8Path {
        &self.archive
    }

    pub fn table(&self) -> &Utf8Path {
        &self.table
    }

    pub fn output(&self) -> &Utf8Path {
        &self.output
    }

    pub fn is_staged(path: &Utf8Path) -> bool {
        path.as_std_path().exists()
    }

    pub fn write_bytes_atomic(path: &Utf8Path, content: &[u8]) -> Result<(), ExportError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent.as_std_path())
                .map_err(|err| ExportError::Filesystem(err.to_string()))?;
        }
        let tmp_path = path.with_extension("tmp");
        fs::write(tmp_path.as_std_path(), content)
            .map_err(|err| ExportError::Filesystem(err.to_string()))?;
        fs::rename(tmp_path.as_std_path(), path.as_std_path())
            .map_err(|err| ExportError::Filesystem(err.to_string()))?;
        Ok(())
    }

    /// Temp file in the destination's directory, so the final persist is a
    /// same-filesystem rename.
    pub fn tempfile_beside(path: &Utf8Path) -> Result<NamedTempFile, ExportError> {
        let parent = path
            .parent()
            .filter(|dir| !dir.as_str().is_empty())
            .unwrap_or_else(|| Utf8Path::new("."));
        fs::create_dir_all(parent.as_std_path())
            .map_err(|err| ExportError::Filesystem(err.to_string()))?;
        tempfile::Builder::new()
            .prefix("geonames-export")
            .tempfile_in(parent.as_std_path())
            .map_err(|err| ExportError::Filesystem(err.to_string()))
    }

    pub fn persist_temp(temp: NamedTempFile, dest: &Utf8Path) -> Result<(), ExportError> {
        if dest.as_std_path().exists() {
            fs::remove_file(dest.as_std_path())
                .map_err(|err| ExportError::Filesystem(err.to_string()))?;
        }
        temp.persist(dest.as_std_path())
            .map_err(|err| ExportError::Filesystem(err.to_string()))?;
        Ok(())
    }
}
