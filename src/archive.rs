use std::fs;
use std::io::Read;
use std::path::Path;

use zip::ZipArchive;
use zip::result::ZipError;

use crate::error::ExportError;

/// Decompress a single named member of the downloaded archive.
///
/// The cities dump ships as a one-member zip; anything else in the archive
/// is ignored.
pub fn extract_member(zip_path: &Path, member: &str) -> Result<Vec<u8>, ExportError> {
    let file = fs::File::open(zip_path).map_err(|err| {
        ExportError::Filesystem(format!("open zip {}: {err}", zip_path.display()))
    })?;
    let mut archive = ZipArchive::new(file).map_err(|err| ExportError::Archive(err.to_string()))?;

    let mut entry = match archive.by_name(member) {
        Ok(entry) => entry,
        Err(ZipError::FileNotFound) => {
            return Err(ExportError::MissingMember(member.to_string()));
        }
        Err(err) => return Err(ExportError::Archive(err.to_string())),
    };

    let mut content = Vec::new();
    entry
        .read_to_end(&mut content)
        .map_err(|err| ExportError::Archive(err.to_string()))?;
    Ok(content)
}
