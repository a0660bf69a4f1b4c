use crate::shared::error::SbomError;
use crate::shared::Result;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Largest SBOM document the reader accepts (100 MB).
pub const MAX_DOCUMENT_SIZE: u64 = 100 * 1024 * 1024;

fn violation(path: &Path, reason: impl Into<String>, hint: impl Into<String>) -> anyhow::Error {
    SbomError::SecurityError {
        path: path.to_path_buf(),
        reason: reason.into(),
        hint: hint.into(),
    }
    .into()
}

/// Checks that `path` names a regular file that is not a symbolic link and
/// returns its size.
///
/// `symlink_metadata()` is used so the link itself is inspected, not its target.
///
/// # Errors
/// - `SbomError::DocumentNotFound` if nothing exists at `path`
/// - `SbomError::SecurityError` for symlinks, directories and special files
pub fn ensure_regular_file(path: &Path) -> Result<u64> {
    let metadata = match fs::symlink_metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(SbomError::DocumentNotFound {
                path: path.to_path_buf(),
                suggestion: "Check the path, or pass the document with its full path".to_string(),
            }
            .into())
        }
        Err(e) => {
            return Err(SbomError::FileReadError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into())
        }
    };

    if metadata.is_symlink() {
        return Err(violation(
            path,
            "symbolic links are not allowed",
            "Pass the path of the target file instead of the link",
        ));
    }
    if !metadata.is_file() {
        return Err(violation(
            path,
            "not a regular file",
            "Pass a CycloneDX JSON file, not a directory or device",
        ));
    }

    Ok(metadata.len())
}

/// Rejects documents larger than `max_size`.
pub fn ensure_size_within(path: &Path, size: u64, max_size: u64) -> Result<()> {
    if size > max_size {
        return Err(violation(
            path,
            format!("file is too large ({} bytes, limit {} bytes)", size, max_size),
            "Split the SBOM or remove unneeded data before validating",
        ));
    }
    Ok(())
}

/// Rejects an output path that is an existing symbolic link.
///
/// A path that does not exist yet is fine.
pub fn ensure_not_symlink(path: &Path) -> Result<()> {
    match fs::symlink_metadata(path) {
        Ok(metadata) if metadata.is_symlink() => Err(violation(
            path,
            "refusing to write through a symbolic link",
            "Choose an output path that is not a symbolic link",
        )),
        _ => Ok(()),
    }
}
