use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum size of a metadata or license file that will be read (100 MB)
pub const MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// Validates that a path is not a symbolic link
///
/// Uses `symlink_metadata()` so the link itself is inspected, not its target.
///
/// # Arguments
/// * `path` - The path to validate
/// * `operation` - Description of the operation (e.g., "write") for error messages
///
/// # Errors
/// Returns an error if the path is a symbolic link or if metadata cannot be read
pub fn validate_not_symlink(path: &Path, operation: &str) -> Result<()> {
    let metadata = fs::symlink_metadata(path).map_err(|e| {
        anyhow::anyhow!(
            "Failed to read metadata for {} operation on {}: {}",
            operation,
            path.display(),
            e
        )
    })?;

    if metadata.is_symlink() {
        anyhow::bail!(
            "Security: {} is a symbolic link. For security reasons, {} operations on symbolic links are not allowed.",
            path.display(),
            operation
        );
    }

    Ok(())
}

/// Validates file size is within acceptable limits
///
/// # Errors
/// Returns an error if the file size exceeds the maximum
pub fn validate_file_size(file_size: u64, path: &Path, max_size: u64) -> Result<()> {
    if file_size > max_size {
        anyhow::bail!(
            "Security: {} is too large ({} bytes). Maximum allowed size is {} bytes.",
            path.display(),
            file_size,
            max_size
        );
    }
    Ok(())
}

/// Reads a text file after checking it is a regular file within `MAX_FILE_SIZE`
///
/// Symbolic links are followed here: distribution metadata is frequently
/// linked into environments by package managers.
/// Invalid UTF-8 sequences are replaced rather than rejected.
///
/// # Arguments
/// * `path` - The file to read
/// * `file_description` - Description of the file (e.g., "METADATA") for error messages
pub fn read_bounded_text(path: &Path, file_description: &str) -> Result<String> {
    let metadata = fs::metadata(path).map_err(|e| {
        anyhow::anyhow!(
            "Failed to read {} metadata for {}: {}",
            file_description,
            path.display(),
            e
        )
    })?;

    if !metadata.is_file() {
        anyhow::bail!("{} is not a regular file", path.display());
    }

    validate_file_size(metadata.len(), path, MAX_FILE_SIZE)?;

    let bytes = fs::read(path).map_err(|e| {
        anyhow::anyhow!(
            "Failed to read {} {}: {}",
            file_description,
            path.display(),
            e
        )
    })?;

    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
