use crate::shared::error::ToolError;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum size of a metadata document read into memory (10 MiB).
pub const MAX_DOCUMENT_SIZE: u64 = 10 * 1024 * 1024;

/// Validates that a path exists and resolves to a regular file
///
/// Symbolic links are followed: a linked `buildpack.toml` is patched in place
/// at its target.
///
/// # Errors
/// Returns an [`ToolError::Io`] if the path cannot be stat'd or is not a file
pub fn validate_regular_file(path: &Path) -> Result<fs::Metadata> {
    let metadata = fs::metadata(path).map_err(|e| ToolError::Io {
        path: path.to_path_buf(),
        details: format!("unable to stat: {}", e),
    })?;

    if !metadata.is_file() {
        return Err(ToolError::Io {
            path: path.to_path_buf(),
            details: "not a regular file".to_string(),
        }
        .into());
    }

    Ok(metadata)
}

/// Validates file size is within acceptable limits
///
/// # Errors
/// Returns an error if the file size exceeds the maximum
pub fn validate_file_size(file_size: u64, path: &Path, max_size: u64) -> Result<()> {
    if file_size > max_size {
        return Err(ToolError::Io {
            path: path.to_path_buf(),
            details: format!(
                "file is too large ({} bytes), maximum allowed size is {} bytes",
                file_size, max_size
            ),
        }
        .into());
    }
    Ok(())
}
