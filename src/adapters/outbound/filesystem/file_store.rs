use crate::ports::outbound::{FileStore, StoredFile};
use crate::shared::error::ToolError;
use crate::shared::security::{validate_file_size, validate_regular_file, MAX_DOCUMENT_SIZE};
use crate::shared::Result;
use std::fs::{self, Permissions};
use std::io;
use std::path::Path;

/// FileSystemStore adapter for build module documents on local disk
///
/// Reads follow symbolic links and are bounded by [`MAX_DOCUMENT_SIZE`].
/// Writes replace the whole file and then re-apply the captured
/// permission bits.
pub struct FileSystemStore;

impl FileSystemStore {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemStore {
    fn default() -> Self {
        Self::new()
    }
}

fn io_error(path: &Path, details: String) -> ToolError {
    ToolError::Io {
        path: path.to_path_buf(),
        details,
    }
}

impl FileStore for FileSystemStore {
    fn read(&self, path: &Path) -> Result<StoredFile> {
        let metadata = validate_regular_file(path)?;
        validate_file_size(metadata.len(), path, MAX_DOCUMENT_SIZE)?;

        let content = fs::read(path)
            .map_err(|e| io_error(path, format!("unable to read: {}", e)))?;

        Ok(StoredFile {
            content,
            permissions: metadata.permissions(),
        })
    }

    fn write(&self, path: &Path, content: &[u8], permissions: &Permissions) -> Result<()> {
        fs::write(path, content)
            .map_err(|e| io_error(path, format!("unable to write: {}", e)))?;
        fs::set_permissions(path, permissions.clone())
            .map_err(|e| io_error(path, format!("unable to set permissions: {}", e)))?;
        Ok(())
    }

    fn copy(&self, from: &Path, to: &Path) -> Result<()> {
        fs::copy(from, to).map_err(|e| {
            io_error(
                from,
                format!("unable to copy to {}: {}", to.display(), e),
            )
        })?;
        Ok(())
    }

    fn remove(&self, path: &Path) -> Result<()> {
        fs::remove_file(path).map_err(|e| io_error(path, format!("unable to remove: {}", e)))?;
        Ok(())
    }

    fn exists(&self, path: &Path) -> Result<bool> {
        match fs::symlink_metadata(path) {
            Ok(_) => Ok(true),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(io_error(path, format!("unable to stat: {}", e)).into()),
        }
    }
}
