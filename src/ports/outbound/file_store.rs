use crate::shared::Result;
use std::fs::Permissions;
use std::path::Path;

/// Raw bytes of a file together with the permission bits it had on disk
#[derive(Debug, Clone)]
pub struct StoredFile {
    pub content: Vec<u8>,
    pub permissions: Permissions,
}

/// FileStore port for whole-file access to build module documents
///
/// Files are always read fully into memory and replaced as a whole; there
/// are no partial writes and no locking.
pub trait FileStore {
    /// Reads a file and captures its permission bits
    ///
    /// # Errors
    /// Returns an error if the file cannot be stat'd or read
    fn read(&self, path: &Path) -> Result<StoredFile>;

    /// Overwrites `path` with `content` and applies `permissions`
    ///
    /// # Errors
    /// Returns an error if the file cannot be written
    fn write(&self, path: &Path, content: &[u8], permissions: &Permissions) -> Result<()>;

    /// Copies `from` over `to`, creating `to` if needed
    fn copy(&self, from: &Path, to: &Path) -> Result<()>;

    fn remove(&self, path: &Path) -> Result<()>;

    /// Returns whether `path` exists
    ///
    /// # Errors
    /// Returns an error when existence cannot be determined (for example a
    /// permission error on a parent directory)
    fn exists(&self, path: &Path) -> Result<bool>;
}
