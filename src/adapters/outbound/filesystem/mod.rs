/// Filesystem adapters for whole-file document access
mod file_store;

pub use file_store::FileSystemStore;
