mod document_patcher;

pub use document_patcher::{DocumentPatcher, PatchBatch};
