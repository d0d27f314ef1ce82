use crate::build_module::domain::AnnotatedDocument;
use crate::build_module::mutations::Mutation;
use crate::ports::outbound::FileStore;
use crate::shared::error::ToolError;
use crate::shared::Result;
use anyhow::Context;
use std::path::{Path, PathBuf};

/// One file together with the mutations to run against it
pub struct PatchBatch<'m> {
    pub path: PathBuf,
    pub mutations: Vec<&'m dyn Mutation>,
}

impl<'m> PatchBatch<'m> {
    pub fn new(path: impl Into<PathBuf>, mutations: Vec<&'m dyn Mutation>) -> Self {
        Self {
            path: path.into(),
            mutations,
        }
    }
}

/// DocumentPatcher service running mutations against TOML files
///
/// Each file goes through load, decode, mutate, encode and save exactly
/// once, however many mutations are applied. The leading comment block and
/// the permission bits of the file survive the round trip. When any step
/// fails the file on disk is left as it was.
pub struct DocumentPatcher<'a, S: FileStore> {
    store: &'a S,
}

impl<'a, S: FileStore> DocumentPatcher<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Applies `mutations` in order to the document at `path`
    ///
    /// # Errors
    /// Returns [`ToolError::Io`] when the file cannot be read or written,
    /// [`ToolError::Decode`] / [`ToolError::Encode`] for TOML failures, and
    /// the mutation's own error (with the path as context) when an edit fails.
    pub fn apply(&self, path: &Path, mutations: &[&dyn Mutation]) -> Result<()> {
        let stored = self.store.read(path)?;

        let content = String::from_utf8(stored.content).map_err(|e| ToolError::Decode {
            path: path.to_path_buf(),
            details: format!("invalid UTF-8: {}", e),
        })?;

        let mut annotated = AnnotatedDocument::decode(&content).map_err(|e| ToolError::Decode {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;

        for mutation in mutations {
            mutation
                .apply(&mut annotated.document)
                .with_context(|| format!("unable to update {}", path.display()))?;
        }

        let output = annotated.encode().map_err(|e| ToolError::Encode {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;

        self.store
            .write(path, output.as_bytes(), &stored.permissions)
    }

    /// Applies each batch in sequence, stopping at the first failure
    ///
    /// Files patched before the failing one keep their new content.
    pub fn apply_all(&self, batches: &[PatchBatch<'_>]) -> Result<()> {
        for batch in batches {
            self.apply(&batch.path, &batch.mutations)?;
        }
        Ok(())
    }
}
