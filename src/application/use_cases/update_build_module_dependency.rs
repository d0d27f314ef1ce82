use crate::application::dto::BuildModuleDependencyRequest;
use crate::build_module::mutations::{DependencyPatterns, DependencyRecordUpdate};
use crate::build_module::services::DocumentPatcher;
use crate::ports::outbound::{EolRepository, FileStore, ProgressReporter};
use crate::shared::Result;

/// UpdateBuildModuleDependencyUseCase - bumps one dependency in a build
/// module descriptor
///
/// # Type Parameters
/// * `S` - FileStore implementation
/// * `E` - EolRepository implementation
/// * `PR` - ProgressReporter implementation
pub struct UpdateBuildModuleDependencyUseCase<S, E, PR> {
    file_store: S,
    eol_repository: E,
    progress_reporter: PR,
}

impl<S, E, PR> UpdateBuildModuleDependencyUseCase<S, E, PR>
where
    S: FileStore,
    E: EolRepository,
    PR: ProgressReporter,
{
    pub fn new(file_store: S, eol_repository: E, progress_reporter: PR) -> Self {
        Self {
            file_store,
            eol_repository,
            progress_reporter,
        }
    }

    /// Executes the update
    ///
    /// # Returns
    /// The number of dependency records rewritten
    ///
    /// # Errors
    /// Returns an error if a pattern does not compile, the document cannot
    /// be patched, or the end-of-life lookup fails. The file is unchanged in
    /// every one of these cases.
    pub fn execute(&self, request: BuildModuleDependencyRequest) -> Result<usize> {
        self.report_header(&request);

        let patterns = DependencyPatterns::compile(
            &request.version_pattern,
            &request.purl_pattern,
            &request.cpe_pattern,
        )?;

        let mutation = DependencyRecordUpdate::new(request.update, patterns, &self.eol_repository);
        DocumentPatcher::new(&self.file_store).apply(&request.buildmodule_path, &[&mutation])?;

        let matched = mutation.matched();
        if matched == 0 {
            self.progress_reporter.report_error(&format!(
                "⚠️  Warning: No dependency record in {} matched, nothing was updated.",
                request.buildmodule_path.display()
            ));
        } else {
            self.progress_reporter.report_completion(&format!(
                "✅ Updated {} dependency record(s) in {}",
                matched,
                request.buildmodule_path.display()
            ));
        }

        Ok(matched)
    }

    fn report_header(&self, request: &BuildModuleDependencyRequest) {
        let update = &request.update;
        let lines = [
            format!("➜ {} {}", update.id, update.version),
            format!("   Arch:         {}", update.arch),
            format!("   URI:          {}", update.uri),
            format!("   SHA256:       {}", update.sha256),
            format!("   PURL:         {}", update.purl),
            format!("   CPE:          {}", update.cpe),
            format!("   EOL ID:       {}", update.eol_id.as_deref().unwrap_or("-")),
        ];
        for line in lines {
            self.progress_reporter.report(&line);
        }
    }
}
