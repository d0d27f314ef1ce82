use crate::application::dto::PackageDependencyRequest;
use crate::build_module::mutations::{DockerReferenceUpdate, Mutation, OrderGroupVersionUpdate};
use crate::build_module::services::{DocumentPatcher, PatchBatch};
use crate::ports::outbound::{FileStore, ProgressReporter};
use crate::shared::error::ToolError;
use crate::shared::Result;

/// UpdatePackageDependencyUseCase - moves a packaged buildpack to a new
/// image version across `builder.toml`, `package.toml` and a composite
/// `buildpack.toml`
pub struct UpdatePackageDependencyUseCase<S, PR> {
    file_store: S,
    progress_reporter: PR,
}

impl<S, PR> UpdatePackageDependencyUseCase<S, PR>
where
    S: FileStore,
    PR: ProgressReporter,
{
    pub fn new(file_store: S, progress_reporter: PR) -> Self {
        Self {
            file_store,
            progress_reporter,
        }
    }

    /// Executes the update on every file named in the request
    ///
    /// # Errors
    /// Returns a validation error when no file is named. Otherwise files are
    /// patched in the order builder, package, buildpack and the first failure
    /// stops the run.
    pub fn execute(&self, request: PackageDependencyRequest) -> Result<()> {
        if !request.has_targets() {
            return Err(ToolError::validation(
                "builder-toml, buildpack-toml, or package-toml must be set",
            )
            .into());
        }

        self.progress_reporter
            .report(&format!("➜ {} {}", request.id, request.version));

        let builder_update =
            DockerReferenceUpdate::builder_buildpacks(&request.id, &request.version);
        let package_update =
            DockerReferenceUpdate::package_dependencies(&request.id, &request.version);
        let order_update = OrderGroupVersionUpdate {
            image: request.id.clone(),
            version: request.version.clone(),
        };

        let targets: [(&Option<_>, &dyn Mutation); 3] = [
            (&request.builder_path, &builder_update),
            (&request.package_path, &package_update),
            (&request.buildpack_path, &order_update),
        ];

        let batches: Vec<PatchBatch<'_>> = targets
            .into_iter()
            .filter_map(|(path, mutation)| {
                path.as_ref().map(|path| PatchBatch::new(path, vec![mutation]))
            })
            .collect();

        DocumentPatcher::new(&self.file_store).apply_all(&batches)?;

        for batch in &batches {
            self.progress_reporter
                .report(&format!("   Updated {}", batch.path.display()));
        }
        Ok(())
    }
}
