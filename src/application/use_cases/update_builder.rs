use crate::build_module::mutations::{BuildImageUpdate, LifecycleVersionUpdate};
use crate::build_module::services::DocumentPatcher;
use crate::ports::outbound::{FileStore, ProgressReporter};
use crate::shared::Result;
use std::path::Path;

/// The parts of a `builder.toml` that follow upstream releases
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuilderDependency {
    Lifecycle,
    BuildImage,
}

impl BuilderDependency {
    fn label(self) -> &'static str {
        match self {
            BuilderDependency::Lifecycle => "lifecycle",
            BuilderDependency::BuildImage => "build image",
        }
    }
}

/// UpdateBuilderUseCase - moves the lifecycle or the build image of a
/// builder to a new version
pub struct UpdateBuilderUseCase<S, PR> {
    file_store: S,
    progress_reporter: PR,
}

impl<S, PR> UpdateBuilderUseCase<S, PR>
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

    pub fn execute(
        &self,
        builder_path: &Path,
        dependency: BuilderDependency,
        version: &str,
    ) -> Result<()> {
        self.progress_reporter
            .report(&format!("➜ {} {}", dependency.label(), version));

        let patcher = DocumentPatcher::new(&self.file_store);
        match dependency {
            BuilderDependency::Lifecycle => {
                patcher.apply(builder_path, &[&LifecycleVersionUpdate::new(version)])?
            }
            BuilderDependency::BuildImage => {
                patcher.apply(builder_path, &[&BuildImageUpdate::new(version)])?
            }
        }

        self.progress_reporter.report_completion(&format!(
            "✅ Updated {} in {}",
            dependency.label(),
            builder_path.display()
        ));
        Ok(())
    }
}
