use std::path::PathBuf;

/// PackageDependencyRequest - request DTO for moving a packaged buildpack
/// to a new image version
///
/// At least one of the three paths is expected; files that are not given
/// are not touched.
#[derive(Debug, Clone, Default)]
pub struct PackageDependencyRequest {
    pub builder_path: Option<PathBuf>,
    pub package_path: Option<PathBuf>,
    pub buildpack_path: Option<PathBuf>,
    /// Image of the dependency, e.g. `gcr.io/paketo-buildpacks/bellsoft-liberica`
    pub id: String,
    pub version: String,
}

impl PackageDependencyRequest {
    pub fn has_targets(&self) -> bool {
        self.builder_path.is_some() || self.package_path.is_some() || self.buildpack_path.is_some()
    }
}
