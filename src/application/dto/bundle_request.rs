use std::path::PathBuf;

/// Options shared by every `create-package` / `pack buildpack package` run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BundleOptions {
    /// Where downloaded dependencies are cached
    pub cache_location: Option<String>,
    pub include_dependencies: bool,
    pub dependency_filters: Vec<String>,
    /// A filter must match both id and version
    pub strict_filters: bool,
    /// Image name to package as; the buildpack id when absent
    pub registry_name: Option<String>,
    pub publish: bool,
}

/// BundleRequest - request DTO for compiling and packaging one buildpack
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleRequest {
    pub buildpack_id: String,
    pub buildpack_path: PathBuf,
    /// Version to stamp; inferred from git tags when absent
    pub version: Option<String>,
    pub options: BundleOptions,
    /// Leave dangling docker images in place
    pub skip_clean: bool,
}

impl BundleRequest {
    pub fn new(buildpack_id: impl Into<String>, buildpack_path: impl Into<PathBuf>) -> Self {
        Self {
            buildpack_id: buildpack_id.into(),
            buildpack_path: buildpack_path.into(),
            version: None,
            options: BundleOptions::default(),
            skip_clean: false,
        }
    }

    /// Name of the image produced by `pack`
    pub fn image_name(&self) -> &str {
        self.options
            .registry_name
            .as_deref()
            .unwrap_or(&self.buildpack_id)
    }
}
