use crate::build_module::mutations::DependencyUpdate;
use std::path::PathBuf;

/// BuildModuleDependencyRequest - request DTO for bumping a dependency in a
/// `buildpack.toml` or `extension.toml`
#[derive(Debug, Clone)]
pub struct BuildModuleDependencyRequest {
    pub buildmodule_path: PathBuf,
    pub update: DependencyUpdate,
    /// Selects the records to update by their current version
    pub version_pattern: String,
    pub purl_pattern: String,
    pub cpe_pattern: String,
}
