use super::BundleOptions;
use std::path::PathBuf;

/// JvmVendorsRequest - request DTO for building the JVM vendor buildpacks
#[derive(Debug, Clone, Default)]
pub struct JvmVendorsRequest {
    /// `org/name@x.y.z`, one per vendor, or exactly one for a single buildpack
    pub buildpack_ids: Vec<String>,
    /// Inferred from the first buildpack id and `BP_ROOT` when absent
    pub buildpack_path: Option<PathBuf>,
    /// Vendor ids from the catalog
    pub vendors: Vec<String>,
    /// Select every vendor of the catalog, ignoring `vendors`
    pub include_all_vendors: bool,
    pub default_vendor: Option<String>,
    /// Build one buildpack carrying every selected vendor
    pub single_buildpack: bool,
    pub options: BundleOptions,
}
