use super::BundleBuildpackUseCase;
use crate::application::dto::{BundleRequest, JvmVendorsRequest};
use crate::build_module::mutations::{
    BuildpackDetails, ConfigurationDefaults, Mutation, VendorDependencyFilter,
};
use crate::build_module::services::DocumentPatcher;
use crate::config::{JvmVendor, JvmVendorCatalog, ToolConfig};
use crate::ports::outbound::{CommandExecutor, FileStore, ProgressReporter};
use crate::shared::error::ToolError;
use crate::shared::Result;
use anyhow::Context;
use regex::Regex;
use std::path::{Path, PathBuf};

/// Maps the first `org/name@x.y.z` id onto its checkout below `BP_ROOT`
///
/// Both the dashed and the registry spelling of the Paketo organisations
/// are accepted.
pub fn infer_jvm_vendors_path(buildpack_ids: &[String], config: &ToolConfig) -> Result<PathBuf> {
    let root = config
        .root
        .as_ref()
        .ok_or_else(|| ToolError::validation("BP_ROOT must be set"))?;

    let first = buildpack_ids.first().ok_or_else(|| {
        ToolError::validation("no buildpack IDs specified, cannot infer buildpack path")
    })?;

    let pattern = Regex::new(
        r"^(?P<org>[a-zA-Z0-9_-]+)/(?P<name>[a-zA-Z0-9_-]+)@(?P<version>\d+\.\d+\.\d+)$",
    )
    .expect("Invalid buildpack id regex pattern");

    let captures = pattern.captures(first).ok_or_else(|| {
        ToolError::validation(format!(
            "invalid buildpack id: {}, must match format 'org/name@version'",
            first
        ))
    })?;

    let org = &captures["org"];
    let name = &captures["name"];
    Ok(match org {
        "paketo-buildpacks" | "paketobuildpacks" => root.join("paketo-buildpacks").join(name),
        "paketo-community" | "paketocommunity" => root.join("paketo-community").join(name),
        _ => root.join(org).join(name),
    })
}

/// Splits `org/name@version` into id and version
fn split_versioned_id(buildpack_id: &str) -> Result<(&str, &str)> {
    buildpack_id.split_once('@').ok_or_else(|| {
        ToolError::validation(format!(
            "invalid buildpack ID: {}, must contain two parts that are `@` separated",
            buildpack_id
        ))
        .into()
    })
}

/// BuildJvmVendorsUseCase - builds JVM vendor buildpacks out of the one
/// `buildpack.toml` listing every vendor
///
/// `buildpack.toml` is backed up to `buildpack.toml.bak`, customised per
/// build, and restored from the backup once every build has run.
pub struct BuildJvmVendorsUseCase<S, X, PR> {
    bundler: BundleBuildpackUseCase<S, X, PR>,
    catalog: JvmVendorCatalog,
}

impl<S, X, PR> BuildJvmVendorsUseCase<S, X, PR>
where
    S: FileStore,
    X: CommandExecutor,
    PR: ProgressReporter,
{
    pub fn new(bundler: BundleBuildpackUseCase<S, X, PR>, catalog: JvmVendorCatalog) -> Self {
        Self { bundler, catalog }
    }

    pub fn bundler(&self) -> &BundleBuildpackUseCase<S, X, PR> {
        &self.bundler
    }

    /// Executes the build
    ///
    /// # Errors
    /// Returns [`ToolError::BackupExists`] when a previous run left its
    /// backup behind, a validation error for inconsistent ids and vendors,
    /// and any patch or bundle failure. The original `buildpack.toml` is
    /// restored before a build failure is returned.
    pub fn execute(&self, request: &JvmVendorsRequest) -> Result<()> {
        let vendors = self.resolve_vendors(request)?;

        let buildpack_path = match &request.buildpack_path {
            Some(path) => path.clone(),
            None => infer_jvm_vendors_path(&request.buildpack_ids, self.bundler.config())?,
        };
        let buildpack_toml = buildpack_path.join("buildpack.toml");
        let backup = buildpack_path.join("buildpack.toml.bak");

        let store = self.bundler.file_store();
        if store
            .exists(&backup)
            .context("failed to check for backup copy of original buildpack.toml")?
        {
            return Err(ToolError::BackupExists { path: backup }.into());
        }

        store
            .copy(&buildpack_toml, &backup)
            .context("failed to make backup copy of original buildpack.toml")?;

        let build = if request.single_buildpack {
            self.build_single(request, &vendors, &buildpack_path)
                .context("failed to build single buildpack")
        } else {
            self.build_multiple(request, &vendors, &buildpack_path, &backup)
                .context("failed to build multiple buildpacks")
        };

        store
            .copy(&backup, &buildpack_toml)
            .context("failed to restore original buildpack.toml")?;
        store.remove(&backup)?;

        build
    }

    /// The vendors to build, in request order
    fn resolve_vendors(&self, request: &JvmVendorsRequest) -> Result<Vec<JvmVendor>> {
        let reporter = self.bundler.progress_reporter();

        if request.include_all_vendors {
            if !request.vendors.is_empty() {
                reporter.report_error(
                    "⚠️  Warning: both --vendors and --include-all-vendors are set, ignoring --vendors",
                );
            }
            return Ok(self.catalog.vendors.clone());
        }

        if request.vendors.is_empty() {
            return Err(ToolError::validation(
                "vendors must be set or include-all-vendors must be set",
            )
            .into());
        }

        let mut selected = Vec::with_capacity(request.vendors.len());
        for vendor_id in &request.vendors {
            let vendor = self.catalog.find(vendor_id).ok_or_else(|| {
                ToolError::validation(format!(
                    "invalid vendor: {}, possible vendors are {:?}",
                    vendor_id,
                    self.catalog.vendor_ids()
                ))
            })?;
            selected.push(vendor.clone());
        }
        Ok(selected)
    }

    /// Picks the default vendor of a single buildpack
    ///
    /// An explicitly requested default wins when it is among the selected
    /// vendors, then the catalog default, then the first selected vendor.
    pub fn select_default_vendor(
        default_vendor: Option<&str>,
        selected: &[JvmVendor],
    ) -> Result<String> {
        let explicit = default_vendor
            .and_then(|id| selected.iter().find(|vendor| vendor.vendor_id == id));

        explicit
            .or_else(|| selected.iter().find(|vendor| vendor.default))
            .or_else(|| selected.first())
            .map(|vendor| vendor.vendor_id.clone())
            .ok_or_else(|| {
                ToolError::validation(
                    "no default vendor specified via cli args, and no default vendor found in the list of vendors",
                )
                .into()
            })
    }

    fn build_single(
        &self,
        request: &JvmVendorsRequest,
        vendors: &[JvmVendor],
        buildpack_path: &Path,
    ) -> Result<()> {
        let reporter = self.bundler.progress_reporter();
        reporter.report("➜ Building single JVM Vendors buildpack");

        let [buildpack_id] = request.buildpack_ids.as_slice() else {
            return Err(ToolError::validation(format!(
                "single buildpack requires exactly one buildpack ID, got {:?}",
                request.buildpack_ids
            ))
            .into());
        };
        let (id, version) = split_versioned_id(buildpack_id)?;

        let default_vendor =
            Self::select_default_vendor(request.default_vendor.as_deref(), vendors)?;
        let selected: Vec<&str> = vendors.iter().map(|v| v.vendor_id.as_str()).collect();
        reporter.report(&format!(
            "➜ Using default vendor {} from {:?}",
            default_vendor, selected
        ));

        let defaults = ConfigurationDefaults::default()
            .with("BP_JVM_VENDORS", selected.join(","))
            .with("BP_JVM_VENDOR", default_vendor);
        DocumentPatcher::new(self.bundler.file_store())
            .apply(&buildpack_path.join("buildpack.toml"), &[&defaults])
            .context("failed to customize buildpack.toml")?;

        self.bundler
            .execute(&self.bundle_request(request, id, version, buildpack_path, false))
    }

    fn build_multiple(
        &self,
        request: &JvmVendorsRequest,
        vendors: &[JvmVendor],
        buildpack_path: &Path,
        backup: &Path,
    ) -> Result<()> {
        let reporter = self.bundler.progress_reporter();
        reporter.report("➜ Building multiple JVM Vendors buildpacks");

        if request.buildpack_ids.len() != vendors.len() {
            return Err(ToolError::validation(format!(
                "number of buildpack IDs ({:?}) must match number of selected vendors ({:?})",
                request.buildpack_ids,
                vendors.iter().map(|v| v.vendor_id.as_str()).collect::<Vec<_>>()
            ))
            .into());
        }

        let total = vendors.len();
        for (index, (buildpack_id, vendor)) in
            request.buildpack_ids.iter().zip(vendors).enumerate()
        {
            let (id, version) = split_versioned_id(buildpack_id)?;
            let message = format!("Building {}", buildpack_id);
            reporter.report_progress(index + 1, total, Some(&message));

            self.customize_buildpack_toml(vendor, version, buildpack_path, backup)
                .context("failed to customize buildpack.toml")?;

            let skip_clean = index + 1 < total;
            self.bundler
                .execute(&self.bundle_request(request, id, version, buildpack_path, skip_clean))?;
        }

        reporter.report_completion(&format!("✅ Built {} JVM vendor buildpack(s)", total));
        Ok(())
    }

    /// Restores the original `buildpack.toml` and narrows it to one vendor
    fn customize_buildpack_toml(
        &self,
        vendor: &JvmVendor,
        version: &str,
        buildpack_path: &Path,
        backup: &Path,
    ) -> Result<()> {
        let store = self.bundler.file_store();
        let buildpack_toml = buildpack_path.join("buildpack.toml");
        store
            .copy(backup, &buildpack_toml)
            .context("failed to restore original buildpack.toml")?;

        let details = BuildpackDetails {
            id: vendor.buildpack_id.clone(),
            name: vendor.name.clone(),
            description: vendor.description.clone(),
            homepage: vendor.homepage.clone(),
            version: version.to_string(),
        };
        let defaults = ConfigurationDefaults::default().with("BP_JVM_VENDORS", &vendor.vendor_id);
        let filter = VendorDependencyFilter::new([&vendor.vendor_id]);
        let mutations: [&dyn Mutation; 3] = [&details, &defaults, &filter];

        DocumentPatcher::new(store).apply(&buildpack_toml, &mutations)
    }

    fn bundle_request(
        &self,
        request: &JvmVendorsRequest,
        id: &str,
        version: &str,
        buildpack_path: &Path,
        skip_clean: bool,
    ) -> BundleRequest {
        BundleRequest {
            buildpack_id: id.to_string(),
            buildpack_path: buildpack_path.to_path_buf(),
            version: Some(version.to_string()),
            options: request.options.clone(),
            skip_clean,
        }
    }
}
