use clap::builder::NonEmptyStringValueParser;
use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

use crate::application::dto::{
    BuildModuleDependencyRequest, BundleOptions, BundleRequest, JvmVendorsRequest,
    PackageDependencyRequest,
};
use crate::application::use_cases::infer_buildpack_path;
use crate::build_module::domain::DEFAULT_ARCH;
use crate::build_module::mutations::DependencyUpdate;
use crate::config::ToolConfig;
use crate::shared::error::ToolError;
use crate::shared::Result;

/// A set of tools for managing libpak based buildpacks
#[derive(Parser, Debug)]
#[command(name = "buildpack-tools")]
#[command(version)]
#[command(about = "A set of tools for managing libpak based buildpacks", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Manage the dependencies of buildpacks and builders
    Dependency {
        #[command(subcommand)]
        command: DependencyCommand,
    },
    /// Package buildpacks into images
    Package {
        #[command(subcommand)]
        command: PackageCommand,
    },
    /// Build JVM Vendors Buildpacks
    BuildJvmVendors(BuildJvmVendorsArgs),
}

#[derive(Subcommand, Debug)]
pub enum DependencyCommand {
    /// Update a dependency in place
    Update {
        #[command(subcommand)]
        target: UpdateTarget,
    },
}

#[derive(Subcommand, Debug)]
pub enum UpdateTarget {
    /// Update a build module dependency
    BuildModule(BuildModuleArgs),
    /// Update a package dependency
    Package(PackageArgs),
    /// Update a lifecycle dependency
    Lifecycle(BuilderArgs),
    /// Update a build image dependency
    BuildImage(BuilderArgs),
}

#[derive(Subcommand, Debug)]
pub enum PackageCommand {
    /// Compile and package a single buildpack
    Bundle(BundleArgs),
}

#[derive(ClapArgs, Debug)]
pub struct BuildModuleArgs {
    /// Path to buildpack.toml or extension.toml
    #[arg(long = "buildmodule-toml", value_name = "PATH")]
    pub buildmodule_toml: PathBuf,

    /// The id of the dependency
    #[arg(long, value_parser = NonEmptyStringValueParser::new())]
    pub id: String,

    /// The architecture of the dependency
    #[arg(long, default_value = DEFAULT_ARCH, value_parser = NonEmptyStringValueParser::new())]
    pub arch: String,

    /// The new version of the dependency
    #[arg(long, value_parser = NonEmptyStringValueParser::new())]
    pub version: String,

    /// The new uri of the dependency
    #[arg(long, value_parser = NonEmptyStringValueParser::new())]
    pub uri: String,

    /// The new sha256 of the dependency
    #[arg(long, value_parser = NonEmptyStringValueParser::new())]
    pub sha256: String,

    /// The version pattern of the dependency
    #[arg(
        long = "version-pattern",
        value_name = "REGEX",
        value_parser = NonEmptyStringValueParser::new()
    )]
    pub version_pattern: String,

    /// The new purl version of the dependency, defaults to version
    #[arg(long)]
    pub purl: Option<String>,

    /// The purl version pattern of the dependency, defaults to version-pattern
    #[arg(long = "purl-pattern", value_name = "REGEX")]
    pub purl_pattern: Option<String>,

    /// The new version used in all CPEs, defaults to version
    #[arg(long)]
    pub cpe: Option<String>,

    /// The cpe version pattern of the dependency, defaults to version-pattern
    #[arg(long = "cpe-pattern", value_name = "REGEX")]
    pub cpe_pattern: Option<String>,

    /// The new source uri of the dependency
    #[arg(long)]
    pub source: Option<String>,

    /// The new sha256 of the dependency source
    #[arg(long = "source-sha256")]
    pub source_sha256: Option<String>,

    /// The endoflife.date product id used to look up the EOL date
    #[arg(long = "eol-id")]
    pub eol_id: Option<String>,
}

/// Treats `--flag ""` like an absent flag
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.is_empty())
}

impl BuildModuleArgs {
    pub fn into_request(self) -> BuildModuleDependencyRequest {
        let purl = non_empty(self.purl).unwrap_or_else(|| self.version.clone());
        let cpe = non_empty(self.cpe).unwrap_or_else(|| self.version.clone());
        let purl_pattern =
            non_empty(self.purl_pattern).unwrap_or_else(|| self.version_pattern.clone());
        let cpe_pattern =
            non_empty(self.cpe_pattern).unwrap_or_else(|| self.version_pattern.clone());

        BuildModuleDependencyRequest {
            buildmodule_path: self.buildmodule_toml,
            update: DependencyUpdate {
                id: self.id,
                arch: self.arch,
                version: self.version,
                uri: self.uri,
                sha256: self.sha256,
                purl,
                cpe,
                source: non_empty(self.source),
                source_sha256: non_empty(self.source_sha256),
                eol_id: non_empty(self.eol_id),
            },
            version_pattern: self.version_pattern,
            purl_pattern,
            cpe_pattern,
        }
    }
}

#[derive(ClapArgs, Debug)]
pub struct PackageArgs {
    /// Path to builder.toml
    #[arg(long = "builder-toml", value_name = "PATH")]
    pub builder_toml: Option<PathBuf>,

    /// Path to buildpack.toml
    #[arg(long = "buildpack-toml", value_name = "PATH")]
    pub buildpack_toml: Option<PathBuf>,

    /// Path to package.toml
    #[arg(long = "package-toml", value_name = "PATH")]
    pub package_toml: Option<PathBuf>,

    /// The image of the dependency
    #[arg(long, value_parser = NonEmptyStringValueParser::new())]
    pub id: String,

    /// The new version of the dependency
    #[arg(long, value_parser = NonEmptyStringValueParser::new())]
    pub version: String,
}

impl PackageArgs {
    pub fn into_request(self) -> PackageDependencyRequest {
        PackageDependencyRequest {
            builder_path: self.builder_toml,
            package_path: self.package_toml,
            buildpack_path: self.buildpack_toml,
            id: self.id,
            version: self.version,
        }
    }
}

#[derive(ClapArgs, Debug)]
pub struct BuilderArgs {
    /// Path to builder.toml
    #[arg(long = "builder-toml", value_name = "PATH")]
    pub builder_toml: PathBuf,

    /// The new version of the dependency
    #[arg(long, value_parser = NonEmptyStringValueParser::new())]
    pub version: String,
}

/// Flags shared by `package bundle` and `build-jvm-vendors`
#[derive(ClapArgs, Debug)]
pub struct PackagingArgs {
    /// Path to cache downloaded dependencies (default: $PWD/dependencies)
    #[arg(long = "cache-location", value_name = "PATH")]
    pub cache_location: Option<String>,

    /// Whether to include dependencies
    #[arg(long = "include-dependencies")]
    pub include_dependencies: bool,

    /// One or more filters that are applied to exclude dependencies
    #[arg(long = "dependency-filter", value_name = "FILTER")]
    pub dependency_filters: Vec<String>,

    /// Require filter to match all data or just some data
    #[arg(long = "strict-filters")]
    pub strict_filters: bool,

    /// Prefix for the registry to publish to (default: the buildpack id)
    #[arg(long = "registry-name")]
    pub registry_name: Option<String>,

    /// Publish the buildpack to a buildpack registry
    #[arg(long)]
    pub publish: bool,
}

impl From<PackagingArgs> for BundleOptions {
    fn from(args: PackagingArgs) -> Self {
        BundleOptions {
            cache_location: non_empty(args.cache_location),
            include_dependencies: args.include_dependencies,
            dependency_filters: args.dependency_filters,
            strict_filters: args.strict_filters,
            registry_name: non_empty(args.registry_name),
            publish: args.publish,
        }
    }
}

#[derive(ClapArgs, Debug)]
pub struct BundleArgs {
    /// Id of the buildpack to use
    #[arg(long = "buildpack-id")]
    pub buildpack_id: Option<String>,

    /// Path to buildpack directory
    #[arg(long = "buildpack-path", value_name = "PATH")]
    pub buildpack_path: Option<PathBuf>,

    /// Version to substitute into buildpack.toml/extension.toml
    #[arg(long)]
    pub version: Option<String>,

    #[command(flatten)]
    pub packaging: PackagingArgs,
}

impl BundleArgs {
    /// Resolves the buildpack location, inferring the path from the id
    ///
    /// # Errors
    /// Returns a validation error when neither id nor path is given, when
    /// only a path is given, or when the path cannot be inferred.
    pub fn into_request(self, config: &ToolConfig) -> Result<BundleRequest> {
        let buildpack_id = non_empty(self.buildpack_id);
        let buildpack_path = self.buildpack_path.filter(|path| !path.as_os_str().is_empty());

        let (buildpack_id, buildpack_path) = match (buildpack_id, buildpack_path) {
            (None, None) => {
                return Err(
                    ToolError::validation("buildpack-id or buildpack-path must be set").into(),
                )
            }
            (None, Some(_)) => {
                return Err(ToolError::validation(
                    "buildpack-id and buildpack-path must both be set",
                )
                .into())
            }
            (Some(id), Some(path)) => (id, path),
            (Some(id), None) => {
                let path = infer_buildpack_path(&id, config)?;
                (id, path)
            }
        };

        let mut request = BundleRequest::new(buildpack_id, buildpack_path);
        request.version = non_empty(self.version);
        request.options = self.packaging.into();
        Ok(request)
    }
}

#[derive(ClapArgs, Debug)]
pub struct BuildJvmVendorsArgs {
    /// Buildpack id with version, `org/name@x.y.z`; one per vendor
    #[arg(long = "buildpack-id", value_name = "ID@VERSION", required = true)]
    pub buildpack_ids: Vec<String>,

    /// Build output is a single buildpack with the listed vendors
    #[arg(long = "single-buildpack")]
    pub single_buildpack: bool,

    /// Include all of the vendors
    #[arg(long = "include-all-vendors")]
    pub include_all_vendors: bool,

    /// List of vendors to build
    #[arg(long = "vendors", value_name = "VENDOR")]
    pub vendors: Vec<String>,

    /// Default vendor of a single buildpack
    #[arg(long = "default-vendor", value_name = "VENDOR")]
    pub default_vendor: Option<String>,

    /// Path to buildpack directory
    #[arg(long = "buildpack-path", value_name = "PATH")]
    pub buildpack_path: Option<PathBuf>,

    #[command(flatten)]
    pub packaging: PackagingArgs,
}

impl BuildJvmVendorsArgs {
    pub fn into_request(self) -> JvmVendorsRequest {
        JvmVendorsRequest {
            buildpack_ids: self.buildpack_ids,
            buildpack_path: self.buildpack_path.filter(|path| !path.as_os_str().is_empty()),
            vendors: self.vendors,
            include_all_vendors: self.include_all_vendors,
            default_vendor: non_empty(self.default_vendor),
            single_buildpack: self.single_buildpack,
            options: self.packaging.into(),
        }
    }
}
