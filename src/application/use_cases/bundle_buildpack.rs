use crate::application::dto::BundleRequest;
use crate::config::ToolConfig;
use crate::ports::outbound::{CommandExecutor, Execution, FileStore, OutputMode, ProgressReporter};
use crate::shared::error::ToolError;
use crate::shared::Result;
use anyhow::Context;
use std::path::{Path, PathBuf};

/// Version stamped on buildpacks built from an untagged checkout
const DEV_VERSION: &str = "DEV";

/// Maps a buildpack id onto its checkout below `BP_ROOT`
///
/// `paketobuildpacks/<name>` lives in `paketo-buildpacks/<name>`,
/// `paketocommunity/<name>` in `paketo-community/<name>`; any other id is
/// used as a relative path.
pub fn infer_buildpack_path(buildpack_id: &str, config: &ToolConfig) -> Result<PathBuf> {
    let root = config
        .root
        .as_ref()
        .ok_or_else(|| ToolError::validation("BP_ROOT must be set"))?;

    let (org, name) = buildpack_id.split_once('/').ok_or_else(|| {
        ToolError::validation(format!(
            "invalid buildpack id: {}, must contain two parts that are `/` separated",
            buildpack_id
        ))
    })?;

    Ok(match org {
        "paketobuildpacks" => root.join("paketo-buildpacks").join(name),
        "paketocommunity" => root.join("paketo-community").join(name),
        _ => root.join(buildpack_id),
    })
}

/// BundleBuildpackUseCase - compiles and packages one buildpack
///
/// Component buildpacks (those with `cmd/main/main.go`) are compiled with
/// `create-package` into a scratch directory which is then packaged.
/// Composite buildpacks are packaged from their own directory with a
/// generated `package.toml` pointing at the scratch directory.
///
/// # Type Parameters
/// * `S` - FileStore implementation
/// * `X` - CommandExecutor implementation
/// * `PR` - ProgressReporter implementation
pub struct BundleBuildpackUseCase<S, X, PR> {
    file_store: S,
    executor: X,
    progress_reporter: PR,
    config: ToolConfig,
}

impl<S, X, PR> BundleBuildpackUseCase<S, X, PR>
where
    S: FileStore,
    X: CommandExecutor,
    PR: ProgressReporter,
{
    pub fn new(file_store: S, executor: X, progress_reporter: PR, config: ToolConfig) -> Self {
        Self {
            file_store,
            executor,
            progress_reporter,
            config,
        }
    }

    pub(crate) fn file_store(&self) -> &S {
        &self.file_store
    }

    pub(crate) fn progress_reporter(&self) -> &PR {
        &self.progress_reporter
    }

    pub fn executor(&self) -> &X {
        &self.executor
    }

    pub(crate) fn config(&self) -> &ToolConfig {
        &self.config
    }

    /// Derives the version from the closest `v*` tag, or `DEV` when the
    /// checkout has none
    pub fn infer_buildpack_version(&self, buildpack_path: &Path) -> Result<String> {
        let execution = Execution::new("git", ["describe", "--tags", "--match", "v*"])
            .in_dir(buildpack_path)
            .with_output(OutputMode::Capture);

        let output = self
            .executor
            .execute(&execution)
            .context("unable to execute git command")?;

        let described = output.trim();
        if described.is_empty() {
            return Ok(DEV_VERSION.to_string());
        }
        Ok(described.strip_prefix('v').unwrap_or(described).to_string())
    }

    /// Removes dangling images left behind by `pack`
    pub fn clean_up_docker_images(&self) -> Result<()> {
        let list = Execution::new(
            "docker",
            ["image", "ls", "--quiet", "--no-trunc", "--filter", "dangling=true"],
        )
        .with_output(OutputMode::Capture);

        let output = self
            .executor
            .execute(&list)
            .context("unable to execute `docker image ls` command")?;

        let images: Vec<&str> = output
            .lines()
            .map(str::trim)
            .filter(|image| !image.is_empty())
            .collect();

        if images.is_empty() {
            return Ok(());
        }

        let mut args = vec!["image", "rm", "-f"];
        args.extend(images.iter().copied());
        let remove = Execution::new("docker", args).with_output(OutputMode::Discard);

        self.executor.execute(&remove).with_context(|| {
            format!(
                "unable to execute `docker image rm` command on images {:?}",
                images
            )
        })?;
        Ok(())
    }

    /// Runs `pack buildpack package` in `working_dir`
    pub fn execute_package(
        &self,
        request: &BundleRequest,
        working_dir: &Path,
        extra_args: &[String],
    ) -> Result<()> {
        let mut args = vec![
            "buildpack".to_string(),
            "package".to_string(),
            request.image_name().to_string(),
            "--pull-policy".to_string(),
            self.config.pull_policy().to_string(),
        ];

        if request.options.publish {
            args.push("--publish".to_string());
        } else {
            args.push("--target".to_string());
            args.push(self.config.target_platform());
        }
        args.extend(extra_args.iter().cloned());

        let execution = Execution::new("pack", args).in_dir(working_dir);
        self.executor
            .execute(&execution)
            .context("unable to execute `pack buildpack package` command")?;
        Ok(())
    }

    /// Compiles a component buildpack into `destination` with `create-package`
    pub fn compile_package(
        &self,
        request: &BundleRequest,
        version: &str,
        destination: &Path,
    ) -> Result<()> {
        let options = &request.options;
        let mut args = vec![
            "--source".to_string(),
            request.buildpack_path.display().to_string(),
            "--destination".to_string(),
            destination.display().to_string(),
            "--version".to_string(),
            version.to_string(),
        ];

        if let Some(cache_location) = &options.cache_location {
            args.push("--cache-location".to_string());
            args.push(cache_location.clone());
        }
        if options.include_dependencies {
            args.push("--include-dependencies".to_string());
        }
        for filter in &options.dependency_filters {
            args.push("--dependency-filter".to_string());
            args.push(filter.clone());
        }
        if options.strict_filters {
            args.push("--strict-filters".to_string());
        }

        let execution = Execution::new("create-package", args);
        self.executor
            .execute(&execution)
            .context("unable to compile buildpack")?;
        Ok(())
    }

    /// Packages a composite buildpack through a generated `package.toml`
    ///
    /// `buildpack.toml` is copied to `destination`, and the original
    /// `package.toml` is rewritten there with a `[buildpack]` uri pointing at
    /// `destination`. `pack` still runs in the buildpack directory.
    pub fn bundle_composite(&self, request: &BundleRequest, destination: &Path) -> Result<()> {
        let source = &request.buildpack_path;

        self.file_store
            .copy(&source.join("buildpack.toml"), &destination.join("buildpack.toml"))
            .context("unable to copy buildpack.toml")?;

        let package = self
            .file_store
            .read(&source.join("package.toml"))
            .context("unable to open package.toml")?;

        let mut content = format!("[buildpack]\nuri = \"{}\"\n\n", destination.display()).into_bytes();
        content.extend_from_slice(&package.content);

        let package_toml = destination.join("package.toml");
        self.file_store
            .write(&package_toml, &content, &package.permissions)
            .context("unable to create package.toml")?;

        let mut args = vec!["--config".to_string(), package_toml.display().to_string()];
        if !self.config.flatten_disabled {
            args.push("--flatten".to_string());
        }

        self.progress_reporter
            .report(&format!("➜ Package Buildpack: {}", request.buildpack_id));
        self.execute_package(request, source, &args)
    }

    /// Builds the buildpack described by `request`
    pub fn execute(&self, request: &BundleRequest) -> Result<()> {
        let version = match &request.version {
            Some(version) => version.clone(),
            None => self.infer_buildpack_version(&request.buildpack_path)?,
        };

        let build_dir = tempfile::Builder::new()
            .prefix("BundleBuildpack")
            .tempdir()
            .context("unable to create temporary directory")?;

        let main_go = request.buildpack_path.join("cmd").join("main").join("main.go");
        let is_component = self
            .file_store
            .exists(&main_go)
            .context("unable to check if file exists")?;

        if is_component {
            self.progress_reporter.report(&format!(
                "➜ Compile Buildpack: {} {}",
                request.buildpack_id, version
            ));
            self.compile_package(request, &version, build_dir.path())?;
            self.execute_package(request, build_dir.path(), &[])?;
        } else {
            self.bundle_composite(request, build_dir.path())?;
        }

        if !request.skip_clean {
            self.progress_reporter.report("➜ Cleaning up Docker images");
            self.clean_up_docker_images()
                .context("unable to clean up docker images")?;
        }

        Ok(())
    }
}
