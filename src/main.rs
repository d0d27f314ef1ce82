mod adapters;
mod application;
mod build_module;
mod cli;
mod config;
mod ports;
mod shared;

use adapters::outbound::console::StderrProgressReporter;
use adapters::outbound::filesystem::FileSystemStore;
use adapters::outbound::network::EndOfLifeClient;
use adapters::outbound::process::SystemCommandExecutor;
use application::use_cases::{
    BuildJvmVendorsUseCase, BuilderDependency, BundleBuildpackUseCase,
    UpdateBuildModuleDependencyUseCase, UpdateBuilderUseCase, UpdatePackageDependencyUseCase,
};
use clap::Parser;
use cli::{Args, Command, DependencyCommand, PackageCommand, UpdateTarget};
use config::{JvmVendorCatalog, ToolConfig};
use shared::error::ExitCode;
use shared::Result;
use std::process;

fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            // --help and --version are reported as errors by clap
            let code = if e.use_stderr() {
                ExitCode::InvalidArguments
            } else {
                ExitCode::Success
            };
            let _ = e.print();
            process::exit(code.as_i32());
        }
    };

    if let Err(e) = run(args) {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(ExitCode::Failure.as_i32());
    }
}

fn run(args: Args) -> Result<()> {
    let config = ToolConfig::from_env();

    match args.command {
        Command::Dependency {
            command: DependencyCommand::Update { target },
        } => update_dependency(target),
        Command::Package {
            command: PackageCommand::Bundle(bundle_args),
        } => {
            let request = bundle_args.into_request(&config)?;
            let use_case = BundleBuildpackUseCase::new(
                FileSystemStore::new(),
                SystemCommandExecutor::new(),
                StderrProgressReporter::new(),
                config,
            );
            use_case.execute(&request)
        }
        Command::BuildJvmVendors(jvm_args) => {
            let catalog = JvmVendorCatalog::embedded()?;
            let bundler = BundleBuildpackUseCase::new(
                FileSystemStore::new(),
                SystemCommandExecutor::new(),
                StderrProgressReporter::new(),
                config,
            );
            let use_case = BuildJvmVendorsUseCase::new(bundler, catalog);
            use_case.execute(&jvm_args.into_request())
        }
    }
}

fn update_dependency(target: UpdateTarget) -> Result<()> {
    match target {
        UpdateTarget::BuildModule(build_module_args) => {
            let use_case = UpdateBuildModuleDependencyUseCase::new(
                FileSystemStore::new(),
                EndOfLifeClient::new()?,
                StderrProgressReporter::new(),
            );
            use_case.execute(build_module_args.into_request())?;
            Ok(())
        }
        UpdateTarget::Package(package_args) => {
            let use_case = UpdatePackageDependencyUseCase::new(
                FileSystemStore::new(),
                StderrProgressReporter::new(),
            );
            use_case.execute(package_args.into_request())
        }
        UpdateTarget::Lifecycle(builder_args) => {
            UpdateBuilderUseCase::new(FileSystemStore::new(), StderrProgressReporter::new())
                .execute(
                    &builder_args.builder_toml,
                    BuilderDependency::Lifecycle,
                    &builder_args.version,
                )
        }
        UpdateTarget::BuildImage(builder_args) => {
            UpdateBuilderUseCase::new(FileSystemStore::new(), StderrProgressReporter::new())
                .execute(
                    &builder_args.builder_toml,
                    BuilderDependency::BuildImage,
                    &builder_args.version,
                )
        }
    }
}
