//! buildpack-tools - maintenance tooling for libpak based buildpacks
//!
//! This library rewrites the TOML descriptors of Cloud Native Buildpacks
//! (`buildpack.toml`, `extension.toml`, `builder.toml`, `package.toml`) when
//! upstream dependencies move, and drives `create-package`, `pack` and
//! `docker` to bundle buildpacks into images. It follows hexagonal
//! architecture principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`build_module`): TOML documents, the mutations applied
//!   to them and the patcher that reads, mutates and writes a file
//! - **Application Layer** (`application`): Use cases and request DTOs
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Configuration** (`config`): Environment settings and the JVM vendor catalog
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use buildpack_tools::prelude::*;
//! use std::path::Path;
//!
//! # fn main() -> Result<()> {
//! let use_case = UpdateBuilderUseCase::new(FileSystemStore::new(), StderrProgressReporter::new());
//! use_case.execute(Path::new("builder.toml"), BuilderDependency::Lifecycle, "0.20.0")?;
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod build_module;
pub mod config;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::FileSystemStore;
    pub use crate::adapters::outbound::network::EndOfLifeClient;
    pub use crate::adapters::outbound::process::SystemCommandExecutor;
    pub use crate::application::dto::{
        BuildModuleDependencyRequest, BundleOptions, BundleRequest, JvmVendorsRequest,
        PackageDependencyRequest,
    };
    pub use crate::application::use_cases::{
        BuildJvmVendorsUseCase, BuilderDependency, BundleBuildpackUseCase,
        UpdateBuildModuleDependencyUseCase, UpdateBuilderUseCase, UpdatePackageDependencyUseCase,
    };
    pub use crate::build_module::domain::{AnnotatedDocument, ConfigDocument};
    pub use crate::build_module::mutations::{DependencyUpdate, Mutation};
    pub use crate::build_module::services::{DocumentPatcher, PatchBatch};
    pub use crate::config::{JvmVendor, JvmVendorCatalog, ToolConfig};
    pub use crate::ports::outbound::{
        CommandExecutor, EolRepository, Execution, FileStore, OutputMode, ProgressReporter,
        StoredFile,
    };
    pub use crate::shared::error::ToolError;
    pub use crate::shared::Result;
}
