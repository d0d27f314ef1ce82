/// Use cases module containing application business logic orchestration
mod build_jvm_vendors;
mod bundle_buildpack;
mod update_build_module_dependency;
mod update_builder;
mod update_package_dependency;

pub use build_jvm_vendors::{infer_jvm_vendors_path, BuildJvmVendorsUseCase};
pub use bundle_buildpack::{infer_buildpack_path, BundleBuildpackUseCase};
pub use update_build_module_dependency::UpdateBuildModuleDependencyUseCase;
pub use update_builder::{BuilderDependency, UpdateBuilderUseCase};
pub use update_package_dependency::UpdatePackageDependencyUseCase;
