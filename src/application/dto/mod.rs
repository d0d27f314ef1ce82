/// Data Transfer Objects for application layer
///
/// DTOs carry the already validated command-line input into the use cases,
/// keeping clap types out of the application core.
mod build_module_dependency_request;
mod bundle_request;
mod jvm_vendors_request;
mod package_dependency_request;

pub use build_module_dependency_request::BuildModuleDependencyRequest;
pub use bundle_request::{BundleOptions, BundleRequest};
pub use jvm_vendors_request::JvmVendorsRequest;
pub use package_dependency_request::PackageDependencyRequest;
