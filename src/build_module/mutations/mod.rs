//! Composable edits applied to a decoded [`ConfigDocument`].
//!
//! Every mutation is a value implementing [`Mutation`]. The document patcher
//! runs them in order against the same document, so later mutations observe
//! the effect of earlier ones.

mod buildpack_details;
mod builder;
mod configuration_defaults;
mod dependency_update;
mod package_reference;
mod vendor_filter;

pub use buildpack_details::BuildpackDetails;
pub use builder::{BuildImageUpdate, LifecycleVersionUpdate};
pub use configuration_defaults::ConfigurationDefaults;
pub use dependency_update::{DependencyPatterns, DependencyRecordUpdate, DependencyUpdate};
pub use package_reference::{DockerReferenceUpdate, OrderGroupVersionUpdate};
pub use vendor_filter::VendorDependencyFilter;

use crate::build_module::domain::ConfigDocument;
use crate::shared::Result;

/// A single edit of a decoded build module document
pub trait Mutation {
    /// Applies the edit in place
    ///
    /// # Errors
    /// Returns an error when the document lacks structure the edit cannot do
    /// without. The patcher then aborts before anything is written.
    fn apply(&self, document: &mut ConfigDocument) -> Result<()>;
}

impl<F> Mutation for F
where
    F: Fn(&mut ConfigDocument) -> Result<()>,
{
    fn apply(&self, document: &mut ConfigDocument) -> Result<()> {
        self(document)
    }
}

/// Prints a warning for edits that skip a document lacking the expected shape
pub(crate) fn warn_skipped(mutation: &str, reason: &str) {
    eprintln!("⚠️  Warning: {} skipped, {}", mutation, reason);
}
