use super::{warn_skipped, Mutation};
use crate::build_module::domain::{str_field, ConfigDocument};
use crate::shared::Result;
use toml::Value;

/// Keeps only the `metadata.dependencies` entries belonging to one of the
/// given vendors
///
/// A dependency belongs to a vendor when its id ends with `-<vendor>`
/// (`jdk-bellsoft-liberica`, `jre-bellsoft-liberica`). Entries without a
/// string id are dropped. An empty vendor list drops everything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VendorDependencyFilter {
    suffixes: Vec<String>,
}

impl VendorDependencyFilter {
    pub fn new<I, S>(vendors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            suffixes: vendors
                .into_iter()
                .map(|vendor| format!("-{}", vendor.as_ref()))
                .collect(),
        }
    }

    fn keeps(&self, dependency: &Value) -> bool {
        dependency
            .as_table()
            .and_then(|record| str_field(record, "id"))
            .map(|id| self.suffixes.iter().any(|suffix| id.ends_with(suffix.as_str())))
            .unwrap_or(false)
    }
}

impl Mutation for VendorDependencyFilter {
    fn apply(&self, document: &mut ConfigDocument) -> Result<()> {
        let Some(dependencies) = document.metadata_array_mut("dependencies") else {
            warn_skipped("vendor filter", "metadata.dependencies is missing or not a list");
            return Ok(());
        };

        dependencies.retain(|dependency| self.keeps(dependency));
        Ok(())
    }
}
