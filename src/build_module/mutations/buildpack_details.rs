use super::Mutation;
use crate::build_module::domain::ConfigDocument;
use crate::shared::Result;
use toml::Value;

/// Rewrites the identity of the `[buildpack]` table
///
/// Other keys of the table are kept. A document without a `[buildpack]`
/// table (an extension, a builder) is left alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildpackDetails {
    pub id: String,
    pub name: String,
    pub description: String,
    pub homepage: String,
    pub version: String,
}

impl Mutation for BuildpackDetails {
    fn apply(&self, document: &mut ConfigDocument) -> Result<()> {
        let Some(buildpack) = document.table_mut("buildpack") else {
            return Ok(());
        };

        for (key, value) in [
            ("description", &self.description),
            ("homepage", &self.homepage),
            ("id", &self.id),
            ("name", &self.name),
            ("version", &self.version),
        ] {
            buildpack.insert(key.to_string(), Value::String(value.clone()));
        }

        Ok(())
    }
}
