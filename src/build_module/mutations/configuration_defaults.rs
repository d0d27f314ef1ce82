use super::{warn_skipped, Mutation};
use crate::build_module::domain::{str_field, ConfigDocument};
use crate::shared::Result;
use std::collections::BTreeMap;
use toml::Value;

/// Sets the `default` of named `metadata.configurations` entries
///
/// Entries are matched by their `name`. Unknown names are ignored and no
/// entry is added or removed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ConfigurationDefaults {
    defaults: BTreeMap<String, String>,
}

impl ConfigurationDefaults {
    pub fn new(defaults: BTreeMap<String, String>) -> Self {
        Self { defaults }
    }

    pub fn with(mut self, name: impl Into<String>, default: impl Into<String>) -> Self {
        self.defaults.insert(name.into(), default.into());
        self
    }
}

impl Mutation for ConfigurationDefaults {
    fn apply(&self, document: &mut ConfigDocument) -> Result<()> {
        let Some(configurations) = document.metadata_array_mut("configurations") else {
            warn_skipped(
                "configuration update",
                "metadata.configurations is missing or not a list",
            );
            return Ok(());
        };

        for configuration in configurations.iter_mut().filter_map(Value::as_table_mut) {
            let new_default = str_field(configuration, "name")
                .and_then(|name| self.defaults.get(name))
                .cloned();

            if let Some(default) = new_default {
                configuration.insert("default".to_string(), Value::String(default));
            }
        }

        Ok(())
    }
}
