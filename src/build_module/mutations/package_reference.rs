use super::builder::retag;
use super::Mutation;
use crate::build_module::domain::{str_field, ConfigDocument};
use crate::shared::Result;
use toml::Value;

const DOCKER_SCHEME: &str = "docker://";

/// Retags `docker://` references to an image inside a top-level array of
/// tables
///
/// `builder.toml` keeps its references under `buildpacks`, `package.toml`
/// under `dependencies`. Entries whose `uri` does not start with
/// `docker://<image>` are left alone, as are documents without the array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DockerReferenceUpdate {
    pub key: String,
    pub image: String,
    pub version: String,
}

impl DockerReferenceUpdate {
    pub fn builder_buildpacks(image: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            key: "buildpacks".to_string(),
            image: image.into(),
            version: version.into(),
        }
    }

    pub fn package_dependencies(image: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            key: "dependencies".to_string(),
            image: image.into(),
            version: version.into(),
        }
    }

    fn retag(&self, uri: &str) -> String {
        let image = uri.strip_prefix(DOCKER_SCHEME).unwrap_or(uri);
        format!("{}{}", DOCKER_SCHEME, retag(image, &self.version))
    }
}

impl Mutation for DockerReferenceUpdate {
    fn apply(&self, document: &mut ConfigDocument) -> Result<()> {
        let Some(references) = document.array_mut(&self.key) else {
            return Ok(());
        };

        let prefix = format!("{}{}", DOCKER_SCHEME, self.image);
        for reference in references.iter_mut().filter_map(Value::as_table_mut) {
            let retagged = match str_field(reference, "uri") {
                Some(uri) if uri.starts_with(&prefix) => self.retag(uri),
                _ => continue,
            };
            reference.insert("uri".to_string(), Value::String(retagged));
        }

        Ok(())
    }
}

/// Sets the version of a buildpack inside every `order[].group[]` of a
/// composite `buildpack.toml`
///
/// Group entries are matched on the last two path segments of the image,
/// so `gcr.io/paketo-buildpacks/bellsoft-liberica` matches the group id
/// `paketo-buildpacks/bellsoft-liberica`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderGroupVersionUpdate {
    pub image: String,
    pub version: String,
}

impl OrderGroupVersionUpdate {
    pub fn group_id(&self) -> String {
        let segments: Vec<&str> = self.image.split('/').collect();
        let start = segments.len().saturating_sub(2);
        segments[start..].join("/")
    }
}

impl Mutation for OrderGroupVersionUpdate {
    fn apply(&self, document: &mut ConfigDocument) -> Result<()> {
        let Some(orders) = document.array_mut("order") else {
            return Ok(());
        };

        let id = self.group_id();
        let groups = orders
            .iter_mut()
            .filter_map(Value::as_table_mut)
            .filter_map(|order| order.get_mut("group").and_then(Value::as_array_mut));

        for group in groups {
            for entry in group.iter_mut().filter_map(Value::as_table_mut) {
                if str_field(entry, "id") == Some(id.as_str()) {
                    entry.insert("version".to_string(), Value::String(self.version.clone()));
                }
            }
        }

        Ok(())
    }
}
