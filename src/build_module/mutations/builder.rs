use super::Mutation;
use crate::build_module::domain::ConfigDocument;
use crate::shared::error::ToolError;
use crate::shared::Result;
use regex::{Captures, Regex};
use toml::Value;

/// Moves the `[lifecycle]` of a `builder.toml` to a new release
///
/// `version` is replaced when present. A release download `uri`
/// (`.../download/v0.17.0/lifecycle-v0.17.0+linux.x86-64.tgz`) has both
/// version occurrences rewritten.
#[derive(Debug, Clone)]
pub struct LifecycleVersionUpdate {
    version: String,
    release_uri: Regex,
}

impl LifecycleVersionUpdate {
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            release_uri: Regex::new(r"(/download/v)[^/]+(/lifecycle-v)[^+]+")
                .expect("Invalid lifecycle uri regex pattern"),
        }
    }

    fn rewrite_uri(&self, uri: &str) -> String {
        self.release_uri
            .replace(uri, |caps: &Captures| {
                format!("{}{}{}{}", &caps[1], self.version, &caps[2], self.version)
            })
            .into_owned()
    }
}

impl Mutation for LifecycleVersionUpdate {
    fn apply(&self, document: &mut ConfigDocument) -> Result<()> {
        let lifecycle = document
            .table_mut("lifecycle")
            .ok_or_else(|| ToolError::structure("unable to find lifecycle block"))?;

        if lifecycle.contains_key("version") {
            lifecycle.insert("version".to_string(), Value::String(self.version.clone()));
        }

        if let Some(Value::String(uri)) = lifecycle.get_mut("uri") {
            *uri = self.rewrite_uri(uri);
        }

        Ok(())
    }
}

/// Retags the build image of a `builder.toml`
///
/// Both the `stack.build-image` and the `build.image` layouts are handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildImageUpdate {
    pub version: String,
}

impl BuildImageUpdate {
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
        }
    }

    fn retag_field(&self, document: &mut ConfigDocument, table: &str, key: &str) -> bool {
        let Some(Value::String(image)) = document
            .table_mut(table)
            .and_then(|table| table.get_mut(key))
        else {
            return false;
        };

        *image = retag(image, &self.version);
        true
    }
}

impl Mutation for BuildImageUpdate {
    fn apply(&self, document: &mut ConfigDocument) -> Result<()> {
        let stack = self.retag_field(document, "stack", "build-image");
        let build = self.retag_field(document, "build", "image");

        if !stack && !build {
            return Err(ToolError::structure(
                "unable to find stack.build-image or build.image",
            )
            .into());
        }

        Ok(())
    }
}

/// Replaces the tag of an image reference, adding one when it has none.
/// A registry port (`localhost:5000/image`) is not mistaken for a tag.
pub(super) fn retag(image: &str, version: &str) -> String {
    let repository = match image.rsplit_once(':') {
        Some((repository, tag)) if !tag.contains('/') => repository,
        _ => image,
    };
    format!("{}:{}", repository, version)
}
