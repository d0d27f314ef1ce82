use crate::shared::error::ToolError;
use toml::value::Array;
use toml::{Table, Value};

/// In-memory form of a build module metadata file (`buildpack.toml`,
/// `builder.toml`, `package.toml`, `extension.toml`)
///
/// The tree is held as a plain [`toml::Table`]. Encoding emits keys in sorted
/// order and drops inline comments; only the leading comment block survives a
/// round trip, through [`AnnotatedDocument`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ConfigDocument {
    root: Table,
}

impl ConfigDocument {
    pub fn new(root: Table) -> Self {
        Self { root }
    }

    pub fn parse(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str::<Table>(content).map(Self::new)
    }

    pub fn to_toml(&self) -> std::result::Result<String, toml::ser::Error> {
        toml::to_string(&self.root)
    }

    pub fn root(&self) -> &Table {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut Table {
        &mut self.root
    }

    pub fn into_root(self) -> Table {
        self.root
    }

    /// Returns the top-level table stored under `key`, if it is a table
    pub fn table(&self, key: &str) -> Option<&Table> {
        self.root.get(key).and_then(Value::as_table)
    }

    pub fn table_mut(&mut self, key: &str) -> Option<&mut Table> {
        self.root.get_mut(key).and_then(Value::as_table_mut)
    }

    /// Returns the top-level array stored under `key`, if it is an array
    pub fn array_mut(&mut self, key: &str) -> Option<&mut Array> {
        self.root.get_mut(key).and_then(Value::as_array_mut)
    }

    /// Returns the array at `metadata.<key>` if both levels have the expected
    /// type
    pub fn metadata_array_mut(&mut self, key: &str) -> Option<&mut Array> {
        self.table_mut("metadata")
            .and_then(|metadata| metadata.get_mut(key))
            .and_then(Value::as_array_mut)
    }

    /// Strict form of [`Self::metadata_array_mut`] reporting which level is
    /// missing or mistyped
    pub fn require_metadata_array_mut(&mut self, key: &str) -> Result<&mut Array, ToolError> {
        let metadata = self
            .root
            .get_mut("metadata")
            .ok_or_else(|| ToolError::structure("unable to find metadata block"))?
            .as_table_mut()
            .ok_or_else(|| ToolError::structure("metadata is not a table"))?;

        metadata
            .get_mut(key)
            .ok_or_else(|| ToolError::structure(format!("unable to find {} block", key)))?
            .as_array_mut()
            .ok_or_else(|| ToolError::structure(format!("{} is not a list", key)))
    }
}

/// A decoded document together with the verbatim comment header that
/// preceded it on disk
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotatedDocument {
    pub header: String,
    pub document: ConfigDocument,
}

impl AnnotatedDocument {
    /// Splits off the leading comment block and decodes the content
    ///
    /// The whole content is handed to the decoder; comments are valid TOML so
    /// the header never changes the decoded tree.
    pub fn decode(content: &str) -> std::result::Result<Self, toml::de::Error> {
        let header = leading_comments(content).to_string();
        let document = ConfigDocument::parse(content)?;
        Ok(Self { header, document })
    }

    /// Encodes the document and prepends the saved header
    pub fn encode(&self) -> std::result::Result<String, toml::ser::Error> {
        let body = self.document.to_toml()?;
        let mut output = String::with_capacity(self.header.len() + body.len());
        output.push_str(&self.header);
        output.push_str(&body);
        Ok(output)
    }
}

/// Returns the leading comment block of `content`
///
/// A line belongs to the block when it starts with `#`, or when it is blank
/// and is not the first line. Scanning stops at the first line that is
/// neither, so a file opening with a blank line has no header.
pub fn leading_comments(content: &str) -> &str {
    let mut end = 0;
    for (index, line) in content.split_inclusive('\n').enumerate() {
        if line.starts_with('#') || (index > 0 && line.trim().is_empty()) {
            end += line.len();
        } else {
            break;
        }
    }
    &content[..end]
}
