use super::Mutation;
use crate::build_module::domain::{str_field, ArchResolver, ChecksumScheme, ConfigDocument};
use crate::ports::outbound::EolRepository;
use crate::shared::error::ToolError;
use crate::shared::Result;
use regex::Regex;
use std::cell::Cell;
use toml::{Table, Value};

/// New values for the dependency records selected by id, arch and version
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyUpdate {
    pub id: String,
    pub arch: String,
    pub version: String,
    pub uri: String,
    pub sha256: String,
    /// Replacement applied to `purl`/`purls` matches of the purl pattern
    pub purl: String,
    /// Replacement applied to `cpes` matches of the cpe pattern
    pub cpe: String,
    pub source: Option<String>,
    pub source_sha256: Option<String>,
    /// endoflife.date product id; no lookup when absent
    pub eol_id: Option<String>,
}

/// The three caller-supplied patterns, compiled before any file is read
#[derive(Debug, Clone)]
pub struct DependencyPatterns {
    version: Regex,
    purl: Regex,
    cpe: Regex,
}

impl DependencyPatterns {
    pub fn compile(version: &str, purl: &str, cpe: &str) -> std::result::Result<Self, ToolError> {
        Ok(Self {
            version: compile_pattern("version", version)?,
            purl: compile_pattern("purl", purl)?,
            cpe: compile_pattern("cpe", cpe)?,
        })
    }
}

fn compile_pattern(kind: &str, pattern: &str) -> std::result::Result<Regex, ToolError> {
    Regex::new(pattern).map_err(|e| ToolError::Pattern {
        kind: kind.to_string(),
        pattern: pattern.to_string(),
        details: e.to_string(),
    })
}

/// Rewrites every record in `metadata.dependencies` whose id and derived
/// architecture equal the target and whose current version matches the
/// version pattern
///
/// Records failing any of the three checks are left untouched, which lets
/// several release lines of one dependency live side by side and be bumped
/// independently.
pub struct DependencyRecordUpdate<'a, E> {
    update: DependencyUpdate,
    patterns: DependencyPatterns,
    arch_resolver: ArchResolver,
    eol_repository: &'a E,
    matched: Cell<usize>,
}

impl<'a, E: EolRepository> DependencyRecordUpdate<'a, E> {
    pub fn new(update: DependencyUpdate, patterns: DependencyPatterns, eol_repository: &'a E) -> Self {
        Self {
            update,
            patterns,
            arch_resolver: ArchResolver::new(),
            eol_repository,
            matched: Cell::new(0),
        }
    }

    /// Number of records rewritten so far
    pub fn matched(&self) -> usize {
        self.matched.get()
    }

    fn selects(&self, record: &Table) -> bool {
        if str_field(record, "id") != Some(self.update.id.as_str()) {
            return false;
        }

        if self.arch_resolver.resolve(record) != self.update.arch {
            return false;
        }

        str_field(record, "version")
            .map(|version| self.patterns.version.is_match(version))
            .unwrap_or(false)
    }

    fn rewrite(&self, record: &mut Table) -> Result<()> {
        let update = &self.update;

        record.insert("version".to_string(), Value::String(update.version.clone()));
        record.insert("uri".to_string(), Value::String(update.uri.clone()));

        let detected = ChecksumScheme::detect(record);
        if let Some(scheme) = detected {
            record.insert(
                scheme.checksum_key().to_string(),
                Value::String(scheme.format_sha256(&update.sha256)),
            );
        }
        // records carrying neither checksum key get legacy names for the
        // remaining fields
        let scheme = detected.unwrap_or(ChecksumScheme::Legacy);

        if let Some(source_sha256) = &update.source_sha256 {
            record.insert(
                scheme.source_checksum_key().to_string(),
                Value::String(scheme.format_sha256(source_sha256)),
            );
        }

        if let Some(source) = &update.source {
            record.insert("source".to_string(), Value::String(source.clone()));
        }

        self.rewrite_purls(record);
        self.rewrite_cpes(record);

        if let Some(eol_id) = &update.eol_id {
            let eol_date = self
                .eol_repository
                .eol_date(eol_id, &update.version)
                .map_err(|e| ToolError::Lookup {
                    product: eol_id.clone(),
                    version: update.version.clone(),
                    details: format!("{:#}", e),
                })?;

            if let Some(date) = eol_date.filter(|date| !date.is_empty()) {
                record.insert(scheme.eol_key().to_string(), Value::String(date));
            }
        }

        Ok(())
    }

    fn rewrite_purls(&self, record: &mut Table) {
        if let Some(Value::String(purl)) = record.get_mut("purl") {
            *purl = self.patterns.purl.replace_all(purl, self.update.purl.as_str()).into_owned();
            return;
        }

        if let Some(Value::Array(purls)) = record.get_mut("purls") {
            replace_strings(purls, &self.patterns.purl, &self.update.purl);
        }
    }

    fn rewrite_cpes(&self, record: &mut Table) {
        if let Some(Value::Array(cpes)) = record.get_mut("cpes") {
            replace_strings(cpes, &self.patterns.cpe, &self.update.cpe);
        }
    }
}

fn replace_strings(values: &mut [Value], pattern: &Regex, replacement: &str) {
    for value in values.iter_mut() {
        if let Value::String(s) = value {
            *s = pattern.replace_all(s, replacement).into_owned();
        }
    }
}

impl<E: EolRepository> Mutation for DependencyRecordUpdate<'_, E> {
    fn apply(&self, document: &mut ConfigDocument) -> Result<()> {
        let dependencies = document.require_metadata_array_mut("dependencies")?;

        for dependency in dependencies.iter_mut() {
            let Some(record) = dependency.as_table_mut() else {
                continue;
            };

            if self.selects(record) {
                self.rewrite(record)?;
                self.matched.set(self.matched.get() + 1);
            }
        }

        Ok(())
    }
}
