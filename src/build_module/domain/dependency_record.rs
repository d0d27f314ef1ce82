use regex::Regex;
use toml::{Table, Value};

/// Architecture assumed for records that do not say otherwise
pub const DEFAULT_ARCH: &str = "amd64";

/// Returns the string stored under `key`, ignoring values of any other type
pub fn str_field<'a>(record: &'a Table, key: &str) -> Option<&'a str> {
    record.get(key).and_then(Value::as_str)
}

/// Field-naming scheme used by a dependency record
///
/// Older build modules carry `sha256`, `source-sha256` and `deprecation_date`;
/// newer ones carry `checksum`, `source-checksum` and `eol-date` with
/// algorithm-prefixed values. A record keeps the scheme it already uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChecksumScheme {
    /// `sha256 = "<hex>"`
    Legacy,
    /// `checksum = "sha256:<hex>"`
    Prefixed,
}

impl ChecksumScheme {
    /// Detects the scheme from the keys present on the record
    pub fn detect(record: &Table) -> Option<Self> {
        if record.contains_key("sha256") {
            Some(ChecksumScheme::Legacy)
        } else if record.contains_key("checksum") {
            Some(ChecksumScheme::Prefixed)
        } else {
            None
        }
    }

    pub fn checksum_key(self) -> &'static str {
        match self {
            ChecksumScheme::Legacy => "sha256",
            ChecksumScheme::Prefixed => "checksum",
        }
    }

    pub fn source_checksum_key(self) -> &'static str {
        match self {
            ChecksumScheme::Legacy => "source-sha256",
            ChecksumScheme::Prefixed => "source-checksum",
        }
    }

    pub fn eol_key(self) -> &'static str {
        match self {
            ChecksumScheme::Legacy => "deprecation_date",
            ChecksumScheme::Prefixed => "eol-date",
        }
    }

    /// Formats a raw sha256 hex digest for this scheme
    pub fn format_sha256(self, sha256: &str) -> String {
        match self {
            ChecksumScheme::Legacy => sha256.to_string(),
            ChecksumScheme::Prefixed => format!("sha256:{}", sha256),
        }
    }
}

/// Derives the architecture of a dependency record
///
/// Precedence: an explicit `arch` string, then the `arch=` query parameter
/// of `purl`, then that of the first string in `purls`. A purl without the
/// parameter, or no purl at all, yields [`DEFAULT_ARCH`].
#[derive(Debug, Clone)]
pub struct ArchResolver {
    purl_arch: Regex,
}

impl ArchResolver {
    pub fn new() -> Self {
        Self {
            purl_arch: Regex::new(r"arch=(.*)").expect("purl arch pattern is valid"),
        }
    }

    pub fn resolve(&self, record: &Table) -> String {
        if let Some(arch) = str_field(record, "arch") {
            return arch.to_string();
        }

        if let Some(purl) = str_field(record, "purl") {
            return self
                .arch_from_purl(purl)
                .unwrap_or(DEFAULT_ARCH)
                .to_string();
        }

        record
            .get("purls")
            .and_then(Value::as_array)
            .and_then(|purls| purls.iter().find_map(Value::as_str))
            .and_then(|purl| self.arch_from_purl(purl))
            .unwrap_or(DEFAULT_ARCH)
            .to_string()
    }

    fn arch_from_purl<'a>(&self, purl: &'a str) -> Option<&'a str> {
        self.purl_arch
            .captures(purl)
            .and_then(|captures| captures.get(1))
            .map(|arch| arch.as_str())
    }
}

impl Default for ArchResolver {
    fn default() -> Self {
        Self::new()
    }
}
