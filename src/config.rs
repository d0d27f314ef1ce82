//! Configuration support for buildpack-tools.
//!
//! Provides the environment-driven [`ToolConfig`] and the JVM vendor catalog
//! embedded from `jvm_vendors.toml`, including loading and validation.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::path::PathBuf;

use crate::shared::Result;

const DEFAULT_PULL_POLICY: &str = "if-not-present";
const JVM_VENDORS_TOML: &str = include_str!("jvm_vendors.toml");

/// Settings read from `BP_*` environment variables.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ToolConfig {
    /// `BP_ROOT`: directory holding the buildpack checkouts
    pub root: Option<PathBuf>,
    /// `BP_PULL_POLICY`: handed to `pack --pull-policy`
    pub pull_policy: Option<String>,
    /// `BP_ARCH`: target architecture when not publishing
    pub arch: Option<String>,
    /// `BP_FLATTEN_DISABLED`: skip `--flatten` for composite buildpacks
    pub flatten_disabled: bool,
}

impl ToolConfig {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the configuration through `lookup`, which returns the value of
    /// a variable or `None` when it is unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            root: lookup("BP_ROOT").map(PathBuf::from),
            pull_policy: lookup("BP_PULL_POLICY"),
            arch: lookup("BP_ARCH"),
            flatten_disabled: lookup("BP_FLATTEN_DISABLED")
                .map(|value| parse_bool(&value))
                .unwrap_or(false),
        }
    }

    pub fn pull_policy(&self) -> &str {
        self.pull_policy.as_deref().unwrap_or(DEFAULT_PULL_POLICY)
    }

    /// `linux/<arch>` for `pack --target`, from `BP_ARCH` or the host.
    pub fn target_platform(&self) -> String {
        let arch = self
            .arch
            .clone()
            .unwrap_or_else(|| host_arch().to_string());
        format!("linux/{}", arch)
    }
}

/// Accepts the spellings `1`, `t`, `true` in any case as true.
fn parse_bool(value: &str) -> bool {
    matches!(value.trim().to_ascii_lowercase().as_str(), "1" | "t" | "true")
}

/// The host architecture under its container platform name.
fn host_arch() -> &'static str {
    match std::env::consts::ARCH {
        "x86_64" => "amd64",
        "aarch64" => "arm64",
        "x86" => "386",
        "powerpc64" => "ppc64le",
        other => other,
    }
}

/// One JVM distribution the vendors buildpack can ship.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct JvmVendor {
    pub buildpack_id: String,
    #[serde(default)]
    pub default: bool,
    pub description: String,
    pub homepage: String,
    pub name: String,
    pub vendor_id: String,
}

/// Top-level catalog schema.
#[derive(Debug, Deserialize, Default)]
pub struct JvmVendorCatalog {
    #[serde(default)]
    pub vendors: Vec<JvmVendor>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, toml::Value>,
}

impl JvmVendorCatalog {
    /// Loads the catalog compiled into the binary.
    pub fn embedded() -> Result<Self> {
        Self::parse(JVM_VENDORS_TOML)
    }

    pub fn parse(content: &str) -> Result<Self> {
        let catalog: JvmVendorCatalog = toml::from_str(content).context(
            "Failed to parse JVM vendor catalog\n\n💡 Hint: Ensure jvm_vendors.toml contains valid TOML.",
        )?;

        validate_catalog(&catalog)?;
        warn_unknown_fields(&catalog);

        Ok(catalog)
    }

    pub fn vendor_ids(&self) -> Vec<String> {
        self.vendors.iter().map(|v| v.vendor_id.clone()).collect()
    }

    pub fn find(&self, vendor_id: &str) -> Option<&JvmVendor> {
        self.vendors.iter().find(|v| v.vendor_id == vendor_id)
    }
}

fn validate_catalog(catalog: &JvmVendorCatalog) -> Result<()> {
    let mut seen = HashSet::new();
    for (i, vendor) in catalog.vendors.iter().enumerate() {
        if vendor.vendor_id.trim().is_empty() {
            bail!(
                "Invalid JVM vendor catalog: vendors[{}].vendor_id must not be empty.",
                i
            );
        }
        if !seen.insert(vendor.vendor_id.as_str()) {
            bail!(
                "Invalid JVM vendor catalog: vendor_id '{}' is listed more than once.",
                vendor.vendor_id
            );
        }
    }
    Ok(())
}

fn warn_unknown_fields(catalog: &JvmVendorCatalog) {
    for key in catalog.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown catalog field '{}' will be ignored.",
            key
        );
    }
}
