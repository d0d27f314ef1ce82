use crate::ports::outbound::EolRepository;
use crate::shared::Result;
use chrono::{NaiveDate, SecondsFormat};
use reqwest::blocking::Client;
use serde::Deserialize;
use std::time::Duration;

/// `eol` is either the end-of-life date or a flag saying there is none yet
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
enum EolField {
    Date(String),
    Flag(bool),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
struct ReleaseCycle {
    cycle: String,
    eol: EolField,
}

/// EndOfLifeClient adapter for the endoflife.date API
///
/// This adapter implements the EolRepository port. A product's release
/// cycles are fetched from `/api/<product>.json`; the cycle named after
/// `major.minor` of the version wins over the one named after `major`.
pub struct EndOfLifeClient {
    client: Client,
    base_url: String,
    max_retries: u32,
}

impl EndOfLifeClient {
    const API_ENDPOINT: &'static str = "https://endoflife.date/api";
    const TIMEOUT_SECONDS: u64 = 10;

    /// Creates a new client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_base_url(Self::API_ENDPOINT)
    }

    pub fn with_base_url(base_url: &str) -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("buildpack-tools/{}", version);
        let client = Client::builder()
            .timeout(Duration::from_secs(Self::TIMEOUT_SECONDS))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            max_retries: 3,
        })
    }

    fn fetch_with_retry(&self, product: &str) -> Result<Vec<ReleaseCycle>> {
        let mut last_error = None;

        for attempt in 1..=self.max_retries {
            match self.fetch_cycles(product) {
                Ok(cycles) => return Ok(cycles),
                Err(e) => {
                    last_error = Some(e);
                    if attempt < self.max_retries {
                        std::thread::sleep(Duration::from_millis(100 * attempt as u64));
                    }
                }
            }
        }

        Err(last_error.unwrap_or_else(|| anyhow::anyhow!("no request was attempted")))
    }

    /// Validates a product id before it becomes part of the URL path
    fn validate_url_component(component: &str) -> Result<()> {
        if component.is_empty() {
            anyhow::bail!("Product id must not be empty");
        }

        if component.contains('/') || component.contains('\\') || component.contains("..") {
            anyhow::bail!("Security: product id contains path separators which are not allowed");
        }

        if component.contains('#') || component.contains('?') || component.contains('@') {
            anyhow::bail!("Security: product id contains URL-unsafe characters");
        }

        Ok(())
    }

    fn fetch_cycles(&self, product: &str) -> Result<Vec<ReleaseCycle>> {
        let url = format!("{}/{}.json", self.base_url, urlencoding::encode(product));
        let response = self.client.get(&url).send()?;

        if !response.status().is_success() {
            anyhow::bail!("endoflife.date API returned status code {}", response.status());
        }

        let body = response.text()?;
        let cycles: Vec<ReleaseCycle> = serde_json::from_str(&body).map_err(|e| {
            anyhow::anyhow!("unable to decode release cycles of {}: {}", product, e)
        })?;
        Ok(cycles)
    }
}

impl EolRepository for EndOfLifeClient {
    fn eol_date(&self, product: &str, version: &str) -> Result<Option<String>> {
        Self::validate_url_component(product)?;

        let cycles = self.fetch_with_retry(product)?;
        match select_cycle(&cycles, version) {
            Some(cycle) => format_eol(&cycle.eol),
            None => Ok(None),
        }
    }
}

/// Picks the release cycle of `version`, preferring `major.minor` over `major`
fn select_cycle<'c>(cycles: &'c [ReleaseCycle], version: &str) -> Option<&'c ReleaseCycle> {
    let mut parts = version.split('.');
    let major = parts.next().filter(|major| !major.is_empty())?;
    let major_minor = parts.next().map(|minor| format!("{}.{}", major, minor));

    major_minor
        .and_then(|name| cycles.iter().find(|cycle| cycle.cycle == name))
        .or_else(|| cycles.iter().find(|cycle| cycle.cycle == major))
}

fn format_eol(eol: &EolField) -> Result<Option<String>> {
    match eol {
        EolField::Flag(_) => Ok(None),
        EolField::Date(date) => {
            let date = NaiveDate::parse_from_str(date, "%Y-%m-%d")
                .map_err(|e| anyhow::anyhow!("invalid end-of-life date '{}': {}", date, e))?;
            let midnight = date
                .and_hms_opt(0, 0, 0)
                .ok_or_else(|| anyhow::anyhow!("invalid end-of-life date '{}'", date))?;
            Ok(Some(
                midnight.and_utc().to_rfc3339_opts(SecondsFormat::Secs, true),
            ))
        }
    }
}
