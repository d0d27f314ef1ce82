use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use buildpack_tools::prelude::*;

/// Mock EolRepository for testing
#[derive(Default, Clone)]
pub struct MockEolRepository {
    dates: HashMap<(String, String), String>,
    should_fail: bool,
    pub lookups: Arc<Mutex<Vec<(String, String)>>>,
}

impl MockEolRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_date(mut self, product: &str, version: &str, date: &str) -> Self {
        self.dates
            .insert((product.to_string(), version.to_string()), date.to_string());
        self
    }

    pub fn with_failure() -> Self {
        Self {
            should_fail: true,
            ..Self::default()
        }
    }

    pub fn lookup_count(&self) -> usize {
        self.lookups.lock().unwrap().len()
    }
}

impl EolRepository for MockEolRepository {
    fn eol_date(&self, product: &str, version: &str) -> Result<Option<String>> {
        self.lookups
            .lock()
            .unwrap()
            .push((product.to_string(), version.to_string()));
        if self.should_fail {
            anyhow::bail!("Mock end-of-life lookup failure");
        }
        Ok(self
            .dates
            .get(&(product.to_string(), version.to_string()))
            .cloned())
    }
}
