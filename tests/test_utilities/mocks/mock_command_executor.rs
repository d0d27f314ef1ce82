use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use buildpack_tools::prelude::*;

/// Mock CommandExecutor that records every execution
///
/// Outputs are keyed by the program name; programs without a scripted output
/// return an empty string. Programs listed in `failing` return an error.
#[derive(Default, Clone)]
pub struct MockCommandExecutor {
    outputs: HashMap<String, String>,
    failing: Vec<String>,
    pub executions: Arc<Mutex<Vec<Execution>>>,
}

impl MockCommandExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_output(mut self, command: &str, output: &str) -> Self {
        self.outputs.insert(command.to_string(), output.to_string());
        self
    }

    pub fn with_failure(mut self, command: &str) -> Self {
        self.failing.push(command.to_string());
        self
    }

    pub fn get_executions(&self) -> Vec<Execution> {
        self.executions.lock().unwrap().clone()
    }

    pub fn command_lines(&self) -> Vec<String> {
        self.get_executions().iter().map(Execution::display).collect()
    }
}

impl CommandExecutor for MockCommandExecutor {
    fn execute(&self, execution: &Execution) -> Result<String> {
        self.executions.lock().unwrap().push(execution.clone());
        if self.failing.contains(&execution.command) {
            anyhow::bail!("Mock failure running {}", execution.display());
        }
        Ok(self
            .outputs
            .get(&execution.command)
            .cloned()
            .unwrap_or_default())
    }
}
