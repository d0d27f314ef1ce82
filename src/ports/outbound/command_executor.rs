use crate::shared::Result;
use std::path::PathBuf;

/// What to do with the standard streams of a child process
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Capture stdout for the caller, discard stderr
    Capture,
    /// Stream both to the parent's stdout/stderr
    Inherit,
    /// Drop both
    Discard,
}

/// A single invocation of an external tool
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Execution {
    pub command: String,
    pub args: Vec<String>,
    pub working_dir: Option<PathBuf>,
    pub output: OutputMode,
}

impl Execution {
    pub fn new<I, S>(command: &str, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            command: command.to_string(),
            args: args.into_iter().map(Into::into).collect(),
            working_dir: None,
            output: OutputMode::Inherit,
        }
    }

    pub fn in_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    pub fn with_output(mut self, output: OutputMode) -> Self {
        self.output = output;
        self
    }

    /// Renders the command line for messages
    pub fn display(&self) -> String {
        if self.args.is_empty() {
            self.command.clone()
        } else {
            format!("{} {}", self.command, self.args.join(" "))
        }
    }
}

/// CommandExecutor port for running git, docker, pack and create-package
pub trait CommandExecutor {
    /// Runs the execution to completion
    ///
    /// # Returns
    /// Captured stdout when [`OutputMode::Capture`] is requested, an empty
    /// string otherwise
    ///
    /// # Errors
    /// Returns an error if the process cannot be spawned or exits unsuccessfully
    fn execute(&self, execution: &Execution) -> Result<String>;
}
