use crate::ports::outbound::{CommandExecutor, Execution, OutputMode};
use crate::shared::error::ToolError;
use crate::shared::Result;
use std::process::{Command, Stdio};

/// SystemCommandExecutor adapter spawning real processes
///
/// This adapter implements the CommandExecutor port with
/// `std::process::Command`. Processes run to completion; a non-zero exit
/// status is an error carrying the captured stderr when there is one.
pub struct SystemCommandExecutor;

impl SystemCommandExecutor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemCommandExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandExecutor for SystemCommandExecutor {
    fn execute(&self, execution: &Execution) -> Result<String> {
        let mut command = Command::new(&execution.command);
        command.args(&execution.args);
        if let Some(dir) = &execution.working_dir {
            command.current_dir(dir);
        }

        let command_error = |details: String| ToolError::Command {
            command: execution.display(),
            details,
        };

        match execution.output {
            OutputMode::Capture => {
                let output = command
                    .stdin(Stdio::null())
                    .output()
                    .map_err(|e| command_error(format!("unable to start: {}", e)))?;

                if !output.status.success() {
                    let stderr = String::from_utf8_lossy(&output.stderr);
                    return Err(command_error(format!(
                        "exited with {}: {}",
                        output.status,
                        stderr.trim()
                    ))
                    .into());
                }

                Ok(String::from_utf8_lossy(&output.stdout).into_owned())
            }
            OutputMode::Inherit | OutputMode::Discard => {
                if execution.output == OutputMode::Discard {
                    command.stdout(Stdio::null()).stderr(Stdio::null());
                }

                let status = command
                    .status()
                    .map_err(|e| command_error(format!("unable to start: {}", e)))?;

                if !status.success() {
                    return Err(command_error(format!("exited with {}", status)).into());
                }

                Ok(String::new())
            }
        }
    }
}
