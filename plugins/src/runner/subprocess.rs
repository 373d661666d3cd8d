use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;

use greybeard_core::api::{normalize_exit, RunnerError, RunnerPlugin, RunnerSpec, ScanOutput};

/// Spawns the scanner as a child process and waits for it.
///
/// stdout and stderr are drained independently, so their relative order is
/// lost; each stream keeps its own order.
pub struct SubprocessRunnerPlugin;

impl SubprocessRunnerPlugin {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SubprocessRunnerPlugin {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RunnerPlugin for SubprocessRunnerPlugin {
    fn name(&self) -> &str {
        "subprocess"
    }

    async fn run(&self, spec: &RunnerSpec) -> Result<ScanOutput, RunnerError> {
        let child = Command::new(&spec.program)
            .args(&spec.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| RunnerError::Spawn {
                program: spec.program.clone(),
                source: e,
            })?;

        tracing::debug!(
            target: "greybeard.runner",
            program = %spec.program,
            pid = ?child.id(),
            "scanner spawned"
        );

        let output = child
            .wait_with_output()
            .await
            .map_err(|e| RunnerError::Wait {
                program: spec.program.clone(),
                source: e,
            })?;

        Ok(ScanOutput {
            exit_code: normalize_exit(output.status),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}
