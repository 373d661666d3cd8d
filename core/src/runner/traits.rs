use async_trait::async_trait;

use crate::error::RunnerError;

use super::types::{RunnerSpec, ScanOutput};

/// Runs the scanner to completion and hands back everything it printed.
///
/// A non-zero exit is reported through [`ScanOutput::exit_code`], never as an
/// error: findings are expected to fail the scan.
#[async_trait]
pub trait RunnerPlugin: Send + Sync {
    fn name(&self) -> &str;

    async fn run(&self, spec: &RunnerSpec) -> Result<ScanOutput, RunnerError>;
}
