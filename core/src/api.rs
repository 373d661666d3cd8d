//! Stable re-exports for consumers (`cli`, `plugins`, and external crates).
//!
//! Prefer importing from `greybeard_core::api` instead of reaching into internal modules.

pub use crate::config::{AppConfig, LlmProvider, LoggingConfig, OpenAiConfig, ScannerConfig};
pub use crate::engine::{run_with_scan, RunWithScanArgs, Services, ServicesFactory};
pub use crate::error::{CliError, PreconditionError, RunnerError, TransformError};
pub use crate::preflight::{Credential, ExecutableLocator, PathLocator};
pub use crate::render::Renderer;
pub use crate::runner::{normalize_exit, RunnerPlugin, RunnerSpec, ScanOutput};
pub use crate::transform::{build_request, interpret_response, ChatRequest, TransformPlugin};
