use crate::config::AppConfig;
use crate::preflight::{Credential, ExecutableLocator};
use crate::render::Renderer;
use crate::runner::RunnerPlugin;
use crate::transform::TransformPlugin;

pub struct Services {
    pub runner: Box<dyn RunnerPlugin>,
    pub transformer: Box<dyn TransformPlugin>,
}

/// Builds the plugins once preflight has produced a credential.
pub trait ServicesFactory: Send + Sync {
    fn build_services(&self, cfg: &AppConfig, credential: Credential) -> anyhow::Result<Services>;
}

pub struct RunWithScanArgs<'a> {
    pub cfg: &'a AppConfig,
    /// Raw value of the credential variable as read from the environment.
    pub credential: Option<String>,
    pub scanner_args: Vec<String>,
    pub locator: &'a dyn ExecutableLocator,
    pub renderer: Renderer,
}
