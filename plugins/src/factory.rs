use anyhow::Result;

use greybeard_core::api::{AppConfig, Credential, LlmProvider, RunnerPlugin, TransformPlugin};

use crate::runner::subprocess::SubprocessRunnerPlugin;
use crate::transform::openai::OpenAiTransformPlugin;

pub fn build_runner(_cfg: &AppConfig) -> Box<dyn RunnerPlugin> {
    Box::new(SubprocessRunnerPlugin::new())
}

pub fn build_transformer(cfg: &AppConfig, credential: Credential) -> Result<Box<dyn TransformPlugin>> {
    match &cfg.llm.provider {
        LlmProvider::OpenAi(openai_cfg) => Ok(Box::new(OpenAiTransformPlugin::new(
            openai_cfg.clone(),
            credential,
        )?)),
    }
}
