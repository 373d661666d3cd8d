//! `ServicesFactory` backed by the concrete plugins in this crate.
use greybeard_core::api::{AppConfig, Credential, Services, ServicesFactory};

use crate::factory;

#[derive(Default)]
pub struct PluginServicesFactory;

impl ServicesFactory for PluginServicesFactory {
    fn build_services(&self, cfg: &AppConfig, credential: Credential) -> anyhow::Result<Services> {
        let runner = factory::build_runner(cfg);
        let transformer = factory::build_transformer(cfg, credential)?;
        tracing::debug!(
            target: "greybeard.services",
            runner = runner.name(),
            transformer = transformer.name(),
            "services built"
        );
        Ok(Services {
            runner,
            transformer,
        })
    }
}
