use crate::config::AppConfig;
use crate::error::PreconditionError;
use crate::preflight::{require_credential, require_executable, Credential, ExecutableLocator};

/// Credential first, then the scanner binary. Nothing is spawned here.
pub fn pre_run(
    cfg: &AppConfig,
    credential: Option<String>,
    locator: &dyn ExecutableLocator,
) -> Result<Credential, PreconditionError> {
    let credential = require_credential(cfg.llm.api_key_env(), credential)?;
    require_executable(locator, &cfg.scanner.program, &cfg.scanner.install_hint)?;
    Ok(credential)
}
