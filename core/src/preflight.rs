//! Local checks that must pass before the scanner is spawned or the
//! network is touched.

use std::path::PathBuf;

use crate::error::PreconditionError;

/// Bearer token for the chat API. `Debug` never prints the value.
#[derive(Clone)]
pub struct Credential(String);

impl Credential {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Credential(***)")
    }
}

/// Resolves a program name against the search path.
pub trait ExecutableLocator: Send + Sync {
    fn locate(&self, program: &str) -> Option<PathBuf>;
}

pub struct PathLocator;

impl ExecutableLocator for PathLocator {
    fn locate(&self, program: &str) -> Option<PathBuf> {
        which::which(program).ok()
    }
}

pub fn require_credential(var: &str, value: Option<String>) -> Result<Credential, PreconditionError> {
    match value {
        Some(v) if !v.is_empty() => Ok(Credential::new(v)),
        _ => Err(PreconditionError::MissingCredential {
            var: var.to_string(),
        }),
    }
}

pub fn require_executable(
    locator: &dyn ExecutableLocator,
    program: &str,
    install_hint: &str,
) -> Result<PathBuf, PreconditionError> {
    match locator.locate(program) {
        Some(path) => {
            tracing::debug!(target: "greybeard.preflight", program, path = %path.display(), "resolved executable");
            Ok(path)
        }
        None => Err(PreconditionError::MissingExecutable {
            program: program.to_string(),
            install_hint: install_hint.to_string(),
        }),
    }
}
