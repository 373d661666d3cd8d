use thiserror::Error;

/// Exit code used for every local failure that happens before the scanner ran.
pub const LOCAL_FAILURE_EXIT: i32 = 1;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Error)]
pub enum PreconditionError {
    #[error("{var} environment variable is not set.")]
    MissingCredential { var: String },

    #[error("'{program}' command not found. Please install the Snyk CLI.")]
    MissingExecutable {
        program: String,
        install_hint: String,
    },
}

impl PreconditionError {
    /// Lines printed to the console before exiting.
    pub fn remediation(&self) -> Vec<String> {
        match self {
            PreconditionError::MissingCredential { var } => vec![
                format!("Error: {self}"),
                format!("Please set it with: export {var}='your-api-key'"),
            ],
            PreconditionError::MissingExecutable { install_hint, .. } => {
                vec![format!("Error: {self}"), install_hint.clone()]
            }
        }
    }
}

#[derive(Debug, Error)]
pub enum RunnerError {
    #[error("failed to spawn process: {program}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to wait for process: {program}")]
    Wait {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

/// Everything that can go wrong between the captured output and a usable answer.
#[derive(Debug, Error)]
pub enum TransformError {
    #[error("error creating HTTP request: {0}")]
    Build(String),

    #[error("error calling OpenAI API: {0}")]
    Transport(String),

    #[error("request timed out after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    #[error("error reading API response: {0}")]
    ReadBody(String),

    #[error("error parsing API response: {message} (response: {body})")]
    Decode { message: String, body: String },

    #[error("API error: {0}")]
    Api(String),

    #[error("no response content returned from API (response: {body})")]
    NoChoices { body: String },
}

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Precondition(#[from] PreconditionError),

    #[error(transparent)]
    Runner(#[from] RunnerError),

    #[error("failed to build plugins")]
    Plugin(#[source] anyhow::Error),
}

impl CliError {
    pub fn exit_code(&self) -> i32 {
        LOCAL_FAILURE_EXIT
    }

    /// Console lines describing the failure.
    pub fn report_lines(&self) -> Vec<String> {
        match self {
            CliError::Precondition(e) => e.remediation(),
            other => {
                let mut lines = vec![format!("Error: {other}")];
                let mut source = std::error::Error::source(other);
                while let Some(s) = source {
                    lines.push(format!("  caused by: {s}"));
                    source = s.source();
                }
                lines
            }
        }
    }
}
