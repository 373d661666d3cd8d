use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub scanner: ScannerConfig,

    #[serde(default)]
    pub llm: LlmConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScannerConfig {
    #[serde(default = "default_scanner_program")]
    pub program: String,

    /// Shown when `program` cannot be found on PATH.
    #[serde(default = "default_install_hint")]
    pub install_hint: String,
}

fn default_scanner_program() -> String {
    "snyk".to_string()
}

fn default_install_hint() -> String {
    "Visit https://docs.snyk.io/snyk-cli/install-the-snyk-cli for installation instructions."
        .to_string()
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            program: default_scanner_program(),
            install_hint: default_install_hint(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "RawLlmConfig")]
pub struct LlmConfig {
    #[serde(flatten)]
    pub provider: LlmProvider,
}

/// `[llm]` as written in the file. `provider` may be omitted.
#[derive(Deserialize)]
struct RawLlmConfig {
    #[serde(default = "default_provider_name")]
    provider: String,
    #[serde(flatten)]
    openai: OpenAiConfig,
}

fn default_provider_name() -> String {
    "openai".to_string()
}

impl TryFrom<RawLlmConfig> for LlmConfig {
    type Error = String;

    fn try_from(raw: RawLlmConfig) -> Result<Self, Self::Error> {
        match raw.provider.as_str() {
            "openai" => Ok(Self {
                provider: LlmProvider::OpenAi(raw.openai),
            }),
            other => Err(format!("unknown llm provider `{other}`")),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "provider")]
pub enum LlmProvider {
    #[serde(rename = "openai")]
    OpenAi(OpenAiConfig),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenAiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_temperature")]
    pub temperature: f64,
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Name of the environment variable holding the bearer token.
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
}

fn default_llm_provider() -> LlmProvider {
    LlmProvider::OpenAi(OpenAiConfig::default())
}

fn default_base_url() -> String {
    "https://api.openai.com/v1/chat/completions".to_string()
}

fn default_model() -> String {
    "gpt-4o".to_string()
}

fn default_temperature() -> f64 {
    0.7
}

fn default_timeout_ms() -> u64 {
    30_000
}

fn default_api_key_env() -> String {
    "OPENAI_API_KEY".to_string()
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            model: default_model(),
            temperature: default_temperature(),
            timeout_ms: default_timeout_ms(),
            api_key_env: default_api_key_env(),
        }
    }
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            provider: default_llm_provider(),
        }
    }
}

impl LlmConfig {
    pub fn api_key_env(&self) -> &str {
        match &self.provider {
            LlmProvider::OpenAi(c) => &c.api_key_env,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Used when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}
