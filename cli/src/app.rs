use std::io::Write;

use greybeard_core::api::{
    run_with_scan, CliError, LoggingConfig, PathLocator, Renderer, RunWithScanArgs,
};
use greybeard_core::config::load_default;
use greybeard_plugins::PluginServicesFactory;
use tracing_subscriber::EnvFilter;

/// Build-time constants, passed in rather than read from globals.
#[derive(Debug, Clone)]
pub struct BuildInfo {
    pub version: &'static str,
    pub build_time: &'static str,
}

impl BuildInfo {
    pub fn current() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION"),
            build_time: option_env!("GREYBEARD_BUILD_TIME").unwrap_or("unknown"),
        }
    }

    pub fn version_line(&self) -> String {
        format!("Snyk CLI Greybeard v{} (built {})", self.version, self.build_time)
    }
}

pub async fn run_app(scanner_args: Vec<String>, build: &BuildInfo) -> i32 {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let cfg = match load_default() {
        Ok(cfg) => cfg,
        Err(e) => return report(&mut out, CliError::from(e)),
    };
    init_tracing(&cfg.logging);
    tracing::debug!(target: "greybeard.cli", version = build.version, built = build.build_time, "starting");

    let res = run_with_scan(
        RunWithScanArgs {
            credential: std::env::var(cfg.llm.api_key_env()).ok(),
            cfg: &cfg,
            scanner_args,
            locator: &PathLocator,
            renderer: Renderer::new(atty::is(atty::Stream::Stdout)),
        },
        &PluginServicesFactory,
        &mut out,
    )
    .await;

    match res {
        Ok(code) => code,
        Err(e) => report(&mut out, e),
    }
}

fn report(out: &mut dyn Write, err: CliError) -> i32 {
    tracing::error!(target: "greybeard.cli", error = %err, "aborting");
    for line in err.report_lines() {
        let _ = writeln!(out, "{line}");
    }
    let _ = out.flush();
    err.exit_code()
}

/// Logs go to stderr so stdout carries only the report.
fn init_tracing(cfg: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cfg.level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
