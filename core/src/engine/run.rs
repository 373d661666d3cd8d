use std::io::Write;

use crate::error::CliError;
use crate::runner::RunnerSpec;

use super::pre::pre_run;
use super::types::{RunWithScanArgs, ServicesFactory};

/// Preflight, scan, print the raw output, transform, print the verdict.
///
/// Returns the scanner's exit code whether or not the transform succeeded.
/// Only local failures before the scanner ran come back as `Err`.
pub async fn run_with_scan(
    args: RunWithScanArgs<'_>,
    factory: &dyn ServicesFactory,
    out: &mut dyn Write,
) -> Result<i32, CliError> {
    let RunWithScanArgs {
        cfg,
        credential,
        scanner_args,
        locator,
        renderer,
    } = args;

    let credential = pre_run(cfg, credential, locator)?;
    let services = factory
        .build_services(cfg, credential)
        .map_err(CliError::Plugin)?;

    let spec = RunnerSpec {
        program: cfg.scanner.program.clone(),
        args: scanner_args,
    };
    tracing::info!(
        target: "greybeard.engine",
        runner = services.runner.name(),
        program = %spec.program,
        args = ?spec.args,
        "running scanner"
    );
    let scan = services.runner.run(&spec).await?;
    tracing::info!(
        target: "greybeard.engine",
        exit_code = scan.exit_code,
        stdout_bytes = scan.stdout.len(),
        stderr_bytes = scan.stderr.len(),
        "scanner finished"
    );

    let captured = scan.combined();
    if let Err(e) = renderer
        .raw_output(out, &captured)
        .and_then(|_| renderer.separator(out))
    {
        tracing::warn!(target: "greybeard.engine", error = %e, "failed to write raw output");
    }

    let verdict = services.transformer.transform(&captured).await;
    match &verdict {
        Ok(text) => tracing::debug!(
            target: "greybeard.engine",
            transformer = services.transformer.name(),
            chars = text.chars().count(),
            "transform succeeded"
        ),
        Err(e) => tracing::warn!(
            target: "greybeard.engine",
            transformer = services.transformer.name(),
            error = %e,
            "transform failed"
        ),
    }
    if let Err(e) = renderer.verdict(out, &verdict) {
        tracing::warn!(target: "greybeard.engine", error = %e, "failed to write verdict");
    }

    Ok(scan.exit_code)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::config::AppConfig;
    use crate::engine::Services;
    use crate::error::{PreconditionError, RunnerError, TransformError};
    use crate::preflight::{Credential, ExecutableLocator};
    use crate::render::Renderer;
    use crate::runner::{RunnerPlugin, ScanOutput};
    use crate::transform::TransformPlugin;

    #[derive(Default)]
    struct Calls {
        built: AtomicUsize,
        ran: AtomicUsize,
        transformed: AtomicUsize,
        specs: Mutex<Vec<RunnerSpec>>,
        inputs: Mutex<Vec<String>>,
        credentials: Mutex<Vec<String>>,
    }

    struct FakeRunner {
        calls: Arc<Calls>,
        result: Result<ScanOutput, ()>,
    }

    #[async_trait]
    impl RunnerPlugin for FakeRunner {
        fn name(&self) -> &str {
            "fake"
        }

        async fn run(&self, spec: &RunnerSpec) -> Result<ScanOutput, RunnerError> {
            self.calls.ran.fetch_add(1, Ordering::SeqCst);
            self.calls.specs.lock().unwrap().push(spec.clone());
            self.result.clone().map_err(|_| RunnerError::Spawn {
                program: spec.program.clone(),
                source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
            })
        }
    }

    struct FakeTransformer {
        calls: Arc<Calls>,
        reply: Result<String, String>,
    }

    #[async_trait]
    impl TransformPlugin for FakeTransformer {
        fn name(&self) -> &str {
            "fake"
        }

        async fn transform(&self, captured: &str) -> Result<String, TransformError> {
            self.calls.transformed.fetch_add(1, Ordering::SeqCst);
            self.calls.inputs.lock().unwrap().push(captured.to_string());
            self.reply.clone().map_err(TransformError::Api)
        }
    }

    struct FakeFactory {
        calls: Arc<Calls>,
        scan: Result<ScanOutput, ()>,
        reply: Result<String, String>,
    }

    impl ServicesFactory for FakeFactory {
        fn build_services(&self, _cfg: &AppConfig, credential: Credential) -> anyhow::Result<Services> {
            self.calls.built.fetch_add(1, Ordering::SeqCst);
            self.calls
                .credentials
                .lock()
                .unwrap()
                .push(credential.expose().to_string());
            Ok(Services {
                runner: Box::new(FakeRunner {
                    calls: self.calls.clone(),
                    result: self.scan.clone(),
                }),
                transformer: Box::new(FakeTransformer {
                    calls: self.calls.clone(),
                    reply: self.reply.clone(),
                }),
            })
        }
    }

    struct Locator(bool);

    impl ExecutableLocator for Locator {
        fn locate(&self, program: &str) -> Option<PathBuf> {
            self.0.then(|| PathBuf::from("/usr/local/bin").join(program))
        }
    }

    fn scan(exit_code: i32, stdout: &str, stderr: &str) -> ScanOutput {
        ScanOutput {
            exit_code,
            stdout: stdout.into(),
            stderr: stderr.into(),
        }
    }

    async fn drive(
        credential: Option<&str>,
        found: bool,
        factory: &FakeFactory,
        scanner_args: &[&str],
    ) -> (Result<i32, CliError>, String) {
        let cfg = AppConfig::default();
        let locator = Locator(found);
        let mut out = Vec::new();
        let res = run_with_scan(
            RunWithScanArgs {
                cfg: &cfg,
                credential: credential.map(str::to_string),
                scanner_args: scanner_args.iter().map(|s| s.to_string()).collect(),
                locator: &locator,
                renderer: Renderer::new(false),
            },
            factory,
            &mut out,
        )
        .await;
        (res, String::from_utf8(out).unwrap())
    }

    fn factory(scan: Result<ScanOutput, ()>, reply: Result<&str, &str>) -> FakeFactory {
        FakeFactory {
            calls: Arc::new(Calls::default()),
            scan,
            reply: reply.map(str::to_string).map_err(str::to_string),
        }
    }

    #[tokio::test]
    async fn missing_credential_stops_before_anything_runs() {
        for credential in [None, Some("")] {
            let f = factory(Ok(scan(0, "", "")), Ok("x"));
            let (res, out) = drive(credential, true, &f, &["test"]).await;

            let err = res.unwrap_err();
            assert!(matches!(
                err,
                CliError::Precondition(PreconditionError::MissingCredential { ref var }) if var == "OPENAI_API_KEY"
            ));
            assert_eq!(err.exit_code(), 1);
            assert_eq!(f.calls.built.load(Ordering::SeqCst), 0);
            assert_eq!(f.calls.ran.load(Ordering::SeqCst), 0);
            assert_eq!(f.calls.transformed.load(Ordering::SeqCst), 0);
            assert_eq!(out, "");
        }
    }

    #[tokio::test]
    async fn missing_executable_stops_before_anything_runs() {
        let f = factory(Ok(scan(0, "", "")), Ok("x"));
        let (res, _) = drive(Some("sk-test"), false, &f, &["test"]).await;

        let err = res.unwrap_err();
        assert!(matches!(
            err,
            CliError::Precondition(PreconditionError::MissingExecutable { ref program, .. }) if program == "snyk"
        ));
        assert_eq!(err.exit_code(), 1);
        assert_eq!(f.calls.ran.load(Ordering::SeqCst), 0);
        assert_eq!(f.calls.transformed.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn exit_code_mirrors_scanner_when_transform_succeeds() {
        for code in [0, 1, 2, 3, 137] {
            let f = factory(Ok(scan(code, "out", "")), Ok("fine"));
            let (res, out) = drive(Some("sk-test"), true, &f, &["test"]).await;
            assert_eq!(res.unwrap(), code);
            assert!(out.ends_with("says:\n\nfine\n"));
        }
    }

    #[tokio::test]
    async fn exit_code_mirrors_scanner_when_transform_fails() {
        for code in [0, 1, 2] {
            let f = factory(Ok(scan(code, "out", "")), Err("rate limited"));
            let (res, out) = drive(Some("sk-test"), true, &f, &["test"]).await;
            assert_eq!(res.unwrap(), code);
            assert!(out.contains("Raw Snyk CLI Output:\nout\n"));
            assert!(out.ends_with("Error calling OpenAI API: API error: rate limited\n"));
        }
    }

    #[tokio::test]
    async fn vulnerable_project_end_to_end() {
        let f = factory(
            Ok(scan(1, "", "2 known vulnerabilities found")),
            Ok("Listen up, rookie..."),
        );
        let (res, out) = drive(Some("sk-test"), true, &f, &["test", "--all-projects"]).await;

        assert_eq!(res.unwrap(), 1);
        let expected = format!(
            "\nRaw Snyk CLI Output:\n2 known vulnerabilities found\n\n{}\n\n🧔‍♂️ Security Greybeard says:\n\nListen up, rookie...\n",
            "-".repeat(59)
        );
        assert_eq!(out, expected);
        assert_eq!(
            f.calls.specs.lock().unwrap().as_slice(),
            &[RunnerSpec {
                program: "snyk".into(),
                args: vec!["test".into(), "--all-projects".into()],
            }]
        );
        assert_eq!(f.calls.credentials.lock().unwrap().as_slice(), &["sk-test".to_string()]);
    }

    #[tokio::test]
    async fn transformer_sees_stdout_then_stderr_unmodified() {
        let f = factory(Ok(scan(0, "a\n", "b\n")), Ok("ok"));
        let (res, _) = drive(Some("k"), true, &f, &[]).await;
        assert_eq!(res.unwrap(), 0);
        assert_eq!(f.calls.inputs.lock().unwrap().as_slice(), &["a\nb\n".to_string()]);
    }

    #[tokio::test]
    async fn spawn_failure_is_local_and_skips_transform() {
        let f = factory(Err(()), Ok("never"));
        let (res, out) = drive(Some("k"), true, &f, &["test"]).await;
        let err = res.unwrap_err();
        assert!(matches!(err, CliError::Runner(RunnerError::Spawn { .. })));
        assert_eq!(err.exit_code(), 1);
        assert_eq!(f.calls.transformed.load(Ordering::SeqCst), 0);
        assert_eq!(out, "");
    }
}
