mod app;
mod commands;

use commands::cli;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let build = app::BuildInfo::current();

    let scanner_args = match cli::Invocation::from_env() {
        cli::Invocation::Version => {
            println!("{}", build.version_line());
            std::process::exit(0);
        }
        cli::Invocation::Scan { scanner_args } => scanner_args,
    };

    let exit = app::run_app(scanner_args, &build).await;
    std::process::exit(exit);
}
