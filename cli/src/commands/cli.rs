/// What the command line asks for.
///
/// Only the first token is reserved: a leading `-v`/`--version` prints the
/// version. Every other argument list goes to `snyk` exactly as given, so
/// `snyk-greybeard test --all-projects` runs `snyk test --all-projects`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    Version,
    Scan { scanner_args: Vec<String> },
}

impl Invocation {
    /// `args` excludes the program name.
    pub fn from_args<I>(args: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let scanner_args: Vec<String> = args.into_iter().collect();
        match scanner_args.first().map(String::as_str) {
            Some("-v") | Some("--version") => Invocation::Version,
            _ => Invocation::Scan { scanner_args },
        }
    }

    pub fn from_env() -> Self {
        Self::from_args(
            std::env::args_os()
                .skip(1)
                .map(|a| a.to_string_lossy().into_owned()),
        )
    }
}
