use std::process::ExitStatus;

/// Maps a finished child to the code this process should exit with.
///
/// Signal deaths follow the shell convention of `128 + signal`.
pub fn normalize_exit(status: ExitStatus) -> i32 {
    status
        .code()
        .or_else(|| signal_code(&status))
        .unwrap_or(1)
}

#[cfg(unix)]
fn signal_code(status: &ExitStatus) -> Option<i32> {
    use std::os::unix::process::ExitStatusExt;
    status.signal().map(|sig| 128 + sig)
}

#[cfg(not(unix))]
fn signal_code(_status: &ExitStatus) -> Option<i32> {
    None
}
