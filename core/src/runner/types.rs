#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunnerSpec {
    pub program: String,
    pub args: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanOutput {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl ScanOutput {
    /// stdout followed by stderr. Interleaving between the two is not kept.
    pub fn combined(&self) -> String {
        let mut s = String::with_capacity(self.stdout.len() + self.stderr.len());
        s.push_str(&self.stdout);
        s.push_str(&self.stderr);
        s
    }
}
