use std::io::{self, Write};

use crate::error::TransformError;

const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";
const SEPARATOR_WIDTH: usize = 59;

pub const RAW_HEADING: &str = "Raw Snyk CLI Output:";
pub const VERDICT_HEADING: &str = "Security Greybeard says:";
pub const VERDICT_MARKER: &str = "🧔‍♂️";

/// Console report writer. Headings are bold only when `styled`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Renderer {
    pub styled: bool,
}

impl Renderer {
    pub fn new(styled: bool) -> Self {
        Self { styled }
    }

    fn heading(&self, text: &str) -> String {
        if self.styled {
            format!("{BOLD}{text}{RESET}")
        } else {
            text.to_string()
        }
    }

    pub fn raw_output(&self, out: &mut dyn Write, captured: &str) -> io::Result<()> {
        writeln!(out)?;
        writeln!(out, "{}", self.heading(RAW_HEADING))?;
        writeln!(out, "{captured}")
    }

    pub fn separator(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out)?;
        writeln!(out, "{}", "-".repeat(SEPARATOR_WIDTH))?;
        writeln!(out)
    }

    pub fn verdict(
        &self,
        out: &mut dyn Write,
        verdict: &Result<String, TransformError>,
    ) -> io::Result<()> {
        writeln!(out, "{VERDICT_MARKER} {}\n", self.heading(VERDICT_HEADING))?;
        match verdict {
            Ok(text) => writeln!(out, "{text}")?,
            Err(e) => writeln!(out, "Error calling OpenAI API: {e}")?,
        }
        out.flush()
    }
}
