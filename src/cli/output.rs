//! Handles all user-facing output for the CLI.
//!
//! Rows, names and suite listings are written here so every command shares
//! the same coloring rules.

use std::io::Write;
use std::path::Path;

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::errors::CaseError;
use crate::shaper::ArgumentRow;

/// Writes command output to stdout, colored when enabled.
pub struct Printer {
    stdout: StandardStream,
}

impl Printer {
    pub fn new(use_colors: bool) -> Self {
        let choice = if use_colors {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        Self {
            stdout: StandardStream::stdout(choice),
        }
    }

    /// `[1, "two", null]`-style listing, or compact JSON.
    pub fn row(&mut self, index: usize, row: &ArgumentRow, json: bool) -> std::io::Result<()> {
        if json {
            let line = serde_json::to_string(row).map_err(std::io::Error::other)?;
            return writeln!(self.stdout, "{line}");
        }
        self.dim(&format!("{index:>3} "))?;
        let items: Vec<String> = row.iter().map(ToString::to_string).collect();
        writeln!(self.stdout, "[{}]", items.join(", "))
    }

    pub fn name(&mut self, name: &str) -> std::io::Result<()> {
        writeln!(self.stdout, "{name}")
    }

    pub fn suite(&mut self, path: &Path, cases: usize) -> std::io::Result<()> {
        self.stdout
            .set_color(ColorSpec::new().set_fg(Some(Color::Green)).set_bold(true))?;
        write!(self.stdout, "{}", path.display())?;
        self.stdout.reset()?;
        writeln!(self.stdout, " ({cases} cases)")
    }

    pub fn broken_suite(&mut self, path: &Path, error: &CaseError) -> std::io::Result<()> {
        self.stdout
            .set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true))?;
        write!(self.stdout, "{}", path.display())?;
        self.stdout.reset()?;
        writeln!(self.stdout, " ({error})")
    }

    fn dim(&mut self, text: &str) -> std::io::Result<()> {
        self.stdout
            .set_color(ColorSpec::new().set_fg(Some(Color::Yellow)))?;
        write!(self.stdout, "{text}")?;
        self.stdout.reset()
    }
}
