//! Summary emitter
//!
//! Turns summarized units into output lines and writes them to the console
//! or to a file. Per unit the lines are:
//!
//! ```text
//! <blank line>
//! <header>            "Page N" or "TLDR:"
//! <sentence>...       one per selected sentence, whitespace collapsed
//! ```
//!
//! A unit with no eligible sentences gets [`NO_SENTENCES`] in place of the
//! sentence lines. A unit that had eligible sentences but was asked for zero
//! gets the header only.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::Result;
use crate::types::SummaryUnit;

/// Placeholder written for a unit without eligible sentences
pub const NO_SENTENCES: &str = "No sentences found.";

/// Output lines accumulated across every unit of a document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Output {
    lines: Vec<String>,
}

impl Output {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_units(units: &[SummaryUnit]) -> Self {
        let mut output = Self::new();
        for unit in units {
            output.push_unit(unit);
        }
        output
    }

    /// Append the lines for one unit.
    pub fn push_unit(&mut self, unit: &SummaryUnit) {
        self.lines.push(String::new());
        self.lines.push(unit.label.header());

        if unit.is_degenerate() {
            self.lines.push(NO_SENTENCES.to_string());
            return;
        }
        self.lines.extend(unit.sentences.iter().map(|s| single_line(&s.text)));
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Write every line followed by a single newline.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        for line in &self.lines {
            writeln!(writer, "{line}")?;
        }
        writer.flush()
    }
}

/// Collapse every whitespace run, line breaks included, into one space.
fn single_line(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Where the output goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sink {
    Console,
    /// Created or truncated, then written as UTF-8
    File(PathBuf),
}

impl Sink {
    /// `None` means console.
    pub fn from_path(path: Option<PathBuf>) -> Self {
        path.map_or(Sink::Console, Sink::File)
    }
}

/// Write `output` to `sink`, using stdout as the console.
pub fn emit(output: &Output, sink: &Sink) -> Result<()> {
    let stdout = io::stdout();
    let mut console = stdout.lock();
    emit_to(output, sink, &mut console)
}

/// Write `output` to `sink`. `console` receives the lines for
/// [`Sink::Console`], or the confirmation notice after a file write.
pub fn emit_to<W: Write>(output: &Output, sink: &Sink, console: &mut W) -> Result<()> {
    match sink {
        Sink::Console => output.write_to(console)?,
        Sink::File(path) => {
            write_file(output, path)?;
            info!(path = %path.display(), lines = output.lines().len(), "summary written");
            writeln!(console, "TLDR saved to {}", path.display())?;
            console.flush()?;
        }
    }
    Ok(())
}

fn write_file(output: &Output, path: &Path) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    output.write_to(&mut writer)?;
    Ok(())
}
