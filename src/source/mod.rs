//! Input acquisition
//!
//! Every input kind implements [`TextSource`], which yields the document as
//! an ordered list of logical units. The pipeline depends only on the trait:
//! - [`TextFileSource`]: a UTF-8 text file, one unit
//! - [`PdfSource`]: one unit per PDF page
//! - [`WebSource`]: the `<p>` text of a fetched page, one unit
//! - [`StdinSource`]: standard input, one unit

pub mod pdf;
pub mod stdin;
pub mod text;
pub mod web;

use std::path::PathBuf;
use std::time::Duration;

pub use pdf::PdfSource;
pub use stdin::StdinSource;
pub use text::TextFileSource;
pub use web::WebSource;

use crate::error::{Result, TldrError};
use crate::types::TextUnit;

/// A producer of raw text units.
pub trait TextSource {
    /// Acquire every logical unit in document order.
    fn units(&mut self) -> Result<Vec<TextUnit>>;

    /// Short description for logs (path, URL, ...)
    fn describe(&self) -> String;
}

/// Input kinds selectable on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Pdf,
    Text,
    Url,
    Stdin,
}

impl SourceKind {
    /// Returns the user-facing name used on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Text => "txt",
            Self::Url => "url",
            Self::Stdin => "input",
        }
    }

    /// Whether the kind needs an input name (`-n`)
    pub fn needs_input(&self) -> bool {
        !matches!(self, Self::Stdin)
    }
}

impl std::str::FromStr for SourceKind {
    type Err = TldrError;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        match value.to_lowercase().as_str() {
            "pdf" => Ok(Self::Pdf),
            "txt" | "text" => Ok(Self::Text),
            "url" | "web" => Ok(Self::Url),
            "input" | "stdin" | "-" => Ok(Self::Stdin),
            other => Err(TldrError::Usage(format!(
                "invalid type '{other}': use one of pdf, txt, url, input"
            ))),
        }
    }
}

/// Build the source for `kind`. `input` is a path or URL, and must be absent
/// for stdin.
pub fn open(
    kind: SourceKind,
    input: Option<&str>,
    http_timeout: Duration,
) -> Result<Box<dyn TextSource>> {
    let required = || {
        input.ok_or_else(|| {
            TldrError::Usage(format!("type '{}' requires an input name (-n)", kind.as_str()))
        })
    };

    if let (SourceKind::Stdin, Some(name)) = (kind, input) {
        return Err(TldrError::Usage(format!(
            "type 'input' reads standard input; remove '-n {name}' or pick another type"
        )));
    }

    let source: Box<dyn TextSource> = match kind {
        SourceKind::Pdf => Box::new(PdfSource::new(PathBuf::from(required()?))),
        SourceKind::Text => Box::new(TextFileSource::new(PathBuf::from(required()?))),
        SourceKind::Url => Box::new(WebSource::new(required()?).with_timeout(http_timeout)),
        SourceKind::Stdin => Box::new(StdinSource::new()),
    };
    Ok(source)
}
