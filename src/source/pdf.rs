//! PDF source: one logical unit per page.

use std::path::PathBuf;

use lopdf::Document;
use tracing::warn;

use super::TextSource;
use crate::error::{Result, TldrError};
use crate::types::TextUnit;

/// Extracts the text layer of each page with `lopdf`.
///
/// A document that cannot be loaded fails the run. A single page whose text
/// cannot be extracted is logged and yielded as an empty unit, so its
/// siblings are still summarized.
#[derive(Debug, Clone)]
pub struct PdfSource {
    path: PathBuf,
}

impl PdfSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn load(&self) -> Result<Document> {
        Document::load(&self.path).map_err(|e| TldrError::PdfLoad {
            path: self.path.clone(),
            message: e.to_string(),
        })
    }
}

/// Extract every page of an already loaded document, in page order.
pub fn extract_pages(doc: &Document) -> Vec<TextUnit> {
    // get_pages is a BTreeMap keyed by 1-based page number
    doc.get_pages()
        .into_keys()
        .map(|page_num| match doc.extract_text(&[page_num]) {
            Ok(text) => TextUnit::page(page_num, text),
            Err(e) => {
                warn!(page = page_num, error = %e, "page text extraction failed");
                TextUnit::page(page_num, String::new())
            }
        })
        .collect()
}

impl TextSource for PdfSource {
    fn units(&mut self) -> Result<Vec<TextUnit>> {
        let doc = self.load()?;
        Ok(extract_pages(&doc))
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
