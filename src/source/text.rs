//! Plain text file source

use std::path::PathBuf;

use super::TextSource;
use crate::error::{Result, TldrError};
use crate::types::TextUnit;

/// Reads a whole UTF-8 file as a single unit
#[derive(Debug, Clone)]
pub struct TextFileSource {
    path: PathBuf,
}

impl TextFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl TextSource for TextFileSource {
    fn units(&mut self) -> Result<Vec<TextUnit>> {
        let text = std::fs::read_to_string(&self.path).map_err(|source| TldrError::FileRead {
            path: self.path.clone(),
            source,
        })?;
        Ok(vec![TextUnit::document(text)])
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
