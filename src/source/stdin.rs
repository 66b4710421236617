//! Standard input source

use std::io::Read;

use super::TextSource;
use crate::error::Result;
use crate::types::TextUnit;

/// Reads any reader to the end as a single unit; stdin by default.
pub struct StdinSource<R = std::io::Stdin> {
    reader: R,
}

impl StdinSource<std::io::Stdin> {
    pub fn new() -> Self {
        Self {
            reader: std::io::stdin(),
        }
    }
}

impl Default for StdinSource<std::io::Stdin> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Read> StdinSource<R> {
    pub fn from_reader(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: Read> TextSource for StdinSource<R> {
    fn units(&mut self) -> Result<Vec<TextUnit>> {
        let mut text = String::new();
        self.reader.read_to_string(&mut text)?;
        Ok(vec![TextUnit::document(text)])
    }

    fn describe(&self) -> String {
        "stdin".to_string()
    }
}
