//! Per-unit summarization pipeline.

pub mod runner;

pub use runner::Summarizer;
