//! Command-line parsing and the top-level run loop.

use std::path::PathBuf;
use std::time::Duration;

use tracing::info;

use crate::config::{clamp_count, SummarizerConfig, DEFAULT_OUTPUT_FILE};
use crate::emit::{emit, Output, Sink};
use crate::error::{Result, TldrError};
use crate::pipeline::Summarizer;
use crate::source::{self, SourceKind};

pub const USAGE: &str = "\
TLDR summary generator

Usage: tldr -t <pdf|txt|url|input> [-n <input>] [options]

Options:
  -t, --type <TYPE>          Type of input: pdf, txt, url, input (stdin)
  -n, --name <INPUT>         Input file (PDF or text) or URL; not used with -t input
  -w, --words <N>            Max words per eligible sentence (default: 20)
  -s, --sentences <N>        Sentences per page/document (default: 5)
  -o, --output [FILE]        Save the TLDR to a file (default: TLDR.txt)
  -c, --config <FILE>        JSON config file; flags override its values
      --parallel             Summarize pages in parallel
  -h, --help                 Print this help
";

/// Parsed command line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliArgs {
    pub kind: Option<SourceKind>,
    pub input: Option<String>,
    pub words_per_sentence: Option<i64>,
    pub sentences_per_unit: Option<i64>,
    pub output: Option<PathBuf>,
    pub config_path: Option<PathBuf>,
    pub parallel: bool,
    pub help: bool,
}

impl CliArgs {
    /// Parse arguments, excluding the program name.
    pub fn parse<I, S>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let args: Vec<String> = args.into_iter().map(Into::into).collect();
        let mut cli = CliArgs::default();

        let mut i = 0;
        while i < args.len() {
            let flag = args[i].as_str();
            match flag {
                "-t" | "--type" => {
                    cli.kind = Some(value(&args, i, flag)?.parse()?);
                    i += 2;
                }
                "-n" | "--name" => {
                    cli.input = Some(value(&args, i, flag)?.to_string());
                    i += 2;
                }
                "-w" | "--words" => {
                    cli.words_per_sentence = Some(int_value(&args, i, flag)?);
                    i += 2;
                }
                "-s" | "--sentences" => {
                    cli.sentences_per_unit = Some(int_value(&args, i, flag)?);
                    i += 2;
                }
                "-c" | "--config" => {
                    cli.config_path = Some(PathBuf::from(value(&args, i, flag)?));
                    i += 2;
                }
                "-o" | "--output" => {
                    // The file name is optional
                    match args.get(i + 1).filter(|next| !next.starts_with('-')) {
                        Some(name) => {
                            cli.output = Some(PathBuf::from(name));
                            i += 2;
                        }
                        None => {
                            cli.output = Some(PathBuf::from(DEFAULT_OUTPUT_FILE));
                            i += 1;
                        }
                    }
                }
                "--parallel" => {
                    cli.parallel = true;
                    i += 1;
                }
                "-h" | "--help" => {
                    cli.help = true;
                    i += 1;
                }
                other => {
                    return Err(TldrError::Usage(format!("unrecognized argument '{other}'")));
                }
            }
        }

        Ok(cli)
    }

    /// Config file (if any) with command-line overrides applied.
    pub fn resolve_config(&self) -> Result<SummarizerConfig> {
        let mut config = match &self.config_path {
            Some(path) => SummarizerConfig::from_file(path)?,
            None => SummarizerConfig::default(),
        };

        if let Some(words) = self.words_per_sentence {
            config.words_per_sentence = clamp_count("words per sentence", words);
        }
        if let Some(sentences) = self.sentences_per_unit {
            config.sentences_per_unit = clamp_count("sentences per unit", sentences);
        }
        if self.parallel {
            config.parallel = true;
        }
        Ok(config)
    }

    pub fn sink(&self) -> Sink {
        Sink::from_path(self.output.clone())
    }
}

fn value<'a>(args: &'a [String], i: usize, flag: &str) -> Result<&'a str> {
    args.get(i + 1)
        .map(String::as_str)
        .ok_or_else(|| TldrError::Usage(format!("{flag} requires a value")))
}

fn int_value(args: &[String], i: usize, flag: &str) -> Result<i64> {
    let raw = value(args, i, flag)?;
    raw.parse()
        .map_err(|_| TldrError::Usage(format!("{flag} expects an integer, got '{raw}'")))
}

/// Acquire, summarize and emit according to the command line.
pub fn run(cli: &CliArgs) -> Result<()> {
    let kind = cli.kind.ok_or_else(|| {
        TldrError::Usage(
            "Invalid type specified. Use '-t <type>' to process a PDF, text file, URL or stdin."
                .to_string(),
        )
    })?;
    let config = cli.resolve_config()?;
    let timeout = Duration::from_secs(config.http_timeout_secs);
    let mut source = source::open(kind, cli.input.as_deref(), timeout)?;

    info!(
        source = %source.describe(),
        kind = kind.as_str(),
        words_per_sentence = config.words_per_sentence,
        sentences_per_unit = config.sentences_per_unit,
        "summarizing"
    );

    let summarizer = Summarizer::from_config(config);
    let units = summarizer.summarize_source(source.as_mut())?;
    let output = Output::from_units(&units);
    emit(&output, &cli.sink())
}
