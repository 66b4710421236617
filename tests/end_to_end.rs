//! End-to-end runs: source -> summarizer -> emitter.

use std::io::Write;
use std::path::Path;

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};
use tldr::source::{PdfSource, StdinSource, TextFileSource};
use tldr::{emit_to, Output, Sink, Summarizer, SummarizerConfig, TextSource, NO_SENTENCES};

const ARTICLE: &str = "\
Rust is a systems programming language. Rust guarantees memory safety without a garbage collector.
The borrow checker enforces ownership rules at compile time. Many teams adopt Rust for reliability.
Coffee is popular in the morning.
";

/// Hard-wrapped at roughly 40 columns, mid-sentence
const WRAPPED: &str = "\
Ownership rules are checked by the
compiler at build time. The compiler
rejects unsafe aliasing of mutable
data.

Borrowed data never outlives its owner.
";

/// Write a PDF whose pages hold the given lines, one text object per line.
fn write_pdf(path: &Path, pages: &[&[&str]]) {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });

    let mut kids: Vec<Object> = Vec::new();
    for lines in pages {
        let mut operations = Vec::new();
        for (row, line) in lines.iter().enumerate() {
            operations.extend([
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), 12.into()]),
                Operation::new("Td", vec![72.into(), (720 - 14 * row as i64).into()]),
                Operation::new("Tj", vec![Object::string_literal(*line)]),
                Operation::new("ET", vec![]),
            ]);
        }
        let content = Content { operations };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "Resources" => resources_id,
        });
        kids.push(page_id.into());
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    doc.save(path).unwrap();
}

fn summarizer(words: usize, sentences: usize) -> Summarizer {
    Summarizer::from_config(
        SummarizerConfig::default()
            .with_words_per_sentence(words)
            .with_sentences_per_unit(sentences),
    )
}

fn console_lines(output: &Output) -> Vec<String> {
    let mut buf = Vec::new();
    emit_to(output, &Sink::Console, &mut buf).expect("console write");
    String::from_utf8(buf)
        .expect("utf-8 output")
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn text_file_to_console() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(ARTICLE.as_bytes()).unwrap();

    let mut source = TextFileSource::new(file.path());
    let units = summarizer(20, 2).summarize_source(&mut source).unwrap();
    let lines = console_lines(&Output::from_units(&units));

    assert_eq!(lines[0], "");
    assert_eq!(lines[1], "TLDR:");
    assert_eq!(lines.len(), 4);
    // Every emitted sentence is verbatim from the input
    for sentence in &lines[2..] {
        assert!(ARTICLE.contains(sentence.as_str()), "not verbatim: {sentence}");
    }
    // The off-topic sentence shares no frequent words
    assert!(!lines.iter().any(|l| l.contains("Coffee")));
}

#[test]
fn scenario_short_sentence_selected() {
    let mut source =
        StdinSource::from_reader("The cat sat. A cat sat on the mat quietly today.".as_bytes());
    let units = summarizer(5, 1).summarize_source(&mut source).unwrap();

    assert_eq!(units[0].texts(), vec!["The cat sat."]);
    assert_eq!(
        console_lines(&Output::from_units(&units)),
        vec!["", "TLDR:", "The cat sat."]
    );
}

#[test]
fn empty_input_writes_placeholder() {
    let mut source = StdinSource::from_reader("".as_bytes());
    let units = summarizer(20, 5).summarize_source(&mut source).unwrap();

    assert!(units[0].is_degenerate());
    assert_eq!(
        console_lines(&Output::from_units(&units)),
        vec!["", "TLDR:", NO_SENTENCES]
    );
}

#[test]
fn every_sentence_too_long_writes_placeholder() {
    let mut source = StdinSource::from_reader(ARTICLE.as_bytes());
    let units = summarizer(2, 5).summarize_source(&mut source).unwrap();

    assert_eq!(
        console_lines(&Output::from_units(&units)),
        vec!["", "TLDR:", NO_SENTENCES]
    );
}

#[test]
fn zero_sentences_writes_header_only() {
    let mut source = StdinSource::from_reader(ARTICLE.as_bytes());
    let units = summarizer(20, 0).summarize_source(&mut source).unwrap();

    assert_eq!(console_lines(&Output::from_units(&units)), vec!["", "TLDR:"]);
}

#[test]
fn file_sink_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let out_path = dir.path().join("TLDR.txt");

    let mut source = StdinSource::from_reader(ARTICLE.as_bytes());
    let units = summarizer(20, 3).summarize_source(&mut source).unwrap();
    let output = Output::from_units(&units);

    let mut console = Vec::new();
    emit_to(&output, &Sink::File(out_path.clone()), &mut console).unwrap();

    let persisted = std::fs::read_to_string(&out_path).unwrap();
    let persisted_lines: Vec<&str> = persisted.lines().collect();
    assert_eq!(persisted_lines, output.lines());
    assert_eq!(
        String::from_utf8(console).unwrap().trim_end(),
        format!("TLDR saved to {}", out_path.display())
    );
}

#[test]
fn wrapped_text_file_keeps_whole_sentences() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(WRAPPED.as_bytes()).unwrap();

    let mut source = TextFileSource::new(file.path());
    let units = summarizer(20, 5).summarize_source(&mut source).unwrap();
    let lines = console_lines(&Output::from_units(&units));

    assert_eq!(&lines[..2], &["", "TLDR:"]);
    let mut sentences = lines[2..].to_vec();
    sentences.sort();
    assert_eq!(
        sentences,
        vec![
            "Borrowed data never outlives its owner.",
            "Ownership rules are checked by the compiler at build time.",
            "The compiler rejects unsafe aliasing of mutable data.",
        ]
    );
}

#[test]
fn pdf_pages_with_wrapped_lines_and_an_empty_page() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notes.pdf");
    write_pdf(
        &path,
        &[
            &[
                "Ownership rules are checked",
                "by the compiler at build time.",
                "The compiler rejects unsafe",
                "aliasing of mutable data.",
            ],
            &[],
            &["Borrowed data never outlives its owner."],
        ],
    );

    let mut source = PdfSource::new(&path);
    let units = summarizer(20, 5).summarize_source(&mut source).unwrap();
    let lines = console_lines(&Output::from_units(&units));

    assert_eq!(lines.len(), 10, "{lines:?}");
    assert_eq!(&lines[..2], &["", "Page 1"]);
    let mut first_page = lines[2..4].to_vec();
    first_page.sort();
    assert_eq!(
        first_page,
        vec![
            "Ownership rules are checked by the compiler at build time.",
            "The compiler rejects unsafe aliasing of mutable data.",
        ]
    );
    assert_eq!(&lines[4..7], &["", "Page 2", NO_SENTENCES]);
    assert_eq!(
        &lines[7..],
        &["", "Page 3", "Borrowed data never outlives its owner."]
    );
}

#[test]
fn missing_file_aborts_before_scoring() {
    let mut source = TextFileSource::new("/nonexistent/article.txt");
    assert!(source.units().is_err());
    assert!(summarizer(20, 5).summarize_source(&mut source).is_err());
}
