//! Tests for input provider implementations.

use std::io::{Read, Write};

use crate::format::FormatKind;
use crate::io::{FileInput, InMemorySource, InputProvider, StdinInput};

#[test]
fn in_memory_source_reopens_from_start() {
    let src = InMemorySource::from_string("id", "hello");

    for _ in 0..2 {
        let mut reader = src.open().expect("open in-memory source");
        let mut buf = String::new();
        reader.read_to_string(&mut buf).unwrap();
        assert_eq!(buf, "hello");
    }
}

#[test]
fn in_memory_format_hint() {
    assert_eq!(InMemorySource::from_string("a.json", "").format_hint(), Some(FormatKind::Json));
    assert_eq!(InMemorySource::from_string("a", "").format_hint(), None);

    let declared = InMemorySource::new("a.json", Vec::new()).with_format(FormatKind::Csv);
    assert_eq!(declared.format_hint(), Some(FormatKind::Csv));
}

#[test]
fn file_input_reads_file() {
    let mut tmp = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
    tmp.write_all(b"a\n1\n").unwrap();
    tmp.flush().unwrap();

    let input = FileInput::new(tmp.path());
    assert_eq!(input.id(), tmp.path().to_string_lossy());
    assert_eq!(input.path(), tmp.path());
    assert_eq!(input.format_hint(), Some(FormatKind::Csv));

    let mut buf = String::new();
    input.open().unwrap().read_to_string(&mut buf).unwrap();
    assert_eq!(buf, "a\n1\n");
}

#[test]
fn file_input_missing_file_fails_to_open() {
    let dir = tempfile::tempdir().unwrap();
    let input = FileInput::new(dir.path().join("missing.csv"));
    let err = input.open().err().expect("missing file");
    assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
}

#[test]
fn stdin_input_id() {
    let input = StdinInput::new();
    assert_eq!(input.id(), "-");
    assert_eq!(input.format_hint(), None);
}
