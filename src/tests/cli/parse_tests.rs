use std::path::PathBuf;

use crate::cli::{ReadArgs, SourceArgs, parse_format, parse_nproc};
use crate::format::FormatKind;

#[test]
fn parse_nproc_rejects_zero_and_garbage() {
    assert_eq!(parse_nproc("4"), Some(4));
    assert_eq!(parse_nproc(" 2 "), Some(2));
    assert_eq!(parse_nproc("0"), None);
    assert_eq!(parse_nproc("-1"), None);
    assert_eq!(parse_nproc("many"), None);
}

#[test]
fn parse_format_names() {
    assert_eq!(parse_format("csv"), Some(FormatKind::Csv));
    assert_eq!(parse_format(" JSON "), Some(FormatKind::Json));
    assert_eq!(parse_format("xlsx"), None);
}

#[test]
fn source_args_keep_order() {
    let args = SourceArgs::new().with_source("b.csv").with_source("a.csv");
    assert_eq!(args.as_slice(), &["b.csv".to_string(), "a.csv".to_string()]);
    assert_eq!(
        args.to_sources().into_vec(),
        vec![PathBuf::from("b.csv"), PathBuf::from("a.csv")]
    );
    assert!(SourceArgs::new().is_empty());
}

#[test]
fn read_args_to_config() {
    let args = ReadArgs {
        sources: SourceArgs::new().with_source("a.json"),
        nproc: 3,
        format: Some(FormatKind::Json),
        verbose: true,
    };

    let cfg = args.to_config();
    assert_eq!(cfg.nproc, 3);
    assert!(cfg.verbose);
    assert_eq!(cfg.table.format, Some(FormatKind::Json));

    let defaults = ReadArgs::default().to_config();
    assert_eq!(defaults.nproc, 1);
    assert_eq!(defaults.table.format, None);
}

#[test]
fn stdin_tokens_map_to_stdin_provider() {
    let args = SourceArgs::new()
        .with_source("a.csv")
        .with_source("-")
        .with_source("STDIN");

    let providers = args.to_providers().into_vec();
    let ids: Vec<&str> = providers.iter().map(|p| p.id()).collect();
    assert_eq!(ids, vec!["a.csv", "-", "-"]);
    assert_eq!(providers[0].format_hint(), Some(FormatKind::Csv));
    assert_eq!(providers[1].format_hint(), None);
}

#[cfg(feature = "csv")]
#[test]
fn file_providers_read_through_table_reader() {
    use std::io::Write;

    let mut tmp = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
    tmp.write_all(b"x\n1\n2\n").unwrap();
    tmp.flush().unwrap();

    let args = ReadArgs {
        sources: SourceArgs::new().with_source(tmp.path().to_string_lossy()),
        ..ReadArgs::default()
    };
    let engine = crate::build_table_reader(args.to_config()).unwrap();
    let table = engine.read(args.sources.to_providers()).unwrap();
    assert_eq!(table.len(), 2);
}
