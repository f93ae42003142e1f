use std::path::Path;

use crate::format::{FormatError, FormatKind, decode_table};
use crate::TableReadOptions;

#[test]
fn from_str_accepts_known_names() {
    assert_eq!(FormatKind::from_str("csv"), Some(FormatKind::Csv));
    assert_eq!(FormatKind::from_str("CSV"), Some(FormatKind::Csv));
    assert_eq!(FormatKind::from_str("ascii.csv"), Some(FormatKind::Csv));
    assert_eq!(FormatKind::from_str("json"), Some(FormatKind::Json));
    assert_eq!(FormatKind::from_str("parquet"), None);
}

#[test]
fn from_path_uses_extension() {
    assert_eq!(FormatKind::from_path(Path::new("a/b.csv")), Some(FormatKind::Csv));
    assert_eq!(FormatKind::from_path(Path::new("rows.JSON")), Some(FormatKind::Json));
    assert_eq!(FormatKind::from_path(Path::new("noext")), None);
    assert_eq!(FormatKind::from_path(Path::new("")), None);
}

#[test]
fn display_and_extensions() {
    assert_eq!(FormatKind::Csv.to_string(), "csv");
    assert_eq!(FormatKind::Json.extensions(), &["json"]);
}

#[test]
fn availability_follows_features() {
    assert_eq!(FormatKind::Csv.is_available(), cfg!(feature = "csv"));
    assert_eq!(FormatKind::Json.is_available(), cfg!(feature = "json"));
}

#[cfg(not(feature = "json"))]
#[test]
fn disabled_format_is_reported() {
    let mut input: &[u8] = b"[]";
    let err = decode_table(FormatKind::Json, &mut input, &TableReadOptions::default()).unwrap_err();
    assert!(matches!(err, FormatError::NotEnabled(FormatKind::Json)));
}

#[cfg(feature = "csv")]
#[test]
fn decode_table_dispatches_by_kind() {
    let mut input: &[u8] = b"a\n1";
    let table = decode_table(FormatKind::Csv, &mut input, &TableReadOptions::default()).unwrap();
    assert_eq!(table.len(), 1);

    let mut bad: &[u8] = b"a,b\n1";
    let err = decode_table(FormatKind::Csv, &mut bad, &TableReadOptions::default()).unwrap_err();
    assert!(matches!(err, FormatError::Serde(_)), "got {err:?}");
}
