use sarge::ArgumentType;

use crate::cli::SourceArgs;

#[test]
fn source_args_split_on_commas() {
    let parsed = <SourceArgs as ArgumentType>::from_value(Some("a.csv, b.csv,,c.csv"))
        .expect("some")
        .expect("ok");
    assert_eq!(
        parsed.as_slice(),
        &["a.csv".to_string(), "b.csv".to_string(), "c.csv".to_string()]
    );
}

#[test]
fn source_args_without_value_is_empty() {
    let parsed = <SourceArgs as ArgumentType>::from_value(None)
        .expect("some")
        .expect("ok");
    assert!(parsed.is_empty());
    assert_eq!(<SourceArgs as ArgumentType>::default_value(), Some(SourceArgs::new()));
}

#[test]
fn source_args_normalize_stdin() {
    let parsed = <SourceArgs as ArgumentType>::from_value(Some("stdin,a.csv,-"))
        .expect("some")
        .expect("ok");
    assert_eq!(
        parsed.as_slice(),
        &["-".to_string(), "a.csv".to_string(), "-".to_string()]
    );
}
