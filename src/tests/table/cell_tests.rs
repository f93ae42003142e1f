use crate::table::Cell;

#[test]
fn parse_infers_cell_types() {
    assert_eq!(Cell::parse(""), Cell::Null);
    assert_eq!(Cell::parse("  "), Cell::Null);
    assert_eq!(Cell::parse("true"), Cell::Bool(true));
    assert_eq!(Cell::parse("FALSE"), Cell::Bool(false));
    assert_eq!(Cell::parse("42"), Cell::Int(42));
    assert_eq!(Cell::parse("-7"), Cell::Int(-7));
    assert_eq!(Cell::parse("2.5"), Cell::Float(2.5));
    assert_eq!(Cell::parse(" hello "), Cell::Text("hello".into()));
}

#[test]
fn accessors() {
    assert_eq!(Cell::Int(3).as_i64(), Some(3));
    assert_eq!(Cell::Int(3).as_f64(), Some(3.0));
    assert_eq!(Cell::Float(1.5).as_i64(), None);
    assert_eq!(Cell::from("x").as_str(), Some("x"));
    assert!(Cell::Null.is_null());
    assert!(!Cell::from(0i64).is_null());
}

#[test]
fn display_matches_csv_text() {
    assert_eq!(Cell::Null.to_string(), "");
    assert_eq!(Cell::Bool(true).to_string(), "true");
    assert_eq!(Cell::from(12i64).to_string(), "12");
    assert_eq!(Cell::from(0.25f64).to_string(), "0.25");
    assert_eq!(Cell::from(2.0f64).to_string(), "2.0");
    assert_eq!(Cell::parse(&Cell::Float(1e3).to_string()), Cell::Float(1e3));
    assert_eq!(Cell::from("abc").to_string(), "abc");
}
