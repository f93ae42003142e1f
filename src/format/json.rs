//! JSON table implementation.
//!
//! A table is an array of objects sharing one key set, or a single object
//! for a one-row table. Column order follows the key order of the first row.

use std::io::Read;

use serde_json::{Map, Value};

use super::FormatError;
use crate::table::{Cell, Table};

pub(crate) fn decode(reader: &mut dyn Read) -> Result<Table, FormatError> {
    let value: Value = serde_json::from_reader(reader).map_err(|e| FormatError::Serde(Box::new(e)))?;

    let objects = match value {
        Value::Array(items) => items
            .into_iter()
            .map(|item| match item {
                Value::Object(obj) => Ok(obj),
                other => Err(FormatError::Malformed(format!(
                    "expected an object per row, found {other}"
                ))),
            })
            .collect::<Result<Vec<_>, _>>()?,
        Value::Object(obj) => vec![obj],
        other => {
            return Err(FormatError::Malformed(format!(
                "expected an array of objects, found {other}"
            )));
        }
    };

    let columns: Vec<String> = objects
        .first()
        .map(|obj| obj.keys().cloned().collect())
        .unwrap_or_default();

    let mut table = Table::new(columns);
    for (i, obj) in objects.into_iter().enumerate() {
        let row = row_from_object(&table, obj, i)?;
        table
            .push_row(row)
            .map_err(|e| FormatError::Malformed(e.to_string()))?;
    }
    Ok(table)
}

fn row_from_object(table: &Table, mut obj: Map<String, Value>, index: usize) -> Result<Vec<Cell>, FormatError> {
    if obj.len() != table.column_names().len() {
        return Err(FormatError::Malformed(format!(
            "row {index} has {} keys, expected {}",
            obj.len(),
            table.column_names().len()
        )));
    }

    table
        .column_names()
        .iter()
        .map(|name| {
            obj.remove(name)
                .map(cell_from_json)
                .ok_or_else(|| FormatError::Malformed(format!("row {index} is missing key '{name}'")))
        })
        .collect()
}

fn cell_from_json(value: Value) -> Cell {
    match value {
        Value::Null => Cell::Null,
        Value::Bool(b) => Cell::Bool(b),
        Value::Number(n) => match n.as_i64() {
            Some(i) => Cell::Int(i),
            None => Cell::Float(n.as_f64().unwrap_or(f64::NAN)),
        },
        Value::String(s) => Cell::Text(s),
        nested @ (Value::Array(_) | Value::Object(_)) => Cell::Text(nested.to_string()),
    }
}
