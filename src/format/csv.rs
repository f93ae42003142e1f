//! CSV table implementation.

use std::io::{Read, Write};

use super::FormatError;
use crate::config::TableReadOptions;
use crate::table::{Cell, Table};

pub(crate) fn decode(reader: &mut dyn Read, options: &TableReadOptions) -> Result<Table, FormatError> {
    let delimiter = u8::try_from(options.delimiter).map_err(|_| {
        FormatError::Malformed(format!(
            "delimiter {:?} is not a single-byte character",
            options.delimiter
        ))
    })?;

    // Rows whose field count differs from the header are rejected by the
    // reader itself (flexible is off).
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(options.has_headers)
        .delimiter(delimiter)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut columns: Option<Vec<String>> = if options.has_headers {
        let headers = rdr.headers().map_err(|e| FormatError::Serde(Box::new(e)))?;
        Some(headers.iter().map(str::to_string).collect())
    } else {
        None
    };

    let mut rows = Vec::new();
    for record in rdr.records() {
        let record = record.map_err(|e| FormatError::Serde(Box::new(e)))?;
        if columns.is_none() {
            columns = Some((0..record.len()).map(|i| format!("col{i}")).collect());
        }
        rows.push(record.iter().map(Cell::parse).collect::<Vec<_>>());
    }

    let mut table = Table::new(columns.unwrap_or_default());
    for row in rows {
        table
            .push_row(row)
            .map_err(|e| FormatError::Malformed(e.to_string()))?;
    }
    Ok(table)
}

pub(crate) fn encode(table: &Table, writer: &mut dyn Write) -> Result<(), FormatError> {
    let mut wtr = csv::Writer::from_writer(writer);

    wtr.write_record(table.column_names())
        .map_err(|e| FormatError::Serde(Box::new(e)))?;

    for row in table.rows() {
        let record: Vec<String> = row.iter().map(Cell::to_string).collect();
        wtr.write_record(&record)
            .map_err(|e| FormatError::Serde(Box::new(e)))?;
    }

    wtr.flush().map_err(FormatError::Io)
}
