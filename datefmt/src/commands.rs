// SPDX-FileCopyrightText: 2025 All contributors
//
// SPDX-License-Identifier: GPL-2.0-or-later

use crate::format_arg::{raw_from_arg, raw_to_output};
use date_format::{DateAdapter, DateFormatError, RawValue};
use std::io;
use tracing::{debug, info};

#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error(transparent)]
    Date(#[from] DateFormatError),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("column {0:?} not found in the header")]
    MissingColumn(String),

    #[error("row {row}: {source}")]
    Row { row: usize, source: DateFormatError },
}

/// Parses `value` with `from` and writes the date with `to`.
pub fn convert(
    value: &str,
    from: &DateAdapter,
    to: &DateAdapter,
) -> Result<RawValue, DateFormatError> {
    let date = from.parse(&raw_from_arg(value, from.kind()))?;
    to.serialize(&date)
}

/// Rewrites the dates of one CSV column from one format to another.
///
/// Empty cells (and `0` for integer dates) stay empty. Returns the number of
/// converted cells.
pub fn convert_csv<R: io::Read, W: io::Write>(
    input: R,
    output: W,
    column: &str,
    from: &DateAdapter,
    to: &DateAdapter,
) -> Result<usize, CommandError> {
    let mut reader = csv::Reader::from_reader(input);
    let mut writer = csv::Writer::from_writer(output);

    let headers = reader.headers()?.clone();
    let idx = headers
        .iter()
        .position(|header| header == column)
        .ok_or_else(|| CommandError::MissingColumn(column.to_owned()))?;
    debug!("converting column {column} at index {idx}");
    writer.write_record(&headers)?;

    let mut converted = 0;
    for (row, record) in reader.records().enumerate() {
        let record = record?;
        let mut out = csv::StringRecord::with_capacity(record.as_slice().len(), record.len());
        for (field_idx, field) in record.iter().enumerate() {
            if field_idx != idx {
                out.push_field(field);
                continue;
            }
            let raw = raw_from_arg(field, from.kind());
            let rendered = from
                .deserialize(&raw, true)
                .and_then(|date| to.serialize_optional(date.as_ref()))
                .map_err(|source| CommandError::Row {
                    row: row + 1,
                    source,
                })?;
            match rendered {
                Some(raw) => {
                    converted += 1;
                    out.push_field(&raw_to_output(&raw));
                }
                None => out.push_field(""),
            }
        }
        writer.write_record(&out)?;
    }
    writer.flush()?;
    info!("converted {converted} dates in column {column}");
    Ok(converted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use date_format::{DMY_FORMAT, ISO_FORMAT, NUMBER_FORMAT};

    #[test_log::test]
    fn convert_between_formats() {
        let raw = convert("3/5/2019", &DMY_FORMAT.text_adapter(), &NUMBER_FORMAT.number_adapter());
        assert_eq!(raw, Ok(RawValue::Number(20190503)));

        let raw = convert("20190503", &NUMBER_FORMAT.number_adapter(), &ISO_FORMAT.text_adapter());
        assert_eq!(raw, Ok(RawValue::from("2019-05-03")));
    }

    #[test]
    fn convert_refuses_two_digit_year() {
        let result = convert("3/5/19", &DMY_FORMAT.text_adapter(), &ISO_FORMAT.text_adapter());
        assert!(matches!(result, Err(DateFormatError::YearWidth { .. })));
    }

    #[test_log::test]
    fn csv_column_is_rewritten() {
        let input = "id,date,note\n1,03/01/2023,first\n2,,empty\n3,29/2/2020,leap\n";
        let mut output = Vec::new();
        let converted = convert_csv(
            input.as_bytes(),
            &mut output,
            "date",
            &DMY_FORMAT.text_adapter(),
            &ISO_FORMAT.text_adapter(),
        )
        .unwrap();
        assert_eq!(converted, 2);
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "id,date,note\n1,2023-01-03,first\n2,,empty\n3,2020-02-29,leap\n"
        );
    }

    #[test]
    fn csv_reports_row_of_invalid_date() {
        let input = "id,date\n1,2023-01-03\n2,23-01-03\n";
        let result = convert_csv(
            input.as_bytes(),
            io::sink(),
            "date",
            &ISO_FORMAT.text_adapter(),
            &DMY_FORMAT.text_adapter(),
        );
        match result {
            Err(CommandError::Row { row, .. }) => assert_eq!(row, 2),
            other => panic!("expected a row error, got {other:?}"),
        }
    }

    #[test]
    fn csv_requires_column() {
        let result = convert_csv(
            "id,day\n1,2023-01-03\n".as_bytes(),
            io::sink(),
            "date",
            &ISO_FORMAT.text_adapter(),
            &DMY_FORMAT.text_adapter(),
        );
        assert!(matches!(result, Err(CommandError::MissingColumn(column)) if column == "date"));
    }
}
