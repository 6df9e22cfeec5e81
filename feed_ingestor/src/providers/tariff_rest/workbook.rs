//! Workbook bytes -> raw cell rows.

use std::io::Cursor;

use calamine::{Data, Reader, open_workbook_auto_from_rs};

use crate::models::cell::RawCell;

/// Parses a binary workbook body into data rows from its first sheet.
///
/// The header row (index 0) is stripped; every cell is reduced to a
/// [`RawCell`] so no calamine type leaks past this module.
pub(crate) fn parse_workbook(bytes: &[u8]) -> Result<Vec<Vec<RawCell>>, calamine::Error> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))?;

    let Some(sheet) = workbook.sheet_names().first().cloned() else {
        return Ok(Vec::new());
    };
    let range = workbook.worksheet_range(&sheet)?;

    Ok(range
        .rows()
        .skip(1)
        .map(|row| row.iter().map(cell_from_data).collect())
        .collect())
}

fn cell_from_data(data: &Data) -> RawCell {
    match data {
        Data::Int(n) => RawCell::Number(*n as f64),
        Data::Float(f) => RawCell::Number(*f),
        Data::String(s) => RawCell::Text(s.clone()),
        Data::Bool(b) => RawCell::Text(b.to_string()),
        // Serial date cells the sheet marked with a date format; keep the
        // raw serial so the normalizer applies its own epoch conversion.
        Data::DateTime(dt) => RawCell::Number(dt.as_f64()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => RawCell::Text(s.clone()),
        Data::Error(_) | Data::Empty => RawCell::Empty,
    }
}
