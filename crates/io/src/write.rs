//! CSV output writing.
//!
//! Every field is quoted: password managers import free-text fields
//! (passwords, note bodies) that contain commas, quotes, and line breaks,
//! and quoting everything sidesteps per-importer dialect quirks. 1Password
//! expects no header row; the other formats get their header first.

use std::io::Write;

use keyferry_convert::config::OutputFormat;
use keyferry_convert::mapping::{login_columns, note_columns};

/// Write login rows for the given target format.
pub fn write_logins(
    format: OutputFormat,
    rows: &[Vec<String>],
    writer: impl Write,
) -> Result<(), String> {
    write_rows(login_columns(format), format != OutputFormat::OnePassword, rows, writer)
}

/// Write note rows for the given target format.
pub fn write_notes(
    format: OutputFormat,
    rows: &[Vec<String>],
    writer: impl Write,
) -> Result<(), String> {
    write_rows(note_columns(format), format != OutputFormat::OnePassword, rows, writer)
}

fn write_rows(
    columns: &[&str],
    with_header: bool,
    rows: &[Vec<String>],
    writer: impl Write,
) -> Result<(), String> {
    let mut csv = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Always)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);

    if with_header {
        csv.write_record(columns)
            .map_err(|e| format!("CSV write error: {e}"))?;
    }

    for row in rows {
        csv.write_record(row)
            .map_err(|e| format!("CSV write error: {e}"))?;
    }

    csv.flush().map_err(|e| format!("CSV flush error: {e}"))?;
    Ok(())
}
