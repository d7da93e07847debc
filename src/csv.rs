// src/csv.rs
use std::io::{self, Write};
use std::mem::take;

use crate::session::SessionRecord;

/// Output columns, in order.
pub const COLUMNS: [&str; 12] = [
    "title",
    "description",
    "room",
    "day",
    "track",
    "thumbnailUrl",
    "speaker",
    "speakerAffiliation",
    "speakerProfile",
    "speakerGithub",
    "speakerTwitter",
    "speakerIconUrl",
];

/* ---------------- Parsing ---------------- */

/// Minimal CSV parser (quotes + CRLF tolerant).
pub fn parse_rows(text: &str, sep: char) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    let mut field = s!();
    let mut row = Vec::new();
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' => {
                if in_quotes {
                    if matches!(chars.peek(), Some('"')) {
                        chars.next(); // double-quote escape
                        field.push('"');
                    } else {
                        in_quotes = false;
                    }
                } else {
                    in_quotes = true;
                }
            }
            c if c == sep && !in_quotes => {
                row.push(take(&mut field));
            }
            '\n' | '\r' if !in_quotes => {
                if ch == '\r' && matches!(chars.peek(), Some('\n')) { chars.next(); }
                row.push(take(&mut field));
                if !(row.len() == 1 && row[0].is_empty()) {
                    rows.push(take(&mut row));
                } else {
                    row.clear();
                }
            }
            _ => field.push(ch),
        }
    }

    // Flush a trailing row without newline (even if quotes were unterminated).
    if !field.is_empty() || !row.is_empty() {
        row.push(field);
        rows.push(row);
    }

    rows
}

/* ---------------- Writing ---------------- */

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a row, quoting only cells that need it.
pub fn write_row<W: Write, S: AsRef<str>>(mut w: W, row: &[S], sep: char) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        let cell = cell.as_ref();
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        if needs_quotes(cell, sep) {
            write!(w, "\"{}\"", cell.replace('"', "\"\""))?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/// Write a row with every cell quoted; embedded quotes are doubled.
pub fn write_quoted_row<W: Write, S: AsRef<str>>(mut w: W, row: &[S], sep: char) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        write!(w, "\"{}\"", cell.as_ref().replace('"', "\"\""))?;
    }
    writeln!(w)
}

fn opt(v: &Option<String>) -> &str {
    v.as_deref().unwrap_or("")
}

/// Cells of one record in `COLUMNS` order. Absent fields are empty strings.
pub fn record_cells(r: &SessionRecord) -> [&str; 12] {
    [
        r.title.as_str(),
        opt(&r.description),
        opt(&r.room),
        r.day.as_str(),
        opt(&r.track),
        opt(&r.thumbnail_url),
        r.speaker.as_str(),
        opt(&r.speaker_affiliation),
        opt(&r.speaker_profile),
        opt(&r.speaker_github),
        opt(&r.speaker_twitter),
        opt(&r.speaker_icon_url),
    ]
}

/// Header line, then one fully-quoted line per record, in input order.
pub fn write_records<W: Write>(mut w: W, records: &[SessionRecord]) -> io::Result<()> {
    write_row(&mut w, &COLUMNS, ',')?;
    for r in records {
        write_quoted_row(&mut w, &record_cells(r), ',')?;
    }
    Ok(())
}

pub fn serialize(records: &[SessionRecord]) -> String {
    let mut buf: Vec<u8> = Vec::new();
    // Writes into a Vec<u8> do not fail.
    if let Err(e) = write_records(&mut buf, records) {
        loge!("CSV serialize failed: {e}");
    }

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}
