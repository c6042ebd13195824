// ============================================================
// CSV PARSER
// ============================================================
// Character-level scanner for published-sheet CSV exports. The
// export format is an RFC-4180 subset: comma-separated, double
// quotes as the sole quoting character, doubled quotes as escapes,
// any of \n / \r\n / \r as row separators.
//
// The scanner is deliberately forgiving: malformed quoting is never
// an error. An unterminated quote consumes the rest of the input as
// one field; short rows pad with empty strings; long rows drop the
// extra cells against the header.

use crate::domain::record::RawRecord;

/// Scan raw CSV text into rows of cells. Cells are not trimmed here;
/// trimming happens when records are built.
pub fn scan_rows(text: &str) -> Vec<Vec<String>> {
    let normalized = text.replace("\r\n", "\n").replace('\r', "\n");

    let mut rows: Vec<Vec<String>> = Vec::new();
    let mut row: Vec<String> = Vec::new();
    let mut cell = String::new();
    let mut in_quotes = false;

    let mut chars = normalized.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '"' => {
                if in_quotes && chars.peek() == Some(&'"') {
                    chars.next();
                    cell.push('"');
                } else {
                    in_quotes = !in_quotes;
                }
            }
            ',' if !in_quotes => {
                row.push(std::mem::take(&mut cell));
            }
            '\n' if !in_quotes => {
                row.push(std::mem::take(&mut cell));
                rows.push(std::mem::take(&mut row));
            }
            _ => cell.push(c),
        }
    }

    // Input without a trailing newline still yields its last row.
    if !cell.is_empty() || !row.is_empty() {
        row.push(cell);
        rows.push(row);
    }

    rows
}

/// Parse CSV text into header-keyed records. The first row is the
/// header (trimmed); rows whose every cell is blank are dropped.
pub fn parse_records(text: &str) -> Vec<RawRecord> {
    let mut rows = scan_rows(text);
    if rows.is_empty() {
        return Vec::new();
    }

    let headers: Vec<String> = rows
        .remove(0)
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    rows.iter()
        .filter(|cells| !cells.iter().all(|c| c.trim().is_empty()))
        .map(|cells| RawRecord::from_row(&headers, cells))
        .collect()
}
