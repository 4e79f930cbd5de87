//! Delimited-text parsing for downloaded reports.
//!
//! Quoting follows RFC 4180: fields may be wrapped in double quotes, a
//! doubled quote inside a quoted field is a literal quote, and quoted fields
//! may contain the delimiter and line breaks.

use adwords_core::{AdwordsError, AdwordsResult};

/// One parsed row and the source line it starts on (1-based).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvRow {
    pub line: usize,
    pub cells: Vec<String>,
}

/// Split `raw` into rows of cells. Lines holding nothing but whitespace are
/// dropped; a line with a quoted empty cell (`""`) is a row.
pub fn parse_rows(raw: &str, delimiter: char) -> AdwordsResult<Vec<CsvRow>> {
    let mut rows = Vec::new();
    let mut row = RowBuilder::new(1);
    let mut in_quotes = false;
    let mut line = 1;
    let mut chars = raw.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            match c {
                '"' if chars.peek() == Some(&'"') => {
                    chars.next();
                    row.cell.push('"');
                }
                '"' => in_quotes = false,
                '\n' => {
                    line += 1;
                    row.cell.push(c);
                }
                _ => row.cell.push(c),
            }
            continue;
        }

        match c {
            '"' if row.cell.is_empty() => {
                in_quotes = true;
                row.structured = true;
            }
            '\r' if chars.peek() == Some(&'\n') => {}
            '\n' => {
                line += 1;
                row.finish_into(&mut rows);
                row = RowBuilder::new(line);
            }
            c if c == delimiter => {
                row.structured = true;
                row.cells.push(std::mem::take(&mut row.cell));
            }
            _ => row.cell.push(c),
        }
    }

    if in_quotes {
        return Err(AdwordsError::Csv {
            line: row.line,
            message: "unterminated quoted field".into(),
        });
    }
    row.finish_into(&mut rows);
    Ok(rows)
}

struct RowBuilder {
    line: usize,
    cells: Vec<String>,
    cell: String,
    // Saw a quote or a delimiter, so the row is data even if every cell is empty.
    structured: bool,
}

impl RowBuilder {
    fn new(line: usize) -> Self {
        Self {
            line,
            cells: Vec::new(),
            cell: String::new(),
            structured: false,
        }
    }

    fn finish_into(mut self, rows: &mut Vec<CsvRow>) {
        if !self.structured && self.cell.trim().is_empty() {
            return;
        }
        self.cells.push(self.cell);
        rows.push(CsvRow {
            line: self.line,
            cells: self.cells,
        });
    }
}
