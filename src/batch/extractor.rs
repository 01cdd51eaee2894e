//! Locating the free-text messages inside uploaded data.
//!
//! Two source shapes are understood:
//!
//! - **Tables** (CSV, or the first sheet of an `.xlsx`/`.xls` workbook, with
//!   a header row): the first column whose name contains `text`, `message` or
//!   `content` (case-insensitive) is used, otherwise the first column. Rows
//!   with a missing or empty value in that column are dropped.
//! - **Line-delimited text**: one message per line, trimmed, blank lines
//!   dropped.
//!
//! Bytes that are not valid UTF-8 are replaced with `U+FFFD` in every format.
//! An empty table yields no messages. Anything else is rejected with
//! [`WellnessError::UnsupportedFormat`].

use calamine::{open_workbook_auto, Data, Reader};
use csv::ReaderBuilder;
use log::{debug, info, warn};
use serde::Serialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{Result, WellnessError};

/// Column-name fragments that mark a free-text column.
pub const TEXT_COLUMN_HINTS: &[&str] = &["text", "message", "content"];

/// One input message with whatever metadata the source provided.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message {
    pub text: String,
    /// Row identifier: a user/id column value, or the 1-based row number.
    pub source: Option<String>,
    pub timestamp: Option<String>,
}

impl Message {
    pub fn new(text: impl Into<String>) -> Self {
        Message {
            text: text.into(),
            source: None,
            timestamp: None,
        }
    }
}

impl AsRef<str> for Message {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

/// Column-oriented table with named columns.
///
/// Cells are `None` when the row was too short or the value was blank.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<Option<String>>>,
}

impl Table {
    /// Build a table, padding short rows with `None` and cutting long ones.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<Option<String>>>) -> Self {
        let width = headers.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, None);
                row
            })
            .collect();
        Table { headers, rows }
    }

    /// Parse CSV with a header row. Ragged rows are tolerated.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let headers: Vec<String> = reader
            .byte_headers()?
            .iter()
            .map(|h| String::from_utf8_lossy(h).trim().to_string())
            .collect();

        let mut rows = Vec::new();
        for record in reader.byte_records() {
            let record = record?;
            let row = record
                .iter()
                .map(|cell| cell_value(String::from_utf8_lossy(cell).into_owned()))
                .collect();
            rows.push(row);
        }

        Ok(Table::new(headers, rows))
    }

    /// Read the first sheet of a workbook; its first row holds the headers.
    pub fn from_workbook<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut workbook = open_workbook_auto(path)?;
        let range = match workbook.worksheet_range_at(0) {
            Some(range) => range?,
            None => {
                warn!("workbook has no sheets");
                return Ok(Table::default());
            }
        };

        let mut rows = range.rows();
        let headers = match rows.next() {
            Some(header_row) => header_row
                .iter()
                .map(|cell| cell.to_string().trim().to_string())
                .collect(),
            None => return Ok(Table::default()),
        };
        let rows = rows
            .map(|row| {
                row.iter()
                    .map(|cell| match cell {
                        Data::Empty => None,
                        other => cell_value(other.to_string()),
                    })
                    .collect()
            })
            .collect();

        Ok(Table::new(headers, rows))
    }

    pub fn from_csv_str(content: &str) -> Result<Self> {
        Self::from_csv_reader(content.as_bytes())
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<Option<String>>] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Index of the free-text column, or `None` for a table with no columns.
    pub fn text_column(&self) -> Option<usize> {
        if self.headers.is_empty() {
            return None;
        }
        let hinted = self.headers.iter().position(|name| {
            let name = name.to_lowercase();
            TEXT_COLUMN_HINTS.iter().any(|hint| name.contains(hint))
        });
        Some(hinted.unwrap_or(0))
    }

    fn column_matching(&self, predicate: impl Fn(&str) -> bool, skip: usize) -> Option<usize> {
        self.headers
            .iter()
            .enumerate()
            .find(|(idx, name)| *idx != skip && predicate(&name.to_lowercase()))
            .map(|(idx, _)| idx)
    }

    fn cell(&self, row: usize, column: Option<usize>) -> Option<String> {
        column.and_then(|c| self.rows[row][c].clone())
    }

    /// Messages from the text column, with source and timestamp columns
    /// attached when present.
    pub fn messages(&self) -> Result<Vec<Message>> {
        let Some(text_col) = self.text_column() else {
            debug!("table has no columns");
            return Ok(Vec::new());
        };
        let source_col = self.column_matching(|n| n.contains("user") || n == "id", text_col);
        let time_col = self.column_matching(|n| n.contains("time") || n.contains("date"), text_col);

        debug!(
            "using column {:?} as text (source: {:?}, timestamp: {:?})",
            self.headers[text_col],
            source_col.map(|c| &self.headers[c]),
            time_col.map(|c| &self.headers[c])
        );

        let messages = (0..self.rows.len())
            .filter_map(|row| {
                let text = self.rows[row][text_col].clone()?;
                Some(Message {
                    text,
                    source: self.cell(row, source_col).or_else(|| Some((row + 1).to_string())),
                    timestamp: self.cell(row, time_col),
                })
            })
            .collect();

        Ok(messages)
    }
}

/// Input handed to the extractor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextSource {
    Table(Table),
    Lines(String),
}

impl TextSource {
    /// Load a file, picking the shape from its extension:
    /// `.csv`, `.xlsx` and `.xls` are tables, `.txt` is line-delimited text.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase());

        let source = match extension.as_deref() {
            Some("csv") => TextSource::Table(Table::from_csv_reader(File::open(path)?)?),
            Some("xlsx") | Some("xls") => TextSource::Table(Table::from_workbook(path)?),
            Some("txt") => {
                let bytes = std::fs::read(path)?;
                TextSource::Lines(String::from_utf8_lossy(&bytes).into_owned())
            }
            _ => return Err(WellnessError::unsupported(path.display().to_string())),
        };

        info!("loaded {} as {}", path.display(), source.kind());
        Ok(source)
    }

    pub fn kind(&self) -> &'static str {
        match self {
            TextSource::Table(_) => "table",
            TextSource::Lines(_) => "text lines",
        }
    }

    /// Messages in source order, with metadata where the source has any.
    pub fn messages(&self) -> Result<Vec<Message>> {
        match self {
            TextSource::Table(table) => table.messages(),
            TextSource::Lines(content) => Ok(split_lines(content)
                .into_iter()
                .enumerate()
                .map(|(idx, text)| Message {
                    text,
                    source: Some((idx + 1).to_string()),
                    timestamp: None,
                })
                .collect()),
        }
    }

    /// Message texts in source order.
    pub fn extract(&self) -> Result<Vec<String>> {
        match self {
            TextSource::Lines(content) => Ok(split_lines(content)),
            TextSource::Table(_) => Ok(self.messages()?.into_iter().map(|m| m.text).collect()),
        }
    }
}

/// Free-function form of [`TextSource::extract`].
pub fn extract(source: &TextSource) -> Result<Vec<String>> {
    source.extract()
}

fn cell_value(raw: String) -> Option<String> {
    if raw.trim().is_empty() {
        None
    } else {
        Some(raw)
    }
}

fn split_lines(content: &str) -> Vec<String> {
    content
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_prefers_text_like_column_regardless_of_position() {
        let table = Table::from_csv_str(
            "id,message,date\n1,hello there,2025-10-27\n2,second one,2025-10-28\n",
        )
        .unwrap();
        assert_eq!(table.text_column(), Some(1));

        let texts = TextSource::Table(table).extract().unwrap();
        assert_eq!(texts, vec!["hello there", "second one"]);
    }

    #[test]
    fn test_falls_back_to_first_column() {
        let table = Table::from_csv_str("id,date\nfirst,2025-10-27\nsecond,2025-10-28\n").unwrap();
        assert_eq!(table.text_column(), Some(0));
        assert_eq!(
            TextSource::Table(table).extract().unwrap(),
            vec!["first", "second"]
        );
    }

    #[test]
    fn test_column_match_is_case_insensitive() {
        let table = Table::from_csv_str("user_id,Post_Content,ts\nu1,abc,1\n").unwrap();
        assert_eq!(table.text_column(), Some(1));
    }

    #[test]
    fn test_first_hinted_column_wins() {
        let table = Table::from_csv_str("subject,message,text\na,b,c\n").unwrap();
        assert_eq!(table.text_column(), Some(1));
    }

    #[test]
    fn test_drops_missing_values_and_keeps_order() {
        let csv = "text,user_id\nfirst,u1\n,u2\n   ,u3\nfourth,u4\n\"with, comma\",u5\nshort-row\n";
        let texts = TextSource::Table(Table::from_csv_str(csv).unwrap())
            .extract()
            .unwrap();
        assert_eq!(texts, vec!["first", "fourth", "with, comma", "short-row"]);
    }

    #[test]
    fn test_messages_carry_metadata() {
        let csv = "text,timestamp,user_id\nhello,2025-10-27 09:00,user001\nbye,,\n";
        let messages = Table::from_csv_str(csv).unwrap().messages().unwrap();

        assert_eq!(messages[0].source.as_deref(), Some("user001"));
        assert_eq!(messages[0].timestamp.as_deref(), Some("2025-10-27 09:00"));
        // Missing user id falls back to the row number
        assert_eq!(messages[1].source.as_deref(), Some("2"));
        assert_eq!(messages[1].timestamp, None);
    }

    #[test]
    fn test_table_without_columns_yields_nothing() {
        let source = TextSource::Table(Table::default());
        assert!(source.extract().unwrap().is_empty());
        assert!(source.messages().unwrap().is_empty());
    }

    #[test]
    fn test_empty_csv_file_yields_nothing() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("empty.csv");
        std::fs::write(&path, b"").unwrap();

        let source = TextSource::from_path(&path).unwrap();
        assert!(source.extract().unwrap().is_empty());

        let header_only = dir.path().join("header.csv");
        std::fs::write(&header_only, "text,user_id\n").unwrap();
        assert!(TextSource::from_path(&header_only)
            .unwrap()
            .extract()
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_invalid_utf8_cell_is_decoded_lossily() {
        let dir = TempDir::new().unwrap();
        let bytes: &[u8] = b"text,user_id\nI feel so stressed about work,u1\ncaf\xe9 was lovely today,u2\n";

        let csv_path = dir.path().join("latin1.csv");
        std::fs::write(&csv_path, bytes).unwrap();
        let texts = TextSource::from_path(&csv_path).unwrap().extract().unwrap();
        assert_eq!(
            texts,
            vec!["I feel so stressed about work", "caf\u{FFFD} was lovely today"]
        );

        let header_path = dir.path().join("bad_header.csv");
        std::fs::write(&header_path, b"t\xe9xt\nhello\n").unwrap();
        let table = match TextSource::from_path(&header_path).unwrap() {
            TextSource::Table(table) => table,
            other => panic!("expected a table, got {}", other.kind()),
        };
        assert_eq!(table.headers(), ["t\u{FFFD}xt".to_string()]);
        assert_eq!(table.messages().unwrap()[0].text, "hello");
    }

    #[test]
    fn test_lines_are_trimmed_and_blank_lines_dropped() {
        let source = TextSource::Lines("  first line \r\n\n\t\nsecond line\n".to_string());
        assert_eq!(source.extract().unwrap(), vec!["first line", "second line"]);
        assert!(TextSource::Lines(String::new()).extract().unwrap().is_empty());
    }

    #[test]
    fn test_from_path_by_extension() {
        let dir = TempDir::new().unwrap();

        let csv_path = dir.path().join("data.CSV");
        std::fs::write(&csv_path, "content\nfrom csv\n").unwrap();
        assert_eq!(
            TextSource::from_path(&csv_path).unwrap().extract().unwrap(),
            vec!["from csv"]
        );

        let txt_path = dir.path().join("data.txt");
        std::fs::write(&txt_path, "one\ntwo\n").unwrap();
        assert_eq!(
            TextSource::from_path(&txt_path).unwrap().extract().unwrap(),
            vec!["one", "two"]
        );
    }

    #[test]
    fn test_unknown_extension_is_unsupported() {
        let mut file = tempfile::Builder::new().suffix(".docx").tempfile().unwrap();
        writeln!(file, "binary-ish").unwrap();

        let err = TextSource::from_path(file.path()).unwrap_err();
        assert!(matches!(err, WellnessError::UnsupportedFormat { .. }));
    }

    #[test]
    fn test_reads_first_sheet_of_workbook() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("messages.xlsx");

        let mut workbook = rust_xlsxwriter::Workbook::new();
        let sheet = workbook.add_worksheet();
        sheet.write_string(0, 0, "user_id").unwrap();
        sheet.write_string(0, 1, "Message").unwrap();
        sheet.write_string(1, 0, "u1").unwrap();
        sheet.write_string(1, 1, "Feeling lonely tonight").unwrap();
        sheet.write_string(2, 0, "u2").unwrap();
        sheet.write_string(3, 0, "u3").unwrap();
        sheet.write_string(3, 1, "Pretty good day overall").unwrap();
        workbook.save(&path).unwrap();

        let source = TextSource::from_path(&path).unwrap();
        assert_eq!(source.kind(), "table");

        let messages = source.messages().unwrap();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].text, "Feeling lonely tonight");
        assert_eq!(messages[1].source.as_deref(), Some("u3"));
    }

    #[test]
    fn test_corrupt_workbook_is_an_error() {
        let mut file = tempfile::Builder::new().suffix(".xlsx").tempfile().unwrap();
        writeln!(file, "not a zip archive").unwrap();

        let err = TextSource::from_path(file.path()).unwrap_err();
        assert!(matches!(err, WellnessError::Workbook(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = TextSource::from_path("does/not/exist.csv").unwrap_err();
        assert!(matches!(err, WellnessError::Io(_)));
    }
}
