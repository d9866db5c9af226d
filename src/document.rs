//! Parsed CSV documents

use crate::columns::ColumnMap;
use crate::csv::{CsvEncoder, CsvParser};
use crate::error::{MetricsError, Result};
use std::fs;
use std::path::Path;

/// A parsed CSV document: one header row plus zero or more data rows
///
/// Built once per fetch and never mutated; re-fetching builds a
/// replacement. Data rows shorter or longer than the header are kept
/// as-is and tolerated positionally by consumers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Document {
    /// Parse CSV text into a document
    ///
    /// Leading and trailing whitespace is trimmed before tokenization.
    /// Parsing is total: malformed quoting degrades to best-effort field
    /// boundaries instead of failing. Empty input yields a document with
    /// no header and no rows; a single row becomes a header-only document.
    pub fn parse(text: &str) -> Document {
        let parser = CsvParser::new(b',', b'"');
        let mut rows = parser.parse(text.trim());
        if rows.is_empty() {
            return Document::default();
        }
        let headers = rows.remove(0);
        Document { headers, rows }
    }

    /// Column names from the header row, in source order
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Data rows in source order
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Number of data rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True when the document holds no data rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Build a name-to-index map for this document's header row
    pub fn column_map(&self) -> ColumnMap {
        ColumnMap::from_headers(&self.headers)
    }

    /// Serialize back to CSV text
    ///
    /// Fields containing a comma, quote or line break are quoted with
    /// embedded quotes doubled, so parsing the output reproduces this
    /// document.
    pub fn to_csv(&self) -> String {
        let encoder = CsvEncoder::new(b',', b'"');
        let mut out = String::new();
        if !self.headers.is_empty() {
            out.push_str(&encoder.encode_row(&self.headers));
            out.push('\n');
        }
        for row in &self.rows {
            out.push_str(&encoder.encode_row(row));
            out.push('\n');
        }
        out
    }

    /// Write the document to a CSV file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        fs::write(path.as_ref(), self.to_csv())
            .map_err(|e| MetricsError::WriteError(format!("Failed to write CSV file: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_and_data_split() {
        let doc = Document::parse("repository,stars\nfoo/bar,12\nbaz/qux,3\n");
        assert_eq!(doc.headers(), &["repository", "stars"]);
        assert_eq!(doc.len(), 2);
        assert_eq!(doc.rows()[0], vec!["foo/bar", "12"]);
    }

    #[test]
    fn test_input_is_trimmed() {
        let doc = Document::parse("\n\n  repository,stars\nfoo/bar,12\n\n  ");
        assert_eq!(doc.headers(), &["repository", "stars"]);
        assert_eq!(doc.len(), 1);
    }

    #[test]
    fn test_empty_input_is_degenerate_but_valid() {
        let doc = Document::parse("");
        assert!(doc.headers().is_empty());
        assert!(doc.is_empty());
    }

    #[test]
    fn test_header_only_document() {
        let doc = Document::parse("repository,stars");
        assert_eq!(doc.headers(), &["repository", "stars"]);
        assert!(doc.is_empty());
    }

    #[test]
    fn test_short_and_long_rows_kept() {
        let doc = Document::parse("a,b,c\n1\n1,2,3,4\n");
        assert_eq!(doc.rows()[0], vec!["1"]);
        assert_eq!(doc.rows()[1], vec!["1", "2", "3", "4"]);
    }

    #[test]
    fn test_round_trip_through_to_csv() {
        let doc = Document::parse("repository,description\nfoo/bar,\"has, comma\"\nbaz/qux,\"say \"\"hi\"\"\"\n");
        let again = Document::parse(&doc.to_csv());
        assert_eq!(doc, again);
    }

    #[test]
    fn test_save_and_reload() -> Result<()> {
        let path = "test_document_save.csv";
        let doc = Document::parse("repository,stars\nfoo/bar,12\n");
        doc.save(path)?;

        let text = fs::read_to_string(path)
            .map_err(|e| MetricsError::ReadError(e.to_string()))?;
        assert_eq!(Document::parse(&text), doc);

        fs::remove_file(path).ok();
        Ok(())
    }
}
