//! CSV tokenization with permissive, total parsing

/// CSV tokenizer producing rows of string fields
///
/// Processes a whole document character by character, so quoted fields may
/// contain delimiters, escaped quotes and line breaks. Parsing is total:
/// any input, including malformed quoting, yields some set of rows without
/// failing. Input is expected to be pre-trimmed by the caller.
pub struct CsvParser {
    delimiter: u8,
    quote_char: u8,
}

impl CsvParser {
    /// Create a new CSV parser with custom delimiter and quote character
    pub fn new(delimiter: u8, quote_char: u8) -> Self {
        Self {
            delimiter,
            quote_char,
        }
    }

    /// Parse CSV text into rows of fields
    ///
    /// A quote outside a quoted region opens one wherever it appears, not
    /// only at the start of a field; an unescaped quote inside a region
    /// closes it. This is looser than RFC 4180 on purpose. A doubled quote
    /// inside a region becomes one literal quote. CRLF counts as a single
    /// line terminator, blank lines produce no row, and a final row is
    /// emitted even without a trailing newline.
    pub fn parse(&self, text: &str) -> Vec<Vec<String>> {
        let delimiter = self.delimiter as char;
        let quote = self.quote_char as char;

        let mut rows: Vec<Vec<String>> = Vec::new();
        let mut row: Vec<String> = Vec::new();
        let mut field = String::new();
        let mut in_quotes = false;
        let mut chars = text.chars().peekable();

        while let Some(ch) = chars.next() {
            if ch == quote {
                if in_quotes {
                    // Doubled quote -> one literal quote
                    if chars.peek() == Some(&quote) {
                        field.push(quote);
                        chars.next();
                    } else {
                        in_quotes = false;
                    }
                } else {
                    in_quotes = true;
                }
            } else if ch == delimiter && !in_quotes {
                row.push(std::mem::take(&mut field));
            } else if (ch == '\n' || ch == '\r') && !in_quotes {
                // Only emit a row when something is pending; bare blank
                // lines are swallowed
                if !field.is_empty() || !row.is_empty() {
                    row.push(std::mem::take(&mut field));
                    rows.push(std::mem::take(&mut row));
                }
                if ch == '\r' && chars.peek() == Some(&'\n') {
                    chars.next();
                }
            } else {
                field.push(ch);
            }
        }

        // Flush the last row when the input has no trailing newline
        if !field.is_empty() || !row.is_empty() {
            row.push(field);
            rows.push(row);
        }

        rows
    }
}
