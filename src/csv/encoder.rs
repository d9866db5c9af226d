//! CSV serialization

/// CSV encoder producing text the tokenizer parses back unchanged
///
/// Fields containing the delimiter, the quote character or a line break
/// are quoted, with embedded quotes doubled. Everything else is written
/// verbatim.
pub struct CsvEncoder {
    delimiter: u8,
    quote_char: u8,
}

impl CsvEncoder {
    /// Create a new CSV encoder with custom delimiter and quote character
    pub fn new(delimiter: u8, quote_char: u8) -> Self {
        Self {
            delimiter,
            quote_char,
        }
    }

    /// Encode one row, without a line terminator
    pub fn encode_row<S: AsRef<str>>(&self, fields: &[S]) -> String {
        let mut out = String::new();
        for (i, field) in fields.iter().enumerate() {
            if i > 0 {
                out.push(self.delimiter as char);
            }
            self.encode_field(field.as_ref(), &mut out);
        }
        out
    }

    fn encode_field(&self, field: &str, out: &mut String) {
        let quote = self.quote_char as char;
        if self.needs_quoting(field) {
            out.push(quote);
            for ch in field.chars() {
                if ch == quote {
                    out.push(quote);
                }
                out.push(ch);
            }
            out.push(quote);
        } else {
            out.push_str(field);
        }
    }

    fn needs_quoting(&self, field: &str) -> bool {
        field
            .bytes()
            .any(|b| b == self.delimiter || b == self.quote_char || b == b'\n' || b == b'\r')
    }
}
