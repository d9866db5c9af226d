//! Column kinds, display values and cell coercions

use crate::columns;
use chrono::DateTime;
use serde::{Deserialize, Serialize};

/// Horizontal alignment hint for the grid collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    /// Default alignment for text
    Left,
    /// Alignment for counts
    Right,
}

/// Content category of a metrics column, keyed by header name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    /// Repository reference, rendered as a link when it normalizes
    Repository,
    /// Free text
    Text,
    /// Delimited topic list
    Topics,
    /// Integer count
    Number,
    /// RFC 3339 timestamp
    Timestamp,
}

impl ColumnKind {
    /// Classify a column by its header name
    pub fn of(column: &str) -> ColumnKind {
        match column {
            columns::REPOSITORY => ColumnKind::Repository,
            columns::TOPICS => ColumnKind::Topics,
            columns::LAST_COMMIT | columns::LAST_UPDATE => ColumnKind::Timestamp,
            name if columns::NUMERIC.contains(&name) => ColumnKind::Number,
            _ => ColumnKind::Text,
        }
    }

    /// Alignment used by the grid collaborator
    pub fn align(&self) -> Align {
        match self {
            ColumnKind::Number => Align::Right,
            _ => Align::Left,
        }
    }
}

/// Rendered cell content for the grid collaborator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum DisplayValue {
    /// Plain text
    Text {
        /// Displayed text
        text: String,
    },
    /// Anchor-equivalent value
    Link {
        /// Displayed text
        text: String,
        /// Link target
        url: String,
    },
}

impl DisplayValue {
    /// Displayed text, regardless of linking
    pub fn text(&self) -> &str {
        match self {
            DisplayValue::Text { text } => text,
            DisplayValue::Link { text, .. } => text,
        }
    }

    /// Link target, when the cell is rendered as a link
    pub fn url(&self) -> Option<&str> {
        match self {
            DisplayValue::Text { .. } => None,
            DisplayValue::Link { url, .. } => Some(url),
        }
    }
}

/// Ordering key for a cell: raw-value semantics, never link markup
#[derive(Debug, Clone, PartialEq)]
pub enum SortKey {
    /// Numeric ordering (counts and timestamps)
    Number(f64),
    /// Lexicographic ordering
    Text(String),
}

/// Compute the ordering key for a cell of the given column kind
///
/// Numeric columns order by value with zero substituted for non-numeric
/// cells; timestamp columns order by epoch seconds, unparseable values
/// sorting first.
pub fn sort_key(kind: ColumnKind, raw: &str) -> SortKey {
    match kind {
        ColumnKind::Number => SortKey::Number(number_or_zero(raw)),
        ColumnKind::Timestamp => SortKey::Number(
            parse_timestamp(raw)
                .map(|t| t.timestamp() as f64)
                .unwrap_or(0.0),
        ),
        _ => SortKey::Text(raw.trim().to_string()),
    }
}

/// Coerce a cell to a number, substituting zero for non-numeric values
///
/// Infinite and NaN parses also coerce to zero.
pub fn number_or_zero(raw: &str) -> f64 {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .unwrap_or(0.0)
}

/// Parse an exporter timestamp (RFC 3339, as the GitHub API emits)
pub fn parse_timestamp(raw: &str) -> Option<DateTime<chrono::FixedOffset>> {
    DateTime::parse_from_rfc3339(raw.trim()).ok()
}

/// Split a topics cell on comma, semicolon or pipe delimiters
///
/// The exporter joins topics with commas, but hand-edited files show up
/// with semicolons and pipes too. Empty entries are dropped.
pub fn split_topics(raw: &str) -> Vec<String> {
    raw.split(|c| matches!(c, ',' | ';' | '|'))
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}
