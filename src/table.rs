//! Table model for the grid collaborator

use crate::columns;
use crate::config::ViewConfig;
use crate::document::Document;
use crate::error::Result;
use crate::repo_ref::RepoRef;
use crate::types::{self, Align, ColumnKind, DisplayValue, SortKey};
use serde::Serialize;

/// Fixed width for the repository column
const REPOSITORY_WIDTH: u32 = 560;
/// Fixed width for the description column
const DESCRIPTION_WIDTH: u32 = 320;

/// Column definition consumed by the grid collaborator
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnDef {
    /// Column title, the header name verbatim
    pub title: String,
    /// Alignment hint
    pub align: Align,
    /// Initial visibility under the active preset or override
    pub visible: bool,
    /// Optional fixed width in pixels
    pub width: Option<u32>,
}

/// Prepared table data: column definitions plus display rows
///
/// Display rows hold rendered cell values; ordering always goes through
/// [`TableModel::sort_key`], which works on raw values so links never
/// leak into sorting or filtering.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableModel {
    /// One definition per header column
    pub columns: Vec<ColumnDef>,
    /// One display row per data row
    pub rows: Vec<Vec<DisplayValue>>,
    #[serde(skip)]
    kinds: Vec<ColumnKind>,
}

impl TableModel {
    /// Build the table model for a document under a view configuration
    ///
    /// Every header becomes a column. Repository cells become links when
    /// the reference normalizes, otherwise the raw trimmed text; topics
    /// cells are re-joined with a uniform separator; everything else is
    /// passed through.
    pub fn build(doc: &Document, config: &ViewConfig) -> Result<TableModel> {
        doc.column_map().require(columns::REPOSITORY)?;

        let kinds: Vec<ColumnKind> = doc
            .headers()
            .iter()
            .map(|h| ColumnKind::of(h.trim()))
            .collect();

        let column_defs = doc
            .headers()
            .iter()
            .zip(&kinds)
            .map(|(header, kind)| {
                let name = header.trim();
                ColumnDef {
                    title: name.to_string(),
                    align: kind.align(),
                    visible: config.is_visible(name),
                    width: match kind {
                        ColumnKind::Repository => Some(REPOSITORY_WIDTH),
                        _ if name == columns::DESCRIPTION => Some(DESCRIPTION_WIDTH),
                        _ => None,
                    },
                }
            })
            .collect();

        let rows = doc
            .rows()
            .iter()
            .map(|row| {
                kinds
                    .iter()
                    .enumerate()
                    .map(|(i, kind)| {
                        let raw = row.get(i).map(String::as_str).unwrap_or("");
                        render_cell(*kind, raw)
                    })
                    .collect()
            })
            .collect();

        Ok(TableModel {
            columns: column_defs,
            rows,
            kinds,
        })
    }

    /// Ordering key for a cell
    ///
    /// Numeric columns order by value, timestamp columns by epoch
    /// seconds, everything else by text. Out-of-range indices yield
    /// `None`.
    pub fn sort_key(&self, row: usize, col: usize) -> Option<SortKey> {
        let kind = *self.kinds.get(col)?;
        let cell = self.rows.get(row)?.get(col)?;
        Some(types::sort_key(kind, cell.text()))
    }
}

/// Compute the display value for one cell
fn render_cell(kind: ColumnKind, raw: &str) -> DisplayValue {
    match kind {
        ColumnKind::Repository => match RepoRef::normalize(raw) {
            Some(repo) => DisplayValue::Link {
                text: repo.owner_repo,
                url: repo.url,
            },
            None => DisplayValue::Text {
                text: raw.trim().to_string(),
            },
        },
        ColumnKind::Topics => DisplayValue::Text {
            text: types::split_topics(raw).join(", "),
        },
        _ => DisplayValue::Text {
            text: raw.to_string(),
        },
    }
}
