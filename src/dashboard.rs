//! Dashboard assembly

use crate::chart::BarChart;
use crate::config::ViewConfig;
use crate::document::Document;
use crate::error::{MetricsError, Result};
use crate::table::TableModel;
use serde::Serialize;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Prepared dashboard data: the table model plus the bar chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    /// Table model for the grid collaborator
    pub table: TableModel,
    /// Bar chart for the charting collaborator
    pub chart: BarChart,
}

impl Dashboard {
    /// Assemble dashboard data from CSV text
    ///
    /// The tokenizer itself never fails; the only document-level check is
    /// here: anything shorter than a header row plus one data row is
    /// rejected before rendering.
    pub fn from_csv(text: &str, config: &ViewConfig) -> Result<Dashboard> {
        let doc = Document::parse(text);
        Self::from_document(&doc, config)
    }

    /// Assemble dashboard data from an already-parsed document
    pub fn from_document(doc: &Document, config: &ViewConfig) -> Result<Dashboard> {
        if doc.is_empty() {
            warn!(
                headers = doc.headers().len(),
                "CSV document has no data rows"
            );
            return Err(MetricsError::EmptyDocument(
                "expected a header row plus at least one data row".to_string(),
            ));
        }

        let table = TableModel::build(doc, config)?;
        let chart = BarChart::build(doc)?;
        debug!(
            rows = doc.len(),
            columns = doc.headers().len(),
            "assembled dashboard data"
        );
        Ok(Dashboard { table, chart })
    }

    /// Read a CSV file and assemble dashboard data
    pub fn from_path<P: AsRef<Path>>(path: P, config: &ViewConfig) -> Result<Dashboard> {
        let text = fs::read_to_string(path.as_ref())
            .map_err(|e| MetricsError::ReadError(format!("Failed to read CSV file: {}", e)))?;
        Self::from_csv(&text, config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assembles_table_and_chart() {
        let csv = "repository,stars,forks\nfoo/bar,42,7\n";
        let dashboard = Dashboard::from_csv(csv, &ViewConfig::default()).unwrap();

        assert_eq!(dashboard.table.rows.len(), 1);
        assert_eq!(dashboard.chart.labels, vec!["foo/bar"]);
    }

    #[test]
    fn test_header_only_input_rejected() {
        let err = Dashboard::from_csv("repository,stars,forks\n", &ViewConfig::default())
            .unwrap_err();
        assert!(matches!(err, MetricsError::EmptyDocument(_)));
    }

    #[test]
    fn test_empty_input_rejected() {
        assert!(Dashboard::from_csv("", &ViewConfig::default()).is_err());
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let err = Dashboard::from_path("does_not_exist.csv", &ViewConfig::default()).unwrap_err();
        assert!(matches!(err, MetricsError::ReadError(_)));
    }
}
