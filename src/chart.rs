//! Bar chart model for the charting collaborator

use crate::columns;
use crate::document::Document;
use crate::error::Result;
use crate::repo_ref::RepoRef;
use crate::types::number_or_zero;
use serde::Serialize;

const STARS_COLOR: &str = "#3A3F51";
const FORKS_COLOR: &str = "#71A06A";

/// One named numeric series
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    /// Legend label
    pub label: String,
    /// Values parallel to the chart labels
    pub data: Vec<f64>,
    /// Bar fill color
    pub background_color: String,
}

/// Bar chart data: labels plus parallel numeric series
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarChart {
    /// One label per data row
    pub labels: Vec<String>,
    /// Stars and forks series
    pub datasets: Vec<Dataset>,
}

impl BarChart {
    /// Build the stars/forks chart for a document
    ///
    /// Labels are repository identifiers, canonical `owner/repo` when the
    /// reference normalizes and the raw trimmed text otherwise.
    /// Non-numeric or missing counts chart as zero.
    pub fn build(doc: &Document) -> Result<BarChart> {
        let map = doc.column_map();
        let repo_col = map.require(columns::REPOSITORY)?;
        map.require(columns::STARS)?;
        map.require(columns::FORKS)?;

        let labels = doc
            .rows()
            .iter()
            .map(|row| {
                let raw = row.get(repo_col).map(String::as_str).unwrap_or("");
                RepoRef::normalize(raw)
                    .map(|r| r.owner_repo)
                    .unwrap_or_else(|| raw.trim().to_string())
            })
            .collect();

        let series = |name: &str| -> Vec<f64> {
            doc.rows()
                .iter()
                .map(|row| number_or_zero(map.value(row, name).unwrap_or("")))
                .collect()
        };

        Ok(BarChart {
            labels,
            datasets: vec![
                Dataset {
                    label: "Stars".to_string(),
                    data: series(columns::STARS),
                    background_color: STARS_COLOR.to_string(),
                },
                Dataset {
                    label: "Forks".to_string(),
                    data: series(columns::FORKS),
                    background_color: FORKS_COLOR.to_string(),
                },
            ],
        })
    }
}
