//! Column names, header resolution and visibility presets

use crate::error::{MetricsError, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Repository identifier column
pub const REPOSITORY: &str = "repository";
/// Free-text description column
pub const DESCRIPTION: &str = "description";
/// Delimited topic list column
pub const TOPICS: &str = "topics";
/// Default branch name column
pub const DEFAULT_BRANCH: &str = "default_branch";
/// License SPDX identifier column
pub const LICENSE: &str = "license";
/// Star count column
pub const STARS: &str = "stars";
/// Fork count column
pub const FORKS: &str = "forks";
/// Watcher count column
pub const WATCHERS: &str = "watchers";
/// Open issue count column
pub const OPEN_ISSUES: &str = "open_issues";
/// Open pull request count column
pub const OPEN_PRS: &str = "open_prs";
/// Pull requests closed in the last 30 days
pub const CLOSED_PRS_30: &str = "closed_prs_last_30";
/// Pull requests merged in the last 30 days
pub const MERGED_PRS_30: &str = "merged_prs_last_30";
/// Total contributor count column
pub const CONTRIBUTORS_TOTAL: &str = "contributors_total";
/// Contributors active in the last 30 days
pub const CONTRIBUTORS_ACTIVE_30: &str = "contributors_active_30_days";
/// Last commit timestamp column
pub const LAST_COMMIT: &str = "last_commit";
/// Repository metadata update timestamp column
pub const LAST_UPDATE: &str = "last_update";
/// Latest release tag column
pub const LATEST_RELEASE: &str = "latest_release";
/// Release asset download count column
pub const RELEASE_DOWNLOADS: &str = "release_downloads";
/// Repository size in kilobytes
pub const REPO_SIZE_KB: &str = "repo_size_kb";

/// Columns holding counts, right-aligned by the grid collaborator
pub const NUMERIC: &[&str] = &[
    STARS,
    FORKS,
    WATCHERS,
    OPEN_ISSUES,
    OPEN_PRS,
    CLOSED_PRS_30,
    MERGED_PRS_30,
    CONTRIBUTORS_TOTAL,
    CONTRIBUTORS_ACTIVE_30,
    RELEASE_DOWNLOADS,
    REPO_SIZE_KB,
];

/// Name-to-index resolution for one document's header row
///
/// Column order in the source file is not part of the contract, so
/// consumers resolve columns by header name, never by position.
#[derive(Debug, Clone, Default)]
pub struct ColumnMap {
    index: IndexMap<String, usize>,
}

impl ColumnMap {
    /// Build a map from a header row, keeping source order
    ///
    /// Duplicate names keep their first position.
    pub fn from_headers(headers: &[String]) -> Self {
        let mut index = IndexMap::with_capacity(headers.len());
        for (i, name) in headers.iter().enumerate() {
            index.entry(name.trim().to_string()).or_insert(i);
        }
        ColumnMap { index }
    }

    /// Look up a column index by name
    pub fn get(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    /// Look up a column the caller cannot proceed without
    pub fn require(&self, name: &str) -> Result<usize> {
        self.get(name)
            .ok_or_else(|| MetricsError::MissingColumn(name.to_string()))
    }

    /// Fetch a cell from a row by column name
    ///
    /// Short rows yield `None` for columns beyond their length.
    pub fn value<'a>(&self, row: &'a [String], name: &str) -> Option<&'a str> {
        self.get(name).and_then(|i| row.get(i)).map(String::as_str)
    }

    /// Column names in source order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.index.keys().map(String::as_str)
    }

    /// Number of known columns
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// True when no header row was present
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}

/// Toolbar visibility presets
///
/// Each preset shows the repository column plus a themed subset; `All`
/// shows everything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnPreset {
    /// Description, license, stars, forks and last update
    Core,
    /// Issue, PR and commit activity
    Activity,
    /// Contributor counts
    Contributors,
    /// Release tag and downloads
    Releases,
    /// Every column
    All,
}

impl ColumnPreset {
    /// Columns the preset shows in addition to `repository`
    ///
    /// `None` means no restriction.
    pub fn columns(&self) -> Option<&'static [&'static str]> {
        match self {
            ColumnPreset::Core => Some(&[DESCRIPTION, LICENSE, STARS, FORKS, LAST_UPDATE]),
            ColumnPreset::Activity => Some(&[
                WATCHERS,
                OPEN_ISSUES,
                OPEN_PRS,
                CLOSED_PRS_30,
                MERGED_PRS_30,
                LAST_COMMIT,
                LAST_UPDATE,
            ]),
            ColumnPreset::Contributors => Some(&[CONTRIBUTORS_TOTAL, CONTRIBUTORS_ACTIVE_30]),
            ColumnPreset::Releases => Some(&[LATEST_RELEASE, RELEASE_DOWNLOADS]),
            ColumnPreset::All => None,
        }
    }

    /// Whether the preset shows the named column
    ///
    /// The repository column is visible under every preset.
    pub fn shows(&self, column: &str) -> bool {
        if column == REPOSITORY {
            return true;
        }
        match self.columns() {
            None => true,
            Some(cols) => cols.contains(&column),
        }
    }
}
