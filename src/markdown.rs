//! Markdown summary rendering

use crate::columns;
use crate::document::Document;
use crate::error::Result;

/// Summary columns in print order, with their display titles
const SUMMARY_COLUMNS: &[(&str, &str)] = &[
    (columns::REPOSITORY, "Repository"),
    (columns::STARS, "Stars"),
    (columns::FORKS, "Forks"),
    (columns::WATCHERS, "Watchers"),
    (columns::OPEN_ISSUES, "Issues"),
    (columns::OPEN_PRS, "PRs Open"),
    (columns::CONTRIBUTORS_TOTAL, "Contributors"),
    (columns::LAST_COMMIT, "Last Commit"),
];

/// Render a fixed-column Markdown summary table of a document
///
/// Columns are resolved by header name; cells for columns the document
/// lacks render empty.
pub fn render_summary(doc: &Document) -> Result<String> {
    let map = doc.column_map();
    map.require(columns::REPOSITORY)?;

    let mut out = String::from("# GitHub Metrics\n\n");

    let titles: Vec<&str> = SUMMARY_COLUMNS.iter().map(|(_, title)| *title).collect();
    out.push_str(&format!("| {} |\n", titles.join(" | ")));
    out.push_str(&format!("|{}\n", "---|".repeat(SUMMARY_COLUMNS.len())));

    for row in doc.rows() {
        let cells: Vec<&str> = SUMMARY_COLUMNS
            .iter()
            .map(|(name, _)| map.value(row, name).unwrap_or("").trim())
            .collect();
        out.push_str(&format!("| {} |\n", cells.join(" | ")));
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_shape() {
        let doc = Document::parse(
            "repository,stars,forks,watchers,open_issues,open_prs,contributors_total,last_commit\n\
             foo/bar,42,7,3,1,2,5,2024-05-01T12:00:00Z\n",
        );
        let summary = render_summary(&doc).unwrap();

        assert!(summary.starts_with("# GitHub Metrics\n\n"));
        assert!(summary.contains("| Repository | Stars | Forks |"));
        assert!(summary.contains("|---|---|---|---|---|---|---|---|"));
        assert!(summary.contains("| foo/bar | 42 | 7 | 3 | 1 | 2 | 5 | 2024-05-01T12:00:00Z |"));
    }

    #[test]
    fn test_missing_columns_render_empty() {
        let doc = Document::parse("repository,stars\nfoo/bar,42\n");
        let summary = render_summary(&doc).unwrap();
        assert!(summary.contains("| foo/bar | 42 |  |"));
    }

    #[test]
    fn test_repository_column_required() {
        let doc = Document::parse("stars\n42\n");
        assert!(render_summary(&doc).is_err());
    }
}
