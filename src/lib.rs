//! # repometrics
//!
//! GitHub repository metrics dashboard core. Parses the metrics
//! exporter's CSV into a [`Document`], normalizes repository references,
//! and prepares the table and chart models the rendering collaborators
//! consume.
//!
//! The two pieces with real logic are the CSV tokenizer
//! ([`csv::CsvParser`], handling quoted fields, embedded commas, escaped
//! quotes and mixed line endings) and the repository reference normalizer
//! ([`RepoRef`]). Everything else is declarative data preparation: column
//! resolution by header name, visibility presets, numeric coercion with
//! zero fallback, and explicit persisted view state.
//!
//! ## Quick Start
//!
//! ```
//! use repometrics::{Dashboard, ViewConfig};
//!
//! let csv = "repository,stars,forks\nOSeMOSYS/MUIO,12,3\n";
//! let dashboard = Dashboard::from_csv(csv, &ViewConfig::default()).unwrap();
//!
//! assert_eq!(dashboard.chart.labels, vec!["OSeMOSYS/MUIO"]);
//! assert_eq!(dashboard.table.rows.len(), 1);
//! ```
//!
//! ## Normalizing references
//!
//! ```
//! use repometrics::RepoRef;
//!
//! let repo = RepoRef::normalize("https://github.com/foo/bar.git/").unwrap();
//! assert_eq!(repo.owner_repo, "foo/bar");
//! assert_eq!(repo.url, "https://github.com/foo/bar");
//!
//! assert!(RepoRef::normalize("not-a-repo-ref-with/too/many/slashes").is_none());
//! ```

pub mod chart;
pub mod columns;
pub mod config;
pub mod csv;
pub mod dashboard;
pub mod document;
pub mod error;
pub mod markdown;
pub mod repo_ref;
pub mod table;
pub mod types;

pub use chart::{BarChart, Dataset};
pub use columns::{ColumnMap, ColumnPreset};
pub use config::{Theme, ViewConfig};
pub use dashboard::Dashboard;
pub use document::Document;
pub use error::{MetricsError, Result};
pub use repo_ref::RepoRef;
pub use table::{ColumnDef, TableModel};
pub use types::{Align, ColumnKind, DisplayValue, SortKey};
