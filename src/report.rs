//! Report bundling: metric records, stance comparison and a manifest.
//!
//! The bundler produces a hashable package that downstream reporting can
//! verify: re-running over the same corpus and labels yields the same
//! `report_id`.
//!
//! ```text
//! MetricRecords ─┐
//!                ├─→ AnalysisManifest ─→ structural_metrics.json
//! Comparison ────┘                       stance_comparison.json
//!                                        manifest.json
//! ```
//!
//! Key-point analyses are written separately by [`KeyPointReport`].

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::canonical::canonical_hash_hex;
use crate::keypoint::{BaselineReport, KeyPointSummary};
use crate::metrics::MetricsConfig;
use crate::types::{ComparisonSummary, MetricRecord};
use crate::REPORT_SCHEMA_VERSION;

/// Error type for writing reports.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// Filesystem error.
    #[error("I/O error at {path}: {source}")]
    Io {
        /// Path being written.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
    /// Serialization error.
    #[error("Serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// File names of report artifacts, relative to the output directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportArtifactPaths {
    /// Per-document metric records.
    pub metrics: String,
    /// Stance comparison summary.
    pub comparison: String,
    /// This manifest.
    pub manifest: String,
}

impl Default for ReportArtifactPaths {
    fn default() -> Self {
        Self {
            metrics: "structural_metrics.json".to_string(),
            comparison: "stance_comparison.json".to_string(),
            manifest: "manifest.json".to_string(),
        }
    }
}

/// Summary statistics for a report.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportStats {
    /// Number of documents analyzed.
    pub document_count: usize,
    /// Documents with no parsable component.
    pub empty_document_count: usize,
    /// Topics with both pro and con documents.
    pub contributing_topics: usize,
}

/// Manifest describing one analysis run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisManifest {
    /// Hash over all content hashes and the config.
    pub report_id: String,
    /// Schema version.
    pub version: String,
    /// Metric configuration used.
    pub config: MetricsConfig,
    /// Hash of the metric records.
    pub metrics_hash: String,
    /// Hash of the comparison summary, if one was computed.
    pub comparison_hash: Option<String>,
    /// Unix timestamp when computed.
    pub computed_at: i64,
    /// Artifact file names.
    pub artifact_paths: ReportArtifactPaths,
    /// Summary statistics.
    pub stats: ReportStats,
}

/// Complete report ready to be written.
#[derive(Debug, Clone)]
pub struct AnalysisReport {
    /// Run manifest.
    pub manifest: AnalysisManifest,
    /// Metric records, ordered by essay id.
    pub records: Vec<MetricRecord>,
    /// Stance comparison, when labels were supplied.
    pub comparison: Option<ComparisonSummary>,
}

impl AnalysisReport {
    /// Write all artifacts into `dir`, creating it if needed.
    pub fn write_to(&self, dir: impl AsRef<Path>) -> Result<(), ReportError> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir).map_err(|source| ReportError::Io { path: dir.to_path_buf(), source })?;

        let paths = &self.manifest.artifact_paths;
        write_json(&dir.join(&paths.metrics), &self.records)?;
        if let Some(comparison) = &self.comparison {
            write_json(&dir.join(&paths.comparison), comparison)?;
        }
        write_json(&dir.join(&paths.manifest), &self.manifest)?;

        tracing::info!(
            dir = %dir.display(),
            report_id = %self.manifest.report_id,
            documents = self.records.len(),
            "Wrote analysis report"
        );
        Ok(())
    }
}

/// File name of the key-point corpus summary.
pub const KEY_POINT_SUMMARY_FILE: &str = "argkp_summary.json";
/// File name of the key-point baseline result.
pub const KEY_POINT_BASELINE_FILE: &str = "argkp_baseline.json";

/// Key-point corpus summary and tuned baseline for one run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyPointReport {
    /// Pair and match counts.
    pub summary: KeyPointSummary,
    /// Lexical baseline result.
    pub baseline: BaselineReport,
}

impl KeyPointReport {
    /// Write both artifacts into `dir`, creating it if needed.
    pub fn write_to(&self, dir: impl AsRef<Path>) -> Result<(), ReportError> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir).map_err(|source| ReportError::Io { path: dir.to_path_buf(), source })?;

        write_json(&dir.join(KEY_POINT_SUMMARY_FILE), &self.summary)?;
        write_json(&dir.join(KEY_POINT_BASELINE_FILE), &self.baseline)?;

        tracing::info!(
            dir = %dir.display(),
            pairs = self.summary.total_pairs,
            threshold = self.baseline.threshold,
            "Wrote key-point report"
        );
        Ok(())
    }
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), ReportError> {
    let bytes = serde_json::to_vec_pretty(value)?;
    fs::write(path, bytes).map_err(|source| ReportError::Io { path: path.to_path_buf(), source })
}

/// Builder for analysis reports.
#[derive(Debug, Clone, Default)]
pub struct ReportBundler {
    records: Option<Vec<MetricRecord>>,
    comparison: Option<ComparisonSummary>,
    config: MetricsConfig,
    artifact_paths: ReportArtifactPaths,
    empty_document_count: usize,
}

impl ReportBundler {
    /// Create a new bundler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the metric records.
    pub fn records(mut self, records: Vec<MetricRecord>) -> Self {
        self.records = Some(records);
        self
    }

    /// Set the stance comparison.
    pub fn comparison(mut self, comparison: ComparisonSummary) -> Self {
        self.comparison = Some(comparison);
        self
    }

    /// Set the metric configuration used for the records.
    pub fn config(mut self, config: MetricsConfig) -> Self {
        self.config = config;
        self
    }

    /// Record how many documents parsed to nothing.
    pub fn empty_documents(mut self, count: usize) -> Self {
        self.empty_document_count = count;
        self
    }

    /// Set custom artifact paths.
    pub fn with_paths(mut self, paths: ReportArtifactPaths) -> Self {
        self.artifact_paths = paths;
        self
    }

    /// Build the report, or `None` if no records were set.
    pub fn try_build(self) -> Option<AnalysisReport> {
        let mut records = self.records?;
        records.sort_by(|a, b| a.essay_id.cmp(&b.essay_id));

        let metrics_hash = canonical_hash_hex(&records);
        let comparison_hash = self.comparison.as_ref().map(canonical_hash_hex);

        let report_id = canonical_hash_hex(&ReportIdInput {
            version: REPORT_SCHEMA_VERSION,
            config: &self.config,
            metrics_hash: &metrics_hash,
            comparison_hash: comparison_hash.as_deref(),
        });

        let stats = ReportStats {
            document_count: records.len(),
            empty_document_count: self.empty_document_count,
            contributing_topics: self
                .comparison
                .as_ref()
                .map(ComparisonSummary::contributing_topics)
                .unwrap_or(0),
        };

        let manifest = AnalysisManifest {
            report_id,
            version: REPORT_SCHEMA_VERSION.to_string(),
            config: self.config,
            metrics_hash,
            comparison_hash,
            computed_at: chrono::Utc::now().timestamp(),
            artifact_paths: self.artifact_paths,
            stats,
        };

        Some(AnalysisReport {
            manifest,
            records,
            comparison: self.comparison,
        })
    }
}

/// Internal struct for computing report_id.
#[derive(Serialize)]
struct ReportIdInput<'a> {
    version: &'a str,
    config: &'a MetricsConfig,
    metrics_hash: &'a str,
    comparison_hash: Option<&'a str>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::StructuralMetrics;

    fn make_records() -> Vec<MetricRecord> {
        vec![
            MetricRecord::new("b.ann", StructuralMetrics { claims: 2, ..Default::default() }),
            MetricRecord::new("a.ann", StructuralMetrics { claims: 1, ..Default::default() }),
        ]
    }

    #[test]
    fn test_try_build_requires_records() {
        assert!(ReportBundler::new().try_build().is_none());
    }

    #[test]
    fn test_build_sorts_records_and_counts() {
        let report = ReportBundler::new()
            .records(make_records())
            .empty_documents(1)
            .try_build()
            .unwrap();

        assert_eq!(report.records[0].essay_id, "a.ann");
        assert_eq!(report.manifest.version, REPORT_SCHEMA_VERSION);
        assert_eq!(report.manifest.stats.document_count, 2);
        assert_eq!(report.manifest.stats.empty_document_count, 1);
        assert!(report.manifest.comparison_hash.is_none());
    }

    #[test]
    fn test_report_id_determinism() {
        let r1 = ReportBundler::new().records(make_records()).try_build().unwrap();
        let mut reversed = make_records();
        reversed.reverse();
        let r2 = ReportBundler::new().records(reversed).try_build().unwrap();

        assert_eq!(r1.manifest.report_id, r2.manifest.report_id);
    }

    #[test]
    fn test_config_changes_report_id() {
        let r1 = ReportBundler::new().records(make_records()).try_build().unwrap();
        let r2 = ReportBundler::new()
            .records(make_records())
            .config(MetricsConfig::all_claims())
            .try_build()
            .unwrap();

        assert_ne!(r1.manifest.report_id, r2.manifest.report_id);
    }

    #[test]
    fn test_write_to() {
        let dir = tempfile::tempdir().unwrap();
        let report = ReportBundler::new()
            .records(make_records())
            .comparison(ComparisonSummary::default())
            .try_build()
            .unwrap();
        report.write_to(dir.path().join("out")).unwrap();

        let out = dir.path().join("out");
        assert!(out.join("structural_metrics.json").exists());
        assert!(out.join("stance_comparison.json").exists());

        let manifest: AnalysisManifest =
            serde_json::from_slice(&fs::read(out.join("manifest.json")).unwrap()).unwrap();
        assert_eq!(manifest, report.manifest);
    }

    #[test]
    fn test_key_point_report_write_to() {
        use crate::keypoint::{run_baseline, summarize_key_points, BaselineConfig, KeyPointPair};

        let rows = vec![
            KeyPointPair::new("Zoos", "zoos protect species", "zoos protect species", "1", "1"),
            KeyPointPair::new("Zoos", "cages are cruel", "zoos educate children", "-1", "0"),
        ];
        let report = KeyPointReport {
            summary: summarize_key_points(&rows),
            baseline: run_baseline(&rows, &BaselineConfig::default()),
        };

        let dir = tempfile::tempdir().unwrap();
        report.write_to(dir.path()).unwrap();

        let summary: KeyPointSummary =
            serde_json::from_slice(&fs::read(dir.path().join(KEY_POINT_SUMMARY_FILE)).unwrap()).unwrap();
        assert_eq!(summary, report.summary);
        assert_eq!(summary.topics["Zoos"].matches, 1);

        let baseline: BaselineReport =
            serde_json::from_slice(&fs::read(dir.path().join(KEY_POINT_BASELINE_FILE)).unwrap()).unwrap();
        assert_eq!(baseline.n_train + baseline.n_test, 2);
    }
}
