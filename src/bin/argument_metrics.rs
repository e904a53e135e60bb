//! Argument Metrics Batch Runner
//!
//! Computes structural metrics for every `.ann` file in a directory,
//! optionally compares pro and con essays, and writes a report bundle.
//!
//! ## Configuration
//!
//! Environment variables:
//! - `ANN_DIR`: Directory of brat `.ann` files (required)
//! - `STANCE_LABELS`: JSON array of `{essay_id, topic, stance}` rows (optional)
//! - `KEY_POINTS`: JSON array of argument/key-point rows; writes the key-point
//!   summary and baseline next to the report (optional)
//! - `OUTPUT_DIR`: Report directory (default: analysis_outputs)
//! - `EVIDENCE_DENOMINATOR`: "claims" or "all_claims" (default: claims)
//! - `RUST_LOG`: Log level filter (default: info)
//! - `LOG_FORMAT`: "json" for structured logs, "pretty" for development (default: pretty)
//!
//! ## Usage
//!
//! ```bash
//! ANN_DIR=brat-project-final STANCE_LABELS=stance_labels.json cargo run --bin argument_metrics
//! ```

use std::time::Instant;

use tracing::{info, warn};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

use argument_graph_kernel::{
    compare, load_key_point_pairs, load_stance_labels, run_baseline, summarize_key_points,
    BaselineConfig, Corpus, EvidenceDenominator, KeyPointReport, MetricsConfig, ReportBundler,
};

/// Initialize the tracing subscriber with JSON or pretty format
fn init_tracing() {
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "pretty".to_string());

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "argument_metrics=info,argument_graph_kernel=info".into());

    if log_format == "json" {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_current_span(true)
                    .flatten_event(true)
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_span_events(FmtSpan::CLOSE)
            )
            .init();
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    info!(version = env!("CARGO_PKG_VERSION"), "Starting argument metrics run");

    // Load configuration from environment
    let ann_dir = std::env::var("ANN_DIR").map_err(|_| "ANN_DIR must be set")?;
    let output_dir = std::env::var("OUTPUT_DIR").unwrap_or_else(|_| "analysis_outputs".to_string());

    let evidence_denominator = match std::env::var("EVIDENCE_DENOMINATOR") {
        Ok(s) => EvidenceDenominator::from_str(&s).unwrap_or_else(|| {
            warn!(value = %s, "Unknown EVIDENCE_DENOMINATOR, using claims");
            EvidenceDenominator::Claims
        }),
        Err(_) => EvidenceDenominator::Claims,
    };
    let config = MetricsConfig { evidence_denominator };

    let start = Instant::now();
    let corpus = Corpus::from_dir(&ann_dir)?;
    let empty_documents = corpus
        .documents()
        .iter()
        .filter(|d| d.annotation.is_empty())
        .count();
    if empty_documents > 0 {
        warn!(empty_documents, "Some documents contain no parsable annotations");
    }

    let records = corpus.analyze(&config);
    info!(
        documents = records.len(),
        latency_ms = start.elapsed().as_millis() as u64,
        "Structural metrics computed"
    );

    let mut bundler = ReportBundler::new()
        .config(config)
        .empty_documents(empty_documents);

    match std::env::var("STANCE_LABELS") {
        Ok(path) if !path.is_empty() => {
            let labels = load_stance_labels(&path)?;
            let summary = compare(&records, &labels);
            info!(
                labels = labels.len(),
                topics = summary.contributing_topics(),
                "Stance comparison computed"
            );
            bundler = bundler.comparison(summary);
        }
        _ => info!("STANCE_LABELS not set, skipping stance comparison"),
    }

    let report = bundler
        .records(records)
        .try_build()
        .ok_or("no metric records to report")?;
    report.write_to(&output_dir)?;

    if let Ok(path) = std::env::var("KEY_POINTS") {
        if !path.is_empty() {
            let rows = load_key_point_pairs(&path)?;
            let key_points = KeyPointReport {
                summary: summarize_key_points(&rows),
                baseline: run_baseline(&rows, &BaselineConfig::default()),
            };
            info!(
                pairs = rows.len(),
                threshold = key_points.baseline.threshold,
                test_f1 = key_points.baseline.test_metrics.f1,
                "Key-point baseline computed"
            );
            key_points.write_to(&output_dir)?;
        }
    }

    info!(report_id = %report.manifest.report_id, output_dir = %output_dir, "Run complete");
    Ok(())
}
