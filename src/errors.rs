//! Error types for report retrieval and normalization.
//!
//! Retrieval failures (`Io`, `Parse`) are caught at the top of a view load
//! and converted into a user-visible error message. Schema errors surface at
//! parse time so downstream code never has to re-validate report shape.

use std::path::PathBuf;

use thiserror::Error;

use crate::report::AggregationLevel;
use crate::semaphore::MetricPolarity;

#[derive(Debug, Error)]
pub enum DashboardError {
    /// Report file could not be read.
    #[error("failed to read report {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Report contents are not valid JSON or violate the report schema.
    #[error("failed to parse report {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// An evidence item must carry exactly one metric section.
    #[error(
        "evidence item {id} must carry exactly one of \
         porcentaje_respuestas_correctas or porcentaje_respuestas_incorrectas"
    )]
    AmbiguousEvidenceMetric { id: u32 },

    /// All evidence items in a report must measure the same thing.
    #[error("evidence item {id} uses a {found} metric but the report started with {expected}")]
    MixedEvidenceMetrics {
        id: u32,
        expected: MetricPolarity,
        found: MetricPolarity,
    },

    /// A required aggregation-level block is absent from the report.
    #[error("no \"{0}\" aggregation block in report data")]
    MissingAggregation(AggregationLevel),

    /// The performance-level section has no buckets to derive years from.
    #[error("report contains no performance level data")]
    EmptyLevels,
}

pub type Result<T> = std::result::Result<T, DashboardError>;
