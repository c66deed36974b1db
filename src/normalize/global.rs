//! Global score trend normalization.

use crate::chart::{Dataset, LineChart};
use crate::config::DashboardConfig;
use crate::errors::{DashboardError, Result};
use crate::report::{AggregationLevel, GlobalReport};

/// Build the multi-year global score line chart: institution series against
/// the national reference.
///
/// Year labels come from the institution block. If the national block keys a
/// different year set the values stay positionally aligned with the
/// institution labels; the mismatch is logged, not joined by key.
pub fn global_trend(report: &GlobalReport, config: &DashboardConfig) -> Result<LineChart> {
    let institution = report
        .block(AggregationLevel::Institution)
        .ok_or(DashboardError::MissingAggregation(AggregationLevel::Institution))?;
    let national = report
        .block(AggregationLevel::National)
        .ok_or(DashboardError::MissingAggregation(AggregationLevel::National))?;

    let institution_scores = &institution.metrics.average_global_score;
    let national_scores = &national.metrics.average_global_score;

    if !institution_scores.keys().eq(national_scores.keys()) {
        log::warn!(
            "institution and national year sets differ; national values stay positionally aligned"
        );
    }

    Ok(LineChart {
        title: "Evolución Puntaje Global".to_string(),
        labels: institution_scores.labels(),
        datasets: vec![
            Dataset::new(config.institution_label.clone(), institution_scores.values())
                .border_color(&config.palette.institution)
                .solid(&config.palette.institution)
                .border_width(3)
                .tension(0.3),
            Dataset::new(config.national_label.clone(), national_scores.values())
                .border_color(&config.palette.national)
                .border_dash(vec![5, 5])
                .tension(0.3),
        ],
        y_min: Some(config.global_score_min),
        y_max: Some(config.global_score_max),
    })
}
