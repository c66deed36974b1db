//! Subject-area report normalization.
//!
//! A standard area produces a stacked performance-level chart plus a
//! horizontal evidence chart for the most recent year; the English variant
//! produces only its CEFR level chart and suppresses the evidence slot.

use crate::chart::{wrap_text, BarChart, Dataset, TOOLTIP_WRAP_WIDTH};
use crate::config::DashboardConfig;
use crate::errors::{DashboardError, Result};
use crate::report::series::year_label;
use crate::report::{
    AggregationLevel, AreaData, AreaReport, EvidenceItem, EvidenceSet, LevelBlock,
};
use crate::semaphore::classify;
use crate::strategies::Strategy;

/// CEFR bucket names in band order, A- through B+. Buckets absent from the
/// data are skipped; there is no zero-fill.
pub const CEFR_LEVELS: [&str; 5] = [
    "nivel_A_menos",
    "nivel_A1",
    "nivel_A2",
    "nivel_B1",
    "nivel_B_mas",
];

/// Everything a subject-area view renders.
#[derive(Debug, Clone)]
pub struct AreaView {
    pub title: String,
    pub levels: BarChart,
    /// `None` for the English variant and for reports without evidence items.
    pub evidence: Option<BarChart>,
    pub strategies: Vec<Strategy>,
}

pub fn area_view(report: &AreaReport, config: &DashboardConfig) -> Result<AreaView> {
    let (levels, evidence) = match &report.data {
        AreaData::Standard { levels, evidence } => {
            let years = raw_year_keys(levels)?;
            let chart = standard_levels_chart(levels, &years, config)?;
            let evidence_chart = match (evidence, years.last()) {
                (Some(set), Some(last_year)) => Some(evidence_chart(set, last_year, config)),
                _ => {
                    log::debug!("report {} has no evidence items", report.info.area);
                    None
                }
            };
            (chart, evidence_chart)
        }
        AreaData::English { levels } => {
            let years = raw_year_keys(levels)?;
            (english_levels_chart(levels, &years, config)?, None)
        }
    };

    Ok(AreaView {
        title: report.info.area.clone(),
        levels,
        evidence,
        strategies: config.strategies.for_area(&report.info.area).to_vec(),
    })
}

/// Year keys come from the first block's first bucket, in stored order.
/// Bucket storage order is treated as significant throughout.
fn raw_year_keys(levels: &[LevelBlock]) -> Result<Vec<String>> {
    levels
        .first()
        .and_then(|block| block.buckets.first())
        .map(|(_, series)| series.keys().map(str::to_string).collect())
        .ok_or(DashboardError::EmptyLevels)
}

fn institution_block(levels: &[LevelBlock]) -> Result<&LevelBlock> {
    levels
        .iter()
        .find(|block| AggregationLevel::Institution.matches(&block.aggregation_level))
        .ok_or(DashboardError::MissingAggregation(AggregationLevel::Institution))
}

fn display_labels(raw_years: &[String]) -> Vec<String> {
    raw_years
        .iter()
        .map(|year| year_label(year).to_string())
        .collect()
}

/// Stacked dataset per performance level, one semaphore color per position,
/// cycling every four buckets.
fn standard_levels_chart(
    levels: &[LevelBlock],
    raw_years: &[String],
    config: &DashboardConfig,
) -> Result<BarChart> {
    let block = institution_block(levels)?;
    let cycle = config.palette.level_cycle();

    let datasets = block
        .buckets
        .iter()
        .enumerate()
        .map(|(index, (name, series))| {
            Dataset::new(bucket_label(name), series.values()).solid(cycle[index % cycle.len()])
        })
        .collect();

    Ok(BarChart {
        title: "% Estudiantes por Nivel".to_string(),
        labels: display_labels(raw_years),
        datasets,
        stacked: true,
        horizontal: false,
        value_max: Some(100.0),
        tooltips: Vec::new(),
    })
}

/// One dataset per known CEFR band present in the data, in band order.
fn english_levels_chart(
    levels: &[LevelBlock],
    raw_years: &[String],
    config: &DashboardConfig,
) -> Result<BarChart> {
    let block = institution_block(levels)?;

    let mut datasets = Vec::new();
    for name in CEFR_LEVELS {
        let Some((_, series)) = block.buckets.iter().find(|(bucket, _)| bucket == name) else {
            continue;
        };
        let color = config.palette.cefr_color(datasets.len());
        datasets.push(Dataset::new(cefr_label(name), series.values()).solid(color));
    }

    Ok(BarChart {
        title: "Distribución Niveles de Inglés (MCER)".to_string(),
        labels: display_labels(raw_years),
        datasets,
        stacked: true,
        horizontal: false,
        value_max: Some(100.0),
        tooltips: Vec::new(),
    })
}

/// Horizontal bar chart of evidence-item values for the most recent year,
/// institution bars colored by semaphore category, national reference hidden
/// by default.
fn evidence_chart(set: &EvidenceSet, last_year: &str, config: &DashboardConfig) -> BarChart {
    let mut labels = Vec::with_capacity(set.items.len());
    let mut tooltips = Vec::with_capacity(set.items.len());
    let mut institution_values = Vec::with_capacity(set.items.len());
    let mut national_values = Vec::with_capacity(set.items.len());
    let mut bar_colors = Vec::with_capacity(set.items.len());

    for item in &set.items {
        labels.push(format!("Evidencia {}", item.id));
        tooltips.push(wrap_text(&item.description, TOOLTIP_WRAP_WIDTH));

        let institution = metric_value(item, AggregationLevel::Institution, last_year);
        national_values.push(metric_value(item, AggregationLevel::National, last_year));
        bar_colors.push(config.palette.semaphore(classify(institution, set.polarity)).to_string());
        institution_values.push(institution);
    }

    BarChart {
        title: format!("Evidencias de Aprendizaje ({})", set.polarity.axis_label()),
        labels,
        datasets: vec![
            Dataset::new(
                format!("{} ({})", config.institution_label, set.polarity.axis_label()),
                institution_values,
            )
            .per_bar(bar_colors)
            .border_width(1),
            Dataset::new(config.reference_label.clone(), national_values)
                .solid(&config.palette.national)
                .hidden(),
        ],
        stacked: false,
        horizontal: true,
        value_max: Some(100.0),
        tooltips,
    }
}

/// Lookup with a documented fallback: a missing aggregation block or a
/// missing year both chart as 0, logged rather than silent.
fn metric_value(item: &EvidenceItem, level: AggregationLevel, year: &str) -> f64 {
    let Some(block) = item.block(level) else {
        log::warn!(
            "evidence {}: no \"{}\" aggregation block, charting 0",
            item.id,
            level
        );
        return 0.0;
    };
    match block.applications.get(year) {
        Some(value) => value,
        None => {
            log::warn!(
                "evidence {}: no value for {} at \"{}\", charting 0",
                item.id,
                level,
                year
            );
            0.0
        }
    }
}

fn bucket_label(name: &str) -> String {
    name.replace('_', " ").to_uppercase()
}

fn cefr_label(name: &str) -> String {
    name.strip_prefix("nivel_")
        .unwrap_or(name)
        .replace('_', " ")
        .to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bucket_labels() {
        assert_eq!(bucket_label("nivel_1"), "NIVEL 1");
        assert_eq!(cefr_label("nivel_A_menos"), "A MENOS");
        assert_eq!(cefr_label("nivel_B1"), "B1");
    }
}
