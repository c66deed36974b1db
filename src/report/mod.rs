//! Report data model.
//!
//! Two document shapes are consumed: the cross-area global summary and the
//! single-subject area detail. The area report comes in two schema variants
//! (standard subject areas and the English/CEFR report); the variant is
//! resolved once at parse time into [`AreaData`] so downstream code matches
//! exhaustively instead of re-checking the area name.

pub mod loader;
pub mod series;

use std::fmt;

use serde::Deserialize;

use crate::errors::DashboardError;
use crate::semaphore::MetricPolarity;
use self::series::YearSeries;

/// Area name that selects the English report schema.
pub const ENGLISH_AREA: &str = "Inglés";

/// Tag identifying the population a metrics block covers.
///
/// Selection is by substring match for the institution (tags carry the full
/// establishment name) and equality for the national reference; the first
/// matching block wins. Other aggregation levels in the data are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AggregationLevel {
    Institution,
    National,
}

impl AggregationLevel {
    pub fn matches(self, tag: &str) -> bool {
        match self {
            Self::Institution => tag.contains("Establecimiento"),
            Self::National => tag == "Colombia",
        }
    }
}

impl fmt::Display for AggregationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Institution => write!(f, "Establecimiento"),
            Self::National => write!(f, "Colombia"),
        }
    }
}

/// Cross-area summary report.
#[derive(Debug, Clone, Deserialize)]
pub struct GlobalReport {
    #[serde(rename = "datos")]
    pub blocks: Vec<GlobalBlock>,
}

impl GlobalReport {
    /// First block matching the given aggregation level, if any.
    pub fn block(&self, level: AggregationLevel) -> Option<&GlobalBlock> {
        self.blocks
            .iter()
            .find(|block| level.matches(&block.aggregation_level))
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct GlobalBlock {
    #[serde(rename = "nivel_agregacion")]
    pub aggregation_level: String,
    #[serde(rename = "metricas")]
    pub metrics: GlobalMetrics,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GlobalMetrics {
    #[serde(rename = "promedio_puntaje_global")]
    pub average_global_score: YearSeries,
}

/// Single-subject detail report with its schema variant resolved.
#[derive(Debug, Clone, Deserialize)]
#[serde(try_from = "RawAreaReport")]
pub struct AreaReport {
    pub info: ReportInfo,
    pub data: AreaData,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReportInfo {
    pub area: String,
}

#[derive(Debug, Clone)]
pub enum AreaData {
    Standard {
        levels: Vec<LevelBlock>,
        /// `None` when the report carries no evidence items.
        evidence: Option<EvidenceSet>,
    },
    /// The English schema carries no evidence-item section.
    English { levels: Vec<LevelBlock> },
}

/// Per-aggregation-level distribution of students across performance levels.
#[derive(Debug, Clone, Deserialize)]
pub struct LevelBlock {
    #[serde(rename = "nivel_agregacion")]
    pub aggregation_level: String,
    /// Bucket iteration order in the source document is significant: it
    /// drives dataset order and color assignment.
    #[serde(rename = "niveles", deserialize_with = "series::ordered_entries")]
    pub buckets: Vec<(String, YearSeries)>,
}

/// Evidence items of a standard report, all sharing one metric polarity.
///
/// Heterogeneous collections (one item counting correct answers, another
/// counting incorrect ones) are rejected at parse time.
#[derive(Debug, Clone)]
pub struct EvidenceSet {
    pub polarity: MetricPolarity,
    pub items: Vec<EvidenceItem>,
}

/// An assessment sub-topic with its metric broken down by aggregation level.
#[derive(Debug, Clone)]
pub struct EvidenceItem {
    pub id: u32,
    pub description: String,
    pub breakdown: Vec<MetricBlock>,
}

impl EvidenceItem {
    pub fn block(&self, level: AggregationLevel) -> Option<&MetricBlock> {
        self.breakdown
            .iter()
            .find(|block| level.matches(&block.aggregation_level))
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct MetricBlock {
    #[serde(rename = "nivel_agregacion")]
    pub aggregation_level: String,
    #[serde(rename = "aplicaciones")]
    pub applications: YearSeries,
}

#[derive(Debug, Clone, Deserialize)]
struct RawAreaReport {
    #[serde(rename = "informacion_reporte")]
    info: ReportInfo,
    #[serde(rename = "resultados_generales")]
    results: RawGeneralResults,
    #[serde(rename = "evidencias_aprendizaje", default)]
    evidence: Vec<RawEvidenceItem>,
}

#[derive(Debug, Clone, Deserialize)]
struct RawGeneralResults {
    #[serde(rename = "niveles_desempeno")]
    performance_levels: RawPerformanceLevels,
}

#[derive(Debug, Clone, Deserialize)]
struct RawPerformanceLevels {
    #[serde(rename = "datos")]
    blocks: Vec<LevelBlock>,
}

#[derive(Debug, Clone, Deserialize)]
struct RawEvidenceItem {
    #[serde(rename = "id_evidencia")]
    id: u32,
    #[serde(rename = "descripcion")]
    description: String,
    #[serde(rename = "porcentaje_respuestas_correctas")]
    correct: Option<Vec<MetricBlock>>,
    #[serde(rename = "porcentaje_respuestas_incorrectas")]
    incorrect: Option<Vec<MetricBlock>>,
}

impl TryFrom<RawAreaReport> for AreaReport {
    type Error = DashboardError;

    fn try_from(raw: RawAreaReport) -> Result<Self, Self::Error> {
        let levels = raw.results.performance_levels.blocks;
        let data = if raw.info.area == ENGLISH_AREA {
            AreaData::English { levels }
        } else {
            AreaData::Standard {
                levels,
                evidence: build_evidence(raw.evidence)?,
            }
        };
        Ok(AreaReport {
            info: raw.info,
            data,
        })
    }
}

fn build_evidence(raw: Vec<RawEvidenceItem>) -> Result<Option<EvidenceSet>, DashboardError> {
    let mut polarity = None;
    let mut items = Vec::with_capacity(raw.len());

    for item in raw {
        let (found, breakdown) = match (item.correct, item.incorrect) {
            (Some(blocks), None) => (MetricPolarity::Correct, blocks),
            (None, Some(blocks)) => (MetricPolarity::Incorrect, blocks),
            _ => return Err(DashboardError::AmbiguousEvidenceMetric { id: item.id }),
        };
        match polarity {
            None => polarity = Some(found),
            Some(expected) if expected != found => {
                return Err(DashboardError::MixedEvidenceMetrics {
                    id: item.id,
                    expected,
                    found,
                })
            }
            Some(_) => {}
        }
        items.push(EvidenceItem {
            id: item.id,
            description: item.description,
            breakdown,
        });
    }

    Ok(polarity.map(|polarity| EvidenceSet { polarity, items }))
}
