//! Shared fixtures for integration tests.
#![allow(dead_code)]

use std::collections::HashMap;

use saberdash::chart::{BarChart, LineChart};
use saberdash::errors::DashboardError;
use saberdash::render::{ChartSlot, ViewSurface};
use saberdash::report::loader::ReportSource;
use saberdash::strategies::Strategy;

/// In-memory report source backed by a name -> JSON map.
pub struct MemorySource {
    resources: HashMap<String, String>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self {
            resources: HashMap::new(),
        }
    }

    pub fn with(mut self, name: &str, contents: &str) -> Self {
        self.resources.insert(name.to_string(), contents.to_string());
        self
    }
}

impl ReportSource for MemorySource {
    fn read(&self, resource: &str) -> Result<String, DashboardError> {
        self.resources
            .get(resource)
            .cloned()
            .ok_or_else(|| DashboardError::Io {
                path: resource.into(),
                source: std::io::Error::from(std::io::ErrorKind::NotFound),
            })
    }
}

/// Surface that records every call for assertions.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Title(String),
    Error(String),
    Line(&'static str, LineChart),
    Bar(&'static str, BarChart),
    Hidden(&'static str),
    Strategies(Vec<Strategy>),
}

#[derive(Default)]
pub struct RecordingSurface {
    pub events: Vec<Event>,
}

impl ViewSurface for RecordingSurface {
    fn set_title(&mut self, title: &str) -> anyhow::Result<()> {
        self.events.push(Event::Title(title.to_string()));
        Ok(())
    }

    fn show_error(&mut self, message: &str) -> anyhow::Result<()> {
        self.events.push(Event::Error(message.to_string()));
        Ok(())
    }

    fn line_chart(&mut self, slot: ChartSlot, chart: &LineChart) -> anyhow::Result<()> {
        self.events.push(Event::Line(slot.id(), chart.clone()));
        Ok(())
    }

    fn bar_chart(&mut self, slot: ChartSlot, chart: &BarChart) -> anyhow::Result<()> {
        self.events.push(Event::Bar(slot.id(), chart.clone()));
        Ok(())
    }

    fn hide_chart(&mut self, slot: ChartSlot) -> anyhow::Result<()> {
        self.events.push(Event::Hidden(slot.id()));
        Ok(())
    }

    fn strategies(&mut self, strategies: &[Strategy]) -> anyhow::Result<()> {
        self.events.push(Event::Strategies(strategies.to_vec()));
        Ok(())
    }
}

pub fn global_report_json() -> &'static str {
    r#"{
        "datos": [
            {
                "nivel_agregacion": "Establecimiento Educativo - IED Hogar Mariano",
                "metricas": {
                    "promedio_puntaje_global": {"2023-4": 250, "2024-4": 260}
                }
            },
            {
                "nivel_agregacion": "Colombia",
                "metricas": {
                    "promedio_puntaje_global": {"2023-4": 240, "2024-4": 245}
                }
            }
        ]
    }"#
}

pub fn standard_area_json() -> &'static str {
    r#"{
        "informacion_reporte": {"area": "Matemáticas"},
        "resultados_generales": {
            "niveles_desempeno": {
                "datos": [
                    {
                        "nivel_agregacion": "Establecimiento Educativo - IED Hogar Mariano",
                        "niveles": {
                            "nivel_1": {"2024-1": 30, "2025-1": 25},
                            "nivel_2": {"2024-1": 40, "2025-1": 35},
                            "nivel_3": {"2024-1": 20, "2025-1": 28},
                            "nivel_4": {"2024-1": 10, "2025-1": 12}
                        }
                    }
                ]
            }
        },
        "evidencias_aprendizaje": [
            {
                "id_evidencia": 1,
                "descripcion": "Comprende el significado de las operaciones básicas y las aplica en contextos cotidianos de compra y venta.",
                "porcentaje_respuestas_incorrectas": [
                    {
                        "nivel_agregacion": "Establecimiento Educativo - IED Hogar Mariano",
                        "aplicaciones": {"2024-1": 40, "2025-1": 55}
                    },
                    {
                        "nivel_agregacion": "Colombia",
                        "aplicaciones": {"2024-1": 45, "2025-1": 48}
                    }
                ]
            },
            {
                "id_evidencia": 2,
                "descripcion": "Resuelve problemas con datos presentados en tablas.",
                "porcentaje_respuestas_incorrectas": [
                    {
                        "nivel_agregacion": "Establecimiento Educativo - IED Hogar Mariano",
                        "aplicaciones": {"2024-1": 18, "2025-1": 15}
                    }
                ]
            }
        ]
    }"#
}

pub fn english_area_json() -> &'static str {
    r#"{
        "informacion_reporte": {"area": "Inglés"},
        "resultados_generales": {
            "niveles_desempeno": {
                "datos": [
                    {
                        "nivel_agregacion": "Establecimiento Educativo - IED Hogar Mariano",
                        "niveles": {
                            "nivel_A1": {"2024-1": 60, "2025-1": 55},
                            "nivel_B1": {"2024-1": 5, "2025-1": 8}
                        }
                    }
                ]
            }
        }
    }"#
}
