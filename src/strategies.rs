//! Pedagogical strategy bank.
//!
//! Static (title, text) entries keyed by subject-area name. Not derived from
//! report data; injected through [`crate::config::DashboardConfig`] so the
//! catalog is configuration, not an ambient global.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Strategy {
    pub title: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AreaStrategies {
    pub area: String,
    pub strategies: Vec<Strategy>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrategyCatalog {
    pub areas: Vec<AreaStrategies>,
    /// Area whose strategies are shown when the requested area is unknown.
    pub fallback_area: String,
}

impl StrategyCatalog {
    /// Strategies for an area, falling back to the configured default area.
    pub fn for_area(&self, area: &str) -> &[Strategy] {
        self.lookup(area)
            .or_else(|| self.lookup(&self.fallback_area))
            .unwrap_or(&[])
    }

    fn lookup(&self, area: &str) -> Option<&[Strategy]> {
        self.areas
            .iter()
            .find(|entry| entry.area == area)
            .map(|entry| entry.strategies.as_slice())
    }
}

fn entry(area: &str, strategies: &[(&str, &str)]) -> AreaStrategies {
    AreaStrategies {
        area: area.to_string(),
        strategies: strategies
            .iter()
            .map(|(title, text)| Strategy {
                title: title.to_string(),
                text: text.to_string(),
            })
            .collect(),
    }
}

impl Default for StrategyCatalog {
    fn default() -> Self {
        Self {
            areas: vec![
                entry(
                    "Ciencias Naturales",
                    &[
                        (
                            "Fortalecimiento de la Indagación",
                            "Implementar rutinas de pensamiento (VEO-PIENSO-ME PREGUNTO) antes de iniciar laboratorios para formular hipótesis claras.",
                        ),
                        (
                            "Uso del Conocimiento Científico",
                            "Trabajar con noticias científicas actuales para que el estudiante aplique conceptos teóricos en contextos reales.",
                        ),
                        (
                            "Explicación de Fenómenos",
                            "Utilizar la metodología de 'Argumentación Científica' donde el estudiante deba justificar por qué ocurre un fenómeno usando datos.",
                        ),
                    ],
                ),
                entry(
                    "Sociales y Ciudadanas",
                    &[
                        (
                            "Pensamiento Sistémico",
                            "Realizar debates tipo ONU donde se analice un problema desde dimensiones económicas, políticas y culturales simultáneamente.",
                        ),
                        (
                            "Multiperspectivismo",
                            "Analizar fuentes históricas contradictorias para entender diferentes visiones de un mismo hecho.",
                        ),
                    ],
                ),
                entry(
                    "Lectura Crítica",
                    &[
                        (
                            "Lectura Inferencial",
                            "Diseñar preguntas que no estén explícitas en el texto. Preguntar '¿Cuál es la intención oculta del autor?'.",
                        ),
                        (
                            "Textos Discontinuos",
                            "Entrenar lectura de infografías, cómics y tablas estadísticas.",
                        ),
                    ],
                ),
                entry(
                    "Matemáticas",
                    &[
                        (
                            "Resolución de Problemas",
                            "Aplicar el método de Polya en clase. No solo buscar la respuesta, sino documentar el proceso de solución.",
                        ),
                        (
                            "Razonamiento Cuantitativo",
                            "Usar recibos de servicios públicos o noticias financieras para contextualizar las operaciones básicas.",
                        ),
                    ],
                ),
                entry(
                    "Inglés",
                    &[
                        (
                            "Exposición al idioma",
                            "Aumentar el input comprensible auditivo. Dedicar 10 minutos de la clase a 'Listening' sin subtítulos.",
                        ),
                        (
                            "Vocabulario en Contexto",
                            "Evitar listas de palabras aisladas. Aprender frases completas (chunks).",
                        ),
                    ],
                ),
            ],
            fallback_area: "Ciencias Naturales".to_string(),
        }
    }
}
