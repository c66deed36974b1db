use std::fs;

use indoc::indoc;
use pretty_assertions::assert_eq;
use saberdash::config::DashboardConfig;
use saberdash::render::JsonSurface;
use saberdash::report::loader::{FileSource, GLOBAL_REPORT};
use saberdash::views::{render_area_view, render_global_view};
use serde_json::Value;

#[test]
fn global_view_from_disk_to_json_document() {
    let dir = tempfile::tempdir().unwrap();
    let json = indoc! {r#"
        {
            "datos": [
                {
                    "nivel_agregacion": "Establecimiento Educativo - IED Hogar Mariano",
                    "metricas": {"promedio_puntaje_global": {"2023-4": 250, "2024-4": 260}}
                },
                {
                    "nivel_agregacion": "Colombia",
                    "metricas": {"promedio_puntaje_global": {"2023-4": 240, "2024-4": 245}}
                }
            ]
        }
    "#};
    fs::write(dir.path().join(GLOBAL_REPORT), json).unwrap();

    let source = FileSource::new(dir.path());
    let mut buffer = Vec::new();
    let mut surface = JsonSurface::new(&mut buffer);
    render_global_view(&source, &DashboardConfig::default(), &mut surface).unwrap();
    surface.finish().unwrap();

    let doc: Value = serde_json::from_slice(&buffer).unwrap();
    assert_eq!(doc["title"], "Evolución Puntaje Global");

    let config = &doc["charts"]["globalChart"]["config"];
    assert_eq!(config["labels"], serde_json::json!(["2023", "2024"]));
    assert_eq!(
        config["datasets"][0]["data"],
        serde_json::json!([250.0, 260.0])
    );
    assert_eq!(
        config["datasets"][1]["data"],
        serde_json::json!([240.0, 245.0])
    );
    assert_eq!(config["datasets"][1]["borderDash"], serde_json::json!([5, 5]));
    assert_eq!(config["yMin"], 200.0);
    assert_eq!(config["yMax"], 350.0);
}

#[test]
fn area_view_from_disk_emits_strategies_and_evidence() {
    let dir = tempfile::tempdir().unwrap();
    let json = indoc! {r#"
        {
            "informacion_reporte": {"area": "Lectura Crítica"},
            "resultados_generales": {
                "niveles_desempeno": {
                    "datos": [
                        {
                            "nivel_agregacion": "Establecimiento Educativo",
                            "niveles": {
                                "nivel_1": {"2024-1": 50, "2025-1": 45},
                                "nivel_2": {"2024-1": 50, "2025-1": 55}
                            }
                        }
                    ]
                }
            },
            "evidencias_aprendizaje": [
                {
                    "id_evidencia": 3,
                    "descripcion": "Identifica la intención comunicativa del autor.",
                    "porcentaje_respuestas_correctas": [
                        {
                            "nivel_agregacion": "Establecimiento Educativo",
                            "aplicaciones": {"2024-1": 62, "2025-1": 71}
                        },
                        {
                            "nivel_agregacion": "Colombia",
                            "aplicaciones": {"2024-1": 60, "2025-1": 64}
                        }
                    ]
                }
            ]
        }
    "#};
    fs::write(dir.path().join("lectura.json"), json).unwrap();

    let source = FileSource::new(dir.path());
    let mut buffer = Vec::new();
    let mut surface = JsonSurface::new(&mut buffer);
    render_area_view(
        &source,
        "lectura.json",
        &DashboardConfig::default(),
        &mut surface,
    )
    .unwrap();
    surface.finish().unwrap();

    let doc: Value = serde_json::from_slice(&buffer).unwrap();
    assert_eq!(doc["title"], "Lectura Crítica");

    let evidence = &doc["charts"]["evidenceChart"]["config"];
    assert_eq!(evidence["labels"], serde_json::json!(["Evidencia 3"]));
    // 71% correct at the most recent year classifies as good.
    assert_eq!(evidence["datasets"][0]["data"], serde_json::json!([71.0]));
    assert_eq!(
        evidence["datasets"][0]["backgroundColor"][0],
        "rgba(75, 192, 192, 0.7)"
    );
    assert_eq!(evidence["datasets"][1]["hidden"], true);

    assert_eq!(doc["strategies"][0]["title"], "Lectura Inferencial");
}
