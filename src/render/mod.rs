//! Presentation surfaces.
//!
//! A [`ViewSurface`] is the render target a view load draws into: a titled
//! page with named chart slots and a strategies panel. The JSON surface
//! serializes the fully-formed chart configurations for the external
//! charting collaborator; the terminal surface is a human-readable preview.

use std::io::Write;

use colored::Colorize;
use comfy_table::{presets, Table};
use serde_json::{json, Map, Value};

use crate::chart::{BarChart, Dataset, LineChart};
use crate::strategies::Strategy;

/// Named render slots, mirroring the chart ids of the consuming page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartSlot {
    GlobalTrend,
    PerformanceLevels,
    Evidence,
}

impl ChartSlot {
    pub fn id(self) -> &'static str {
        match self {
            Self::GlobalTrend => "globalChart",
            Self::PerformanceLevels => "levelsChart",
            Self::Evidence => "evidenceChart",
        }
    }
}

pub trait ViewSurface {
    fn set_title(&mut self, title: &str) -> anyhow::Result<()>;
    /// Replace the view title with a user-visible error message.
    fn show_error(&mut self, message: &str) -> anyhow::Result<()>;
    fn line_chart(&mut self, slot: ChartSlot, chart: &LineChart) -> anyhow::Result<()>;
    fn bar_chart(&mut self, slot: ChartSlot, chart: &BarChart) -> anyhow::Result<()>;
    fn hide_chart(&mut self, slot: ChartSlot) -> anyhow::Result<()>;
    fn strategies(&mut self, strategies: &[Strategy]) -> anyhow::Result<()>;
}

/// Collects a view into one JSON document and writes it on `finish`.
pub struct JsonSurface<W: Write> {
    writer: W,
    document: Map<String, Value>,
    charts: Map<String, Value>,
}

impl<W: Write> JsonSurface<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            document: Map::new(),
            charts: Map::new(),
        }
    }

    pub fn finish(mut self) -> anyhow::Result<()> {
        self.document
            .insert("charts".to_string(), Value::Object(self.charts));
        let json = serde_json::to_string_pretty(&Value::Object(self.document))?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn insert_chart(&mut self, slot: ChartSlot, kind: &str, chart: Value) {
        let mut entry = Map::new();
        entry.insert("type".to_string(), json!(kind));
        entry.insert("config".to_string(), chart);
        self.charts.insert(slot.id().to_string(), Value::Object(entry));
    }
}

impl<W: Write> ViewSurface for JsonSurface<W> {
    fn set_title(&mut self, title: &str) -> anyhow::Result<()> {
        self.document.insert("title".to_string(), json!(title));
        Ok(())
    }

    fn show_error(&mut self, message: &str) -> anyhow::Result<()> {
        self.document.insert("title".to_string(), json!(message));
        self.document.insert("error".to_string(), json!(true));
        Ok(())
    }

    fn line_chart(&mut self, slot: ChartSlot, chart: &LineChart) -> anyhow::Result<()> {
        self.insert_chart(slot, "line", serde_json::to_value(chart)?);
        Ok(())
    }

    fn bar_chart(&mut self, slot: ChartSlot, chart: &BarChart) -> anyhow::Result<()> {
        self.insert_chart(slot, "bar", serde_json::to_value(chart)?);
        Ok(())
    }

    fn hide_chart(&mut self, slot: ChartSlot) -> anyhow::Result<()> {
        self.charts
            .insert(slot.id().to_string(), json!({ "hidden": true }));
        Ok(())
    }

    fn strategies(&mut self, strategies: &[Strategy]) -> anyhow::Result<()> {
        self.document
            .insert("strategies".to_string(), serde_json::to_value(strategies)?);
        Ok(())
    }
}

/// Renders charts as tables for terminal preview.
pub struct TerminalSurface<W: Write> {
    writer: W,
    color: bool,
}

impl<W: Write> TerminalSurface<W> {
    pub fn new(writer: W, color: bool) -> Self {
        Self { writer, color }
    }

    fn paint(&self, text: &str, apply: impl Fn(&str) -> String) -> String {
        if self.color {
            apply(text)
        } else {
            text.to_string()
        }
    }

    fn chart_table(&mut self, title: &str, table: Table) -> anyhow::Result<()> {
        let heading = self.paint(title, |t| t.bold().to_string());
        writeln!(self.writer, "\n{heading}")?;
        writeln!(self.writer, "{table}")?;
        Ok(())
    }
}

fn format_value(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{value:.1}")
    }
}

fn visible(datasets: &[Dataset]) -> impl Iterator<Item = &Dataset> {
    datasets.iter().filter(|dataset| !dataset.hidden)
}

impl<W: Write> ViewSurface for TerminalSurface<W> {
    fn set_title(&mut self, title: &str) -> anyhow::Result<()> {
        let text = self.paint(title, |t| t.bold().underline().to_string());
        writeln!(self.writer, "{text}")?;
        Ok(())
    }

    fn show_error(&mut self, message: &str) -> anyhow::Result<()> {
        let text = self.paint(message, |t| t.red().bold().to_string());
        writeln!(self.writer, "{text}")?;
        Ok(())
    }

    fn line_chart(&mut self, _slot: ChartSlot, chart: &LineChart) -> anyhow::Result<()> {
        let mut table = Table::new();
        table.load_preset(presets::UTF8_FULL_CONDENSED);
        let mut header = vec![String::new()];
        header.extend(chart.labels.iter().cloned());
        table.set_header(header);
        for dataset in visible(&chart.datasets) {
            let mut row = vec![dataset.label.clone()];
            row.extend(dataset.data.iter().copied().map(format_value));
            table.add_row(row);
        }
        self.chart_table(&chart.title, table)
    }

    fn bar_chart(&mut self, _slot: ChartSlot, chart: &BarChart) -> anyhow::Result<()> {
        let mut table = Table::new();
        table.load_preset(presets::UTF8_FULL_CONDENSED);
        if chart.horizontal {
            // One row per bar, one column per dataset.
            let mut header = vec![String::new()];
            header.extend(visible(&chart.datasets).map(|d| d.label.clone()));
            table.set_header(header);
            for (index, label) in chart.labels.iter().enumerate() {
                let mut row = vec![label.clone()];
                for dataset in visible(&chart.datasets) {
                    row.push(
                        dataset
                            .data
                            .get(index)
                            .copied()
                            .map(format_value)
                            .unwrap_or_default(),
                    );
                }
                table.add_row(row);
            }
        } else {
            let mut header = vec![String::new()];
            header.extend(chart.labels.iter().cloned());
            table.set_header(header);
            for dataset in visible(&chart.datasets) {
                let mut row = vec![dataset.label.clone()];
                row.extend(dataset.data.iter().copied().map(format_value));
                table.add_row(row);
            }
        }
        self.chart_table(&chart.title, table)
    }

    fn hide_chart(&mut self, _slot: ChartSlot) -> anyhow::Result<()> {
        Ok(())
    }

    fn strategies(&mut self, strategies: &[Strategy]) -> anyhow::Result<()> {
        if strategies.is_empty() {
            return Ok(());
        }
        let heading = self.paint("Estrategias Pedagógicas", |t| t.bold().to_string());
        writeln!(self.writer, "\n{heading}")?;
        for strategy in strategies {
            let title = self.paint(&strategy.title, |t| t.cyan().to_string());
            writeln!(self.writer, "  📌 {title}")?;
            writeln!(self.writer, "     {}", strategy.text)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_surface_collects_one_document() {
        let mut buffer = Vec::new();
        let mut surface = JsonSurface::new(&mut buffer);
        surface.set_title("Matemáticas").unwrap();
        surface
            .line_chart(
                ChartSlot::GlobalTrend,
                &LineChart {
                    title: "t".into(),
                    labels: vec!["2023".into()],
                    datasets: vec![Dataset::new("EE", vec![250.0]).solid("#003366")],
                    y_min: Some(200.0),
                    y_max: Some(350.0),
                },
            )
            .unwrap();
        surface.hide_chart(ChartSlot::Evidence).unwrap();
        surface.finish().unwrap();

        let doc: Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(doc["title"], "Matemáticas");
        assert_eq!(doc["charts"]["globalChart"]["type"], "line");
        assert_eq!(
            doc["charts"]["globalChart"]["config"]["datasets"][0]["backgroundColor"],
            "#003366"
        );
        assert_eq!(doc["charts"]["evidenceChart"]["hidden"], true);
    }

    #[test]
    fn json_surface_error_replaces_title() {
        let mut buffer = Vec::new();
        let mut surface = JsonSurface::new(&mut buffer);
        surface.set_title("Matemáticas").unwrap();
        surface.show_error("Error cargando datos.").unwrap();
        surface.finish().unwrap();

        let doc: Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(doc["title"], "Error cargando datos.");
        assert_eq!(doc["error"], true);
    }

    #[test]
    fn terminal_surface_skips_hidden_datasets() {
        let mut buffer = Vec::new();
        let mut surface = TerminalSurface::new(&mut buffer, false);
        surface
            .bar_chart(
                ChartSlot::Evidence,
                &BarChart {
                    title: "Evidencias".into(),
                    labels: vec!["Evidencia 1".into()],
                    datasets: vec![
                        Dataset::new("EE", vec![55.0]),
                        Dataset::new("Colombia (Ref)", vec![48.0]).hidden(),
                    ],
                    stacked: false,
                    horizontal: true,
                    value_max: Some(100.0),
                    tooltips: Vec::new(),
                },
            )
            .unwrap();
        let output = String::from_utf8(buffer).unwrap();
        assert!(output.contains("EE"));
        assert!(!output.contains("Colombia (Ref)"));
    }
}
