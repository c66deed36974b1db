//! Chart-ready configuration objects.
//!
//! These are the structures handed to the charting collaborator; they
//! serialize in the camelCase wire form that collaborator expects and carry
//! no behavior beyond construction helpers.

use serde::Serialize;

/// Tooltip descriptions wrap at this many characters.
pub const TOOLTIP_WRAP_WIDTH: usize = 60;

/// Background fill: one color for the whole dataset, or one per bar.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Fill {
    Solid(String),
    PerBar(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub label: String,
    pub data: Vec<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<Fill>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_dash: Option<Vec<u32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tension: Option<f64>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub hidden: bool,
}

impl Dataset {
    pub fn new(label: impl Into<String>, data: Vec<f64>) -> Self {
        Self {
            label: label.into(),
            data,
            background_color: None,
            border_color: None,
            border_width: None,
            border_dash: None,
            tension: None,
            hidden: false,
        }
    }

    pub fn solid(mut self, color: impl Into<String>) -> Self {
        self.background_color = Some(Fill::Solid(color.into()));
        self
    }

    pub fn per_bar(mut self, colors: Vec<String>) -> Self {
        self.background_color = Some(Fill::PerBar(colors));
        self
    }

    pub fn border_color(mut self, color: impl Into<String>) -> Self {
        self.border_color = Some(color.into());
        self
    }

    pub fn border_width(mut self, width: u32) -> Self {
        self.border_width = Some(width);
        self
    }

    pub fn border_dash(mut self, dash: Vec<u32>) -> Self {
        self.border_dash = Some(dash);
        self
    }

    pub fn tension(mut self, tension: f64) -> Self {
        self.tension = Some(tension);
        self
    }

    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineChart {
    pub title: String,
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y_min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y_max: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BarChart {
    pub title: String,
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
    pub stacked: bool,
    /// Horizontal bars; the value axis runs along x.
    pub horizontal: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_max: Option<f64>,
    /// Wrapped description lines per bar, shown on hover. Empty when the
    /// chart has no per-bar descriptions.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tooltips: Vec<Vec<String>>,
}

/// Chunk text into fixed-width segments for tooltip wrapping.
///
/// Splits by characters, not bytes; the descriptions are Spanish and carry
/// accented letters.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    if width == 0 || text.is_empty() {
        return Vec::new();
    }
    let chars: Vec<char> = text.chars().collect();
    chars
        .chunks(width)
        .map(|chunk| chunk.iter().collect())
        .collect()
}
