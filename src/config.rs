//! Dashboard configuration: display labels, color palette, axis bounds and
//! the strategy catalog. Defaults mirror the canonical dashboard; a TOML file
//! can override any part of it.

use std::fs;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::semaphore::Semaphore;
use crate::strategies::StrategyCatalog;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Legend label for the institution's own series.
    pub institution_label: String,
    /// Legend label for the national series on the global trend chart.
    pub national_label: String,
    /// Legend label for the national series on evidence charts.
    pub reference_label: String,
    /// Y-axis bounds for the global score trend.
    pub global_score_min: f64,
    pub global_score_max: f64,
    pub palette: Palette,
    pub strategies: StrategyCatalog,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            institution_label: "IED Hogar Mariano".to_string(),
            national_label: "Promedio Colombia".to_string(),
            reference_label: "Colombia (Ref)".to_string(),
            global_score_min: 200.0,
            global_score_max: 350.0,
            palette: Palette::default(),
            strategies: StrategyCatalog::default(),
        }
    }
}

impl DashboardConfig {
    /// Load configuration from a TOML file, falling back to defaults when the
    /// file is absent or invalid. Parse problems are reported, not fatal.
    pub fn load_or_default(path: Option<&Path>) -> Self {
        path.and_then(try_load_from_path).unwrap_or_default()
    }
}

fn try_load_from_path(path: &Path) -> Option<DashboardConfig> {
    let contents = match read_config_file(path) {
        Ok(contents) => contents,
        Err(err) => {
            if err.kind() != std::io::ErrorKind::NotFound {
                log::warn!("failed to read config file {}: {}", path.display(), err);
            }
            return None;
        }
    };

    match toml::from_str::<DashboardConfig>(&contents) {
        Ok(config) => {
            log::debug!("loaded config from {}", path.display());
            Some(config)
        }
        Err(err) => {
            eprintln!("Warning: invalid config {}: {}. Using defaults.", path.display(), err);
            None
        }
    }
}

fn read_config_file(path: &Path) -> Result<String, std::io::Error> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Chart colors, injected rather than ambient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub good: String,
    pub warning: String,
    pub alert: String,
    pub critical: String,
    pub neutral: String,
    /// Institution line color on the global trend chart.
    pub institution: String,
    /// National reference series color.
    pub national: String,
    /// CEFR level colors, A- through B+, in band order.
    pub cefr: Vec<String>,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            good: "rgba(75, 192, 192, 0.7)".to_string(),
            warning: "rgba(255, 205, 86, 0.7)".to_string(),
            alert: "rgba(255, 159, 64, 0.7)".to_string(),
            critical: "rgba(255, 99, 132, 0.7)".to_string(),
            neutral: "#e0e0e0".to_string(),
            institution: "#003366".to_string(),
            national: "#6c757d".to_string(),
            cefr: vec![
                "#dc3545".to_string(),
                "#fd7e14".to_string(),
                "#ffc107".to_string(),
                "#28a745".to_string(),
                "#20c997".to_string(),
            ],
        }
    }
}

impl Palette {
    pub fn semaphore(&self, category: Semaphore) -> &str {
        match category {
            Semaphore::Good => &self.good,
            Semaphore::Warning => &self.warning,
            Semaphore::Alert => &self.alert,
            Semaphore::Critical => &self.critical,
        }
    }

    /// Colors cycled through stacked performance-level datasets by position:
    /// the lowest level renders critical-red, the highest good-green.
    pub fn level_cycle(&self) -> [&str; 4] {
        [&self.critical, &self.alert, &self.warning, &self.good]
    }

    /// CEFR band color by position, cycling if the palette is short.
    pub fn cefr_color(&self, index: usize) -> &str {
        if self.cefr.is_empty() {
            return &self.neutral;
        }
        &self.cefr[index % self.cefr.len()]
    }
}
