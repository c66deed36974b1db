// Export modules for library usage
pub mod chart;
pub mod cli;
pub mod config;
pub mod errors;
pub mod normalize;
pub mod render;
pub mod report;
pub mod semaphore;
pub mod strategies;
pub mod views;

// Re-export commonly used types
pub use crate::chart::{BarChart, Dataset, Fill, LineChart};
pub use crate::config::{DashboardConfig, Palette};
pub use crate::errors::DashboardError;
pub use crate::normalize::{area_view, global_trend, AreaView};
pub use crate::render::{ChartSlot, JsonSurface, TerminalSurface, ViewSurface};
pub use crate::report::loader::{FileSource, ReportSource, GLOBAL_REPORT};
pub use crate::report::{AggregationLevel, AreaData, AreaReport, GlobalReport};
pub use crate::semaphore::{classify, MetricPolarity, Semaphore};
pub use crate::strategies::{Strategy, StrategyCatalog};
pub use crate::views::{render_area_view, render_global_view};
