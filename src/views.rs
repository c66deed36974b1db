//! View-load orchestration: fetch, normalize, render.
//!
//! Every retrieval or normalization error is caught here, logged, and
//! converted into a single user-visible error message replacing the view
//! title. Surface write failures propagate; they are not report errors.

use crate::chart::LineChart;
use crate::config::DashboardConfig;
use crate::errors::Result;
use crate::normalize::{area_view, global_trend, AreaView};
use crate::render::{ChartSlot, ViewSurface};
use crate::report::loader::{ReportSource, GLOBAL_REPORT};

/// Message shown in place of the title when a view fails to load.
pub const ERROR_MESSAGE: &str = "Error cargando datos. Verifique la consola.";

pub fn render_global_view<S, V>(
    source: &S,
    config: &DashboardConfig,
    surface: &mut V,
) -> anyhow::Result<()>
where
    S: ReportSource + ?Sized,
    V: ViewSurface + ?Sized,
{
    match load_global(source, config) {
        Ok(chart) => {
            surface.set_title(&chart.title)?;
            surface.line_chart(ChartSlot::GlobalTrend, &chart)?;
        }
        Err(err) => {
            log::error!("failed to load global view: {err}");
            surface.show_error(ERROR_MESSAGE)?;
        }
    }
    Ok(())
}

pub fn render_area_view<S, V>(
    source: &S,
    resource: &str,
    config: &DashboardConfig,
    surface: &mut V,
) -> anyhow::Result<()>
where
    S: ReportSource + ?Sized,
    V: ViewSurface + ?Sized,
{
    match load_area(source, resource, config) {
        Ok(view) => {
            surface.set_title(&view.title)?;
            surface.bar_chart(ChartSlot::PerformanceLevels, &view.levels)?;
            match &view.evidence {
                Some(chart) => surface.bar_chart(ChartSlot::Evidence, chart)?,
                None => surface.hide_chart(ChartSlot::Evidence)?,
            }
            surface.strategies(&view.strategies)?;
        }
        Err(err) => {
            log::error!("failed to load area view {resource}: {err}");
            surface.show_error(ERROR_MESSAGE)?;
        }
    }
    Ok(())
}

fn load_global<S: ReportSource + ?Sized>(
    source: &S,
    config: &DashboardConfig,
) -> Result<LineChart> {
    global_trend(&source.load_global(GLOBAL_REPORT)?, config)
}

fn load_area<S: ReportSource + ?Sized>(
    source: &S,
    resource: &str,
    config: &DashboardConfig,
) -> Result<AreaView> {
    area_view(&source.load_area(resource)?, config)
}
