use std::fs;
use std::io::{self, IsTerminal, Write};

use anyhow::Result;
use clap::Parser;

use saberdash::cli::{Cli, Commands, OutputFormat};
use saberdash::config::DashboardConfig;
use saberdash::render::{JsonSurface, TerminalSurface, ViewSurface};
use saberdash::report::loader::FileSource;
use saberdash::views::{render_area_view, render_global_view};

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = DashboardConfig::load_or_default(cli.config.as_deref());
    let source = FileSource::new(&cli.data_dir);

    let writer: Box<dyn Write> = match &cli.output {
        Some(path) => Box::new(fs::File::create(path)?),
        None => Box::new(io::stdout()),
    };

    match cli.format {
        OutputFormat::Terminal => {
            let color = cli.output.is_none() && io::stdout().is_terminal();
            let mut surface = TerminalSurface::new(writer, color);
            run(&cli, &source, &config, &mut surface)
        }
        OutputFormat::Json => {
            let mut surface = JsonSurface::new(writer);
            run(&cli, &source, &config, &mut surface)?;
            surface.finish()
        }
    }
}

fn run<V: ViewSurface>(
    cli: &Cli,
    source: &FileSource,
    config: &DashboardConfig,
    surface: &mut V,
) -> Result<()> {
    match &cli.command {
        Commands::Global => render_global_view(source, config, surface),
        Commands::Area { resource } => render_area_view(source, resource, config, surface),
    }
}
