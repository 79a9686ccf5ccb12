use anyhow::{anyhow, Error};
use clap::Parser;
use log::info;
use maze_editor::cli::CliArgs;
use maze_editor::gui::run_gui;

fn main() -> Result<(), Error> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let (settings, grid) = CliArgs::parse().startup()?;
    info!(
        "Maze editor starting up with a {}x{} grid in {:?} mode",
        grid.rows(),
        grid.columns(),
        settings.mode
    );

    run_gui(settings, grid).map_err(|e| anyhow!("{e}"))
}
