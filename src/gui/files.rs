//! Import/export through native file dialogs.

use crate::format::{load_features, load_maze, save_features, save_maze, FILE_EXTENSION};
use crate::grid::Feature;
use crate::gui::App;
use anyhow::Error;
use log::info;
use native_dialog::FileDialog;
use std::path::PathBuf;

fn save_path(default_name: &str) -> Result<Option<PathBuf>, Error> {
    Ok(FileDialog::new()
        .add_filter("Text file", &[FILE_EXTENSION])
        .set_filename(default_name)
        .show_save_single_file()?)
}

fn open_path() -> Result<Option<PathBuf>, Error> {
    Ok(FileDialog::new()
        .add_filter("Text file", &[FILE_EXTENSION])
        .show_open_single_file()?)
}

impl App {
    /// Save the walls of the current grid to a file chosen by the user
    pub fn export_maze(&mut self) -> Result<(), Error> {
        if let Some(path) = save_path("maze.txt")? {
            save_maze(&path, &self.grid)?;
        }
        Ok(())
    }

    /// Replace the current grid with one loaded from a file chosen by the user
    pub fn import_maze(&mut self) -> Result<(), Error> {
        if let Some(path) = open_path()? {
            // the current grid is only replaced once the whole document has parsed
            let grid = load_maze(&path)?;
            self.replace_grid(grid);
        }
        Ok(())
    }

    /// Save the locations of one feature to a file chosen by the user
    pub fn export_features(&mut self, feature: Feature) -> Result<(), Error> {
        let default_name = format!("{}.txt", feature.name().to_lowercase());
        if let Some(path) = save_path(&default_name)? {
            save_features(&path, &self.grid, feature)?;
        }
        Ok(())
    }

    /// Add the locations of one feature from a file chosen by the user
    pub fn import_features(&mut self, feature: Feature) -> Result<(), Error> {
        if let Some(path) = open_path()? {
            let count = load_features(&path, &mut self.grid, feature)?;
            info!("{count} {} location(s) placed", feature.name());
        }
        Ok(())
    }
}
