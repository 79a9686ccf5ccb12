//! Command-line argument parsing for the editor
//!
//! Supports:
//! - Opening a maze document, plus gold/helipad documents on top of it
//! - Starting with a blank grid of a given size
//! - Choosing the editing mode
//! - Loading settings from a TOML file

use crate::format::{load_features, load_maze};
use crate::grid::{Feature, Grid};
use crate::settings::{EditorMode, EditorSettings};
use anyhow::{Context, Error};
use clap::Parser;
use std::path::PathBuf;

/// Interactive editor for rectangular grid mazes
#[derive(Parser, Debug)]
#[command(name = "maze-editor", version, about = "Interactive editor for rectangular grid mazes")]
pub struct CliArgs {
    /// Maze document to open
    #[arg(value_name = "MAZE")]
    pub maze: Option<PathBuf>,

    /// Gold locations to load after the maze
    #[arg(long, value_name = "FILE")]
    pub gold: Option<PathBuf>,

    /// Helipad locations to load after the maze
    #[arg(long, value_name = "FILE")]
    pub helipad: Option<PathBuf>,

    /// Rows of the blank grid (ignored when a maze is opened)
    #[arg(long, value_name = "N")]
    pub rows: Option<usize>,

    /// Columns of the blank grid (ignored when a maze is opened)
    #[arg(long, value_name = "N")]
    pub columns: Option<usize>,

    /// Editing mode to start in
    #[arg(long, value_enum)]
    pub mode: Option<EditorMode>,

    /// Settings file (TOML)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl CliArgs {
    /// Resolve settings and build the starting grid
    pub fn startup(self) -> Result<(EditorSettings, Grid), Error> {
        let mut settings = match &self.config {
            Some(path) => EditorSettings::load(path)?,
            None => EditorSettings::default(),
        };
        if let Some(mode) = self.mode {
            settings.mode = mode;
        }
        if let Some(rows) = self.rows {
            settings.rows = rows;
        }
        if let Some(columns) = self.columns {
            settings.columns = columns;
        }
        settings.validate()?;

        let mut grid = match &self.maze {
            Some(path) => load_maze(path)
                .with_context(|| format!("Failed to open maze {}", path.display()))?,
            None => Grid::new(settings.rows, settings.columns)?,
        };

        for (feature, path) in [(Feature::Gold, &self.gold), (Feature::Helipad, &self.helipad)] {
            if let Some(path) = path {
                load_features(path, &mut grid, feature).with_context(|| {
                    format!("Failed to load {} from {}", feature.name(), path.display())
                })?;
            }
        }

        Ok((settings, grid))
    }
}
