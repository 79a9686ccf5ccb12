//! Text formats for exporting and importing mazes.
//!
//! Walls and features live in separate files: one maze document (see [`maze`]) and one feature
//! document per [`Feature`] (see [`features`]). Both are plain text, conventionally `.txt`.

use crate::error::Result;
use crate::grid::{Feature, Grid};
use log::info;
use std::fs;
use std::path::Path;

pub mod features;
pub mod literal;
pub mod maze;

pub use features::{apply_features, import_features, parse_features, serialize_features};
pub use maze::{parse_maze, serialize_maze, serialize_maze_with, Alignment};

/// File extension used by the file dialogs
pub const FILE_EXTENSION: &str = "txt";

/// Write the walls of `grid` to `path`
pub fn save_maze(path: impl AsRef<Path>, grid: &Grid) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, serialize_maze(grid))?;
    info!(
        "Exported {}x{} maze to {}",
        grid.rows(),
        grid.columns(),
        path.display()
    );
    Ok(())
}

/// Read a maze document from `path` into a new [`Grid`]
pub fn load_maze(path: impl AsRef<Path>) -> Result<Grid> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let grid = parse_maze(&text)?;
    info!("Imported maze from {}", path.display());
    Ok(grid)
}

/// Write the cells of `grid` with `feature` set to `path`
pub fn save_features(path: impl AsRef<Path>, grid: &Grid, feature: Feature) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, serialize_features(grid, feature))?;
    info!("Exported {} locations to {}", feature.name(), path.display());
    Ok(())
}

/// Read a feature document from `path` and set `feature` on the listed cells of `grid`
pub fn load_features(path: impl AsRef<Path>, grid: &mut Grid, feature: Feature) -> Result<usize> {
    let text = fs::read_to_string(path)?;
    import_features(grid, feature, &text)
}
