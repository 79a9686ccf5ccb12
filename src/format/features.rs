//! The feature document: a flat list of `[row,column]` pairs, one file per [`Feature`].

use crate::error::{MazeError, Result};
use crate::format::literal;
use crate::grid::{Feature, Grid};
use log::info;
use std::collections::BTreeSet;

/// List every cell that has `feature` set, e.g. `[[0,2],[3,1]]`
///
/// # Examples
///
/// ```
/// use maze_editor::format::serialize_features;
/// use maze_editor::grid::{Feature, Grid};
///
/// let mut grid = Grid::default();
/// grid.toggle_feature(0, 2).unwrap();
/// grid.toggle_feature(3, 1).unwrap();
///
/// assert_eq!(serialize_features(&grid, Feature::Gold), "[[0,2],[3,1]]");
/// assert_eq!(serialize_features(&grid, Feature::Helipad), "[]");
/// ```
pub fn serialize_features(grid: &Grid, feature: Feature) -> String {
    let pairs: Vec<String> = grid
        .feature_cells(feature)
        .into_iter()
        .map(|(row, column)| format!("[{row},{column}]"))
        .collect();
    format!("[{}]", pairs.join(","))
}

/// Parse a feature document into `(row, column)` pairs, without checking them against any grid
pub fn parse_features(text: &str) -> Result<Vec<(i64, i64)>> {
    let pairs: Vec<[i64; 2]> = literal::parse(text)?;
    Ok(pairs.into_iter().map(|[row, column]| (row, column)).collect())
}

/// Set `feature` on every listed cell, leaving every other flag alone; returns how many
/// distinct cells were listed.
///
/// If any coordinate lies outside the grid, nothing is applied and
/// [`MazeError::UnknownFeatureCoordinate`] is returned.
pub fn apply_features(
    grid: &mut Grid,
    feature: Feature,
    coordinates: &[(i64, i64)],
) -> Result<usize> {
    let (rows, columns) = (grid.rows(), grid.columns());
    let cells = coordinates
        .iter()
        .map(
            |&(row, column)| match (usize::try_from(row), usize::try_from(column)) {
                (Ok(r), Ok(c)) if r < rows && c < columns => Ok((r, c)),
                _ => Err(MazeError::UnknownFeatureCoordinate {
                    row,
                    column,
                    rows,
                    columns,
                }),
            },
        )
        .collect::<Result<BTreeSet<(usize, usize)>>>()?;

    for &(row, column) in &cells {
        grid.set_feature(row, column, feature, true)?;
    }
    Ok(cells.len())
}

/// Parse a feature document and apply it to `grid`; returns how many distinct cells were set
pub fn import_features(grid: &mut Grid, feature: Feature, text: &str) -> Result<usize> {
    let coordinates = parse_features(text)?;
    let count = apply_features(grid, feature, &coordinates)?;
    info!("Imported {count} {} location(s)", feature.name());
    Ok(count)
}
