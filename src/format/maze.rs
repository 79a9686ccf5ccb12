//! The maze document: a bracketed grid of cells, each a bracketed list of wall letters.
//!
//! ```text
//! [[[],   []],
//! [[R,B], [L]]]
//! ```
//!
//! Cells list their walls in the order `R`, `T`, `L`, `B`. Features are never written here; see
//! [`features`](super::features).

use crate::error::{MazeError, Result};
use crate::format::literal;
use crate::grid::{Cell, Direction, Grid};
use log::debug;

const CELL_SEPARATOR: &str = ", ";
const ROW_SEPARATOR: &str = ",\n";

/// How cells are padded so that columns line up
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Alignment {
    /// Every cell except the last of each row is padded to the widest cell. The very first cell
    /// of the document is padded one character less when it is not itself the widest, since it
    /// shares its line with the opening `[[`.
    #[default]
    Standard,
    /// Every cell except the last of each row is padded to the widest cell, with no exception for
    /// the first cell. Written by the older wall-only editor.
    Uniform,
}

/// The bracketed wall list of one cell, e.g. `[R,L]`
fn cell_token(cell: &Cell) -> String {
    let letters: Vec<String> = Direction::FORMAT_ORDER
        .iter()
        .filter(|direction| cell.has_wall(**direction))
        .map(|direction| direction.letter().to_string())
        .collect();
    format!("[{}]", letters.join(","))
}

/// Serialize the walls of `grid` with [`Alignment::Standard`]
///
/// # Examples
///
/// ```
/// use maze_editor::format::serialize_maze;
/// use maze_editor::grid::{Direction, Grid};
///
/// let mut grid = Grid::new(2, 2).unwrap();
/// grid.toggle_wall(1, 0, Direction::Right).unwrap();
/// grid.toggle_wall(1, 0, Direction::Bottom).unwrap();
///
/// assert_eq!(serialize_maze(&grid), "[[[],   []],\n[[R,B], [L]]]");
/// ```
pub fn serialize_maze(grid: &Grid) -> String {
    serialize_maze_with(grid, Alignment::Standard)
}

/// Serialize the walls of `grid` using the given column alignment
pub fn serialize_maze_with(grid: &Grid, alignment: Alignment) -> String {
    let last_column = grid.columns() - 1;
    let tokens: Vec<Vec<String>> = grid
        .cells()
        .iter()
        .map(|row| {
            row.iter()
                .enumerate()
                .map(|(column, cell)| {
                    let mut token = cell_token(cell);
                    if column < last_column {
                        token.push_str(CELL_SEPARATOR);
                    }
                    token
                })
                .collect()
        })
        .collect();

    let reference = tokens[0][0].len();
    let widest = tokens.iter().flatten().map(String::len).max().unwrap_or(0);
    let width = reference.max(widest);
    let first_width = match alignment {
        Alignment::Standard if widest > reference => widest - 1,
        _ => width,
    };

    let rows: Vec<String> = tokens
        .iter()
        .enumerate()
        .map(|(row, tokens)| {
            let cells: String = tokens
                .iter()
                .enumerate()
                .map(|(column, token)| {
                    if column == last_column {
                        token.clone()
                    } else if row == 0 && column == 0 {
                        format!("{token:<first_width$}")
                    } else {
                        format!("{token:<width$}")
                    }
                })
                .collect();
            format!("[{cells}]")
        })
        .collect();

    format!("[{}]", rows.join(ROW_SEPARATOR))
}

fn cell_from_walls(walls: &[String], row: usize, column: usize) -> Result<Cell> {
    let mut cell = Cell::default();
    for wall in walls {
        let mut letters = wall.chars();
        let direction = match (letters.next().and_then(Direction::from_letter), letters.next()) {
            (Some(direction), None) => direction,
            _ => {
                return Err(MazeError::malformed(format!(
                    "cell ({row}, {column}) has unknown wall `{wall}`"
                )))
            }
        };
        cell.set_wall(direction, true);
    }
    Ok(cell)
}

/// Parse a maze document into a new [`Grid`] with every feature cleared.
///
/// The grid takes the document's own dimensions. Rows of differing lengths and interior walls
/// set on only one side are rejected.
pub fn parse_maze(text: &str) -> Result<Grid> {
    let rows: Vec<Vec<Vec<String>>> = literal::parse(&literal::quote_wall_letters(text))?;

    let cells = rows
        .iter()
        .enumerate()
        .map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .map(|(column, walls)| cell_from_walls(walls, row, column))
                .collect::<Result<Vec<Cell>>>()
        })
        .collect::<Result<Vec<Vec<Cell>>>>()?;

    let grid = Grid::from_cells(cells)?;
    debug!("Parsed {}x{} maze", grid.rows(), grid.columns());
    Ok(grid)
}
