//! Logical grid structs and the wall/feature edit rules.

use crate::error::{MazeError, Result};
use log::debug;
use nalgebra::Point2;

mod cell;

pub use cell::{Cell, Direction, Feature};

/// Rows in a freshly created [`Grid`]
pub const DEFAULT_ROWS: usize = 6;
/// Columns in a freshly created [`Grid`]
pub const DEFAULT_COLUMNS: usize = 6;

/// One set wall edge, in grid coordinates.
///
/// Grid coordinates put the top left corner of cell `(row, col)` at `(col, row)`,
/// with y increasing downwards.
#[derive(Clone, Debug, PartialEq)]
pub struct WallSegment {
    /// One end of the edge
    pub start: Point2<f32>,
    /// The other end of the edge
    pub end: Point2<f32>,
    /// Whether the edge lies on the outer perimeter of the grid
    pub boundary: bool,
}

/// Grid coordinates of the two ends of one side of `(row, column)`
pub fn edge_endpoints(row: usize, column: usize, direction: Direction) -> (Point2<f32>, Point2<f32>) {
    let (x, y) = (column as f32, row as f32);
    let ((x1, y1), (x2, y2)) = match direction {
        Direction::Top => ((x, y), (x + 1.0, y)),
        Direction::Bottom => ((x, y + 1.0), (x + 1.0, y + 1.0)),
        Direction::Left => ((x, y), (x, y + 1.0)),
        Direction::Right => ((x + 1.0, y), (x + 1.0, y + 1.0)),
    };
    (Point2::new(x1, y1), Point2::new(x2, y2))
}

/// A single edit that can be applied to a [`Grid`]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EditAction {
    /// See [`Grid::toggle_wall`]
    ToggleWall {
        /// Row of the clicked cell
        row: usize,
        /// Column of the clicked cell
        column: usize,
        /// Side of the clicked cell
        direction: Direction,
    },
    /// See [`Grid::toggle_feature`]
    ToggleFeature {
        /// Row of the clicked cell
        row: usize,
        /// Column of the clicked cell
        column: usize,
    },
}

/// A rectangular maze of [`Cell`]s.
///
/// The grid is indexed by `(row, column)`, row 0 at the top. Every interior edge is stored on both
/// of the cells that share it, and the two flags always agree.
///
/// # Examples
///
/// ```
/// use maze_editor::grid::{Direction, Grid};
///
/// let mut grid = Grid::default();
/// grid.toggle_wall(2, 3, Direction::Left).unwrap();
///
/// assert!(grid.cell(2, 3).unwrap().left);
/// assert!(grid.cell(2, 2).unwrap().right);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    columns: usize,
    cells: Vec<Vec<Cell>>,
}

impl Default for Grid {
    fn default() -> Self {
        Self::blank(DEFAULT_ROWS, DEFAULT_COLUMNS)
    }
}

fn validate_dimensions(rows: usize, columns: usize) -> Result<()> {
    if rows == 0 || columns == 0 {
        return Err(MazeError::InvalidDimension { rows, columns });
    }
    Ok(())
}

impl Grid {
    /// Create a grid with no walls and no features
    pub fn new(rows: usize, columns: usize) -> Result<Self> {
        validate_dimensions(rows, columns)?;
        Ok(Self::blank(rows, columns))
    }

    fn blank(rows: usize, columns: usize) -> Self {
        Self {
            rows,
            columns,
            cells: vec![vec![Cell::default(); columns]; rows],
        }
    }

    /// Build a grid from rows of cells.
    ///
    /// The rows must be non-empty, all of the same length, and every interior edge must be set
    /// on both sides or neither.
    pub fn from_cells(cells: Vec<Vec<Cell>>) -> Result<Self> {
        let rows = cells.len();
        let columns = cells.first().map(Vec::len).unwrap_or(0);
        if rows == 0 || columns == 0 {
            return Err(MazeError::malformed("a maze needs at least one row and one column"));
        }
        if let Some(row) = cells.iter().position(|r| r.len() != columns) {
            return Err(MazeError::malformed(format!(
                "row {row} has {} cells but row 0 has {columns}",
                cells[row].len()
            )));
        }
        let grid = Self {
            rows,
            columns,
            cells,
        };
        if let Some((row, column, direction)) = grid.wall_symmetry_violation() {
            return Err(MazeError::malformed(format!(
                "{:?} wall of cell ({row}, {column}) does not match its neighbor",
                direction
            )));
        }
        Ok(grid)
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    pub fn columns(&self) -> usize {
        self.columns
    }

    fn check_bounds(&self, row: usize, column: usize) -> Result<()> {
        if row >= self.rows || column >= self.columns {
            return Err(MazeError::OutOfBounds {
                row,
                column,
                rows: self.rows,
                columns: self.columns,
            });
        }
        Ok(())
    }

    /// Returns the cell at the given position
    ///
    /// # Examples
    ///
    /// ```
    /// use maze_editor::grid::Grid;
    ///
    /// let grid = Grid::default();
    /// assert!(grid.cell(5, 5).is_ok());
    /// assert!(grid.cell(6, 0).is_err());
    /// ```
    pub fn cell(&self, row: usize, column: usize) -> Result<&Cell> {
        self.check_bounds(row, column)?;
        Ok(&self.cells[row][column])
    }

    /// All rows of cells, top to bottom
    pub fn cells(&self) -> &[Vec<Cell>] {
        &self.cells
    }

    /// Iterates over `(row, column, cell)` in row-major order
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, &Cell)> {
        self.cells.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .map(move |(column, cell)| (row, column, cell))
        })
    }

    /// Neighbor of `(row, column)` in the given direction, if it is inside the grid
    fn neighbor(&self, row: usize, column: usize, direction: Direction) -> Option<(usize, usize)> {
        let (dr, dc) = direction.offset();
        let row = row.checked_add_signed(dr)?;
        let column = column.checked_add_signed(dc)?;
        (row < self.rows && column < self.columns).then_some((row, column))
    }

    /// Whether the given side of `(row, column)` is on the outer perimeter
    pub fn is_boundary(&self, row: usize, column: usize, direction: Direction) -> bool {
        self.neighbor(row, column, direction).is_none()
    }

    /// Throw away every cell and start over with a blank grid of the new size
    pub fn resize(&mut self, rows: usize, columns: usize) -> Result<()> {
        validate_dimensions(rows, columns)?;
        debug!(
            "Resizing grid from {}x{} to {rows}x{columns}",
            self.rows, self.columns
        );
        *self = Self::blank(rows, columns);
        Ok(())
    }

    /// Flip one wall of `(row, column)`.
    ///
    /// If the edge is shared with a neighbor, the neighbor's opposite wall is set to the same new
    /// value so both sides keep agreeing.
    pub fn toggle_wall(&mut self, row: usize, column: usize, direction: Direction) -> Result<()> {
        self.check_bounds(row, column)?;
        let cell = &mut self.cells[row][column];
        let value = !cell.has_wall(direction);
        cell.set_wall(direction, value);
        if let Some((n_row, n_column)) = self.neighbor(row, column, direction) {
            self.cells[n_row][n_column].set_wall(direction.opposite(), value);
        }
        debug!("{:?} wall of ({row}, {column}) is now {value}", direction);
        Ok(())
    }

    /// Advance the feature state of `(row, column)`; see [`Cell::cycle_feature`]
    pub fn toggle_feature(&mut self, row: usize, column: usize) -> Result<()> {
        self.check_bounds(row, column)?;
        let cell = &mut self.cells[row][column];
        cell.cycle_feature();
        debug!(
            "Features of ({row}, {column}) are now gold={} helipad={}",
            cell.gold, cell.helipad
        );
        Ok(())
    }

    /// Set a single feature flag without touching the other one
    pub fn set_feature(
        &mut self,
        row: usize,
        column: usize,
        feature: Feature,
        value: bool,
    ) -> Result<()> {
        self.check_bounds(row, column)?;
        self.cells[row][column].set_feature(feature, value);
        Ok(())
    }

    /// Every perimeter edge as `(row, column, direction)`
    fn boundary_edges(&self) -> Vec<(usize, usize, Direction)> {
        let mut edges = Vec::with_capacity(2 * (self.rows + self.columns));
        for column in 0..self.columns {
            edges.push((0, column, Direction::Top));
            edges.push((self.rows - 1, column, Direction::Bottom));
        }
        for row in 0..self.rows {
            edges.push((row, 0, Direction::Left));
            edges.push((row, self.columns - 1, Direction::Right));
        }
        edges
    }

    /// Clear every perimeter wall if any of them is set, otherwise set all of them
    ///
    /// # Examples
    ///
    /// ```
    /// use maze_editor::grid::{Direction, Grid};
    ///
    /// let mut grid = Grid::new(2, 2).unwrap();
    /// grid.toggle_outer_walls();
    /// assert!(grid.cell(1, 1).unwrap().right);
    ///
    /// grid.toggle_outer_walls();
    /// assert!(!grid.cell(1, 1).unwrap().right);
    /// ```
    pub fn toggle_outer_walls(&mut self) {
        let edges = self.boundary_edges();
        let any_set = edges
            .iter()
            .any(|&(row, column, direction)| self.cells[row][column].has_wall(direction));
        for (row, column, direction) in edges {
            self.cells[row][column].set_wall(direction, !any_set);
        }
        debug!("Outer walls are now {}", !any_set);
    }

    /// Apply an edit produced by the hit tester
    pub fn apply(&mut self, action: EditAction) -> Result<()> {
        match action {
            EditAction::ToggleWall {
                row,
                column,
                direction,
            } => self.toggle_wall(row, column, direction),
            EditAction::ToggleFeature { row, column } => self.toggle_feature(row, column),
        }
    }

    /// Returns the first interior edge whose two sides disagree, if any
    pub fn wall_symmetry_violation(&self) -> Option<(usize, usize, Direction)> {
        for (row, column, cell) in self.iter_cells() {
            for direction in [Direction::Right, Direction::Bottom] {
                if let Some((n_row, n_column)) = self.neighbor(row, column, direction) {
                    let other = &self.cells[n_row][n_column];
                    if cell.has_wall(direction) != other.has_wall(direction.opposite()) {
                        return Some((row, column, direction));
                    }
                }
            }
        }
        None
    }

    /// Returns every set wall exactly once, for drawing.
    ///
    /// # Examples
    ///
    /// ```
    /// use maze_editor::grid::{Direction, Grid};
    ///
    /// let mut grid = Grid::new(2, 2).unwrap();
    /// grid.toggle_wall(0, 0, Direction::Right).unwrap();
    /// grid.toggle_wall(1, 1, Direction::Bottom).unwrap();
    ///
    /// let walls = grid.walls();
    /// assert_eq!(walls.len(), 2);
    /// assert_eq!(walls.iter().filter(|w| w.boundary).count(), 1);
    /// ```
    pub fn walls(&self) -> Vec<WallSegment> {
        let mut walls = vec![];
        for (row, column, cell) in self.iter_cells() {
            // interior edges are only reported from the top/left cell
            let mut sides = vec![Direction::Right, Direction::Bottom];
            if row == 0 {
                sides.push(Direction::Top);
            }
            if column == 0 {
                sides.push(Direction::Left);
            }
            for direction in sides {
                if !cell.has_wall(direction) {
                    continue;
                }
                let (start, end) = edge_endpoints(row, column, direction);
                walls.push(WallSegment {
                    start,
                    end,
                    boundary: self.is_boundary(row, column, direction),
                });
            }
        }
        walls
    }

    /// Positions of the cells with the given feature, in row-major order
    pub fn feature_cells(&self, feature: Feature) -> Vec<(usize, usize)> {
        self.iter_cells()
            .filter(|(_, _, cell)| cell.has_feature(feature))
            .map(|(row, column, _)| (row, column))
            .collect()
    }

    /// A copy of this grid with every feature flag cleared
    pub fn walls_only(&self) -> Self {
        Self {
            rows: self.rows,
            columns: self.columns,
            cells: self
                .cells
                .iter()
                .map(|row| row.iter().map(Cell::walls_only).collect())
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    const DIRECTIONS: [Direction; 4] = Direction::FORMAT_ORDER;

    fn random_direction(rng: &mut StdRng) -> Direction {
        DIRECTIONS[rng.gen_range(0..4)]
    }

    #[test]
    fn default_grid_is_blank() {
        let grid = Grid::default();
        assert_eq!(grid.rows(), 6);
        assert_eq!(grid.columns(), 6);
        assert!(grid.iter_cells().all(|(_, _, c)| *c == Cell::default()));
        assert!(grid.walls().is_empty());
    }

    #[test]
    fn new_rejects_zero_dimensions() {
        assert!(matches!(
            Grid::new(0, 3),
            Err(MazeError::InvalidDimension { rows: 0, columns: 3 })
        ));
        assert!(matches!(
            Grid::new(3, 0),
            Err(MazeError::InvalidDimension { .. })
        ));
        assert!(Grid::new(1, 1).is_ok());
    }

    #[test]
    fn toggle_wall_mirrors_neighbor() {
        let mut grid = Grid::default();
        grid.toggle_wall(2, 3, Direction::Left).unwrap();
        assert!(grid.cell(2, 3).unwrap().left);
        assert!(grid.cell(2, 2).unwrap().right);

        grid.toggle_wall(2, 3, Direction::Top).unwrap();
        assert!(grid.cell(2, 3).unwrap().top);
        assert!(grid.cell(1, 3).unwrap().bottom);

        grid.toggle_wall(2, 2, Direction::Right).unwrap();
        assert!(!grid.cell(2, 3).unwrap().left);
        assert!(!grid.cell(2, 2).unwrap().right);
    }

    #[test]
    fn toggle_boundary_wall_has_no_partner() {
        let mut grid = Grid::new(2, 2).unwrap();
        grid.toggle_wall(0, 0, Direction::Top).unwrap();
        grid.toggle_wall(1, 1, Direction::Right).unwrap();
        let cells: Vec<_> = grid.iter_cells().map(|(_, _, c)| *c).collect();
        assert_eq!(cells.iter().filter(|c| c.any_wall()).count(), 2);
        assert!(grid.is_boundary(0, 0, Direction::Top));
        assert!(!grid.is_boundary(0, 0, Direction::Bottom));
    }

    #[test]
    fn out_of_bounds_edits_are_rejected() {
        let mut grid = Grid::new(3, 4).unwrap();
        let before = grid.clone();
        assert!(matches!(
            grid.toggle_wall(3, 0, Direction::Left),
            Err(MazeError::OutOfBounds { row: 3, column: 0, rows: 3, columns: 4 })
        ));
        assert!(grid.toggle_wall(0, 4, Direction::Left).is_err());
        assert!(grid.toggle_feature(9, 9).is_err());
        assert!(grid.set_feature(0, 4, Feature::Gold, true).is_err());
        assert_eq!(grid, before);
    }

    #[test]
    fn wall_symmetry_holds_after_random_toggles() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let rows = rng.gen_range(1..=12);
            let columns = rng.gen_range(1..=12);
            let mut grid = Grid::new(rows, columns).unwrap();
            for _ in 0..200 {
                let row = rng.gen_range(0..rows);
                let column = rng.gen_range(0..columns);
                grid.toggle_wall(row, column, random_direction(&mut rng))
                    .unwrap();
                assert_eq!(grid.wall_symmetry_violation(), None);
            }
        }
    }

    #[test]
    fn double_toggle_restores_grid() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut grid = Grid::new(8, 5).unwrap();
        for _ in 0..100 {
            let row = rng.gen_range(0..8);
            let column = rng.gen_range(0..5);
            grid.toggle_wall(row, column, random_direction(&mut rng))
                .unwrap();
        }
        for _ in 0..100 {
            let before = grid.clone();
            let row = rng.gen_range(0..8);
            let column = rng.gen_range(0..5);
            let direction = random_direction(&mut rng);
            grid.toggle_wall(row, column, direction).unwrap();
            assert_ne!(grid, before);
            grid.toggle_wall(row, column, direction).unwrap();
            assert_eq!(grid, before);
        }
    }

    #[test]
    fn toggle_feature_cycles_four_states() {
        let mut grid = Grid::default();
        let mut seen = vec![];
        for _ in 0..4 {
            grid.toggle_feature(1, 1).unwrap();
            let cell = grid.cell(1, 1).unwrap();
            seen.push((cell.gold, cell.helipad));
        }
        assert_eq!(
            seen,
            vec![(true, false), (false, true), (true, true), (false, false)]
        );
        assert_eq!(grid, Grid::default());
    }

    #[test]
    fn outer_walls_toggle_all_or_nothing() {
        let mut grid = Grid::new(3, 4).unwrap();
        grid.toggle_outer_walls();
        for (row, column, cell) in grid.iter_cells() {
            assert_eq!(cell.top, row == 0);
            assert_eq!(cell.bottom, row == 2);
            assert_eq!(cell.left, column == 0);
            assert_eq!(cell.right, column == 3);
        }
        assert_eq!(grid.walls().len(), 2 * (3 + 4));
        assert!(grid.walls().iter().all(|w| w.boundary));

        grid.toggle_outer_walls();
        assert_eq!(grid, Grid::new(3, 4).unwrap());
    }

    #[test]
    fn outer_walls_clear_when_any_is_set() {
        let mut grid = Grid::new(3, 3).unwrap();
        grid.toggle_wall(1, 2, Direction::Right).unwrap();
        grid.toggle_wall(1, 1, Direction::Top).unwrap();
        grid.toggle_outer_walls();
        assert!(!grid.cell(1, 2).unwrap().right);
        // interior walls are untouched
        assert!(grid.cell(1, 1).unwrap().top);
        assert!(grid.cell(0, 1).unwrap().bottom);
    }

    #[test]
    fn outer_walls_double_toggle_restores_partial_perimeter() {
        let mut grid = Grid::new(4, 4).unwrap();
        grid.toggle_wall(0, 2, Direction::Top).unwrap();
        grid.toggle_outer_walls();
        grid.toggle_outer_walls();
        // any set -> cleared, then none set -> all set
        assert!(grid.cell(3, 3).unwrap().bottom);
        assert!(grid.cell(0, 2).unwrap().top);
    }

    #[test]
    fn outer_walls_on_single_cell() {
        let mut grid = Grid::new(1, 1).unwrap();
        grid.toggle_outer_walls();
        let cell = grid.cell(0, 0).unwrap();
        assert!(cell.top && cell.bottom && cell.left && cell.right);
    }

    #[test]
    fn resize_discards_everything() {
        let mut grid = Grid::default();
        grid.toggle_wall(1, 1, Direction::Right).unwrap();
        grid.toggle_feature(0, 0).unwrap();
        grid.resize(3, 3).unwrap();
        assert_eq!(grid, Grid::new(3, 3).unwrap());
        assert_eq!(grid.cells().len(), 3);
        assert!(grid.cells().iter().all(|row| row.len() == 3));
    }

    #[test]
    fn resize_rejects_zero_without_mutating() {
        let mut grid = Grid::default();
        grid.toggle_wall(1, 1, Direction::Right).unwrap();
        let before = grid.clone();
        assert!(matches!(
            grid.resize(0, 4),
            Err(MazeError::InvalidDimension { .. })
        ));
        assert_eq!(grid, before);
    }

    #[test]
    fn apply_dispatches_actions() {
        let mut grid = Grid::default();
        grid.apply(EditAction::ToggleWall {
            row: 0,
            column: 0,
            direction: Direction::Bottom,
        })
        .unwrap();
        grid.apply(EditAction::ToggleFeature { row: 0, column: 0 })
            .unwrap();
        let cell = grid.cell(0, 0).unwrap();
        assert!(cell.bottom && cell.gold);
        assert!(grid.cell(1, 0).unwrap().top);
        assert!(grid
            .apply(EditAction::ToggleFeature { row: 6, column: 0 })
            .is_err());
    }

    #[test]
    fn walls_reports_interior_edges_once() {
        let mut grid = Grid::new(2, 3).unwrap();
        grid.toggle_wall(0, 1, Direction::Left).unwrap();
        grid.toggle_wall(1, 2, Direction::Top).unwrap();
        let walls = grid.walls();
        assert_eq!(
            walls,
            vec![
                WallSegment {
                    start: Point2::new(1.0, 0.0),
                    end: Point2::new(1.0, 1.0),
                    boundary: false,
                },
                WallSegment {
                    start: Point2::new(2.0, 1.0),
                    end: Point2::new(3.0, 1.0),
                    boundary: false,
                },
            ]
        );
    }

    #[test]
    fn from_cells_validates_shape_and_symmetry() {
        assert!(matches!(
            Grid::from_cells(vec![]),
            Err(MazeError::MalformedDocument(_))
        ));
        assert!(Grid::from_cells(vec![vec![]]).is_err());
        assert!(Grid::from_cells(vec![vec![Cell::default(); 2], vec![Cell::default()]]).is_err());

        let lopsided = vec![vec![
            Cell {
                right: true,
                ..Default::default()
            },
            Cell::default(),
        ]];
        assert!(Grid::from_cells(lopsided).is_err());

        let matched = vec![vec![
            Cell {
                right: true,
                ..Default::default()
            },
            Cell {
                left: true,
                ..Default::default()
            },
        ]];
        let grid = Grid::from_cells(matched).unwrap();
        assert_eq!((grid.rows(), grid.columns()), (1, 2));
    }

    #[test]
    fn every_constructor_gives_addressable_cells() {
        let mut resized = Grid::default();
        resized.resize(4, 7).unwrap();
        let grids = [
            Grid::default(),
            Grid::new(3, 5).unwrap(),
            resized,
            Grid::from_cells(vec![vec![Cell::default(); 2]; 3]).unwrap(),
            Grid::new(2, 2).unwrap().walls_only(),
        ];
        for grid in grids {
            assert_eq!(grid.cells().len(), grid.rows());
            for row in 0..grid.rows() {
                assert_eq!(grid.cells()[row].len(), grid.columns());
                for column in 0..grid.columns() {
                    assert!(grid.cell(row, column).is_ok());
                }
            }
            assert_eq!(grid.wall_symmetry_violation(), None);
        }
    }

    #[test]
    fn feature_cells_are_row_major() {
        let mut grid = Grid::new(3, 3).unwrap();
        grid.set_feature(2, 0, Feature::Gold, true).unwrap();
        grid.set_feature(0, 2, Feature::Gold, true).unwrap();
        grid.set_feature(1, 1, Feature::Helipad, true).unwrap();
        assert_eq!(grid.feature_cells(Feature::Gold), vec![(0, 2), (2, 0)]);
        assert_eq!(grid.feature_cells(Feature::Helipad), vec![(1, 1)]);
        assert_eq!(grid.walls_only(), Grid::new(3, 3).unwrap());
    }
}
