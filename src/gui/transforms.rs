//! Transforms between coordinate systems (grid cells <=> screen pixels).

use crate::grid::WallSegment;
use crate::hit_test::GridBounds;
use eframe::egui::Pos2;
use nalgebra::Point2;

/// A uniform scale followed by a translation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    scale: f32,
    offset_x: f32,
    offset_y: f32,
}

impl Transform {
    /// Fits a `rows` x `columns` grid, plus `margin` cells on every side, inside the screen rect
    /// `(top_left, bottom_right)`, centered along whichever axis has room to spare.
    pub fn for_grid(
        rows: usize,
        columns: usize,
        margin: f32,
        top_left: Pos2,
        bottom_right: Pos2,
    ) -> Self {
        let (columns, rows) = (columns as f32, rows as f32);
        let scale = ((bottom_right.x - top_left.x) / (columns + 2.0 * margin))
            .min((bottom_right.y - top_left.y) / (rows + 2.0 * margin));
        let center = Pos2::new(
            (top_left.x + bottom_right.x) / 2.0,
            (top_left.y + bottom_right.y) / 2.0,
        );
        Self {
            scale,
            offset_x: center.x - columns / 2.0 * scale,
            offset_y: center.y - rows / 2.0 * scale,
        }
    }

    /// Returns the inverse `Transform`, or `None` if it is not invertible.
    pub fn inverse(&self) -> Option<Self> {
        if self.scale == 0.0 || !self.scale.is_finite() {
            return None;
        }
        Some(Self {
            scale: self.scale.recip(),
            offset_x: -self.offset_x / self.scale,
            offset_y: -self.offset_y / self.scale,
        })
    }

    /// Applies the transformation to a point.
    pub fn map_point(&self, p: Pos2) -> Pos2 {
        Pos2::new(
            p.x * self.scale + self.offset_x,
            p.y * self.scale + self.offset_y,
        )
    }

    /// Applies the transformation to a [`Point2`].
    pub fn map_point2(&self, p: Point2<f32>) -> Pos2 {
        self.map_point(Pos2::new(p.x, p.y))
    }

    /// Scales a distance.
    pub fn map_dist(&self, dist: f32) -> f32 {
        dist * self.scale.abs()
    }

    /// Returns the two ends of the [`WallSegment`] in screen coordinates.
    ///
    /// # Examples
    ///
    /// ```
    /// use eframe::egui::Pos2;
    /// use maze_editor::grid::{Direction, Grid};
    /// use maze_editor::gui::transforms::Transform;
    ///
    /// let world_to_screen = Transform::for_grid(
    ///     2,
    ///     2,
    ///     0.0,
    ///     Pos2::new(0.0, 0.0),
    ///     Pos2::new(200.0, 200.0),
    /// );
    /// let mut grid = Grid::new(2, 2).unwrap();
    /// grid.toggle_wall(0, 0, Direction::Right).unwrap();
    ///
    /// let (start, end) = world_to_screen.map_segment(&grid.walls()[0]);
    /// assert_eq!(start, Pos2::new(100.0, 0.0));
    /// assert_eq!(end, Pos2::new(100.0, 100.0));
    /// ```
    pub fn map_segment(&self, wall: &WallSegment) -> (Pos2, Pos2) {
        (self.map_point2(wall.start), self.map_point2(wall.end))
    }

    /// The screen rectangle covered by a `rows` x `columns` grid, for hit testing.
    pub fn grid_bounds(&self, rows: usize, columns: usize) -> GridBounds {
        let p1 = self.map_point(Pos2::new(0.0, 0.0));
        let p2 = self.map_point(Pos2::new(columns as f32, rows as f32));
        GridBounds::from_corners(Point2::new(p1.x, p1.y), Point2::new(p2.x, p2.y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wide_screen_pads_horizontally() {
        let t = Transform::for_grid(10, 10, 0.0, Pos2::new(0.0, 0.0), Pos2::new(200.0, 100.0));
        assert_eq!(t.map_point(Pos2::new(0.0, 0.0)), Pos2::new(50.0, 0.0));
        assert_eq!(t.map_point(Pos2::new(10.0, 10.0)), Pos2::new(150.0, 100.0));
        assert_eq!(t.map_dist(1.0), 10.0);
    }

    #[test]
    fn tall_screen_pads_vertically() {
        let t = Transform::for_grid(10, 10, 0.0, Pos2::new(0.0, 0.0), Pos2::new(100.0, 200.0));
        assert_eq!(t.map_point(Pos2::new(0.0, 0.0)), Pos2::new(0.0, 50.0));
        assert_eq!(t.map_point(Pos2::new(10.0, 10.0)), Pos2::new(100.0, 150.0));
    }

    #[test]
    fn margin_shrinks_grid() {
        // 2 columns + 2 * 1 margin = 4 cells across 400 pixels
        let t = Transform::for_grid(2, 2, 1.0, Pos2::new(0.0, 0.0), Pos2::new(400.0, 400.0));
        assert_eq!(t.map_point(Pos2::new(0.0, 0.0)), Pos2::new(100.0, 100.0));
        assert_eq!(t.map_point(Pos2::new(2.0, 2.0)), Pos2::new(300.0, 300.0));
    }

    #[test]
    fn inverse_undoes_transform() {
        let t = Transform::for_grid(6, 4, 0.5, Pos2::new(10.0, 20.0), Pos2::new(410.0, 620.0));
        let inv = t.inverse().unwrap();
        let p = Pos2::new(3.25, 1.5);
        let back = inv.map_point(t.map_point(p));
        assert!((back.x - p.x).abs() < 1e-4);
        assert!((back.y - p.y).abs() < 1e-4);
    }

    #[test]
    fn empty_screen_has_no_inverse() {
        let t = Transform::for_grid(1, 1, 0.0, Pos2::new(0.0, 0.0), Pos2::new(0.0, 0.0));
        assert!(t.inverse().is_none());
    }

    #[test]
    fn grid_bounds_match_cell_corners() {
        let t = Transform::for_grid(3, 3, 0.0, Pos2::new(0.0, 0.0), Pos2::new(300.0, 300.0));
        let bounds = t.grid_bounds(3, 3);
        assert_eq!(
            bounds,
            GridBounds {
                left: 0.0,
                top: 0.0,
                right: 300.0,
                bottom: 300.0
            }
        );
    }
}
