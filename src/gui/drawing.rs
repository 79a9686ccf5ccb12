use crate::grid::{edge_endpoints, Feature};
use crate::gui::colors::*;
use crate::gui::App;
use crate::hit_test::Zone;
use eframe::egui::{Painter, Pos2, Rect, Rounding, Stroke};
use nalgebra::Point2;

pub fn draw_grid(app: &App, painter: &Painter) {
    let wts = app.world_to_screen;
    let (rows, columns) = (app.grid.rows(), app.grid.columns());

    // faint cell outlines so empty cells are visible
    for row in 0..=rows {
        painter.line_segment(
            [
                wts.map_point(Pos2::new(0.0, row as f32)),
                wts.map_point(Pos2::new(columns as f32, row as f32)),
            ],
            Stroke::new(1.0, GRID_LINE_COLOR),
        );
    }
    for column in 0..=columns {
        painter.line_segment(
            [
                wts.map_point(Pos2::new(column as f32, 0.0)),
                wts.map_point(Pos2::new(column as f32, rows as f32)),
            ],
            Stroke::new(1.0, GRID_LINE_COLOR),
        );
    }

    for wall in app.grid.walls() {
        let (p1, p2) = wts.map_segment(&wall);
        let stroke = if wall.boundary {
            Stroke::new(BOUNDARY_WALL_WIDTH, BOUNDARY_WALL_COLOR)
        } else {
            Stroke::new(INTERIOR_WALL_WIDTH, INTERIOR_WALL_COLOR)
        };
        painter.line_segment([p1, p2], stroke);
    }
}

pub fn draw_features(app: &App, painter: &Painter) {
    let wts = app.world_to_screen;
    let radius = wts.map_dist(0.15);

    for feature in Feature::get_all() {
        // gold sits left of center, helipad right, so a cell with both shows both
        let dx = match feature {
            Feature::Gold => 0.35,
            Feature::Helipad => 0.65,
        };
        for (row, column) in app.grid.feature_cells(feature) {
            let center = wts.map_point(Pos2::new(column as f32 + dx, row as f32 + 0.5));
            match feature {
                Feature::Gold => {
                    painter.circle_filled(center, radius, GOLD_COLOR);
                }
                Feature::Helipad => {
                    painter.circle_stroke(center, radius, Stroke::new(2.0, HELIPAD_COLOR));
                }
            }
        }
    }
}

/// Highlight whatever a click at the current pointer position would edit
pub fn draw_hover(app: &App, painter: &Painter) {
    let Some(pointer) = app.pointer_pos else {
        return;
    };
    let wts = app.world_to_screen;
    let (rows, columns) = (app.grid.rows(), app.grid.columns());
    let bounds = wts.grid_bounds(rows, columns);
    let tester = app.settings.hit_tester(app.mode);
    let Some(target) = tester.locate(rows, columns, &bounds, Point2::new(pointer.x, pointer.y))
    else {
        return;
    };

    let (x, y) = (target.column as f32, target.row as f32);
    match target.zone {
        Zone::Wall(direction) => {
            let (start, end) = edge_endpoints(target.row, target.column, direction);
            painter.line_segment(
                [wts.map_point2(start), wts.map_point2(end)],
                Stroke::new(BOUNDARY_WALL_WIDTH * 2.0, HOVER_COLOR),
            );
        }
        Zone::Center if tester.features_enabled => {
            painter.rect_filled(
                Rect::from_two_pos(
                    wts.map_point(Pos2::new(x, y)),
                    wts.map_point(Pos2::new(x + 1.0, y + 1.0)),
                ),
                Rounding::ZERO,
                HOVER_COLOR,
            );
        }
        Zone::Center => {}
    }
}
