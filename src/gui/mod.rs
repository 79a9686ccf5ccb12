//! Top-level GUI elements and functionality.

mod colors;
mod drawing;
mod files;
pub mod transforms;

use crate::grid::{Feature, Grid};
use crate::gui::colors::ERROR_COLOR;
use crate::gui::drawing::{draw_features, draw_grid, draw_hover};
use crate::settings::{EditorMode, EditorSettings};
use anyhow::Error;
use eframe::egui;
use eframe::egui::{Pos2, Sense, Visuals};
use log::{error, info};
use nalgebra::Point2;

use self::transforms::Transform;

/// Blank space around the grid, in cells, that still belongs to the canvas
const CANVAS_MARGIN: f32 = 0.5;

/// Launches the GUI application. Blocks until the application has quit.
pub fn run_gui(settings: EditorSettings, grid: Grid) -> eframe::Result {
    let native_options = eframe::NativeOptions::default();
    eframe::run_native(
        "Maze Editor",
        native_options,
        Box::new(|cc| Ok(Box::new(App::new(cc, settings, grid)))),
    )
}

/// Stores all the data needed for the application
pub struct App {
    grid: Grid,
    settings: EditorSettings,
    mode: EditorMode,

    rows_input: usize,
    columns_input: usize,

    world_to_screen: Transform,
    pointer_pos: Option<Pos2>,
    last_error: Option<String>,
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.draw_toolbar(ctx);
        self.draw_status_bar(ctx);
        egui::CentralPanel::default().show(ctx, |ui| self.draw_canvas(ui));
    }
}

impl App {
    fn new(cc: &eframe::CreationContext<'_>, settings: EditorSettings, grid: Grid) -> Self {
        cc.egui_ctx.set_visuals(Visuals::dark());

        Self {
            rows_input: grid.rows(),
            columns_input: grid.columns(),
            mode: settings.mode,
            grid,
            settings,

            world_to_screen: Transform::for_grid(
                1,
                1,
                CANVAS_MARGIN,
                Pos2::new(0.0, 0.0),
                Pos2::new(1.0, 1.0),
            ),
            pointer_pos: None,
            last_error: None,
        }
    }

    /// Swap in a new grid, e.g. after an import
    fn replace_grid(&mut self, grid: Grid) {
        self.rows_input = grid.rows();
        self.columns_input = grid.columns();
        self.grid = grid;
    }

    /// Log and display the error of a failed operation; clears the display on success
    fn report(&mut self, result: Result<(), Error>) {
        match result {
            Ok(()) => self.last_error = None,
            Err(e) => {
                error!("{e:#}");
                self.last_error = Some(format!("{e:#}"));
            }
        }
    }

    fn draw_toolbar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Export maze…").clicked() {
                        ui.close_menu();
                        let result = self.export_maze();
                        self.report(result);
                    }
                    if ui.button("Import maze…").clicked() {
                        ui.close_menu();
                        let result = self.import_maze();
                        self.report(result);
                    }
                    ui.separator();
                    for feature in Feature::get_all() {
                        if ui.button(format!("Export {}…", feature.name())).clicked() {
                            ui.close_menu();
                            let result = self.export_features(feature);
                            self.report(result);
                        }
                        if ui.button(format!("Import {}…", feature.name())).clicked() {
                            ui.close_menu();
                            let result = self.import_features(feature);
                            self.report(result);
                        }
                    }
                });
                ui.separator();

                let max = self.settings.max_dimension;
                ui.label("Rows");
                ui.add(egui::DragValue::new(&mut self.rows_input).range(1..=max));
                ui.label("Columns");
                ui.add(egui::DragValue::new(&mut self.columns_input).range(1..=max));
                if ui.button("Resize").clicked() {
                    let result = self
                        .grid
                        .resize(self.rows_input, self.columns_input)
                        .map_err(Error::from);
                    self.report(result);
                }
                ui.separator();

                if ui.button("Toggle outer walls").clicked() {
                    self.grid.toggle_outer_walls();
                }
                ui.separator();

                ui.selectable_value(&mut self.mode, EditorMode::Walls, "Walls");
                ui.selectable_value(&mut self.mode, EditorMode::Features, "Walls + features");
            });
        });
    }

    fn draw_status_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(format!("{}x{}", self.grid.rows(), self.grid.columns()));
                ui.separator();
                let hovered = self
                    .pointer_pos
                    .and_then(|pos| Some(self.world_to_screen.inverse()?.map_point(pos)));
                ui.label(match hovered {
                    // x is the column, y is the row
                    Some(pos) => format!("(row {:.2}, col {:.2})", pos.y, pos.x),
                    None => String::new(),
                });
                if let Some(e) = &self.last_error {
                    ui.separator();
                    ui.colored_label(ERROR_COLOR, e);
                }
            });
        });
    }

    fn draw_canvas(&mut self, ui: &mut egui::Ui) {
        let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::click());
        let rect = response.rect;
        self.world_to_screen = Transform::for_grid(
            self.grid.rows(),
            self.grid.columns(),
            CANVAS_MARGIN,
            rect.left_top(),
            rect.right_bottom(),
        );
        self.pointer_pos = response.hover_pos();

        if response.clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                self.click(pos);
            }
        }

        draw_grid(self, &painter);
        draw_features(self, &painter);
        draw_hover(self, &painter);
    }

    /// Apply whatever edit the hit tester finds under a click
    fn click(&mut self, pos: Pos2) {
        let (rows, columns) = (self.grid.rows(), self.grid.columns());
        let bounds = self.world_to_screen.grid_bounds(rows, columns);
        let tester = self.settings.hit_tester(self.mode);
        if let Some(action) = tester.action(rows, columns, &bounds, Point2::new(pos.x, pos.y)) {
            info!("Applying {action:?}");
            let result = self.grid.apply(action).map_err(Error::from);
            self.report(result);
        }
    }
}
