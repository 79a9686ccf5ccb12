use eframe::egui::Color32;

pub const BOUNDARY_WALL_COLOR: Color32 = Color32::WHITE;
pub const INTERIOR_WALL_COLOR: Color32 = Color32::LIGHT_GRAY;
pub const GRID_LINE_COLOR: Color32 = Color32::from_rgba_premultiplied(60, 60, 60, 255);

pub const GOLD_COLOR: Color32 = Color32::GOLD;
pub const HELIPAD_COLOR: Color32 = Color32::from_rgb(80, 160, 255);

pub const HOVER_COLOR: Color32 = Color32::from_rgba_premultiplied(50, 50, 0, 50);
pub const ERROR_COLOR: Color32 = Color32::LIGHT_RED;

pub const BOUNDARY_WALL_WIDTH: f32 = 4.0;
pub const INTERIOR_WALL_WIDTH: f32 = 2.0;
