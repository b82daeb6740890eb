//! Theme constants for the tic-tac-toe GUI

use egui::Color32;

// Board colors
pub const BOARD_BG: Color32 = Color32::from_rgb(36, 39, 46);
pub const GRID_LINE: Color32 = Color32::from_rgb(120, 128, 145);

// Marks
pub const X_COLOR: Color32 = Color32::from_rgb(235, 95, 80);
pub const O_COLOR: Color32 = Color32::from_rgb(90, 170, 235);

// Markers
pub const LAST_MOVE_MARKER: Color32 = Color32::from_rgb(240, 200, 70);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(80, 220, 110);

pub fn hover_preview() -> Color32 {
    Color32::from_rgba_unmultiplied(235, 95, 80, 70)
}

// Panel colors
pub const PANEL_BG: Color32 = Color32::from_rgb(25, 27, 31);
pub const CARD_BG: Color32 = Color32::from_rgb(35, 38, 43);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

// Status colors
pub const STATUS_TURN: Color32 = Color32::from_rgb(80, 200, 120);
pub const STATUS_THINKING: Color32 = Color32::from_rgb(255, 180, 50);
pub const STATUS_WARNING: Color32 = Color32::from_rgb(80, 60, 30);

// Sizes
pub const BOARD_MARGIN: f32 = 24.0;
pub const GRID_LINE_WIDTH: f32 = 4.0;
pub const MARK_STROKE_WIDTH: f32 = 8.0;
pub const MARK_RADIUS_RATIO: f32 = 0.3;
pub const LAST_MOVE_MARKER_RADIUS: f32 = 5.0;
pub const WIN_LINE_WIDTH: f32 = 6.0;
