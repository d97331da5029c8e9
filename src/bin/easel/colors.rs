//! Color constants for the canvas and sidebar widgets.

use eframe::egui::Color32;

// Canvas
pub const CANVAS_BACKGROUND: Color32 = Color32::from_rgb(34, 34, 38);
pub const ARTBOARD_FILL: Color32 = Color32::from_rgb(248, 248, 246);
pub const ARTBOARD_OUTLINE: Color32 = Color32::from_rgb(64, 64, 70);
pub const ARTBOARD_SHADOW: Color32 = Color32::from_rgba_premultiplied(0, 0, 0, 60);

// Sliders
pub const SLIDER_TRACK: Color32 = Color32::from_rgb(58, 58, 64);
pub const SLIDER_THUMB: Color32 = Color32::from_rgb(200, 200, 204);
pub const SLIDER_THUMB_ACTIVE: Color32 = Color32::WHITE;
pub const SLIDER_FOCUS: Color32 = Color32::from_rgb(110, 160, 255);
