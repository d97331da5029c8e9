use eframe::egui::Vec2;

/// Width of the sidebar panel in pixels.
pub const SIDEBAR_WIDTH: f32 = 200.0;

/// Height of a sidebar slider track in pixels.
pub const SLIDER_TRACK_HEIGHT: f32 = 160.0;

/// Width of a sidebar slider track in pixels.
pub const SLIDER_TRACK_WIDTH: f32 = 24.0;

/// Artboard page size in world units (pixels at scale 1.0).
pub const ARTBOARD_SIZE: Vec2 = Vec2::new(900.0, 700.0);

/// Scale multiplier for +/- keyboard zoom.
pub const KEY_ZOOM_STEP: f32 = 1.2;
