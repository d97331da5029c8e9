//! Pan/zoom state for the canvas viewport.

use crate::input::{DragToken, WheelInput};
use eframe::egui::{Pos2, Rect, Vec2};

/// Minimum zoom factor.
pub const MIN_SCALE: f32 = 0.1;

/// Maximum zoom factor.
pub const MAX_SCALE: f32 = 10.0;

/// Scale change per wheel-delta unit when zooming.
pub const ZOOM_SENSITIVITY: f32 = 0.002;

/// Notification emitted whenever pan or scale changes. Consumers (the zoom
/// readout, logging) read the scale it carries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformChanged {
    pub scale: f32,
}

#[derive(Debug, Clone, Copy)]
struct DragSession {
    token: DragToken,
    last: Pos2,
}

/// Pan offset and zoom factor for one canvas viewport.
///
/// Content is drawn centered on the viewport: a world point `w` appears on
/// screen at `viewport_center + pan + w * scale`. Each viewport owns its own
/// controller; instances never share state, and state is rebuilt fresh on
/// every launch.
#[derive(Debug)]
pub struct ViewportController {
    scale: f32,
    pan: Vec2,
    drag: Option<DragSession>,
    changed: Option<TransformChanged>,
}

impl Default for ViewportController {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewportController {
    pub fn new() -> Self {
        Self {
            scale: 1.0,
            pan: Vec2::ZERO,
            drag: None,
            changed: None,
        }
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn pan(&self) -> Vec2 {
        self.pan
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Translate the view by the wheel's native delta: scrolling down moves
    /// the content up.
    pub fn pan_by(&mut self, delta: Vec2) {
        self.pan -= delta;
        self.mark_changed();
    }

    /// Zoom by a wheel delta, keeping the point under `cursor` visually
    /// stationary. A scale already clamped at the boundary leaves the pan
    /// untouched.
    pub fn zoom_at_cursor(&mut self, delta_y: f32, cursor: Pos2, viewport: Rect) {
        let new_scale =
            (self.scale * (1.0 - delta_y * ZOOM_SENSITIVITY)).clamp(MIN_SCALE, MAX_SCALE);
        self.apply_zoom(new_scale, cursor - viewport.center());
    }

    /// Set the scale directly, keeping the viewport center fixed (keyboard
    /// shortcuts and the zoom slider).
    pub fn zoom_about_center(&mut self, new_scale: f32) {
        self.apply_zoom(new_scale.clamp(MIN_SCALE, MAX_SCALE), Vec2::ZERO);
    }

    fn apply_zoom(&mut self, new_scale: f32, cursor: Vec2) {
        let ratio = new_scale / self.scale;
        // Keep the point under the cursor fixed
        self.pan = cursor * (1.0 - ratio) + self.pan * ratio;
        self.scale = new_scale;
        self.mark_changed();
    }

    /// Wheel dispatch: the precision modifier zooms toward the cursor, a plain
    /// wheel pans with the native deltas. An active drag takes priority and
    /// swallows the wheel.
    pub fn handle_wheel(&mut self, wheel: WheelInput, cursor: Pos2, viewport: Rect) {
        if self.drag.is_some() {
            return;
        }
        if wheel.zoom {
            self.zoom_at_cursor(wheel.delta.y, cursor, viewport);
        } else {
            self.pan_by(wheel.delta);
        }
    }

    /// Start a drag session at `pos`. Returns None while another session is
    /// active: a second pointer-down cannot start a nested drag.
    pub fn begin_drag(&mut self, pos: Pos2) -> Option<DragToken> {
        if self.drag.is_some() {
            return None;
        }
        let token = DragToken::next();
        self.drag = Some(DragSession { token, last: pos });
        Some(token)
    }

    /// Move the active drag session. Motion is inverted: dragging the pointer
    /// right shifts the pan left, matching trackpad panning. Returns false if
    /// `token` does not belong to the active session.
    pub fn drag_to(&mut self, token: DragToken, pos: Pos2) -> bool {
        let Some(session) = &mut self.drag else {
            return false;
        };
        if session.token != token {
            return false;
        }
        let last = session.last;
        session.last = pos;
        self.pan += last - pos;
        self.mark_changed();
        true
    }

    /// End the session identified by `token`. Stale tokens are ignored.
    pub fn end_drag(&mut self, token: DragToken) -> bool {
        match &self.drag {
            Some(session) if session.token == token => {
                self.drag = None;
                true
            }
            _ => false,
        }
    }

    /// Drop any active session regardless of token. Recovery hook for a
    /// pointer-up that never arrived (focus loss, window switch).
    pub fn cancel_drag(&mut self) {
        self.drag = None;
    }

    /// Back to scale 1.0 with no pan.
    pub fn reset(&mut self) {
        self.scale = 1.0;
        self.pan = Vec2::ZERO;
        self.mark_changed();
    }

    /// Screen position of a world point inside `viewport`.
    pub fn screen_from_world(&self, world: Pos2, viewport: Rect) -> Pos2 {
        viewport.center() + self.pan + world.to_vec2() * self.scale
    }

    /// Inverse of [`Self::screen_from_world`].
    pub fn world_from_screen(&self, screen: Pos2, viewport: Rect) -> Pos2 {
        ((screen - viewport.center() - self.pan) / self.scale).to_pos2()
    }

    /// Take the pending transform-changed notification, if any.
    pub fn take_transform_changed(&mut self) -> Option<TransformChanged> {
        self.changed.take()
    }

    fn mark_changed(&mut self) {
        self.changed = Some(TransformChanged { scale: self.scale });
    }
}
