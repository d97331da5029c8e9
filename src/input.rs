//! Normalization of raw wheel/keyboard input, shared by the viewport and the
//! sliders.

use eframe::egui::{Modifiers, Vec2};
use std::sync::atomic::{AtomicU64, Ordering};

/// A wheel event, normalized to the convention the controllers use:
/// positive `delta.y` means scrolling down.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelInput {
    pub delta: Vec2,
    /// Precision modifier held: route the wheel to zoom instead of pan.
    pub zoom: bool,
}

impl WheelInput {
    /// egui reports scroll with positive y meaning scroll up, the opposite of
    /// the wheel-delta convention; the sign is flipped once here. Ctrl, or
    /// cmd on macOS, selects zoom.
    pub fn from_egui(raw_scroll: Vec2, modifiers: Modifiers) -> Self {
        Self {
            delta: -raw_scroll,
            zoom: modifiers.command || modifiers.ctrl,
        }
    }
}

/// Keyboard step for a slider: 1, or 10 with shift held.
pub fn keyboard_step(shift: bool) -> i32 {
    if shift { 10 } else { 1 }
}

/// Proof of an active drag session, handed out by `begin_drag` and required
/// by `drag_to`/`end_drag`. Tokens are unique across all widget instances, so
/// a session on one widget can never move another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DragToken(u64);

static NEXT_DRAG_TOKEN: AtomicU64 = AtomicU64::new(1);

impl DragToken {
    pub(crate) fn next() -> Self {
        Self(NEXT_DRAG_TOKEN.fetch_add(1, Ordering::Relaxed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eframe::egui::vec2;

    #[test]
    fn wheel_sign_is_flipped_from_egui() {
        let wheel = WheelInput::from_egui(vec2(3.0, -120.0), Modifiers::NONE);
        assert_eq!(wheel.delta, vec2(-3.0, 120.0));
        assert!(!wheel.zoom);
    }

    #[test]
    fn precision_modifier_selects_zoom() {
        assert!(WheelInput::from_egui(vec2(0.0, 1.0), Modifiers::COMMAND).zoom);
        assert!(WheelInput::from_egui(vec2(0.0, 1.0), Modifiers::CTRL).zoom);
        assert!(!WheelInput::from_egui(vec2(0.0, 1.0), Modifiers::SHIFT).zoom);
    }

    #[test]
    fn keyboard_step_is_ten_with_shift() {
        assert_eq!(keyboard_step(false), 1);
        assert_eq!(keyboard_step(true), 10);
    }

    #[test]
    fn drag_tokens_are_unique() {
        assert_ne!(DragToken::next(), DragToken::next());
    }
}
