//! Value state for the vertical parameter sliders.

use crate::SliderDecl;
use crate::input::DragToken;

/// Height of the slider thumb in logical pixels. Thumb travel is the track
/// height minus this.
pub const THUMB_HEIGHT: f32 = 12.0;

/// The scale the track maps onto. Position-to-value mapping always uses this
/// full 0–100 scale, independent of the configured range; see
/// [`value_from_position`].
const TRACK_SCALE: f32 = 100.0;

/// Value range and starting point for one slider, fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliderConfig {
    pub min: i32,
    pub max: i32,
    pub initial: i32,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            min: 0,
            max: 100,
            initial: 50,
        }
    }
}

impl SliderConfig {
    /// Build a config from a declaration; missing fields fall back to the
    /// defaults.
    pub fn from_decl(decl: &SliderDecl) -> Self {
        let default = Self::default();
        Self {
            min: decl.min.unwrap_or(default.min),
            max: decl.max.unwrap_or(default.max),
            initial: decl.initial.unwrap_or(default.initial),
        }
    }

    /// Clamp with the lower bound winning, so a config declaring `min > max`
    /// degrades instead of panicking the way `i32::clamp` would.
    fn clamp(self, value: i32) -> i32 {
        value.min(self.max).max(self.min)
    }
}

/// Current value of one vertical slider plus its active drag session.
///
/// Independent sliders never share state; values are rebuilt from the config
/// on every launch.
#[derive(Debug)]
pub struct SliderState {
    config: SliderConfig,
    value: i32,
    drag: Option<DragToken>,
}

impl SliderState {
    pub fn new(config: SliderConfig) -> Self {
        Self {
            value: config.clamp(config.initial),
            config,
            drag: None,
        }
    }

    pub fn value(&self) -> i32 {
        self.value
    }

    pub fn config(&self) -> SliderConfig {
        self.config
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Round to the nearest integer, clamp into the configured range, store,
    /// and return the stored value.
    pub fn set_value(&mut self, value: f32) -> i32 {
        self.value = self.config.clamp(value.round() as i32);
        self.value
    }

    /// Keyboard stepping: ±1, or ±10 with shift, clamped at the bounds.
    pub fn step(&mut self, delta: i32) -> i32 {
        self.set_value((self.value + delta) as f32)
    }

    /// Jump directly to the clicked position (track click, no drag).
    pub fn jump_to(&mut self, track_top: f32, track_height: f32, pointer_y: f32) -> i32 {
        self.set_value(value_from_position(track_top, track_height, pointer_y))
    }

    /// Start a drag session. Returns None while another session is active.
    pub fn begin_drag(&mut self) -> Option<DragToken> {
        if self.drag.is_some() {
            return None;
        }
        let token = DragToken::next();
        self.drag = Some(token);
        Some(token)
    }

    /// Snap the value to the pointer while the session identified by `token`
    /// is active. Returns false for a stale token.
    pub fn drag_to(
        &mut self,
        token: DragToken,
        track_top: f32,
        track_height: f32,
        pointer_y: f32,
    ) -> bool {
        if self.drag != Some(token) {
            return false;
        }
        self.set_value(value_from_position(track_top, track_height, pointer_y));
        true
    }

    /// End the session identified by `token`. Stale tokens are ignored.
    pub fn end_drag(&mut self, token: DragToken) -> bool {
        if self.drag == Some(token) {
            self.drag = None;
            true
        } else {
            false
        }
    }

    /// Drop any active session regardless of token. Recovery hook for a
    /// pointer-up that never arrived.
    pub fn cancel_drag(&mut self) {
        self.drag = None;
    }

    /// Thumb offset from the top of the track for the current value: value
    /// 100 sits at the top, value 0 at the bottom.
    pub fn thumb_offset(&self, track_height: f32) -> f32 {
        let max_travel = (track_height - THUMB_HEIGHT).max(0.0);
        max_travel * (1.0 - self.value as f32 / TRACK_SCALE)
    }
}

/// Map a pointer position inside the track to a value: track top = 100,
/// track bottom = 0, measured at the thumb center.
///
/// The mapping always covers the full 0–100 scale even when the slider
/// declares a narrower range; callers clamp the result into range via
/// [`SliderState::set_value`].
pub fn value_from_position(track_top: f32, track_height: f32, pointer_y: f32) -> f32 {
    let max_travel = track_height - THUMB_HEIGHT;
    if max_travel <= 0.0 {
        // Degenerate track with no travel: every position reads as the top.
        return TRACK_SCALE;
    }
    let local_y = (pointer_y - track_top - THUMB_HEIGHT / 2.0).clamp(0.0, max_travel);
    (TRACK_SCALE * (1.0 - local_y / max_travel)).clamp(0.0, TRACK_SCALE)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slider() -> SliderState {
        SliderState::new(SliderConfig::default())
    }

    #[test]
    fn track_top_reads_full_scale_and_bottom_reads_zero() {
        assert_eq!(value_from_position(0.0, 100.0, 0.0), 100.0);
        assert_eq!(value_from_position(0.0, 100.0, 100.0), 0.0);
        // Same with a non-zero track origin
        assert_eq!(value_from_position(250.0, 100.0, 250.0), 100.0);
        assert_eq!(value_from_position(250.0, 100.0, 350.0), 0.0);
    }

    #[test]
    fn thumb_center_at_midtravel_reads_fifty() {
        // 100 px track, 12 px thumb: max travel 88, thumb center at
        // top + 50 puts local y at 44.
        assert_eq!(value_from_position(0.0, 100.0, 50.0), 50.0);
    }

    #[test]
    fn degenerate_track_reads_as_top() {
        assert_eq!(value_from_position(0.0, THUMB_HEIGHT, 3.0), 100.0);
        assert_eq!(value_from_position(0.0, 4.0, 1.0), 100.0);
    }

    #[test]
    fn set_value_rounds_and_clamps() {
        let mut s = slider();
        assert_eq!(s.set_value(63.4), 63);
        assert_eq!(s.set_value(63.6), 64);
        assert_eq!(s.set_value(150.0), 100);
        assert_eq!(s.set_value(-3.0), 0);
    }

    #[test]
    fn set_value_is_idempotent() {
        let mut s = slider();
        let first = s.set_value(41.7);
        let second = s.set_value(41.7);
        assert_eq!(first, second);
        assert_eq!(s.value(), 42);
    }

    #[test]
    fn keyboard_steps_clamp_at_bounds() {
        let mut s = slider();
        s.set_value(95.0);
        assert_eq!(s.step(1), 96);
        assert_eq!(s.step(10), 100);
        assert_eq!(s.step(10), 100);
        s.set_value(4.0);
        assert_eq!(s.step(-10), 0);
    }

    #[test]
    fn range_narrower_than_scale_clamps_after_mapping() {
        // The track still maps 0–100; the configured range only clamps the
        // result, so the top of the track snaps to 80.
        let mut s = SliderState::new(SliderConfig {
            min: 20,
            max: 80,
            initial: 50,
        });
        assert_eq!(s.jump_to(0.0, 100.0, 0.0), 80);
        assert_eq!(s.jump_to(0.0, 100.0, 100.0), 20);
        assert_eq!(s.jump_to(0.0, 100.0, 50.0), 50);
    }

    #[test]
    fn inverted_bounds_degrade_without_panicking() {
        let mut s = SliderState::new(SliderConfig {
            min: 60,
            max: 40,
            initial: 50,
        });
        // Lower bound wins, matching max(min, min(max, v)).
        assert_eq!(s.value(), 60);
        assert_eq!(s.set_value(90.0), 60);
    }

    #[test]
    fn initial_value_is_clamped_into_range() {
        let s = SliderState::new(SliderConfig {
            min: 0,
            max: 100,
            initial: 150,
        });
        assert_eq!(s.value(), 100);
    }

    #[test]
    fn decl_without_fields_uses_defaults() {
        let decl = crate::SliderDecl {
            id: "brush-size".to_owned(),
            label: "Size".to_owned(),
            min: None,
            max: None,
            initial: None,
        };
        let config = SliderConfig::from_decl(&decl);
        assert_eq!(config, SliderConfig::default());
        assert_eq!(SliderState::new(config).value(), 50);
    }

    #[test]
    fn thumb_offset_is_inverse_of_position_mapping() {
        let mut s = slider();
        assert_eq!(s.set_value(100.0), 100);
        assert_eq!(s.thumb_offset(100.0), 0.0);
        assert_eq!(s.set_value(0.0), 0);
        assert_eq!(s.thumb_offset(100.0), 88.0);

        for value in [0, 13, 50, 77, 100] {
            s.set_value(value as f32);
            let pointer = s.thumb_offset(100.0) + THUMB_HEIGHT / 2.0;
            assert_eq!(value_from_position(0.0, 100.0, pointer).round() as i32, value);
        }
    }

    #[test]
    fn drag_session_snaps_and_is_token_guarded() {
        let mut s = slider();
        let token = s.begin_drag().unwrap();
        assert!(s.begin_drag().is_none());

        assert!(s.drag_to(token, 0.0, 100.0, 6.0));
        assert_eq!(s.value(), 100);

        assert!(s.end_drag(token));
        assert!(!s.drag_to(token, 0.0, 100.0, 94.0));
        assert_eq!(s.value(), 100);
    }

    #[test]
    fn cancel_drag_recovers_from_lost_release() {
        let mut s = slider();
        let token = s.begin_drag().unwrap();
        s.cancel_drag();
        assert!(!s.is_dragging());
        assert!(!s.drag_to(token, 0.0, 100.0, 50.0));
        assert!(s.begin_drag().is_some());
    }
}
