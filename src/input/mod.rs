//! Explicit input state, drained once per frame by the camera update
//! step.
//!
//! Replaces the tutorial-classic pattern of a process-wide `keys[]` array
//! and free-floating window callbacks. The struct is platform agnostic
//! (no winit types); the demo binaries map window events onto it.

use glam::Vec2;

use crate::camera::MoveDirection;

/// Accumulated input since the last frame.
///
/// Pointer motion and scroll amounts accumulate between frames and are
/// consumed with the `take_*` methods; held movement keys are level
/// state sampled every frame.
#[derive(Debug, Default)]
pub struct InputState {
    forward: bool,
    backward: bool,
    left: bool,
    right: bool,
    /// Last absolute cursor position. `None` until the first sample so
    /// the initial event produces no jump.
    last_cursor: Option<Vec2>,
    look_delta: Vec2,
    zoom_delta: f32,
}

impl InputState {
    /// Create an empty input state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a movement key press or release.
    pub fn set_held(&mut self, direction: MoveDirection, pressed: bool) {
        match direction {
            MoveDirection::Forward => self.forward = pressed,
            MoveDirection::Backward => self.backward = pressed,
            MoveDirection::Left => self.left = pressed,
            MoveDirection::Right => self.right = pressed,
        }
    }

    /// Whether the key bound to `direction` is currently held.
    #[must_use]
    pub fn is_held(&self, direction: MoveDirection) -> bool {
        match direction {
            MoveDirection::Forward => self.forward,
            MoveDirection::Backward => self.backward,
            MoveDirection::Left => self.left,
            MoveDirection::Right => self.right,
        }
    }

    /// Record an absolute cursor position and accumulate the motion since
    /// the previous sample.
    ///
    /// The first sample only establishes the reference position and
    /// contributes no delta.
    pub fn cursor_moved(&mut self, x: f32, y: f32) {
        let position = Vec2::new(x, y);
        if let Some(last) = self.last_cursor {
            self.look_delta += position - last;
        }
        self.last_cursor = Some(position);
    }

    /// Accumulate a relative pointer motion (raw device delta).
    ///
    /// Used while the cursor is grabbed for mouse look: raw motion keeps
    /// arriving even when the cursor position is locked in place, so the
    /// look direction is never bounded by the window edges.
    pub fn look(&mut self, dx: f32, dy: f32) {
        self.look_delta += Vec2::new(dx, dy);
    }

    /// Accumulate a scroll amount (positive = zoom in).
    pub fn scrolled(&mut self, amount: f32) {
        self.zoom_delta += amount;
    }

    /// Consume the accumulated pointer-motion delta, resetting it to zero.
    pub fn take_look_delta(&mut self) -> Vec2 {
        std::mem::take(&mut self.look_delta)
    }

    /// Consume the accumulated scroll delta, resetting it to zero.
    pub fn take_zoom_delta(&mut self) -> f32 {
        std::mem::take(&mut self.zoom_delta)
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::InputState;
    use crate::camera::MoveDirection;

    #[test]
    fn first_cursor_sample_produces_no_delta() {
        let mut input = InputState::new();
        input.cursor_moved(400.0, 300.0);
        assert_eq!(input.take_look_delta(), Vec2::ZERO);
    }

    #[test]
    fn cursor_deltas_accumulate_and_drain() {
        let mut input = InputState::new();
        input.cursor_moved(400.0, 300.0);
        input.cursor_moved(410.0, 295.0);
        input.cursor_moved(415.0, 295.0);
        assert_eq!(input.take_look_delta(), Vec2::new(15.0, -5.0));
        // Drained: next take is zero, but the reference position remains.
        assert_eq!(input.take_look_delta(), Vec2::ZERO);
        input.cursor_moved(417.0, 296.0);
        assert_eq!(input.take_look_delta(), Vec2::new(2.0, 1.0));
    }

    #[test]
    fn raw_motion_accumulates_without_cursor_reference() {
        let mut input = InputState::new();
        input.look(3.0, -1.0);
        input.look(2.0, 0.5);
        assert_eq!(input.take_look_delta(), Vec2::new(5.0, -0.5));
        // Raw motion establishes no absolute reference: the next cursor
        // sample is still treated as the first.
        input.cursor_moved(100.0, 100.0);
        assert_eq!(input.take_look_delta(), Vec2::ZERO);
    }

    #[test]
    fn scroll_accumulates_and_drains() {
        let mut input = InputState::new();
        input.scrolled(1.0);
        input.scrolled(-0.25);
        assert_eq!(input.take_zoom_delta(), 0.75);
        assert_eq!(input.take_zoom_delta(), 0.0);
    }

    #[test]
    fn held_keys_toggle() {
        let mut input = InputState::new();
        assert!(!input.is_held(MoveDirection::Forward));
        input.set_held(MoveDirection::Forward, true);
        input.set_held(MoveDirection::Left, true);
        assert!(input.is_held(MoveDirection::Forward));
        assert!(input.is_held(MoveDirection::Left));
        assert!(!input.is_held(MoveDirection::Backward));
        input.set_held(MoveDirection::Forward, false);
        assert!(!input.is_held(MoveDirection::Forward));
    }
}
