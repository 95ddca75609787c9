//! Input abstraction: keyboard helpers and pointer drag tracking.

use std::collections::VecDeque;

use macroquad::prelude::*;
use ss_flow::Drag;

use crate::theme::mouse_canvas_position;

/// Check if the Escape key was pressed this frame.
pub fn escape_pressed() -> bool {
    is_key_pressed(KeyCode::Escape)
}

/// Check if Enter or Space was pressed this frame.
pub fn confirm_pressed() -> bool {
    is_key_pressed(KeyCode::Enter) || is_key_pressed(KeyCode::Space)
}

/// Check if the left arrow was pressed this frame.
pub fn left_pressed() -> bool {
    is_key_pressed(KeyCode::Left)
}

/// Check if the right arrow was pressed this frame.
pub fn right_pressed() -> bool {
    is_key_pressed(KeyCode::Right)
}

/// Check if the up arrow was pressed this frame.
pub fn up_pressed() -> bool {
    is_key_pressed(KeyCode::Up)
}

/// Check if R was pressed this frame.
pub fn retry_pressed() -> bool {
    is_key_pressed(KeyCode::R)
}

/// Digit keys 1-4 as a zero-based option index.
pub fn option_pressed() -> Option<usize> {
    [KeyCode::Key1, KeyCode::Key2, KeyCode::Key3, KeyCode::Key4]
        .iter()
        .position(|&key| is_key_pressed(key))
}

/// Whether the left mouse button went down this frame inside `area`.
pub fn clicked(area: &crate::widget::Rect2) -> bool {
    let (mx, my) = mouse_canvas_position();
    area.contains(mx, my) && is_mouse_button_pressed(MouseButton::Left)
}

/// Pointer travel below which a press-release counts as a tap.
const TAP_SLOP: f32 = 6.0;
/// Seconds of motion history used for the release velocity.
const VELOCITY_WINDOW: f64 = 0.1;

/// A finished pointer interaction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// The pointer travelled: offset and release velocity.
    Drag(Drag),
    /// The pointer was released about where it went down.
    Tap {
        /// Release x in canvas coordinates.
        x: f32,
        /// Release y in canvas coordinates.
        y: f32,
    },
}

/// Turns press, move, and release samples into drags and taps.
#[derive(Debug, Clone, Default)]
pub struct DragTracker {
    origin: Option<(f32, f32)>,
    samples: VecDeque<(f32, f32, f64)>,
}

impl DragTracker {
    /// Create an idle tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a press is in progress.
    pub fn is_active(&self) -> bool {
        self.origin.is_some()
    }

    /// Where the current press started.
    pub fn origin(&self) -> Option<(f32, f32)> {
        self.origin
    }

    /// Offset of the pointer from where it went down, while pressed.
    pub fn offset(&self) -> Option<(f32, f32)> {
        let (ox, oy) = self.origin?;
        let &(x, y, _) = self.samples.back()?;
        Some((x - ox, y - oy))
    }

    /// Pointer went down at `(x, y)` at time `t` seconds.
    pub fn press(&mut self, x: f32, y: f32, t: f64) {
        self.origin = Some((x, y));
        self.samples.clear();
        self.samples.push_back((x, y, t));
    }

    /// Pointer moved while pressed. Ignored when idle.
    pub fn moved(&mut self, x: f32, y: f32, t: f64) {
        if self.origin.is_none() {
            return;
        }
        self.samples.push_back((x, y, t));
        while let Some(&(_, _, oldest)) = self.samples.front() {
            if t - oldest > VELOCITY_WINDOW && self.samples.len() > 2 {
                self.samples.pop_front();
            } else {
                break;
            }
        }
    }

    /// Pointer released. Returns `None` if no press was in progress.
    pub fn release(&mut self, x: f32, y: f32, t: f64) -> Option<PointerEvent> {
        let (ox, oy) = self.origin.take()?;
        self.moved_unchecked(x, y, t);
        let (dx, dy) = (x - ox, y - oy);

        let event = if dx.abs() <= TAP_SLOP && dy.abs() <= TAP_SLOP {
            PointerEvent::Tap { x, y }
        } else {
            let (vx, vy) = self.velocity();
            PointerEvent::Drag(Drag::new(dx, dy).with_velocity(vx, vy))
        };
        self.samples.clear();
        Some(event)
    }

    /// Abandon the current press.
    pub fn cancel(&mut self) {
        self.origin = None;
        self.samples.clear();
    }

    /// Sample the mouse for this frame.
    pub fn poll(&mut self) -> Option<PointerEvent> {
        let (x, y) = mouse_canvas_position();
        let t = get_time();
        if is_mouse_button_pressed(MouseButton::Left) {
            self.press(x, y, t);
            None
        } else if is_mouse_button_released(MouseButton::Left) {
            self.release(x, y, t)
        } else {
            if is_mouse_button_down(MouseButton::Left) {
                self.moved(x, y, t);
            }
            None
        }
    }

    fn moved_unchecked(&mut self, x: f32, y: f32, t: f64) {
        self.samples.push_back((x, y, t));
    }

    fn velocity(&self) -> (f32, f32) {
        let (Some(&(x0, y0, t0)), Some(&(x1, y1, t1))) =
            (self.samples.front(), self.samples.back())
        else {
            return (0.0, 0.0);
        };
        let dt = (t1 - t0) as f32;
        if dt <= f32::EPSILON {
            return (0.0, 0.0);
        }
        ((x1 - x0) / dt, (y1 - y0) / dt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_press_is_a_tap() {
        let mut tracker = DragTracker::new();
        tracker.press(100.0, 200.0, 0.0);
        tracker.moved(102.0, 201.0, 0.05);
        let event = tracker.release(103.0, 199.0, 0.1);
        assert_eq!(event, Some(PointerEvent::Tap { x: 103.0, y: 199.0 }));
        assert!(!tracker.is_active());
    }

    #[test]
    fn long_travel_is_a_drag() {
        let mut tracker = DragTracker::new();
        tracker.press(200.0, 240.0, 0.0);
        tracker.moved(150.0, 240.0, 0.2);
        let Some(PointerEvent::Drag(drag)) = tracker.release(50.0, 250.0, 0.4) else {
            panic!("expected a drag");
        };
        assert_eq!(drag.dx, -150.0);
        assert_eq!(drag.dy, 10.0);
        assert!(drag.vx < 0.0);
    }

    #[test]
    fn velocity_uses_recent_motion() {
        let mut tracker = DragTracker::new();
        tracker.press(0.0, 0.0, 0.0);
        // Slow start, then a flick in the last 50 ms.
        tracker.moved(10.0, 0.0, 0.5);
        tracker.moved(12.0, 0.0, 1.0);
        tracker.moved(40.0, 0.0, 1.05);
        let Some(PointerEvent::Drag(drag)) = tracker.release(72.0, 0.0, 1.1) else {
            panic!("expected a drag");
        };
        assert!(drag.vx > 500.0, "vx = {}", drag.vx);
    }

    #[test]
    fn offset_follows_pointer() {
        let mut tracker = DragTracker::new();
        assert_eq!(tracker.offset(), None);
        tracker.press(10.0, 10.0, 0.0);
        tracker.moved(30.0, -5.0, 0.1);
        assert_eq!(tracker.offset(), Some((20.0, -15.0)));
        assert_eq!(tracker.origin(), Some((10.0, 10.0)));
    }

    #[test]
    fn release_without_press_is_ignored() {
        let mut tracker = DragTracker::new();
        tracker.moved(5.0, 5.0, 0.0);
        assert_eq!(tracker.release(5.0, 5.0, 0.1), None);
    }

    #[test]
    fn cancel_drops_press() {
        let mut tracker = DragTracker::new();
        tracker.press(0.0, 0.0, 0.0);
        tracker.cancel();
        assert!(!tracker.is_active());
        assert_eq!(tracker.release(200.0, 0.0, 0.1), None);
    }
}
