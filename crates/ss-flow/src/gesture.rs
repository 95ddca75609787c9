//! Classification of finished drags and taps.
//!
//! Coordinates are screen space: x grows rightward, y grows downward, so an
//! upward swipe has a negative `dy`.

use crate::config::{GestureConfig, TapZones};

/// A finished drag: total travel and release velocity.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Drag {
    /// Horizontal travel in pixels.
    pub dx: f32,
    /// Vertical travel in pixels.
    pub dy: f32,
    /// Horizontal release velocity in pixels per second.
    pub vx: f32,
    /// Vertical release velocity in pixels per second.
    pub vy: f32,
}

impl Drag {
    /// A drag with the given travel and no release velocity.
    pub fn new(dx: f32, dy: f32) -> Self {
        Self {
            dx,
            dy,
            vx: 0.0,
            vy: 0.0,
        }
    }

    /// Set the release velocity.
    pub fn with_velocity(mut self, vx: f32, vy: f32) -> Self {
        self.vx = vx;
        self.vy = vy;
        self
    }
}

/// What a drag means to the story browser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Swipe {
    /// Finger moved left: show the next story.
    Left,
    /// Finger moved right: show the previous story.
    Right,
    /// Finger moved up past the dive threshold: open the chunks.
    Up,
    /// Below every threshold.
    None,
}

/// Classify a finished drag.
///
/// The dominant axis decides. Vertical drags only count when they go up
/// past `dive_distance`; downward drags are ignored. Horizontal drags count
/// past `swipe_distance` or when released faster than `swipe_velocity`.
pub fn classify_drag(drag: &Drag, config: &GestureConfig) -> Swipe {
    if drag.dy.abs() > drag.dx.abs() {
        if drag.dy < -config.dive_distance {
            return Swipe::Up;
        }
        return Swipe::None;
    }

    let far = drag.dx.abs() > config.swipe_distance;
    let fast = drag.vx.abs() > config.swipe_velocity;
    if !far && !fast {
        return Swipe::None;
    }

    let direction = if drag.dx != 0.0 { drag.dx } else { drag.vx };
    if direction > 0.0 {
        Swipe::Right
    } else if direction < 0.0 {
        Swipe::Left
    } else {
        Swipe::None
    }
}

/// Which tap zone of the chunk viewer was hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapSide {
    /// Step back one chunk.
    Back,
    /// Step forward, or finish on the last chunk.
    Advance,
}

/// Classify a tap at `x` on a screen `width` wide.
pub fn classify_tap(x: f32, width: f32, zones: &TapZones) -> TapSide {
    if width <= 0.0 {
        return TapSide::Advance;
    }
    if x / width < zones.back_fraction {
        TapSide::Back
    } else {
        TapSide::Advance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg() -> GestureConfig {
        GestureConfig::default()
    }

    #[test]
    fn short_drags_do_nothing() {
        assert_eq!(classify_drag(&Drag::new(50.0, 10.0), &cfg()), Swipe::None);
        assert_eq!(classify_drag(&Drag::new(0.0, 0.0), &cfg()), Swipe::None);
    }

    #[test]
    fn horizontal_distance() {
        assert_eq!(classify_drag(&Drag::new(-150.0, 20.0), &cfg()), Swipe::Left);
        assert_eq!(classify_drag(&Drag::new(150.0, -20.0), &cfg()), Swipe::Right);
    }

    #[test]
    fn threshold_is_exclusive() {
        assert_eq!(classify_drag(&Drag::new(-100.0, 0.0), &cfg()), Swipe::None);
        assert_eq!(classify_drag(&Drag::new(0.0, -100.0), &cfg()), Swipe::None);
    }

    #[test]
    fn horizontal_velocity_flick() {
        let flick = Drag::new(-30.0, 5.0).with_velocity(-900.0, 0.0);
        assert_eq!(classify_drag(&flick, &cfg()), Swipe::Left);
    }

    #[test]
    fn velocity_direction_used_without_travel() {
        let flick = Drag::new(0.0, 0.0).with_velocity(800.0, 0.0);
        assert_eq!(classify_drag(&flick, &cfg()), Swipe::Right);
    }

    #[test]
    fn upward_dive() {
        assert_eq!(classify_drag(&Drag::new(10.0, -140.0), &cfg()), Swipe::Up);
    }

    #[test]
    fn downward_ignored() {
        assert_eq!(classify_drag(&Drag::new(10.0, 300.0), &cfg()), Swipe::None);
    }

    #[test]
    fn vertical_dominance_blocks_horizontal() {
        // Far enough horizontally, but the drag is mostly vertical and downward.
        assert_eq!(classify_drag(&Drag::new(120.0, 200.0), &cfg()), Swipe::None);
    }

    #[test]
    fn vertical_velocity_does_not_dive() {
        let flick = Drag::new(0.0, -20.0).with_velocity(0.0, -3000.0);
        assert_eq!(classify_drag(&flick, &cfg()), Swipe::None);
    }

    #[test]
    fn custom_thresholds() {
        let cfg = GestureConfig::default().with_swipe_distance(20.0);
        assert_eq!(classify_drag(&Drag::new(-25.0, 0.0), &cfg), Swipe::Left);
    }

    #[test]
    fn tap_zones_default_split() {
        let zones = TapZones::default();
        assert_eq!(classify_tap(10.0, 300.0, &zones), TapSide::Back);
        assert_eq!(classify_tap(99.0, 300.0, &zones), TapSide::Back);
        assert_eq!(classify_tap(150.0, 300.0, &zones), TapSide::Advance);
        assert_eq!(classify_tap(290.0, 300.0, &zones), TapSide::Advance);
    }

    #[test]
    fn tap_zero_width() {
        assert_eq!(classify_tap(0.0, 0.0, &TapZones::default()), TapSide::Advance);
    }
}
