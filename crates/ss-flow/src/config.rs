//! Tunable thresholds for gestures and tap zones.

/// Drag thresholds, in canvas pixels and pixels per second.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureConfig {
    /// Horizontal travel that switches story.
    pub swipe_distance: f32,
    /// Horizontal release speed that switches story regardless of travel.
    pub swipe_velocity: f32,
    /// Upward travel that opens the chunk viewer.
    pub dive_distance: f32,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            swipe_distance: 100.0,
            swipe_velocity: 500.0,
            dive_distance: 100.0,
        }
    }
}

impl GestureConfig {
    /// Set the horizontal distance threshold.
    pub fn with_swipe_distance(mut self, distance: f32) -> Self {
        self.swipe_distance = distance.max(0.0);
        self
    }

    /// Set the horizontal velocity threshold.
    pub fn with_swipe_velocity(mut self, velocity: f32) -> Self {
        self.swipe_velocity = velocity.max(0.0);
        self
    }

    /// Set the upward distance threshold.
    pub fn with_dive_distance(mut self, distance: f32) -> Self {
        self.dive_distance = distance.max(0.0);
        self
    }
}

/// Horizontal split of the chunk viewer into back and advance zones.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TapZones {
    /// Fraction of the width, from the left edge, that steps back.
    /// Everything to the right of it advances.
    pub back_fraction: f32,
}

impl Default for TapZones {
    fn default() -> Self {
        Self {
            back_fraction: 1.0 / 3.0,
        }
    }
}

impl TapZones {
    /// Set the back zone width (clamped to 0.0-1.0).
    pub fn with_back_fraction(mut self, fraction: f32) -> Self {
        self.back_fraction = fraction.clamp(0.0, 1.0);
        self
    }
}

/// All flow configuration.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FlowConfig {
    /// Story browser drag thresholds.
    pub gesture: GestureConfig,
    /// Chunk viewer tap zones.
    pub tap_zones: TapZones,
}

impl FlowConfig {
    /// Set the gesture thresholds.
    pub fn with_gesture(mut self, gesture: GestureConfig) -> Self {
        self.gesture = gesture;
        self
    }

    /// Set the tap zones.
    pub fn with_tap_zones(mut self, tap_zones: TapZones) -> Self {
        self.tap_zones = tap_zones;
        self
    }
}
