//! Visual theme: color palette, layout constants, and virtual canvas scaling.

pub mod text;

use macroquad::prelude::*;

/// Virtual canvas width in pixels. The window scales this up.
pub const CANVAS_W: f32 = 270.0;
/// Virtual canvas height in pixels. The window scales this up.
pub const CANVAS_H: f32 = 480.0;

/// Outer margin of screen content.
pub const MARGIN: f32 = 12.0;

/// Flat palette.
pub mod palette {
    use macroquad::prelude::Color;

    /// Letterbox bars.
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0, 1.0);
    /// Canvas background.
    pub const NIGHT: Color = Color::new(0.067, 0.075, 0.110, 1.0);
    /// Card and panel fill.
    pub const SLATE: Color = Color::new(0.133, 0.149, 0.212, 1.0);
    /// Borders, inactive markers.
    pub const DARK_GRAY: Color = Color::new(0.300, 0.310, 0.360, 1.0);
    /// Secondary text.
    pub const LIGHT_GRAY: Color = Color::new(0.720, 0.730, 0.770, 1.0);
    /// Primary text.
    pub const WHITE: Color = Color::new(0.970, 0.970, 0.980, 1.0);
    /// Accent: active markers, buttons.
    pub const VIOLET: Color = Color::new(0.545, 0.361, 0.965, 1.0);
    /// Correct answers.
    pub const GREEN: Color = Color::new(0.133, 0.773, 0.369, 1.0);
    /// Wrong answers and errors.
    pub const RED: Color = Color::new(0.937, 0.267, 0.267, 1.0);
    /// Warnings.
    pub const AMBER: Color = Color::new(0.961, 0.620, 0.043, 1.0);
}

/// Stand-in color for a story image, stable per story id.
pub fn cover_color(id: u32) -> Color {
    const COVERS: [Color; 5] = [
        Color::new(0.231, 0.510, 0.965, 1.0),
        Color::new(0.063, 0.725, 0.506, 1.0),
        Color::new(0.976, 0.451, 0.086, 1.0),
        Color::new(0.925, 0.282, 0.600, 1.0),
        Color::new(0.545, 0.361, 0.965, 1.0),
    ];
    COVERS[id as usize % COVERS.len()]
}

fn viewport() -> (f32, f32, f32) {
    let scale = (screen_width() / CANVAS_W).min(screen_height() / CANVAS_H);
    let offset_x = (screen_width() - CANVAS_W * scale) / 2.0;
    let offset_y = (screen_height() - CANVAS_H * scale) / 2.0;
    (scale, offset_x, offset_y)
}

/// Set up a `Camera2D` that maps the virtual canvas to the current window.
pub fn setup_virtual_canvas() {
    let (scale, offset_x, offset_y) = viewport();
    set_camera(&Camera2D {
        zoom: vec2(2.0 / CANVAS_W, 2.0 / CANVAS_H),
        target: vec2(CANVAS_W / 2.0, CANVAS_H / 2.0),
        viewport: Some((
            offset_x as i32,
            offset_y as i32,
            (CANVAS_W * scale) as i32,
            (CANVAS_H * scale) as i32,
        )),
        ..Default::default()
    });
}

/// Convert screen-space mouse position to virtual canvas coordinates.
pub fn mouse_canvas_position() -> (f32, f32) {
    let (mx, my) = mouse_position();
    let (scale, offset_x, offset_y) = viewport();
    ((mx - offset_x) / scale, (my - offset_y) / scale)
}
