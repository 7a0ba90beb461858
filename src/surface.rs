// The 2D drawing primitives the network needs from a canvas.
// Coordinates are in surface pixels, origin top left.

use crate::color::Color;

pub trait DrawingSurface {
    /// Pixel width of the backing store.
    fn width(&self) -> u32;
    /// Pixel height of the backing store.
    fn height(&self) -> u32;
    /// Size the surface is currently laid out at, in CSS pixels.
    fn display_size(&self) -> (u32, u32);
    /// Resize the backing store to match `display_size`.
    fn fit_to_display(&mut self);

    fn set_fill_color(&mut self, color: Color);
    fn set_stroke_color(&mut self, color: Color);
    fn set_line_width(&mut self, width: f64);
    fn set_global_alpha(&mut self, alpha: f64);

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64);
    fn fill_circle(&mut self, center: [f64; 2], radius: f64);
    fn stroke_circle(&mut self, center: [f64; 2], radius: f64);
    fn stroke_line(&mut self, from: [f64; 2], to: [f64; 2]);
}
