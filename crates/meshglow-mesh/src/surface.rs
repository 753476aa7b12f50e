//! The drawing surface: an owned RGB pixel buffer sized to the viewport.

use meshglow_core::Rgb;

use crate::gradient::RadialGradient;

/// A fixed-size RGB pixel buffer.
///
/// The surface is created once from the viewport dimensions and never
/// resized. Pixels persist between frames; each frame's gradient fills
/// composite over whatever the previous frame left behind.
#[derive(Debug, Clone, PartialEq)]
pub struct Surface {
    width: u16,
    height: u16,
    pixels: Vec<Rgb>,
}

impl Surface {
    /// Create a black surface, or `None` for a zero-sized viewport.
    pub fn new(width: u16, height: u16) -> Option<Self> {
        if width == 0 || height == 0 {
            return None;
        }
        Some(Self {
            width,
            height,
            pixels: vec![Rgb::new(0.0, 0.0, 0.0); width as usize * height as usize],
        })
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// The pixel at the given coordinates. Panics when out of bounds.
    pub fn pixel(&self, x: u16, y: u16) -> Rgb {
        self.pixels[y as usize * self.width as usize + x as usize]
    }

    /// Fill the whole surface with a radial gradient, compositing
    /// source-over onto the existing pixels.
    pub fn fill_radial(&mut self, gradient: &RadialGradient) {
        let (cx, cy) = gradient.center;
        let radius = gradient.radius.max(f32::EPSILON);

        for y in 0..self.height {
            for x in 0..self.width {
                let dx = x as f32 - cx;
                let dy = y as f32 - cy;
                let t = (dx * dx + dy * dy).sqrt() / radius;

                let (src, alpha) = gradient.sample(t);
                if alpha <= 0.0 {
                    continue;
                }

                let idx = y as usize * self.width as usize + x as usize;
                let dst = self.pixels[idx];
                self.pixels[idx] = Rgb::new(
                    src.r * alpha + dst.r * (1.0 - alpha),
                    src.g * alpha + dst.g * (1.0 - alpha),
                    src.b * alpha + dst.b * (1.0 - alpha),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_sized_viewport_yields_no_surface() {
        assert!(Surface::new(0, 24).is_none());
        assert!(Surface::new(80, 0).is_none());
    }

    #[test]
    fn new_surface_is_black() {
        let surface = Surface::new(4, 3).unwrap();
        for y in 0..3 {
            for x in 0..4 {
                assert_eq!(surface.pixel(x, y), Rgb::new(0.0, 0.0, 0.0));
            }
        }
    }

    #[test]
    fn fill_paints_opaque_center_and_leaves_the_rim() {
        let mut surface = Surface::new(17, 17).unwrap();
        let color = Rgb::new(200.0, 100.0, 50.0);
        surface.fill_radial(&RadialGradient::fade_out((8.0, 8.0), 8.0, color));

        assert_eq!(surface.pixel(8, 8), color);
        // On the rim the alpha has fallen to zero.
        assert_eq!(surface.pixel(0, 8), Rgb::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn fill_blends_halfway_out() {
        let mut surface = Surface::new(17, 17).unwrap();
        let color = Rgb::new(200.0, 100.0, 50.0);
        surface.fill_radial(&RadialGradient::fade_out((8.0, 8.0), 8.0, color));

        // Half the radius from the center over black: half the color.
        let halfway = surface.pixel(4, 8);
        assert!((halfway.r - 100.0).abs() < 1e-3);
        assert!((halfway.g - 50.0).abs() < 1e-3);
        assert!((halfway.b - 25.0).abs() < 1e-3);
    }

    #[test]
    fn later_fills_draw_over_earlier_ones() {
        let mut surface = Surface::new(9, 9).unwrap();
        let first = Rgb::new(255.0, 0.0, 0.0);
        let second = Rgb::new(0.0, 0.0, 255.0);

        surface.fill_radial(&RadialGradient::fade_out((4.0, 4.0), 4.0, first));
        surface.fill_radial(&RadialGradient::fade_out((4.0, 4.0), 4.0, second));

        assert_eq!(surface.pixel(4, 4), second);
    }
}
