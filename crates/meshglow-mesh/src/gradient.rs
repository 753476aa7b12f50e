//! Radial gradients with canvas-style color stops.

use meshglow_core::Rgb;

/// A single gradient stop: a color and alpha at a normalized offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorStop {
    pub offset: f32,
    pub color: Rgb,
    pub alpha: f32,
}

/// A radial gradient in surface pixel coordinates.
///
/// Stops are ordered by offset. Sampling clamps to the first and last stop
/// outside their range.
#[derive(Debug, Clone, PartialEq)]
pub struct RadialGradient {
    pub center: (f32, f32),
    pub radius: f32,
    pub stops: Vec<ColorStop>,
}

impl RadialGradient {
    /// A two-stop gradient fading from an opaque color at the center to
    /// fully transparent at the rim.
    ///
    /// The rim stop keeps the same hue with zero alpha, so overlapping
    /// gradients blend toward each other instead of toward black.
    pub fn fade_out(center: (f32, f32), radius: f32, color: Rgb) -> Self {
        Self {
            center,
            radius,
            stops: vec![
                ColorStop {
                    offset: 0.0,
                    color,
                    alpha: 1.0,
                },
                ColorStop {
                    offset: 1.0,
                    color,
                    alpha: 0.0,
                },
            ],
        }
    }

    /// Sample the gradient at a normalized distance from the center.
    ///
    /// Returns the interpolated color and alpha. A gradient with no stops
    /// samples as fully transparent.
    pub fn sample(&self, t: f32) -> (Rgb, f32) {
        let (Some(first), Some(last)) = (self.stops.first(), self.stops.last()) else {
            return (Rgb::new(0.0, 0.0, 0.0), 0.0);
        };

        let t = t.clamp(0.0, 1.0);
        if t <= first.offset {
            return (first.color, first.alpha);
        }
        if t >= last.offset {
            return (last.color, last.alpha);
        }

        for pair in self.stops.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if t <= b.offset {
                let span = b.offset - a.offset;
                let f = if span > 0.0 { (t - a.offset) / span } else { 1.0 };
                let color = Rgb::new(
                    a.color.r + (b.color.r - a.color.r) * f,
                    a.color.g + (b.color.g - a.color.g) * f,
                    a.color.b + (b.color.b - a.color.b) * f,
                );
                return (color, a.alpha + (b.alpha - a.alpha) * f);
            }
        }

        (last.color, last.alpha)
    }
}
