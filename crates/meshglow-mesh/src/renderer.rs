//! The mesh renderer: a fixed palette, a 3x3 anchor grid, and the
//! per-frame hue-shift-and-paint cycle.

use meshglow_core::{AnimationSpeed, Rgb};

use crate::color::shift_hue;
use crate::gradient::RadialGradient;
use crate::surface::Surface;

/// The nine base colors of the mesh, warm to cool. Index order pairs
/// positionally with [`ANCHORS`].
pub const PALETTE: [Rgb; 9] = [
    Rgb::new(255.0, 107.0, 107.0), // salmon
    Rgb::new(255.0, 140.0, 0.0),   // dark orange
    Rgb::new(255.0, 69.0, 0.0),    // orange red
    Rgb::new(255.0, 105.0, 180.0), // hot pink
    Rgb::new(218.0, 112.0, 214.0), // orchid
    Rgb::new(138.0, 43.0, 226.0),  // blue violet
    Rgb::new(75.0, 0.0, 130.0),    // indigo
    Rgb::new(0.0, 0.0, 139.0),     // dark blue
    Rgb::new(25.0, 25.0, 112.0),   // midnight blue
];

/// Normalized gradient centers: a 3x3 grid of corners, edge midpoints and
/// the center, scaled to pixel coordinates at draw time.
pub const ANCHORS: [(f32, f32); 9] = [
    (0.0, 0.0),
    (0.5, 0.0),
    (1.0, 0.0),
    (0.0, 0.5),
    (0.5, 0.5),
    (1.0, 0.5),
    (0.0, 1.0),
    (0.5, 1.0),
    (1.0, 1.0),
];

/// Hue offset for a palette index at the given elapsed time.
///
/// A slow oscillation bounded to +/-0.1 turns, phase-offset per index so
/// the palette shimmers out of sync with itself.
pub fn hue_shift(elapsed_ms: f32, index: usize) -> f32 {
    (elapsed_ms * 0.001 + index as f32 * 0.3).cos() * 0.1
}

/// Paints the animated mesh gradient onto a surface.
#[derive(Debug, Clone, Copy, Default)]
pub struct MeshRenderer {
    speed: AnimationSpeed,
}

impl MeshRenderer {
    pub fn new(speed: AnimationSpeed) -> Self {
        Self { speed }
    }

    pub fn speed(&self) -> AnimationSpeed {
        self.speed
    }

    pub fn set_speed(&mut self, speed: AnimationSpeed) {
        self.speed = speed;
    }

    /// Draw one frame at the given elapsed time.
    pub fn draw(&self, surface: &mut Surface, elapsed_ms: u64) {
        let t = elapsed_ms as f32 * self.speed.time_scale();
        let shifted: [Rgb; 9] =
            std::array::from_fn(|i| shift_hue(PALETTE[i], hue_shift(t, i)));

        let width = surface.width() as f32;
        let height = surface.height() as f32;

        // Four overlapping gradients on the 2x2 sub-grid of anchors
        // (indices 0, 1, 3, 4). Later fills draw over earlier ones.
        for i in 0..2 {
            for j in 0..2 {
                let index = i * 3 + j;
                let (ax, ay) = ANCHORS[index];
                let gradient = RadialGradient::fade_out(
                    (ax * width, ay * height),
                    width / 2.0,
                    shifted[index],
                );
                surface.fill_radial(&gradient);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(0.0, 0)]
    #[case(0.0, 8)]
    #[case(1000.0, 3)]
    #[case(123_456.0, 5)]
    fn hue_shift_matches_the_oscillation_formula(#[case] t: f32, #[case] index: usize) {
        let expected = (t * 0.001 + index as f32 * 0.3).cos() * 0.1;
        assert_eq!(hue_shift(t, index), expected);
    }

    #[test]
    fn hue_shift_is_bounded_to_a_tenth_of_a_turn() {
        for step in 0..500 {
            let t = step as f32 * 37.0;
            for index in 0..PALETTE.len() {
                assert!(hue_shift(t, index).abs() <= 0.1 + 1e-6);
            }
        }
    }

    #[test]
    fn palette_indices_are_phase_offset() {
        assert_ne!(hue_shift(0.0, 0), hue_shift(0.0, 1));
    }

    #[test]
    fn corner_pixel_gets_the_first_shifted_color() {
        // On a square surface the other three gradients reach the (0, 0)
        // corner at exactly their rim, so only gradient 0 colors it.
        let mut surface = Surface::new(64, 64).unwrap();
        MeshRenderer::new(AnimationSpeed::Medium).draw(&mut surface, 0);

        let expected = shift_hue(PALETTE[0], hue_shift(0.0, 0));
        let corner = surface.pixel(0, 0);
        assert!((corner.r - expected.r).abs() < 1e-3);
        assert!((corner.g - expected.g).abs() < 1e-3);
        assert!((corner.b - expected.b).abs() < 1e-3);
    }

    #[test]
    fn center_pixel_gets_the_last_painted_gradient() {
        let mut surface = Surface::new(64, 64).unwrap();
        MeshRenderer::new(AnimationSpeed::Medium).draw(&mut surface, 0);

        // Anchor 4 sits at the center and is painted last.
        let expected = shift_hue(PALETTE[4], hue_shift(0.0, 4));
        let center = surface.pixel(32, 32);
        assert!((center.r - expected.r).abs() < 1e-3);
        assert!((center.g - expected.g).abs() < 1e-3);
        assert!((center.b - expected.b).abs() < 1e-3);
    }

    #[test]
    fn speed_scales_the_clock() {
        let mut slow = Surface::new(32, 32).unwrap();
        let mut fast = Surface::new(32, 32).unwrap();

        MeshRenderer::new(AnimationSpeed::Slow).draw(&mut slow, 2000);
        MeshRenderer::new(AnimationSpeed::Medium).draw(&mut fast, 1000);

        // Slow at 2000ms sees the same clock as medium at 1000ms.
        assert_eq!(slow, fast);
    }
}
