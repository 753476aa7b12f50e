//! RGB/HSL conversions behind the palette hue-shift animation.

use meshglow_core::{Hsl, Rgb};

/// Convert an RGB color (0-255 channels) to HSL (all components 0-1).
pub fn rgb_to_hsl(color: Rgb) -> Hsl {
    let r = color.r / 255.0;
    let g = color.g / 255.0;
    let b = color.b / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        // Achromatic: hue is arbitrary, saturation is zero.
        return Hsl { h: 0.0, s: 0.0, l };
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };

    let h = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    Hsl { h: h / 6.0, s, l }
}

/// Convert an HSL color (components 0-1) back to RGB (0-255 channels).
pub fn hsl_to_rgb(color: Hsl) -> Rgb {
    let Hsl { h, s, l } = color;

    if s == 0.0 {
        let v = l * 255.0;
        return Rgb::new(v, v, v);
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;

    Rgb::new(
        hue_to_channel(p, q, h + 1.0 / 3.0) * 255.0,
        hue_to_channel(p, q, h) * 255.0,
        hue_to_channel(p, q, h - 1.0 / 3.0) * 255.0,
    )
}

/// Rotate a color around the hue circle by `amount` turns, holding
/// saturation and lightness fixed.
pub fn shift_hue(color: Rgb, amount: f32) -> Rgb {
    let hsl = rgb_to_hsl(color);
    // The +1.0 keeps small negative shifts positive before the modulo.
    let h = (hsl.h + amount + 1.0) % 1.0;
    hsl_to_rgb(Hsl { h, ..hsl })
}

fn hue_to_channel(p: f32, q: f32, mut t: f32) -> f32 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}
