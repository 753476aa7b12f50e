//! Animated mesh-gradient rendering.
//!
//! This crate holds the whole visual effect: the RGB/HSL color math, a
//! small radial-gradient model, the pixel-buffer surface the gradients
//! composite onto, and the per-frame renderer with its run/stop lifecycle.

mod animation;
mod color;
mod gradient;
mod renderer;
mod surface;

pub use animation::MeshAnimation;
pub use color::{hsl_to_rgb, rgb_to_hsl, shift_hue};
pub use gradient::{ColorStop, RadialGradient};
pub use renderer::{ANCHORS, MeshRenderer, PALETTE, hue_shift};
pub use surface::Surface;
