//! Core color and animation types shared across the meshglow crates.

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// An RGB color with floating-point channels in the 0-255 range.
///
/// Every color in meshglow uses this one representation end to end: the
/// palette constants are defined on this scale and conversions through HSL
/// scale back to it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    /// Create a color from 0-255 channel values.
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Convert to a terminal cell color. Out-of-range channels saturate.
    pub fn to_color(self) -> Color {
        Color::Rgb(self.r as u8, self.g as u8, self.b as u8)
    }
}

/// An HSL color with all three components normalized to the 0-1 range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub h: f32,
    pub s: f32,
    pub l: f32,
}

/// Animation speed, applied as a multiplier to the shared clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimationSpeed {
    Slow,
    #[default]
    Medium,
    Fast,
}

impl AnimationSpeed {
    /// Multiplier applied to elapsed milliseconds before animation math.
    pub fn time_scale(self) -> f32 {
        match self {
            Self::Slow => 0.5,
            Self::Medium => 1.0,
            Self::Fast => 2.0,
        }
    }

    /// Cycle to the next speed.
    pub fn next(self) -> Self {
        match self {
            Self::Slow => Self::Medium,
            Self::Medium => Self::Fast,
            Self::Fast => Self::Slow,
        }
    }

    /// Human-readable label for the help footer.
    pub fn label(self) -> &'static str {
        match self {
            Self::Slow => "slow",
            Self::Medium => "medium",
            Self::Fast => "fast",
        }
    }
}
