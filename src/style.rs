// ABOUTME: Colors and shared styling for generated slides
// ABOUTME: Defines the RGB type and the default black-background slide style

use crate::errors::{KidaseError, Result};
use std::fmt;
use std::str::FromStr;

/// EMU per typographic point.
pub const EMU_PER_POINT: u64 = 12_700;

/// Largest size DrawingML accepts for a run (`sz` tops out at 400000).
pub const MAX_FONT_SIZE_PT: u32 = 4_000;

/// An RGB color triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0, 0, 0);
    pub const WHITE: Rgb = Rgb(255, 255, 255);
    pub const RED: Rgb = Rgb(255, 0, 0);
    pub const GREEN: Rgb = Rgb(0, 176, 80);
    pub const GOLD: Rgb = Rgb(255, 192, 0);

    /// Upper-case `RRGGBB` form used by DrawingML `srgbClr`.
    pub fn hex(&self) -> String {
        format!("{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.hex())
    }
}

impl FromStr for Rgb {
    type Err = KidaseError;

    /// Parse `RRGGBB` or `#RRGGBB`.
    fn from_str(s: &str) -> Result<Self> {
        let digits = s.trim().trim_start_matches('#');
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(KidaseError::ConfigError(format!(
                "Invalid color '{}', expected RRGGBB",
                s
            )));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map_err(|e| KidaseError::ConfigError(format!("Invalid color '{}': {}", s, e)))
        };
        Ok(Rgb(channel(0)?, channel(2)?, channel(4)?))
    }
}

/// Styling shared by every text box on every slide
#[derive(Debug, Clone, PartialEq)]
pub struct SlideStyle {
    pub font: String,
    pub font_size_pt: u32,
    pub font_color: Rgb,
    pub background_color: Rgb,
    pub border_color: Rgb,
    pub border_width_emu: u64,
}

impl Default for SlideStyle {
    fn default() -> Self {
        Self {
            font: "Arial".to_string(),
            font_size_pt: 24,
            font_color: Rgb::WHITE,
            background_color: Rgb::BLACK,
            border_color: Rgb::WHITE,
            border_width_emu: EMU_PER_POINT, // 1pt
        }
    }
}

impl SlideStyle {
    /// Font size in hundredths of a point, as DrawingML `sz` expects.
    /// Clamped to `1..=MAX_FONT_SIZE_PT` points.
    pub fn font_size_centipoints(&self) -> u32 {
        self.font_size_pt.clamp(1, MAX_FONT_SIZE_PT) * 100
    }
}
