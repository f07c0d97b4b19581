//! Color theory engine: 5-swatch palettes from a seed color.
//!
//! Harmonious palettes rotate the seed hue by fixed offsets (base, analogous,
//! complementary, split-complementary, triadic hint) and nudge saturation and
//! lightness per position. Random palettes draw every unlocked swatch uniformly.

use std::fmt;
use std::str::FromStr;
use rand::Rng;
use serde::{Deserialize, Serialize};
use crate::utils::{ToolError, ToolResult};

/// Number of swatches in a palette.
pub const PALETTE_SIZE: usize = 5;

const HARMONY_OFFSETS: [i32; PALETTE_SIZE] = [0, 30, 180, 210, 60];

/// An sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Hue in degrees [0, 360), saturation and lightness in percent [0, 100].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hsl {
    pub h: u16,
    pub s: u8,
    pub l: u8,
}

impl Rgb {
    pub fn from_u24(value: u32) -> Self {
        Self {
            r: (value >> 16) as u8,
            g: (value >> 8) as u8,
            b: value as u8,
        }
    }

    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::from_u24(rng.gen_range(0..=0xFF_FFFF))
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    pub fn to_css(self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }

    pub fn to_hsl(self) -> Hsl {
        let r = self.r as f64 / 255.0;
        let g = self.g as f64 / 255.0;
        let b = self.b as f64 / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;
        let (mut h, mut s) = (0.0, 0.0);

        if max != min {
            let d = max - min;
            s = if l > 0.5 { d / (2.0 - max - min) } else { d / (max + min) };
            h = if max == r {
                ((g - b) / d + if g < b { 6.0 } else { 0.0 }) / 6.0
            } else if max == g {
                ((b - r) / d + 2.0) / 6.0
            } else {
                ((r - g) / d + 4.0) / 6.0
            };
        }

        Hsl {
            h: ((h * 360.0).round() as u16) % 360,
            s: (s * 100.0).round() as u8,
            l: (l * 100.0).round() as u8,
        }
    }

    /// Text color with acceptable contrast on this background.
    ///
    /// Uses the `0.299R + 0.587G + 0.114B` luma approximation, not WCAG contrast.
    pub fn contrast_text(self) -> Rgb {
        let luminance =
            (0.299 * self.r as f64 + 0.587 * self.g as f64 + 0.114 * self.b as f64) / 255.0;
        if luminance > 0.5 {
            Rgb { r: 0, g: 0, b: 0 }
        } else {
            Rgb { r: 255, g: 255, b: 255 }
        }
    }
}

impl Hsl {
    pub fn to_rgb(self) -> Rgb {
        let h = self.h as f64;
        let s = self.s.min(100) as f64 / 100.0;
        let l = self.l.min(100) as f64 / 100.0;
        let a = s * l.min(1.0 - l);
        let channel = |n: f64| {
            let k = (n + h / 30.0) % 12.0;
            let color = l - a * (k - 3.0).min(9.0 - k).min(1.0).max(-1.0);
            (255.0 * color).round().clamp(0.0, 255.0) as u8
        };
        Rgb {
            r: channel(0.0),
            g: channel(8.0),
            b: channel(4.0),
        }
    }
}

impl FromStr for Rgb {
    type Err = ToolError;

    /// Parses `#rrggbb` or `rrggbb`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ToolError::validation(format!("Invalid hex color: {s}")));
        }
        let value = u32::from_str_radix(hex, 16)
            .map_err(|_| ToolError::validation(format!("Invalid hex color: {s}")))?;
        Ok(Self::from_u24(value))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Serialize for Rgb {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// One palette entry. Locked swatches survive regeneration unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Swatch {
    pub hex: Rgb,
    #[serde(default)]
    pub locked: bool,
}

impl Swatch {
    pub fn new(color: Rgb) -> Self {
        Self { hex: color, locked: false }
    }
}

/// Printable representations of a swatch.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SwatchView {
    pub hex: String,
    pub rgb: String,
    pub hsl: Hsl,
    pub contrast_text: String,
    pub locked: bool,
}

impl From<&Swatch> for SwatchView {
    fn from(swatch: &Swatch) -> Self {
        Self {
            hex: swatch.hex.to_hex(),
            rgb: swatch.hex.to_css(),
            hsl: swatch.hex.to_hsl(),
            contrast_text: swatch.hex.contrast_text().to_hex(),
            locked: swatch.locked,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaletteMode {
    #[default]
    Harmonious,
    Random,
}

/// Ordered, fixed-size set of swatches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    pub swatches: [Swatch; PALETTE_SIZE],
}

/// The five harmonious colors derived from `seed`.
pub fn harmonious(seed: Rgb) -> [Rgb; PALETTE_SIZE] {
    let Hsl { h, s, l } = seed.to_hsl();
    let mut colors = [seed; PALETTE_SIZE];
    for (i, offset) in HARMONY_OFFSETS.iter().enumerate() {
        let nudge = if i % 2 == 0 { -10 } else { 10 };
        let hue = (h as i32 + offset).rem_euclid(360);
        let sat = (s as i32 + nudge).clamp(20, 100);
        let light = (l as i32 + (i as i32 - 2) * 10).clamp(25, 85);
        colors[i] = Hsl {
            h: hue as u16,
            s: sat as u8,
            l: light as u8,
        }
        .to_rgb();
    }
    colors
}

impl Palette {
    /// Builds an unlocked harmonious palette around `seed`.
    pub fn from_seed(seed: Rgb) -> Self {
        Self {
            swatches: harmonious(seed).map(Swatch::new),
        }
    }

    /// Builds an unlocked palette from a random seed.
    pub fn random<R: Rng + ?Sized>(mode: PaletteMode, rng: &mut R) -> Self {
        let mut palette = Self::from_seed(Rgb::random(rng));
        if mode == PaletteMode::Random {
            palette.regenerate(mode, None, rng);
        }
        palette
    }

    /// Accepts exactly [`PALETTE_SIZE`] swatches.
    pub fn from_swatches(swatches: Vec<Swatch>) -> ToolResult<Self> {
        let count = swatches.len();
        let swatches: [Swatch; PALETTE_SIZE] = swatches.try_into().map_err(|_| {
            ToolError::validation(format!(
                "A palette has exactly {PALETTE_SIZE} colors, got {count}"
            ))
        })?;
        Ok(Self { swatches })
    }

    /// Regenerates every unlocked swatch in place.
    ///
    /// Harmonious mode derives colors from `seed`, or from a fresh random seed
    /// when none is given. Locked swatches never change; with every swatch
    /// locked the palette is returned as is.
    pub fn regenerate<R: Rng + ?Sized>(&mut self, mode: PaletteMode, seed: Option<Rgb>, rng: &mut R) {
        if self.swatches.iter().all(|s| s.locked) {
            return;
        }
        match mode {
            PaletteMode::Harmonious => {
                let base = seed.unwrap_or_else(|| Rgb::random(rng));
                let fresh = harmonious(base);
                for (swatch, color) in self.swatches.iter_mut().zip(fresh) {
                    if !swatch.locked {
                        swatch.hex = color;
                    }
                }
            }
            PaletteMode::Random => {
                for swatch in self.swatches.iter_mut().filter(|s| !s.locked) {
                    swatch.hex = Rgb::random(rng);
                }
            }
        }
    }

    /// Flips the lock on the swatch at `index`.
    pub fn toggle_lock(&mut self, index: usize) -> ToolResult<()> {
        let swatch = self
            .swatches
            .get_mut(index)
            .ok_or_else(|| ToolError::validation(format!("No swatch at index {index}")))?;
        swatch.locked = !swatch.locked;
        Ok(())
    }

    pub fn views(&self) -> Vec<SwatchView> {
        self.swatches.iter().map(SwatchView::from).collect()
    }
}
