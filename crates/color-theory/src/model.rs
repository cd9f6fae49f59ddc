use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// A 24-bit RGB color, stored as a normalized uppercase `#RRGGBB` string.
///
/// Parsing accepts `#RRGGBB`, `#RGB` and the bare 6- or 3-digit forms,
/// case-insensitively. Three-digit shorthand expands by doubling each digit.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SeedColor(String);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorParseError {
    #[error("invalid hex color '{0}': expected #RRGGBB or #RGB")]
    InvalidFormat(String),
    #[error("invalid hex digit in color '{0}'")]
    InvalidDigit(String),
}

impl SeedColor {
    /// Builds a seed color directly from channel values.
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        SeedColor(format!("#{:02X}{:02X}{:02X}", r, g, b))
    }

    /// The normalized `#RRGGBB` form.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The three RGB channels.
    pub fn channels(&self) -> (u8, u8, u8) {
        // Infallible: the constructor only stores validated digits.
        let r = u8::from_str_radix(&self.0[1..3], 16).unwrap_or(0);
        let g = u8::from_str_radix(&self.0[3..5], 16).unwrap_or(0);
        let b = u8::from_str_radix(&self.0[5..7], 16).unwrap_or(0);
        (r, g, b)
    }
}

impl FromStr for SeedColor {
    type Err = ColorParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let digits = input.trim().trim_start_matches('#');

        let expanded = match digits.len() {
            6 => digits.to_string(),
            3 => digits.chars().flat_map(|c| [c, c]).collect(),
            _ => return Err(ColorParseError::InvalidFormat(input.to_string())),
        };

        if !expanded.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorParseError::InvalidDigit(input.to_string()));
        }

        Ok(SeedColor(format!("#{}", expanded.to_ascii_uppercase())))
    }
}

impl fmt::Display for SeedColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Integer HSL: hue in degrees 0..360, saturation and lightness in 0..=100.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hsl {
    pub h: u16,
    pub s: u8,
    pub l: u8,
}

impl Hsl {
    /// Hue wraps modulo 360; saturation and lightness clamp to 100.
    pub fn new(h: u16, s: u8, l: u8) -> Self {
        Hsl {
            h: h % 360,
            s: s.min(100),
            l: l.min(100),
        }
    }

    /// This hue rotated by `offset` degrees.
    pub fn rotated(self, offset: u16) -> u16 {
        (self.h + offset) % 360
    }
}

/// Color-harmony rule controlling the hue offsets of seed derivation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Scheme {
    Monochromatic,
    #[default]
    Analogous,
    Complementary,
    Triadic,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown scheme '{0}': expected monochromatic, analogous, complementary or triadic")]
pub struct SchemeParseError(String);

impl FromStr for Scheme {
    type Err = SchemeParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.to_ascii_lowercase().as_str() {
            "monochromatic" => Ok(Scheme::Monochromatic),
            "analogous" => Ok(Scheme::Analogous),
            "complementary" => Ok(Scheme::Complementary),
            "triadic" => Ok(Scheme::Triadic),
            _ => Err(SchemeParseError(input.to_string())),
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Scheme::Monochromatic => "monochromatic",
            Scheme::Analogous => "analogous",
            Scheme::Complementary => "complementary",
            Scheme::Triadic => "triadic",
        };
        f.write_str(name)
    }
}

/// The four colors derived once per run from one seed and one scheme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasePalette {
    pub accent: SeedColor,
    pub gray: SeedColor,
    pub light_background: SeedColor,
    pub dark_background: SeedColor,
}

/// One 12-step progression. The array type makes the completeness
/// invariant structural: a scale with fewer than 12 entries cannot exist.
pub type StepArray = [SeedColor; 12];

/// Both modes of one color family.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorScale {
    pub light_steps: StepArray,
    pub dark_steps: StepArray,
}

/// The final output of the extraction pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPalette {
    pub base: BasePalette,
    pub accent: ColorScale,
    pub gray: ColorScale,
}
