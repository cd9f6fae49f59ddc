//! Hex ↔ HSL conversion on the integer contract used everywhere in this
//! pipeline: hue 0..360, saturation/lightness 0..=100, rounded to nearest.
//!
//! The round trip `hsl_to_hex(hex_to_hsl(x))` reproduces `x` to within ±1
//! per channel. Exact equality is not guaranteed because both directions
//! round to integers; callers must not rely on it.

use palette::{FromColor, Hsl as FloatHsl, Srgb};

use crate::model::{Hsl, SeedColor};

pub fn hex_to_hsl(color: &SeedColor) -> Hsl {
    let (r, g, b) = color.channels();
    let srgb = Srgb::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0);
    let hsl = FloatHsl::from_color(srgb);

    Hsl::new(
        (hsl.hue.into_positive_degrees().round() as u16) % 360,
        (hsl.saturation * 100.0).round() as u8,
        (hsl.lightness * 100.0).round() as u8,
    )
}

pub fn hsl_to_hex(hsl: Hsl) -> SeedColor {
    let float = FloatHsl::new(hsl.h as f32, hsl.s as f32 / 100.0, hsl.l as f32 / 100.0);
    let srgb = Srgb::from_color(float);

    SeedColor::from_rgb(
        (srgb.red * 255.0).round().clamp(0.0, 255.0) as u8,
        (srgb.green * 255.0).round().clamp(0.0, 255.0) as u8,
        (srgb.blue * 255.0).round().clamp(0.0, 255.0) as u8,
    )
}
