//! Seed derivation, color-space conversion and fallback scale synthesis
//! for the palette pipeline. Everything in this crate is pure and
//! browser-independent.

mod convert;
mod fallback;
mod harmony;
mod model;

pub use convert::{hex_to_hsl, hsl_to_hex};
pub use fallback::{fallback_accent_scale, fallback_gray_scale};
pub use harmony::{derive_base_palette, random_harmonious};
pub use model::{
    BasePalette, ColorParseError, ColorScale, GeneratedPalette, Hsl, Scheme, SchemeParseError,
    SeedColor, StepArray,
};
