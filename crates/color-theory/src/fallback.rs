//! Deterministic, browser-independent 12-step scale synthesis, used when
//! live extraction is unavailable or came back incomplete.
//!
//! Both generators are mode-agnostic: the caller reuses them verbatim for
//! the light and dark placeholders of a substituted family.

use crate::convert::hsl_to_hex;
use crate::model::{Hsl, StepArray};

const LIGHTNESS_START: i16 = 95;
const LIGHTNESS_STEP: i16 = 7;
const LIGHTNESS_FLOOR: i16 = 5;

const SATURATION_START: i16 = 90;
const SATURATION_STEP: i16 = 5;
const SATURATION_FLOOR: i16 = 10;

/// Accent fallback: fixed hue, lightness descending from 95 by 7 per step
/// (floored at 5), saturation descending from 90 by 5 per step (floored
/// at 10).
pub fn fallback_accent_scale(hue: u16) -> StepArray {
    core::array::from_fn(|i| {
        let step = i as i16;
        hsl_to_hex(Hsl::new(
            hue,
            (SATURATION_START - SATURATION_STEP * step).max(SATURATION_FLOOR) as u8,
            step_lightness(step),
        ))
    })
}

/// Gray fallback: fixed saturation of 5 with the same lightness ramp.
pub fn fallback_gray_scale(hue: u16) -> StepArray {
    core::array::from_fn(|i| hsl_to_hex(Hsl::new(hue, 5, step_lightness(i as i16))))
}

fn step_lightness(step: i16) -> u8 {
    (LIGHTNESS_START - LIGHTNESS_STEP * step).max(LIGHTNESS_FLOOR) as u8
}
