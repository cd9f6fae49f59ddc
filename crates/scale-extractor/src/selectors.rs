//! The DOM contract with the external tool.
//!
//! Versioned against radix-ui.com/colors/custom as of mid-2025. This
//! contract is fragile by nature: when the site changes, only this module
//! should need updating.

use once_cell::sync::Lazy;
use regex::Regex;

pub const TOOL_URL: &str = "https://www.radix-ui.com/colors/custom";

/// The three fill-able text inputs.
pub const ACCENT_INPUT: &str = "input#accent";
pub const GRAY_INPUT: &str = "input#gray";
pub const BACKGROUND_INPUT: &str = "input#bg";

/// The unselected half of the two-state mode toggle. Its text is the name
/// of the mode that is currently *off* ("Light" or "Dark"); clicking it
/// switches to that mode.
pub const MODE_TOGGLE_OFF: &str = "button[data-mode-switch][data-state='off']";

/// One clickable swatch per scale step, 12 accent followed by 12 gray.
pub const SWATCH: &str = "button[data-swatch]";

/// The per-swatch detail dialog and the control inside it that carries the
/// hex value.
pub const DIALOG_OVERLAY: &str = "[data-dialog-overlay]";
pub const DIALOG_HEX: &str = "[data-dialog-overlay] [data-color-value]";

/// Accent swatches come first, then gray.
pub const SWATCHES_PER_FAMILY: usize = 12;
pub const SWATCH_COUNT: usize = SWATCHES_PER_FAMILY * 2;

static HEX_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"#[0-9a-fA-F]{6}\b").unwrap());

/// The first `#RRGGBB` token in `text`, if any.
pub fn find_hex(text: &str) -> Option<&str> {
    HEX_RE.find(text).map(|m| m.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_hex_embedded_in_dialog_text() {
        assert_eq!(find_hex("Step 4 — #3B82F6 (copy)"), Some("#3B82F6"));
        assert_eq!(find_hex("#ffaa00"), Some("#ffaa00"));
    }

    #[test]
    fn rejects_short_and_long_runs() {
        assert_eq!(find_hex("#FFF"), None);
        assert_eq!(find_hex("#1234567"), None);
        assert_eq!(find_hex("no color here"), None);
    }
}
