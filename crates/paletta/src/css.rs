//! CSS custom-property output: a `:root` block from the light steps and a
//! `prefers-color-scheme: dark` block from the dark steps, each with the
//! full 12-step variables plus the semantic aliases UI code consumes.

use color_theory::{GeneratedPalette, StepArray};

// Fixed destructive pair; red scales are outside the accent/gray shape.
const DESTRUCTIVE: &str = "#7F1D1D";
const DESTRUCTIVE_FOREGROUND: &str = "#FFFFFF";

pub fn generate_css(palette: &GeneratedPalette) -> String {
    let mut css = String::new();

    let accent = &palette.accent;
    let gray = &palette.gray;

    css.push_str(":root {\n");
    push_semantics(&mut css, "  ", &LIGHT_MAP, &accent.light_steps, &gray.light_steps);
    css.push('\n');
    push_steps(&mut css, "  ", "accent", &accent.light_steps);
    css.push_str(&format!(
        "  --accent-contrast: {};\n\n",
        accent.light_steps[0]
    ));
    push_steps(&mut css, "  ", "gray", &gray.light_steps);
    css.push_str(&format!("  --gray-contrast: {};\n", gray.light_steps[11]));
    css.push_str("}\n\n");

    css.push_str("@media (prefers-color-scheme: dark) {\n");
    css.push_str("  :root {\n");
    push_semantics(&mut css, "    ", &DARK_MAP, &accent.dark_steps, &gray.dark_steps);
    css.push('\n');
    push_steps(&mut css, "    ", "accent", &accent.dark_steps);
    css.push_str(&format!(
        "    --accent-contrast: {};\n\n",
        accent.dark_steps[11]
    ));
    push_steps(&mut css, "    ", "gray", &gray.dark_steps);
    css.push_str(&format!("    --gray-contrast: {};\n", gray.dark_steps[0]));
    css.push_str("  }\n");
    css.push_str("}\n");

    css
}

/// Which step (0-based) each semantic alias points at. Light and dark
/// diverge on a few entries (borders sit lower in dark mode, popovers
/// need elevation, text saturation differs).
struct SemanticMap {
    foreground_subtle: usize,
    popover: usize,
    secondary_foreground_from_gray: bool,
    accent: usize,
    border: usize,
    ring: usize,
}

const LIGHT_MAP: SemanticMap = SemanticMap {
    foreground_subtle: 10,
    popover: 0,
    secondary_foreground_from_gray: false,
    accent: 3,
    border: 6,
    ring: 8,
};

const DARK_MAP: SemanticMap = SemanticMap {
    foreground_subtle: 9,
    popover: 2,
    secondary_foreground_from_gray: true,
    accent: 4,
    border: 5,
    ring: 7,
};

fn push_semantics(
    css: &mut String,
    indent: &str,
    map: &SemanticMap,
    accent: &StepArray,
    gray: &StepArray,
) {
    let secondary_foreground = if map.secondary_foreground_from_gray {
        &gray[11]
    } else {
        &accent[11]
    };

    let pairs = [
        ("background", gray[0].as_str()),
        ("foreground", gray[11].as_str()),
        ("foreground-subtle", gray[map.foreground_subtle].as_str()),
        ("card", gray[1].as_str()),
        ("card-foreground", gray[11].as_str()),
        ("popover", gray[map.popover].as_str()),
        ("popover-foreground", gray[11].as_str()),
        ("primary", accent[8].as_str()),
        ("primary-foreground", accent[0].as_str()),
        ("secondary", accent[2].as_str()),
        ("secondary-foreground", secondary_foreground.as_str()),
        ("muted", gray[2].as_str()),
        ("muted-foreground", gray[10].as_str()),
        ("accent", accent[map.accent].as_str()),
        ("accent-foreground", accent[10].as_str()),
        ("destructive", DESTRUCTIVE),
        ("destructive-foreground", DESTRUCTIVE_FOREGROUND),
        ("border", gray[map.border].as_str()),
        ("input", gray[map.border].as_str()),
        ("ring", accent[map.ring].as_str()),
    ];

    for (name, value) in pairs {
        css.push_str(&format!("{}--{}: {};\n", indent, name, value));
    }
}

fn push_steps(css: &mut String, indent: &str, name: &str, steps: &StepArray) {
    for (i, color) in steps.iter().enumerate() {
        css.push_str(&format!("{}--{}-{}: {};\n", indent, name, i + 1, color));
    }
}
