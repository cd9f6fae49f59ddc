//! Terminal rendering of scales: a truecolor block per step plus its hex
//! value.

use std::io::{self, Write};

use color_theory::{GeneratedPalette, SeedColor, StepArray};
use owo_colors::OwoColorize;

/// A two-cell colored block for one step.
pub fn swatch(color: &SeedColor) -> String {
    let (r, g, b) = color.channels();
    format!("{}", "  ".on_truecolor(r, g, b))
}

/// `#000000` or `#FFFFFF`, whichever reads better on `background`.
/// Perceived brightness per the YIQ weighting.
pub fn contrast_text(background: &SeedColor) -> &'static str {
    let (r, g, b) = background.channels();
    let brightness = (u32::from(r) * 299 + u32::from(g) * 587 + u32::from(b) * 114) / 1000;
    if brightness >= 128 {
        "#000000"
    } else {
        "#FFFFFF"
    }
}

pub fn print_palette<W: Write>(out: &mut W, palette: &GeneratedPalette) -> io::Result<()> {
    writeln!(out, "Base colors:")?;
    for (name, color) in [
        ("accent", &palette.base.accent),
        ("gray", &palette.base.gray),
        ("light bg", &palette.base.light_background),
        ("dark bg", &palette.base.dark_background),
    ] {
        writeln!(out, "  {:<9} {} {}", name, swatch(color), color)?;
    }

    print_scale(out, "Accent (light)", &palette.accent.light_steps)?;
    print_scale(out, "Accent (dark)", &palette.accent.dark_steps)?;
    print_scale(out, "Gray (light)", &palette.gray.light_steps)?;
    print_scale(out, "Gray (dark)", &palette.gray.dark_steps)?;

    Ok(())
}

fn print_scale<W: Write>(out: &mut W, label: &str, steps: &StepArray) -> io::Result<()> {
    writeln!(out, "\n{}:", label)?;
    write!(out, "  ")?;
    for color in steps {
        write!(out, "{}", swatch(color))?;
    }
    writeln!(out)?;
    write!(out, "  ")?;
    for color in steps {
        write!(out, "{} ", color)?;
    }
    writeln!(out)?;
    Ok(())
}
