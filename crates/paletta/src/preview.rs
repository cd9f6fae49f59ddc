//! Self-contained HTML preview: the four base colors, all four 12-step
//! rows, and the raw CSS variables.

use color_theory::{GeneratedPalette, SeedColor, StepArray};

use crate::css::generate_css;
use crate::swatch::contrast_text;

pub fn generate_html(palette: &GeneratedPalette) -> String {
    let base_cards = [
        ("Accent", "Primary brand color", &palette.base.accent),
        ("Gray", "Neutral color", &palette.base.gray),
        (
            "Light Background",
            "Light mode background",
            &palette.base.light_background,
        ),
        (
            "Dark Background",
            "Dark mode background",
            &palette.base.dark_background,
        ),
    ]
    .map(|(title, note, color)| base_card(title, note, color))
    .join("\n");

    let css = escape(&generate_css(palette));

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>Generated Color Palette</title>
<style>
body {{ font-family: -apple-system, BlinkMacSystemFont, sans-serif; margin: 0; padding: 20px; background: #f5f7fa; }}
.container {{ max-width: 1100px; margin: 0 auto; background: white; border-radius: 16px; padding: 32px; box-shadow: 0 20px 40px rgba(0,0,0,0.1); }}
h1 {{ text-align: center; font-weight: 300; }}
h2 {{ color: #555; margin: 32px 0 8px 0; font-weight: 500; }}
.mode-label {{ font-weight: 600; margin: 16px 0 8px 0; color: #666; }}
.base-colors {{ display: grid; grid-template-columns: repeat(auto-fit, minmax(200px, 1fr)); gap: 16px; }}
.base-color {{ text-align: center; padding: 16px; border-radius: 12px; }}
.scale-grid {{ display: grid; grid-template-columns: repeat(12, 1fr); gap: 8px; }}
.color-step {{ aspect-ratio: 1; border-radius: 8px; display: flex; align-items: center; justify-content: center; font-weight: 600; font-size: 0.85em; }}
.css-variables {{ background: #1a1a1a; color: #f0f0f0; padding: 20px; border-radius: 8px; overflow-x: auto; font-family: monospace; font-size: 0.85em; margin-top: 24px; }}
</style>
</head>
<body>
<div class="container">
<h1>Generated Color Palette</h1>

<h2>Base Colors</h2>
<div class="base-colors">
{base_cards}
</div>

<h2>Accent Scale (12 Steps)</h2>
<div class="mode-label">Light Mode</div>
{accent_light}
<div class="mode-label">Dark Mode</div>
{accent_dark}

<h2>Gray Scale (12 Steps)</h2>
<div class="mode-label">Light Mode</div>
{gray_light}
<div class="mode-label">Dark Mode</div>
{gray_dark}

<div class="css-variables">
<h3>Generated CSS Variables</h3>
<pre>{css}</pre>
</div>
</div>
</body>
</html>
"#,
        base_cards = base_cards,
        accent_light = scale_grid(&palette.accent.light_steps),
        accent_dark = scale_grid(&palette.accent.dark_steps),
        gray_light = scale_grid(&palette.gray.light_steps),
        gray_dark = scale_grid(&palette.gray.dark_steps),
        css = css,
    )
}

fn base_card(title: &str, note: &str, color: &SeedColor) -> String {
    format!(
        r#"<div class="base-color" style="background: {color}; color: {text};">
<h3>{title}</h3>
<p>{color}</p>
<small>{note}</small>
</div>"#,
        color = color,
        text = contrast_text(color),
        title = title,
        note = note,
    )
}

fn scale_grid(steps: &StepArray) -> String {
    let cells: String = steps
        .iter()
        .enumerate()
        .map(|(i, color)| {
            format!(
                r#"<div class="color-step" style="background: {color}; color: {text};" title="{color}">{step}</div>"#,
                color = color,
                text = contrast_text(color),
                step = i + 1,
            )
        })
        .collect();
    format!(r#"<div class="scale-grid">{}</div>"#, cells)
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}
