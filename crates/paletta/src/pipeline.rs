//! Orchestration: seed → base palette → extraction (or offline fallback)
//! → rendered outputs on disk.

use std::fs;
use std::path::{Path, PathBuf};

use color_theory::{
    derive_base_palette, fallback_accent_scale, fallback_gray_scale, hex_to_hsl, BasePalette,
    ColorScale, GeneratedPalette, Scheme, SeedColor,
};
use scale_extractor::{BrowserSession, ScaleExtractor, Timing};
use tracing::info;

use crate::{css, preview};

pub struct PipelineArgs {
    pub seed: SeedColor,
    pub scheme: Scheme,
    /// Skip the browser entirely and synthesize both families.
    pub offline: bool,
    /// Headful, slowed-down browser session. Timing only, never outputs.
    pub debug_browser: bool,
}

/// Runs the acquisition pipeline. The browser session, when one is
/// opened, is closed on every exit path before the result is inspected.
pub async fn generate(args: &PipelineArgs) -> crate::Result<GeneratedPalette> {
    let base = derive_base_palette(&args.seed, args.scheme);
    info!(
        seed = %args.seed,
        scheme = %args.scheme,
        accent = %base.accent,
        gray = %base.gray,
        "derived base palette"
    );

    if args.offline {
        info!("offline mode: generating fallback scales");
        return Ok(offline_palette(base));
    }

    let timing = if args.debug_browser {
        Timing::debug()
    } else {
        Timing::normal()
    };

    let session = BrowserSession::launch(args.debug_browser, timing).await?;
    let outcome = ScaleExtractor::new(session.page().clone(), timing)
        .run(&base)
        .await;
    // Cleanup happens before the outcome is propagated, so a failed run
    // can't leak the browser process.
    session.close().await;

    Ok(outcome?)
}

/// Browser-free palette: both families synthesized from the derived base
/// hues, the same scale reused for light and dark placeholders.
fn offline_palette(base: BasePalette) -> GeneratedPalette {
    let accent_steps = fallback_accent_scale(hex_to_hsl(&base.accent).h);
    let gray_steps = fallback_gray_scale(hex_to_hsl(&base.gray).h);

    GeneratedPalette {
        accent: ColorScale {
            light_steps: accent_steps.clone(),
            dark_steps: accent_steps,
        },
        gray: ColorScale {
            light_steps: gray_steps.clone(),
            dark_steps: gray_steps,
        },
        base,
    }
}

/// Writes `palette.css` and `palette-preview.html` into `out_dir`,
/// creating the directory when needed. Returns both paths.
pub fn write_outputs(
    palette: &GeneratedPalette,
    out_dir: &Path,
) -> crate::Result<(PathBuf, PathBuf)> {
    fs::create_dir_all(out_dir)?;

    let css_path = out_dir.join("palette.css");
    fs::write(&css_path, css::generate_css(palette))?;

    let html_path = out_dir.join("palette-preview.html");
    fs::write(&html_path, preview::generate_html(palette))?;

    Ok((css_path, html_path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use temp_dir::TempDir;

    fn args(offline: bool) -> PipelineArgs {
        PipelineArgs {
            seed: "#3B82F6".parse().unwrap(),
            scheme: Scheme::Monochromatic,
            offline,
            debug_browser: false,
        }
    }

    #[tokio::test]
    async fn offline_run_produces_full_scales() {
        let palette = generate(&args(true)).await.unwrap();

        assert_eq!(palette.accent.light_steps.len(), 12);
        assert_eq!(palette.accent.dark_steps.len(), 12);
        assert_eq!(palette.gray.light_steps.len(), 12);
        assert_eq!(palette.gray.dark_steps.len(), 12);

        for color in &palette.accent.light_steps {
            assert!(color.as_str().starts_with('#'));
            assert_eq!(color.as_str().len(), 7);
        }
    }

    #[tokio::test]
    async fn offline_accent_lightness_never_rises() {
        let palette = generate(&args(true)).await.unwrap();

        let lightnesses: Vec<u8> = palette
            .accent
            .light_steps
            .iter()
            .map(|c| hex_to_hsl(c).l)
            .collect();

        for pair in lightnesses.windows(2) {
            assert!(pair[1] <= pair[0], "lightness rose: {:?}", lightnesses);
        }
    }

    #[tokio::test]
    async fn offline_run_is_deterministic() {
        let first = generate(&args(true)).await.unwrap();
        let second = generate(&args(true)).await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn writes_css_and_preview_files() {
        let out_dir = TempDir::new().unwrap();
        let palette = generate(&args(true)).await.unwrap();

        let (css_path, html_path) = write_outputs(&palette, out_dir.path()).unwrap();

        let css = std::fs::read_to_string(css_path).unwrap();
        assert!(css.contains(":root"));
        assert!(css.contains("@media (prefers-color-scheme: dark)"));

        let html = std::fs::read_to_string(html_path).unwrap();
        assert!(html.contains("<!DOCTYPE html>"));
    }
}
