//! The extraction state machine: Open → FillLight → EnsureLightMode →
//! ExtractLight → SwitchDark → ExtractDark → Done.
//!
//! The flow is strictly linear; the only recovery path is per swatch,
//! where a failed dialog read leaves an empty slot. Families that end a
//! run with fewer than 12 entries in either mode are substituted wholesale
//! by the fallback generator, covering both modes, so light and dark steps
//! always describe the same family.

use color_theory::{
    fallback_accent_scale, fallback_gray_scale, hex_to_hsl, BasePalette, ColorScale,
    GeneratedPalette, SeedColor, StepArray,
};
use tracing::{info, warn};

use crate::error::{ExtractError, PageError, SwatchError};
use crate::page::{Page, Timing};
use crate::selectors;

pub struct ScaleExtractor<P: Page> {
    page: P,
    timing: Timing,
}

/// What one mode's extraction loop produced. `None` means the family did
/// not reach 12 entries and must be substituted.
#[derive(Debug)]
struct ModeColors {
    accent: Option<StepArray>,
    gray: Option<StepArray>,
}

impl ModeColors {
    fn empty() -> Self {
        ModeColors {
            accent: None,
            gray: None,
        }
    }
}

impl<P: Page> ScaleExtractor<P> {
    pub fn new(page: P, timing: Timing) -> Self {
        ScaleExtractor { page, timing }
    }

    /// Runs the whole pipeline for one base palette. Fatal failures abort
    /// with an error; everything else degrades into fallback scales. The
    /// caller is responsible for closing the browser session afterwards.
    pub async fn run(&self, base: &BasePalette) -> Result<GeneratedPalette, ExtractError> {
        info!(url = selectors::TOOL_URL, "opening color tool");
        self.page
            .goto(selectors::TOOL_URL)
            .await
            .map_err(|source| ExtractError::Navigation {
                url: selectors::TOOL_URL.to_string(),
                source,
            })?;

        info!("filling inputs for light mode");
        self.fill_inputs(base, &base.light_background).await?;
        if self.ensure_light_mode().await {
            // The tool clears its inputs on any mode switch, including
            // this corrective one.
            self.fill_inputs(base, &base.light_background).await?;
        }

        info!("extracting light mode swatches");
        let light = self.extract_mode("light").await;

        info!("switching to dark mode");
        self.switch_dark(base).await?;

        info!("extracting dark mode swatches");
        let dark = self.extract_mode("dark").await;

        info!("assembling palette");
        Ok(assemble(base.clone(), light, dark))
    }

    /// Sets the three inputs, giving the tool time to recompute after each
    /// one; there is no explicit recompute action to trigger.
    async fn fill_inputs(
        &self,
        base: &BasePalette,
        background: &SeedColor,
    ) -> Result<(), ExtractError> {
        let fields = [
            (selectors::ACCENT_INPUT, &base.accent),
            (selectors::GRAY_INPUT, &base.gray),
            (selectors::BACKGROUND_INPUT, background),
        ];

        for (selector, value) in fields {
            self.page
                .fill(selector, value.as_str())
                .await
                .map_err(|source| ExtractError::MissingInput {
                    selector: selector.to_string(),
                    source,
                })?;
            self.page.settle(self.timing.fill_settle).await;
        }

        Ok(())
    }

    /// If the unselected toggle half reads "Light", the tool is in dark
    /// mode; click over. Non-fatal: a missing toggle is logged and the
    /// run proceeds assuming light mode. Returns whether a toggle click
    /// actually happened.
    async fn ensure_light_mode(&self) -> bool {
        match self.page.read_text(selectors::MODE_TOGGLE_OFF).await {
            Ok(label) if label.trim() == "Light" => {
                if let Err(err) = self.page.click(selectors::MODE_TOGGLE_OFF).await {
                    warn!(error = %err, "could not click mode toggle; proceeding");
                    return false;
                }
                self.page.settle(self.timing.mode_settle).await;
                true
            }
            Ok(_) => false,
            Err(err) => {
                warn!(error = %err, "mode toggle not found; assuming light mode");
                false
            }
        }
    }

    /// Clicks over to dark mode and re-fills all three inputs with the
    /// dark background. The refill is mandatory: the tool clears its
    /// inputs on mode switch.
    async fn switch_dark(&self, base: &BasePalette) -> Result<(), ExtractError> {
        let label = self
            .page
            .read_text(selectors::MODE_TOGGLE_OFF)
            .await
            .map_err(|source| ExtractError::ModeSwitch { source })?;

        if label.trim() != "Dark" {
            warn!(label = label.trim(), "unexpected mode toggle label");
        }

        self.page
            .click(selectors::MODE_TOGGLE_OFF)
            .await
            .map_err(|source| ExtractError::ModeSwitch { source })?;
        self.page.settle(self.timing.mode_settle).await;

        self.fill_inputs(base, &base.dark_background).await
    }

    /// The per-mode extraction loop over all 24 swatches: the first 12 are
    /// the accent family, the next 12 gray.
    async fn extract_mode(&self, mode: &str) -> ModeColors {
        let count = match self.page.element_count(selectors::SWATCH).await {
            Ok(count) => count,
            Err(err) => {
                warn!(mode, error = %err, "could not enumerate swatches");
                return ModeColors::empty();
            }
        };

        if count < selectors::SWATCH_COUNT {
            warn!(
                mode,
                found = count,
                expected = selectors::SWATCH_COUNT,
                "too few swatches on page"
            );
            return ModeColors::empty();
        }

        let mut slots: Vec<Option<SeedColor>> = Vec::with_capacity(selectors::SWATCH_COUNT);
        for index in 0..selectors::SWATCH_COUNT {
            slots.push(self.read_swatch(mode, index).await);
        }

        ModeColors {
            accent: complete_family(&slots[..selectors::SWATCHES_PER_FAMILY]),
            gray: complete_family(&slots[selectors::SWATCHES_PER_FAMILY..]),
        }
    }

    /// One swatch: enforce the no-dialog precondition, click, wait for the
    /// dialog, read the hex, dismiss, wait for detach. Any failure is
    /// caught here and turns into an empty slot.
    async fn read_swatch(&self, mode: &str, index: usize) -> Option<SeedColor> {
        match self.try_read_swatch(index).await {
            Ok(color) => Some(color),
            Err(err) => {
                warn!(mode, index, error = %err, "swatch read failed; slot left empty");
                // Best effort: don't let a stuck dialog poison later slots.
                let _ = self.dismiss_dialog().await;
                None
            }
        }
    }

    async fn try_read_swatch(&self, index: usize) -> Result<SeedColor, SwatchError> {
        self.ensure_no_dialog_open().await?;

        self.page.click_nth(selectors::SWATCH, index).await?;
        self.page
            .wait_visible(selectors::DIALOG_OVERLAY, self.timing.dialog_timeout)
            .await?;

        let text = self.page.read_text(selectors::DIALOG_HEX).await?;
        let hex = selectors::find_hex(&text).ok_or_else(|| SwatchError::NoHex {
            text: text.clone(),
        })?;
        let color: SeedColor = hex.parse().map_err(|_| SwatchError::NoHex { text })?;

        self.dismiss_dialog().await?;
        Ok(color)
    }

    /// Invariant: no detail dialog may be open before a swatch click.
    /// Opening a second dialog over the first corrupts extraction order.
    async fn ensure_no_dialog_open(&self) -> Result<(), PageError> {
        if self.page.is_present(selectors::DIALOG_OVERLAY).await? {
            warn!("stray dialog open before swatch click; dismissing");
            self.dismiss_dialog().await?;
        }
        Ok(())
    }

    async fn dismiss_dialog(&self) -> Result<(), PageError> {
        self.page.press_escape().await?;
        self.page
            .wait_detached(selectors::DIALOG_OVERLAY, self.timing.dialog_timeout)
            .await
    }
}

/// Twelve present slots make a complete family; anything less is `None`.
fn complete_family(slots: &[Option<SeedColor>]) -> Option<StepArray> {
    let colors: Vec<SeedColor> = slots.iter().flatten().cloned().collect();
    let array: StepArray = colors.try_into().ok()?;
    Some(array)
}

/// Upgrades incomplete families to fallback scales. Substitution is per
/// family and always covers both modes: partial real plus partial
/// synthetic data within one family is disallowed.
fn assemble(base: BasePalette, light: ModeColors, dark: ModeColors) -> GeneratedPalette {
    let accent = match (light.accent, dark.accent) {
        (Some(light_steps), Some(dark_steps)) => ColorScale {
            light_steps,
            dark_steps,
        },
        _ => {
            let hue = hex_to_hsl(&base.accent).h;
            info!(hue, "accent scale incomplete; substituting fallback for both modes");
            let steps = fallback_accent_scale(hue);
            ColorScale {
                light_steps: steps.clone(),
                dark_steps: steps,
            }
        }
    };

    let gray = match (light.gray, dark.gray) {
        (Some(light_steps), Some(dark_steps)) => ColorScale {
            light_steps,
            dark_steps,
        },
        _ => {
            let hue = hex_to_hsl(&base.gray).h;
            info!(hue, "gray scale incomplete; substituting fallback for both modes");
            let steps = fallback_gray_scale(hue);
            ColorScale {
                light_steps: steps.clone(),
                dark_steps: steps,
            }
        }
    };

    GeneratedPalette { base, accent, gray }
}
