//! Scripted in-memory page for exercising the state machine without a
//! browser. Models the behaviors the protocol depends on: reactive
//! recompute gated on all three inputs being set, input clearing on mode
//! switch, one modal dialog at a time, and per-swatch failure injection.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use super::Page;
use crate::error::PageError;
use crate::selectors;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FakeMode {
    Light,
    Dark,
}

struct Inner {
    mode: FakeMode,
    inputs: HashMap<String, String>,
    removed_inputs: HashSet<String>,
    has_mode_toggle: bool,
    swatch_count: usize,
    light_colors: Vec<String>,
    dark_colors: Vec<String>,
    failing_swatches: HashSet<(FakeMode, usize)>,
    open_dialog: Option<usize>,
}

pub struct FakePage {
    inner: Arc<Mutex<Inner>>,
    fill_log: Arc<Mutex<Vec<(String, String)>>>,
    dialog_violations: Arc<Mutex<usize>>,
}

impl FakePage {
    /// A well-behaved tool page: 24 distinct swatches per mode, a working
    /// toggle, starting in light mode with empty inputs.
    pub fn scripted() -> Self {
        let light_colors = (0..selectors::SWATCH_COUNT)
            .map(|i| format!("#{:02X}{:02X}{:02X}", 10 * i + 5, 0x64, 0xDC))
            .collect();
        let dark_colors = (0..selectors::SWATCH_COUNT)
            .map(|i| format!("#{:02X}{:02X}{:02X}", 10 * i + 5, 0x28, 0x5A))
            .collect();

        FakePage {
            inner: Arc::new(Mutex::new(Inner {
                mode: FakeMode::Light,
                inputs: HashMap::new(),
                removed_inputs: HashSet::new(),
                has_mode_toggle: true,
                swatch_count: selectors::SWATCH_COUNT,
                light_colors,
                dark_colors,
                failing_swatches: HashSet::new(),
                open_dialog: None,
            })),
            fill_log: Arc::new(Mutex::new(Vec::new())),
            dialog_violations: Arc::new(Mutex::new(0)),
        }
    }

    pub fn light_swatches(&self) -> Vec<String> {
        self.inner.lock().unwrap().light_colors.clone()
    }

    pub fn dark_swatches(&self) -> Vec<String> {
        self.inner.lock().unwrap().dark_colors.clone()
    }

    pub fn fill_log(&self) -> Arc<Mutex<Vec<(String, String)>>> {
        Arc::clone(&self.fill_log)
    }

    pub fn violations(&self) -> Arc<Mutex<usize>> {
        Arc::clone(&self.dialog_violations)
    }

    pub fn start_in(&mut self, mode: FakeMode) {
        self.inner.lock().unwrap().mode = mode;
    }

    pub fn remove_mode_toggle(&mut self) {
        self.inner.lock().unwrap().has_mode_toggle = false;
    }

    pub fn remove_input(&mut self, selector: &str) {
        self.inner
            .lock()
            .unwrap()
            .removed_inputs
            .insert(selector.to_string());
    }

    /// The swatch at `index` never opens its dialog in `mode`.
    pub fn fail_swatch(&mut self, mode: FakeMode, index: usize) {
        self.inner
            .lock()
            .unwrap()
            .failing_swatches
            .insert((mode, index));
    }

    pub fn truncate_swatches(&mut self, count: usize) {
        self.inner.lock().unwrap().swatch_count = count;
    }
}

impl Inner {
    fn inputs_complete(&self) -> bool {
        [
            selectors::ACCENT_INPUT,
            selectors::GRAY_INPUT,
            selectors::BACKGROUND_INPUT,
        ]
        .iter()
        .all(|sel| self.inputs.get(*sel).is_some_and(|v| !v.is_empty()))
    }

    fn dialog_visible(&self, selector: &str) -> bool {
        (selector == selectors::DIALOG_OVERLAY || selector == selectors::DIALOG_HEX)
            && self.open_dialog.is_some()
    }
}

fn not_found(selector: &str) -> PageError {
    PageError::NotFound {
        selector: selector.to_string(),
    }
}

#[async_trait]
impl Page for FakePage {
    async fn goto(&self, _url: &str) -> Result<(), PageError> {
        Ok(())
    }

    async fn fill(&self, selector: &str, value: &str) -> Result<(), PageError> {
        let mut inner = self.inner.lock().unwrap();
        let is_input = [
            selectors::ACCENT_INPUT,
            selectors::GRAY_INPUT,
            selectors::BACKGROUND_INPUT,
        ]
        .contains(&selector);

        if !is_input || inner.removed_inputs.contains(selector) {
            return Err(not_found(selector));
        }

        inner.inputs.insert(selector.to_string(), value.to_string());
        self.fill_log
            .lock()
            .unwrap()
            .push((selector.to_string(), value.to_string()));
        Ok(())
    }

    async fn click(&self, selector: &str) -> Result<(), PageError> {
        let mut inner = self.inner.lock().unwrap();
        if selector == selectors::MODE_TOGGLE_OFF && inner.has_mode_toggle {
            inner.mode = match inner.mode {
                FakeMode::Light => FakeMode::Dark,
                FakeMode::Dark => FakeMode::Light,
            };
            // The real tool drops its inputs when the mode changes.
            inner.inputs.clear();
            return Ok(());
        }
        Err(not_found(selector))
    }

    async fn click_nth(&self, selector: &str, index: usize) -> Result<(), PageError> {
        let mut inner = self.inner.lock().unwrap();
        if selector != selectors::SWATCH || !inner.inputs_complete() || index >= inner.swatch_count
        {
            return Err(not_found(selector));
        }

        if inner.open_dialog.is_some() {
            *self.dialog_violations.lock().unwrap() += 1;
        }

        if !inner.failing_swatches.contains(&(inner.mode, index)) {
            inner.open_dialog = Some(index);
        }
        Ok(())
    }

    async fn element_count(&self, selector: &str) -> Result<usize, PageError> {
        let inner = self.inner.lock().unwrap();
        if selector == selectors::SWATCH {
            if inner.inputs_complete() {
                return Ok(inner.swatch_count);
            }
            return Ok(0);
        }
        Ok(0)
    }

    async fn read_text(&self, selector: &str) -> Result<String, PageError> {
        let inner = self.inner.lock().unwrap();

        if selector == selectors::MODE_TOGGLE_OFF {
            if !inner.has_mode_toggle {
                return Err(not_found(selector));
            }
            let off_label = match inner.mode {
                FakeMode::Light => "Dark",
                FakeMode::Dark => "Light",
            };
            return Ok(off_label.to_string());
        }

        if selector == selectors::DIALOG_HEX {
            let index = inner.open_dialog.ok_or_else(|| not_found(selector))?;
            let color = match inner.mode {
                FakeMode::Light => &inner.light_colors[index],
                FakeMode::Dark => &inner.dark_colors[index],
            };
            return Ok(format!("Step {} · {}", index % 12 + 1, color));
        }

        Err(not_found(selector))
    }

    async fn is_present(&self, selector: &str) -> Result<bool, PageError> {
        Ok(self.inner.lock().unwrap().dialog_visible(selector))
    }

    async fn wait_visible(&self, selector: &str, timeout: Duration) -> Result<(), PageError> {
        if self.inner.lock().unwrap().dialog_visible(selector) {
            Ok(())
        } else {
            Err(PageError::Timeout {
                selector: selector.to_string(),
                timeout,
            })
        }
    }

    async fn wait_detached(&self, selector: &str, timeout: Duration) -> Result<(), PageError> {
        if self.inner.lock().unwrap().dialog_visible(selector) {
            Err(PageError::Timeout {
                selector: selector.to_string(),
                timeout,
            })
        } else {
            Ok(())
        }
    }

    async fn press_escape(&self) -> Result<(), PageError> {
        self.inner.lock().unwrap().open_dialog = None;
        Ok(())
    }

    async fn settle(&self, _duration: Duration) {
        // The fake recomputes synchronously; no need to actually wait.
    }
}
