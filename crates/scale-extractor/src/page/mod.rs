//! The "controllable page" capability the state machine is written
//! against. The real implementation drives Chrome over CDP; tests use an
//! in-memory fake.

use std::time::Duration;

use async_trait::async_trait;

use crate::error::PageError;

mod cdp;
#[cfg(test)]
pub(crate) mod fake;

pub use cdp::CdpPage;

#[async_trait]
pub trait Page: Send + Sync {
    async fn goto(&self, url: &str) -> Result<(), PageError>;

    /// Replaces the value of a text input and fires the events the page
    /// needs to react to it.
    async fn fill(&self, selector: &str, value: &str) -> Result<(), PageError>;

    async fn click(&self, selector: &str) -> Result<(), PageError>;

    /// Clicks the `index`-th element matching `selector`, in DOM order.
    async fn click_nth(&self, selector: &str, index: usize) -> Result<(), PageError>;

    async fn element_count(&self, selector: &str) -> Result<usize, PageError>;

    async fn read_text(&self, selector: &str) -> Result<String, PageError>;

    async fn is_present(&self, selector: &str) -> Result<bool, PageError>;

    /// Waits until an element matching `selector` is attached and visible.
    async fn wait_visible(&self, selector: &str, timeout: Duration) -> Result<(), PageError>;

    /// Waits until no element matches `selector`.
    async fn wait_detached(&self, selector: &str, timeout: Duration) -> Result<(), PageError>;

    /// Sends an Escape key press to the page.
    async fn press_escape(&self) -> Result<(), PageError>;

    /// Lets the page's reactive recomputation catch up.
    async fn settle(&self, duration: Duration);
}

/// Delay profile for one extraction run. Debug mode stretches every wait
/// so a human can follow the session; it never changes outputs.
#[derive(Debug, Clone, Copy)]
pub struct Timing {
    /// Pause after each input fill while the tool recomputes the scale.
    pub fill_settle: Duration,
    /// Pause after toggling light/dark mode.
    pub mode_settle: Duration,
    /// Upper bound on waiting for a dialog to appear or detach.
    pub dialog_timeout: Duration,
    /// Polling interval for bounded waits.
    pub poll: Duration,
}

impl Timing {
    pub fn normal() -> Self {
        Timing {
            fill_settle: Duration::from_millis(400),
            mode_settle: Duration::from_millis(800),
            dialog_timeout: Duration::from_secs(5),
            poll: Duration::from_millis(50),
        }
    }

    pub fn debug() -> Self {
        Timing {
            fill_settle: Duration::from_millis(1500),
            mode_settle: Duration::from_millis(2500),
            dialog_timeout: Duration::from_secs(15),
            poll: Duration::from_millis(100),
        }
    }
}

impl Default for Timing {
    fn default() -> Self {
        Timing::normal()
    }
}
