//! Ownership of the external browser process: one browser, one page,
//! exclusively held for the duration of one extraction run.

use chromiumoxide::browser::{Browser, BrowserConfig};
use futures::StreamExt;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::error::ExtractError;
use crate::page::{CdpPage, Timing};

pub struct BrowserSession {
    browser: Browser,
    handler_task: JoinHandle<()>,
    page: CdpPage,
}

impl BrowserSession {
    /// Launches a browser and opens the single page this session owns.
    /// `debug` runs headful so the session can be watched.
    pub async fn launch(debug_browser: bool, timing: Timing) -> Result<Self, ExtractError> {
        let mut builder = BrowserConfig::builder();
        if debug_browser {
            builder = builder.with_head();
        }
        let config = builder.build().map_err(|message| ExtractError::Launch {
            source: message.into(),
        })?;

        let (browser, mut handler) = Browser::launch(config)
            .await
            .map_err(|err| ExtractError::Launch {
                source: Box::new(err),
            })?;

        // The handler stream must be drained for the browser connection to
        // make progress; it ends when the browser goes away.
        let handler_task = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if let Err(err) = event {
                    debug!(error = %err, "browser handler event error");
                }
            }
        });

        let page = browser
            .new_page("about:blank")
            .await
            .map_err(|err| ExtractError::Launch {
                source: Box::new(err),
            })?;

        Ok(BrowserSession {
            browser,
            handler_task,
            page: CdpPage::new(page, timing.poll),
        })
    }

    pub fn page(&self) -> &CdpPage {
        &self.page
    }

    /// Releases the browser process. Must run on every exit path, success
    /// or failure; errors here are logged, never propagated, so they can't
    /// mask the outcome of the run itself.
    pub async fn close(mut self) {
        if let Err(err) = self.browser.close().await {
            warn!(error = %err, "failed to close browser cleanly");
        }
        if let Err(err) = self.browser.wait().await {
            warn!(error = %err, "browser process did not exit cleanly");
        }
        self.handler_task.abort();
    }
}
