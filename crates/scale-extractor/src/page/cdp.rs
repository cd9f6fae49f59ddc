//! Real [`Page`] implementation over the Chrome DevTools Protocol.

use std::time::Duration;

use async_trait::async_trait;
use chromiumoxide::error::CdpError;
use tokio::time::{sleep, Instant};

use super::Page;
use crate::error::PageError;

#[derive(Clone)]
pub struct CdpPage {
    page: chromiumoxide::Page,
    poll: Duration,
}

impl CdpPage {
    pub(crate) fn new(page: chromiumoxide::Page, poll: Duration) -> Self {
        CdpPage { page, poll }
    }

    async fn is_visible(&self, selector: &str) -> Result<bool, PageError> {
        let js = format!(
            "(() => {{ const el = document.querySelector({sel}); \
             return !!el && el.getClientRects().length > 0; }})()",
            sel = js_string(selector)
        );
        self.page
            .evaluate(js)
            .await
            .map_err(backend)?
            .into_value::<bool>()
            .map_err(backend)
    }
}

#[async_trait]
impl Page for CdpPage {
    async fn goto(&self, url: &str) -> Result<(), PageError> {
        self.page.goto(url).await.map_err(backend)?;
        self.page.wait_for_navigation().await.map_err(backend)?;
        Ok(())
    }

    async fn fill(&self, selector: &str, value: &str) -> Result<(), PageError> {
        // The tool's inputs are React-controlled: assigning `.value`
        // directly is ignored, so go through the native setter and fire an
        // `input` event, the same trick Playwright's fill performs.
        let js = format!(
            "(() => {{ \
             const el = document.querySelector({sel}); \
             if (!el) return false; \
             const setter = Object.getOwnPropertyDescriptor(\
                 window.HTMLInputElement.prototype, 'value').set; \
             setter.call(el, {val}); \
             el.dispatchEvent(new Event('input', {{ bubbles: true }})); \
             el.dispatchEvent(new Event('change', {{ bubbles: true }})); \
             return true; }})()",
            sel = js_string(selector),
            val = js_string(value),
        );

        let filled: bool = self
            .page
            .evaluate(js)
            .await
            .map_err(backend)?
            .into_value()
            .map_err(backend)?;

        if filled {
            Ok(())
        } else {
            Err(PageError::NotFound {
                selector: selector.to_string(),
            })
        }
    }

    async fn click(&self, selector: &str) -> Result<(), PageError> {
        let element = self
            .page
            .find_element(selector)
            .await
            .map_err(|err| not_found_or_backend(err, selector))?;
        element.click().await.map_err(backend)?;
        Ok(())
    }

    async fn click_nth(&self, selector: &str, index: usize) -> Result<(), PageError> {
        let elements = self.page.find_elements(selector).await.map_err(backend)?;
        let element = elements.get(index).ok_or_else(|| PageError::NotFound {
            selector: format!("{}:nth({})", selector, index),
        })?;
        element.click().await.map_err(backend)?;
        Ok(())
    }

    async fn element_count(&self, selector: &str) -> Result<usize, PageError> {
        match self.page.find_elements(selector).await {
            Ok(elements) => Ok(elements.len()),
            // CDP reports "no nodes" as an error rather than an empty list.
            Err(CdpError::NotFound) => Ok(0),
            Err(err) => Err(backend(err)),
        }
    }

    async fn read_text(&self, selector: &str) -> Result<String, PageError> {
        let element = self
            .page
            .find_element(selector)
            .await
            .map_err(|err| not_found_or_backend(err, selector))?;
        let text = element.inner_text().await.map_err(backend)?;
        text.ok_or_else(|| PageError::NotFound {
            selector: selector.to_string(),
        })
    }

    async fn is_present(&self, selector: &str) -> Result<bool, PageError> {
        Ok(self.page.find_element(selector).await.is_ok())
    }

    async fn wait_visible(&self, selector: &str, timeout: Duration) -> Result<(), PageError> {
        let deadline = Instant::now() + timeout;
        loop {
            if self.is_visible(selector).await? {
                return Ok(());
            }
            if Instant::now() >= deadline {
                return Err(PageError::Timeout {
                    selector: selector.to_string(),
                    timeout,
                });
            }
            sleep(self.poll).await;
        }
    }

    async fn wait_detached(&self, selector: &str, timeout: Duration) -> Result<(), PageError> {
        let deadline = Instant::now() + timeout;
        loop {
            if !self.is_visible(selector).await? {
                return Ok(());
            }
            if Instant::now() >= deadline {
                return Err(PageError::Timeout {
                    selector: selector.to_string(),
                    timeout,
                });
            }
            sleep(self.poll).await;
        }
    }

    async fn press_escape(&self) -> Result<(), PageError> {
        let body = self
            .page
            .find_element("body")
            .await
            .map_err(|err| not_found_or_backend(err, "body"))?;
        body.press_key("Escape").await.map_err(backend)?;
        Ok(())
    }

    async fn settle(&self, duration: Duration) {
        sleep(duration).await;
    }
}

fn backend(err: impl std::error::Error + Send + Sync + 'static) -> PageError {
    PageError::Backend {
        source: Box::new(err),
    }
}

fn not_found_or_backend(err: CdpError, selector: &str) -> PageError {
    match err {
        CdpError::NotFound => PageError::NotFound {
            selector: selector.to_string(),
        },
        other => backend(other),
    }
}

fn js_string(value: &str) -> String {
    // serde_json produces a valid JS string literal, quoting included.
    serde_json::to_string(value).unwrap_or_else(|_| "\"\"".to_string())
}
