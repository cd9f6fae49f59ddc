//! Error taxonomy for the extraction pipeline.
//!
//! [`ExtractError`] covers the fatal, propagated failures; anything that
//! goes wrong inside a single swatch read stays local to that slot and is
//! reported as a [`SwatchError`] which the state machine logs and swallows.

use std::error::Error;
use std::time::Duration;

use thiserror::Error;

/// Failures at the page-capability layer.
#[derive(Debug, Error)]
pub enum PageError {
    /// No element matched the selector.
    #[error("no element matched selector '{selector}'")]
    NotFound { selector: String },
    /// A bounded wait expired.
    #[error("timed out after {timeout:?} waiting on selector '{selector}'")]
    Timeout { selector: String, timeout: Duration },
    /// The underlying browser engine failed.
    #[error("browser backend error")]
    Backend {
        #[source]
        source: Box<dyn Error + Send + Sync>,
    },
}

/// Fatal pipeline failures. The run aborts after best-effort cleanup.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("failed to launch browser")]
    Launch {
        #[source]
        source: Box<dyn Error + Send + Sync>,
    },
    #[error("failed to navigate to {url}")]
    Navigation {
        url: String,
        #[source]
        source: PageError,
    },
    #[error("required input '{selector}' is missing or not fillable")]
    MissingInput {
        selector: String,
        #[source]
        source: PageError,
    },
    #[error("failed to switch the tool into dark mode")]
    ModeSwitch {
        #[source]
        source: PageError,
    },
}

/// A single swatch read going wrong. Recoverable: the slot is left empty.
#[derive(Debug, Error)]
pub(crate) enum SwatchError {
    #[error(transparent)]
    Page(#[from] PageError),
    #[error("dialog text '{text}' contains no #RRGGBB value")]
    NoHex { text: String },
}
