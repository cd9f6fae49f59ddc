//! Browser-driven extraction of the 24-swatch, 2-mode color scale from the
//! Radix custom-color tool.
//!
//! The state machine in [`ScaleExtractor`] is written against the
//! [`page::Page`] capability trait, so its protocol logic is independent of
//! any browser engine; [`session::BrowserSession`] provides the real
//! Chrome DevTools Protocol binding.

mod error;
mod extractor;
pub mod page;
pub mod selectors;
mod session;

pub use error::{ExtractError, PageError};
pub use extractor::ScaleExtractor;
pub use page::Timing;
pub use session::BrowserSession;
