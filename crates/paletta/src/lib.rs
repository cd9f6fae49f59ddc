use thiserror::Error;

pub mod css;
pub mod pipeline;
pub mod preview;
pub mod swatch;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("An IO error occurred: {0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    InvalidColor(#[from] color_theory::ColorParseError),
    #[error("Extraction failed: {0}")]
    Extraction(#[from] scale_extractor::ExtractError),
}
