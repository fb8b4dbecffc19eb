use thiserror::Error;

use crate::traits::HostError;

/// Errors from planning or printing a route.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum PrintError {
    #[error("route has no points")]
    EmptyRoute,

    #[error("invalid scale 1 : {0}")]
    InvalidScale(f64),

    #[error("invalid paper size {width_mm} x {height_mm} mm")]
    InvalidPaperSize { width_mm: f64, height_mm: f64 },

    #[error("invalid margin {0} mm")]
    InvalidMargin(f64),

    #[error("margin of {margin_mm} mm leaves no printable area on {width_mm} x {height_mm} mm paper")]
    MarginTooLarge {
        margin_mm: f64,
        width_mm: f64,
        height_mm: f64,
    },

    #[error("page of {width_px} x {height_px} pixels cannot be captured")]
    PageTooLarge { width_px: f64, height_px: f64 },

    #[error("invalid page selection: {0}")]
    InvalidPageSelection(String),

    #[error("failed to rasterize page {page}: {source}")]
    Rasterize {
        page: usize,
        #[source]
        source: HostError,
    },

    #[error("printing aborted after {completed} pages")]
    Aborted { completed: usize },
}
