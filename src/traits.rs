//! Seams to the surrounding map application.
//!
//! The crate never projects coordinates, draws tiles or writes documents
//! itself. Hosts implement these traits for their own map and output stack.

use std::error::Error;

use crate::geometry::Point;
use crate::print::{PrintPage, Sheet};

/// Boxed error returned by host implementations.
pub type HostError = Box<dyn Error + Send + Sync>;

/// Converts between geographic `(lat, lng)` and planar map pixels.
///
/// The planar space must be Euclidean and stay fixed (same zoom level) for
/// the whole covering run.
pub trait Projection {
    fn project(&self, lat_lng: (f64, f64)) -> Point;

    fn unproject(&self, point: Point) -> (f64, f64);
}

/// Captures the map view of one page as an image.
///
/// Pages are requested strictly one after another, so an implementation may
/// reuse a single rendering surface.
pub trait PageRasterizer {
    type Image;

    fn rasterize(&mut self, page: &PrintPage) -> Result<Self::Image, HostError>;
}

/// Collects rasterized pages into a multi-page document.
pub trait DocumentAssembler {
    type Image;

    fn add_page(&mut self, sheet: &Sheet, image: Self::Image);
}
