//! Stand-ins for the host map application.

use std::f64::consts::PI;

use route_print::geometry::Point;
use route_print::print::{PrintPage, Sheet};
use route_print::traits::{DocumentAssembler, HostError, PageRasterizer, Projection};

/// Spherical Web Mercator in 256-pixel tiles at a fixed zoom level.
#[derive(Debug, Clone, Copy)]
pub struct WebMercator {
    pub zoom: u8,
}

impl WebMercator {
    fn world_size(&self) -> f64 {
        256.0 * 2f64.powi(i32::from(self.zoom))
    }
}

impl Projection for WebMercator {
    fn project(&self, (lat, lng): (f64, f64)) -> Point {
        let size = self.world_size();
        let phi = lat.to_radians();
        let x = (lng + 180.0) / 360.0 * size;
        let y = (1.0 - (phi.tan() + 1.0 / phi.cos()).ln() / PI) / 2.0 * size;
        Point::new(x, y)
    }

    fn unproject(&self, p: Point) -> (f64, f64) {
        let size = self.world_size();
        let lng = p.x / size * 360.0 - 180.0;
        let n = PI * (1.0 - 2.0 * p.y / size);
        let lat = n.sinh().atan().to_degrees();
        (lat, lng)
    }
}

/// Records each capture and returns the page number as the "image".
#[derive(Debug, Default)]
pub struct RecordingRasterizer {
    pub captured: Vec<PrintPage>,
    /// Page number (1-based) whose capture fails.
    pub fail_on: Option<usize>,
}

impl PageRasterizer for RecordingRasterizer {
    type Image = usize;

    fn rasterize(&mut self, page: &PrintPage) -> Result<Self::Image, HostError> {
        if self.fail_on == Some(page.number) {
            return Err(format!("tile server unavailable for page {}", page.number).into());
        }
        self.captured.push(page.clone());
        Ok(page.number)
    }
}

#[derive(Debug, Default)]
pub struct RecordingAssembler {
    pub sheets: Vec<(Sheet, usize)>,
}

impl DocumentAssembler for RecordingAssembler {
    type Image = usize;

    fn add_page(&mut self, sheet: &Sheet, image: Self::Image) {
        self.sheets.push((sheet.clone(), image));
    }
}
