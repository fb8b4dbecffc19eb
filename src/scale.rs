//! Conversions between paper scale and planar map units.
//!
//! Map pixels do not have a fixed ground size, so every conversion is
//! measured at a reference position (usually the route center).

use crate::geometry::Point;
use crate::haversine::haversine_m;
use crate::paper::PaperSize;
use crate::traits::Projection;

const MM_PER_INCH: f64 = 25.4;

/// DPI at which the quality hue saturates to green.
const EXCELLENT_DPI: f64 = 300.0;
const EXCELLENT_HUE: f64 = 140.0;

/// Ground distance in meters spanned by `pixels` map pixels, measured
/// horizontally through `pos`.
pub fn pixels_to_meters<P: Projection>(projection: &P, pixels: f64, pos: (f64, f64)) -> f64 {
    let center = projection.project(pos);
    let half = Point::new(pixels / 2.0, 0.0);
    let west = projection.unproject(center - half);
    let east = projection.unproject(center + half);
    haversine_m(west, east)
}

/// Number of map pixels spanning `meters` of ground at `pos`.
pub fn meters_to_pixels<P: Projection>(projection: &P, meters: f64, pos: (f64, f64)) -> f64 {
    meters / pixels_to_meters(projection, 1.0, pos)
}

/// Planar size of a length on paper, in map pixels, at scale 1 : `scale`.
pub fn paper_mm_to_pixels<P: Projection>(
    projection: &P,
    paper_mm: f64,
    scale: f64,
    pos: (f64, f64),
) -> f64 {
    meters_to_pixels(projection, paper_mm * scale / 1000.0, pos)
}

/// Page `(width, height)` in map pixels at scale 1 : `scale`.
pub fn page_size_px<P: Projection>(
    projection: &P,
    paper: &PaperSize,
    scale: f64,
    pos: (f64, f64),
) -> (f64, f64) {
    (
        paper_mm_to_pixels(projection, paper.width_mm, scale, pos),
        paper_mm_to_pixels(projection, paper.height_mm, scale, pos),
    )
}

/// Print resolution in dots per inch when one map pixel becomes one dot.
pub fn dpi<P: Projection>(projection: &P, paper: &PaperSize, scale: f64, pos: (f64, f64)) -> f64 {
    let (wpx, hpx) = page_size_px(projection, paper, scale, pos);
    let dpi_x = wpx / (paper.width_mm / MM_PER_INCH);
    let dpi_y = hpx / (paper.height_mm / MM_PER_INCH);
    (dpi_x + dpi_y) / 2.0
}

/// Scale denominator that prints at `dpi`. Inverse of [`dpi`].
pub fn scale_for_dpi<P: Projection>(
    projection: &P,
    paper: &PaperSize,
    dpi: f64,
    pos: (f64, f64),
) -> f64 {
    let wpx = dpi / MM_PER_INCH * paper.width_mm;
    let hpx = paper.height_mm / paper.width_mm * wpx;
    let scale_x = pixels_to_meters(projection, wpx, pos) * 1000.0 / paper.width_mm;
    let scale_y = pixels_to_meters(projection, hpx, pos) * 1000.0 / paper.height_mm;
    (scale_x + scale_y) / 2.0
}

/// Hue from red (0) to green (140) indicating expected print quality.
pub fn quality_hue(dpi: f64) -> u16 {
    (EXCELLENT_HUE * dpi / EXCELLENT_DPI)
        .floor()
        .clamp(0.0, EXCELLENT_HUE) as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Equirectangular projection with a fixed number of pixels per degree.
    struct Equirect {
        px_per_degree: f64,
    }

    impl Projection for Equirect {
        fn project(&self, (lat, lng): (f64, f64)) -> Point {
            Point::new(lng * self.px_per_degree, -lat * self.px_per_degree)
        }

        fn unproject(&self, p: Point) -> (f64, f64) {
            (-p.y / self.px_per_degree, p.x / self.px_per_degree)
        }
    }

    const EQUATOR: (f64, f64) = (0.0, 10.0);
    const METERS_PER_DEGREE: f64 = 111_194.93;

    fn close(a: f64, b: f64, rel: f64) -> bool {
        (a - b).abs() <= rel * b.abs().max(1.0)
    }

    #[test]
    fn test_pixels_to_meters_at_equator() {
        let proj = Equirect { px_per_degree: 1000.0 };
        let meters = pixels_to_meters(&proj, 1000.0, EQUATOR);
        assert!(close(meters, METERS_PER_DEGREE, 1e-6), "got {meters}");
    }

    #[test]
    fn test_meters_to_pixels_inverts() {
        let proj = Equirect { px_per_degree: 500.0 };
        let px = meters_to_pixels(&proj, 2_000.0, EQUATOR);
        let back = pixels_to_meters(&proj, px, EQUATOR);
        assert!(close(back, 2_000.0, 1e-6), "got {back}");
    }

    #[test]
    fn test_page_size_px_follows_paper_aspect() {
        let proj = Equirect { px_per_degree: 1000.0 };
        let (w, h) = page_size_px(&proj, &PaperSize::default(), 50_000.0, EQUATOR);
        // 210 mm at 1:50000 is 10.5 km.
        assert!(close(w, 10_500.0 / METERS_PER_DEGREE * 1000.0, 1e-6), "got {w}");
        assert!(close(h / w, 297.0 / 210.0, 1e-9));
    }

    #[test]
    fn test_dpi_and_scale_are_inverse() {
        let proj = Equirect { px_per_degree: 40_000.0 };
        let paper = PaperSize::default();
        let dpi = dpi(&proj, &paper, 25_000.0, EQUATOR);
        let scale = scale_for_dpi(&proj, &paper, dpi, EQUATOR);
        assert!(close(scale, 25_000.0, 1e-6), "got {scale}");
    }

    #[test]
    fn test_dpi_grows_with_zoom() {
        let paper = PaperSize::default();
        let coarse = dpi(&Equirect { px_per_degree: 1000.0 }, &paper, 25_000.0, EQUATOR);
        let fine = dpi(&Equirect { px_per_degree: 2000.0 }, &paper, 25_000.0, EQUATOR);
        assert!(close(fine, 2.0 * coarse, 1e-6));
    }

    #[test]
    fn test_quality_hue() {
        assert_eq!(quality_hue(0.0), 0);
        assert_eq!(quality_hue(150.0), 70);
        assert_eq!(quality_hue(300.0), 140);
        assert_eq!(quality_hue(600.0), 140);
        assert_eq!(quality_hue(-5.0), 0);
    }
}
