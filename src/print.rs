//! Route print planning and page-by-page printing.

use std::sync::atomic::{AtomicBool, Ordering};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::cover::{cover_polyline_with, RoutePoint};
use crate::error::PrintError;
use crate::geometry::{Point, Rectangle};
use crate::pages::PageSelection;
use crate::paper::{Orientation, PaperSize};
use crate::polyline::Polyline;
use crate::scale;
use crate::traits::{DocumentAssembler, PageRasterizer, Projection};

/// Raster format requested from the page rasterizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageFormat {
    /// Smaller output; the rasterizer should fill transparent areas white.
    #[default]
    Jpeg,
    Png,
}

impl ImageFormat {
    pub fn mime_type(&self) -> &'static str {
        match self {
            ImageFormat::Jpeg => "image/jpeg",
            ImageFormat::Png => "image/png",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrintOptions {
    /// Scale denominator, i.e. 1 : `scale`.
    pub scale: f64,
    pub paper: PaperSize,
    pub orientation: Orientation,
    /// Margin kept around the route on every side of a page, in paper
    /// millimeters.
    pub margin_mm: f64,
    pub image_format: ImageFormat,
    /// Map data attribution printed on every sheet.
    pub attribution: Option<String>,
    /// Credit line printed on every sheet.
    pub credit: Option<String>,
}

impl Default for PrintOptions {
    fn default() -> Self {
        Self {
            scale: 100_000.0,
            paper: PaperSize::default(),
            orientation: Orientation::Portrait,
            margin_mm: 10.0,
            image_format: ImageFormat::Jpeg,
            attribution: None,
            credit: None,
        }
    }
}

impl PrintOptions {
    pub fn validate(&self) -> Result<(), PrintError> {
        if !(self.scale.is_finite() && self.scale > 0.0) {
            return Err(PrintError::InvalidScale(self.scale));
        }

        let (width_mm, height_mm) = (self.paper.width_mm, self.paper.height_mm);
        if !(width_mm.is_finite() && height_mm.is_finite() && width_mm > 0.0 && height_mm > 0.0) {
            return Err(PrintError::InvalidPaperSize {
                width_mm,
                height_mm,
            });
        }

        if !(self.margin_mm.is_finite() && self.margin_mm >= 0.0) {
            return Err(PrintError::InvalidMargin(self.margin_mm));
        }
        if 2.0 * self.margin_mm >= width_mm.min(height_mm) {
            return Err(PrintError::MarginTooLarge {
                margin_mm: self.margin_mm,
                width_mm,
                height_mm,
            });
        }

        Ok(())
    }
}

/// One page of a print plan, ready to be captured.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrintPage {
    /// 1-based page number.
    pub number: usize,
    /// Area the route was fitted into, inside the margins.
    pub cover_rect: Rectangle,
    /// Full page area to capture: `cover_rect` plus the margin.
    pub view: Rectangle,
    pub rotated: bool,
    /// Physical sheet for this page, already turned when `rotated`.
    pub paper: PaperSize,
    /// Capture size in map pixels.
    pub size_px: (u32, u32),
    /// Geographic center of `view`.
    pub center: (f64, f64),
    /// Geographic corners of `view`, as unprojected `(min, max)`.
    pub geo_bounds: ((f64, f64), (f64, f64)),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrintPlan {
    pub pages: Vec<PrintPage>,
    /// Page boundary crossings in map pixels.
    pub splits: Vec<Point>,
    /// Page boundary crossings as `(lat, lng)`.
    pub geo_splits: Vec<(f64, f64)>,
    /// Projected route with the page boundary crossings inserted.
    pub route: Vec<RoutePoint>,
    /// Full page size in map pixels, before orientation per page.
    pub page_size_px: (f64, f64),
    pub margin_px: f64,
    pub dpi: f64,
    pub quality_hue: u16,
    pub scale: f64,
}

impl PrintPlan {
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Parse a page range against this plan. Blank text selects every page.
    pub fn select(&self, text: &str) -> Result<PageSelection, PrintError> {
        PageSelection::parse(text, self.pages.len())
    }

    /// Short status line, e.g. `"at 1240 x 1754 pixels"`.
    pub fn status(&self) -> String {
        let (w, h) = self.page_size_px;
        format!("at {} x {} pixels", w.floor(), h.floor())
    }
}

/// Fit `route` onto pages as configured by `options`.
pub fn plan_route<P: Projection>(
    route: &Polyline,
    projection: &P,
    options: &PrintOptions,
) -> Result<PrintPlan, PrintError> {
    options.validate()?;
    let center = route.center(projection).ok_or(PrintError::EmptyRoute)?;

    let paper = options.orientation.apply(&options.paper);
    let (width_px, height_px) = scale::page_size_px(projection, &paper, options.scale, center);
    if !(width_px.is_finite() && height_px.is_finite())
        || width_px.max(height_px).round() > f64::from(u32::MAX)
    {
        return Err(PrintError::PageTooLarge { width_px, height_px });
    }
    let margin_px = scale::paper_mm_to_pixels(projection, options.margin_mm, options.scale, center);

    let inner_width = width_px - 2.0 * margin_px;
    let inner_height = height_px - 2.0 * margin_px;
    if !(inner_width.is_finite() && inner_height.is_finite() && inner_width > 0.0 && inner_height > 0.0) {
        return Err(PrintError::MarginTooLarge {
            margin_mm: options.margin_mm,
            width_mm: paper.width_mm,
            height_mm: paper.height_mm,
        });
    }

    let planar = route.project(projection);
    let covering = cover_polyline_with(&planar, inner_width, inner_height, options.orientation.cover_mode());

    let pages = covering
        .pages
        .iter()
        .enumerate()
        .map(|(i, page)| {
            let view = page.rect.pad(margin_px);
            PrintPage {
                number: i + 1,
                cover_rect: page.rect,
                view,
                rotated: page.rotated,
                paper: if page.rotated { paper.swapped() } else { paper.clone() },
                // Within u32 range, checked against the page size above.
                size_px: (view.width().round() as u32, view.height().round() as u32),
                center: projection.unproject(view.center()),
                geo_bounds: (projection.unproject(view.min), projection.unproject(view.max)),
            }
        })
        .collect::<Vec<_>>();

    let geo_splits = covering
        .splits
        .iter()
        .map(|&p| projection.unproject(p))
        .collect();
    let dpi = scale::dpi(projection, &paper, options.scale, center);

    info!(
        pages = pages.len(),
        dpi = dpi.round(),
        width_px = width_px.floor(),
        height_px = height_px.floor(),
        "planned route print"
    );

    Ok(PrintPlan {
        pages,
        splits: covering.splits,
        geo_splits,
        route: covering.route,
        page_size_px: (width_px, height_px),
        margin_px,
        dpi,
        quality_hue: scale::quality_hue(dpi),
        scale: options.scale,
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SheetOrientation {
    Portrait,
    Landscape,
}

impl SheetOrientation {
    pub fn as_str(&self) -> &'static str {
        match self {
            SheetOrientation::Portrait => "portrait",
            SheetOrientation::Landscape => "landscape",
        }
    }
}

/// Physical layout and annotations of one printed sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sheet {
    pub page_number: usize,
    pub total_pages: usize,
    pub width_mm: f64,
    pub height_mm: f64,
    pub orientation: SheetOrientation,
    pub image_format: ImageFormat,
    /// e.g. `"Page 2 of 5"`
    pub page_label: String,
    /// e.g. `"Scale 1 : 100000"`
    pub scale_label: String,
    pub attribution: Option<String>,
    pub credit: Option<String>,
}

impl Sheet {
    /// Layout and labels for `page` of `plan`. Scale and page count come
    /// from the plan; `options` only supplies the annotations and format.
    pub fn for_page(plan: &PrintPlan, page: &PrintPage, options: &PrintOptions) -> Self {
        let total_pages = plan.pages.len();
        let (width_mm, height_mm) = (page.paper.width_mm, page.paper.height_mm);
        Self {
            page_number: page.number,
            total_pages,
            width_mm,
            height_mm,
            orientation: if width_mm > height_mm {
                SheetOrientation::Landscape
            } else {
                SheetOrientation::Portrait
            },
            image_format: options.image_format,
            page_label: format!("Page {} of {}", page.number, total_pages),
            scale_label: format!("Scale 1 : {}", plan.scale),
            attribution: options.attribution.clone(),
            credit: options.credit.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrintSummary {
    /// Zero-based indices of the pages handed to the assembler, in order.
    pub printed: Vec<usize>,
    pub total_pages: usize,
}

/// Rasterize the selected pages one at a time and hand them to `assembler`.
///
/// `abort` is checked before each page; once set, printing stops with
/// [`PrintError::Aborted`] and no further pages are captured.
pub fn print_pages<R, D>(
    plan: &PrintPlan,
    selection: &PageSelection,
    options: &PrintOptions,
    rasterizer: &mut R,
    assembler: &mut D,
    abort: &AtomicBool,
) -> Result<PrintSummary, PrintError>
where
    R: PageRasterizer,
    D: DocumentAssembler<Image = R::Image>,
{
    let total_pages = plan.pages.len();
    let mut printed = Vec::with_capacity(selection.len());

    for &index in selection.indices() {
        if abort.load(Ordering::Relaxed) {
            warn!(completed = printed.len(), "printing aborted");
            return Err(PrintError::Aborted {
                completed: printed.len(),
            });
        }

        let page = plan.pages.get(index).ok_or_else(|| {
            PrintError::InvalidPageSelection(format!("page {} is outside 1-{}", index + 1, total_pages))
        })?;

        debug!(page = page.number, total_pages, "rasterizing page");
        let image = rasterizer
            .rasterize(page)
            .map_err(|source| PrintError::Rasterize {
                page: page.number,
                source,
            })?;

        assembler.add_page(&Sheet::for_page(plan, page, options), image);
        printed.push(index);
    }

    info!(printed = printed.len(), total_pages, "printed route");
    Ok(PrintSummary {
        printed,
        total_pages,
    })
}
