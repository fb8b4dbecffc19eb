//! Greedy covering of a planar route with fixed-size page rectangles.
//!
//! The route is walked once. A bounding rectangle grows point by point
//! until the next point would no longer fit on a page; the offending
//! segment is then cut where it leaves the largest page that still holds
//! everything accumulated so far, the page is emitted, and accumulation
//! restarts from the cut.

use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::geometry::{Point, Rectangle, Segment};

/// Relative distance (fraction of the page size) within which a point counts
/// as lying on a page edge.
const BOUNDARY_TOLERANCE: f64 = 1e-9;

/// How page orientation is chosen while covering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoverMode {
    /// Every page is `width` x `height`.
    #[default]
    Fixed,
    /// Each page may be turned to `height` x `width` when that covers more
    /// of the route before the next split.
    Mixed,
}

/// One output page in planar coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub rect: Rectangle,
    /// True when the page uses the swapped `height` x `width` size.
    pub rotated: bool,
}

/// A point of the covered route, marking whether it came from the input
/// or was inserted at a page boundary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoutePoint {
    pub point: Point,
    pub original: bool,
}

/// Result of covering a route.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Covering {
    /// Pages in route order.
    pub pages: Vec<Page>,
    /// Route points inserted where consecutive pages meet.
    pub splits: Vec<Point>,
    /// The input route with the split points inserted in place.
    pub route: Vec<RoutePoint>,
}

impl Covering {
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn rects(&self) -> impl Iterator<Item = &Rectangle> {
        self.pages.iter().map(|page| &page.rect)
    }
}

/// Read position in the route: the current sub-route starts at `start`
/// (an input point or an inserted split) and continues with `points[next..]`.
#[derive(Debug, Clone, Copy)]
struct Cursor {
    start: Point,
    next: usize,
}

/// Outcome of covering one page from a cursor.
#[derive(Debug, Clone, Copy)]
struct PageRun {
    /// Extent actually occupied by the route on this page.
    extent: Rectangle,
    /// Where the route leaves the page, or `None` if it ends on it.
    split: Option<Point>,
    /// Index of the first input point not consumed by this page.
    next: usize,
    /// Route length covered by this page.
    distance: f64,
}

impl PageRun {
    fn page(&self, width: f64, height: f64, rotated: bool) -> Page {
        Page {
            rect: Rectangle::from_size(width, height).center_on(self.extent.center()),
            rotated,
        }
    }
}

fn cover_page(points: &[Point], cursor: Cursor, width: f64, height: f64) -> PageRun {
    let mut extent = Rectangle::at(cursor.start);
    let mut prev = cursor.start;
    let mut distance = 0.0;

    for (i, &p) in points.iter().enumerate().skip(cursor.next) {
        let grown = extent.extend(p);
        if grown.fits_within(width, height) {
            extent = grown;
            distance += prev.distance_to(p);
            prev = p;
            continue;
        }

        let segment = Segment::new(prev, p);
        let bounds = extent.extend_bounded(segment.displacement(), width, height);
        let split = match bounds.segment_intersection(&segment) {
            Some(split) => split,
            // Page already full towards the heading: the route leaves at `prev`.
            None if bounds.on_boundary(prev, BOUNDARY_TOLERANCE * width.max(height)) => prev,
            None => {
                error!(?segment, ?bounds, "route segment does not cross the page boundary");
                panic!(
                    "no page boundary crossing for segment {:?} -> {:?} in {:?}",
                    segment.p1, segment.p2, bounds
                );
            }
        };

        distance += prev.distance_to(split);
        return PageRun {
            extent: extent.extend(split),
            split: Some(split),
            next: i,
            distance,
        };
    }

    PageRun {
        extent,
        split: None,
        next: points.len(),
        distance,
    }
}

/// Cover `points` with `width` x `height` pages.
///
/// See [`cover_polyline_with`].
pub fn cover_polyline(points: &[Point], width: f64, height: f64) -> Covering {
    cover_polyline_with(points, width, height, CoverMode::Fixed)
}

/// Cover `points` with page rectangles, splitting the route wherever it
/// crosses from one page to the next.
///
/// An empty route yields an empty covering. Panics if the page size is not
/// positive and finite.
pub fn cover_polyline_with(points: &[Point], width: f64, height: f64, mode: CoverMode) -> Covering {
    assert!(
        width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0,
        "page size must be positive, got {width} x {height}"
    );

    let Some(&first) = points.first() else {
        return Covering::default();
    };

    let mut covering = Covering {
        route: vec![RoutePoint {
            point: first,
            original: true,
        }],
        ..Covering::default()
    };
    let mut cursor = Cursor {
        start: first,
        next: 1,
    };

    loop {
        let (run, page) = match mode {
            CoverMode::Fixed => {
                let run = cover_page(points, cursor, width, height);
                (run, run.page(width, height, false))
            }
            CoverMode::Mixed => {
                let (upright, turned) = rayon::join(
                    || cover_page(points, cursor, width, height),
                    || cover_page(points, cursor, height, width),
                );
                if turned.distance > upright.distance {
                    (turned, turned.page(height, width, true))
                } else {
                    (upright, upright.page(width, height, false))
                }
            }
        };

        covering.route.extend(points[cursor.next..run.next].iter().map(|&point| RoutePoint {
            point,
            original: true,
        }));
        covering.pages.push(page);

        let Some(split) = run.split else {
            break;
        };

        debug!(
            page = covering.pages.len(),
            x = split.x,
            y = split.y,
            rotated = page.rotated,
            "split route at page boundary"
        );
        covering.splits.push(split);
        covering.route.push(RoutePoint {
            point: split,
            original: false,
        });
        cursor = Cursor {
            start: split,
            next: run.next,
        };
    }

    debug!(
        pages = covering.pages.len(),
        points = points.len(),
        "covered route"
    );
    covering
}
