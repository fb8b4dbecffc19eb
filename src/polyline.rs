//! Geographic route geometry.
//!
//! Routes arrive as latitude/longitude sequences and are projected into
//! planar map coordinates before covering.

use serde::{Deserialize, Serialize};

use crate::geometry::{Point, Rectangle};
use crate::traits::Projection;

/// A route as decoded `(latitude, longitude)` points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polyline {
    points: Vec<(f64, f64)>,
}

impl Polyline {
    /// Creates a new Polyline from `(latitude, longitude)` tuples.
    pub fn new(points: Vec<(f64, f64)>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }

    pub fn into_points(self) -> Vec<(f64, f64)> {
        self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Projects every point into planar coordinates.
    pub fn project<P: Projection>(&self, projection: &P) -> Vec<Point> {
        self.points.iter().map(|&ll| projection.project(ll)).collect()
    }

    /// Planar bounding box of the route.
    pub fn bounds<P: Projection>(&self, projection: &P) -> Option<Rectangle> {
        let mut planar = self.project(projection).into_iter();
        let first = planar.next()?;
        Some(planar.fold(Rectangle::at(first), |rect, p| rect.extend(p)))
    }

    /// Point halfway along the projected route, as `(lat, lng)`.
    ///
    /// Scale measurements are taken here, since meters per pixel vary with
    /// latitude in most map projections.
    pub fn center<P: Projection>(&self, projection: &P) -> Option<(f64, f64)> {
        let planar = self.project(projection);
        let first = *planar.first()?;

        let total: f64 = planar.windows(2).map(|w| w[0].distance_to(w[1])).sum();
        if total == 0.0 {
            return Some(projection.unproject(first));
        }

        let mut remaining = total / 2.0;
        for w in planar.windows(2) {
            let length = w[0].distance_to(w[1]);
            if length > 0.0 && remaining <= length {
                let t = remaining / length;
                return Some(projection.unproject(w[0] + (w[1] - w[0]).scale(t)));
            }
            remaining -= length;
        }

        planar.last().map(|&p| projection.unproject(p))
    }
}
