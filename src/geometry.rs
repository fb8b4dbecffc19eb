//! Planar geometry primitives.
//!
//! Everything here works in projected (pixel) coordinates, never in
//! latitude/longitude. All operations are pure and return new values.

use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

/// A point in planar map coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance_to(&self, other: Point) -> f64 {
        (other - *self).length()
    }

    /// Length of this point interpreted as a vector.
    pub fn length(&self) -> f64 {
        self.x.hypot(self.y)
    }

    pub fn scale(&self, factor: f64) -> Point {
        Point::new(self.x * factor, self.y * factor)
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point::new(x, y)
    }
}

/// A directed line segment from `p1` to `p2`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub p1: Point,
    pub p2: Point,
}

impl Segment {
    pub const fn new(p1: Point, p2: Point) -> Self {
        Self { p1, p2 }
    }

    pub fn displacement(&self) -> Point {
        self.p2 - self.p1
    }

    pub fn length(&self) -> f64 {
        self.displacement().length()
    }

    /// Intersection point of two segments, if they cross.
    ///
    /// Uses the parametric determinant form. Parallel (and collinear)
    /// segments report no intersection, as do crossings outside either
    /// segment's `[0, 1]` parameter range.
    pub fn intersection(&self, other: &Segment) -> Option<Point> {
        let (x1, y1, x2, y2) = (self.p1.x, self.p1.y, self.p2.x, self.p2.y);
        let (x3, y3, x4, y4) = (other.p1.x, other.p1.y, other.p2.x, other.p2.y);

        let d = (x1 - x2) * (y3 - y4) - (y1 - y2) * (x3 - x4);
        if d == 0.0 {
            return None;
        }

        let t = ((x1 - x3) * (y3 - y4) - (y1 - y3) * (x3 - x4)) / d;
        let u = ((x2 - x1) * (y1 - y3) - (y2 - y1) * (x1 - x3)) / d;
        if !(0.0..=1.0).contains(&t) || !(0.0..=1.0).contains(&u) {
            return None;
        }

        Some(Point::new(x1 + t * (x2 - x1), y1 + t * (y2 - y1)))
    }

    /// Whether `p` lies on this segment, within `eps`.
    pub fn contains(&self, p: Point, eps: f64) -> bool {
        let d = self.displacement();
        let len2 = d.x * d.x + d.y * d.y;
        if len2 == 0.0 {
            return self.p1.distance_to(p) <= eps;
        }
        let t = ((p.x - self.p1.x) * d.x + (p.y - self.p1.y) * d.y) / len2;
        if t < -eps || t > 1.0 + eps {
            return false;
        }
        let closest = self.p1 + d.scale(t.clamp(0.0, 1.0));
        closest.distance_to(p) <= eps
    }
}

/// An axis-aligned rectangle with `min <= max` on both axes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    pub min: Point,
    pub max: Point,
}

impl Rectangle {
    /// Build a rectangle from two opposite corners in any order.
    pub fn new(a: Point, b: Point) -> Self {
        Self {
            min: Point::new(a.x.min(b.x), a.y.min(b.y)),
            max: Point::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    /// Degenerate rectangle covering a single point.
    pub fn at(p: Point) -> Self {
        Self { min: p, max: p }
    }

    /// A `width` x `height` rectangle anchored at the origin.
    pub fn from_size(width: f64, height: f64) -> Self {
        Self::new(Point::new(0.0, 0.0), Point::new(width, height))
    }

    pub fn xmin(&self) -> f64 {
        self.min.x
    }

    pub fn ymin(&self) -> f64 {
        self.min.y
    }

    pub fn xmax(&self) -> f64 {
        self.max.x
    }

    pub fn ymax(&self) -> f64 {
        self.max.y
    }

    /// Corners in boundary order: `(xmin, ymin)`, `(xmax, ymin)`,
    /// `(xmax, ymax)`, `(xmin, ymax)`.
    pub fn corners(&self) -> [Point; 4] {
        [
            Point::new(self.xmin(), self.ymin()),
            Point::new(self.xmax(), self.ymin()),
            Point::new(self.xmax(), self.ymax()),
            Point::new(self.xmin(), self.ymax()),
        ]
    }

    /// Boundary sides: bottom, right, top, left.
    pub fn sides(&self) -> [Segment; 4] {
        let [c1, c2, c3, c4] = self.corners();
        [
            Segment::new(c1, c2),
            Segment::new(c2, c3),
            Segment::new(c3, c4),
            Segment::new(c4, c1),
        ]
    }

    pub fn center(&self) -> Point {
        (self.min + self.max).scale(0.5)
    }

    pub fn size(&self) -> Point {
        self.max - self.min
    }

    pub fn width(&self) -> f64 {
        self.size().x
    }

    pub fn height(&self) -> f64 {
        self.size().y
    }

    /// Translate so the center lands on `c`, keeping the size.
    pub fn center_on(&self, c: Point) -> Rectangle {
        let d = c - self.center();
        Rectangle {
            min: self.min + d,
            max: self.max + d,
        }
    }

    /// Smallest rectangle containing both `self` and `p`.
    pub fn extend(&self, p: Point) -> Rectangle {
        Rectangle {
            min: Point::new(self.xmin().min(p.x), self.ymin().min(p.y)),
            max: Point::new(self.xmax().max(p.x), self.ymax().max(p.y)),
        }
    }

    pub fn fits_within(&self, width: f64, height: f64) -> bool {
        self.width() <= width && self.height() <= height
    }

    /// The `width` x `height` rectangle that contains `self` and reaches
    /// as far as possible in `direction`.
    ///
    /// A zero direction component takes the positive branch.
    pub fn extend_bounded(&self, direction: Point, width: f64, height: f64) -> Rectangle {
        let (xmin, xmax) = if direction.x >= 0.0 {
            (self.xmin(), self.xmin() + width)
        } else {
            (self.xmax() - width, self.xmax())
        };
        let (ymin, ymax) = if direction.y >= 0.0 {
            (self.ymin(), self.ymin() + height)
        } else {
            (self.ymax() - height, self.ymax())
        };
        Rectangle {
            min: Point::new(xmin, ymin),
            max: Point::new(xmax, ymax),
        }
    }

    /// First point where `segment` crosses the boundary, checking sides in
    /// bottom, right, top, left order.
    ///
    /// A crossing at the segment's own start point is skipped, so a segment
    /// that starts on the boundary and leaves through another side reports
    /// the exit.
    pub fn segment_intersection(&self, segment: &Segment) -> Option<Point> {
        self.sides()
            .iter()
            .filter_map(|side| segment.intersection(side))
            .find(|p| *p != segment.p1)
    }

    /// Grow every side outwards by `margin`.
    pub fn pad(&self, margin: f64) -> Rectangle {
        let m = Point::new(margin, margin);
        Rectangle {
            min: self.min - m,
            max: self.max + m,
        }
    }

    pub fn contains(&self, p: Point, eps: f64) -> bool {
        p.x >= self.xmin() - eps
            && p.x <= self.xmax() + eps
            && p.y >= self.ymin() - eps
            && p.y <= self.ymax() + eps
    }

    /// Whether `p` lies on the boundary, within `eps`.
    pub fn on_boundary(&self, p: Point, eps: f64) -> bool {
        self.sides().iter().any(|side| side.contains(p, eps))
    }
}
