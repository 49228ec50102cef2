//! Graham's scan over screen-space points.
//!
//! Purpose
//! - Build the convex hull of a point set: pick the bottom-most anchor,
//!   sort the rest by polar angle around it, collapse collinear runs to
//!   their farthest member, then peel interior points with a monotonic
//!   stack. O(n log n), dominated by the sort.
//!
//! Conventions
//! - y grows downward, so the determinant sign is flipped relative to
//!   the usual cross product: positive means a clockwise turn. The sweep
//!   pops on `Clockwise`; flipping one side without the other breaks the
//!   scan.
//! - The determinant is compared exactly (no epsilon), which is reliable
//!   for integer-valued coordinates.

use crate::point::Point;
use std::cmp::Ordering;
use std::fmt;

/// Turn direction of a point triple in the screen convention.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    Collinear,
    Clockwise,
    CounterClockwise,
}

/// Classify the turn `a -> b -> c`.
///
/// Sign of the determinant of the vectors `ab` and `ac`, with the
/// screen-space mapping (positive = clockwise; see module docs).
#[inline]
pub fn orientation(a: Point, b: Point, c: Point) -> Orientation {
    let ab = b.coords() - a.coords();
    let ac = c.coords() - a.coords();
    let det = ab.x * ac.y - ab.y * ac.x;
    if det == 0.0 {
        Orientation::Collinear
    } else if det > 0.0 {
        Orientation::Clockwise
    } else {
        Orientation::CounterClockwise
    }
}

/// Errors surfaced by hull construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HullError {
    /// Fewer than 3 points supplied; a hull is undefined below a triangle.
    InsufficientPoints { found: usize },
    /// Fewer than 3 distinct angular directions survived collinearity
    /// cleanup (e.g. all points on one line through the anchor).
    InsufficientDistinctPoints { remaining: usize },
}

impl fmt::Display for HullError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InsufficientPoints { found } => {
                write!(f, "need at least 3 points to compute a hull, got {found}")
            }
            Self::InsufficientDistinctPoints { remaining } => write!(
                f,
                "need at least 3 distinct directions to compute a hull, {remaining} left after collinearity cleanup"
            ),
        }
    }
}

impl std::error::Error for HullError {}

/// Graham-scan hull computer.
///
/// Owns its working buffer: the input moves in at construction and is
/// reordered freely (anchor swap, angular sort, collinearity filter), so
/// the caller never observes a partially permuted collection.
#[derive(Clone, Debug)]
pub struct GrahamScan {
    points: Vec<Point>,
}

impl GrahamScan {
    /// Fails with [`HullError::InsufficientPoints`] below 3 points.
    pub fn new(points: Vec<Point>) -> Result<Self, HullError> {
        if points.len() < 3 {
            return Err(HullError::InsufficientPoints {
                found: points.len(),
            });
        }
        Ok(Self { points })
    }

    /// Compute the hull: anchor-first, counter-clockwise in the screen
    /// convention, no duplicate vertices.
    ///
    /// Exactly 3 input points are returned as-is, order and identity
    /// preserved, without a collinearity check; 3 collinear inputs thus
    /// come back unchanged rather than erroring. Accepted edge case.
    pub fn compute(mut self) -> Result<Vec<Point>, HullError> {
        if self.points.len() == 3 {
            return Ok(self.points);
        }
        let anchor = self.select_anchor();
        self.sort_by_angle(anchor);
        let cleaned = self.collapse_collinear(anchor);
        if cleaned.len() < 3 {
            return Err(HullError::InsufficientDistinctPoints {
                remaining: cleaned.len(),
            });
        }
        Ok(sweep(&cleaned))
    }

    /// Bottom-most point in screen space: largest y, ties broken by
    /// smaller x against the running best. Swapped into index 0.
    fn select_anchor(&mut self) -> Point {
        let mut best = 0;
        for i in 1..self.points.len() {
            let p = self.points[i];
            let b = self.points[best];
            if p.y > b.y || (p.y == b.y && p.x < b.x) {
                best = i;
            }
        }
        self.points.swap(0, best);
        self.points[0]
    }

    /// Sort positions 1.. by polar angle around the anchor. Pairs
    /// collinear with the anchor order farther-first, so the cleanup walk
    /// can drop the nearer duplicates behind the run head.
    fn sort_by_angle(&mut self, anchor: Point) {
        self.points[1..].sort_by(|&p1, &p2| match orientation(anchor, p1, p2) {
            Orientation::CounterClockwise => Ordering::Less,
            Orientation::Clockwise => Ordering::Greater,
            Orientation::Collinear => anchor
                .squared_distance(p2)
                .partial_cmp(&anchor.squared_distance(p1))
                .unwrap_or(Ordering::Equal),
        });
    }

    /// Keep one point per distinct angle from the anchor: the farthest.
    ///
    /// The anchor sits at the bottom of the set, so no two remaining
    /// points lie on opposite rays through it; collinear-with-anchor
    /// always means same angle.
    fn collapse_collinear(&self, anchor: Point) -> Vec<Point> {
        let pts = &self.points;
        let mut kept = vec![pts[0], pts[1]];
        for &p in &pts[2..] {
            if let Some(&prev) = kept.last() {
                if orientation(anchor, prev, p) == Orientation::Collinear {
                    // Same angle as the kept run head; farther-first sort
                    // makes `p` the nearer duplicate.
                    continue;
                }
            }
            kept.push(p);
        }
        kept
    }
}

/// One-shot convenience over [`GrahamScan`].
pub fn convex_hull(points: Vec<Point>) -> Result<Vec<Point>, HullError> {
    GrahamScan::new(points)?.compute()
}

/// Monotonic stack sweep over the cleaned sequence (anchor at index 0,
/// length >= 3). A clockwise turn at the top two entries pops the top;
/// collinear and counter-clockwise turns are accepted.
fn sweep(cleaned: &[Point]) -> Vec<Point> {
    let mut stack = vec![cleaned[0], cleaned[1], cleaned[2]];
    for &p in &cleaned[3..] {
        while stack.len() >= 2 {
            let turn = orientation(stack[stack.len() - 2], stack[stack.len() - 1], p);
            if turn != Orientation::Clockwise {
                break;
            }
            stack.pop();
        }
        stack.push(p);
    }
    stack
}
