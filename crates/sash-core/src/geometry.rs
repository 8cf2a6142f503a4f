//! Geometric primitives.

use serde::{Deserialize, Serialize};

/// A point in the layout coordinate space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Create a new point.
    #[inline]
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle in absolute coordinates.
///
/// `left`/`top` locate the origin in the root coordinate space. Width and
/// height are non-negative in well-formed trees; zero is tolerated.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Create a new rectangle.
    #[inline]
    #[must_use]
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Right edge.
    #[inline]
    #[must_use]
    pub const fn right(&self) -> f64 {
        self.left + self.width
    }

    /// Bottom edge.
    #[inline]
    #[must_use]
    pub const fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Center point.
    #[inline]
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    /// Check if the rectangle has no interior.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Check if a point lies inside the rectangle, borders included.
    #[inline]
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.left
            && point.x <= self.right()
            && point.y >= self.top
            && point.y <= self.bottom()
    }

    /// Compute the overlap rectangle with another rectangle.
    ///
    /// Returns `None` when the rectangles do not overlap. Comparisons are
    /// strict: rectangles that merely touch along an edge or corner do not
    /// intersect.
    #[must_use]
    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        let left = self.left.max(other.left);
        let top = self.top.max(other.top);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        if right > left && bottom > top {
            Some(Rect::new(left, top, right - left, bottom - top))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn point_construction() {
        let p = Point::new(3.0, -4.5);
        assert_eq!(p.x, 3.0);
        assert_eq!(p.y, -4.5);
    }

    #[test]
    fn rect_edges() {
        let r = Rect::new(10.0, 20.0, 100.0, 50.0);
        assert_eq!(r.right(), 110.0);
        assert_eq!(r.bottom(), 70.0);
    }

    #[test]
    fn rect_center() {
        let r = Rect::new(0.0, 0.0, 100.0, 200.0);
        assert_eq!(r.center(), Point::new(50.0, 100.0));
    }

    #[test]
    fn rect_contains_borders() {
        let r = Rect::new(0.0, 0.0, 100.0, 100.0);
        assert!(r.contains(Point::new(0.0, 0.0)));
        assert!(r.contains(Point::new(100.0, 100.0)));
        assert!(r.contains(Point::new(50.0, 50.0)));
        assert!(!r.contains(Point::new(100.1, 50.0)));
        assert!(!r.contains(Point::new(50.0, -0.1)));
    }

    #[test]
    fn rect_is_empty_on_zero_extent() {
        assert!(Rect::new(0.0, 0.0, 0.0, 10.0).is_empty());
        assert!(Rect::new(0.0, 0.0, 10.0, 0.0).is_empty());
        assert!(!Rect::new(0.0, 0.0, 10.0, 10.0).is_empty());
    }

    #[test]
    fn intersection_of_overlapping_rects() {
        let a = Rect::new(0.0, 0.0, 100.0, 100.0);
        let b = Rect::new(50.0, 50.0, 100.0, 100.0);
        let overlap = a.intersection(&b).expect("rects overlap");
        assert_eq!(overlap, Rect::new(50.0, 50.0, 50.0, 50.0));
    }

    #[test]
    fn intersection_of_contained_rect_is_the_inner_rect() {
        let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
        let inner = Rect::new(25.0, 25.0, 10.0, 10.0);
        assert_eq!(outer.intersection(&inner), Some(inner));
    }

    #[test]
    fn edge_touching_rects_do_not_intersect() {
        let a = Rect::new(0.0, 0.0, 100.0, 100.0);
        let b = Rect::new(100.0, 0.0, 100.0, 100.0);
        assert_eq!(a.intersection(&b), None);
    }

    #[test]
    fn corner_touching_rects_do_not_intersect() {
        let a = Rect::new(0.0, 0.0, 100.0, 100.0);
        let b = Rect::new(100.0, 100.0, 100.0, 100.0);
        assert_eq!(a.intersection(&b), None);
    }

    #[test]
    fn disjoint_rects_do_not_intersect() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(50.0, 50.0, 10.0, 10.0);
        assert_eq!(a.intersection(&b), None);
    }

    proptest! {
        #[test]
        fn intersection_is_commutative(
            ax in -500.0..500.0f64, ay in -500.0..500.0f64,
            aw in 0.0..500.0f64, ah in 0.0..500.0f64,
            bx in -500.0..500.0f64, by in -500.0..500.0f64,
            bw in 0.0..500.0f64, bh in 0.0..500.0f64,
        ) {
            let a = Rect::new(ax, ay, aw, ah);
            let b = Rect::new(bx, by, bw, bh);
            prop_assert_eq!(a.intersection(&b), b.intersection(&a));
        }

        #[test]
        fn intersection_lies_within_both_inputs(
            ax in -500.0..500.0f64, ay in -500.0..500.0f64,
            aw in 0.0..500.0f64, ah in 0.0..500.0f64,
            bx in -500.0..500.0f64, by in -500.0..500.0f64,
            bw in 0.0..500.0f64, bh in 0.0..500.0f64,
        ) {
            let a = Rect::new(ax, ay, aw, ah);
            let b = Rect::new(bx, by, bw, bh);
            if let Some(overlap) = a.intersection(&b) {
                prop_assert!(overlap.left >= a.left && overlap.left >= b.left);
                prop_assert!(overlap.top >= a.top && overlap.top >= b.top);
                prop_assert!(overlap.right() <= a.right() + 1e-9);
                prop_assert!(overlap.right() <= b.right() + 1e-9);
                prop_assert!(overlap.bottom() <= a.bottom() + 1e-9);
                prop_assert!(overlap.bottom() <= b.bottom() + 1e-9);
                prop_assert!(overlap.width > 0.0 && overlap.height > 0.0);
            }
        }
    }
}
