//! Cursor-zone classification for drop intents.
//!
//! Maps a pointer position over a region to the split or swap a drop there
//! should request: the four diagonal triangles select a side split, the
//! central box selects a swap, and everything indeterminate lands in
//! [`Zone::Boundary`] for the caller to resolve.

use sash_core::{Point, Rect};
use serde::{Deserialize, Serialize};

/// Fraction of each dimension covered by the central swap box.
pub const CENTER_FRACTION: f64 = 0.3;

/// Drop intent for a pointer position over a region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Zone {
    Top,
    Right,
    Bottom,
    Left,
    Center,
    /// On the rect border, the center-box border, or a diagonal — an
    /// intentionally undecided zone; callers must have a policy for it.
    Boundary,
    Outside,
}

/// The central swap box: the middle [`CENTER_FRACTION`] of both dimensions.
///
/// Useful to callers rendering a swap ghost; [`classify`] reports points
/// strictly inside it as [`Zone::Center`].
#[must_use]
pub fn center_box(rect: Rect) -> Rect {
    let margin_x = rect.width * (1.0 - CENTER_FRACTION) / 2.0;
    let margin_y = rect.height * (1.0 - CENTER_FRACTION) / 2.0;
    Rect::new(
        rect.left + margin_x,
        rect.top + margin_y,
        rect.width - 2.0 * margin_x,
        rect.height - 2.0 * margin_y,
    )
}

/// Classify a pointer position against a region rectangle.
///
/// The rectangle's diagonals divide it into four triangles keyed to the
/// side splits; the central box overrides them as the swap zone. A
/// rectangle without interior classifies every point on it as
/// [`Zone::Boundary`].
#[must_use]
pub fn classify(rect: Rect, point: Point) -> Zone {
    let right = rect.right();
    let bottom = rect.bottom();
    if point.x < rect.left || point.x > right || point.y < rect.top || point.y > bottom {
        return Zone::Outside;
    }
    if rect.is_empty()
        || point.x == rect.left
        || point.x == right
        || point.y == rect.top
        || point.y == bottom
    {
        return Zone::Boundary;
    }

    let center = center_box(rect);
    if center.contains(point) {
        if point.x == center.left
            || point.x == center.right()
            || point.y == center.top
            || point.y == center.bottom()
        {
            return Zone::Boundary;
        }
        return Zone::Center;
    }

    // Diagonal line equations in cross-product form: `main` is the
    // top-left/bottom-right diagonal, `anti` the bottom-left/top-right one.
    // Negative means above the diagonal.
    let dx = point.x - rect.left;
    let dy = point.y - rect.top;
    let main = dy * rect.width - dx * rect.height;
    let anti = dy * rect.width + dx * rect.height - rect.width * rect.height;
    if main == 0.0 || anti == 0.0 {
        return Zone::Boundary;
    }
    match (main < 0.0, anti < 0.0) {
        (true, true) => Zone::Top,
        (false, false) => Zone::Bottom,
        (false, true) => Zone::Left,
        (true, false) => Zone::Right,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RECT: Rect = Rect::new(0.0, 0.0, 100.0, 100.0);

    #[test]
    fn center_point_classifies_as_center() {
        // Scenario D.
        assert_eq!(classify(RECT, Point::new(50.0, 50.0)), Zone::Center);
    }

    #[test]
    fn center_holds_for_any_positive_area_rect() {
        for rect in [
            Rect::new(10.0, 20.0, 300.0, 40.0),
            Rect::new(-50.0, -50.0, 5.0, 500.0),
            Rect::new(0.0, 0.0, 1.0, 1.0),
        ] {
            assert_eq!(classify(rect, rect.center()), Zone::Center);
        }
    }

    #[test]
    fn side_triangles_classify_by_diagonals() {
        assert_eq!(classify(RECT, Point::new(10.0, 50.0)), Zone::Left);
        assert_eq!(classify(RECT, Point::new(90.0, 50.0)), Zone::Right);
        assert_eq!(classify(RECT, Point::new(50.0, 10.0)), Zone::Top);
        assert_eq!(classify(RECT, Point::new(50.0, 90.0)), Zone::Bottom);
    }

    #[test]
    fn off_axis_points_still_land_in_their_triangle() {
        // Inside the top triangle but left of center.
        assert_eq!(classify(RECT, Point::new(40.0, 5.0)), Zone::Top);
        // Inside the left triangle but below center.
        assert_eq!(classify(RECT, Point::new(5.0, 60.0)), Zone::Left);
    }

    #[test]
    fn points_outside_the_rect_classify_as_outside() {
        assert_eq!(classify(RECT, Point::new(150.0, 50.0)), Zone::Outside);
        assert_eq!(classify(RECT, Point::new(50.0, -1.0)), Zone::Outside);
        assert_eq!(classify(RECT, Point::new(-0.001, 50.0)), Zone::Outside);
    }

    #[test]
    fn rect_border_is_boundary() {
        assert_eq!(classify(RECT, Point::new(0.0, 50.0)), Zone::Boundary);
        assert_eq!(classify(RECT, Point::new(100.0, 50.0)), Zone::Boundary);
        assert_eq!(classify(RECT, Point::new(50.0, 0.0)), Zone::Boundary);
        assert_eq!(classify(RECT, Point::new(100.0, 100.0)), Zone::Boundary);
    }

    #[test]
    fn center_box_covers_the_middle_fraction() {
        let center = center_box(RECT);
        assert!((center.left - 35.0).abs() < 1e-9);
        assert!((center.top - 35.0).abs() < 1e-9);
        assert!((center.width - 30.0).abs() < 1e-9);
        assert!((center.height - 30.0).abs() < 1e-9);
    }

    #[test]
    fn center_box_border_is_boundary() {
        let center = center_box(RECT);
        assert_eq!(classify(RECT, Point::new(center.left, 50.0)), Zone::Boundary);
        assert_eq!(
            classify(RECT, Point::new(center.right(), 50.0)),
            Zone::Boundary
        );
        assert_eq!(classify(RECT, Point::new(50.0, center.top)), Zone::Boundary);
        assert_eq!(
            classify(RECT, Point::new(50.0, center.bottom())),
            Zone::Boundary
        );
    }

    #[test]
    fn just_inside_the_center_box_is_center() {
        let center = center_box(RECT);
        assert_eq!(
            classify(RECT, Point::new(center.left + 0.001, 50.0)),
            Zone::Center
        );
        assert_eq!(
            classify(RECT, Point::new(50.0, center.bottom() - 0.001)),
            Zone::Center
        );
    }

    #[test]
    fn diagonals_are_boundary() {
        assert_eq!(classify(RECT, Point::new(10.0, 10.0)), Zone::Boundary);
        assert_eq!(classify(RECT, Point::new(90.0, 10.0)), Zone::Boundary);
        assert_eq!(classify(RECT, Point::new(20.0, 80.0)), Zone::Boundary);
    }

    #[test]
    fn degenerate_rects_have_no_interior() {
        let flat = Rect::new(0.0, 0.0, 100.0, 0.0);
        assert_eq!(classify(flat, Point::new(50.0, 0.0)), Zone::Boundary);
        assert_eq!(classify(flat, Point::new(50.0, 1.0)), Zone::Outside);
        let thin = Rect::new(0.0, 0.0, 0.0, 100.0);
        assert_eq!(classify(thin, Point::new(0.0, 50.0)), Zone::Boundary);
    }

    #[test]
    fn non_square_rects_scale_the_diagonal_test() {
        let wide = Rect::new(0.0, 0.0, 400.0, 100.0);
        // Same relative offset as (10, 50) on a square: well into the left
        // triangle even though the rect is 4x wider.
        assert_eq!(classify(wide, Point::new(40.0, 50.0)), Zone::Left);
        assert_eq!(classify(wide, Point::new(200.0, 10.0)), Zone::Top);
    }
}
