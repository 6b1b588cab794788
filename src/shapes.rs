use nalgebra::{self as na, point};

use crate::P2;

/// Represents an axis-aligned rectangle defined by two points: the start (lower-left)
/// and the end (upper-right). It is used as the boundary of every QuadTree node and
/// provides the geometry needed to split a node into quadrants.
///
/// Containment is inclusive on all four edges.
///
/// With the `serde` feature a rect is stored as its two corners and rebuilt
/// through [`Rect::new`] on deserialization.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "Corners", into = "Corners")
)]
pub struct Rect {
    start: P2,
    center: P2,
    end: P2,
}

impl Rect {
    /// Create a new rect spanning two corner points
    ///
    /// The corners may be given in any order; the rect always stores the
    /// component-wise minimum as `start` and the maximum as `end`.
    pub fn new(start: P2, end: P2) -> Self {
        let (start, end) = (start.inf(&end), start.sup(&end));
        Self {
            start,
            center: na::center(&start, &end),
            end,
        }
    }

    /// Create a rect from its extents on each axis
    pub fn from_bounds(xmin: f64, ymin: f64, xmax: f64, ymax: f64) -> Self {
        Self::new(point![xmin, ymin], point![xmax, ymax])
    }

    /// Get the start (lower-left) point of the rect
    pub fn start(&self) -> P2 {
        self.start
    }

    /// Get the end (upper-right) point of the rect
    pub fn end(&self) -> P2 {
        self.end
    }

    /// Get the center point of the rect
    pub fn center(&self) -> P2 {
        self.center
    }

    pub fn width(&self) -> f64 {
        self.end.x - self.start.x
    }

    pub fn height(&self) -> f64 {
        self.end.y - self.start.y
    }

    /// Check if a point exists within the rect
    ///
    /// Points with a NaN coordinate are never contained.
    pub fn contains(&self, point: &P2) -> bool {
        *point >= self.start && *point <= self.end
    }

    /// Check if another rect lies entirely within this one
    pub fn contains_rect(&self, other: &Rect) -> bool {
        self.contains(&other.start) && self.contains(&other.end)
    }

    /// Check if the rect shares any space with another rect
    pub fn intersects(&self, other: &Rect) -> bool {
        !(self.end.x < other.start.x
            || self.start.x > other.end.x
            || self.end.y < other.start.y
            || self.start.y > other.end.y)
    }

    /// Cut the rect at `split` into four sub-rects, ordered NW, NE, SW, SE
    ///
    /// `split` is expected to lie within the rect. Sub-rects share their
    /// edges along the split lines; which one owns a point on a shared edge
    /// is decided by [`determine_quadrant`](crate::util::determine_quadrant).
    pub fn split_at(&self, split: &P2) -> [Self; 4] {
        let &Rect { start, end, .. } = self;

        [
            Rect::new(point![start.x, split.y], point![split.x, end.y]),
            Rect::new(*split, end),
            Rect::new(start, *split),
            Rect::new(point![split.x, start.y], point![end.x, split.y]),
        ]
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct Corners {
    start: P2,
    end: P2,
}

#[cfg(feature = "serde")]
impl From<Corners> for Rect {
    fn from(corners: Corners) -> Self {
        Rect::new(corners.start, corners.end)
    }
}

#[cfg(feature = "serde")]
impl From<Rect> for Corners {
    fn from(rect: Rect) -> Self {
        Corners {
            start: rect.start,
            end: rect.end,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::util::tests::make_rect;
    use nalgebra::point;

    use super::*;

    #[test]
    fn rect_properties() {
        let rect = make_rect(0.0, 0.0, 10.0, 20.0);
        assert_eq!(
            rect.start(),
            point![0.0, 0.0],
            "Start should be at (0.0, 0.0)"
        );
        assert_eq!(
            rect.end(),
            point![10.0, 20.0],
            "End should be at (10.0, 20.0)"
        );
        assert_eq!(
            rect.center(),
            point![5.0, 10.0],
            "Center should be at (5.0, 10.0)"
        );
        assert_eq!(rect.width(), 10.0, "Width should be 10.0");
        assert_eq!(rect.height(), 20.0, "Height should be 20.0");
    }

    #[test]
    fn rect_normalizes_corners() {
        let rect = make_rect(10.0, 0.0, 0.0, 10.0);
        assert_eq!(
            rect,
            make_rect(0.0, 0.0, 10.0, 10.0),
            "Swapped corners should produce the same rect"
        );
    }

    #[test]
    fn rect_contains_point() {
        let rect = make_rect(0.0, 0.0, 10.0, 10.0);
        assert!(
            rect.contains(&point![5.0, 5.0]),
            "Rect should contain point (5.0, 5.0)"
        );
        assert!(
            !rect.contains(&point![-1.0, 5.0]),
            "Rect should not contain point (-1.0, 5.0)"
        );
        assert!(
            rect.contains(&point![0.0, 0.0]),
            "Rect should contain its start point (0.0, 0.0)"
        );
        assert!(
            rect.contains(&point![10.0, 10.0]),
            "Rect should contain its end point (10.0, 10.0)"
        );
        assert!(
            !rect.contains(&point![f64::NAN, 5.0]),
            "Rect should never contain a NaN coordinate"
        );
    }

    #[test]
    fn rect_intersects_with_another_rect() {
        let rect1 = make_rect(0.0, 0.0, 10.0, 10.0);
        assert!(
            rect1.intersects(&make_rect(5.0, 5.0, 15.0, 15.0)),
            "Overlapping rects should intersect"
        );
        assert!(
            rect1.intersects(&make_rect(10.0, 10.0, 20.0, 20.0)),
            "Rects touching at a corner count as intersecting"
        );
        assert!(
            rect1.intersects(&make_rect(3.0, 3.0, 7.0, 7.0)),
            "A rect entirely inside another should intersect"
        );
        assert!(
            !rect1.intersects(&make_rect(11.0, 11.0, 21.0, 21.0)),
            "Disjoint rects should not intersect"
        );
        assert!(
            !rect1.intersects(&make_rect(0.0, -10.0, 10.0, -1.0)),
            "A rect below should not intersect"
        );
    }

    #[test]
    fn rect_contains_another_rect() {
        let outer = make_rect(0.0, 0.0, 10.0, 10.0);
        assert!(
            outer.contains_rect(&make_rect(1.0, 1.0, 9.0, 9.0)),
            "Outer rect should contain inner rect completely"
        );
        assert!(
            !outer.contains_rect(&make_rect(5.0, 5.0, 15.0, 15.0)),
            "Outer rect should not contain overlapping rect"
        );
    }

    #[test]
    fn splitting_rect_off_center() {
        let rect = make_rect(0.0, 0.0, 100.0, 100.0);
        let [nw, ne, sw, se] = rect.split_at(&point![20.0, 70.0]);
        assert_eq!(nw, make_rect(0.0, 70.0, 20.0, 100.0), "NW quadrant");
        assert_eq!(ne, make_rect(20.0, 70.0, 100.0, 100.0), "NE quadrant");
        assert_eq!(sw, make_rect(0.0, 0.0, 20.0, 70.0), "SW quadrant");
        assert_eq!(se, make_rect(20.0, 0.0, 100.0, 70.0), "SE quadrant");

        let area: f64 = [nw, ne, sw, se].iter().map(|r| r.width() * r.height()).sum();
        assert_eq!(area, 10_000.0, "Quadrants should cover the whole rect");
    }

    #[test]
    fn splitting_rect_at_center() {
        let rect = make_rect(0.0, 0.0, 10.0, 10.0);
        let quarters = rect.split_at(&rect.center());
        assert_eq!(
            quarters,
            [
                make_rect(0.0, 5.0, 5.0, 10.0),
                make_rect(5.0, 5.0, 10.0, 10.0),
                make_rect(0.0, 0.0, 5.0, 5.0),
                make_rect(5.0, 0.0, 10.0, 5.0),
            ],
            "Quarters should be ordered NW, NE, SW, SE"
        );
    }

    #[test]
    fn splitting_on_an_edge_degenerates() {
        let rect = make_rect(0.0, 0.0, 10.0, 10.0);
        let [nw, ne, sw, se] = rect.split_at(&point![0.0, 0.0]);
        assert_eq!(ne, rect, "NE should keep the whole rect");
        assert_eq!(nw.width(), 0.0, "NW should collapse to a line");
        assert_eq!(se.height(), 0.0, "SE should collapse to a line");
        assert_eq!(sw, make_rect(0.0, 0.0, 0.0, 0.0), "SW should collapse to a point");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserializing_rect_normalizes_corners() {
        let json = serde_json::to_string(&Corners {
            start: point![10.0, 0.0],
            end: point![0.0, 10.0],
        })
        .unwrap();
        let rect: Rect = serde_json::from_str(&json).expect("Rect should deserialize");
        assert_eq!(
            rect,
            make_rect(0.0, 0.0, 10.0, 10.0),
            "Deserialized corners should be normalized with a fresh center"
        );

        let json = serde_json::to_string(&rect).unwrap();
        assert!(!json.contains("center"), "Only the corners are stored: {json}");
        let back: Rect = serde_json::from_str(&json).unwrap();
        assert_eq!(back, rect, "Rect should survive a round trip");
    }
}
