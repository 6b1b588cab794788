use crate::P2;

/// One of the four sub-rects produced by a split
///
/// Children of an internal node are stored in this order, so
/// `Quadrant as usize` indexes them directly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Quadrant {
    NW = 0,
    NE = 1,
    SW = 2,
    SE = 3,
}

impl Quadrant {
    /// All quadrants in child order
    pub const ALL: [Quadrant; 4] = [Quadrant::NW, Quadrant::NE, Quadrant::SW, Quadrant::SE];

    pub fn index(self) -> usize {
        self as usize
    }
}

/// Map a point to the quadrant it belongs to relative to a split point.
///
/// `x < sx` is west and `x >= sx` is east; `y < sy` is south and `y >= sy`
/// is north. Every point maps to exactly one quadrant, points lying on a
/// split line go east and/or north.
pub fn determine_quadrant(split: &P2, point: &P2) -> Quadrant {
    let east = point.x >= split.x;
    let north = point.y >= split.y;
    match (north, east) {
        (true, false) => Quadrant::NW,
        (true, true) => Quadrant::NE,
        (false, false) => Quadrant::SW,
        (false, true) => Quadrant::SE,
    }
}
