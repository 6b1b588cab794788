use nalgebra::point;

use crate::P2;

/// A payload stored in the tree at a fixed 2d position
///
/// Items are immutable once inserted; the tree only ever looks at the
/// coordinates.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item<T> {
    pub x: f64,
    pub y: f64,
    pub payload: T,
}

impl<T> Item<T> {
    pub fn new(x: f64, y: f64, payload: T) -> Self {
        Self { x, y, payload }
    }

    /// Get the position of the item as a point
    pub fn point(&self) -> P2 {
        point![self.x, self.y]
    }
}
