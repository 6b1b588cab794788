use nalgebra::point;

use crate::{item::Item, shapes::Rect, P2};

/// Policy deciding where an overflowing leaf is cut into four quadrants
///
/// The x and y coordinates of the split point are chosen independently.
/// The result always lies within the node's rect, and choosing never fails:
/// a median split over an empty bucket degrades to a center split.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SplitStrategy {
    /// Cut at the geometric center of the rect, ignoring the bucket
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "center"))]
    CenterSplit,
    /// Cut at the per-axis median of the bucket's coordinates
    #[cfg_attr(feature = "serde", serde(rename = "median"))]
    MedianSplit,
}

impl SplitStrategy {
    /// Choose the split point for a node with boundary `rect` holding `items`
    pub fn choose_split<T>(&self, rect: &Rect, items: &[Item<T>]) -> P2 {
        match self {
            Self::CenterSplit => rect.center(),
            Self::MedianSplit => {
                let mut xs: Vec<f64> = items.iter().map(|item| item.x).collect();
                let mut ys: Vec<f64> = items.iter().map(|item| item.y).collect();
                match (median(&mut xs), median(&mut ys)) {
                    (Some(sx), Some(sy)) => point![sx, sy],
                    _ => Self::CenterSplit.choose_split(rect, items),
                }
            }
        }
    }
}

/// Select the median of `values` in linear time, reordering the slice.
///
/// For an even number of values this is the upper of the two middle
/// elements, i.e. the element of rank `n / 2`. Together with the quadrant
/// rule, which sends values equal to the split east and north, this puts
/// `n / 2` distinct values on each side. Values are ordered with
/// [`f64::total_cmp`]. Returns `None` for an empty slice.
pub fn median(values: &mut [f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let rank = values.len() / 2;
    let (_, median, _) = values.select_nth_unstable_by(rank, f64::total_cmp);
    Some(*median)
}
