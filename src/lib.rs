//! A bucketed point quadtree with pluggable split policies.
//!
//! Items are stored in leaf buckets. When a bucket grows past the configured
//! `max_bucket_size`, the leaf is cut into four quadrants at a point chosen by
//! a [`SplitStrategy`]:
//!
//! - [`SplitStrategy::CenterSplit`] cuts at the geometric center of the leaf.
//! - [`SplitStrategy::MedianSplit`] cuts at the per-axis median of the leaf's
//!   items (the upper middle value for even counts), falling back to the
//!   center when the bucket is empty.
//!
//! A point `(x, y)` belongs to the east side of a split when `x >= sx` and to
//! the north side when `y >= sy`.
//!
//! ```
//! use nalgebra::point;
//! use splitquad::{QuadTree, Rect, SplitStrategy};
//!
//! let domain = Rect::new(point![0.0, 0.0], point![100.0, 100.0]);
//! let mut qt = QuadTree::new(domain, 2, SplitStrategy::MedianSplit);
//! qt.insert(10.0, 10.0, "a").unwrap();
//! qt.insert(20.0, 20.0, "b").unwrap();
//! qt.insert(90.0, 90.0, "c").unwrap();
//!
//! assert_eq!(qt.root().split_point(), Some(point![20.0, 20.0]));
//! assert!(qt.insert(150.0, 0.0, "d").is_err());
//! ```

use nalgebra::Point2;

mod bucket;
mod config;
mod error;
mod item;
mod node;
mod quadtree;
mod shapes;
mod split;
mod util;

pub use bucket::Bucket;
pub use config::TreeConfig;
pub use error::{ConfigError, OutOfDomain};
pub use item::Item;
pub use node::{Leaves, Node};
pub use quadtree::QuadTree;
pub use shapes::Rect;
pub use split::{median, SplitStrategy};
pub use util::{determine_quadrant, Quadrant};

/// 2d point type used for positions, boundaries and split points
pub type P2 = Point2<f64>;
