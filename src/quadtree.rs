use crate::{
    bucket::Bucket,
    config::TreeConfig,
    error::{ConfigError, OutOfDomain},
    item::Item,
    node::{Leaves, Node},
    shapes::Rect,
    split::SplitStrategy,
    P2,
};

/// A bucketed QuadTree for spatial indexing of 2D points.
///
/// Each leaf holds up to `max_bucket_size` items. When an insert pushes a leaf
/// over that limit, the configured [`SplitStrategy`] picks a split point and the
/// leaf becomes an internal node with four children. Split regions are never
/// rebalanced or merged.
///
/// Mutation needs `&mut self`; callers sharing a tree across threads must
/// serialize writers themselves.
#[derive(Debug)]
pub struct QuadTree<T> {
    root: Node<T>,
    config: TreeConfig,
    len: usize,
}

impl<T> QuadTree<T> {
    /// Create a new empty quadtree
    ///
    /// ## Arguments
    /// - `boundary`: The domain rect covered by the quadtree
    /// - `max_bucket_size`: The maximum number of items a leaf can hold before splitting
    /// - `split_strategy`: How the split point of an overflowing leaf is chosen
    ///
    /// ## Panics
    /// If `max_bucket_size` is zero.
    pub fn new(boundary: Rect, max_bucket_size: usize, split_strategy: SplitStrategy) -> Self {
        assert!(max_bucket_size > 0, "max_bucket_size must be greater than zero");
        Self {
            root: Node::leaf(boundary, max_bucket_size),
            config: TreeConfig {
                max_bucket_size,
                split_strategy,
            },
            len: 0,
        }
    }

    /// Create a new empty quadtree from a validated config
    pub fn with_config(boundary: Rect, config: TreeConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(
            boundary,
            config.max_bucket_size,
            config.split_strategy,
        ))
    }

    /// Insert a payload at `(x, y)`
    pub fn insert(&mut self, x: f64, y: f64, payload: T) -> Result<(), OutOfDomain> {
        self.insert_item(Item::new(x, y, payload))
    }

    /// Insert an item into the quadtree
    ///
    /// **Returns** [`OutOfDomain`] without storing anything if the item lies
    /// outside the domain rect or has a NaN coordinate.
    pub fn insert_item(&mut self, item: Item<T>) -> Result<(), OutOfDomain> {
        if !self.root.boundary().contains(&item.point()) {
            log::debug!(
                "rejecting ({}, {}) outside domain {:?}",
                item.x,
                item.y,
                self.root.boundary()
            );
            return Err(OutOfDomain {
                x: item.x,
                y: item.y,
            });
        }

        self.root.insert(
            item,
            self.config.max_bucket_size,
            self.config.split_strategy,
        );
        self.len += 1;
        Ok(())
    }

    /// Get the root node for traversal
    pub fn root(&self) -> &Node<T> {
        &self.root
    }

    /// Get the domain rect of the quadtree
    pub fn boundary(&self) -> &Rect {
        self.root.boundary()
    }

    /// Return the point at the center of the domain
    pub fn center(&self) -> P2 {
        self.root.boundary().center()
    }

    pub fn config(&self) -> &TreeConfig {
        &self.config
    }

    pub fn max_bucket_size(&self) -> usize {
        self.config.max_bucket_size
    }

    pub fn split_strategy(&self) -> SplitStrategy {
        self.config.split_strategy
    }

    /// Number of items stored in the tree
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of levels in the tree, 1 for a tree that never split
    pub fn depth(&self) -> usize {
        self.root.depth()
    }

    pub fn leaf_count(&self) -> usize {
        self.leaves().count()
    }

    /// Depth-first iterator over all leaves, children visited NW, NE, SW, SE
    pub fn leaves(&self) -> Leaves<'_, T> {
        self.root.leaves()
    }

    /// Iterate over all stored items in leaf order
    pub fn iter(&self) -> impl Iterator<Item = &Item<T>> + '_ {
        self.leaves().filter_map(Node::bucket).flat_map(Bucket::iter)
    }
}
