use crate::{
    bucket::Bucket,
    item::Item,
    shapes::Rect,
    split::SplitStrategy,
    util::{determine_quadrant, Quadrant},
    P2,
};

/// QuadTree node enum
///
/// ## Variants
/// - `Leaf`: Owns a bucket of items and represents an undivided area.
/// - `Internal`: Owns a split point and four children, ordered NW, NE, SW, SE,
///   that partition the area at that point.
///
/// A leaf only ever turns into an internal node; nodes are never merged back.
/// Trees can nest arbitrarily deep on clustered or sorted input, so every walk
/// over a node (insert, split, depth, drop) runs on an explicit stack.
#[derive(Debug)]
pub enum Node<T> {
    Leaf {
        boundary: Rect,
        bucket: Bucket<T>,
    },
    Internal {
        boundary: Rect,
        split: P2,
        children: [Box<Self>; 4],
    },
}

impl<T> Node<T> {
    pub(crate) fn leaf(boundary: Rect, capacity: usize) -> Self {
        Self::Leaf {
            boundary,
            bucket: Bucket::with_capacity(capacity),
        }
    }

    /// Get the boundary rect of the node
    pub fn boundary(&self) -> &Rect {
        match self {
            Self::Leaf { boundary, .. } => boundary,
            Self::Internal { boundary, .. } => boundary,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf { .. })
    }

    /// Get the split point of an internal node
    pub fn split_point(&self) -> Option<P2> {
        match self {
            Self::Internal { split, .. } => Some(*split),
            Self::Leaf { .. } => None,
        }
    }

    /// Get the children of an internal node, ordered NW, NE, SW, SE
    pub fn children(&self) -> Option<&[Box<Self>; 4]> {
        match self {
            Self::Internal { children, .. } => Some(children),
            Self::Leaf { .. } => None,
        }
    }

    pub fn child(&self, quadrant: Quadrant) -> Option<&Self> {
        self.children().map(|c| &*c[quadrant.index()])
    }

    /// Get the bucket of a leaf node
    pub fn bucket(&self) -> Option<&Bucket<T>> {
        match self {
            Self::Leaf { bucket, .. } => Some(bucket),
            Self::Internal { .. } => None,
        }
    }

    /// Depth-first iterator over the leaves below this node, in child order
    pub fn leaves(&self) -> Leaves<'_, T> {
        Leaves { stack: vec![self] }
    }

    /// Number of levels below and including this node
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(self, 1)];
        while let Some((node, level)) = stack.pop() {
            deepest = deepest.max(level);
            if let Self::Internal { children, .. } = node {
                stack.extend(children.iter().map(|c| (&**c, level + 1)));
            }
        }
        deepest
    }

    /// Descend to the leaf owning the item's position and store it there,
    /// splitting the leaf if it overflows.
    ///
    /// The caller guarantees that the item lies within this node's boundary.
    pub(crate) fn insert(&mut self, item: Item<T>, capacity: usize, strategy: SplitStrategy) {
        let point = item.point();
        let mut depth = 0;
        let mut node = self;
        while let Self::Internal {
            split, children, ..
        } = node
        {
            let q = determine_quadrant(split, &point);
            node = &mut *children[q.index()];
            depth += 1;
        }

        let overflowing = match node {
            Self::Leaf { bucket, .. } => {
                bucket.push(item);
                bucket.len() > capacity
            }
            Self::Internal { .. } => false,
        };

        if overflowing {
            node.split(capacity, strategy, depth);
        }
    }

    /// Split an overflowing leaf, then keep splitting any new child that is
    /// still over capacity until every bucket fits or cannot be separated.
    fn split(&mut self, capacity: usize, strategy: SplitStrategy, depth: usize) {
        let mut pending = vec![(self, depth)];
        while let Some((node, depth)) = pending.pop() {
            if !node.split_leaf(capacity, strategy, depth) {
                continue;
            }
            if let Self::Internal { children, .. } = node {
                for child in children.iter_mut() {
                    if child.bucket().is_some_and(|b| b.len() > capacity) {
                        pending.push((&mut **child, depth + 1));
                    }
                }
            }
        }
    }

    /// Turn this leaf into an internal node with four leaf children.
    ///
    /// Items are moved into the children by the quadrant rule. When the chosen
    /// split point would put every item into a child with this node's exact
    /// boundary, a median split retries at the center. A split that still
    /// cannot make progress is declined, as is any split of a bucket whose
    /// items all share one position once the boundary has shrunk to float
    /// resolution around it. A declined leaf keeps its oversized bucket.
    ///
    /// **Returns** whether the leaf was split
    fn split_leaf(&mut self, capacity: usize, strategy: SplitStrategy, depth: usize) -> bool {
        let Self::Leaf { boundary, bucket } = self else {
            return false;
        };
        let boundary = *boundary;
        let shared = shared_point(bucket);

        if shared.is_some_and(|p| is_resolved(&boundary, &p)) {
            log::debug!(
                "declining split of {} coincident items at depth {depth}, boundary {:?}",
                bucket.len(),
                boundary
            );
            return false;
        }

        let mut split = strategy.choose_split(&boundary, bucket.items());
        if strategy == SplitStrategy::MedianSplit
            && shared.is_none()
            && is_stuck(&boundary, &split, bucket)
        {
            split = SplitStrategy::CenterSplit.choose_split(&boundary, bucket.items());
        }

        if is_stuck(&boundary, &split, bucket) {
            log::debug!(
                "declining split of {} inseparable items at depth {depth}, boundary {:?}",
                bucket.len(),
                boundary
            );
            return false;
        }

        log::trace!(
            "splitting leaf of {} items at depth {depth} on ({}, {}) with {strategy:?}",
            bucket.len(),
            split.x,
            split.y
        );

        let items = bucket.take();
        let mut children = boundary
            .split_at(&split)
            .map(|r| Box::new(Self::leaf(r, capacity)));
        for item in items {
            let q = determine_quadrant(&split, &item.point());
            if let Self::Leaf { bucket, .. } = children[q.index()].as_mut() {
                bucket.push(item);
            }
        }

        *self = Self::Internal {
            boundary,
            split,
            children,
        };
        true
    }
}

impl<T> Drop for Node<T> {
    fn drop(&mut self) {
        let mut detached = Vec::new();
        detach_children(self, &mut detached);
        // Each popped node has only leaf children left, so dropping it is shallow
        while let Some(mut node) = detached.pop() {
            detach_children(&mut node, &mut detached);
        }
    }
}

/// Swap the children of an internal node for empty leaves and collect them
fn detach_children<T>(node: &mut Node<T>, detached: &mut Vec<Node<T>>) {
    if let Node::Internal { children, .. } = node {
        for child in children.iter_mut() {
            if !child.is_leaf() {
                let boundary = *child.boundary();
                detached.push(std::mem::replace(&mut **child, Node::leaf(boundary, 0)));
            }
        }
    }
}

/// Check if splitting at `split` would leave every item in a quadrant identical
/// to the node's own boundary
fn is_stuck<T>(boundary: &Rect, split: &P2, bucket: &Bucket<T>) -> bool {
    let quadrants = boundary.split_at(split);
    let mut assigned = bucket.iter().map(|item| determine_quadrant(split, &item.point()));
    match assigned.next() {
        Some(first) => quadrants[first.index()] == *boundary && assigned.all(|q| q == first),
        None => false,
    }
}

/// The position shared by every item of a non-empty bucket, if there is one
fn shared_point<T>(bucket: &Bucket<T>) -> Option<P2> {
    let mut points = bucket.iter().map(Item::point);
    let first = points.next()?;
    points.all(|p| p == first).then_some(first)
}

/// Check if a boundary around `point` is too small to be worth halving again
fn is_resolved(boundary: &Rect, point: &P2) -> bool {
    let tolerance = f64::EPSILON * point.x.abs().max(point.y.abs()).max(1.0);
    boundary.width() <= tolerance && boundary.height() <= tolerance
}

/// Depth-first iterator over leaf nodes, see [`Node::leaves`]
#[derive(Debug)]
pub struct Leaves<'a, T> {
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Iterator for Leaves<'a, T> {
    type Item = &'a Node<T>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.stack.pop() {
            match node {
                Node::Leaf { .. } => return Some(node),
                Node::Internal { children, .. } => {
                    self.stack.extend(children.iter().rev().map(|c| &**c));
                }
            }
        }
        None
    }
}
