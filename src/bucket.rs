use crate::item::Item;

/// The ordered item container owned by a leaf node
///
/// Items keep their insertion order. A bucket only grows; when its leaf
/// splits, the items are moved out wholesale into the children.
#[derive(Clone, Debug, PartialEq)]
pub struct Bucket<T> {
    items: Vec<Item<T>>,
}

impl<T> Bucket<T> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get the items in insertion order
    pub fn items(&self) -> &[Item<T>] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Item<T>> {
        self.items.iter()
    }

    pub(crate) fn push(&mut self, item: Item<T>) {
        self.items.push(item);
    }

    /// Move every item out, leaving the bucket empty
    pub(crate) fn take(&mut self) -> Vec<Item<T>> {
        std::mem::take(&mut self.items)
    }
}

impl<T> Default for Bucket<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<'a, T> IntoIterator for &'a Bucket<T> {
    type Item = &'a Item<T>;
    type IntoIter = std::slice::Iter<'a, Item<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
