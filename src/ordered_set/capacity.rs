use super::OrderedSet;
use crate::discrete::Discrete;
use crate::raw::RawRangeTree;

impl<K: Discrete> OrderedSet<K> {
    /// Creates an empty set over `[lb, rb)` with room for at least
    /// `capacity` tree nodes before the arena reallocates.
    ///
    /// Each insertion materializes at most `log2(rb - lb)` nodes, so a
    /// caller expecting `n` distinct values can preallocate roughly
    /// `n * log2(rb - lb)` node slots.
    ///
    /// # Panics
    ///
    /// Panics if `lb >= rb`.
    ///
    /// # Examples
    ///
    /// ```
    /// use cpdsa::OrderedSet;
    ///
    /// let set: OrderedSet<i32> = OrderedSet::with_node_capacity(0, 1024, 256);
    /// assert!(set.node_capacity() >= 256);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(capacity) for memory allocation.
    #[must_use]
    pub fn with_node_capacity(lb: K, rb: K, capacity: usize) -> Self {
        assert!(lb < rb, "`OrderedSet::with_node_capacity()` - the domain is empty (`lb` >= `rb`)!");
        OrderedSet {
            tree: RawRangeTree::with_capacity(lb, rb, capacity),
        }
    }

    /// Returns the number of tree nodes the arena can hold without
    /// reallocating.
    ///
    /// # Examples
    ///
    /// ```
    /// use cpdsa::OrderedSet;
    ///
    /// let set: OrderedSet<i32> = OrderedSet::with_node_capacity(0, 1024, 64);
    /// assert!(set.node_capacity() >= 64);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn node_capacity(&self) -> usize {
        self.tree.node_capacity()
    }

    /// Returns the number of materialized tree nodes.
    ///
    /// Removals leave nodes in place, so this only ever grows until
    /// [`clear`](OrderedSet::clear) resets it; it is a direct measure of the
    /// structure's memory footprint.
    ///
    /// # Examples
    ///
    /// ```
    /// use cpdsa::OrderedSet;
    ///
    /// let mut set = OrderedSet::new(0i32, 1024);
    /// let baseline = set.node_count();
    ///
    /// set.insert(5);
    /// assert!(set.node_count() > baseline);
    ///
    /// let populated = set.node_count();
    /// set.remove(5);
    /// assert_eq!(set.node_count(), populated);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.tree.node_count()
    }
}
