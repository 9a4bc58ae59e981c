use super::OrderedSet;
use crate::discrete::Discrete;

impl<K: Discrete> OrderedSet<K> {
    /// Returns the number of stored elements less than or equal to `value`,
    /// counting duplicates.
    ///
    /// This is the rank of `value`: if `value` is present, it equals the
    /// 1-indexed position of its last occurrence in sorted order. Note the
    /// *inclusive* boundary - this deliberately differs from the
    /// strictly-less-than convention some libraries use.
    ///
    /// # Examples
    ///
    /// ```
    /// use cpdsa::OrderedSet;
    ///
    /// let mut set = OrderedSet::new(0i32, 100);
    /// set.extend([5, 3, 8, 3]);
    ///
    /// assert_eq!(set.order_of_key(3), 2);
    /// assert_eq!(set.order_of_key(4), 2);
    /// assert_eq!(set.order_of_key(8), 4);
    /// assert_eq!(set.order_of_key(2), 0);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log(rb - lb))
    #[must_use]
    pub fn order_of_key(&self, value: K) -> usize {
        self.count_range(self.domain().start, value)
    }

    /// Returns the k-th smallest element (1-indexed, counting duplicates),
    /// or the [`sentinel`](OrderedSet::sentinel) if fewer than `k` elements
    /// are stored.
    ///
    /// # Panics
    ///
    /// Panics if `k == 0`; ranks are 1-indexed.
    ///
    /// # Examples
    ///
    /// ```
    /// use cpdsa::OrderedSet;
    ///
    /// let mut set = OrderedSet::new(0i32, 100);
    /// set.extend([5, 3, 8, 3]);
    ///
    /// assert_eq!(set.find_by_order(1), 3);
    /// assert_eq!(set.find_by_order(2), 3);
    /// assert_eq!(set.find_by_order(3), 5);
    /// assert_eq!(set.find_by_order(4), 8);
    /// assert_eq!(set.find_by_order(5), 100); // sentinel
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log(rb - lb))
    #[must_use]
    pub fn find_by_order(&self, k: usize) -> K {
        assert!(k >= 1, "`OrderedSet::find_by_order()` - ranks are 1-indexed (`k` must be >= 1)!");
        if k > self.len() {
            return self.sentinel();
        }
        self.tree.kth(k)
    }

    /// Returns the smallest stored value greater than or equal to `value`,
    /// or the [`sentinel`](OrderedSet::sentinel) if no such element exists.
    ///
    /// # Examples
    ///
    /// ```
    /// use cpdsa::OrderedSet;
    ///
    /// let mut set = OrderedSet::new(0i32, 100);
    /// set.extend([3, 5, 8]);
    ///
    /// assert_eq!(set.lower_bound(4), 5);
    /// assert_eq!(set.lower_bound(5), 5);
    /// assert_eq!(set.lower_bound(9), 100); // sentinel
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log(rb - lb))
    #[must_use]
    pub fn lower_bound(&self, value: K) -> K {
        self.tree.lower_bound(value)
    }

    /// Returns the largest stored value less than or equal to `value`, or
    /// the [`sentinel`](OrderedSet::sentinel) if no such element exists.
    ///
    /// Note the "at most" semantics: unlike the strict-successor
    /// `upper_bound` of some libraries, this is the mirror image of
    /// [`lower_bound`](OrderedSet::lower_bound). A caller wanting the
    /// largest value strictly below `value` can query `value - 1`.
    ///
    /// # Examples
    ///
    /// ```
    /// use cpdsa::OrderedSet;
    ///
    /// let mut set = OrderedSet::new(0i32, 100);
    /// set.extend([3, 5, 8]);
    ///
    /// assert_eq!(set.upper_bound(4), 3);
    /// assert_eq!(set.upper_bound(5), 5);
    /// assert_eq!(set.upper_bound(2), 100); // sentinel
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log(rb - lb))
    #[must_use]
    pub fn upper_bound(&self, value: K) -> K {
        self.tree.upper_bound(value)
    }
}
