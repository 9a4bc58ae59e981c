use super::OrderedSet;
use crate::discrete::Discrete;

impl<K: Discrete> OrderedSet<K> {
    /// Returns the sum of all stored elements with value in the closed range
    /// `[l, r]`, each occurrence contributing once. An inverted range
    /// (`l > r`) sums to zero.
    ///
    /// This is an extension: the tree keeps per-range sums consistent on
    /// every update, and this surfaces them. Sums accumulate in
    /// [`Discrete::Sum`], which for the built-in key types is strictly wider
    /// than the key.
    ///
    /// # Examples
    ///
    /// ```
    /// use cpdsa::OrderedSet;
    ///
    /// let mut set = OrderedSet::new(0i32, 100);
    /// set.extend([3, 3, 5, 8]);
    ///
    /// assert_eq!(set.sum_range(3, 5), 11i64);
    /// assert_eq!(set.sum_range(4, 4), 0);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log(rb - lb))
    #[must_use]
    pub fn sum_range(&self, l: K, r: K) -> K::Sum {
        self.tree.sum_in(l, r)
    }

    /// Returns the sum of every stored element.
    ///
    /// # Examples
    ///
    /// ```
    /// use cpdsa::OrderedSet;
    ///
    /// let mut set = OrderedSet::new(0i32, 100);
    /// set.extend([3, 3, 5]);
    ///
    /// assert_eq!(set.total_sum(), 11i64);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1) - the whole domain is contained at the root.
    #[must_use]
    pub fn total_sum(&self) -> K::Sum {
        let domain = self.domain();
        self.tree.sum_in(domain.start, domain.end)
    }
}
