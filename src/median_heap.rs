use alloc::collections::BinaryHeap;
use core::cmp::Reverse;
use core::fmt;

use num_traits::ToPrimitive;

/// A container that maintains its median under online insertion and removal.
///
/// Elements are split between two heaps: `lower` (max-oriented) holds the
/// smaller half, `higher` (min-oriented) the larger half, with every element
/// of `lower` ordering at or below every element of `higher` and
/// `lower.len()` equal to `higher.len()` or one less. The discrete median -
/// for `n` elements, the one at 1-indexed position `ceil(n / 2)` in sorted
/// order - is therefore always sitting at the top of one of the two heaps:
/// `lower`'s when the halves are the same size, `higher`'s otherwise.
///
/// Unlike [`OrderedSet`](crate::OrderedSet), no domain is configured; any
/// totally ordered element type works. Ties between equal elements are
/// broken arbitrarily and must not be relied upon.
///
/// # Examples
///
/// ```
/// use cpdsa::MedianHeap;
///
/// let mut heap = MedianHeap::new();
/// for value in [5, 1, 9, 3] {
///     heap.push(value);
/// }
///
/// // Sorted: 1 3 5 9. The discrete median of an even-sized multiset is the
/// // lower of the two middle elements; `median` averages them.
/// assert_eq!(*heap.discrete_median(), 3);
/// assert_eq!(heap.median(), 4.0);
///
/// heap.push(7);
/// assert_eq!(*heap.discrete_median(), 5);
///
/// // `pop` removes exactly the element `discrete_median` reports.
/// assert_eq!(heap.pop(), 5);
/// assert_eq!(*heap.discrete_median(), 3);
/// ```
#[derive(Clone)]
pub struct MedianHeap<T: Ord> {
    /// The smaller half, largest element on top.
    lower: BinaryHeap<T>,
    /// The larger half, smallest element on top.
    higher: BinaryHeap<Reverse<T>>,
}

impl<T: Ord> MedianHeap<T> {
    /// Makes a new, empty `MedianHeap`.
    ///
    /// # Examples
    ///
    /// ```
    /// use cpdsa::MedianHeap;
    ///
    /// let mut heap = MedianHeap::new();
    /// heap.push(1);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn new() -> Self {
        MedianHeap {
            lower: BinaryHeap::new(),
            higher: BinaryHeap::new(),
        }
    }

    /// Returns the number of elements in the container.
    ///
    /// # Examples
    ///
    /// ```
    /// use cpdsa::MedianHeap;
    ///
    /// let heap: MedianHeap<i32> = [1, 2, 3].into_iter().collect();
    /// assert_eq!(heap.len(), 3);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn len(&self) -> usize {
        self.lower.len() + self.higher.len()
    }

    /// Returns `true` if the container holds no elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use cpdsa::MedianHeap;
    ///
    /// let mut heap = MedianHeap::new();
    /// assert!(heap.is_empty());
    /// heap.push(1);
    /// assert!(!heap.is_empty());
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Adds `value` to the container.
    ///
    /// # Examples
    ///
    /// ```
    /// use cpdsa::MedianHeap;
    ///
    /// let mut heap = MedianHeap::new();
    /// heap.push(2);
    /// heap.push(2);
    /// assert_eq!(heap.len(), 2);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn push(&mut self, value: T) {
        let goes_higher = match self.higher.peek() {
            Some(Reverse(top)) => value >= *top,
            None => true,
        };
        if goes_higher {
            self.higher.push(Reverse(value));
        } else {
            self.lower.push(value);
        }
        self.rebalance();
    }

    /// Removes and returns the discrete median - the same element
    /// [`discrete_median`](MedianHeap::discrete_median) reports.
    ///
    /// # Panics
    ///
    /// Panics if the container is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use cpdsa::MedianHeap;
    ///
    /// let mut heap: MedianHeap<i32> = [1, 3, 5, 7, 9].into_iter().collect();
    /// assert_eq!(heap.pop(), 5);
    /// assert_eq!(heap.pop(), 3);
    /// assert_eq!(heap.len(), 3);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn pop(&mut self) -> T {
        assert!(!self.is_empty(), "`MedianHeap::pop()` - the container is empty!");
        let value = if self.lower.len() == self.higher.len() {
            self.lower.pop().expect("`MedianHeap::pop()` - `lower` cannot be empty here!")
        } else {
            self.higher.pop().expect("`MedianHeap::pop()` - `higher` cannot be empty here!").0
        };
        self.rebalance();
        value
    }

    /// Returns a reference to the discrete median: with `n` elements, the
    /// one at 1-indexed position `ceil(n / 2)` in sorted order.
    ///
    /// # Panics
    ///
    /// Panics if the container is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use cpdsa::MedianHeap;
    ///
    /// let heap: MedianHeap<i32> = [1, 3, 5, 9].into_iter().collect();
    /// assert_eq!(*heap.discrete_median(), 3);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn discrete_median(&self) -> &T {
        assert!(!self.is_empty(), "`MedianHeap::discrete_median()` - the container is empty!");
        if self.lower.len() == self.higher.len() {
            self.lower.peek().expect("`MedianHeap::discrete_median()` - `lower` cannot be empty here!")
        } else {
            &self.higher.peek().expect("`MedianHeap::discrete_median()` - `higher` cannot be empty here!").0
        }
    }

    /// Returns the median of the container as a float: the arithmetic mean
    /// of the two middle elements when the size is even, the single middle
    /// element otherwise.
    ///
    /// # Panics
    ///
    /// Panics if the container is empty, or if an element cannot be
    /// represented as an `f64`.
    ///
    /// # Examples
    ///
    /// ```
    /// use cpdsa::MedianHeap;
    ///
    /// let mut heap: MedianHeap<i32> = [1, 3, 5, 9].into_iter().collect();
    /// assert_eq!(heap.median(), 4.0);
    /// heap.push(7);
    /// assert_eq!(heap.median(), 5.0);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn median(&self) -> f64
    where
        T: ToPrimitive,
    {
        assert!(!self.is_empty(), "`MedianHeap::median()` - the container is empty!");
        let as_f64 = |value: &T| value.to_f64().expect("`MedianHeap::median()` - element is not representable as `f64`!");
        let higher_top = self.higher.peek().map(|Reverse(top)| as_f64(top));
        match (self.lower.peek(), higher_top) {
            (Some(lower_top), Some(higher_top)) if self.lower.len() == self.higher.len() => {
                (as_f64(lower_top) + higher_top) / 2.0
            }
            (_, Some(higher_top)) => higher_top,
            // A non-empty container with an empty `higher` cannot exist: the
            // balance rule always tips the extra element into `higher`.
            (_, None) => unreachable!("`MedianHeap::median()` - `higher` cannot be empty here!"),
        }
    }

    /// Removes all elements from the container.
    ///
    /// # Examples
    ///
    /// ```
    /// use cpdsa::MedianHeap;
    ///
    /// let mut heap: MedianHeap<i32> = [1, 2].into_iter().collect();
    /// heap.clear();
    /// assert!(heap.is_empty());
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n)
    pub fn clear(&mut self) {
        self.lower.clear();
        self.higher.clear();
    }

    /// Restores the size invariant after a push or pop changed one heap's
    /// size by one: at most a single element crosses between the halves.
    fn rebalance(&mut self) {
        if self.higher.len() > self.lower.len() + 1 {
            let Reverse(value) = self.higher.pop().expect("`MedianHeap::rebalance()` - `higher` cannot be empty here!");
            self.lower.push(value);
        }
        if self.lower.len() > self.higher.len() {
            let value = self.lower.pop().expect("`MedianHeap::rebalance()` - `lower` cannot be empty here!");
            self.higher.push(Reverse(value));
        }
    }
}

impl<T: Ord> Default for MedianHeap<T> {
    fn default() -> Self {
        MedianHeap::new()
    }
}

impl<T: Ord + fmt::Debug> fmt::Debug for MedianHeap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MedianHeap").field("lower", &self.lower).field("higher", &self.higher).finish()
    }
}

impl<T: Ord> Extend<T> for MedianHeap<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<T: Ord> FromIterator<T> for MedianHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut heap = MedianHeap::new();
        heap.extend(iter);
        heap
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn halves_stay_balanced() {
        let mut heap = MedianHeap::new();
        for value in [5, 1, 9, 3, 7, 2, 8] {
            heap.push(value);
            let (lower, higher) = (heap.lower.len(), heap.higher.len());
            assert!(lower == higher || lower + 1 == higher, "sizes {lower}/{higher} violate the balance rule");
            if let (Some(max_of_lower), Some(Reverse(min_of_higher))) = (heap.lower.peek(), heap.higher.peek()) {
                assert!(max_of_lower <= min_of_higher);
            }
        }
    }

    #[test]
    fn duplicate_elements() {
        let mut heap = MedianHeap::new();
        for value in [4, 4, 4, 1, 9] {
            heap.push(value);
        }
        // Sorted: 1 4 4 4 9.
        assert_eq!(*heap.discrete_median(), 4);
        assert_eq!(heap.median(), 4.0);
        assert_eq!(heap.pop(), 4);
        assert_eq!(heap.median(), 4.0);
    }

    #[test]
    fn single_element() {
        let mut heap = MedianHeap::new();
        heap.push(42);
        assert_eq!(*heap.discrete_median(), 42);
        assert_eq!(heap.median(), 42.0);
        assert_eq!(heap.pop(), 42);
        assert!(heap.is_empty());
    }
}
