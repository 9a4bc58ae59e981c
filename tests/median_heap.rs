use cpdsa::MedianHeap;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

/// The number of operations to perform in each proptest case.
const TEST_SIZE: usize = 4_000;

fn value_strategy() -> impl Strategy<Value = i64> {
    -20_000i64..20_000i64
}

// ─── Reference oracle ────────────────────────────────────────────────────────

/// A sorted `Vec` mirroring what the heap should hold.
#[derive(Default)]
struct Oracle {
    sorted: Vec<i64>,
}

impl Oracle {
    fn push(&mut self, value: i64) {
        let at = self.sorted.partition_point(|&x| x < value);
        self.sorted.insert(at, value);
    }

    /// The element at 1-indexed position `ceil(n / 2)` of the sorted
    /// contents.
    fn discrete_median(&self) -> i64 {
        self.sorted[self.sorted.len().div_ceil(2) - 1]
    }

    /// The mean of the two middle elements for even sizes, the single middle
    /// element otherwise.
    #[allow(clippy::cast_precision_loss)]
    fn median(&self) -> f64 {
        let n = self.sorted.len();
        if n % 2 == 0 {
            (self.sorted[n / 2 - 1] as f64 + self.sorted[n / 2] as f64) / 2.0
        } else {
            self.sorted[n / 2] as f64
        }
    }

    /// Removes the discrete median, mirroring `MedianHeap::pop`.
    fn pop(&mut self) -> i64 {
        self.sorted.remove(self.sorted.len().div_ceil(2) - 1)
    }

    fn len(&self) -> usize {
        self.sorted.len()
    }
}

// ─── Randomized oracle comparison ────────────────────────────────────────────

#[derive(Debug, Clone)]
enum HeapOp {
    Push(i64),
    Pop,
}

fn heap_op_strategy() -> impl Strategy<Value = HeapOp> {
    prop_oneof![
        3 => value_strategy().prop_map(HeapOp::Push),
        2 => Just(HeapOp::Pop),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]

    /// After every push, both medians must match the sorted oracle.
    #[test]
    fn medians_match_oracle_under_pushes(values in proptest::collection::vec(value_strategy(), 1..TEST_SIZE)) {
        let mut heap = MedianHeap::new();
        let mut oracle = Oracle::default();

        for &v in &values {
            heap.push(v);
            oracle.push(v);

            prop_assert_eq!(heap.len(), oracle.len());
            prop_assert_eq!(*heap.discrete_median(), oracle.discrete_median());
            prop_assert!((heap.median() - oracle.median()).abs() < f64::EPSILON, "median mismatch after push({})", v);
        }
    }

    /// Replays interleaved pushes and pops against the oracle. Pops on an
    /// empty heap are skipped (they are a contract violation, tested
    /// separately).
    #[test]
    fn medians_match_oracle_under_mixed_ops(ops in proptest::collection::vec(heap_op_strategy(), TEST_SIZE)) {
        let mut heap = MedianHeap::new();
        let mut oracle = Oracle::default();

        for op in &ops {
            match op {
                HeapOp::Push(v) => {
                    heap.push(*v);
                    oracle.push(*v);
                }
                HeapOp::Pop => {
                    if oracle.len() == 0 {
                        continue;
                    }
                    prop_assert_eq!(heap.pop(), oracle.pop(), "pop() mismatch");
                }
            }

            prop_assert_eq!(heap.len(), oracle.len(), "len mismatch after {:?}", op);
            prop_assert_eq!(heap.is_empty(), oracle.len() == 0);
            if oracle.len() > 0 {
                prop_assert_eq!(*heap.discrete_median(), oracle.discrete_median(), "discrete_median mismatch after {:?}", op);
            }
        }
    }

    /// Draining a heap by repeated pops yields a middle-out permutation whose
    /// multiset equals the pushed values.
    #[test]
    fn drain_recovers_the_multiset(values in proptest::collection::vec(value_strategy(), 1..TEST_SIZE / 4)) {
        let mut heap: MedianHeap<i64> = values.iter().copied().collect();

        let mut drained = Vec::with_capacity(values.len());
        while !heap.is_empty() {
            drained.push(heap.pop());
        }

        let mut expected = values.clone();
        expected.sort_unstable();
        drained.sort_unstable();
        prop_assert_eq!(&drained, &expected);
    }

    /// A cleared heap behaves like a freshly constructed one.
    #[test]
    fn clear_round_trip(values in proptest::collection::vec(value_strategy(), 1..TEST_SIZE / 4)) {
        let mut heap: MedianHeap<i64> = values.iter().copied().collect();
        heap.clear();

        prop_assert!(heap.is_empty());
        prop_assert_eq!(heap.len(), 0);

        heap.push(7);
        prop_assert_eq!(*heap.discrete_median(), 7);
        prop_assert_eq!(heap.median(), 7.0);
    }
}

// ─── Deterministic scenarios ─────────────────────────────────────────────────

#[test]
fn medians_on_small_sequence() {
    let mut heap = MedianHeap::new();
    for v in [5, 1, 9, 3] {
        heap.push(v);
    }

    // Sorted: 1 3 5 9.
    assert_eq!(*heap.discrete_median(), 3);
    assert_eq!(heap.median(), 4.0);

    heap.push(7);
    // Sorted: 1 3 5 7 9.
    assert_eq!(*heap.discrete_median(), 5);
    assert_eq!(heap.median(), 5.0);
}

#[test]
fn pop_removes_the_discrete_median() {
    let mut heap: MedianHeap<i64> = [1, 3, 5, 7, 9].into_iter().collect();

    assert_eq!(heap.pop(), 5);
    // Sorted: 1 3 7 9.
    assert_eq!(*heap.discrete_median(), 3);
    assert_eq!(heap.len(), 4);
}

#[test]
fn median_is_fractional_for_even_sizes() {
    let mut heap = MedianHeap::new();
    heap.push(1);
    heap.push(2);
    assert_eq!(heap.median(), 1.5);
}

#[test]
fn equal_elements_are_interchangeable() {
    let mut heap: MedianHeap<i64> = [6, 6, 6, 6].into_iter().collect();
    assert_eq!(*heap.discrete_median(), 6);
    assert_eq!(heap.median(), 6.0);
    assert_eq!(heap.pop(), 6);
    assert_eq!(heap.pop(), 6);
    assert_eq!(heap.len(), 2);
}

#[test]
fn works_with_non_copy_elements() {
    let mut heap: MedianHeap<String> = ["pear", "apple", "quince"].into_iter().map(String::from).collect();
    assert_eq!(heap.discrete_median(), "pear");
    assert_eq!(heap.pop(), "pear");
    assert_eq!(heap.discrete_median(), "apple");
}

// ─── Contract violations ─────────────────────────────────────────────────────

#[test]
#[should_panic(expected = "`MedianHeap::pop()` - the container is empty!")]
fn pop_on_empty_panics() {
    let mut heap: MedianHeap<i64> = MedianHeap::new();
    let _ = heap.pop();
}

#[test]
#[should_panic(expected = "`MedianHeap::discrete_median()` - the container is empty!")]
fn discrete_median_on_empty_panics() {
    let heap: MedianHeap<i64> = MedianHeap::new();
    let _ = heap.discrete_median();
}

#[test]
#[should_panic(expected = "`MedianHeap::median()` - the container is empty!")]
fn median_on_empty_panics() {
    let heap: MedianHeap<i64> = MedianHeap::new();
    let _ = heap.median();
}
