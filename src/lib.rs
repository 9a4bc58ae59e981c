//! Order-statistic containers for discrete domains.
//!
//! This crate provides two containers that maintain order statistics over a
//! multiset under online insertion and removal:
//!
//! - [`OrderedSet`] - a multiset over a caller-chosen discrete domain
//!   `[lb, rb)`, backed by a lazily-materialized range tree. Rank queries
//!   ([`order_of_key`](OrderedSet::order_of_key)), selection
//!   ([`find_by_order`](OrderedSet::find_by_order)), neighbor queries
//!   ([`lower_bound`](OrderedSet::lower_bound),
//!   [`upper_bound`](OrderedSet::upper_bound)) and range counts all run in
//!   `O(log(rb - lb))`.
//! - [`MedianHeap`] - a two-heap structure over an unbounded domain that
//!   keeps the running median one comparison away at all times.
//!
//! # Example
//!
//! ```
//! use cpdsa::{MedianHeap, OrderedSet};
//!
//! let mut set = OrderedSet::new(0i64, 100);
//! for v in [5, 3, 8, 3] {
//!     set.insert(v);
//! }
//!
//! // Two elements are <= 3, and the third smallest overall is 5.
//! assert_eq!(set.order_of_key(3), 2);
//! assert_eq!(set.find_by_order(3), 5);
//!
//! // The domain's upper bound doubles as the "no such element" sentinel.
//! assert_eq!(set.find_by_order(5), set.sentinel());
//!
//! let heap: MedianHeap<i64> = [5, 1, 9, 3].into_iter().collect();
//! assert_eq!(*heap.discrete_median(), 3);
//! assert_eq!(heap.median(), 4.0);
//! ```
//!
//! # Choosing a domain
//!
//! An [`OrderedSet`]'s domain is fixed at construction. `rb` is reserved as
//! the sentinel returned by rank and neighbor queries when no element
//! qualifies, so `rb` itself can never be inserted. Operations cost
//! `O(log(rb - lb))`, not `O(log n)`, so pick the tightest domain the data
//! allows.
//!
//! # Implementation
//!
//! The range tree is an implicit binary tree over `[lb, rb]`: leaves
//! correspond to single domain values, internal nodes to sub-ranges. Nodes
//! are created on first touch, held in a contiguous arena, and are never
//! individually freed; only [`clear`](OrderedSet::clear) releases them. Each
//! node carries its sub-range's element count, value sum, and min/max, so
//! every query is a single root-to-leaf descent.

#![no_std]
// These forbid rules and lint groups are meant to be very restrictive.
#![forbid(unsafe_code)]
#![forbid(keyword_idents)]
#![forbid(non_ascii_idents)]
#![forbid(unreachable_pub)]
#![warn(clippy::all)]
#![warn(clippy::cargo)]
#![warn(clippy::pedantic)]
// Enable coverage attributes for nightly builds.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

extern crate alloc;

mod discrete;
mod raw;

pub mod median_heap;
pub mod ordered_set;

pub use discrete::Discrete;
pub use median_heap::MedianHeap;
pub use ordered_set::OrderedSet;
