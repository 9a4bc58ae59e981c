use core::cmp::{max, min};

use num_traits::Zero;

use super::arena::Arena;
use super::handle::Handle;
use super::node::RangeNode;
use crate::discrete::Discrete;

/// How a single value's multiplicity changes during an update descent.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Delta {
    /// Add one occurrence.
    InsertOne,
    /// Remove one occurrence, if any.
    RemoveOne,
    /// Remove every occurrence.
    RemoveAll,
}

/// The core range tree backing `OrderedSet`.
///
/// An implicit binary tree over the closed range `[lb, rb]`: the root covers
/// the whole range, each internal node covers `[l, r]` and splits it at
/// `mid = l + (r - l) / 2` into `[l, mid]` / `[mid + 1, r]`, and leaves
/// (`l == r`) represent single domain values. Only nodes on some insert path
/// are ever materialized; absent children read as empty sub-trees with
/// sentinel bounds. `rb` is excluded from insertion, so its leaf stays empty
/// and the value is free to act as the "no such element" sentinel.
///
/// Nodes live in a contiguous arena and are never freed individually; a
/// `clear` drops the arena wholesale and re-roots the tree.
#[derive(Clone)]
pub(crate) struct RawRangeTree<K: Discrete> {
    /// Arena storing all tree nodes.
    nodes: Arena<RangeNode<K>>,
    /// Handle to the root node, which always exists.
    root: Handle,
    /// Inclusive lower bound of the domain.
    lb: K,
    /// Exclusive upper bound of the domain, doubling as the sentinel.
    rb: K,
}

impl<K: Discrete> RawRangeTree<K> {
    /// Creates a new, empty tree over `[lb, rb)`.
    pub(crate) fn new(lb: K, rb: K) -> Self {
        debug_assert!(lb < rb);
        let mut nodes = Arena::new();
        let root = nodes.alloc(RangeNode::vacant(lb, rb));
        Self { nodes, root, lb, rb }
    }

    /// Creates a new, empty tree with room for `capacity` nodes.
    pub(crate) fn with_capacity(lb: K, rb: K, capacity: usize) -> Self {
        debug_assert!(lb < rb);
        let mut nodes = Arena::with_capacity(max(capacity, 1));
        let root = nodes.alloc(RangeNode::vacant(lb, rb));
        Self { nodes, root, lb, rb }
    }

    /// Returns the number of stored elements, with multiplicity.
    pub(crate) fn len(&self) -> usize {
        self.nodes.get(self.root).count
    }

    /// Returns the number of materialized nodes the arena can hold without
    /// reallocating.
    pub(crate) fn node_capacity(&self) -> usize {
        self.nodes.capacity()
    }

    /// Returns the number of materialized nodes.
    pub(crate) fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the inclusive lower domain bound.
    pub(crate) fn lb(&self) -> K {
        self.lb
    }

    /// Returns the exclusive upper domain bound / sentinel.
    pub(crate) fn rb(&self) -> K {
        self.rb
    }

    /// Returns the smallest stored value, if any. O(1) from the root.
    pub(crate) fn first(&self) -> Option<K> {
        let root = self.nodes.get(self.root);
        (root.count > 0).then_some(root.lowest)
    }

    /// Returns the largest stored value, if any. O(1) from the root.
    pub(crate) fn last(&self) -> Option<K> {
        let root = self.nodes.get(self.root);
        (root.count > 0).then_some(root.highest)
    }

    /// Discards every node and re-roots the tree.
    pub(crate) fn clear(&mut self) {
        let (lb, rb) = (self.lb, self.rb);
        self.nodes.clear();
        self.root = self.nodes.alloc(RangeNode::vacant(lb, rb));
    }

    /// Applies `delta` to `value`'s multiplicity.
    ///
    /// `value` must lie in `[lb, rb)`; the public layer enforces this for
    /// insertion and filters out-of-domain removals (which are no-ops).
    pub(crate) fn apply(&mut self, value: K, delta: Delta) {
        debug_assert!(self.lb <= value && value < self.rb);
        self.update(self.root, self.lb, self.rb, value, delta);
    }

    /// Returns the number of stored elements in the closed range `[u, v]`.
    pub(crate) fn count_in(&self, u: K, v: K) -> usize {
        self.count_rec(Some(self.root), self.lb, self.rb, u, v)
    }

    /// Returns the sum of stored elements in the closed range `[u, v]`.
    pub(crate) fn sum_in(&self, u: K, v: K) -> K::Sum {
        self.sum_rec(Some(self.root), self.lb, self.rb, u, v)
    }

    /// Returns the k-th smallest stored element (1-indexed).
    ///
    /// The caller must ensure `1 <= k <= len()`.
    pub(crate) fn kth(&self, k: usize) -> K {
        debug_assert!(k >= 1 && k <= self.len());
        self.kth_rec(Some(self.root), self.lb, self.rb, k)
    }

    /// Returns the smallest stored value `>= value`, or `rb` if none.
    pub(crate) fn lower_bound(&self, value: K) -> K {
        // No element can qualify once the root's maximum falls short; this
        // also keeps out-of-domain probes (`value > rb`) total.
        if self.nodes.get(self.root).highest < value {
            return self.rb;
        }
        self.lower_bound_rec(Some(self.root), self.lb, self.rb, value)
    }

    /// Returns the largest stored value `<= value`, or `rb` if none.
    pub(crate) fn upper_bound(&self, value: K) -> K {
        if self.nodes.get(self.root).lowest > value {
            return self.rb;
        }
        self.upper_bound_rec(Some(self.root), self.lb, self.rb, value)
    }

    /// Reads a child's aggregates, treating an absent child as an empty
    /// sub-tree carrying the sentinel bounds.
    fn child_or_vacant(&self, child: Option<Handle>) -> RangeNode<K> {
        match child {
            Some(handle) => *self.nodes.get(handle),
            None => RangeNode::vacant(self.lb, self.rb),
        }
    }

    fn update(&mut self, id: Handle, l: K, r: K, value: K, delta: Delta) {
        if l == r {
            let (lb, rb) = (self.lb, self.rb);
            let node = self.nodes.get_mut(id);
            match delta {
                Delta::InsertOne => node.count += 1,
                Delta::RemoveOne => {
                    if node.count == 0 {
                        return;
                    }
                    node.count -= 1;
                }
                Delta::RemoveAll => node.count = 0,
            }
            node.refresh_leaf(value, lb, rb);
            return;
        }

        let mid = K::midpoint(l, r);
        let (slot, child_l, child_r) = if value <= mid {
            (self.nodes.get(id).left, l, mid)
        } else {
            (self.nodes.get(id).right, mid.successor(), r)
        };
        let child = match slot {
            Some(child) => child,
            // Removal never materializes nodes: an absent sub-tree holds
            // nothing to remove.
            None if delta != Delta::InsertOne => return,
            None => {
                let child = self.nodes.alloc(RangeNode::vacant(self.lb, self.rb));
                let node = self.nodes.get_mut(id);
                if value <= mid {
                    node.left = Some(child);
                } else {
                    node.right = Some(child);
                }
                child
            }
        };
        self.update(child, child_l, child_r, value, delta);

        // Pull the child aggregates back up the descent path.
        let (left, right) = {
            let node = self.nodes.get(id);
            (self.child_or_vacant(node.left), self.child_or_vacant(node.right))
        };
        let node = self.nodes.get_mut(id);
        node.count = left.count + right.count;
        node.sum = left.sum + right.sum;
        node.lowest = min(left.lowest, right.lowest);
        node.highest = max(left.highest, right.highest);
    }

    fn count_rec(&self, id: Option<Handle>, l: K, r: K, u: K, v: K) -> usize {
        let Some(id) = id else { return 0 };
        let node = self.nodes.get(id);
        // Pruning decisions rest on the stored extrema, not the static
        // sub-range bounds, so sparse sub-trees are skipped wholesale.
        if node.highest < u || v < node.lowest {
            return 0;
        }
        if u <= node.lowest && node.highest <= v {
            return node.count;
        }
        let mid = K::midpoint(l, r);
        self.count_rec(node.left, l, mid, u, v) + self.count_rec(node.right, mid.successor(), r, u, v)
    }

    fn sum_rec(&self, id: Option<Handle>, l: K, r: K, u: K, v: K) -> K::Sum {
        let Some(id) = id else { return K::Sum::zero() };
        let node = self.nodes.get(id);
        if node.highest < u || v < node.lowest {
            return K::Sum::zero();
        }
        if u <= node.lowest && node.highest <= v {
            return node.sum;
        }
        let mid = K::midpoint(l, r);
        self.sum_rec(node.left, l, mid, u, v) + self.sum_rec(node.right, mid.successor(), r, u, v)
    }

    fn kth_rec(&self, id: Option<Handle>, l: K, r: K, k: usize) -> K {
        let Some(id) = id else { return self.rb };
        let node = self.nodes.get(id);
        if l == r {
            return if node.count > 0 { node.lowest } else { self.rb };
        }
        let mid = K::midpoint(l, r);
        let on_left = self.child_or_vacant(node.left).count;
        if on_left >= k {
            self.kth_rec(node.left, l, mid, k)
        } else {
            self.kth_rec(node.right, mid.successor(), r, k - on_left)
        }
    }

    fn lower_bound_rec(&self, id: Option<Handle>, l: K, r: K, value: K) -> K {
        let Some(id) = id else { return self.rb };
        let node = self.nodes.get(id);
        if l == r {
            return if node.count > 0 { node.lowest } else { self.rb };
        }
        let mid = K::midpoint(l, r);
        // Any qualifying value in the left half beats every value in the
        // right half, so the left child wins whenever it holds a qualifying
        // element. The `count` check matters: an emptied child reports the
        // sentinel `highest = lb`, which must not be mistaken for a match.
        let left = self.child_or_vacant(node.left);
        if left.count > 0 && left.highest >= value {
            self.lower_bound_rec(node.left, l, mid, value)
        } else {
            self.lower_bound_rec(node.right, mid.successor(), r, value)
        }
    }

    fn upper_bound_rec(&self, id: Option<Handle>, l: K, r: K, value: K) -> K {
        let Some(id) = id else { return self.rb };
        let node = self.nodes.get(id);
        if l == r {
            return if node.count > 0 { node.lowest } else { self.rb };
        }
        let mid = K::midpoint(l, r);
        let right = self.child_or_vacant(node.right);
        if right.count > 0 && right.lowest <= value {
            self.upper_bound_rec(node.right, mid.successor(), r, value)
        } else {
            self.upper_bound_rec(node.left, l, mid, value)
        }
    }
}
