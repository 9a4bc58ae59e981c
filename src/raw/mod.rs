mod arena;
mod handle;
mod node;
mod range_tree;

pub(crate) use range_tree::{Delta, RawRangeTree};
