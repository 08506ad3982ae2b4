//! Huffman prefix code construction.
//!
//! The stages run in this order, each one pure and owning its data:
//!
//! 1. [`count_frequencies`] counts every distinct symbol of the input.
//! 2. [`build_worklist`] turns the counts into leaves sorted ascending by
//!    frequency, ties broken by the symbol's own ordering.
//! 3. [`build_tree`] merges the two lowest entries until only the root is
//!    left. Nodes live in an append-only arena and refer to their children
//!    by index.
//! 4. [`assign_prefixes`] labels every node with its path from the root,
//!    `0` for left and `1` for right.
//! 5. [`encode`] and [`decode`] translate between symbols and bit strings.
//!
//! [`HuffmanCode`] runs steps 1 to 4 in one go.

use std::fmt::Debug;
use std::hash::Hash;

mod code;
mod decoder;
mod display;
mod encoder;
mod frequency;
mod observer;
mod prefix;
mod tree;
mod worklist;

pub use code::{CodeStatistics, CodeTableEntry, HuffmanCode};
pub use decoder::decode;
pub use encoder::encode;
pub use frequency::{count_frequencies, FrequencyMap};
pub use observer::{LoggingObserver, NoopObserver, TreeObserver};
pub use prefix::{assign_prefixes, assign_prefixes_observed};
pub use tree::{build_tree, build_tree_observed, HuffmanTree, Node, NodeKind};
pub use worklist::{build_worklist, Worklist};

/// Anything that can be counted, ordered for tie-breaking and printed.
pub trait Symbol: Clone + Eq + Hash + Ord + Debug {}

impl<T> Symbol for T where T: Clone + Eq + Hash + Ord + Debug {}
