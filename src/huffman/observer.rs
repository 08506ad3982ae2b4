use super::{HuffmanTree, Node, Symbol};

/// Receives the intermediate steps of tree construction and prefix
/// assignment. Every method defaults to doing nothing.
pub trait TreeObserver<S> {
    /// `merged` is the new inner node, its children already sit in `tree`.
    fn merged(&mut self, _tree: &HuffmanTree<S>, _merged: &Node<S>) {}

    fn root_added(&mut self, _tree: &HuffmanTree<S>, _root_index: usize) {}

    fn prefix_assigned(&mut self, _tree: &HuffmanTree<S>, _index: usize) {}
}

pub struct NoopObserver;

impl<S> TreeObserver<S> for NoopObserver {}

/// Reports every step as a `debug` log record.
pub struct LoggingObserver;

impl<S: Symbol> TreeObserver<S> for LoggingObserver {
    fn merged(&mut self, _tree: &HuffmanTree<S>, merged: &Node<S>) {
        if let (Some(left), Some(right)) = (merged.left(), merged.right()) {
            log::debug!(
                "Added internal node with frequency {}, left index {}, right index {}",
                merged.frequency(),
                left,
                right
            );
        }
    }

    fn root_added(&mut self, tree: &HuffmanTree<S>, root_index: usize) {
        if let Some(root) = tree.node(root_index) {
            log::debug!(
                "Added root node with frequency {} at index {}",
                root.frequency(),
                root_index
            );
        }
    }

    fn prefix_assigned(&mut self, tree: &HuffmanTree<S>, index: usize) {
        if let Some(node) = tree.node(index) {
            if let Some(symbol) = node.symbol() {
                log::debug!(
                    "Assigned prefix {} to {:?} with frequency {}",
                    node.prefix(),
                    symbol,
                    node.frequency()
                );
            }
        }
    }
}
