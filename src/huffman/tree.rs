use super::code::CodeTableEntry;
use super::observer::{NoopObserver, TreeObserver};
use super::{Symbol, Worklist};
use crate::error::Error;
use crate::Result;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NodeKind<S> {
    Leaf { symbol: S },
    Inner { left: usize, right: usize },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node<S> {
    frequency: usize,
    kind: NodeKind<S>,
    prefix: String,
}

impl<S> Node<S> {
    pub(crate) fn leaf(symbol: S, frequency: usize) -> Self {
        Self {
            frequency,
            kind: NodeKind::Leaf { symbol },
            prefix: String::new(),
        }
    }

    pub(crate) fn inner(frequency: usize, left: usize, right: usize) -> Self {
        Self {
            frequency,
            kind: NodeKind::Inner { left, right },
            prefix: String::new(),
        }
    }

    pub fn frequency(&self) -> usize {
        self.frequency
    }

    pub fn kind(&self) -> &NodeKind<S> {
        &self.kind
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.kind, NodeKind::Leaf { .. })
    }

    pub fn symbol(&self) -> Option<&S> {
        match &self.kind {
            NodeKind::Leaf { symbol } => Some(symbol),
            NodeKind::Inner { .. } => None,
        }
    }

    pub fn left(&self) -> Option<usize> {
        match self.kind {
            NodeKind::Inner { left, .. } => Some(left),
            NodeKind::Leaf { .. } => None,
        }
    }

    pub fn right(&self) -> Option<usize> {
        match self.kind {
            NodeKind::Inner { right, .. } => Some(right),
            NodeKind::Leaf { .. } => None,
        }
    }

    /// Path from the root: the codeword of a leaf, a shared prefix of the
    /// codewords below an inner node. Empty until prefixes are assigned.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub(crate) fn set_prefix(&mut self, prefix: String) {
        self.prefix = prefix;
    }
}

/// Arena of Huffman nodes. Children always sit at lower indices than their
/// parent and the root is the last node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HuffmanTree<S> {
    nodes: Vec<Node<S>>,
}

impl<S> HuffmanTree<S> {
    #[cfg(test)]
    pub(crate) fn from_nodes(nodes: Vec<Node<S>>) -> Self {
        Self { nodes }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Index of the root. A tree returned by [`build_tree`] is never empty.
    pub fn root_index(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }

    pub fn root(&self) -> Option<&Node<S>> {
        self.nodes.last()
    }

    pub fn node(&self, index: usize) -> Option<&Node<S>> {
        self.nodes.get(index)
    }

    pub fn nodes(&self) -> &[Node<S>] {
        &self.nodes
    }

    pub fn leaves(&self) -> impl Iterator<Item = &Node<S>> {
        self.nodes.iter().filter(|node| node.is_leaf())
    }

    pub(crate) fn node_mut(&mut self, index: usize) -> Option<&mut Node<S>> {
        self.nodes.get_mut(index)
    }

    fn push(&mut self, node: Node<S>) -> usize {
        self.nodes.push(node);
        self.nodes.len() - 1
    }
}

impl<S: Symbol> HuffmanTree<S> {
    pub fn codeword(&self, symbol: &S) -> Option<&str> {
        self.leaves()
            .find(|leaf| leaf.symbol() == Some(symbol))
            .map(Node::prefix)
    }

    /// One entry per leaf, sorted by symbol.
    pub fn code_table(&self) -> Vec<CodeTableEntry<S>> {
        let mut entries: Vec<CodeTableEntry<S>> = self
            .leaves()
            .filter_map(|leaf| {
                leaf.symbol().map(|symbol| CodeTableEntry {
                    symbol: symbol.clone(),
                    frequency: leaf.frequency(),
                    codeword: leaf.prefix().to_owned(),
                })
            })
            .collect();
        entries.sort_by(|a, b| a.symbol.cmp(&b.symbol));
        entries
    }
}

pub fn build_tree<S: Symbol>(worklist: Worklist<S>) -> Result<HuffmanTree<S>> {
    build_tree_observed(worklist, &mut NoopObserver)
}

/// Merges the two lowest worklist entries until a single root remains.
///
/// Both merged entries are appended to the arena, left before right, and
/// the new inner node goes back into the worklist at its sorted position.
/// The remaining entry is appended last and becomes the root.
pub fn build_tree_observed<S, O>(
    mut worklist: Worklist<S>,
    observer: &mut O,
) -> Result<HuffmanTree<S>>
where
    S: Symbol,
    O: TreeObserver<S> + ?Sized,
{
    if worklist.len() < 2 {
        return Err(Error::InsufficientNodes(worklist.len()));
    }
    let mut tree = HuffmanTree {
        nodes: Vec::with_capacity(2 * worklist.len() - 1),
    };
    while worklist.len() > 1 {
        let (Some(left), Some(right)) = (worklist.pop_lowest(), worklist.pop_lowest()) else {
            break;
        };
        let frequency = left.frequency() + right.frequency();
        let left_index = tree.push(left);
        let right_index = tree.push(right);
        let merged = Node::inner(frequency, left_index, right_index);
        observer.merged(&tree, &merged);
        worklist.insert_sorted(merged);
    }
    if let Some(root) = worklist.pop_lowest() {
        let root_index = tree.push(root);
        observer.root_added(&tree, root_index);
    }
    Ok(tree)
}
