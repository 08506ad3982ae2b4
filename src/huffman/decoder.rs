use super::{HuffmanTree, NodeKind, Symbol};
use crate::error::Error;
use crate::Result;

/// Walks the tree from the root for every codeword in `bits` and collects
/// the symbols of the leaves reached.
pub fn decode<S: Symbol>(tree: &HuffmanTree<S>, bits: &str) -> Result<Vec<S>> {
    let root_index = tree.root_index();
    let mut decoded = Vec::new();
    let mut current_index = root_index;
    let mut codeword_start = 0;
    for (position, bit) in bits.chars().enumerate() {
        let node = tree
            .node(current_index)
            .ok_or(Error::InsufficientNodes(tree.len()))?;
        let next_index = match (bit, node.kind()) {
            (_, NodeKind::Leaf { .. }) => {
                return Err(Error::InsufficientNodes(tree.leaves().count()))
            }
            ('0', &NodeKind::Inner { left, .. }) => left,
            ('1', &NodeKind::Inner { right, .. }) => right,
            (other, _) => return Err(Error::InvalidBit(other, position)),
        };
        match tree.node(next_index).map(|node| node.kind()) {
            Some(NodeKind::Leaf { symbol }) => {
                decoded.push(symbol.clone());
                current_index = root_index;
                codeword_start = position + 1;
            }
            _ => current_index = next_index,
        }
    }
    if current_index != root_index {
        return Err(Error::IncompleteCodeword(codeword_start));
    }
    Ok(decoded)
}
