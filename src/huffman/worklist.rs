use std::cmp::Ordering;
use std::collections::VecDeque;

use super::{FrequencyMap, Node, Symbol};
use crate::error::Error;
use crate::Result;

/// Nodes waiting to be merged, lowest frequency first.
#[derive(Debug)]
pub struct Worklist<S> {
    nodes: VecDeque<Node<S>>,
}

impl<S> Worklist<S> {
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Node<S>> {
        self.nodes.iter()
    }

    pub(super) fn pop_lowest(&mut self) -> Option<Node<S>> {
        self.nodes.pop_front()
    }

    // a merged node queues up behind every entry of equal frequency
    pub(super) fn insert_sorted(&mut self, node: Node<S>) {
        let position = self
            .nodes
            .partition_point(|queued| queued.frequency() <= node.frequency());
        self.nodes.insert(position, node);
    }
}

/// Creates one leaf per symbol, sorted ascending by frequency.
///
/// Leaves of equal frequency are ordered by their symbol, so the same
/// frequencies always yield the same worklist regardless of the map's
/// iteration order.
pub fn build_worklist<S: Symbol>(frequencies: &FrequencyMap<S>) -> Result<Worklist<S>> {
    if frequencies.is_empty() {
        return Err(Error::EmptyWorklist);
    }
    let mut leaves: Vec<Node<S>> = frequencies
        .iter()
        .map(|(symbol, &frequency)| Node::leaf(symbol.clone(), frequency))
        .collect();
    leaves.sort_by(compare_leaves);
    Ok(Worklist {
        nodes: leaves.into(),
    })
}

fn compare_leaves<S: Ord>(a: &Node<S>, b: &Node<S>) -> Ordering {
    a.frequency()
        .cmp(&b.frequency())
        .then_with(|| a.symbol().cmp(&b.symbol()))
}
