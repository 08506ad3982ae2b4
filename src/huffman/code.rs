use super::observer::{NoopObserver, TreeObserver};
use super::{
    assign_prefixes_observed, build_tree_observed, build_worklist, count_frequencies, decode,
    encode, HuffmanTree, Node, Symbol,
};
use crate::Result;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CodeTableEntry<S> {
    pub symbol: S,
    pub frequency: usize,
    pub codeword: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CodeStatistics {
    pub symbol_count: usize,
    pub distinct_symbols: usize,
    pub encoded_bits: usize,
}

impl CodeStatistics {
    pub fn average_bits_per_symbol(&self) -> f64 {
        if self.symbol_count == 0 {
            return 0.0;
        }
        self.encoded_bits as f64 / self.symbol_count as f64
    }
}

/// A labelled Huffman tree built from the frequencies of one input.
pub struct HuffmanCode<S> {
    tree: HuffmanTree<S>,
}

impl<S: Symbol> HuffmanCode<S> {
    pub fn from_symbols<I>(input: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
    {
        Self::from_symbols_observed(input, &mut NoopObserver)
    }

    /// Counts, queues, merges and labels in one go. The observer sees the
    /// merge steps and every assigned prefix.
    pub fn from_symbols_observed<I, O>(input: I, observer: &mut O) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        O: TreeObserver<S> + ?Sized,
    {
        let frequencies = count_frequencies(input)?;
        let worklist = build_worklist(&frequencies)?;
        let mut tree = build_tree_observed(worklist, observer)?;
        let root_index = tree.root_index();
        assign_prefixes_observed(&mut tree, root_index, observer);
        Ok(Self { tree })
    }

    pub fn tree(&self) -> &HuffmanTree<S> {
        &self.tree
    }

    pub fn encode<I>(&self, input: I) -> Result<String>
    where
        I: IntoIterator<Item = S>,
    {
        encode(&self.tree, input)
    }

    pub fn decode(&self, bits: &str) -> Result<Vec<S>> {
        decode(&self.tree, bits)
    }

    pub fn code_table(&self) -> Vec<CodeTableEntry<S>> {
        self.tree.code_table()
    }

    /// Sizes of the input the code was built from and of its encoding.
    pub fn statistics(&self) -> CodeStatistics {
        CodeStatistics {
            symbol_count: self.tree.root().map_or(0, Node::frequency),
            distinct_symbols: self.tree.leaves().count(),
            encoded_bits: self
                .tree
                .leaves()
                .map(|leaf| leaf.frequency() * leaf.prefix().len())
                .sum(),
        }
    }
}
