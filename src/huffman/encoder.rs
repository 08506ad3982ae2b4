use std::collections::HashMap;

use super::{HuffmanTree, Symbol};
use crate::error::Error;
use crate::Result;

/// Concatenates the codeword of every symbol in `input`.
///
/// The tree must have its prefixes assigned. A symbol without a leaf in the
/// tree fails the whole call, nothing is emitted for the symbols before it.
pub fn encode<S, I>(tree: &HuffmanTree<S>, input: I) -> Result<String>
where
    S: Symbol,
    I: IntoIterator<Item = S>,
{
    let codewords = codeword_lookup_table(tree)?;
    let mut encoded = String::new();
    for symbol in input {
        let codeword = codewords
            .get(&symbol)
            .ok_or_else(|| Error::UnknownSymbol(format!("{:?}", symbol)))?;
        encoded.push_str(codeword);
    }
    Ok(encoded)
}

fn codeword_lookup_table<S: Symbol>(tree: &HuffmanTree<S>) -> Result<HashMap<&S, &str>> {
    tree.leaves()
        .map(|leaf| match leaf.symbol() {
            Some(symbol) if !leaf.prefix().is_empty() => Ok((symbol, leaf.prefix())),
            _ => Err(Error::UnlabelledTree),
        })
        .collect()
}
