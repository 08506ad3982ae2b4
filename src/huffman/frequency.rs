use std::collections::HashMap;

use super::Symbol;
use crate::error::Error;
use crate::Result;

pub type FrequencyMap<S> = HashMap<S, usize>;

/// Counts how often each distinct symbol occurs in `input`.
pub fn count_frequencies<S, I>(input: I) -> Result<FrequencyMap<S>>
where
    S: Symbol,
    I: IntoIterator<Item = S>,
{
    let mut frequencies = FrequencyMap::new();
    for symbol in input {
        *frequencies.entry(symbol).or_insert(0) += 1;
    }
    if frequencies.is_empty() {
        return Err(Error::EmptyInput);
    }
    Ok(frequencies)
}
