//! # Token Frequency Counting

use crate::{table::OrderedTable, types::WTHashMap};

/// Counts tokens while remembering the order they were first seen.
///
/// This produces the ordered ``(token, frequency)`` input
/// [`crate::vocab::VocabOptions::build`] expects.
#[derive(Debug, Clone, Default)]
pub struct FrequencyCounter {
    seen: OrderedTable,
    counts: Vec<usize>,
}

impl FrequencyCounter {
    /// Create an empty counter.
    pub fn new() -> Self {
        Self::default()
    }

    /// The number of distinct tokens.
    pub fn len(&self) -> usize {
        self.seen.len()
    }

    /// Has nothing been counted?
    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }

    /// The count for `token`.
    pub fn count(
        &self,
        token: &str,
    ) -> usize {
        self.seen
            .index_of(token)
            .map(|index| self.counts[index])
            .unwrap_or(0)
    }

    /// Count one occurrence of `token`.
    pub fn add<S: AsRef<str>>(
        &mut self,
        token: S,
    ) {
        self.add_count(token, 1);
    }

    /// Count `n` occurrences of `token`.
    pub fn add_count<S: AsRef<str>>(
        &mut self,
        token: S,
        n: usize,
    ) {
        let token = token.as_ref();
        match self.seen.index_of(token) {
            Some(index) => self.counts[index] += n,
            None => {
                self.seen.push(token);
                self.counts.push(n);
            }
        }
    }

    /// Count every token in `tokens`.
    pub fn update<I, S>(
        &mut self,
        tokens: I,
    ) where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for token in tokens {
            self.add(token);
        }
    }

    /// The counts, as a map.
    pub fn to_map(&self) -> WTHashMap<String, usize> {
        self.seen
            .iter()
            .map(|(index, token)| (token.to_string(), self.counts[index]))
            .collect()
    }

    /// ``(token, count)`` pairs in first-seen order.
    pub fn into_ordered_by_first_seen(self) -> Vec<(String, usize)> {
        self.seen.into_tokens().into_iter().zip(self.counts).collect()
    }

    /// ``(token, count)`` pairs by descending count; ties keep first-seen order.
    pub fn into_ordered_by_frequency(self) -> Vec<(String, usize)> {
        let mut pairs = self.into_ordered_by_first_seen();
        pairs.sort_by(|a, b| b.1.cmp(&a.1));
        pairs
    }
}

impl<S: AsRef<str>> FromIterator<S> for FrequencyCounter {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut counter = Self::new();
        counter.update(iter);
        counter
    }
}
