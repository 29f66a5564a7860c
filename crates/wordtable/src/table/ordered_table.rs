//! # Ordered Bidirectional Table

use crate::{
    errors::{WTResult, WordtableError},
    types::{WTHashMap, hash_map_with_capacity},
};

/// Insertion-ordered ``{ String <-> usize }`` table.
///
/// Indices are dense over ``[0, len)``; `stoi` is always the exact inverse of `itos`.
///
/// ## Style Hints
/// Instance names should prefer `table`, or `token_table`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderedTable {
    itos: Vec<String>,
    stoi: WTHashMap<String, usize>,
}

impl OrderedTable {
    /// Create an empty table with room for `capacity` tokens.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            itos: Vec::with_capacity(capacity),
            stoi: hash_map_with_capacity(capacity),
        }
    }

    /// Build a table from tokens which must be unique.
    ///
    /// ## Arguments
    /// * `tokens` - The tokens, in index order.
    ///
    /// ## Returns
    /// The table, or [`WordtableError::DuplicateKey`] naming the first repeat.
    pub fn from_unique_tokens<I, S>(tokens: I) -> WTResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tokens = tokens.into_iter();
        let mut table = Self::with_capacity(tokens.size_hint().0);
        for token in tokens {
            let token = token.into();
            if table.contains(&token) {
                return Err(WordtableError::DuplicateKey(token));
            }
            table.push(token);
        }
        table.stoi.shrink_to_fit();
        Ok(table)
    }

    /// The number of tokens.
    pub fn len(&self) -> usize {
        self.itos.len()
    }

    /// Is the table empty?
    pub fn is_empty(&self) -> bool {
        self.itos.is_empty()
    }

    /// Does the table contain `token`?
    pub fn contains(
        &self,
        token: &str,
    ) -> bool {
        self.stoi.contains_key(token)
    }

    /// The index of `token`, if present.
    pub fn index_of(
        &self,
        token: &str,
    ) -> Option<usize> {
        self.stoi.get(token).copied()
    }

    /// The token at `index`, if in range.
    pub fn token_at(
        &self,
        index: usize,
    ) -> Option<&str> {
        self.itos.get(index).map(String::as_str)
    }

    /// The tokens in index order.
    pub fn tokens(&self) -> &[String] {
        &self.itos
    }

    /// Iterate over ``(index, token)`` in index order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (usize, &str)> + '_ {
        self.itos.iter().map(String::as_str).enumerate()
    }

    /// Copy out the ``{ token -> index }`` map.
    pub fn to_stoi(&self) -> WTHashMap<String, usize> {
        self.stoi.clone()
    }

    /// Append `token` if absent.
    ///
    /// ## Returns
    /// The token's index, and whether it was newly added.
    pub fn push<S: Into<String>>(
        &mut self,
        token: S,
    ) -> (usize, bool) {
        let token = token.into();
        if let Some(&index) = self.stoi.get(&token) {
            return (index, false);
        }
        let index = self.itos.len();
        self.stoi.insert(token.clone(), index);
        self.itos.push(token);
        (index, true)
    }

    /// Insert `token` at `index`, shifting every token at or after `index` up by one.
    ///
    /// ## Arguments
    /// * `token` - The new token; must not already be present.
    /// * `index` - The target position, in ``[0, len]``.
    pub fn insert_at<S: Into<String>>(
        &mut self,
        token: S,
        index: usize,
    ) -> WTResult<()> {
        let size = self.itos.len();
        if index > size {
            return Err(WordtableError::IndexOutOfRange { index, size });
        }
        let token = token.into();
        if self.contains(&token) {
            return Err(WordtableError::DuplicateKey(token));
        }

        for shifted in &self.itos[index..] {
            if let Some(slot) = self.stoi.get_mut(shifted) {
                *slot += 1;
            }
        }
        self.stoi.insert(token.clone(), index);
        self.itos.insert(index, token);
        Ok(())
    }

    /// Consume the table, returning the tokens in index order.
    pub fn into_tokens(self) -> Vec<String> {
        self.itos
    }
}
