//! # Token Vocabulary ``{ String <-> usize }``

use serde::{Deserialize, Serialize};

use crate::{
    errors::{WTResult, WordtableError},
    persist::JsonSnapshot,
    table::OrderedTable,
    types::WTHashMap,
    vocab::{VocabBuild, VocabDiagnostic, VocabOptions},
};

/// Bidirectional ``{ token <-> index }`` vocabulary with an unknown-token fallback.
///
/// Indices are dense over ``[0, len)`` and follow construction order.
/// The unk token is always present; [`Vocabulary::index_of`] never fails.
///
/// Lookups take `&self` and may run from many threads at once;
/// mutation requires `&mut self`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "VocabularyState", into = "VocabularyState")]
pub struct Vocabulary {
    table: OrderedTable,
    unk_token: String,
    unk_index: usize,
}

/// Serialized form of a [`Vocabulary`].
#[derive(Serialize, Deserialize)]
struct VocabularyState {
    itos: Vec<String>,
    unk_token: String,
}

impl From<Vocabulary> for VocabularyState {
    fn from(vocab: Vocabulary) -> Self {
        Self {
            itos: vocab.table.into_tokens(),
            unk_token: vocab.unk_token,
        }
    }
}

impl TryFrom<VocabularyState> for Vocabulary {
    type Error = WordtableError;

    fn try_from(state: VocabularyState) -> WTResult<Self> {
        let table = OrderedTable::from_unique_tokens(state.itos)?;
        let unk_index = table.index_of(&state.unk_token).ok_or_else(|| {
            WordtableError::Configuration(format!(
                "unk token {:?} is missing from the stored tokens",
                state.unk_token
            ))
        })?;
        Ok(Self {
            table,
            unk_token: state.unk_token,
            unk_index,
        })
    }
}

impl JsonSnapshot for Vocabulary {}

impl Vocabulary {
    /// Build a vocabulary with default [`VocabOptions`].
    ///
    /// Diagnostics are forwarded to the [`log`] facade;
    /// use [`VocabOptions::build`] to receive them instead.
    ///
    /// ## Arguments
    /// * `ordered_frequencies` - ``(token, frequency)`` pairs, in the desired order.
    pub fn new<I, S>(ordered_frequencies: I) -> WTResult<Self>
    where
        I: IntoIterator<Item = (S, usize)>,
        S: Into<String>,
    {
        let build = VocabOptions::default().build(ordered_frequencies)?;
        build.report();
        Ok(build.into_vocab())
    }

    /// Build a vocabulary from an ordered list of unique tokens.
    ///
    /// ## Arguments
    /// * `tokens` - The tokens, in index order; repeats are an error.
    /// * `unk_token` - The fallback token; appended if absent.
    pub fn from_tokens<I, S, U>(
        tokens: I,
        unk_token: U,
    ) -> WTResult<VocabBuild>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
        U: Into<String>,
    {
        let unk_token = unk_token.into();
        if unk_token.is_empty() {
            return Err(WordtableError::Configuration(
                "a default unk token wasn't provided".to_string(),
            ));
        }
        let table = OrderedTable::from_unique_tokens(tokens)?;
        let mut diagnostics = Vec::new();
        let vocab = Self::from_table(table, unk_token, &mut diagnostics)?;
        Ok(VocabBuild { vocab, diagnostics })
    }

    /// Wrap a finished table, appending the unk token if it is absent.
    pub(crate) fn from_table(
        mut table: OrderedTable,
        unk_token: String,
        diagnostics: &mut Vec<VocabDiagnostic>,
    ) -> WTResult<Self> {
        if unk_token.is_empty() {
            return Err(WordtableError::Configuration(
                "a default unk token wasn't provided".to_string(),
            ));
        }

        let (unk_index, added) = table.push(unk_token.as_str());
        if added {
            diagnostics.push(VocabDiagnostic::UnkTokenAppended {
                token: unk_token.clone(),
                index: unk_index,
            });
        }

        Ok(Self {
            table,
            unk_token,
            unk_index,
        })
    }

    /// The number of tokens.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Is the vocabulary empty?
    ///
    /// Always `false`: the unk token is always present.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// The fallback token.
    pub fn unk_token(&self) -> &str {
        &self.unk_token
    }

    /// The index of the fallback token.
    pub fn unk_index(&self) -> usize {
        self.unk_index
    }

    /// Does the vocabulary contain `token`?
    pub fn contains(
        &self,
        token: &str,
    ) -> bool {
        self.table.contains(token)
    }

    /// The index of `token`, or the unk index when absent.
    pub fn index_of(
        &self,
        token: &str,
    ) -> usize {
        self.table.index_of(token).unwrap_or(self.unk_index)
    }

    /// The index of `token`, without the unk fallback.
    pub fn get_index(
        &self,
        token: &str,
    ) -> Option<usize> {
        self.table.index_of(token)
    }

    /// The token at `index`.
    ///
    /// ## Returns
    /// The token, or [`WordtableError::IndexOutOfRange`].
    pub fn token_at(
        &self,
        index: usize,
    ) -> WTResult<&str> {
        self.table
            .token_at(index)
            .ok_or(WordtableError::IndexOutOfRange {
                index,
                size: self.len(),
            })
    }

    /// Look up the token for each index.
    ///
    /// Fails on the first out-of-range index; no partial result is returned.
    pub fn lookup_tokens(
        &self,
        indices: &[usize],
    ) -> WTResult<Vec<String>> {
        indices
            .iter()
            .map(|&index| self.token_at(index).map(str::to_string))
            .collect()
    }

    /// Look up the index for each token; unknown tokens map to the unk index.
    pub fn lookup_indices<S: AsRef<str>>(
        &self,
        tokens: &[S],
    ) -> Vec<usize> {
        tokens.iter().map(|t| self.index_of(t.as_ref())).collect()
    }

    /// Copy out the ``{ token -> index }`` map.
    pub fn get_stoi(&self) -> WTHashMap<String, usize> {
        self.table.to_stoi()
    }

    /// Copy out the tokens, in index order.
    pub fn get_itos(&self) -> Vec<String> {
        self.table.tokens().to_vec()
    }

    /// Iterate over ``(index, token)`` in index order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (usize, &str)> + '_ {
        self.table.iter()
    }

    /// Insert `token` at `index`, shifting every token at or after `index` up by one.
    ///
    /// ## Arguments
    /// * `token` - The new token; must not already be present.
    /// * `index` - The target position, in ``[0, len]``.
    ///
    /// ## Returns
    /// [`WordtableError::IndexOutOfRange`] or [`WordtableError::DuplicateKey`]
    /// on rejection; the vocabulary is unchanged in that case.
    pub fn insert_token<S: Into<String>>(
        &mut self,
        token: S,
        index: usize,
    ) -> WTResult<()> {
        self.table.insert_at(token, index)?;
        if index <= self.unk_index {
            self.unk_index += 1;
        }
        Ok(())
    }

    /// Append `token` if absent; a present token keeps its index.
    ///
    /// ## Returns
    /// The token's index.
    pub fn append_token<S: Into<String>>(
        &mut self,
        token: S,
    ) -> usize {
        self.table.push(token).0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{check_is_send, check_is_sync};

    fn abc_vocab() -> Vocabulary {
        Vocabulary::new([("a", 3), ("b", 2), ("c", 1)]).unwrap()
    }

    #[test]
    fn test_basic_lookup() {
        let vocab = abc_vocab();
        check_is_send(&vocab);
        check_is_sync(&vocab);

        assert_eq!(vocab.len(), 4);
        assert!(!vocab.is_empty());
        assert_eq!(vocab.get_itos(), vec!["a", "b", "c", "<unk>"]);
        assert_eq!(vocab.index_of("b"), 1);
        assert_eq!(vocab.index_of("zzz"), vocab.index_of("<unk>"));
        assert_eq!(vocab.get_index("zzz"), None);
        assert_eq!(vocab.token_at(2).unwrap(), "c");
        assert!(vocab.contains("a"));
        assert!(!vocab.contains("zzz"));
    }

    #[test]
    fn test_token_at_out_of_range() {
        let vocab = abc_vocab();
        assert!(matches!(
            vocab.token_at(4),
            Err(WordtableError::IndexOutOfRange { index: 4, size: 4 })
        ));
    }

    #[test]
    fn test_batch_lookup() {
        let vocab = abc_vocab();
        assert_eq!(
            vocab.lookup_tokens(&[2, 0, 3]).unwrap(),
            vec!["c", "a", "<unk>"]
        );
        assert!(vocab.lookup_tokens(&[0, 9, 1]).is_err());

        assert_eq!(vocab.lookup_indices(&["c", "nope", "a"]), vec![2, 3, 0]);
        assert_eq!(vocab.lookup_indices::<&str>(&[]), Vec::<usize>::new());
    }

    #[test]
    fn test_snapshots_are_copies() {
        let mut vocab = abc_vocab();
        let mut stoi = vocab.get_stoi();
        let mut itos = vocab.get_itos();
        stoi.insert("x".to_string(), 99);
        itos.push("x".to_string());

        assert!(!vocab.contains("x"));
        assert_eq!(vocab.get_stoi().len(), 4);

        vocab.append_token("y");
        assert_eq!(stoi.get("y"), None);
        assert_eq!(stoi["a"], 0);
    }

    #[test]
    fn test_insert_token() {
        let mut vocab = abc_vocab();

        vocab.insert_token("z", 1).unwrap();
        assert_eq!(vocab.get_itos(), vec!["a", "z", "b", "c", "<unk>"]);
        assert_eq!(vocab.index_of("b"), 2);
        assert_eq!(vocab.unk_index(), 4);
        assert_eq!(vocab.index_of("nope"), 4);

        vocab.insert_token("tail", 5).unwrap();
        assert_eq!(vocab.token_at(5).unwrap(), "tail");
        assert_eq!(vocab.unk_index(), 4);
    }

    #[test]
    fn test_insert_token_errors() {
        let mut vocab = abc_vocab();
        assert!(matches!(
            vocab.insert_token("q", 5),
            Err(WordtableError::IndexOutOfRange { index: 5, size: 4 })
        ));
        assert!(matches!(
            vocab.insert_token("a", 3),
            Err(WordtableError::DuplicateKey(t)) if t == "a"
        ));
        assert_eq!(vocab, abc_vocab());
    }

    #[test]
    fn test_append_token() {
        let mut vocab = abc_vocab();
        assert_eq!(vocab.append_token("d"), 4);
        assert_eq!(vocab.len(), 5);
        assert_eq!(vocab.append_token("d"), 4);
        assert_eq!(vocab.len(), 5);
        assert_eq!(vocab.append_token("a"), 0);
        assert_eq!(vocab.token_at(4).unwrap(), "d");
    }

    #[test]
    fn test_from_tokens() {
        let build = Vocabulary::from_tokens(["x", "<unk>", "y"], "<unk>").unwrap();
        assert!(build.diagnostics.is_empty());
        assert_eq!(build.vocab.unk_index(), 1);

        let build = Vocabulary::from_tokens(["x", "y"], "<oov>").unwrap();
        assert!(build.unk_appended());
        assert_eq!(build.vocab.unk_token(), "<oov>");
        assert_eq!(build.vocab.index_of("q"), 2);

        assert!(matches!(
            Vocabulary::from_tokens(["x", "x"], "<unk>"),
            Err(WordtableError::DuplicateKey(_))
        ));
        assert!(matches!(
            Vocabulary::from_tokens(["x"], ""),
            Err(WordtableError::Configuration(_))
        ));
    }

    #[test]
    fn test_serde_roundtrip() {
        let mut vocab = abc_vocab();
        vocab.insert_token("<pad>", 0).unwrap();

        let blob = serde_json::to_string(&vocab).unwrap();
        let restored: Vocabulary = serde_json::from_str(&blob).unwrap();

        assert_eq!(restored, vocab);
        for (index, token) in vocab.iter() {
            assert_eq!(restored.index_of(token), index);
            assert_eq!(restored.token_at(index).unwrap(), token);
        }
        assert_eq!(restored.index_of("missing"), vocab.index_of("missing"));
    }

    #[test]
    fn test_deserialize_rejects_bad_state() {
        let missing_unk = r#"{"itos":["a","b"],"unk_token":"<unk>"}"#;
        assert!(serde_json::from_str::<Vocabulary>(missing_unk).is_err());

        let duplicate = r#"{"itos":["a","a","<unk>"],"unk_token":"<unk>"}"#;
        assert!(serde_json::from_str::<Vocabulary>(duplicate).is_err());
    }
}
