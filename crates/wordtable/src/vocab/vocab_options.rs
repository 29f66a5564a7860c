//! # Vocabulary Build Options

use crate::{
    errors::{WTResult, WordtableError},
    table::OrderedTable,
    vocab::{FrequencyCounter, VocabBuild, VocabDiagnostic, Vocabulary},
};

/// The default unknown token.
pub const DEFAULT_UNK_TOKEN: &str = "<unk>";

/// Options for building a [`Vocabulary`] from an ordered frequency table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VocabOptions {
    /// The minimum frequency needed to include a token.
    ///
    /// Values below 1 are treated as 1.
    pub min_freq: usize,

    /// The fallback token for lookups that miss; must be non-empty.
    pub unk_token: String,

    /// Reserved tokens given fixed positions, in order.
    pub specials: Vec<String>,

    /// Place `specials` before (`true`) or after (`false`) the counted tokens.
    pub specials_first: bool,
}

impl Default for VocabOptions {
    fn default() -> Self {
        Self {
            min_freq: 1,
            unk_token: DEFAULT_UNK_TOKEN.to_string(),
            specials: Vec::new(),
            specials_first: true,
        }
    }
}

impl VocabOptions {
    /// Set the minimum frequency.
    pub fn with_min_freq(
        mut self,
        min_freq: usize,
    ) -> Self {
        self.min_freq = min_freq;
        self
    }

    /// Set the unk token.
    pub fn with_unk_token<S: Into<String>>(
        mut self,
        unk_token: S,
    ) -> Self {
        self.unk_token = unk_token.into();
        self
    }

    /// Set the special tokens.
    pub fn with_specials<W, S>(
        mut self,
        specials: W,
    ) -> Self
    where
        W: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.specials = specials.into_iter().map(Into::into).collect();
        self
    }

    /// Set whether specials precede the counted tokens.
    pub fn with_specials_first(
        mut self,
        specials_first: bool,
    ) -> Self {
        self.specials_first = specials_first;
        self
    }

    /// The effective minimum frequency.
    pub fn effective_min_freq(&self) -> usize {
        self.min_freq.max(1)
    }

    /// Build a [`Vocabulary`].
    ///
    /// Input order is preserved as index order. A token repeated in the input
    /// keeps its first position, and its frequencies are summed.
    ///
    /// ## Arguments
    /// * `ordered_frequencies` - ``(token, frequency)`` pairs, in the desired order.
    ///
    /// ## Returns
    /// The vocabulary, and any [`VocabDiagnostic`]s raised on the way.
    pub fn build<I, S>(
        &self,
        ordered_frequencies: I,
    ) -> WTResult<VocabBuild>
    where
        I: IntoIterator<Item = (S, usize)>,
        S: Into<String>,
    {
        if self.unk_token.is_empty() {
            return Err(WordtableError::Configuration(
                "a default unk token wasn't provided".to_string(),
            ));
        }

        let specials = OrderedTable::from_unique_tokens(self.specials.iter().cloned())?;

        let mut counter = FrequencyCounter::new();
        for (token, freq) in ordered_frequencies {
            let token: String = token.into();
            counter.add_count(token, freq);
        }
        let distinct = counter.len();

        let min_freq = self.effective_min_freq();
        let survivors: Vec<String> = counter
            .into_ordered_by_first_seen()
            .into_iter()
            .filter(|&(_, count)| count >= min_freq)
            .map(|(token, _)| token)
            .collect();

        let mut diagnostics = Vec::new();
        let filtered = distinct - survivors.len();
        if filtered > 0 {
            diagnostics.push(VocabDiagnostic::TokensFiltered {
                count: filtered,
                min_freq,
            });
        }

        let body: Vec<String> = survivors
            .into_iter()
            .filter(|token| !specials.contains(token))
            .collect();

        let specials = specials.into_tokens();
        let table = if self.specials_first {
            OrderedTable::from_unique_tokens(specials.into_iter().chain(body))?
        } else {
            OrderedTable::from_unique_tokens(body.into_iter().chain(specials))?
        };

        let vocab = Vocabulary::from_table(table, self.unk_token.clone(), &mut diagnostics)?;
        Ok(VocabBuild { vocab, diagnostics })
    }
}
