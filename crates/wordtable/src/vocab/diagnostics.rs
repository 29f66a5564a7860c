//! # Vocabulary Build Diagnostics

use core::fmt;

use crate::vocab::Vocabulary;

/// A non-fatal event observed while building a [`Vocabulary`].
///
/// These are returned to the caller rather than logged; the host decides how
/// (and whether) to surface them. See [`VocabBuild::report`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum VocabDiagnostic {
    /// The unk token was absent from the input and was appended.
    UnkTokenAppended {
        /// The unk token.
        token: String,

        /// The index it was given.
        index: usize,
    },

    /// Tokens were dropped for falling below the minimum frequency.
    TokensFiltered {
        /// How many distinct tokens were dropped.
        count: usize,

        /// The effective minimum frequency.
        min_freq: usize,
    },
}

impl fmt::Display for VocabDiagnostic {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Self::UnkTokenAppended { token, index } => write!(
                f,
                "the unk token {token:?} wasn't found in the input; added it at index {index}"
            ),
            Self::TokensFiltered { count, min_freq } => {
                write!(f, "dropped {count} tokens with frequency < {min_freq}")
            }
        }
    }
}

/// A built [`Vocabulary`] and the diagnostics raised while building it.
#[derive(Debug, Clone)]
pub struct VocabBuild {
    /// The vocabulary.
    pub vocab: Vocabulary,

    /// Non-fatal events, in the order they occurred.
    pub diagnostics: Vec<VocabDiagnostic>,
}

impl VocabBuild {
    /// Does the build carry a [`VocabDiagnostic::UnkTokenAppended`]?
    pub fn unk_appended(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| matches!(d, VocabDiagnostic::UnkTokenAppended { .. }))
    }

    /// Forward the diagnostics to the [`log`] facade.
    pub fn report(&self) {
        for diagnostic in &self.diagnostics {
            match diagnostic {
                VocabDiagnostic::UnkTokenAppended { .. } => log::warn!("{diagnostic}"),
                VocabDiagnostic::TokensFiltered { .. } => log::debug!("{diagnostic}"),
            }
        }
    }

    /// Discard the diagnostics.
    pub fn into_vocab(self) -> Vocabulary {
        self.vocab
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let d = VocabDiagnostic::UnkTokenAppended {
            token: "<unk>".to_string(),
            index: 3,
        };
        assert_eq!(
            d.to_string(),
            "the unk token \"<unk>\" wasn't found in the input; added it at index 3"
        );

        let d = VocabDiagnostic::TokensFiltered {
            count: 2,
            min_freq: 5,
        };
        assert_eq!(d.to_string(), "dropped 2 tokens with frequency < 5");
    }
}
