//! # Vocabulary
//!
//! [`Vocabulary`] maps tokens to dense indices and back, with an unknown-token
//! fallback for lookups that miss.
//!
//! ## Building
//!
//! Vocabularies are built from an ordered ``(token, frequency)`` table;
//! input order becomes index order. [`VocabOptions`] controls minimum
//! frequency filtering, the unk token, and special-token placement.
//! [`FrequencyCounter`] produces the ordered table from a token stream.
//!
//! ```rust
//! use wordtable::vocab::{FrequencyCounter, VocabOptions};
//!
//! let counter: FrequencyCounter = "a b b c b a".split(' ').collect();
//! let build = VocabOptions::default()
//!     .with_specials(["<pad>"])
//!     .build(counter.into_ordered_by_frequency())
//!     .unwrap();
//!
//! let vocab = build.vocab;
//! assert_eq!(vocab.get_itos(), vec!["<pad>", "b", "a", "c", "<unk>"]);
//! assert_eq!(vocab.index_of("never-seen"), vocab.unk_index());
//! ```
#[cfg(test)]
mod proptests;

mod diagnostics;
mod frequencies;
mod vocab_options;
mod vocabulary;

pub mod io;

#[doc(inline)]
pub use diagnostics::{VocabBuild, VocabDiagnostic};
#[doc(inline)]
pub use frequencies::FrequencyCounter;
#[doc(inline)]
pub use vocab_options::{DEFAULT_UNK_TOKEN, VocabOptions};
#[doc(inline)]
pub use vocabulary::Vocabulary;
