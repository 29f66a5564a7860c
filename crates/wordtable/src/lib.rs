//! # `wordtable` Token Lookup Tables
//!
//! In-memory lookup structures for text-processing pipelines:
//!
//! * [`vocab::Vocabulary`] - bidirectional ``token <-> index`` table with an
//!   unknown-token fallback, built from ordered frequency tables.
//! * [`vectors::VectorTable`] - ``token -> [f32]`` embedding table with an
//!   unknown-vector fallback.
//!
//! Both share the [`table::OrderedTable`] primitive, and both save/restore via
//! [`persist::JsonSnapshot`].
//!
//! Tables are built once, then read many times. Lookups take `&self` and are
//! safe to run from many threads; mutation takes `&mut self`, so callers that
//! need concurrent writers serialize access themselves (e.g. an `RwLock`).
//!
//! ## Crate Features
//!
//! #### feature: ``default``
//!
//! * ``ahash``
//! * ``rayon``
//!
//! #### feature: ``ahash``
//!
//! This swaps all HashMap/HashSet implementations for ``ahash``; which is a performance
//! win on many/(most?) modern CPUs.
//!
//! This is done by the ``types::WTHash{*}`` type alias machinery.
//!
//! #### feature: ``foldhash``
//!
//! As ``ahash``, with ``foldhash``. If both are enabled, ``ahash`` wins.
//!
//! #### feature: ``rayon``
//!
//! This enables batch-level parallel lookups using the ``rayon`` crate.
//!
//! ## Example
//!
//! ```rust
//! use wordtable::{
//!     persist::JsonSnapshot,
//!     vocab::{FrequencyCounter, Vocabulary},
//! };
//!
//! let counter: FrequencyCounter = "the cat sat on the mat".split(' ').collect();
//! let vocab = Vocabulary::new(counter.into_ordered_by_frequency()).unwrap();
//!
//! assert_eq!(vocab.index_of("the"), 0);
//! assert_eq!(vocab.lookup_indices(&["cat", "dog"]), vec![1, vocab.unk_index()]);
//!
//! let mut blob = Vec::new();
//! vocab.save_json(&mut blob).unwrap();
//! let restored = Vocabulary::load_json(blob.as_slice()).unwrap();
//! assert_eq!(restored, vocab);
//! ```
#![warn(missing_docs, unused)]

#[cfg(feature = "rayon")]
pub mod rayon;

pub mod errors;
pub mod persist;
pub mod table;
pub mod types;
pub mod vectors;
pub mod vocab;

#[doc(inline)]
pub use errors::{WTResult, WordtableError};
#[doc(inline)]
pub use persist::JsonSnapshot;
#[doc(inline)]
pub use vectors::{VectorData, VectorTable};
#[doc(inline)]
pub use vocab::{VocabOptions, Vocabulary};
