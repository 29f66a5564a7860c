//! # Table Primitives
//!
//! [`OrderedTable`] is the ordered ``{ String <-> usize }`` table shared by
//! [`crate::vocab::Vocabulary`] and [`crate::vectors::VectorTable`].

mod ordered_table;

#[doc(inline)]
pub use ordered_table::OrderedTable;
