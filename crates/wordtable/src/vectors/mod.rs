//! # Vector Tables
//!
//! [`VectorTable`] maps tokens to fixed-width `f32` embedding vectors,
//! returning an unk vector for tokens it does not hold.
//!
//! Vectors arrive as [`VectorData`], which carries its element type;
//! tables only accept `f32` data.
//!
//! ```rust
//! use wordtable::vectors::VectorTable;
//!
//! let mut table = VectorTable::new(
//!     vec!["a", "b"],
//!     vec![vec![1.0_f32, 0.0], vec![0.0, 1.0]],
//!     None,
//! )
//! .unwrap();
//!
//! assert_eq!(table.get("x"), [0.0, 0.0]);
//!
//! table.set("x", vec![0.5_f32, 0.5]).unwrap();
//! assert_eq!(table.get("x"), [0.5, 0.5]);
//! ```
mod vector_data;
mod vector_table;

pub mod io;

#[doc(inline)]
pub use vector_data::{DType, VectorData};
#[doc(inline)]
pub use vector_table::VectorTable;
