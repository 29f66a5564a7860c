//! # Rayon Utilities
//!
//! [`rayon`] powered batch-level lookups.

mod parallel_lookup;

pub use parallel_lookup::ParallelRayonLookup;
