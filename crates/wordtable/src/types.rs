//! # Common Types

cfg_if::cfg_if! {
    if #[cfg(feature = "ahash")] {
        /// Type Alias for hash maps in this crate.
        pub type WTHashMap<K, V> = ahash::AHashMap<K, V>;

        /// Create a new hash map with the given capacity.
        pub fn hash_map_with_capacity<K, V>(capacity: usize) -> WTHashMap<K, V> {
            WTHashMap::with_capacity(capacity)
        }

        /// Type Alias for hash sets in this crate.
        pub type WTHashSet<V> = ahash::AHashSet<V>;

    } else if #[cfg(feature = "foldhash")] {
        /// Type Alias for hash maps in this crate.
        pub type WTHashMap<K, V> = foldhash::HashMap<K, V>;

        /// Create a new hash map with the given capacity.
        pub fn hash_map_with_capacity<K, V>(capacity: usize) -> WTHashMap<K, V> {
            foldhash::HashMapExt::with_capacity(capacity)
        }

        /// Type Alias for hash sets in this crate.
        pub type WTHashSet<V> = foldhash::HashSet<V>;

    } else {
        /// Type Alias for hash maps in this crate.
        pub type WTHashMap<K, V> = std::collections::HashMap<K, V>;

        /// Create a new hash map with the given capacity.
        pub fn hash_map_with_capacity<K, V>(capacity: usize) -> WTHashMap<K, V> {
            WTHashMap::with_capacity(capacity)
        }

        /// Type Alias for hash sets in this crate.
        pub type WTHashSet<V> = std::collections::HashSet<V>;
    }
}

/// Compile-time check that a value is [`Send`].
pub fn check_is_send<S: Send>(_: &S) {}

/// Compile-time check that a value is [`Sync`].
pub fn check_is_sync<S: Sync>(_: &S) {}
