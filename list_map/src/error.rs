/// Errors reported by fallible [`ListMap`](crate::ListMap) operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The requested key is not present in the map.
    #[error("key not found")]
    KeyNotFound,
    /// The key and value lists supplied for rehydration have different lengths.
    #[error("key list has {keys} entries but value list has {values}")]
    LengthMismatch {
        /// Length of the key list.
        keys: usize,
        /// Length of the value list.
        values: usize,
    },
    /// The destination buffer cannot hold all pairs at the requested offset.
    #[error("buffer holds {available} pairs after the offset, {needed} needed")]
    BufferTooSmall {
        /// Number of pairs in the map.
        needed: usize,
        /// Number of buffer slots at and after the offset.
        available: usize,
    },
}
