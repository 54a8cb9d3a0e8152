//! # Common Types and Traits
use core::{
    fmt::{Debug, Display},
    hash::Hash,
};

use num_traits::{FromPrimitive, PrimInt, ToPrimitive, Unsigned};

use crate::{TMResult, TokenmuxError};

/// A type that can carry token ids across the backend boundary.
///
/// These are constrained to be unsigned primitive integers.
/// Both engines produce `u32` ranks; narrower types are checked
/// on every conversion.
pub trait TokenType:
    'static
    + PrimInt
    + FromPrimitive
    + ToPrimitive
    + Unsigned
    + Hash
    + Default
    + Debug
    + Display
    + Send
    + Sync
{
}

impl<T> TokenType for T where
    T: 'static
        + PrimInt
        + FromPrimitive
        + ToPrimitive
        + Unsigned
        + Hash
        + Default
        + Debug
        + Display
        + Send
        + Sync
{
}

/// Convert an engine rank into `T`.
///
/// ## Returns
/// * `Ok(token)` - on success.
/// * `Err(TokenmuxError::TokenOutOfRange)` - if `T` cannot hold the rank.
pub fn token_from_rank<T: TokenType>(rank: u32) -> TMResult<T> {
    T::from_u32(rank).ok_or(TokenmuxError::TokenOutOfRange(rank as u64))
}

/// Convert `T` into an engine rank.
///
/// ## Returns
/// * `Ok(rank)` - on success.
/// * `Err(TokenmuxError::TokenOutOfRange)` - if the token exceeds `u32`.
pub fn token_to_rank<T: TokenType>(token: T) -> TMResult<u32> {
    token
        .to_u32()
        .ok_or_else(|| TokenmuxError::TokenOutOfRange(token.to_u64().unwrap_or(u64::MAX)))
}

/// Convert a slice of engine ranks into `T`; all-or-nothing.
pub fn tokens_from_ranks<T: TokenType>(ranks: &[u32]) -> TMResult<Vec<T>> {
    ranks.iter().map(|&r| token_from_rank(r)).collect()
}

/// Convert a slice of `T` into engine ranks; all-or-nothing.
pub fn tokens_to_ranks<T: TokenType>(tokens: &[T]) -> TMResult<Vec<u32>> {
    tokens.iter().map(|&t| token_to_rank(t)).collect()
}

cfg_if::cfg_if! {
    if #[cfg(feature = "ahash")] {
        /// Type Alias for hash maps in this crate.
        pub type TMHashMap<K, V> = ahash::AHashMap<K, V>;

        /// Create a new empty hash map.
        pub fn hash_map_new<K, V>() -> TMHashMap<K, V> {
            TMHashMap::new()
        }

    } else if #[cfg(feature = "foldhash")] {
        /// Type Alias for hash maps in this crate.
        pub type TMHashMap<K, V> = foldhash::HashMap<K, V>;

        /// Create a new empty hash map.
        pub fn hash_map_new<K, V>() -> TMHashMap<K, V> {
            foldhash::HashMapExt::new()
        }

    } else {
        /// Type Alias for hash maps in this crate.
        pub type TMHashMap<K, V> = std::collections::HashMap<K, V>;

        /// Create a new empty hash map.
        pub fn hash_map_new<K, V>() -> TMHashMap<K, V> {
            TMHashMap::new()
        }
    }
}
