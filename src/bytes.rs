//! Trait for converting float to bytes
//!
//! Floats are neither `Eq` nor `Hash`, so the mode keys its frequency map on the bit pattern
//! instead. Zero is canonicalized first so that `-0.0` and `0.0` land on the same key.
use core::cmp::{Eq, PartialEq};
use core::fmt::Debug;
use core::hash::Hash;

use num_traits::Float;

pub trait ToBytes {
    type Bytes: Debug + AsRef<[u8]> + PartialEq + Eq + Hash;

    fn to_bytes(self: &Self) -> Self::Bytes;
}

impl ToBytes for f32 {
    type Bytes = [u8; 4];

    fn to_bytes(self: &f32) -> Self::Bytes {
        self.to_ne_bytes()
    }
}

impl ToBytes for f64 {
    type Bytes = [u8; 8];

    fn to_bytes(self: &f64) -> Self::Bytes {
        self.to_ne_bytes()
    }
}

/// Hash key for a float where `-0.0 == 0.0`
pub fn hash_key<T: Float + ToBytes>(val: T) -> T::Bytes {
    (val + T::zero()).to_bytes()
}
