//! Core traits and the precondition facility.
//!
//! This module defines:
//! - [`InsertTarget`]: the destination abstraction used by insertion sort.
//! - [`BucketValue`]: the bounded integral domain used by bucket sort.
//! - `precondition!`: the crate-internal fail-fast assertion macro.

use std::collections::VecDeque;

/// Fail-fast precondition check.
///
/// Every documented input invariant in this crate routes through this macro.
/// With the default `precondition-checks` feature enabled, a violated
/// precondition panics with the given message before the algorithm mutates
/// anything further. With the feature disabled the whole check (including
/// evaluation of the condition expression) is compiled out, and a violated
/// precondition yields unspecified output.
macro_rules! precondition {
    ($cond:expr, $($msg:tt)+) => {
        if cfg!(feature = "precondition-checks") {
            assert!($cond, $($msg)+);
        }
    };
}

pub(crate) use precondition;

/// A sorted destination that insertion sort can grow.
///
/// This abstracts the two capabilities [`crate::insertion_sort`] needs from
/// its destination: positional element access (so the insertion point can be
/// located by binary search) and mid-sequence insertion. `Vec` and `VecDeque`
/// implement it out of the box; custom collections implement it to accept
/// insertions without converting through an intermediate `Vec`.
///
/// # Examples
///
/// Implementing for a custom wrapper:
///
/// ```
/// use plainsort::core::InsertTarget;
///
/// struct Ledger {
///     amounts: Vec<i64>,
/// }
///
/// impl InsertTarget<i64> for Ledger {
///     fn len(&self) -> usize {
///         self.amounts.len()
///     }
///
///     fn get(&self, index: usize) -> &i64 {
///         &self.amounts[index]
///     }
///
///     fn insert(&mut self, index: usize, value: i64) {
///         self.amounts.insert(index, value);
///     }
/// }
/// ```
pub trait InsertTarget<T> {
    /// Returns the number of elements currently held.
    fn len(&self) -> usize;

    /// Returns a reference to the element at `index`.
    fn get(&self, index: usize) -> &T;

    /// Inserts `value` before the element at `index`, shifting the tail.
    ///
    /// `index == len()` appends.
    fn insert(&mut self, index: usize, value: T);

    /// Returns `true` if the destination holds no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> InsertTarget<T> for Vec<T> {
    fn len(&self) -> usize {
        self.len()
    }

    fn get(&self, index: usize) -> &T {
        &self[index]
    }

    fn insert(&mut self, index: usize, value: T) {
        self.insert(index, value);
    }
}

// VecDeque offers O(1) random access and positional insertion, so it is a
// valid destination as well.
impl<T> InsertTarget<T> for VecDeque<T> {
    fn len(&self) -> usize {
        self.len()
    }

    fn get(&self, index: usize) -> &T {
        &self[index]
    }

    fn insert(&mut self, index: usize, value: T) {
        self.insert(index, value);
    }
}

/// An element type that [`crate::bucket_sort`] can count and reconstruct.
///
/// Bucket sort treats the element's own value as its complete identity: it
/// counts occurrences at `offset_from(min)` and rebuilds slots from raw
/// offsets via `from_offset`. The reconstructed slot holds the **offset**,
/// not `min + offset`; callers that need the true value add `min` back.
///
/// Implemented for the primitive integer types. Signed implementations widen
/// before subtracting, so a full-range domain (for example
/// `[i8::MIN, i8::MAX]`) cannot overflow the offset computation.
pub trait BucketValue: Copy + Ord {
    /// Offset of `self` from `min` within the bucket domain.
    fn offset_from(self, min: Self) -> usize;

    /// The element value encoding a raw bucket offset.
    fn from_offset(offset: usize) -> Self;
}

macro_rules! impl_bucket_value {
    ($($t:ty => $wide:ty),* $(,)?) => {
        $(
            impl BucketValue for $t {
                #[inline]
                fn offset_from(self, min: Self) -> usize {
                    ((self as $wide) - (min as $wide)) as usize
                }

                #[inline]
                fn from_offset(offset: usize) -> Self {
                    offset as $t
                }
            }
        )*
    };
}

impl_bucket_value! {
    u8 => u64,
    u16 => u64,
    u32 => u64,
    u64 => u64,
    usize => u64,
    i8 => i128,
    i16 => i128,
    i32 => i128,
    i64 => i128,
    isize => i128,
}
