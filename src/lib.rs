//! # Plainsort
//!
//! `plainsort` is a small, container-agnostic library of classic sorting
//! algorithms: a sortedness predicate and four sorts with clearly stated
//! complexity and stability contracts.
//!
//! - [`is_sorted`]: O(n) non-decreasing check over adjacent pairs.
//! - [`merge_sort`]: stable, iterative, bottom-up, double-buffered;
//!   O(n log n) time, O(n) auxiliary space.
//! - [`quick_sort`]: in-place, iterative over an explicit range stack,
//!   last-element pivot; average O(n log n), worst case O(n²). Not stable.
//! - [`insertion_sort`]: binary-search insertion of an arbitrary source
//!   sequence into an already-sorted destination.
//! - [`bucket_sort`]: counting sort over a caller-declared integral domain,
//!   O(n + domain) with no per-element comparisons.
//!
//! All five are synchronous, single-threaded, and allocation-transient:
//! auxiliary storage is created per call and released on return, and the
//! caller owns the collection throughout.
//!
//! ## Usage
//!
//! ```rust
//! use plainsort::{is_sorted, merge_sort, quick_sort};
//!
//! let mut data = vec![5, 3, 1, 4, 2];
//! merge_sort(&mut data);
//! assert!(is_sorted(&data));
//!
//! // Sorts take slices, so sub-ranges work the same way.
//! let mut words = vec!["pear", "kiwi", "fig", "plum"];
//! quick_sort(&mut words[1..3]);
//! assert_eq!(words, vec!["pear", "fig", "kiwi", "plum"]);
//! ```
//!
//! Insertion sort grows a destination that is already sorted, locating each
//! insertion point by binary search through the [`InsertTarget`] trait:
//!
//! ```rust
//! use plainsort::insertion_sort;
//!
//! let mut destination = vec![1, 3, 5];
//! insertion_sort(&[7, 2, 9], &mut destination);
//! assert_eq!(destination, vec![1, 2, 3, 5, 7, 9]);
//! ```
//!
//! ## Preconditions
//!
//! The only error taxonomy is precondition violations: an empty range given
//! to [`is_sorted`], an empty or unsorted destination given to
//! [`insertion_sort`], a `max <= min` domain or an out-of-domain element
//! given to [`bucket_sort`]. With the default `precondition-checks` feature
//! these fail fast with a panic; there is no retry and no partial-result
//! contract, and a failed call may leave the collection partially mutated.
//! Disabling the feature compiles the checks out entirely, in which case a
//! violated precondition produces unspecified output. A non-total element
//! ordering is never detected; behavior is undefined in the same sense.
//!
//! ## Stability
//!
//! Only [`merge_sort`] guarantees that equal elements keep their original
//! relative order. [`quick_sort`] does not. [`insertion_sort`]'s placement
//! of duplicates is implementation-defined. [`bucket_sort`] reconstructs
//! elements from occurrence counts, so duplicates collapse to the same
//! offset value and stability is not meaningful.

pub mod algo;
pub mod core;

pub use algo::{bucket_sort, insertion_sort, is_sorted, merge_sort, quick_sort};
pub use core::{BucketValue, InsertTarget};

pub mod prelude {
    pub use crate::algo::{bucket_sort, insertion_sort, is_sorted, merge_sort, quick_sort};
    pub use crate::core::{BucketValue, InsertTarget};
}
