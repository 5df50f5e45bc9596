//! The sorting algorithms.
//!
//! This module implements the five public operations:
//! - [`is_sorted`]: O(n) sortedness predicate.
//! - [`merge_sort`]: stable, iterative, double-buffered bottom-up merge sort.
//! - [`quick_sort`]: in-place iterative quicksort over an explicit range stack.
//! - [`insertion_sort`]: binary-search insertion into a pre-sorted destination.
//! - [`bucket_sort`]: counting sort over a bounded integral domain.

use crate::core::{BucketValue, InsertTarget, precondition};
use cuneiform::cuneiform;
use std::cmp;

/// Returns whether `data` is non-decreasing under the element ordering.
///
/// Runs a single forward pass over adjacent pairs in O(n) time and O(1)
/// space, returning `false` at the first inversion found.
///
/// # Preconditions
///
/// `data` must contain at least one element. An empty range is invalid
/// input, not vacuously sorted; with `precondition-checks` enabled it
/// panics.
///
/// # Examples
///
/// ```
/// use plainsort::is_sorted;
///
/// assert!(is_sorted(&[1, 2, 2, 9]));
/// assert!(!is_sorted(&[3, 1, 2]));
/// ```
pub fn is_sorted<T: Ord>(data: &[T]) -> bool {
    precondition!(
        !data.is_empty(),
        "is_sorted requires a range of at least one element"
    );

    for pair in data.windows(2) {
        if pair[1] < pair[0] {
            return false;
        }
    }
    true
}

/// Sorts `data` with a stable, iterative, bottom-up merge sort.
///
/// The slice is sorted in place as observed by the caller; internally the
/// sort ping-pongs between the slice and one auxiliary buffer of the same
/// length. Block size starts at 1 and doubles each pass, so the pass count
/// is exactly ⌈log2 n⌉; total work is O(n log n) with O(n) auxiliary space.
///
/// Equal elements keep their original relative order: within each block
/// pair the merge takes from the left block whenever neither side is
/// strictly smaller.
///
/// Both entry-point shapes share this one signature: pass `&mut vec` to
/// sort a whole container, or `&mut vec[a..b]` to sort a sub-range.
///
/// Slices shorter than two elements return immediately without allocating.
///
/// # Examples
///
/// ```
/// use plainsort::merge_sort;
///
/// let mut data = vec![5, 3, 1, 4, 2];
/// merge_sort(&mut data);
/// assert_eq!(data, vec![1, 2, 3, 4, 5]);
/// ```
pub fn merge_sort<T: Ord + Clone>(data: &mut [T]) {
    let len = data.len();
    if len < 2 {
        return;
    }

    // One working buffer; read and write roles swap every pass.
    let mut aux = data.to_vec();
    let mut read_is_data = true;

    let mut block_size = 1;
    while block_size < len {
        if read_is_data {
            merge_pass(data, &mut aux, block_size);
        } else {
            merge_pass(&aux, data, block_size);
        }

        read_is_data = !read_is_data;
        block_size *= 2;
    }

    // If the last pass landed in the auxiliary buffer, move it back into
    // the caller's storage.
    if !read_is_data {
        data.clone_from_slice(&aux);
    }
}

/// One merge pass: merges every adjacent pair of `block_size`-wide blocks
/// from `read` into `write`.
///
/// The pass covers the full length; the second block of the final pair is
/// clipped to the slice end and may be empty, in which case the pair
/// degenerates to a copy.
fn merge_pass<T: Ord + Clone>(read: &[T], write: &mut [T], block_size: usize) {
    let len = read.len();
    let mut write_head = 0;

    let mut start = 0;
    while start < len {
        let mid = cmp::min(start + block_size, len);
        let end = cmp::min(start + 2 * block_size, len);

        let mut left = start;
        let mut right = mid;

        // Two-pointer merge of [start, mid) and [mid, end). Ties take the
        // left element, which is what makes the sort stable.
        while left < mid || right < end {
            if right == end {
                write[write_head] = read[left].clone();
                left += 1;
            } else if left == mid {
                write[write_head] = read[right].clone();
                right += 1;
            } else if read[right] < read[left] {
                write[write_head] = read[right].clone();
                right += 1;
            } else {
                write[write_head] = read[left].clone();
                left += 1;
            }
            write_head += 1;
        }

        start = end;
    }
}

/// Sorts `data` in place with an iterative, single-pivot quicksort.
///
/// Recursion is replaced by an explicit last-in-first-out stack of pending
/// half-open ranges, so there is no call-stack depth limit; the stack holds
/// the same total amount of ancillary state a recursive version would.
/// After partitioning, the right sub-range is pushed before the left one.
///
/// The pivot is always the last element of the active range. Average cost
/// is O(n log n), but already-sorted, reverse-sorted, and adversarial
/// inputs degrade to O(n²) time and linear stack growth. That trade-off is
/// part of the contract; there is no randomized or median-of-three pivot
/// selection. Not stable.
///
/// Pass `&mut vec` for a whole container or `&mut vec[a..b]` for a
/// sub-range. Slices shorter than two elements are no-ops.
///
/// # Examples
///
/// ```
/// use plainsort::quick_sort;
///
/// let mut data = vec![9, 4, 6, 6, 1];
/// quick_sort(&mut data);
/// assert_eq!(data, vec![1, 4, 6, 6, 9]);
/// ```
pub fn quick_sort<T: Ord>(data: &mut [T]) {
    let mut pending: Vec<(usize, usize)> = vec![(0, data.len())];

    while let Some((start, end)) = pending.pop() {
        // Ranges of zero or one element are already sorted.
        if end - start < 2 {
            continue;
        }

        let mut pivot = end - 1;

        // Unified partition scan. `first_largest` starts at the pivot
        // position, meaning "no element greater than the pivot seen yet";
        // once it moves, it tracks the boundary of the greater-than region.
        let mut first_largest = pivot;
        for target in start..end {
            if data[target] <= data[pivot] && first_largest != pivot && target != pivot {
                data.swap(target, first_largest);
                first_largest += 1;
            } else if data[target] > data[pivot] && first_largest == pivot {
                first_largest = target;
            }
        }

        // The boundary is the pivot's final sorted position.
        data.swap(first_largest, pivot);
        pivot = first_largest;

        if end - (pivot + 1) > 1 {
            pending.push((pivot + 1, end));
        }
        if pivot - start > 1 {
            pending.push((start, pivot));
        }
    }
}

/// Merges every element of `source`, in source order, into the already
/// sorted `destination`, keeping the destination sorted after each
/// insertion.
///
/// Each insertion point is located by binary search over the destination's
/// current extent, costing O(log m) comparisons; the positional insertion
/// itself shifts O(m) elements, so inserting n elements into an m-element
/// destination costs O(n log m + n·m) overall.
///
/// Where an inserted element equals an existing one, its placement relative
/// to the equal run is implementation-defined; this sort makes no stability
/// promise.
///
/// # Preconditions
///
/// `destination` must be non-empty and sorted. Both are checked when
/// `precondition-checks` is enabled.
///
/// # Examples
///
/// ```
/// use plainsort::insertion_sort;
///
/// let mut destination = vec![1, 3, 5];
/// insertion_sort(&[7, 2, 9], &mut destination);
/// assert_eq!(destination, vec![1, 2, 3, 5, 7, 9]);
/// ```
pub fn insertion_sort<T, D>(source: &[T], destination: &mut D)
where
    T: Ord + Clone,
    D: InsertTarget<T>,
{
    precondition!(
        !destination.is_empty(),
        "insertion sort requires a non-empty destination"
    );
    precondition!(
        target_is_sorted(destination),
        "insertion sort requires a sorted destination"
    );

    for element in source {
        let mut start = 0;
        let mut end = destination.len();

        while end - start > 1 {
            // `end - 1 - start` keeps a three-element window from mapping
            // the range back onto itself.
            let pivot_index = start + (end - 1 - start) / 2;

            if *element > *destination.get(pivot_index) {
                start = pivot_index + 1;
            } else {
                end = pivot_index + 1;
            }

            precondition!(end - start >= 1, "binary search window collapsed");
        }

        // Single-slot window left: insert after the remaining pivot when
        // strictly greater, otherwise before it.
        let pivot_index = start + (end - start) / 2;
        if *element > *destination.get(pivot_index) {
            destination.insert(pivot_index + 1, element.clone());
        } else {
            destination.insert(pivot_index, element.clone());
        }
    }
}

fn target_is_sorted<T, D>(destination: &D) -> bool
where
    T: Ord,
    D: InsertTarget<T> + ?Sized,
{
    (1..destination.len()).all(|i| destination.get(i - 1) <= destination.get(i))
}

// Cache-aligned histogram backing the counting pass.
#[cuneiform]
struct BucketCounts {
    data: Vec<usize>,
}

/// Sorts `data` by counting occurrences over the caller-declared closed
/// domain `[min, max]` and rebuilding the slice from the counts, in
/// O(n + (max - min)) time with no per-element comparisons.
///
/// Each slot is overwritten with the **raw bucket offset** of its value
/// (`value - min` space), not with `min + offset`; callers that need true
/// values add `min` back. Because the rebuild reconstructs elements from
/// counts alone, this sort is only meaningful when the element's value is
/// its entire payload; it must not be used for records carrying any other
/// state.
///
/// The count array has `max - min` entries, so the largest storable value
/// is `max - 1`'s offset; an element equal to `max` passes the domain check
/// but has no bucket and the counting pass will panic on the out-of-range
/// index.
///
/// # Preconditions
///
/// `max > min`, and every element must lie within `[min, max]`. Both are
/// checked when `precondition-checks` is enabled.
///
/// # Examples
///
/// ```
/// use plainsort::bucket_sort;
///
/// let mut data: Vec<u32> = vec![4, 1, 3, 1, 2];
/// bucket_sort(&mut data, 1, 5);
///
/// // Raw offsets; add `min` back for the true values [1, 1, 2, 3, 4].
/// assert_eq!(data, vec![0, 0, 1, 2, 3]);
/// ```
pub fn bucket_sort<T: BucketValue>(data: &mut [T], min: T, max: T) {
    precondition!(max > min, "bucket domain requires max > min");

    let mut counts = BucketCounts {
        data: vec![0; max.offset_from(min)],
    };

    for element in data.iter() {
        precondition!(*element >= min, "element below the bucket domain");
        precondition!(*element <= max, "element above the bucket domain");

        counts.data[element.offset_from(min)] += 1;
    }

    // Rebuild left to right, draining buckets in offset order.
    let mut cursor = 0;
    for slot in data.iter_mut() {
        while counts.data[cursor] == 0 {
            cursor += 1;
        }

        *slot = T::from_offset(cursor);
        counts.data[cursor] -= 1;
    }
}
