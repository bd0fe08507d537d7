//! # Pivotsort
//!
//! `pivotsort` is a small, allocation-free, in-place quicksort for sequences of integers.
//!
//! It implements the textbook divide-and-conquer scheme: the **last element** of a range is the
//! pivot, a single **Lomuto** scan moves every smaller element in front of it, and the two sides
//! are sorted recursively, left first, until ranges hold at most one element.
//!
//! ## Key Features
//!
//! - **In-Place**: Elements are only ever exchanged. No auxiliary buffer is allocated.
//! - **Inclusive Bounds**: [`quicksort`] and [`partition`] take `start` and `end` as inclusive
//!   indices, so any sub-range of a sequence can be sorted without touching the rest.
//! - **Container Agnostic**: The [`Sequence`] trait covers slices, arrays, `Vec` and `VecDeque`,
//!   and can be implemented for custom storage.
//! - **Pivot Rules**: [`Sorter`] can swap the last-element rule for first-element,
//!   median-of-three or random pivots, and reports [`SortStats`] for every call.
//!
//! ## Usage
//!
//! ### Basic Usage
//!
//! ```rust
//! use pivotsort::quicksort;
//!
//! let mut data = vec![5, 2, 7, 10, 4, 8, 23, 14, 21, 1];
//! let end = data.len() - 1;
//! quicksort(&mut data, 0, end);
//!
//! assert_eq!(data, vec![1, 2, 4, 5, 7, 8, 10, 14, 21, 23]);
//! ```
//!
//! ### Choosing a Pivot Rule
//!
//! ```rust
//! use pivotsort::{PivotRule, Sorter};
//!
//! let mut data: Vec<i32> = (0..1_000).collect();
//! let stats = Sorter::new().pivot(PivotRule::Random).seed(7).sort(&mut data);
//!
//! assert!(data.windows(2).all(|w| w[0] <= w[1]));
//! assert!(stats.max_depth < 999);
//! ```
//!
//! ## Performance Characteristics
//!
//! - **Average Case**: O(N log N) comparisons, O(log N) recursion depth.
//! - **Worst Case**: O(N^2) comparisons and O(N) recursion depth when every pivot is the minimum
//!   or maximum of its range. With the default rule this happens on sorted and reverse-sorted
//!   input; very large inputs of that shape can exhaust the thread's stack.
//! - **Stability**: Equal elements may be reordered.

pub mod algo;
pub mod core;
pub use algo::{Sorter, partition, quicksort, sort, try_partition, try_quicksort};
pub use core::{PivotRule, Sequence, SortError, SortStats};

pub mod prelude {
    pub use crate::algo::{Sorter, partition, quicksort, sort, try_partition, try_quicksort};
    pub use crate::core::{PivotRule, Sequence, SortError, SortStats};
}
