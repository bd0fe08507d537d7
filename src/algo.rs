//! Core sorting algorithms (Lomuto partition and recursive quicksort).
//!
//! This module implements classic in-place quicksort:
//! - **Partition**: The last element of a range is the pivot. One left-to-right
//!   scan moves every element strictly below the pivot in front of it, then the
//!   pivot is exchanged into its final position.
//! - **Driver**: Partitions a range and recurses into the part left of the pivot,
//!   then into the part right of it, until ranges hold at most one element.
//!
//! Ranges are inclusive `[start, end]`, matching the textbook presentation. The
//! main entry points are [`quicksort`], [`sort`] and [`Sorter`].
//!
//! # Preconditions
//!
//! The unchecked functions assume `end < seq.len()` whenever `start < end`.
//! They do not validate this; an out-of-range index panics inside the
//! [`Sequence`] implementation. Use [`try_quicksort`] or [`try_partition`] to
//! get a [`SortError`] instead.
//!
//! # Complexity
//!
//! O(n log n) on average, O(n^2) time and O(n) recursion depth when the pivot is
//! always the smallest or largest element of its range (sorted or reverse-sorted
//! input under [`PivotRule::Last`]).

use crate::core::{PivotRule, Sequence, SortError, SortStats};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, trace};

/// Partitions `seq[start..=end]` around its last element and returns the
/// pivot's final index.
///
/// On return, every element before the returned index is strictly less than
/// the pivot and every element after it is greater than or equal to it. The
/// two sides are not sorted. Elements outside `[start, end]` are untouched.
///
/// Requires `start <= end < seq.len()`.
///
/// # Examples
///
/// ```
/// use pivotsort::partition;
///
/// let mut data = vec![7, 2, 9, 1, 5];
/// let p = partition(&mut data, 0, 4);
///
/// assert_eq!(p, 2);
/// assert_eq!(data[p], 5);
/// assert!(data[..p].iter().all(|&x| x < 5));
/// assert!(data[p + 1..].iter().all(|&x| x >= 5));
/// ```
pub fn partition<S: Sequence + ?Sized>(seq: &mut S, start: usize, end: usize) -> usize {
    lomuto(seq, start, end, &mut SortStats::default())
}

/// Sorts `seq[start..=end]` in place in non-decreasing order.
///
/// A range with `start >= end` holds at most one element and is left as is.
/// The sort is not stable and allocates nothing.
///
/// # Examples
///
/// ```
/// use pivotsort::quicksort;
///
/// let mut data = [5, 2, 7, 10, 4, 8, 23, 14, 21, 1];
/// quicksort(&mut data, 0, 9);
///
/// assert_eq!(data, [1, 2, 4, 5, 7, 8, 10, 14, 21, 23]);
/// ```
pub fn quicksort<S: Sequence + ?Sized>(seq: &mut S, start: usize, end: usize) {
    Sorter::default().sort_range(seq, start, end);
}

/// Sorts the whole sequence in place.
///
/// Equivalent to `quicksort(seq, 0, seq.len() - 1)`, and a no-op on empty
/// input.
///
/// # Examples
///
/// ```
/// use pivotsort::sort;
///
/// let mut data = vec![3, 1, 3, 2, 3];
/// sort(&mut data);
///
/// assert_eq!(data, vec![1, 2, 3, 3, 3]);
/// ```
pub fn sort<S: Sequence + ?Sized>(seq: &mut S) {
    Sorter::default().sort(seq);
}

/// Checked variant of [`partition`].
///
/// Returns [`SortError::EmptyRange`] when `start > end` and
/// [`SortError::OutOfBounds`] when `end` is not a valid index.
pub fn try_partition<S: Sequence + ?Sized>(
    seq: &mut S,
    start: usize,
    end: usize,
) -> Result<usize, SortError> {
    if start > end {
        return Err(SortError::EmptyRange { start, end });
    }
    check_index(seq, end)?;
    Ok(partition(seq, start, end))
}

/// Checked variant of [`quicksort`].
///
/// Ranges with `start >= end` are accepted regardless of the sequence length,
/// since they are never indexed.
///
/// # Examples
///
/// ```
/// use pivotsort::{try_quicksort, SortError};
///
/// let mut data = vec![2, 1];
/// assert_eq!(
///     try_quicksort(&mut data, 0, 2),
///     Err(SortError::OutOfBounds { index: 2, len: 2 })
/// );
/// assert_eq!(data, vec![2, 1]);
/// ```
pub fn try_quicksort<S: Sequence + ?Sized>(
    seq: &mut S,
    start: usize,
    end: usize,
) -> Result<(), SortError> {
    Sorter::default().try_sort_range(seq, start, end).map(|_| ())
}

fn check_index<S: Sequence + ?Sized>(seq: &S, index: usize) -> Result<(), SortError> {
    let len = seq.len();
    if index >= len {
        return Err(SortError::OutOfBounds { index, len });
    }
    Ok(())
}

/// Configurable quicksort.
///
/// A `Sorter` picks the pivot rule and, for [`PivotRule::Random`], the seed.
/// Every sort call returns the [`SortStats`] collected during that call.
/// `Sorter::default()` is the plain last-element quicksort that [`quicksort`]
/// runs.
///
/// # Examples
///
/// ```
/// use pivotsort::{PivotRule, Sorter};
///
/// let mut data: Vec<i32> = (0..100).rev().collect();
/// let stats = Sorter::new().pivot(PivotRule::MedianOfThree).sort(&mut data);
///
/// assert!(data.windows(2).all(|w| w[0] <= w[1]));
/// assert!(stats.max_depth < 99);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Sorter {
    pivot: PivotRule,
    seed: Option<u64>,
}

impl Sorter {
    /// Creates a sorter using [`PivotRule::Last`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the pivot rule.
    pub fn pivot(mut self, rule: PivotRule) -> Self {
        self.pivot = rule;
        self
    }

    /// Seeds the generator used by [`PivotRule::Random`].
    ///
    /// Without a seed the generator is seeded from the operating system. Other
    /// rules ignore the seed.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// The configured pivot rule.
    pub fn pivot_rule(&self) -> PivotRule {
        self.pivot
    }

    /// Sorts the whole sequence.
    pub fn sort<S: Sequence + ?Sized>(&self, seq: &mut S) -> SortStats {
        match seq.len() {
            0 => SortStats::default(),
            len => self.sort_range(seq, 0, len - 1),
        }
    }

    /// Sorts `seq[start..=end]`. Same preconditions as [`quicksort`].
    pub fn sort_range<S: Sequence + ?Sized>(
        &self,
        seq: &mut S,
        start: usize,
        end: usize,
    ) -> SortStats {
        let mut pass = Pass {
            rule: self.pivot,
            rng: self.rng(),
            stats: SortStats::default(),
        };
        pass.quicksort(seq, start, end, 1);

        debug!(
            rule = %self.pivot,
            start,
            end,
            partitions = pass.stats.partitions,
            comparisons = pass.stats.comparisons,
            swaps = pass.stats.swaps,
            max_depth = pass.stats.max_depth,
            "sorted range"
        );
        pass.stats
    }

    /// Checked variant of [`Sorter::sort_range`].
    pub fn try_sort_range<S: Sequence + ?Sized>(
        &self,
        seq: &mut S,
        start: usize,
        end: usize,
    ) -> Result<SortStats, SortError> {
        if start < end {
            check_index(seq, end)?;
        }
        Ok(self.sort_range(seq, start, end))
    }

    fn rng(&self) -> Option<StdRng> {
        match (self.pivot, self.seed) {
            (PivotRule::Random, Some(seed)) => Some(StdRng::seed_from_u64(seed)),
            (PivotRule::Random, None) => Some(StdRng::from_os_rng()),
            _ => None,
        }
    }
}

/// State of one sort call.
struct Pass {
    rule: PivotRule,
    rng: Option<StdRng>,
    stats: SortStats,
}

impl Pass {
    fn quicksort<S: Sequence + ?Sized>(
        &mut self,
        seq: &mut S,
        start: usize,
        end: usize,
        depth: usize,
    ) {
        if start >= end {
            return;
        }

        self.select_pivot(seq, start, end);
        let p = lomuto(seq, start, end, &mut self.stats);
        self.stats.max_depth = self.stats.max_depth.max(depth);
        trace!(start, end, pivot_index = p, depth, "partitioned range");

        // Pivot at `start` leaves an empty left side.
        if p > start {
            self.quicksort(seq, start, p - 1, depth + 1);
        }
        self.quicksort(seq, p + 1, end, depth + 1);
    }

    /// Moves the element chosen by the pivot rule to `end`.
    fn select_pivot<S: Sequence + ?Sized>(&mut self, seq: &mut S, start: usize, end: usize) {
        let chosen = match self.rule {
            PivotRule::Last => return,
            PivotRule::First => start,
            PivotRule::MedianOfThree => {
                median_of_three(seq, start, start + (end - start) / 2, end)
            }
            PivotRule::Random => match self.rng.as_mut() {
                Some(rng) => rng.random_range(start..=end),
                None => return,
            },
        };

        if chosen != end {
            seq.swap(chosen, end);
            self.stats.swaps += 1;
        }
    }
}

/// Lomuto partition of `seq[start..=end]` with `seq[end]` as pivot.
#[inline]
fn lomuto<S: Sequence + ?Sized>(
    seq: &mut S,
    start: usize,
    end: usize,
    stats: &mut SortStats,
) -> usize {
    let pivot = seq.get(end);

    // Everything in [start, store) is known to be < pivot.
    let mut store = start;
    for j in start..end {
        stats.comparisons += 1;
        if seq.get(j) < pivot {
            seq.swap(store, j);
            stats.swaps += 1;
            store += 1;
        }
    }

    seq.swap(store, end);
    stats.swaps += 1;
    stats.partitions += 1;
    store
}

/// Index of the median of the values at `a`, `b` and `c`.
fn median_of_three<S: Sequence + ?Sized>(seq: &S, a: usize, b: usize, c: usize) -> usize {
    let (x, y, z) = (seq.get(a), seq.get(b), seq.get(c));
    if x < y {
        if y < z {
            b
        } else if x < z {
            c
        } else {
            a
        }
    } else if x < z {
        a
    } else if y < z {
        c
    } else {
        b
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn median_of_three_picks_middle_value() {
        let cases: [([i32; 3], i32); 8] = [
            ([1, 2, 3], 2),
            ([3, 2, 1], 2),
            ([2, 1, 3], 2),
            ([1, 3, 2], 2),
            ([2, 3, 1], 2),
            ([3, 1, 2], 2),
            ([1, 1, 0], 1),
            ([0, 1, 1], 1),
        ];
        for (values, expected) in cases {
            let idx = median_of_three(&values, 0, 1, 2);
            assert_eq!(values[idx], expected, "median of {:?}", values);
        }
    }

    #[test]
    fn lomuto_counts_every_scan_step() {
        let mut data = [4, 1, 3, 2];
        let mut stats = SortStats::default();
        let p = lomuto(&mut data, 0, 3, &mut stats);

        // 1 < 2 is the only element below the pivot.
        assert_eq!(p, 1);
        assert_eq!(data, [1, 2, 3, 4]);
        assert_eq!(stats.comparisons, 3);
        assert_eq!(stats.swaps, 2);
        assert_eq!(stats.partitions, 1);
    }

    #[test]
    fn sorted_input_is_worst_case_for_last_pivot() {
        let mut data: Vec<i32> = (0..10).collect();
        let stats = Sorter::new().sort(&mut data);

        assert_eq!(data, (0..10).collect::<Vec<_>>());
        assert_eq!(stats.partitions, 9);
        assert_eq!(stats.comparisons, 45);
        assert_eq!(stats.max_depth, 9);
    }

    #[test]
    fn trivial_ranges_do_no_work() {
        let mut data = [9];
        assert_eq!(Sorter::new().sort(&mut data), SortStats::default());

        let mut empty: [i32; 0] = [];
        assert_eq!(Sorter::new().sort(&mut empty), SortStats::default());
    }

    #[test]
    fn first_pivot_moves_head_to_end() {
        let mut data = [3, 5, 1];
        let mut pass = Pass {
            rule: PivotRule::First,
            rng: None,
            stats: SortStats::default(),
        };
        pass.select_pivot(&mut data, 0, 2);
        assert_eq!(data, [1, 5, 3]);
        assert_eq!(pass.stats.swaps, 1);
    }

    #[test]
    fn rng_only_built_for_random_rule() {
        assert!(Sorter::new().seed(1).rng().is_none());
        assert!(Sorter::new().pivot(PivotRule::Random).seed(1).rng().is_some());
    }
}
