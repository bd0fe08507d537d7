//! Core traits and types for Pivotsort.
//!
//! This module defines:
//! - [`Sequence`]: The trait a collection implements to be sorted in place.
//! - [`PivotRule`]: Which element of a range is used as the pivot.
//! - [`SortStats`]: Counters collected while sorting.
//! - [`SortError`]: Errors reported by the checked entry points.

use cuneiform::cuneiform;
use std::collections::VecDeque;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A mutable, fixed-length, zero-indexed sequence of integers.
///
/// The sorting routines only ever read single elements and exchange pairs of
/// elements, so any random-access container can be sorted in place by
/// implementing these three methods.
///
/// # Examples
///
/// Implementing for a custom struct:
///
/// ```
/// use pivotsort::core::Sequence;
///
/// struct Scores {
///     values: Vec<i32>,
/// }
///
/// impl Sequence for Scores {
///     fn len(&self) -> usize {
///         self.values.len()
///     }
///
///     fn get(&self, index: usize) -> i32 {
///         self.values[index]
///     }
///
///     fn swap(&mut self, a: usize, b: usize) {
///         self.values.swap(a, b);
///     }
/// }
/// ```
pub trait Sequence {
    /// Returns the number of elements in the sequence.
    fn len(&self) -> usize;

    /// Returns the element at `index`.
    ///
    /// Implementations may panic when `index >= len()`.
    fn get(&self, index: usize) -> i32;

    /// Exchanges the elements at `a` and `b`.
    fn swap(&mut self, a: usize, b: usize);

    /// Returns `true` if the sequence holds no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Sequence for [i32] {
    #[inline]
    fn len(&self) -> usize {
        <[i32]>::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> i32 {
        self[index]
    }

    #[inline]
    fn swap(&mut self, a: usize, b: usize) {
        <[i32]>::swap(self, a, b);
    }
}

// Fixed-size arrays, so `quicksort(&mut [3, 1, 2], 0, 2)` works without slicing.
impl<const N: usize> Sequence for [i32; N] {
    #[inline]
    fn len(&self) -> usize {
        N
    }

    #[inline]
    fn get(&self, index: usize) -> i32 {
        self[index]
    }

    #[inline]
    fn swap(&mut self, a: usize, b: usize) {
        self.as_mut_slice().swap(a, b);
    }
}

// Explicit Vec impl to improve ergonomics (avoiding .as_mut_slice()).
impl Sequence for Vec<i32> {
    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> i32 {
        self[index]
    }

    #[inline]
    fn swap(&mut self, a: usize, b: usize) {
        self.as_mut_slice().swap(a, b);
    }
}

// VecDeque is not contiguous but has O(1) random access and swap.
impl Sequence for VecDeque<i32> {
    #[inline]
    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> i32 {
        self[index]
    }

    #[inline]
    fn swap(&mut self, a: usize, b: usize) {
        VecDeque::swap(self, a, b);
    }
}

/// Strategy for choosing the pivot of a range.
///
/// Every rule moves its chosen element to the end of the range and then runs
/// the same last-element partition, so the rules only differ in which value
/// ends up as the pivot.
///
/// `Last` is the classic rule and degrades to quadratic time on sorted and
/// reverse-sorted input. The other rules are opt-in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PivotRule {
    /// The last element of the range.
    #[default]
    Last,
    /// The first element of the range.
    First,
    /// The median of the first, middle and last elements.
    MedianOfThree,
    /// A uniformly random element of the range.
    Random,
}

impl PivotRule {
    /// All rules, in declaration order.
    pub const ALL: [PivotRule; 4] = [
        PivotRule::Last,
        PivotRule::First,
        PivotRule::MedianOfThree,
        PivotRule::Random,
    ];

    /// Short lowercase name, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            PivotRule::Last => "last",
            PivotRule::First => "first",
            PivotRule::MedianOfThree => "median",
            PivotRule::Random => "random",
        }
    }
}

impl fmt::Display for PivotRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PivotRule {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "last" => Ok(PivotRule::Last),
            "first" => Ok(PivotRule::First),
            "median" | "median-of-three" => Ok(PivotRule::MedianOfThree),
            "random" => Ok(PivotRule::Random),
            _ => Err(SortError::UnknownPivotRule(s.to_string())),
        }
    }
}

/// Counters collected during one sort call.
///
/// Updated on every comparison and exchange, so the struct is kept on its own
/// cache line.
#[cuneiform]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SortStats {
    /// Number of partition passes.
    pub partitions: usize,
    /// Number of element-vs-pivot comparisons.
    pub comparisons: usize,
    /// Number of exchanges, including pivot selection and placement.
    pub swaps: usize,
    /// Deepest nesting of partition passes. Zero when nothing was partitioned.
    pub max_depth: usize,
}

impl fmt::Display for SortStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "partitions={} comparisons={} swaps={} max_depth={}",
            self.partitions, self.comparisons, self.swaps, self.max_depth
        )
    }
}

/// Errors reported by the checked entry points.
///
/// The unchecked functions never return these; they panic on out-of-range
/// indices instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SortError {
    #[error("index {index} is out of bounds for a sequence of length {len}")]
    OutOfBounds { index: usize, len: usize },

    #[error("cannot partition the empty range [{start}, {end}]")]
    EmptyRange { start: usize, end: usize },

    #[error("unknown pivot rule `{0}` (expected last, first, median or random)")]
    UnknownPivotRule(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_pivot_rules() {
        assert_eq!("last".parse::<PivotRule>(), Ok(PivotRule::Last));
        assert_eq!("FIRST".parse::<PivotRule>(), Ok(PivotRule::First));
        assert_eq!("median".parse::<PivotRule>(), Ok(PivotRule::MedianOfThree));
        assert_eq!(
            "median-of-three".parse::<PivotRule>(),
            Ok(PivotRule::MedianOfThree)
        );
        assert_eq!("Random".parse::<PivotRule>(), Ok(PivotRule::Random));
        assert_eq!(
            "middle".parse::<PivotRule>(),
            Err(SortError::UnknownPivotRule("middle".to_string()))
        );
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for rule in PivotRule::ALL {
            assert_eq!(rule.to_string().parse::<PivotRule>(), Ok(rule));
        }
    }

    #[test]
    fn std_containers_share_behaviour() {
        let mut deque: VecDeque<i32> = VecDeque::from(vec![3, 1, 2]);
        deque.push_front(9);
        Sequence::swap(&mut deque, 0, 3);
        assert_eq!(Sequence::len(&deque), 4);
        assert_eq!(Sequence::get(&deque, 0), 2);
        assert_eq!(Sequence::get(&deque, 3), 9);

        let mut array = [4, 5];
        Sequence::swap(&mut array, 0, 1);
        assert_eq!(array, [5, 4]);
        assert!(!Sequence::is_empty(&array));
        assert!(Sequence::is_empty(&Vec::<i32>::new()));
    }
}
