//! A sparse set of integers stored as a union of closed intervals.
//!
//! [`IntegerSet`] is how spectrum selections are written down: "indices 3 through 5, 7 and 9",
//! "scans 102-104 and 107", "MS levels 2-". Inserting keeps the intervals sorted, disjoint and
//! separated by at least one integer, merging anything that overlaps or touches.
use std::fmt::Display;
use std::iter::FusedIterator;
use std::str::FromStr;

use thiserror::Error;

/// A closed interval `[begin, end]` of `i32`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Interval {
    pub begin: i32,
    pub end: i32,
}

impl Interval {
    /// # Panics
    /// If `begin > end`
    pub fn new(begin: i32, end: i32) -> Self {
        assert!(
            begin <= end,
            "Interval begin {begin} must not be greater than end {end}"
        );
        Self { begin, end }
    }

    pub fn single(value: i32) -> Self {
        Self {
            begin: value,
            end: value,
        }
    }

    /// An interval with no upper bound
    pub fn starting_at(begin: i32) -> Self {
        Self {
            begin,
            end: i32::MAX,
        }
    }

    pub fn contains(&self, value: i32) -> bool {
        self.begin <= value && value <= self.end
    }

    pub fn len(&self) -> usize {
        (self.end as i64 - self.begin as i64 + 1) as usize
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn iter(&self) -> std::ops::RangeInclusive<i32> {
        self.begin..=self.end
    }
}

impl Display for Interval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.begin == self.end {
            write!(f, "{}", self.begin)
        } else if self.end == i32::MAX {
            write!(f, "{}-", self.begin)
        } else {
            write!(f, "{}-{}", self.begin, self.end)
        }
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum IntegerSetParseError {
    #[error("Could not parse {0:?} as an integer or interval")]
    InvalidToken(String),
    #[error("Interval {0:?} has a begin greater than its end")]
    InvertedInterval(String),
}

/// An ordered union of disjoint, non-adjacent closed integer intervals
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IntegerSet {
    intervals: Vec<Interval>,
}

impl IntegerSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, value: i32) {
        self.insert_interval(Interval::single(value))
    }

    /// # Panics
    /// If `begin > end`
    pub fn insert_range(&mut self, begin: i32, end: i32) {
        self.insert_interval(Interval::new(begin, end))
    }

    pub fn insert_interval(&mut self, interval: Interval) {
        let Interval { mut begin, mut end } = interval;
        // Everything in `lo..hi` overlaps or is adjacent to the new interval
        let lo = self
            .intervals
            .partition_point(|iv| iv.end < begin.saturating_sub(1));
        let hi = self
            .intervals
            .partition_point(|iv| iv.begin <= end.saturating_add(1));
        if lo < hi {
            begin = begin.min(self.intervals[lo].begin);
            end = end.max(self.intervals[hi - 1].end);
        }
        self.intervals.splice(lo..hi, [Interval { begin, end }]);
    }

    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    pub fn clear(&mut self) {
        self.intervals.clear()
    }

    pub fn intervals(&self) -> &[Interval] {
        &self.intervals
    }

    pub fn contains(&self, value: i32) -> bool {
        let i = self.intervals.partition_point(|iv| iv.end < value);
        self.intervals
            .get(i)
            .is_some_and(|iv| iv.begin <= value)
    }

    /// `true` if every member is at least `bound`
    pub fn has_lower_bound(&self, bound: i32) -> bool {
        self.intervals.first().map_or(true, |iv| iv.begin >= bound)
    }

    /// `true` if every member is at most `bound`
    pub fn has_upper_bound(&self, bound: i32) -> bool {
        self.intervals.last().map_or(true, |iv| iv.end <= bound)
    }

    pub fn min(&self) -> Option<i32> {
        self.intervals.first().map(|iv| iv.begin)
    }

    pub fn max(&self) -> Option<i32> {
        self.intervals.last().map(|iv| iv.end)
    }

    /// The number of integers in the set
    pub fn size(&self) -> usize {
        self.intervals.iter().map(|iv| iv.len()).sum()
    }

    /// Lazily visit every member in ascending order
    pub fn iter(&self) -> IntegerSetIter<'_> {
        IntegerSetIter {
            intervals: &self.intervals,
            current: None,
        }
    }
}

impl<'a> IntoIterator for &'a IntegerSet {
    type Item = i32;
    type IntoIter = IntegerSetIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<i32> for IntegerSet {
    fn from_iter<T: IntoIterator<Item = i32>>(iter: T) -> Self {
        let mut this = Self::new();
        this.extend(iter);
        this
    }
}

impl Extend<i32> for IntegerSet {
    fn extend<T: IntoIterator<Item = i32>>(&mut self, iter: T) {
        for value in iter {
            self.insert(value)
        }
    }
}

impl From<Interval> for IntegerSet {
    fn from(value: Interval) -> Self {
        Self {
            intervals: vec![value],
        }
    }
}

impl Display for IntegerSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, iv) in self.intervals.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            iv.fmt(f)?;
        }
        Ok(())
    }
}

fn parse_interval(token: &str) -> Result<Interval, IntegerSetParseError> {
    let invalid = || IntegerSetParseError::InvalidToken(token.to_string());
    // A leading '-' is a sign, not a range separator
    let split_at = token
        .get(1..)
        .and_then(|rest| rest.find('-'))
        .map(|i| i + 1);
    match split_at {
        None => token.parse().map(Interval::single).map_err(|_| invalid()),
        Some(i) => {
            let begin: i32 = token[..i].parse().map_err(|_| invalid())?;
            let tail = &token[i + 1..];
            if tail.is_empty() {
                return Ok(Interval::starting_at(begin));
            }
            let end: i32 = tail.parse().map_err(|_| invalid())?;
            if begin > end {
                Err(IntegerSetParseError::InvertedInterval(token.to_string()))
            } else {
                Ok(Interval::new(begin, end))
            }
        }
    }
}

impl FromStr for IntegerSet {
    type Err = IntegerSetParseError;

    /// Parse a list like `"1-3,5 7-"` where tokens are separated by commas or whitespace,
    /// and a trailing `-` leaves the interval open-ended
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut this = Self::new();
        for token in s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|t| !t.is_empty())
        {
            this.insert_interval(parse_interval(token)?);
        }
        Ok(this)
    }
}

/// Walks an [`IntegerSet`] one interval at a time, never materializing its members
#[derive(Debug, Clone)]
pub struct IntegerSetIter<'a> {
    intervals: &'a [Interval],
    current: Option<i32>,
}

impl Iterator for IntegerSetIter<'_> {
    type Item = i32;

    fn next(&mut self) -> Option<Self::Item> {
        let (head, rest) = self.intervals.split_first()?;
        let value = self.current.unwrap_or(head.begin);
        if value >= head.end {
            self.intervals = rest;
            self.current = None;
        } else {
            self.current = Some(value + 1);
        }
        Some(value)
    }
}

impl FusedIterator for IntegerSetIter<'_> {}

#[cfg(test)]
mod test {
    use super::*;
    use std::collections::BTreeSet;

    fn assert_well_formed(set: &IntegerSet) {
        for pair in set.intervals().windows(2) {
            assert!(pair[0].begin <= pair[0].end);
            assert!(
                pair[0].end as i64 + 1 < pair[1].begin as i64,
                "{} and {} should have been merged",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn test_insert_merges() {
        let mut set = IntegerSet::new();
        assert!(set.is_empty());
        set.insert(1);
        set.insert(2);
        set.insert_range(0, 2);
        set.insert_range(0, 2);
        set.insert(4);
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![0, 1, 2, 4]);
        assert_eq!(set.intervals().len(), 2);

        set.insert_range(2, 4);
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![0, 1, 2, 3, 4]);
        assert_eq!(set.intervals(), &[Interval::new(0, 4)]);
        assert_well_formed(&set);
    }

    #[test]
    fn test_adjacent_merge() {
        let mut set = IntegerSet::new();
        set.insert_range(10, 12);
        set.insert_range(1, 3);
        set.insert_range(5, 7);
        assert_eq!(set.intervals().len(), 3);
        set.insert(4);
        assert_eq!(set.intervals().len(), 2);
        set.insert_range(8, 9);
        assert_eq!(set.intervals(), &[Interval::new(1, 12)]);
    }

    #[test]
    fn test_invariant_against_reference() {
        let mut set = IntegerSet::new();
        let mut reference = BTreeSet::new();
        let mut state: u32 = 0x2545F491;
        for _ in 0..500 {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            let begin = (state % 200) as i32 - 50;
            let width = ((state >> 8) % 6) as i32;
            set.insert_range(begin, begin + width);
            reference.extend(begin..=begin + width);
            assert_well_formed(&set);
        }
        let members: Vec<i32> = set.iter().collect();
        assert_eq!(members, reference.iter().copied().collect::<Vec<_>>());
        assert_eq!(set.size(), reference.len());
        for probe in -60..160 {
            assert_eq!(set.contains(probe), reference.contains(&probe));
        }
    }

    #[test]
    fn test_iteration_is_restartable() {
        let set: IntegerSet = [5, 3, 4, 9].into_iter().collect();
        let first: Vec<_> = set.iter().collect();
        let second: Vec<_> = (&set).into_iter().collect();
        assert_eq!(first, second);
        assert_eq!(first, vec![3, 4, 5, 9]);
    }

    #[test]
    fn test_bounds() {
        let set: IntegerSet = "3-5,7 9".parse().unwrap();
        assert!(set.has_lower_bound(3));
        assert!(!set.has_lower_bound(4));
        assert!(set.has_upper_bound(9));
        assert!(!set.has_upper_bound(8));
        assert_eq!(set.min(), Some(3));
        assert_eq!(set.max(), Some(9));
        assert!(IntegerSet::new().has_upper_bound(0));
    }

    #[test]
    fn test_parse_and_display() {
        let set: IntegerSet = "1-3, 5 7-".parse().unwrap();
        assert_eq!(set.to_string(), "1-3,5,7-");
        assert!(set.contains(1_000_000));
        assert!(!set.contains(6));
        assert_eq!(set.iter().take(6).collect::<Vec<_>>(), vec![1, 2, 3, 5, 7, 8]);

        let negative: IntegerSet = "-3--1 -7".parse().unwrap();
        assert_eq!(negative.iter().collect::<Vec<_>>(), vec![-7, -3, -2, -1]);

        assert_eq!(
            "5-2".parse::<IntegerSet>(),
            Err(IntegerSetParseError::InvertedInterval("5-2".into()))
        );
        assert!("a-b".parse::<IntegerSet>().is_err());
    }

    #[test]
    fn test_open_interval_iteration_terminates() {
        let set = IntegerSet::from(Interval::new(i32::MAX - 2, i32::MAX));
        assert_eq!(set.iter().count(), 3);
    }

    #[test]
    #[should_panic]
    fn test_inverted_interval_panics() {
        Interval::new(4, 1);
    }
}
