//! Time-of-day intervals and group intersection.
//!
//! An [`Interval`] always has `start < end`; it cannot be built otherwise.
//! [`intersect`] folds N people's interval lists into their common coverage by
//! pairwise comparison. Touching intervals (one ends exactly when the other
//! starts) share no time and produce nothing.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SlotError};
use crate::time::{format_time, minutes_of_day, serde_hhmm, TimeOfDay};

/// A same-day span of wall-clock time with `start < end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Interval {
    #[serde(with = "serde_hhmm")]
    start: TimeOfDay,
    #[serde(with = "serde_hhmm")]
    end: TimeOfDay,
}

impl Interval {
    /// Build an interval, rejecting zero-length and inverted spans.
    pub fn new(start: TimeOfDay, end: TimeOfDay) -> Result<Self> {
        if start >= end {
            return Err(SlotError::InvalidInterval {
                start: format_time(start),
                end: format_time(end),
            });
        }
        Ok(Self { start, end })
    }

    /// Caller guarantees `start < end`.
    pub(crate) fn from_ordered(start: TimeOfDay, end: TimeOfDay) -> Self {
        debug_assert!(start < end);
        Self { start, end }
    }

    pub fn start(&self) -> TimeOfDay {
        self.start
    }

    pub fn end(&self) -> TimeOfDay {
        self.end
    }

    pub fn duration_minutes(&self) -> i64 {
        i64::from(minutes_of_day(self.end)) - i64::from(minutes_of_day(self.start))
    }

    /// The shared part of two intervals, if it has positive length.
    pub fn overlap(&self, other: &Interval) -> Option<Interval> {
        let start = self.start.max(other.start);
        let end = self.end.min(other.end);
        (start < end).then_some(Interval { start, end })
    }

    pub fn contains(&self, other: &Interval) -> bool {
        self.start <= other.start && other.end <= self.end
    }
}

impl<'de> Deserialize<'de> for Interval {
    fn deserialize<D: serde::Deserializer<'de>>(d: D) -> std::result::Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Raw {
            #[serde(with = "serde_hhmm")]
            start: TimeOfDay,
            #[serde(with = "serde_hhmm")]
            end: TimeOfDay,
        }
        let raw = Raw::deserialize(d)?;
        Interval::new(raw.start, raw.end).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", format_time(self.start), format_time(self.end))
    }
}

/// Intersect the interval lists of several people for one day.
///
/// The first list seeds the running common set. Each following list replaces
/// it with every positive-length overlap between a common interval and one of
/// that person's intervals. Once the common set is empty the remaining people
/// are not examined.
///
/// Input lists may be unsorted or self-overlapping. The output is neither
/// sorted nor deduplicated; with three or more people it can contain
/// intervals that overlap each other (see [`merge_overlapping`]).
pub fn intersect<L: AsRef<[Interval]>>(lists: &[L]) -> Vec<Interval> {
    let Some((first, rest)) = lists.split_first() else {
        return Vec::new();
    };

    let mut common: Vec<Interval> = first.as_ref().to_vec();
    for person in rest {
        let person = person.as_ref();
        common = common
            .iter()
            .flat_map(move |c| person.iter().filter_map(move |p| c.overlap(p)))
            .collect();
        if common.is_empty() {
            return common;
        }
    }
    common
}

/// Sort intervals and coalesce the ones that strictly overlap.
///
/// Touching intervals stay separate. Returns a sorted, pairwise
/// non-overlapping list.
pub fn merge_overlapping(mut intervals: Vec<Interval>) -> Vec<Interval> {
    intervals.sort_by_key(|i| (i.start, i.end));

    let mut merged: Vec<Interval> = Vec::with_capacity(intervals.len());
    for interval in intervals {
        if let Some(last) = merged.last_mut() {
            if interval.start < last.end {
                last.end = last.end.max(interval.end);
                continue;
            }
        }
        merged.push(interval);
    }
    merged
}
