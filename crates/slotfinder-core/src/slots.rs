//! Tile common intervals into fixed-length bookable slots.

use std::fmt;

use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SlotError};
use crate::interval::Interval;
use crate::time::{format_time, serde_hhmm, TimeOfDay};

/// Requested meeting length in whole minutes. Always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct SlotLength(u32);

impl SlotLength {
    /// Validate a meeting length.
    ///
    /// # Errors
    /// Returns `SlotError::InvalidDuration` for zero or negative minutes, or
    /// for values too large to represent.
    pub fn new(minutes: i64) -> Result<Self> {
        match u32::try_from(minutes) {
            Ok(m) if m > 0 => Ok(Self(m)),
            _ => Err(SlotError::InvalidDuration(minutes)),
        }
    }

    pub fn minutes(self) -> u32 {
        self.0
    }

    fn as_duration(self) -> Duration {
        Duration::minutes(i64::from(self.0))
    }
}

impl TryFrom<i64> for SlotLength {
    type Error = SlotError;

    fn try_from(minutes: i64) -> Result<Self> {
        SlotLength::new(minutes)
    }
}

impl From<SlotLength> for i64 {
    fn from(length: SlotLength) -> i64 {
        i64::from(length.0)
    }
}

/// One bookable meeting option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Slot {
    #[serde(with = "serde_hhmm")]
    start: TimeOfDay,
    #[serde(with = "serde_hhmm")]
    end: TimeOfDay,
}

impl Slot {
    /// The slot of `length` beginning at `start`, or `None` if it would run
    /// past midnight.
    pub fn starting_at(start: TimeOfDay, length: SlotLength) -> Option<Slot> {
        let (end, wrapped_secs) = start.overflowing_add_signed(length.as_duration());
        (wrapped_secs == 0 && end > start).then_some(Slot { start, end })
    }

    pub fn start(&self) -> TimeOfDay {
        self.start
    }

    pub fn end(&self) -> TimeOfDay {
        self.end
    }

    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }

    pub fn as_interval(&self) -> Interval {
        Interval::from_ordered(self.start, self.end)
    }
}

impl<'de> Deserialize<'de> for Slot {
    fn deserialize<D: serde::Deserializer<'de>>(d: D) -> std::result::Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Raw {
            #[serde(with = "serde_hhmm")]
            start: TimeOfDay,
            #[serde(with = "serde_hhmm")]
            end: TimeOfDay,
        }
        let raw = Raw::deserialize(d)?;
        let interval = Interval::new(raw.start, raw.end).map_err(serde::de::Error::custom)?;
        Ok(Slot {
            start: interval.start(),
            end: interval.end(),
        })
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", format_time(self.start), format_time(self.end))
    }
}

/// Cut each interval into back-to-back slots of exactly `length`.
///
/// Intervals are handled independently and in the given order; within one
/// interval slots are chronological and contiguous. A remainder shorter than
/// `length` at the end of an interval is dropped.
pub fn generate_slots(intervals: &[Interval], length: SlotLength) -> Vec<Slot> {
    let mut slots = Vec::new();
    for interval in intervals {
        let mut cursor = interval.start();
        while let Some(slot) = Slot::starting_at(cursor, length) {
            if slot.end > interval.end() {
                break;
            }
            slots.push(slot);
            cursor = slot.end;
        }
    }
    slots
}
