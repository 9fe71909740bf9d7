//! Group scheduling: per weekday, intersect everyone's availability and tile
//! the common time into slots.
//!
//! A weekday is considered only when every person in the data set has at
//! least one interval on it. A day where someone has no row at all is skipped
//! even if everyone else overlaps.

use std::path::Path;

use chrono::Weekday;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::availability::Availability;
use crate::error::Result;
use crate::interval::{self, Interval};
use crate::loader;
use crate::slots::{self, Slot, SlotLength};
use crate::time::{serde_hhmm, weekday_name};

/// How overlapping intervals in a day's common set are treated before tiling.
///
/// With three or more people the pairwise intersection can yield common
/// intervals that overlap one another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverlapPolicy {
    /// Tile every common interval independently. Overlapping common intervals
    /// can then produce slots covering the same minutes, including exact
    /// duplicates.
    #[default]
    Preserve,
    /// Coalesce overlapping common intervals first, so no minute is offered twice.
    Merge,
}

/// Options for [`schedule_with`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScheduleOptions {
    pub overlap: OverlapPolicy,
}

/// Slots found for one weekday, in chronological order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySchedule {
    #[serde(
        serialize_with = "serde_hhmm::serialize_weekday",
        deserialize_with = "serde_hhmm::deserialize_weekday"
    )]
    pub weekday: Weekday,
    pub slots: Vec<Slot>,
}

/// Result of a scheduling run. Only weekdays with at least one slot appear,
/// Monday first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleResult {
    pub days: Vec<DaySchedule>,
}

impl ScheduleResult {
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn get(&self, weekday: Weekday) -> Option<&[Slot]> {
        self.days
            .iter()
            .find(|d| d.weekday == weekday)
            .map(|d| d.slots.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = &DaySchedule> {
        self.days.iter()
    }

    pub fn total_slots(&self) -> usize {
        self.days.iter().map(|d| d.slots.len()).sum()
    }
}

/// Find common slots using the default options.
pub fn schedule(availability: &Availability, length: SlotLength) -> ScheduleResult {
    schedule_with(availability, length, &ScheduleOptions::default())
}

/// Find, for every weekday, the slots of `length` during which all persons
/// are available.
pub fn schedule_with(
    availability: &Availability,
    length: SlotLength,
    options: &ScheduleOptions,
) -> ScheduleResult {
    let persons = availability.persons();
    let mut days = Vec::new();

    for &weekday in availability.weekdays() {
        let lists: Option<Vec<&[Interval]>> = persons
            .iter()
            .map(|person| availability.intervals(person, weekday))
            .collect();
        let Some(lists) = lists else {
            debug!(day = weekday_name(weekday), "skipping day: not every member has availability");
            continue;
        };

        let mut common = interval::intersect(&lists);
        if options.overlap == OverlapPolicy::Merge {
            common = interval::merge_overlapping(common);
        }
        debug!(day = weekday_name(weekday), common = common.len(), "intersected availability");

        let mut day_slots = slots::generate_slots(&common, length);
        if day_slots.is_empty() {
            continue;
        }
        day_slots.sort_by_key(|s| (s.start(), s.end()));
        days.push(DaySchedule {
            weekday,
            slots: day_slots,
        });
    }

    let result = ScheduleResult { days };
    info!(
        members = persons.len(),
        days = result.days.len(),
        slots = result.total_slots(),
        minutes = length.minutes(),
        "schedule computed"
    );
    result
}

/// Load an availability table and schedule it in one call.
///
/// The meeting length is validated before the file is touched.
///
/// # Errors
/// `SlotError::InvalidDuration` for a non-positive length, otherwise any
/// error from [`loader::load_availability_csv`].
pub fn find_meeting_slots(
    path: impl AsRef<Path>,
    minutes: i64,
    options: &ScheduleOptions,
) -> Result<ScheduleResult> {
    let length = SlotLength::new(minutes)?;
    let availability = loader::load_availability_csv(path)?;
    Ok(schedule_with(&availability, length, options))
}
