//! Per-person, per-weekday availability built once and then read-only.
//!
//! [`AvailabilityBuilder`] accumulates rows as they are loaded; rows for the
//! same (person, weekday) append to that person's interval list rather than
//! replacing it. [`Availability`] is the frozen result consumed by the
//! scheduler.

use std::collections::HashMap;

use chrono::Weekday;

use crate::error::{Result, SlotError};
use crate::interval::Interval;
use crate::time::WEEKDAYS;

/// Accumulates availability rows into an [`Availability`].
#[derive(Debug, Default)]
pub struct AvailabilityBuilder {
    persons: Vec<String>,
    index: HashMap<String, usize>,
    entries: HashMap<(usize, Weekday), Vec<Interval>>,
    records: usize,
}

impl AvailabilityBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `person` is free during `interval` on `weekday`.
    ///
    /// The person name is trimmed; names are otherwise matched exactly.
    ///
    /// # Errors
    /// Returns `SlotError::EmptyPerson` if the name is blank.
    pub fn add(&mut self, person: &str, weekday: Weekday, interval: Interval) -> Result<&mut Self> {
        let person = person.trim();
        if person.is_empty() {
            return Err(SlotError::EmptyPerson);
        }

        let id = match self.index.get(person) {
            Some(&id) => id,
            None => {
                let id = self.persons.len();
                self.persons.push(person.to_string());
                self.index.insert(person.to_string(), id);
                id
            }
        };
        self.entries.entry((id, weekday)).or_default().push(interval);
        self.records += 1;
        Ok(self)
    }

    pub fn build(self) -> Availability {
        let weekdays = WEEKDAYS
            .into_iter()
            .filter(|day| self.entries.keys().any(|(_, d)| d == day))
            .collect();
        Availability {
            persons: self.persons,
            index: self.index,
            weekdays,
            entries: self.entries,
            records: self.records,
        }
    }
}

/// Immutable mapping from (person, weekday) to that person's intervals.
#[derive(Debug, Clone, Default)]
pub struct Availability {
    persons: Vec<String>,
    index: HashMap<String, usize>,
    weekdays: Vec<Weekday>,
    entries: HashMap<(usize, Weekday), Vec<Interval>>,
    records: usize,
}

impl Availability {
    pub fn builder() -> AvailabilityBuilder {
        AvailabilityBuilder::new()
    }

    /// Distinct persons in the order they were first seen.
    pub fn persons(&self) -> &[String] {
        &self.persons
    }

    /// Distinct weekdays with at least one row, Monday first.
    pub fn weekdays(&self) -> &[Weekday] {
        &self.weekdays
    }

    /// A person's intervals on a weekday, unsorted and possibly overlapping.
    ///
    /// The name is trimmed as in [`AvailabilityBuilder::add`]. `None` means
    /// the person has no row at all for that day.
    pub fn intervals(&self, person: &str, weekday: Weekday) -> Option<&[Interval]> {
        let id = *self.index.get(person.trim())?;
        self.entries.get(&(id, weekday)).map(Vec::as_slice)
    }

    /// Number of rows accumulated.
    pub fn record_count(&self) -> usize {
        self.records
    }

    pub fn is_empty(&self) -> bool {
        self.records == 0
    }
}
