//! # slotfinder-core
//!
//! Find the times a whole group is free and slice them into bookable meetings.
//!
//! Each person's weekly availability is a list of same-day intervals per
//! weekday. For every weekday on which *all* persons have availability, the
//! crate intersects their intervals and tiles the common time into
//! back-to-back slots of a fixed length.
//!
//! ## Quick start
//!
//! ```rust
//! use slotfinder_core::{load_availability_reader, schedule, SlotLength};
//!
//! let csv = "member_name,day_of_week,start_time_24h,end_time_24h\n\
//!            Ana,monday,09:00,11:00\n\
//!            Ben,Monday,10:00,12:00\n";
//! let availability = load_availability_reader(csv.as_bytes()).unwrap();
//! let result = schedule(&availability, SlotLength::new(30).unwrap());
//!
//! let monday = result.get(chrono::Weekday::Mon).unwrap();
//! assert_eq!(monday[0].to_string(), "10:00 - 10:30");
//! assert_eq!(monday.len(), 2);
//! ```
//!
//! ## Modules
//!
//! - [`time`] — `HH:MM` and weekday parsing/formatting
//! - [`interval`] — `Interval` and N-way intersection
//! - [`slots`] — `SlotLength`, `Slot` and slot generation
//! - [`availability`] — per-person, per-weekday availability and its builder
//! - [`schedule`] — the per-weekday orchestrator and `ScheduleResult`
//! - [`loader`] — CSV availability tables
//! - [`error`] — Error types

pub mod availability;
pub mod error;
pub mod interval;
pub mod loader;
pub mod schedule;
pub mod slots;
pub mod time;

pub use availability::{Availability, AvailabilityBuilder};
pub use error::SlotError;
pub use interval::{intersect, merge_overlapping, Interval};
pub use loader::{load_availability_csv, load_availability_reader};
pub use schedule::{
    find_meeting_slots, schedule, schedule_with, DaySchedule, OverlapPolicy, ScheduleOptions,
    ScheduleResult,
};
pub use slots::{generate_slots, Slot, SlotLength};
pub use time::{format_time, parse_time, parse_weekday, weekday_name, TimeOfDay};
