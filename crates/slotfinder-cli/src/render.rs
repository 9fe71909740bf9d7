//! Presentation of a [`ScheduleResult`] for people and for other programs.

use anyhow::{Context, Result};
use slotfinder_core::{weekday_name, ScheduleResult};

pub const NO_SLOTS: &str = "No common slots found.";

/// One block per weekday: the day name, then one indented `HH:MM - HH:MM`
/// line per slot, then a blank line.
pub fn text(result: &ScheduleResult) -> String {
    if result.is_empty() {
        return format!("{NO_SLOTS}\n");
    }

    let mut out = String::new();
    for day in result.iter() {
        out.push_str(weekday_name(day.weekday));
        out.push_str(":\n");
        for slot in &day.slots {
            out.push_str("  ");
            out.push_str(&slot.to_string());
            out.push('\n');
        }
        out.push('\n');
    }
    out
}

pub fn json(result: &ScheduleResult) -> Result<String> {
    let mut out =
        serde_json::to_string_pretty(result).context("Failed to serialize schedule as JSON")?;
    out.push('\n');
    Ok(out)
}
