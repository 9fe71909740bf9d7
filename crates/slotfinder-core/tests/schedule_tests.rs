//! End-to-end tests for the per-weekday scheduler.

use chrono::Weekday;
use slotfinder_core::{
    schedule, schedule_with, parse_time, Availability, Interval, OverlapPolicy, ScheduleOptions,
    Slot, SlotLength,
};

// ── Helpers ─────────────────────────────────────────────────────────────────

fn iv(start: &str, end: &str) -> Interval {
    Interval::new(parse_time(start).unwrap(), parse_time(end).unwrap()).unwrap()
}

fn minutes(m: i64) -> SlotLength {
    SlotLength::new(m).unwrap()
}

fn build(rows: &[(&str, Weekday, &str, &str)]) -> Availability {
    let mut builder = Availability::builder();
    for (person, day, start, end) in rows {
        builder.add(person, *day, iv(start, end)).unwrap();
    }
    builder.build()
}

fn render(slots: &[Slot]) -> Vec<String> {
    slots.iter().map(|s| s.to_string()).collect()
}

// ── All-or-nothing day policy ───────────────────────────────────────────────

#[test]
fn day_missing_one_member_is_omitted() {
    let availability = build(&[
        ("A", Weekday::Mon, "09:00", "11:00"),
        ("B", Weekday::Mon, "09:00", "11:00"),
        ("C", Weekday::Mon, "09:00", "11:00"),
        ("A", Weekday::Tue, "09:00", "10:00"),
        ("B", Weekday::Tue, "09:00", "10:00"),
    ]);

    let result = schedule(&availability, minutes(60));

    assert_eq!(render(result.get(Weekday::Mon).unwrap()), vec!["09:00 - 10:00", "10:00 - 11:00"]);
    assert!(result.get(Weekday::Tue).is_none());
    assert_eq!(result.days.len(), 1);
}

#[test]
fn no_overlap_on_any_day_yields_empty_result() {
    let availability = build(&[
        ("A", Weekday::Mon, "09:00", "10:00"),
        ("B", Weekday::Mon, "10:00", "11:00"),
        ("A", Weekday::Wed, "13:00", "14:00"),
        ("B", Weekday::Wed, "15:00", "16:00"),
    ]);

    let result = schedule(&availability, minutes(30));
    assert!(result.is_empty());
    assert_eq!(result.total_slots(), 0);
}

#[test]
fn overlap_shorter_than_length_omits_the_day() {
    let availability = build(&[
        ("A", Weekday::Thu, "09:00", "10:00"),
        ("B", Weekday::Thu, "09:40", "11:00"),
    ]);
    assert!(schedule(&availability, minutes(30)).is_empty());
    assert_eq!(schedule(&availability, minutes(20)).total_slots(), 1);
}

#[test]
fn empty_availability_yields_empty_result() {
    let availability = Availability::builder().build();
    assert!(schedule(&availability, minutes(30)).is_empty());
}

#[test]
fn single_member_gets_their_own_availability_tiled() {
    let availability = build(&[("Solo", Weekday::Sat, "10:00", "11:00")]);
    let result = schedule(&availability, minutes(30));
    assert_eq!(render(result.get(Weekday::Sat).unwrap()), vec!["10:00 - 10:30", "10:30 - 11:00"]);
}

// ── Ordering ────────────────────────────────────────────────────────────────

#[test]
fn days_are_reported_monday_first() {
    let availability = build(&[
        ("A", Weekday::Fri, "09:00", "10:00"),
        ("A", Weekday::Mon, "09:00", "10:00"),
        ("A", Weekday::Sun, "09:00", "10:00"),
        ("A", Weekday::Wed, "09:00", "10:00"),
    ]);
    let days: Vec<Weekday> = schedule(&availability, minutes(60))
        .iter()
        .map(|d| d.weekday)
        .collect();
    assert_eq!(days, vec![Weekday::Mon, Weekday::Wed, Weekday::Fri, Weekday::Sun]);
}

#[test]
fn slots_within_a_day_are_chronological() {
    let availability = build(&[
        ("A", Weekday::Mon, "15:00", "16:00"),
        ("A", Weekday::Mon, "09:00", "10:00"),
        ("B", Weekday::Mon, "08:00", "17:00"),
    ]);
    let result = schedule(&availability, minutes(30));
    assert_eq!(
        render(result.get(Weekday::Mon).unwrap()),
        vec!["09:00 - 09:30", "09:30 - 10:00", "15:00 - 15:30", "15:30 - 16:00"]
    );
}

#[test]
fn result_is_independent_of_row_order() {
    let rows = [
        ("A", Weekday::Mon, "09:00", "12:00"),
        ("B", Weekday::Mon, "10:00", "13:00"),
        ("A", Weekday::Tue, "13:00", "15:00"),
        ("B", Weekday::Tue, "14:00", "16:00"),
        ("C", Weekday::Mon, "08:00", "11:30"),
        ("C", Weekday::Tue, "09:00", "17:00"),
    ];
    let mut reversed = rows;
    reversed.reverse();

    let forward = schedule(&build(&rows), minutes(30));
    let backward = schedule(&build(&reversed), minutes(30));
    assert_eq!(forward, backward);
    assert_eq!(
        render(forward.get(Weekday::Mon).unwrap()),
        vec!["10:00 - 10:30", "10:30 - 11:00", "11:00 - 11:30"]
    );
    assert_eq!(render(forward.get(Weekday::Tue).unwrap()), vec!["14:00 - 14:30", "14:30 - 15:00"]);
}

// ── Overlap policy ──────────────────────────────────────────────────────────

fn overlapping_common_set() -> Availability {
    // A's two intervals overlap each other, so the common set keeps both
    // 09:00-10:30 and 10:00-11:00.
    build(&[
        ("A", Weekday::Mon, "09:00", "10:30"),
        ("A", Weekday::Mon, "10:00", "11:00"),
        ("B", Weekday::Mon, "09:00", "11:00"),
        ("C", Weekday::Mon, "08:00", "12:00"),
    ])
}

#[test]
fn preserve_policy_tiles_overlapping_intervals_independently() {
    let result = schedule(&overlapping_common_set(), minutes(30));
    assert_eq!(
        render(result.get(Weekday::Mon).unwrap()),
        vec![
            "09:00 - 09:30",
            "09:30 - 10:00",
            "10:00 - 10:30",
            "10:00 - 10:30",
            "10:30 - 11:00",
        ]
    );
}

#[test]
fn merge_policy_offers_each_minute_once() {
    let options = ScheduleOptions {
        overlap: OverlapPolicy::Merge,
    };
    let result = schedule_with(&overlapping_common_set(), minutes(30), &options);
    assert_eq!(
        render(result.get(Weekday::Mon).unwrap()),
        vec!["09:00 - 09:30", "09:30 - 10:00", "10:00 - 10:30", "10:30 - 11:00"]
    );
}

#[test]
fn merge_policy_can_gain_slots_across_a_seam() {
    let options = ScheduleOptions {
        overlap: OverlapPolicy::Merge,
    };
    let preserved = schedule(&overlapping_common_set(), minutes(120));
    let merged = schedule_with(&overlapping_common_set(), minutes(120), &options);
    assert!(preserved.is_empty());
    assert_eq!(render(merged.get(Weekday::Mon).unwrap()), vec!["09:00 - 11:00"]);
}

// ── Serialization ───────────────────────────────────────────────────────────

#[test]
fn result_serializes_with_weekday_names_and_hhmm() {
    let availability = build(&[("A", Weekday::Tue, "09:00", "10:00")]);
    let result = schedule(&availability, minutes(60));
    let json = serde_json::to_string(&result).unwrap();
    assert_eq!(
        json,
        r#"{"days":[{"weekday":"Tuesday","slots":[{"start":"09:00","end":"10:00"}]}]}"#
    );
}

#[test]
fn options_default_to_preserve() {
    let options: ScheduleOptions = serde_json::from_str("{}").unwrap();
    assert_eq!(options.overlap, OverlapPolicy::Preserve);
    let merge: ScheduleOptions = serde_json::from_str(r#"{"overlap":"merge"}"#).unwrap();
    assert_eq!(merge.overlap, OverlapPolicy::Merge);
}
