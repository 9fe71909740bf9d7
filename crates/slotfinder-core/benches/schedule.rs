use chrono::{NaiveTime, Weekday};
use criterion::{criterion_group, criterion_main, Criterion};
use slotfinder_core::{schedule, Availability, Interval, SlotLength};
use std::hint::black_box;

fn time_at(minute_of_day: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(minute_of_day / 60, minute_of_day % 60, 0).unwrap()
}

/// 25 members, five weekdays, three staggered windows per member per day.
fn team() -> Availability {
    let days = [Weekday::Mon, Weekday::Tue, Weekday::Wed, Weekday::Thu, Weekday::Fri];
    let mut builder = Availability::builder();
    for member in 0..25u32 {
        for day in days {
            for block in 0..3u32 {
                let start = 8 * 60 + block * 180 + member % 7 * 5;
                let interval = Interval::new(time_at(start), time_at(start + 150)).unwrap();
                builder.add(&format!("member-{member}"), day, interval).unwrap();
            }
        }
    }
    builder.build()
}

fn bench_schedule(c: &mut Criterion) {
    let availability = team();
    let length = SlotLength::new(30).unwrap();

    c.bench_function("schedule_25_members_5_days", |b| {
        b.iter(|| schedule(black_box(&availability), black_box(length)))
    });
}

criterion_group!(benches, bench_schedule);
criterion_main!(benches);
