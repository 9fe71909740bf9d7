//! Read an availability table (CSV) into an [`Availability`].
//!
//! Expected header columns are `member_name`, `day_of_week`,
//! `start_time_24h` and `end_time_24h`; other columns are ignored. Any bad row
//! aborts the whole load.

use std::fs::File;
use std::io;
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::availability::{Availability, AvailabilityBuilder};
use crate::error::{Result, SlotError};
use crate::interval::Interval;
use crate::time::{parse_time, parse_weekday};

#[derive(Debug, Deserialize)]
struct Row {
    member_name: String,
    day_of_week: String,
    start_time_24h: String,
    end_time_24h: String,
}

/// Load availability from a CSV file on disk.
///
/// # Errors
/// `SlotError::Unreadable` if the file cannot be opened, otherwise as
/// [`load_availability_reader`].
pub fn load_availability_csv(path: impl AsRef<Path>) -> Result<Availability> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| SlotError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;
    let availability = load_availability_reader(file)?;
    info!(
        path = %path.display(),
        records = availability.record_count(),
        members = availability.persons().len(),
        "loaded availability"
    );
    Ok(availability)
}

/// Load availability from any CSV source.
///
/// # Errors
/// `SlotError::Csv` for structural problems or a missing column, and
/// `SlotError::Record` (with the 1-based line) for a bad time, weekday,
/// interval or empty member name.
pub fn load_availability_reader<R: io::Read>(reader: R) -> Result<Availability> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let headers = rdr.headers()?.clone();
    let mut record = csv::StringRecord::new();
    let mut builder = Availability::builder();

    while rdr.read_record(&mut record)? {
        let line = record.position().map_or(0, |p| p.line());
        let row: Row = record.deserialize(Some(&headers))?;
        add_row(&mut builder, &row).map_err(|source| SlotError::Record {
            line,
            source: Box::new(source),
        })?;
    }

    Ok(builder.build())
}

fn add_row(builder: &mut AvailabilityBuilder, row: &Row) -> Result<()> {
    let weekday = parse_weekday(&row.day_of_week)?;
    let start = parse_time(&row.start_time_24h)?;
    let end = parse_time(&row.end_time_24h)?;
    builder.add(&row.member_name, weekday, Interval::new(start, end)?)?;
    Ok(())
}
