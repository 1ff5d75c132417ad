use polars::prelude::*;

use crate::logging::log_event;

/// Indonesian month names in calendar order. Lookup is a lowercase substring
/// match so labels like "Harga Maret 2023" still resolve.
static MONTH_NAMES: [(&str, u32); 12] = [
    ("januari", 1),
    ("februari", 2),
    ("maret", 3),
    ("april", 4),
    ("mei", 5),
    ("juni", 6),
    ("juli", 7),
    ("agustus", 8),
    ("september", 9),
    ("oktober", 10),
    ("november", 11),
    ("desember", 12),
];

/// Ramadan and Eid months by (year, month), both months of each period
/// inclusive.
static RAMADAN_MONTHS: [(i32, u32); 8] = [
    (2020, 4),
    (2020, 5),
    (2021, 4),
    (2021, 5),
    (2022, 4),
    (2022, 5),
    (2023, 3),
    (2023, 4),
];

/// Resolve an Indonesian month name to its calendar number.
///
/// Matching is case-insensitive and accepts any text containing a month name;
/// the first table entry found in the input wins. Missing or unrecognized
/// input maps to `None`.
pub fn month_number(raw: Option<&str>) -> Option<u32> {
    let lowered = raw?.trim().to_lowercase();
    MONTH_NAMES
        .iter()
        .find(|(name, _)| lowered.contains(*name))
        .map(|(_, number)| *number)
}

/// Append an `is_ramadan` Int32 column flagging rows whose year-month falls in
/// a Ramadan/Eid period. Rows with null dates are flagged 0. The caller's
/// frame is left untouched.
pub fn with_ramadan_flag(frame: &DataFrame, date_column: &str) -> PolarsResult<DataFrame> {
    let dates = frame.column(date_column)?;
    let years = dates.year()?;
    let months = dates.month()?;

    let flags: Vec<i32> = years
        .into_iter()
        .zip(months.into_iter())
        .map(|pair| match pair {
            (Some(year), Some(month)) if RAMADAN_MONTHS.contains(&(year, month)) => 1,
            _ => 0,
        })
        .collect();

    let mut enriched = frame.clone();
    enriched.with_column(Series::new("is_ramadan", flags))?;

    log_event(
        file!(),
        "Calendar",
        "with_ramadan_flag",
        "calendar.ramadan",
        line!(),
        &format!("Flagged Ramadan months from {date_column}"),
        None,
    );

    Ok(enriched)
}
