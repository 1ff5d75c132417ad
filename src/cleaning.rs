use polars::prelude::*;

use crate::logging::log_event;

/// Currency marker stripped from raw price strings before numeric parsing.
/// Matching is case-sensitive, mirroring how the marker appears in source data.
const CURRENCY_MARKER: &str = "Rp";

/// Parse an Indonesian-locale currency string into a float.
///
/// In this locale `.` groups thousands and `,` marks the decimal point, so
/// separator removal must happen before decimal substitution: `"Rp 12.500,00"`
/// parses to 12500.0, and a bare `"12.500"` is twelve thousand five hundred,
/// never 12.5.
///
/// Missing input and any text the final parse rejects map to `None`; the
/// function never fails. Non-finite spellings (`inf`, `NaN`) also collapse to
/// `None` so only finite values or the missing marker flow downstream.
pub fn parse_currency(raw: Option<&str>) -> Option<f64> {
    let text = raw?;
    let stripped: String = text
        .replace(CURRENCY_MARKER, "")
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();
    let normalized = stripped.replace('.', "").replace(',', ".");

    normalized
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Append a Float64 column holding `parse_currency` applied to every row of a
/// raw text column. Rows that fail to parse become nulls instead of aborting
/// the batch.
pub fn with_clean_currency(
    frame: &DataFrame,
    column: &str,
    output_column: &str,
) -> PolarsResult<DataFrame> {
    let series = frame.column(column)?;
    let text = if series.dtype() != &DataType::Utf8 {
        series.cast(&DataType::Utf8)?
    } else {
        series.clone()
    };

    let parsed: Vec<Option<f64>> = text
        .utf8()
        .expect("series casted to utf8")
        .into_iter()
        .map(parse_currency)
        .collect();

    let mut enriched = frame.clone();
    enriched.with_column(Series::new(output_column, parsed))?;

    log_event(
        file!(),
        "Cleaning",
        "with_clean_currency",
        "cleaning.currency",
        line!(),
        &format!("Cleaned currency column {column} -> {output_column}"),
        None,
    );

    Ok(enriched)
}
