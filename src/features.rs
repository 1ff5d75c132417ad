use polars::prelude::*;

use crate::logging::log_event;

/// Append lagged copies of a value column, one per requested lag period.
///
/// The frame is sorted ascending by `time_column` first, with a stable sort so
/// equal timestamps keep their relative input order. Each column
/// `"{value_column}_lag{k}"` holds the value from `k` rows earlier in the
/// sorted frame, cast to Float64; the first `k` rows are null. Every lag is
/// taken from the same sorted base column, never chained off another lag. The
/// caller's frame is left untouched and the output height equals the input
/// height.
pub fn with_lag_features(
    frame: &DataFrame,
    value_column: &str,
    lags: &[usize],
    time_column: &str,
) -> PolarsResult<DataFrame> {
    assert!(
        lags.iter().all(|&lag| lag > 0),
        "lag periods must be positive"
    );

    let mut sorted = frame.sort([time_column], false, true)?;
    let base = sorted.column(value_column)?.cast(&DataType::Float64)?;

    for &lag in lags {
        let mut shifted = base.shift(lag as i64);
        shifted.rename(&format!("{value_column}_lag{lag}"));
        sorted.with_column(shifted)?;
    }

    log_event(
        file!(),
        "FeatureEngineering",
        "with_lag_features",
        "features.lags",
        line!(),
        &format!(
            "Computed {} lag column(s) for {value_column} ordered by {time_column}",
            lags.len()
        ),
        None,
    );

    Ok(sorted)
}
