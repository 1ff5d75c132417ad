use polars::prelude::*;
use rayon::prelude::*;
use serde::Serialize;
use thiserror::Error;

use crate::logging::log_event;

#[derive(Debug, Error)]
pub enum MetricsError {
    #[error("length mismatch between truth ({truth}) and predictions ({predictions})")]
    LengthMismatch { truth: usize, predictions: usize },
    #[error("metrics require at least one observation")]
    Empty,
    #[error("polars error: {0}")]
    Polars(#[from] PolarsError),
}

pub type MetricsResult<T> = Result<T, MetricsError>;

/// Forecast accuracy bundle computed over aligned truth/prediction series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ForecastMetrics {
    pub mae: f64,
    pub rmse: f64,
    /// Mean absolute percentage error over the rows whose truth is non-zero;
    /// `None` when every truth value is zero.
    pub mape: Option<f64>,
    pub r2: f64,
}

impl ForecastMetrics {
    /// Compute MAE, RMSE, MAPE, and R² in one pass over aligned series.
    ///
    /// Both slices must have the same non-zero length; a mismatch signals a
    /// caller bug (misaligned label/prediction arrays) and errors before any
    /// metric is computed.
    pub fn evaluate(y_true: &[f64], y_pred: &[f64]) -> MetricsResult<Self> {
        if y_true.len() != y_pred.len() {
            let error = MetricsError::LengthMismatch {
                truth: y_true.len(),
                predictions: y_pred.len(),
            };
            log_event(
                file!(),
                "ForecastMetrics",
                "evaluate",
                "metrics.evaluate",
                line!(),
                "Rejected misaligned truth/prediction series",
                Some(&error.to_string()),
            );
            return Err(error);
        }
        if y_true.is_empty() {
            return Err(MetricsError::Empty);
        }

        let count = y_true.len() as f64;

        let absolute_error_sum: f64 = y_true
            .par_iter()
            .zip(y_pred.par_iter())
            .map(|(truth, pred)| (truth - pred).abs())
            .sum();
        let mae = absolute_error_sum / count;

        let squared_error_sum: f64 = y_true
            .par_iter()
            .zip(y_pred.par_iter())
            .map(|(truth, pred)| {
                let diff = truth - pred;
                diff * diff
            })
            .sum();
        let rmse = (squared_error_sum / count).sqrt();

        let mape = percentage_error(y_true, y_pred);
        let r2 = coefficient_of_determination(y_true, y_pred);

        log_event(
            file!(),
            "ForecastMetrics",
            "evaluate",
            "metrics.evaluate",
            line!(),
            &format!("Evaluated forecast accuracy over {} observations", y_true.len()),
            None,
        );

        Ok(Self {
            mae,
            rmse,
            mape,
            r2,
        })
    }
}

/// Two-column ("metric", "value") report frame with rows mae, rmse, mape, r2.
/// MAPE is null when undefined.
pub fn evaluation_report(y_true: &[f64], y_pred: &[f64]) -> MetricsResult<DataFrame> {
    let metrics = ForecastMetrics::evaluate(y_true, y_pred)?;

    let names = Series::new("metric", &["mae", "rmse", "mape", "r2"]);
    let values = Series::new(
        "value",
        &[
            Some(metrics.mae),
            Some(metrics.rmse),
            metrics.mape,
            Some(metrics.r2),
        ],
    );
    let report = DataFrame::new(vec![names, values])?;

    log_event(
        file!(),
        "ForecastMetrics",
        "evaluation_report",
        "metrics.report",
        line!(),
        "Assembled metric report frame",
        None,
    );

    Ok(report)
}

fn percentage_error(y_true: &[f64], y_pred: &[f64]) -> Option<f64> {
    let mut ratio_sum = 0.0;
    let mut counted = 0usize;
    for (truth, pred) in y_true.iter().zip(y_pred.iter()) {
        if *truth != 0.0 {
            ratio_sum += ((truth - pred) / truth).abs();
            counted += 1;
        }
    }

    if counted == 0 {
        log_event(
            file!(),
            "ForecastMetrics",
            "percentage_error",
            "metrics.evaluate",
            line!(),
            "All truth values are zero; reporting MAPE as missing",
            None,
        );
        return None;
    }

    Some(ratio_sum / counted as f64 * 100.0)
}

/// R² about the truth mean. A constant truth series has zero total variance;
/// the scikit-learn convention applies there: 1.0 when the residuals are also
/// zero, 0.0 otherwise.
fn coefficient_of_determination(y_true: &[f64], y_pred: &[f64]) -> f64 {
    let count = y_true.len() as f64;
    let mean = y_true.iter().copied().sum::<f64>() / count;

    let total_squares: f64 = y_true
        .par_iter()
        .map(|truth| {
            let diff = truth - mean;
            diff * diff
        })
        .sum();
    let residual_squares: f64 = y_true
        .par_iter()
        .zip(y_pred.par_iter())
        .map(|(truth, pred)| {
            let diff = truth - pred;
            diff * diff
        })
        .sum();

    if total_squares <= f64::EPSILON {
        if residual_squares <= f64::EPSILON { 1.0 } else { 0.0 }
    } else {
        1.0 - residual_squares / total_squares
    }
}
