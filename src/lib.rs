//! inflacast provides data-preparation and evaluation utilities for Indonesian
//! food price forecasting pipelines: locale-aware currency cleaning, calendar
//! annotation, lag-feature derivation, and forecast accuracy metrics with
//! structured logging throughout.

pub mod calendar;
pub mod cleaning;
pub mod features;
pub mod logging;
pub mod metrics;

pub use calendar::{month_number, with_ramadan_flag};
pub use cleaning::{parse_currency, with_clean_currency};
pub use features::with_lag_features;
pub use metrics::{ForecastMetrics, MetricsError, MetricsResult, evaluation_report};

pub type Result<T> = anyhow::Result<T>;
