//! Commit-activity heatmap: data pipeline, tiering and view.

pub mod calendar;
pub mod series;
pub mod tier;
mod view;

pub use series::{
    load_activity, ActivitySeries, ActivitySeriesBuilder, DailyIntensity, SeriesSource,
    DAYS_IN_SERIES, MAX_INTENSITY,
};
pub use tier::IntensityTier;
pub use view::ActivityHeatmap;
