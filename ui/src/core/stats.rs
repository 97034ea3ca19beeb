//! Aggregate statistics over the filtered subset of a year's runs.

use std::collections::HashSet;

use super::activity::Activity;

/// Derived totals for the records currently visible.
///
/// All floating-point fields are plain arithmetic results. NaN and
/// infinity propagate unmasked so the display layer can degrade a single
/// line instead of hiding bad feed data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthStats {
    /// Number of runs in the subset.
    pub total: usize,
    /// Distinct calendar dates with at least one run.
    pub active_days: usize,
    /// Meters, summed without rounding.
    pub distance: f64,
    /// Implied moving seconds, summed per record as distance over speed.
    pub duration: f64,
    /// Whole-subset ratio of distance to duration, not a mean of the
    /// per-record speeds.
    pub speed: f64,
    /// Duration-weighted mean over the records that report heart rate;
    /// NaN when none do.
    pub heartrate: f64,
}

impl MonthStats {
    pub fn from_runs(runs: &[Activity]) -> Self {
        let total = runs.len();
        let distance: f64 = runs.iter().map(|run| run.distance).sum();
        let duration: f64 = runs.iter().map(Activity::duration_secs).sum();
        let speed = distance / duration;

        let active_days = runs
            .iter()
            .map(Activity::date_key)
            .collect::<HashSet<_>>()
            .len();

        let mut weighted_bpm = 0.0;
        let mut bpm_secs = 0.0;
        for run in runs {
            if let Some(bpm) = run.heartrate() {
                let secs = run.duration_secs();
                weighted_bpm += bpm * secs;
                bpm_secs += secs;
            }
        }
        let heartrate = weighted_bpm / bpm_secs;

        Self {
            total,
            active_days,
            distance,
            duration,
            speed,
            heartrate,
        }
    }

    /// Whether the heart-rate line has anything real to show.
    pub fn has_heartrate(&self) -> bool {
        self.heartrate.is_finite()
    }
}
