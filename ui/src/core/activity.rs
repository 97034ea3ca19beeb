//! Activity record model shared by the table, statistics, and sort comparators.

use serde::{Deserialize, Serialize};
use time::{macros::format_description, Date, PrimitiveDateTime};

/// One running activity as exported in the embedded feed.
///
/// `start_date_local` is already wall-clock local time; no timezone
/// conversion happens anywhere in this crate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub run_id: i64,
    pub name: String,
    /// `YYYY-MM-DD HH:MM:SS`, local time.
    pub start_date_local: String,
    /// Meters.
    pub distance: f64,
    /// Meters per second. Zero and non-finite values flow into derived
    /// numbers untouched; the display layer degrades instead of clamping.
    pub average_speed: f64,
    /// Beats per minute; `None` means the device reported nothing.
    #[serde(default)]
    pub average_heartrate: Option<f64>,
}

impl Activity {
    /// Parsed local start stamp, `None` when malformed.
    pub fn start_datetime(&self) -> Option<PrimitiveDateTime> {
        PrimitiveDateTime::parse(
            &self.start_date_local,
            &format_description!("[year]-[month]-[day] [hour]:[minute]:[second]"),
        )
        .ok()
    }

    pub fn start_date(&self) -> Option<Date> {
        self.start_datetime().map(|stamp| stamp.date())
    }

    /// Calendar month of the local start stamp, 0-11.
    pub fn month_index(&self) -> Option<u8> {
        self.start_date().map(|date| date.month() as u8 - 1)
    }

    pub fn year(&self) -> Option<i32> {
        self.start_date().map(Date::year)
    }

    /// Date part of the local stamp, used for distinct-day counting and
    /// the date cell. Falls back to the whole stamp when there is no
    /// time part.
    pub fn date_key(&self) -> &str {
        self.start_date_local
            .split_once(' ')
            .map(|(date, _)| date)
            .unwrap_or(&self.start_date_local)
    }

    /// Implied moving time in seconds (`distance / average_speed`).
    /// Zero speed yields the IEEE-754 result: infinity, or NaN for 0/0.
    pub fn duration_secs(&self) -> f64 {
        self.distance / self.average_speed
    }

    /// Heart rate as reported. The feed's producers write non-positive
    /// readings for sensorless runs, so those count as "no data" too.
    pub fn heartrate(&self) -> Option<f64> {
        self.average_heartrate.filter(|bpm| *bpm > 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(stamp: &str, distance: f64, speed: f64) -> Activity {
        Activity {
            run_id: 1,
            name: "Morning Run".into(),
            start_date_local: stamp.into(),
            distance,
            average_speed: speed,
            average_heartrate: None,
        }
    }

    #[test]
    fn parses_month_and_year_from_local_stamp() {
        let run = run("2024-03-02 08:15:31", 5000.0, 2.5);
        assert_eq!(run.month_index(), Some(2));
        assert_eq!(run.year(), Some(2024));
        assert_eq!(run.date_key(), "2024-03-02");
    }

    #[test]
    fn malformed_stamp_has_no_calendar_parts() {
        let run = run("not a date", 5000.0, 2.5);
        assert_eq!(run.start_datetime(), None);
        assert_eq!(run.month_index(), None);
        assert_eq!(run.year(), None);
        assert_eq!(run.date_key(), "not a date");
    }

    #[test]
    fn duration_propagates_ieee_results() {
        assert_eq!(run("2024-03-02 08:15:31", 5000.0, 2.5).duration_secs(), 2000.0);
        assert!(run("2024-03-02 08:15:31", 500.0, 0.0)
            .duration_secs()
            .is_infinite());
        assert!(run("2024-03-02 08:15:31", 0.0, 0.0)
            .duration_secs()
            .is_nan());
    }

    #[test]
    fn non_positive_heartrate_counts_as_missing() {
        let mut with_sensor = run("2024-03-02 08:15:31", 5000.0, 2.5);
        with_sensor.average_heartrate = Some(152.3);
        assert_eq!(with_sensor.heartrate(), Some(152.3));

        let mut zeroed = with_sensor.clone();
        zeroed.average_heartrate = Some(0.0);
        assert_eq!(zeroed.heartrate(), None);

        let mut absent = with_sensor;
        absent.average_heartrate = None;
        assert_eq!(absent.heartrate(), None);
    }
}
