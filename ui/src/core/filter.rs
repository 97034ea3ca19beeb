//! Month filtering and tab availability for the run table.

use time::Date;

use super::activity::Activity;

/// Tab labels in tab-index order; index 12 is the whole-year tab.
pub const MONTH_TABS: [&str; 13] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec", "All",
];

/// Month restriction applied to a year's records. Exactly one filter is
/// active at a time; the default shows the whole year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MonthFilter {
    /// Calendar month index, 0-11.
    Month(u8),
    #[default]
    All,
}

impl MonthFilter {
    /// Maps a tab index to a filter. The tab strip is the only caller
    /// and only hands out indices below `MONTH_TABS.len()`.
    pub fn from_tab(index: usize) -> Self {
        debug_assert!(index < MONTH_TABS.len(), "month tab index out of range");
        if index == 12 {
            Self::All
        } else {
            Self::Month(index as u8)
        }
    }

    pub fn tab(self) -> usize {
        match self {
            Self::Month(month) => month as usize,
            Self::All => 12,
        }
    }

    pub fn label(self) -> &'static str {
        MONTH_TABS[self.tab()]
    }

    /// Whether a record's local start month matches this filter. Records
    /// with an unparseable stamp never match a specific month but always
    /// pass `All`.
    pub fn admits(self, run: &Activity) -> bool {
        match self {
            Self::All => true,
            Self::Month(month) => run.month_index() == Some(month),
        }
    }

    /// Tab availability: `All` always, any month of a strictly past
    /// year, and months up to the current one within the current year.
    /// Months of a future year are all unavailable.
    pub fn available(self, year: i32, today: Date) -> bool {
        match self {
            Self::All => true,
            Self::Month(month) => {
                year < today.year()
                    || (year == today.year() && month <= today.month() as u8 - 1)
            }
        }
    }
}

/// The records admitted by `filter`, in their original order.
pub fn runs_in_month(runs: &[Activity], filter: MonthFilter) -> Vec<Activity> {
    runs.iter().filter(|run| filter.admits(run)).cloned().collect()
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use super::*;

    fn run(stamp: &str) -> Activity {
        Activity {
            run_id: 7,
            name: "Morning Run".into(),
            start_date_local: stamp.into(),
            distance: 5000.0,
            average_speed: 2.5,
            average_heartrate: None,
        }
    }

    #[test]
    fn tab_indices_round_trip() {
        for index in 0..MONTH_TABS.len() {
            assert_eq!(MonthFilter::from_tab(index).tab(), index);
        }
        assert_eq!(MonthFilter::from_tab(12), MonthFilter::All);
        assert_eq!(MonthFilter::from_tab(0), MonthFilter::Month(0));
        assert_eq!(MonthFilter::default(), MonthFilter::All);
    }

    #[test]
    fn labels_follow_the_tab_strip() {
        assert_eq!(MonthFilter::Month(0).label(), "Jan");
        assert_eq!(MonthFilter::Month(11).label(), "Dec");
        assert_eq!(MonthFilter::All.label(), "All");
    }

    #[test]
    fn month_filter_keeps_only_matching_records() {
        let runs = vec![
            run("2024-03-02 08:15:31"),
            run("2024-04-01 07:02:11"),
            run("2024-03-30 18:40:00"),
        ];
        let march = runs_in_month(&runs, MonthFilter::Month(2));
        assert_eq!(march.len(), 2);
        assert_eq!(march[0].start_date_local, "2024-03-02 08:15:31");
        assert_eq!(march[1].start_date_local, "2024-03-30 18:40:00");
    }

    #[test]
    fn all_filter_keeps_feed_order() {
        let runs = vec![
            run("2024-03-02 08:15:31"),
            run("2024-01-05 09:00:00"),
            run("2024-12-24 10:30:00"),
        ];
        let all = runs_in_month(&runs, MonthFilter::All);
        assert_eq!(all, runs);
    }

    #[test]
    fn malformed_stamp_only_passes_all() {
        let odd = run("yesterday-ish");
        assert!(MonthFilter::All.admits(&odd));
        for month in 0..12 {
            assert!(!MonthFilter::Month(month).admits(&odd));
        }
    }

    #[test]
    fn past_years_expose_every_month() {
        let today = date!(2026 - 08 - 23);
        for month in 0..12 {
            assert!(MonthFilter::Month(month).available(2024, today));
        }
        assert!(MonthFilter::All.available(2024, today));
    }

    #[test]
    fn current_year_stops_at_the_current_month() {
        let today = date!(2026 - 03 - 15);
        assert!(MonthFilter::Month(0).available(2026, today));
        assert!(MonthFilter::Month(2).available(2026, today));
        assert!(!MonthFilter::Month(3).available(2026, today));
        assert!(!MonthFilter::Month(11).available(2026, today));
        assert!(MonthFilter::All.available(2026, today));
    }

    #[test]
    fn future_years_expose_only_the_all_tab() {
        let today = date!(2026 - 08 - 23);
        assert!(MonthFilter::All.available(2027, today));
        for month in 0..12 {
            assert!(!MonthFilter::Month(month).available(2027, today));
        }
    }
}
