//! Sortable table columns: comparator definitions and the active-key toggle.

use std::cmp::Ordering;

use super::activity::Activity;

/// The five sortable columns, in header order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortColumn {
    Km,
    Pace,
    Bpm,
    Time,
    Date,
}

impl SortColumn {
    pub const ALL: [SortColumn; 5] = [
        SortColumn::Km,
        SortColumn::Pace,
        SortColumn::Bpm,
        SortColumn::Time,
        SortColumn::Date,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Km => "KM",
            Self::Pace => "Pace",
            Self::Bpm => "BPM",
            Self::Time => "Time",
            Self::Date => "Date",
        }
    }

    /// Direction applied when the column becomes the active key. Date
    /// leads oldest-first; every numeric column leads with the largest
    /// value.
    pub fn primary_descending(self) -> bool {
        !matches!(self, Self::Date)
    }

    /// Comparator in the column's primary direction.
    ///
    /// Total over any pair of records: non-comparable inputs (NaN,
    /// missing heart rate, unparseable stamps) compare as `Equal`, so a
    /// stable sort leaves their relative order alone in both directions.
    pub fn compare(self, a: &Activity, b: &Activity) -> Ordering {
        let ascending = self.ascending(a, b);
        if self.primary_descending() {
            ascending.reverse()
        } else {
            ascending
        }
    }

    fn ascending(self, a: &Activity, b: &Activity) -> Ordering {
        match self {
            Self::Km => total(a.distance.partial_cmp(&b.distance)),
            // Pace ranks by raw speed: ascending speed is descending
            // minutes-per-kilometre.
            Self::Pace => total(a.average_speed.partial_cmp(&b.average_speed)),
            Self::Bpm => {
                let a_bpm = a.heartrate().unwrap_or(f64::NAN);
                let b_bpm = b.heartrate().unwrap_or(f64::NAN);
                total(a_bpm.partial_cmp(&b_bpm))
            }
            Self::Time => {
                let raw = [a.distance, a.average_speed, b.distance, b.average_speed];
                if raw.iter().any(|value| !value.is_finite()) {
                    return Ordering::Equal;
                }
                total(effective_minutes(a).partial_cmp(&effective_minutes(b)))
            }
            Self::Date => match (a.start_datetime(), b.start_datetime()) {
                (Some(a_stamp), Some(b_stamp)) => a_stamp.cmp(&b_stamp),
                _ => Ordering::Equal,
            },
        }
    }
}

/// Per-record time in minutes, rebuilt from the distance as displayed
/// (three-decimal kilometres) times the per-kilometre pace.
fn effective_minutes(run: &Activity) -> f64 {
    let rounded_km = (run.distance / 1000.0 * 1000.0).round() / 1000.0;
    let pace_min_per_km = (1000.0 / 60.0) / run.average_speed;
    rounded_km * pace_min_per_km
}

fn total(ordering: Option<Ordering>) -> Ordering {
    ordering.unwrap_or(Ordering::Equal)
}

/// The active sort key, if any.
///
/// Activating the active key again clears it; the table then falls back
/// to the filtered subset's insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortState {
    active: Option<SortColumn>,
}

impl SortState {
    pub fn active(self) -> Option<SortColumn> {
        self.active
    }

    pub fn is_active(self, column: SortColumn) -> bool {
        self.active == Some(column)
    }

    #[must_use]
    pub fn toggled(self, column: SortColumn) -> Self {
        let active = if self.is_active(column) {
            None
        } else {
            Some(column)
        };
        Self { active }
    }

    /// Stable sort with the active comparator; leaves the slice alone
    /// when no key is active.
    pub fn apply(self, runs: &mut [Activity]) {
        if let Some(column) = self.active {
            runs.sort_by(|a, b| column.compare(a, b));
        }
    }
}
