//! The embedded activity feed and year-level grouping helpers.

use super::activity::Activity;

/// Demo feed bundled at compile time, in the exporter's JSON shape.
const ACTIVITIES_JSON: &str = include_str!("../../assets/data/activities.json");

/// Parses the embedded feed. Callers fold the error into their view
/// state rather than panicking.
pub fn load() -> Result<Vec<Activity>, serde_json::Error> {
    serde_json::from_str(ACTIVITIES_JSON)
}

/// Distinct years present in the feed, newest first. Records with an
/// unparseable stamp belong to no year.
pub fn years(runs: &[Activity]) -> Vec<i32> {
    let mut years: Vec<i32> = runs.iter().filter_map(Activity::year).collect();
    years.sort_unstable_by(|a, b| b.cmp(a));
    years.dedup();
    years
}

/// The records whose local start year is `year`, in feed order.
pub fn runs_for_year(runs: &[Activity], year: i32) -> Vec<Activity> {
    runs.iter()
        .filter(|run| run.year() == Some(year))
        .cloned()
        .collect()
}
