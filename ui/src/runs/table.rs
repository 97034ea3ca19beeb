use dioxus::prelude::*;
use time::OffsetDateTime;

use crate::{
    core::{
        activity::Activity,
        filter::{runs_in_month, MonthFilter, MONTH_TABS},
        format,
        sort::{SortColumn, SortState},
        stats::MonthStats,
    },
    runs::RunRow,
};

/// The year's run table: gated month tabs, an aggregate panel, and five
/// sortable columns.
///
/// The table owns its month filter and sort key but not the selection:
/// the highlighted row and the published activity list belong to the
/// host, and every change goes through the host-owned signals.
#[component]
pub fn RunTable(
    runs: Vec<Activity>,
    year: i32,
    activity_list: Signal<Vec<Activity>>,
    selected_run: Signal<Option<usize>>,
    on_locate: EventHandler<Activity>,
) -> Element {
    let month = use_signal(MonthFilter::default);
    let sort = use_signal(SortState::default);

    // The subset is always re-derived from (runs, month); the sort is a
    // transient view on top of it, so clearing the key falls back to the
    // subset's own order.
    let subset = runs_in_month(&runs, month());
    let stats = MonthStats::from_runs(&subset);
    let mut view = subset;
    sort().apply(&mut view);

    let today = OffsetDateTime::now_utc().date();

    rsx! {
        section { class: "run-table",
            div { class: "run-table__months",
                for (index, title) in MONTH_TABS.into_iter().enumerate() {
                    if MonthFilter::from_tab(index).available(year, today) {
                        {render_month_tab(index, title, month, sort)}
                    }
                }
            }

            div { class: "run-table__stats",
                span { class: "run-table__stat", "Runs: {stats.total}" }
                span { class: "run-table__stat", "Days: {stats.active_days}" }
                span { class: "run-table__stat", "Distance: {format::format_km(stats.distance)} km" }
                span { class: "run-table__stat", "Time: {format::format_duration(stats.duration)}" }
                span { class: "run-table__stat", "Pace: {format::format_pace(stats.speed)}/km" }
                if stats.has_heartrate() {
                    span { class: "run-table__stat", "Avg HR: {format::format_bpm(stats.heartrate)}" }
                }
            }

            table { class: "run-table__grid",
                thead {
                    tr {
                        th { class: "run-table__header" }
                        for column in SortColumn::ALL {
                            {render_header_cell(
                                column,
                                runs.clone(),
                                month,
                                sort,
                                activity_list,
                                selected_run,
                            )}
                        }
                    }
                }
                tbody {
                    for (index, run) in view.iter().enumerate() {
                        RunRow {
                            key: "{run.run_id}",
                            run: run.clone(),
                            index,
                            selected_run,
                            on_locate,
                        }
                    }
                }
            }
        }
    }
}

fn render_month_tab(
    index: usize,
    title: &'static str,
    mut month: Signal<MonthFilter>,
    mut sort: Signal<SortState>,
) -> Element {
    let is_active = month().tab() == index;

    rsx! {
        button {
            r#type: "button",
            class: format!(
                "run-table__month {}",
                if is_active { "run-table__month--active" } else { "" }
            ),
            onclick: move |_| {
                month.set(MonthFilter::from_tab(index));
                // A filter change drops any applied sort; the fresh
                // subset renders in its natural order.
                sort.set(SortState::default());
            },
            "{title}"
        }
    }
}

fn render_header_cell(
    column: SortColumn,
    runs: Vec<Activity>,
    month: Signal<MonthFilter>,
    mut sort: Signal<SortState>,
    mut activity_list: Signal<Vec<Activity>>,
    mut selected_run: Signal<Option<usize>>,
) -> Element {
    let is_active = sort().is_active(column);

    rsx! {
        th {
            class: format!(
                "run-table__header run-table__header--sortable {}",
                if is_active { "run-table__header--active" } else { "" }
            ),
            onclick: move |_| {
                let next = sort().toggled(column);
                let mut published = runs_in_month(&runs, month());
                next.apply(&mut published);

                // Reordering invalidates the host's row index, so the
                // highlight is cleared through the same signal a row
                // click sets.
                if selected_run().is_some() {
                    selected_run.set(None);
                }
                activity_list.set(published);
                sort.set(next);
            },
            "{column.label()}"
        }
    }
}
