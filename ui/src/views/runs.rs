use dioxus::prelude::*;

use crate::{
    core::{activity::Activity, dataset},
    runs::{RunDetail, RunTable, RunsState},
};

#[cfg(debug_assertions)]
fn log_publish(year: Option<i32>, count: usize) {
    // Trace for diagnosing a stale published list after a year switch.
    println!("[runs] published {count} runs (year={year:?})");
}

#[component]
pub fn Runs() -> Element {
    let state = use_signal(RunsState::load);
    let year = use_signal(|| None::<i32>);
    let mut activity_list = use_signal(Vec::<Activity>::new);
    let mut selected_run = use_signal(|| None::<usize>);
    let mut located = use_signal(|| None::<Activity>);

    let loaded = state();
    let years = dataset::years(&loaded.runs);
    let active_year = year().or_else(|| years.first().copied());

    // Seed the published list on mount and re-seed it on a year switch;
    // either way the previous selection and located run are gone.
    use_effect(move || {
        let loaded = state();
        let active = year().or_else(|| dataset::years(&loaded.runs).first().copied());
        let seeded = active
            .map(|value| dataset::runs_for_year(&loaded.runs, value))
            .unwrap_or_default();

        #[cfg(debug_assertions)]
        log_publish(active, seeded.len());

        activity_list.set(seeded);
        selected_run.set(None);
        located.set(None);
    });

    rsx! {
        section { class: "page page-runs",
            h1 { "Runs" }
            p { "Browse the year's training log, filter it by month, and sort any column." }

            if let Some(error) = loaded.error.as_ref() {
                p { class: "page-runs__error", "{error}" }
            }

            div { class: "page-runs__years",
                for value in years.iter().copied() {
                    {render_year_tab(value, active_year == Some(value), year)}
                }
            }

            if let Some(active) = active_year {
                div { class: "page-runs__panels",
                    // Keyed by year so a year switch remounts the table
                    // with default month and sort state.
                    RunTable {
                        key: "{active}",
                        runs: dataset::runs_for_year(&loaded.runs, active),
                        year: active,
                        activity_list,
                        selected_run,
                        on_locate: move |run: Activity| located.set(Some(run)),
                    }
                    RunDetail { run: located(), activity_list }
                }
            }
        }
    }
}

fn render_year_tab(value: i32, is_active: bool, mut year: Signal<Option<i32>>) -> Element {
    rsx! {
        button {
            r#type: "button",
            class: format!(
                "page-runs__year {}",
                if is_active { "page-runs__year--active" } else { "" }
            ),
            onclick: move |_| year.set(Some(value)),
            "{value}"
        }
    }
}
