use dioxus::prelude::*;

use crate::core::{activity::Activity, format};

/// One record in the table. Highlight comes from the host-owned
/// selection index alone; a click reports this row's index and identity
/// back through the host's signal and the locate callback.
#[component]
pub fn RunRow(
    run: Activity,
    index: usize,
    mut selected_run: Signal<Option<usize>>,
    on_locate: EventHandler<Activity>,
) -> Element {
    let is_selected = selected_run() == Some(index);
    let bpm = run
        .heartrate()
        .map(|value| format!("{value:.0}"))
        .unwrap_or_default();
    let record = run.clone();

    rsx! {
        tr {
            class: format!(
                "run-row {}",
                if is_selected { "run-row--selected" } else { "" }
            ),
            onclick: move |_| {
                selected_run.set(Some(index));
                on_locate.call(record.clone());
            },
            td { class: "run-row__name", "{run.name}" }
            td { class: "run-row__value", "{format::format_km(run.distance)}" }
            td { class: "run-row__value", "{format::format_pace(run.average_speed)}" }
            td { class: "run-row__value", "{bpm}" }
            td { class: "run-row__value", "{format::format_duration(run.duration_secs())}" }
            td { class: "run-row__date", "{run.date_key()}" }
        }
    }
}
