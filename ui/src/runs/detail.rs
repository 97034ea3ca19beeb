use dioxus::prelude::*;

use crate::core::{activity::Activity, format};

/// Card for the most recently located run, plus its position within the
/// host's published list. Stands in for the map view the full product
/// centers on a located activity.
#[component]
pub fn RunDetail(run: Option<Activity>, activity_list: Signal<Vec<Activity>>) -> Element {
    rsx! {
        section { class: "run-detail",
            div { class: "run-detail__header",
                h2 { "Located run" }
            }

            match run {
                Some(run) => render_run(&run, &activity_list()),
                None => rsx! {
                    p { class: "run-detail__placeholder",
                        "Click a row to inspect a run and its place in the current view."
                    }
                },
            }
        }
    }
}

fn render_run(run: &Activity, published: &[Activity]) -> Element {
    let placement = match published
        .iter()
        .position(|candidate| candidate.run_id == run.run_id)
    {
        Some(index) => format!("Run {} of {} in the current view", index + 1, published.len()),
        None => "No longer part of the current view".to_string(),
    };

    rsx! {
        div { class: "run-detail__summary",
            h3 { "{run.name}" }
            span { class: "run-detail__date", "{run.date_key()}" }
        }

        ul { class: "run-detail__grid",
            li {
                span { class: "run-detail__metric-label", "Distance" }
                span { class: "run-detail__metric-value", "{format::format_km(run.distance)} km" }
            }
            li {
                span { class: "run-detail__metric-label", "Pace" }
                span { class: "run-detail__metric-value", "{format::format_pace(run.average_speed)}/km" }
            }
            li {
                span { class: "run-detail__metric-label", "Time" }
                span { class: "run-detail__metric-value", "{format::format_duration(run.duration_secs())}" }
            }
            if let Some(bpm) = run.heartrate() {
                li {
                    span { class: "run-detail__metric-label", "Heart rate" }
                    span { class: "run-detail__metric-value", "{format::format_bpm(bpm)}" }
                }
            }
        }

        p { class: "run-detail__placement", "{placement}" }
    }
}
