use dioxus::prelude::*;

#[component]
pub fn Home() -> Element {
    rsx! {
        section { class: "page page-home",
            h1 { "Paceboard" }
            p { "A year of running at a glance." }
            p {
                "Paceboard turns an exported activity feed into a month-by-month "
                "table with aggregate numbers that always match what you see."
            }

            ul { class: "page-home__features",
                li { "Month tabs gated to the months that exist so far" }
                li { "Run count, active days, distance, time, pace, and heart rate per view" }
                li { "Five sortable columns; a second click restores the feed order" }
            }
            p { class: "page-home__cta",
                "Open Runs and start with the most recent year."
            }
        }
    }
}
