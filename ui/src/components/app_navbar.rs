use dioxus::prelude::*;
use once_cell::sync::OnceCell;

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");
const NAVBAR_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/navbar.css"
));

/// Platforms register a `NavBuilder` providing fully constructed `Link`
/// elements, so this crate never needs to know a platform's `Route`
/// enum. Each closure receives the label and returns a link that already
/// contains it.
///
/// A platform crate installs its builder before rendering the root:
///
/// ```ignore
/// use ui::components::{register_nav, NavBuilder};
/// fn install_nav() {
///     register_nav(NavBuilder {
///         home: |label| rsx!( Link { class: "navbar__link", to: Route::Home {}, "{label}" } ),
///         runs: |label| rsx!( Link { class: "navbar__link", to: Route::Runs {}, "{label}" } ),
///     });
/// }
/// ```
///
/// With no builder registered, `AppNavbar` falls back to whatever raw
/// `children` the caller passed.
pub struct NavBuilder {
    pub home: fn(label: &str) -> Element,
    pub runs: fn(label: &str) -> Element,
}

static NAV_BUILDER: OnceCell<NavBuilder> = OnceCell::new();

pub fn register_nav(builder: NavBuilder) {
    let _ = NAV_BUILDER.set(builder);
}

#[component]
pub fn AppNavbar(children: Element) -> Element {
    let internal_nav: Option<VNode> = NAV_BUILDER.get().map(|builder| {
        let home = (builder.home)("Home");
        let runs = (builder.runs)("Runs");

        rsx! {
            nav { class: "navbar__links",
                {home}
                {runs}
            }
        }
        .expect("AppNavbar: rsx render failed")
    });

    rsx! {
        // Shared navbar stylesheet, inlined on release native builds.
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{NAVBAR_CSS_INLINE}" }
        }

        header {
            id: "navbar",
            class: "navbar",
            div { class: "navbar__inner",
                div { class: "navbar__brand",
                    span { class: "navbar__brand-link",
                        span { class: "navbar__brand-spark", aria_hidden: "true" }
                        span { class: "navbar__brand-mark", "Paceboard" }
                    }
                    span { class: "navbar__brand-subtitle", "a year of running at a glance" }
                }

                if let Some(nav) = internal_nav {
                    {nav}
                } else {
                    nav { class: "navbar__links", {children} }
                }
            }
        }
    }
}
