#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

#[cfg(feature = "desktop")]
use dioxus::desktop::{tao::window::WindowBuilder, Config};
use dioxus::prelude::*;

use ui::components::app_navbar::{register_nav, NavBuilder};
use ui::components::AppNavbar;

use ui::views::{Home, Runs};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(DesktopNavbar)]
    #[route("/")]
    Home {},
    #[route("/runs")]
    Runs {},
}

// Shared theme embedded at compile time; the packaged desktop binary has
// no external asset files to go missing.
const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

#[cfg(feature = "desktop")]
fn main() {
    LaunchBuilder::desktop()
        .with_cfg(Config::new().with_window(
            WindowBuilder::new()
                .with_title(format!("Paceboard – v{}", env!("CARGO_PKG_VERSION")))
                .with_maximized(true),
        ))
        .launch(App);
}

#[cfg(all(feature = "server", not(feature = "desktop")))]
fn main() {
    LaunchBuilder::server().launch(App);
}

fn nav_home(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::Home {}, "{label}" })
}
fn nav_runs(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::Runs {}, "{label}" })
}

#[component]
fn App() -> Element {
    // The shared navbar links through this crate's Route enum.
    register_nav(NavBuilder {
        home: nav_home,
        runs: nav_runs,
    });

    // Some window managers ignore the builder's maximize hint; ask again
    // once the window exists.
    #[cfg(feature = "desktop")]
    {
        let win = dioxus::desktop::use_window();
        use_effect(move || {
            win.set_maximized(true);
        });
    }

    rsx! {
        document::Style { "{MAIN_CSS_INLINE}" }

        Router::<Route> { }
    }
}

/// Routes wrapped in the shared `AppNavbar`, kept in this crate so the
/// layout can name the desktop `Route` enum.
#[component]
fn DesktopNavbar() -> Element {
    rsx! {
        AppNavbar { }

        Outlet::<Route> {}
    }
}
