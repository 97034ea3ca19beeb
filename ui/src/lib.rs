//! Shared UI crate for Paceboard. Most cross-platform logic and views live here.

pub mod core;
pub mod runs;
pub mod views;

pub mod components {
    // Application navbar (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::register_nav;
    pub use app_navbar::AppNavbar;
    pub use app_navbar::NavBuilder;
}
