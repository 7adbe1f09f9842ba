//! Shared UI crate for Folio. The activity pipeline, the click challenge and
//! every view live here; platform crates only launch them.

pub mod activity;
pub mod core;
pub mod i18n;
pub mod profile;
pub mod tasks;
pub mod views;

pub mod components {
    // Localized brand bar with section links and locale switcher (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::AppNavbar;
}
