//! Shared UI crate for ScholarMetrics. Session state, sample data, CSV export
//! and every screen live here; the platform crates only launch [`App`].

pub mod core;
pub mod export;
pub mod i18n;
pub mod views;

pub mod components {
    pub mod app_navbar;
    pub use app_navbar::{nav_links, AppNavbar, NavLink};

    mod chart;
    pub use chart::{plot_points, CitationChart};

    mod footer;
    pub use footer::{footer_links, SiteFooter};
}

mod app;
pub use app::App;
