//! The eframe application driven once per frame.

pub mod dashboard_app;

pub use dashboard_app::DashboardApp;
