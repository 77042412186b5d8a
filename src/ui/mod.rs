//! GUI panels and application state.

pub mod app;
pub mod components;
pub mod dashboard;
pub mod login_panel;
pub mod medication_panel;
pub mod patient_panel;
pub mod reminder_panel;

pub use app::App;
