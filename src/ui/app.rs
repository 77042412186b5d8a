//! Main application UI.

use chrono::{DateTime, Local};
use eframe::egui::{self, Align, Layout};

use crate::AppError;
use crate::config::AppConfig;
use crate::controller::{Dashboard, Session};

use super::components::colors;
use super::{dashboard, login_panel};

/// Log level for UI messages.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// Log entry for display in the UI.
#[derive(Clone)]
pub struct LogEntry {
    pub timestamp: DateTime<Local>,
    pub message: String,
    pub level: LogLevel,
}

/// Target for delete confirmation dialog.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DeleteTarget {
    Patient(u32, String),
}

/// Main application state.
pub struct App {
    pub dashboard: Dashboard,
    pub config: AppConfig,

    // Login feedback
    pub login_error: Option<String>,

    // Log messages
    pub log_messages: Vec<LogEntry>,

    // Dialogs
    pub show_delete_confirm: bool,
    pub delete_target: Option<DeleteTarget>,
    pub error_message: Option<String>,
}

impl App {
    /// Create the app. `initial_error` is shown in the error dialog on the first frame.
    pub fn new(config: AppConfig, initial_error: Option<String>) -> Self {
        let dashboard = Dashboard::from_config(&config);
        let counts = dashboard.counts();
        tracing::info!(
            "Loaded {} patients, {} medications, {} reminders",
            counts.patients,
            counts.medications,
            counts.reminders
        );

        Self {
            dashboard,
            config,
            login_error: None,
            log_messages: Vec::new(),
            show_delete_confirm: false,
            delete_target: None,
            error_message: initial_error,
        }
    }

    /// Log a message to the UI log.
    pub fn log(&mut self, level: LogLevel, message: impl Into<String>) {
        self.log_messages.push(LogEntry {
            timestamp: Local::now(),
            message: message.into(),
            level,
        });

        let limit = self.config.ui.activity_log_limit.max(1);
        if self.log_messages.len() > limit {
            let excess = self.log_messages.len() - limit;
            self.log_messages.drain(..excess);
        }
    }

    /// Log an info message.
    pub fn log_info(&mut self, message: impl Into<String>) {
        self.log(LogLevel::Info, message);
    }

    /// Log a success message.
    pub fn log_success(&mut self, message: impl Into<String>) {
        self.log(LogLevel::Success, message);
    }

    /// Log a warning message.
    pub fn log_warning(&mut self, message: impl Into<String>) {
        self.log(LogLevel::Warning, message);
    }

    /// Log an error message.
    pub fn log_error(&mut self, message: impl Into<String>) {
        self.log(LogLevel::Error, message);
    }

    /// Clear the activity log.
    pub fn clear_log(&mut self) {
        self.log_messages.clear();
    }

    /// Show an error in the dialog and the activity log.
    fn report(&mut self, e: AppError) {
        let message = e.to_string();
        self.log_error(message.clone());
        self.error_message = Some(message);
    }

    /// Handle the Login button.
    pub fn submit_login(&mut self) {
        match self.dashboard.login() {
            Ok(()) => {
                self.login_error = None;
                self.log_success("Admin logged in");
            }
            Err(e) => {
                self.login_error = Some(e.to_string());
            }
        }
    }

    /// Handle the Add Patient button.
    pub fn add_patient(&mut self) {
        match self.dashboard.add_patient() {
            Ok(patient) => self.log_success(format!("Added patient '{}'", patient.email)),
            Err(e) => self.report(e),
        }
    }

    /// Handle a row's Edit button.
    pub fn edit_patient(&mut self, id: u32) {
        match self.dashboard.edit_patient(id) {
            Ok(patient) => self.log_success(format!("Patient {} is now '{}'", patient.id, patient.email)),
            Err(AppError::NotFound(what)) => self.log_warning(format!("Nothing to edit: {what} no longer exists")),
            Err(e) => self.report(e),
        }
    }

    /// Ask for confirmation before deleting.
    pub fn request_delete(&mut self, target: DeleteTarget) {
        self.delete_target = Some(target);
        self.show_delete_confirm = true;
    }

    /// Handle the Add Medication button.
    pub fn add_medication(&mut self) {
        match self.dashboard.add_medication() {
            Ok(medication) => self.log_success(format!(
                "Added medication '{}' ({}, {})",
                medication.name, medication.dosage, medication.frequency
            )),
            Err(e) => self.report(e),
        }
    }

    /// Handle the Add Reminder button.
    pub fn add_reminder(&mut self) {
        match self.dashboard.add_reminder() {
            Ok(reminder) => {
                let line = self.dashboard.reminder_line(&reminder);
                self.log_success(format!("Added reminder: {line}"));
            }
            Err(e) => self.report(e),
        }
    }

    /// Execute the confirmed delete operation.
    pub fn confirm_delete(&mut self) {
        self.show_delete_confirm = false;
        if let Some(target) = self.delete_target.take() {
            match target {
                DeleteTarget::Patient(id, email) => match self.dashboard.delete_patient(id) {
                    Ok(true) => self.log_success(format!("Deleted patient '{email}'")),
                    Ok(false) => self.log_warning(format!("Patient '{email}' was already removed")),
                    Err(e) => self.report(e),
                },
            }
        }
    }

    /// Dismiss the delete confirmation.
    pub fn cancel_delete(&mut self) {
        self.show_delete_confirm = false;
        self.delete_target = None;
    }

    /// Render status bar (display only, no interaction).
    fn show_status_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar")
            .min_height(28.0)
            .show(ctx, |ui| {
                ui.disable();
                ui.horizontal(|ui| {
                    match self.dashboard.session() {
                        Session::LoggedIn { email, since } => {
                            ui.colored_label(
                                colors::SUCCESS,
                                format!("Logged in as {} since {}", email, since.format("%H:%M")),
                            );
                        }
                        Session::LoggedOut => {
                            ui.colored_label(colors::NEUTRAL, "Not logged in");
                        }
                    }

                    if self.dashboard.is_admin() {
                        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                            let counts = self.dashboard.counts();
                            ui.label(format!(
                                "{} patients | {} medications | {} reminders",
                                counts.patients, counts.medications, counts.reminders
                            ));
                        });
                    }
                });
            });
    }

    /// Render modal dialogs (error, delete confirmation).
    fn show_dialogs(&mut self, ctx: &egui::Context) {
        // Error dialog
        if let Some(ref error) = self.error_message.clone() {
            egui::Window::new("Error")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.colored_label(colors::ERROR, error);
                    ui.add_space(10.0);
                    if ui.button("OK").clicked() {
                        self.error_message = None;
                    }
                });
        }

        // Delete confirmation dialog
        if self.show_delete_confirm
            && let Some(ref target) = self.delete_target.clone()
        {
            let (title, message) = match target {
                DeleteTarget::Patient(_, email) => ("Delete Patient", format!("Delete patient '{}'?", email)),
            };

            egui::Window::new(title)
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.label(message);
                    ui.add_space(10.0);
                    ui.horizontal(|ui| {
                        if ui.button("Cancel").clicked() {
                            self.cancel_delete();
                        }
                        if ui.button("Delete").clicked() {
                            self.confirm_delete();
                        }
                    });
                });
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Status bar
        self.show_status_bar(ctx);

        // Modal dialogs (error, delete confirmation)
        self.show_dialogs(ctx);

        // Main content
        egui::CentralPanel::default().show(ctx, |ui| {
            if self.dashboard.is_admin() {
                dashboard::show(self, ui);
            } else {
                login_panel::show(self, ui);
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn logged_in_app() -> App {
        let mut app = App::new(AppConfig::default(), None);
        app.dashboard.email = "admin@example.com".to_string();
        app.dashboard.password = "password".to_string();
        app.submit_login();
        app
    }

    #[test]
    fn test_initial_error_is_shown() {
        let app = App::new(AppConfig::default(), Some("bad config".to_string()));
        assert_eq!(app.error_message.as_deref(), Some("bad config"));
    }

    #[test]
    fn test_failed_login_sets_inline_error() {
        let mut app = App::new(AppConfig::default(), None);
        app.dashboard.email = "admin@example.com".to_string();
        app.dashboard.password = "wrong".to_string();

        app.submit_login();

        assert!(!app.dashboard.is_admin());
        assert_eq!(app.login_error.as_deref(), Some("Invalid email or password"));
        assert!(app.error_message.is_none());
    }

    #[test]
    fn test_successful_login_clears_inline_error() {
        let mut app = App::new(AppConfig::default(), None);
        app.login_error = Some("Invalid email or password".to_string());
        app.dashboard.email = "admin@example.com".to_string();
        app.dashboard.password = "password".to_string();

        app.submit_login();

        assert!(app.dashboard.is_admin());
        assert!(app.login_error.is_none());
        assert_eq!(app.log_messages.last().map(|e| e.level), Some(LogLevel::Success));
    }

    #[test]
    fn test_rejected_input_opens_error_dialog() {
        let mut app = logged_in_app();
        app.dashboard.email = "broken".to_string();

        app.add_patient();

        assert!(app.error_message.is_some());
        assert_eq!(app.log_messages.last().map(|e| e.level), Some(LogLevel::Error));
    }

    #[test]
    fn test_edit_unknown_patient_only_warns() {
        let mut app = logged_in_app();
        app.dashboard.email = "ghost@example.com".to_string();

        app.edit_patient(77);

        assert!(app.error_message.is_none());
        assert_eq!(app.log_messages.last().map(|e| e.level), Some(LogLevel::Warning));
    }

    #[test]
    fn test_delete_requires_confirmation() {
        let mut app = logged_in_app();
        app.request_delete(DeleteTarget::Patient(1, "patient1@example.com".to_string()));

        assert!(app.show_delete_confirm);
        assert_eq!(app.dashboard.patients().len(), 2);

        app.confirm_delete();

        assert!(!app.show_delete_confirm);
        assert!(app.delete_target.is_none());
        assert_eq!(app.dashboard.patients().len(), 1);
        assert_eq!(app.dashboard.patients()[0].id, 2);
    }

    #[test]
    fn test_cancel_delete_keeps_patient() {
        let mut app = logged_in_app();
        app.request_delete(DeleteTarget::Patient(2, "patient2@example.com".to_string()));

        app.cancel_delete();

        assert!(!app.show_delete_confirm);
        assert_eq!(app.dashboard.patients().len(), 2);
    }

    #[test]
    fn test_activity_log_is_capped() {
        let mut config = AppConfig::default();
        config.ui.activity_log_limit = 3;
        let mut app = App::new(config, None);

        for i in 0..5 {
            app.log_info(format!("entry {i}"));
        }

        let messages: Vec<_> = app.log_messages.iter().map(|e| e.message.as_str()).collect();
        assert_eq!(messages, vec!["entry 2", "entry 3", "entry 4"]);

        app.clear_log();
        assert!(app.log_messages.is_empty());
    }
}
