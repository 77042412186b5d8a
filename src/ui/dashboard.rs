//! Admin dashboard with stat cards, the three record sections, and the activity log.

use eframe::egui::{Color32, RichText, ScrollArea, Ui};
use egui_phosphor::regular::{BELL, PILL, TRASH, USERS};

use super::app::{App, LogLevel};
use super::components::{card_frame, colors, stat_card};
use super::{medication_panel, patient_panel, reminder_panel};
use crate::controller::Session;

/// Show the admin dashboard.
pub fn show(app: &mut App, ui: &mut Ui) {
    ScrollArea::vertical().id_salt("admin_scroll").show(ui, |ui| {
        ui.add_space(10.0);

        // Header
        ui.label(RichText::new("Smart Health Care System").size(32.0).strong());
        if let Session::LoggedIn { email, .. } = app.dashboard.session() {
            ui.label(RichText::new(format!("Dashboard - {email}")).size(14.0).weak());
        }

        ui.add_space(20.0);

        // Stat cards row
        let counts = app.dashboard.counts();
        ui.horizontal(|ui| {
            stat_card(ui, USERS, "Patients", &counts.patients.to_string(), "Registered patients");
            stat_card(ui, PILL, "Medications", &counts.medications.to_string(), "Known medications");
            stat_card(ui, BELL, "Reminders", &counts.reminders.to_string(), "Scheduled reminders");
        });

        ui.add_space(20.0);
        ui.separator();
        ui.add_space(10.0);

        patient_panel::show(app, ui);

        ui.add_space(20.0);
        ui.separator();
        ui.add_space(10.0);

        medication_panel::show(app, ui);

        ui.add_space(20.0);
        ui.separator();
        ui.add_space(10.0);

        reminder_panel::show(app, ui);

        ui.add_space(20.0);

        show_activity(app, ui);

        ui.add_space(20.0);
    });
}

/// Recent activity, newest first.
fn show_activity(app: &mut App, ui: &mut Ui) {
    card_frame(ui).show(ui, |ui| {
        ui.set_min_width(ui.available_width());

        ui.horizontal(|ui| {
            ui.label(RichText::new("Recent Activity").strong());
            if !app.log_messages.is_empty() && ui.small_button(format!("{TRASH} Clear")).clicked() {
                app.clear_log();
            }
        });
        ui.add_space(10.0);

        ScrollArea::vertical()
            .id_salt("activity_scroll")
            .max_height(150.0)
            .show(ui, |ui| {
                if app.log_messages.is_empty() {
                    ui.label(RichText::new("No recent activity").weak());
                } else {
                    for entry in app.log_messages.iter().rev().take(10) {
                        let color = match entry.level {
                            LogLevel::Info => Color32::GRAY,
                            LogLevel::Success => colors::SUCCESS,
                            LogLevel::Warning => colors::WARNING,
                            LogLevel::Error => colors::ERROR,
                        };

                        ui.horizontal(|ui| {
                            ui.label(
                                RichText::new(entry.timestamp.format("%H:%M:%S").to_string())
                                    .small()
                                    .color(Color32::DARK_GRAY),
                            );
                            ui.label(RichText::new(&entry.message).color(color));
                        });
                    }
                }
            });
    });
}
