//! Reminder section: reminder lines and the add form.

use eframe::egui::{self, RichText, Ui};
use egui_phosphor::regular::{BELL, CLOCK, PLUS};

use super::app::App;
use super::components::{colors, primary_button_with_icon, section_header};
use crate::models::parse_time;

const PLACEHOLDER: &str = "Select medication";

/// Show the reminder section.
pub fn show(app: &mut App, ui: &mut Ui) {
    section_header(ui, BELL, "Reminders");

    if app.dashboard.reminders().is_empty() {
        ui.label(RichText::new("No reminders yet").weak());
    } else {
        for reminder in app.dashboard.reminders() {
            ui.label(RichText::new(format!("{CLOCK} {}", app.dashboard.reminder_line(reminder))).size(15.0));
        }
    }

    ui.add_space(10.0);

    let selected = app
        .dashboard
        .new_reminder
        .medication_id
        .and_then(|id| app.dashboard.medication_name(id))
        .unwrap_or(PLACEHOLDER)
        .to_string();

    // Snapshot options so the form can be borrowed mutably below
    let options: Vec<(u32, String)> = app
        .dashboard
        .medications()
        .iter()
        .map(|m| (m.id, m.name.clone()))
        .collect();

    let form = &mut app.dashboard.new_reminder;

    let mut submit = false;
    ui.horizontal(|ui| {
        egui::ComboBox::from_id_salt("reminder_medication")
            .width(200.0)
            .selected_text(selected)
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut form.medication_id, None, PLACEHOLDER);
                for (id, name) in &options {
                    ui.selectable_value(&mut form.medication_id, Some(*id), name.as_str());
                }
            });

        // Red text while the input does not parse
        let is_valid = form.time.is_empty() || parse_time(&form.time).is_some();
        let text_color = if is_valid {
            ui.visuals().text_color()
        } else {
            colors::ERROR
        };

        ui.add(
            egui::TextEdit::singleline(&mut form.time)
                .desired_width(70.0)
                .hint_text("HH:MM")
                .text_color(text_color),
        );

        if primary_button_with_icon(ui, PLUS, "Add Reminder").clicked() {
            submit = true;
        }
    });

    if submit {
        app.add_reminder();
    }
}
