//! Medication section: read-only table and the add form.

use eframe::egui::{self, Align, Layout, RichText, Ui};
use egui_extras::{Column, TableBuilder};
use egui_phosphor::regular::{PILL, PLUS};

use super::app::App;
use super::components::{primary_button_with_icon, section_header};

/// Show the medication section.
pub fn show(app: &mut App, ui: &mut Ui) {
    section_header(ui, PILL, "Medications");

    show_table(app, ui);

    ui.add_space(10.0);

    let form = &mut app.dashboard.new_medication;
    let mut submit = false;
    ui.horizontal(|ui| {
        ui.add(
            egui::TextEdit::singleline(&mut form.name)
                .desired_width(180.0)
                .hint_text("Medication name"),
        );
        ui.add(
            egui::TextEdit::singleline(&mut form.dosage)
                .desired_width(100.0)
                .hint_text("Dosage"),
        );
        ui.add(
            egui::TextEdit::singleline(&mut form.frequency)
                .desired_width(140.0)
                .hint_text("Frequency"),
        );

        if primary_button_with_icon(ui, PLUS, "Add Medication").clicked() {
            submit = true;
        }
    });

    if submit {
        app.add_medication();
    }
}

fn show_table(app: &App, ui: &mut Ui) {
    let medications = app.dashboard.medications();
    if medications.is_empty() {
        ui.label(RichText::new("No medications yet").weak());
        return;
    }

    ui.push_id("medications_table", |ui| {
        TableBuilder::new(ui)
            .striped(true)
            .vscroll(false)
            .cell_layout(Layout::left_to_right(Align::Center))
            .column(Column::exact(50.0))
            .column(Column::remainder().at_least(160.0))
            .column(Column::auto().at_least(80.0))
            .column(Column::auto().at_least(120.0))
            .header(24.0, |mut header| {
                for title in ["ID", "Name", "Dosage", "Frequency"] {
                    header.col(|ui| {
                        ui.strong(title);
                    });
                }
            })
            .body(|mut body| {
                for medication in medications {
                    body.row(24.0, |mut row| {
                        row.col(|ui| {
                            ui.label(medication.id.to_string());
                        });
                        row.col(|ui| {
                            ui.label(&medication.name);
                        });
                        row.col(|ui| {
                            ui.label(&medication.dosage);
                        });
                        row.col(|ui| {
                            ui.label(&medication.frequency);
                        });
                    });
                }
            });
    });
}
