//! Patient section: table with per-row Edit/Delete and the add form.

use eframe::egui::{self, Align, Layout, RichText, Ui};
use egui_extras::{Column, TableBuilder};
use egui_phosphor::regular::{PENCIL, PLUS, TRASH, USERS};

use super::app::{App, DeleteTarget};
use super::components::{action_button, danger_action_button, primary_button_with_icon, section_header};

/// Row action picked while drawing the table.
enum RowAction {
    Edit(u32),
    Delete(u32, String),
}

/// Show the patient section.
pub fn show(app: &mut App, ui: &mut Ui) {
    section_header(ui, USERS, "Patients");

    let action = show_table(app, ui);

    ui.add_space(10.0);

    // Add form
    ui.horizontal(|ui| {
        ui.add(
            egui::TextEdit::singleline(&mut app.dashboard.email)
                .desired_width(280.0)
                .hint_text("Add new patient email"),
        );

        if primary_button_with_icon(ui, PLUS, "Add Patient").clicked() {
            app.add_patient();
        }
    });
    ui.weak("Edit replaces that patient's email with the one typed above.");

    match action {
        Some(RowAction::Edit(id)) => app.edit_patient(id),
        Some(RowAction::Delete(id, email)) => app.request_delete(DeleteTarget::Patient(id, email)),
        None => {}
    }
}

fn show_table(app: &App, ui: &mut Ui) -> Option<RowAction> {
    let patients = app.dashboard.patients();
    if patients.is_empty() {
        ui.label(RichText::new("No patients yet").weak());
        return None;
    }

    let mut action = None;

    ui.push_id("patients_table", |ui| {
        TableBuilder::new(ui)
            .striped(true)
            .vscroll(false)
            .cell_layout(Layout::left_to_right(Align::Center))
            .column(Column::exact(50.0))
            .column(Column::remainder().at_least(220.0))
            .column(Column::auto())
            .header(24.0, |mut header| {
                header.col(|ui| {
                    ui.strong("ID");
                });
                header.col(|ui| {
                    ui.strong("Email");
                });
                header.col(|ui| {
                    ui.strong("Actions");
                });
            })
            .body(|mut body| {
                for patient in patients {
                    body.row(28.0, |mut row| {
                        row.col(|ui| {
                            ui.label(patient.id.to_string());
                        });
                        row.col(|ui| {
                            ui.label(&patient.email);
                        });
                        row.col(|ui| {
                            if action_button(ui, PENCIL, "Edit").clicked() {
                                action = Some(RowAction::Edit(patient.id));
                            }
                            ui.add_space(4.0);
                            if danger_action_button(ui, TRASH, "Delete").clicked() {
                                action = Some(RowAction::Delete(patient.id, patient.email.clone()));
                            }
                        });
                    });
                }
            });
    });

    action
}
