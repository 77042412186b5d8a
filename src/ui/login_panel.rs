//! Login view shown until the admin signs in.

use eframe::egui::{self, RichText, Ui};
use egui_phosphor::regular::{HEARTBEAT, SIGN_IN};

use super::app::App;
use super::components::{card_frame, colors, primary_button_with_icon};

/// Show the login form.
pub fn show(app: &mut App, ui: &mut Ui) {
    let mut submit = false;

    ui.vertical_centered(|ui| {
        ui.add_space(60.0);

        ui.label(RichText::new(format!("{HEARTBEAT} Smart Health Care System")).size(32.0).strong());
        ui.add_space(5.0);
        ui.label(RichText::new("Administrator login").size(14.0).weak());

        ui.add_space(30.0);

        card_frame(ui).show(ui, |ui| {
            ui.set_max_width(340.0);

            egui::Grid::new("login_grid")
                .num_columns(2)
                .spacing([12.0, 10.0])
                .show(ui, |ui| {
                    ui.label("Email:");
                    ui.add(
                        egui::TextEdit::singleline(&mut app.dashboard.email)
                            .desired_width(220.0)
                            .hint_text("Email"),
                    );
                    ui.end_row();

                    ui.label("Password:");
                    let response = ui.add(
                        egui::TextEdit::singleline(&mut app.dashboard.password)
                            .password(true)
                            .desired_width(220.0)
                            .hint_text("Password"),
                    );
                    if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                        submit = true;
                    }
                    ui.end_row();
                });

            ui.add_space(10.0);

            if let Some(error) = &app.login_error {
                ui.colored_label(colors::ERROR, error);
                ui.add_space(5.0);
            }

            if primary_button_with_icon(ui, SIGN_IN, "Login").clicked() {
                submit = true;
            }
        });
    });

    if submit {
        app.submit_login();
    }
}
