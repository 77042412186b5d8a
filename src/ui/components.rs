//! Shared UI components.

use eframe::egui::{self, Color32, CornerRadius, Margin, Response, RichText, Ui};

/// Status indicator colors.
pub mod colors {
    use super::Color32;

    pub const SUCCESS: Color32 = Color32::from_rgb(100, 200, 100);
    pub const ERROR: Color32 = Color32::from_rgb(255, 100, 100);
    pub const WARNING: Color32 = Color32::from_rgb(255, 200, 100);
    pub const NEUTRAL: Color32 = Color32::from_rgb(150, 150, 150);
    pub const PRIMARY: Color32 = Color32::from_rgb(59, 130, 246);
}

/// Render a section heading with a leading icon.
pub fn section_header(ui: &mut Ui, icon: &str, title: &str) {
    ui.label(RichText::new(format!("{icon}  {title}")).size(20.0).strong());
    ui.add_space(8.0);
}

/// Filled button used for the main action of a form.
pub fn primary_button_with_icon(ui: &mut Ui, icon: &str, label: &str) -> Response {
    let text = if icon.is_empty() {
        label.to_string()
    } else {
        format!("{icon} {label}")
    };
    ui.add(
        egui::Button::new(RichText::new(text).strong().color(Color32::WHITE))
            .fill(colors::PRIMARY)
            .min_size(egui::vec2(110.0, 26.0)),
    )
}

/// Small per-row action button.
pub fn action_button(ui: &mut Ui, icon: &str, label: &str) -> Response {
    ui.button(format!("{icon} {label}"))
}

/// Per-row action button for destructive operations.
pub fn danger_action_button(ui: &mut Ui, icon: &str, label: &str) -> Response {
    ui.button(RichText::new(format!("{icon} {label}")).color(colors::ERROR))
}

/// Rounded frame used behind cards and sections.
pub fn card_frame(ui: &Ui) -> egui::Frame {
    egui::Frame::new()
        .fill(ui.style().visuals.extreme_bg_color)
        .inner_margin(Margin::same(15))
        .corner_radius(CornerRadius::same(8))
}

/// Render a stat card with title, value, and subtitle.
pub fn stat_card(ui: &mut Ui, icon: &str, title: &str, value: &str, subtitle: &str) {
    card_frame(ui).outer_margin(Margin::same(5)).show(ui, |ui| {
        ui.set_min_width(150.0);

        ui.vertical(|ui| {
            ui.label(RichText::new(format!("{icon} {title}")).small());
            ui.label(RichText::new(value).heading().strong());
            ui.label(RichText::new(subtitle).small().weak());
        });
    });
}
