//! Shared UI components.

use eframe::egui::{self, Align, Color32, CornerRadius, Layout, Margin, RichText, Ui};
use egui_phosphor::regular::{ARROW_LEFT, SIGN_OUT, USER};

use crate::session::Role;

/// Status indicator colors.
pub mod colors {
    use super::Color32;

    pub const SUCCESS: Color32 = Color32::from_rgb(100, 200, 100);
    pub const ERROR: Color32 = Color32::from_rgb(255, 100, 100);
    pub const WARNING: Color32 = Color32::from_rgb(230, 180, 50);
    pub const NEUTRAL: Color32 = Color32::from_rgb(150, 150, 150);
    pub const INFO: Color32 = Color32::from_rgb(100, 150, 230);
    pub const ACCENT: Color32 = Color32::from_rgb(60, 120, 220);
    /// Background for the fullscreen device views.
    pub const DEVICE_BG: Color32 = Color32::from_rgb(15, 23, 42);
}

/// Render the top header bar with logo, role label, and logout button.
///
/// Returns `true` when the logout button was clicked.
pub fn header_bar(ctx: &egui::Context, role: Role) -> bool {
    let mut logout = false;

    egui::TopBottomPanel::top("header_bar").min_height(48.0).show(ctx, |ui| {
        ui.horizontal_centered(|ui| {
            ui.add_space(10.0);
            ui.label(RichText::new("LabVision").size(20.0).strong().color(colors::ACCENT));
            ui.label(RichText::new(format!("{} Dashboard", role.label())).weak());

            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                ui.add_space(10.0);
                if ui.button(format!("{SIGN_OUT} Sign Out")).clicked() {
                    logout = true;
                }
                ui.add_space(10.0);
                ui.label(RichText::new(format!("{USER} {}", role.label())).weak());
            });
        });
    });

    logout
}

/// Render a back button that returns true when clicked.
pub fn back_button(ui: &mut Ui, label: &str) -> bool {
    ui.button(RichText::new(format!("{ARROW_LEFT} {label}")).size(14.0)).clicked()
}

/// Render a panel header with title and optional subtitle.
pub fn panel_header(ui: &mut Ui, title: &str, subtitle: &str) {
    ui.heading(RichText::new(title).size(24.0));
    if !subtitle.is_empty() {
        ui.label(RichText::new(subtitle).weak());
    }
    ui.add_space(10.0);
    ui.separator();
    ui.add_space(20.0);
}

/// Render a stat card with title, value, and an icon on the right.
pub fn stat_card(ui: &mut Ui, title: &str, value: &str, icon: &str, icon_color: Color32) {
    egui::Frame::new()
        .fill(ui.style().visuals.extreme_bg_color)
        .inner_margin(Margin::same(15))
        .outer_margin(Margin::same(5))
        .corner_radius(CornerRadius::same(8))
        .show(ui, |ui| {
            ui.set_min_width(180.0);

            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    ui.label(RichText::new(title).small().weak());
                    ui.label(RichText::new(value).heading().strong());
                });
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    ui.label(RichText::new(icon).size(26.0).color(icon_color));
                });
            });
        });
}

/// Render a small colored status chip.
pub fn badge(ui: &mut Ui, text: &str, color: Color32) {
    egui::Frame::new()
        .fill(color.gamma_multiply(0.2))
        .inner_margin(Margin::symmetric(8, 2))
        .corner_radius(CornerRadius::same(10))
        .show(ui, |ui| {
            ui.label(RichText::new(text).small().color(color));
        });
}

/// Render a card-style framed section with a strong title.
pub fn section_frame<R>(ui: &mut Ui, title: &str, add_contents: impl FnOnce(&mut Ui) -> R) -> R {
    egui::Frame::new()
        .fill(ui.style().visuals.extreme_bg_color)
        .inner_margin(Margin::same(15))
        .corner_radius(CornerRadius::same(8))
        .show(ui, |ui| {
            ui.label(RichText::new(title).strong());
            ui.add_space(10.0);
            add_contents(ui)
        })
        .inner
}
