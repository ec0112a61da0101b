//! Password prompt before a measurement station is opened.

use std::time::Instant;

use eframe::egui::{self, CornerRadius, Margin, RichText, Ui};
use egui_phosphor::regular::{EYE, EYE_SLASH, LOCK_KEY};

use crate::session::NavEvent;

use super::app::App;
use super::components::colors;

/// Show the unlock prompt. The verification delay itself is finished by the
/// frame loop, which dispatches [`NavEvent::UnlockSuccess`].
pub fn show(app: &mut App, ui: &mut Ui) -> Option<NavEvent> {
    let mut event = None;

    let device_name = app
        .session
        .selected_device_name
        .clone()
        .unwrap_or_else(|| "Lab Vision".to_string());

    ui.vertical_centered(|ui| {
        ui.add_space(80.0);

        egui::Frame::new()
            .fill(ui.style().visuals.extreme_bg_color)
            .inner_margin(Margin::same(24))
            .corner_radius(CornerRadius::same(8))
            .show(ui, |ui| {
                ui.set_max_width(380.0);

                ui.vertical_centered(|ui| {
                    ui.label(RichText::new(LOCK_KEY).size(40.0).color(colors::ACCENT));
                    ui.add_space(8.0);
                    ui.label(RichText::new("Unlock LabVision").size(20.0).strong());
                    ui.label(RichText::new(format!("Device: {device_name}")).weak());
                });

                ui.add_space(20.0);

                ui.label("Access password");
                ui.horizontal(|ui| {
                    ui.add(
                        egui::TextEdit::singleline(&mut app.unlock.password)
                            .desired_width(280.0)
                            .password(!app.unlock.show_password)
                            .hint_text("Enter the device password"),
                    );
                    let toggle = if app.unlock.show_password { EYE_SLASH } else { EYE };
                    if ui.button(toggle).clicked() {
                        app.unlock.show_password = !app.unlock.show_password;
                    }
                });

                ui.add_space(15.0);

                if app.unlock.is_verifying() {
                    ui.horizontal(|ui| {
                        ui.spinner();
                        ui.label(RichText::new("Verifying...").weak());
                    });
                } else {
                    ui.horizontal(|ui| {
                        let can_confirm = !app.unlock.password.is_empty();
                        if ui
                            .add_enabled(can_confirm, egui::Button::new("Confirm"))
                            .clicked()
                        {
                            app.unlock.verifying_since = Some(Instant::now());
                        }
                        if ui.button("Cancel").clicked() {
                            event = Some(NavEvent::UnlockCancel);
                        }
                    });
                }

                ui.add_space(10.0);
                ui.label(
                    RichText::new("Any password works in the demo environment.")
                        .small()
                        .weak(),
                );
            });
    });

    event
}
