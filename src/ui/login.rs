//! Login screen with the demo credential rule.

use eframe::egui::{self, CornerRadius, Margin, RichText, Ui};
use egui_phosphor::regular::SHIELD_CHECK;

use crate::session::NavEvent;

use super::app::App;
use super::components::colors;

/// Show the login screen.
///
/// Returns the login event once the form is submitted.
pub fn show(app: &mut App, ui: &mut Ui) -> Option<NavEvent> {
    let mut event = None;

    ui.vertical_centered(|ui| {
        ui.add_space(60.0);

        ui.label(RichText::new(SHIELD_CHECK).size(48.0).color(colors::ACCENT));
        ui.add_space(10.0);
        ui.label(RichText::new("LabVision").size(28.0).strong());
        ui.label(RichText::new("Pathology Exam Management System").weak());

        ui.add_space(30.0);

        egui::Frame::new()
            .fill(ui.style().visuals.extreme_bg_color)
            .inner_margin(Margin::same(20))
            .corner_radius(CornerRadius::same(8))
            .show(ui, |ui| {
                ui.set_max_width(360.0);

                egui::Grid::new("login_grid")
                    .num_columns(2)
                    .spacing([15.0, 10.0])
                    .show(ui, |ui| {
                        ui.label("E-mail:");
                        ui.add(
                            egui::TextEdit::singleline(&mut app.login_form.email)
                                .desired_width(220.0)
                                .hint_text("your@email.com"),
                        );
                        ui.end_row();

                        ui.label("Password:");
                        ui.add(
                            egui::TextEdit::singleline(&mut app.login_form.password)
                                .desired_width(220.0)
                                .password(true)
                                .hint_text("••••••••"),
                        );
                        ui.end_row();
                    });

                ui.add_space(15.0);

                let can_submit = app.login_form.is_complete();
                if ui
                    .add_enabled(can_submit, egui::Button::new("Sign In").min_size([320.0, 28.0].into()))
                    .clicked()
                {
                    event = Some(NavEvent::Login(app.login_form.role()));
                }

                ui.add_space(15.0);
                ui.separator();
                ui.add_space(10.0);

                ui.label(RichText::new("For the demo, use:").small().weak());
                ui.label(RichText::new("• medico@example.com (doctor dashboard)").small());
                ui.label(RichText::new("• patologista@example.com (pathologist dashboard)").small());
            });
    });

    event
}
