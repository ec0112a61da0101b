//! Fullscreen station view listing the exams waiting for measurement.

use eframe::egui::{self, Color32, CornerRadius, Margin, RichText, ScrollArea, Ui};
use egui_phosphor::regular::{ARROW_LEFT, MICROSCOPE, PLAY};

use crate::models::{exam, lab};
use crate::session::NavEvent;

use super::app::App;
use super::components::{badge, colors};

/// Card fill on top of the dark device background.
const CARD_BG: Color32 = Color32::from_rgb(30, 41, 59);

/// Show the station exam queue.
pub fn show(app: &mut App, ui: &mut Ui) -> Option<NavEvent> {
    let mut event = None;

    let station = app
        .session
        .selected_lab_id
        .as_deref()
        .and_then(|id| lab::find(&app.labs, id));
    let (name, room) = match station {
        Some(lab) => (lab.name.clone(), lab.room.clone()),
        None => ("Lab Vision".to_string(), String::new()),
    };

    ui.horizontal(|ui| {
        if ui
            .button(RichText::new(format!("{ARROW_LEFT} Back to Dashboard")).color(Color32::WHITE))
            .clicked()
        {
            event = Some(NavEvent::Back);
        }
    });

    ui.add_space(10.0);

    ui.horizontal(|ui| {
        ui.label(RichText::new(MICROSCOPE).size(30.0).color(colors::ACCENT));
        ui.vertical(|ui| {
            ui.label(RichText::new(&name).size(24.0).strong().color(Color32::WHITE));
            if !room.is_empty() {
                ui.label(RichText::new(&room).weak().color(colors::NEUTRAL));
            }
        });
    });

    ui.add_space(20.0);

    ui.label(RichText::new("Exams Awaiting Measurement").strong().color(Color32::WHITE));
    ui.add_space(10.0);

    let pending: Vec<_> = exam::pending(&app.exams).into_iter().cloned().collect();

    ScrollArea::vertical().id_salt("lab_exams_scroll").show(ui, |ui| {
        if pending.is_empty() {
            ui.label(RichText::new("No pending exams for this station.").weak().color(colors::NEUTRAL));
        }

        for exam in &pending {
            egui::Frame::new()
                .fill(CARD_BG)
                .inner_margin(Margin::same(14))
                .outer_margin(Margin::symmetric(0, 4))
                .corner_radius(CornerRadius::same(8))
                .show(ui, |ui| {
                    ui.horizontal(|ui| {
                        ui.vertical(|ui| {
                            ui.horizontal(|ui| {
                                ui.label(RichText::new(&exam.patient).strong().color(Color32::WHITE));
                                badge(ui, exam.priority.label(), exam.priority.color());
                            });
                            ui.label(
                                RichText::new(format!(
                                    "{} years, {} • {}",
                                    exam.age, exam.gender, exam.exam_type
                                ))
                                .small()
                                .color(colors::NEUTRAL),
                            );
                            ui.label(
                                RichText::new(format!(
                                    "{} • {}",
                                    exam.requesting_doctor,
                                    exam.date.format("%d/%m/%Y")
                                ))
                                .small()
                                .color(colors::NEUTRAL),
                            );
                        });

                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            if ui.button(format!("{PLAY} Start Measurement")).clicked() {
                                event = Some(NavEvent::StartMeasurement(exam.id.clone()));
                            }
                        });
                    });
                });
        }
    });

    event
}
