//! Pathologist dashboard: pending exams and the Lab Vision station grid.

use eframe::egui::{self, CornerRadius, Margin, RichText, Sense, StrokeKind, Ui};
use egui_extras::{Column, TableBuilder};
use egui_phosphor::regular::{CLOCK, EYE, MICROSCOPE, PLUS, USER};

use crate::models::{exam, Laboratory};
use crate::session::NavEvent;

use super::app::App;
use super::components::{badge, colors, stat_card};

/// Show the pathologist dashboard.
pub fn show(app: &mut App, ui: &mut Ui) -> Option<NavEvent> {
    let mut event = None;

    ui.add_space(10.0);

    let pending = exam::pending(&app.exams);

    ui.horizontal(|ui| {
        stat_card(ui, "Pending Exams", &pending.len().to_string(), CLOCK, colors::ACCENT);
        // Fixed demo figure, the dataset has no completion timestamps.
        stat_card(ui, "Completed Today", "3", USER, colors::SUCCESS);
    });

    ui.add_space(15.0);

    if ui.button(format!("{PLUS} New Exam")).clicked() {
        event = Some(NavEvent::CreateExam);
    }

    ui.add_space(15.0);

    ui.label(RichText::new(format!("{CLOCK} Pending Exams")).strong());
    ui.add_space(8.0);

    let pending: Vec<_> = pending.into_iter().cloned().collect();
    TableBuilder::new(ui)
        .striped(true)
        .column(Column::auto().at_least(180.0))
        .column(Column::auto().at_least(180.0))
        .column(Column::auto().at_least(80.0))
        .column(Column::auto().at_least(150.0))
        .column(Column::remainder())
        .header(22.0, |mut header| {
            header.col(|ui| {
                ui.strong("Patient");
            });
            header.col(|ui| {
                ui.strong("Exam Type");
            });
            header.col(|ui| {
                ui.strong("Priority");
            });
            header.col(|ui| {
                ui.strong("Requesting Doctor");
            });
            header.col(|ui| {
                ui.strong("Actions");
            });
        })
        .body(|mut body| {
            for exam in &pending {
                body.row(26.0, |mut row| {
                    row.col(|ui| {
                        ui.label(&exam.patient);
                    });
                    row.col(|ui| {
                        ui.label(&exam.exam_type);
                    });
                    row.col(|ui| {
                        badge(ui, exam.priority.label(), exam.priority.color());
                    });
                    row.col(|ui| {
                        ui.label(&exam.requesting_doctor);
                    });
                    row.col(|ui| {
                        if ui.button(format!("{EYE} View Details")).clicked() {
                            event = Some(NavEvent::ViewExamDetails(exam.id.clone()));
                        }
                    });
                });
            }
        });

    ui.add_space(20.0);

    ui.label(RichText::new(format!("{MICROSCOPE} Available Machines")).strong());
    ui.add_space(8.0);

    // Lab cards in rows of four.
    let labs = app.labs.clone();
    for chunk in labs.chunks(4) {
        ui.horizontal(|ui| {
            for lab in chunk {
                if let Some(e) = lab_card(ui, lab) {
                    event = Some(e);
                }
            }
        });
        ui.add_space(10.0);
    }

    event
}

/// Render one station card. Online stations are clickable.
fn lab_card(ui: &mut Ui, lab: &Laboratory) -> Option<NavEvent> {
    let mut event = None;

    let sense = if lab.is_online() { Sense::click() } else { Sense::hover() };
    let (rect, response) = ui.allocate_exact_size([200.0, 110.0].into(), sense);

    if ui.is_rect_visible(rect) {
        let visuals = ui.style().interact(&response);

        ui.painter().rect_filled(rect, 8.0, visuals.bg_fill);
        ui.painter()
            .rect_stroke(rect, 8.0, visuals.bg_stroke, StrokeKind::Outside);

        let mut card = ui.new_child(egui::UiBuilder::new().max_rect(rect.shrink(12.0)));
        card.horizontal(|ui| {
            ui.label(RichText::new(MICROSCOPE).size(22.0).color(colors::ACCENT));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let dot = if lab.is_online() { colors::SUCCESS } else { colors::ERROR };
                ui.label(RichText::new("●").color(dot));
            });
        });
        card.label(RichText::new(&lab.name).strong());
        card.horizontal(|ui| {
            ui.label(RichText::new("Status:").small().weak());
            let color = if lab.is_online() { colors::SUCCESS } else { colors::ERROR };
            ui.label(RichText::new(lab.status.label()).small().color(color));
        });
        if lab.is_online() {
            card.label(RichText::new(format!("{} exams queued", lab.exams_count)).small().weak());
        } else {
            let _ = egui::Frame::new()
                .fill(colors::ERROR.gamma_multiply(0.15))
                .inner_margin(Margin::symmetric(6, 2))
                .corner_radius(CornerRadius::same(4))
                .show(&mut card, |ui| {
                    ui.label(RichText::new("Temporarily unavailable").small().color(colors::ERROR));
                });
        }
    }

    if lab.is_online() && response.clicked() {
        event = Some(NavEvent::RequestUnlock {
            lab_id: lab.id.clone(),
            device_name: lab.name.clone(),
        });
    }

    event
}
