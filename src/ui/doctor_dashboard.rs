//! Doctor dashboard: exam statistics and the requested-exams table.

use eframe::egui::{RichText, Ui};
use egui_extras::{Column, TableBuilder};
use egui_phosphor::regular::{CHECK_CIRCLE, EYE, FILE_TEXT, PLUS, WARNING_CIRCLE};

use crate::models::ExamStatus;
use crate::session::NavEvent;

use super::app::App;
use super::components::{badge, colors, stat_card};

/// Show the doctor dashboard.
///
/// Returns a navigation event when the doctor opens a report or requests a
/// new exam.
pub fn show(app: &mut App, ui: &mut Ui) -> Option<NavEvent> {
    let mut event = None;

    ui.add_space(10.0);

    // Stat cards row
    let in_analysis = app.exams.iter().filter(|e| e.status == ExamStatus::InAnalysis).count();
    let completed = app.exams.iter().filter(|e| e.status == ExamStatus::Completed).count();

    ui.horizontal(|ui| {
        stat_card(ui, "Total Exams", &app.exams.len().to_string(), FILE_TEXT, colors::ACCENT);
        stat_card(ui, "In Analysis", &in_analysis.to_string(), WARNING_CIRCLE, colors::INFO);
        stat_card(ui, "Completed", &completed.to_string(), CHECK_CIRCLE, colors::SUCCESS);
    });

    ui.add_space(15.0);

    if ui.button(format!("{PLUS} Request New Exam")).clicked() {
        event = Some(NavEvent::CreateExam);
    }

    ui.add_space(15.0);

    ui.label(RichText::new(format!("{FILE_TEXT} Requested Exams")).strong());
    ui.add_space(8.0);

    TableBuilder::new(ui)
        .striped(true)
        .column(Column::auto().at_least(180.0))
        .column(Column::auto().at_least(180.0))
        .column(Column::auto().at_least(100.0))
        .column(Column::auto().at_least(90.0))
        .column(Column::remainder())
        .header(22.0, |mut header| {
            header.col(|ui| {
                ui.strong("Patient");
            });
            header.col(|ui| {
                ui.strong("Exam Type");
            });
            header.col(|ui| {
                ui.strong("Status");
            });
            header.col(|ui| {
                ui.strong("Date");
            });
            header.col(|ui| {
                ui.strong("Actions");
            });
        })
        .body(|mut body| {
            for exam in &app.exams {
                body.row(26.0, |mut row| {
                    row.col(|ui| {
                        ui.label(&exam.patient);
                    });
                    row.col(|ui| {
                        ui.label(&exam.exam_type);
                    });
                    row.col(|ui| {
                        badge(ui, exam.status.label(), exam.status.color());
                    });
                    row.col(|ui| {
                        ui.label(exam.date.format("%d/%m/%Y").to_string());
                    });
                    row.col(|ui| {
                        if exam.has_report {
                            if ui.button(format!("{EYE} View Report")).clicked() {
                                event = Some(NavEvent::ViewReport(exam.id.clone()));
                            }
                        } else {
                            ui.label(RichText::new("Awaiting analysis").weak());
                        }
                    });
                });
            }
        });

    event
}
