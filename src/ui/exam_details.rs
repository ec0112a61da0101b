//! Exam detail view where the pathologist submits a result.

use eframe::egui::{self, RichText, ScrollArea, Ui};
use egui_phosphor::regular::{FILE_TEXT, PAPER_PLANE_TILT, RULER, TEST_TUBE, USER};

use crate::models::{exam, Exam};
use crate::session::NavEvent;

use super::app::App;
use super::components::{back_button, badge, panel_header, section_frame};

/// Show the details of the selected exam.
pub fn show(app: &mut App, ui: &mut Ui) -> Option<NavEvent> {
    let mut event = None;

    if back_button(ui, "Back to Dashboard") {
        return Some(NavEvent::Back);
    }

    let exam = app
        .session
        .selected_exam_id
        .as_deref()
        .and_then(|id| exam::find(&app.exams, id).cloned())
        .unwrap_or_else(|| Exam::placeholder("unknown"));

    panel_header(ui, "Exam Details", &format!("Exam #{}", exam.id));

    ScrollArea::vertical().id_salt("exam_details_scroll").show(ui, |ui| {
        ui.columns(2, |columns| {
            show_patient_card(&exam, &mut columns[0]);
            show_exam_card(&exam, &mut columns[1]);
        });

        ui.add_space(15.0);

        section_frame(ui, "Clinical History", |ui| {
            if exam.clinical_history.is_empty() {
                ui.label(RichText::new("No clinical history on record.").weak());
            } else {
                ui.label(&exam.clinical_history);
            }
        });

        ui.add_space(15.0);

        section_frame(ui, "Exam Result", |ui| {
            ui.label(RichText::new("Describe the findings to send to the requesting doctor.").weak());
            ui.add_space(8.0);
            ui.add(
                egui::TextEdit::multiline(&mut app.result_input)
                    .desired_rows(6)
                    .desired_width(f32::INFINITY)
                    .hint_text("Type the exam result..."),
            );
            ui.add_space(10.0);

            let can_send = !app.result_input.trim().is_empty();
            if ui
                .add_enabled(can_send, egui::Button::new(format!("{PAPER_PLANE_TILT} Send Result")))
                .clicked()
            {
                event = Some(NavEvent::SendResult);
            }
        });
    });

    event
}

fn show_patient_card(exam: &Exam, ui: &mut Ui) {
    section_frame(ui, &format!("{USER} Patient Information"), |ui| {
        egui::Grid::new("patient_info_grid").num_columns(2).spacing([20.0, 6.0]).show(ui, |ui| {
            ui.label(RichText::new("Name:").weak());
            ui.label(&exam.patient);
            ui.end_row();

            ui.label(RichText::new("Age:").weak());
            ui.label(format!("{} years", exam.age));
            ui.end_row();

            ui.label(RichText::new("Gender:").weak());
            ui.label(exam.gender.to_string());
            ui.end_row();

            ui.label(RichText::new("Requesting Doctor:").weak());
            ui.label(&exam.requesting_doctor);
            ui.end_row();
        });
    });
}

fn show_exam_card(exam: &Exam, ui: &mut Ui) {
    section_frame(ui, &format!("{FILE_TEXT} Exam Information"), |ui| {
        egui::Grid::new("exam_info_grid").num_columns(2).spacing([20.0, 6.0]).show(ui, |ui| {
            ui.label(RichText::new("Type:").weak());
            ui.label(&exam.exam_type);
            ui.end_row();

            ui.label(RichText::new("Status:").weak());
            badge(ui, exam.status.label(), exam.status.color());
            ui.end_row();

            ui.label(RichText::new("Priority:").weak());
            badge(ui, exam.priority.label(), exam.priority.color());
            ui.end_row();

            ui.label(RichText::new("Date:").weak());
            ui.label(exam.date.format("%d/%m/%Y").to_string());
            ui.end_row();
        });

        ui.add_space(10.0);

        ui.label(RichText::new(format!("{TEST_TUBE} Samples")).strong());
        if exam.samples.is_empty() {
            ui.label(RichText::new("No samples registered.").weak());
        } else {
            for sample in &exam.samples {
                ui.label(format!("• {sample}"));
            }
        }

        ui.add_space(10.0);

        ui.label(RichText::new(format!("{RULER} Sample Dimensions")).strong());
        egui::Grid::new("dimensions_grid").num_columns(2).spacing([20.0, 4.0]).show(ui, |ui| {
            ui.label(RichText::new("Width:").weak());
            ui.label(exam.dimensions.width);
            ui.end_row();
            ui.label(RichText::new("Length:").weak());
            ui.label(exam.dimensions.length);
            ui.end_row();
            ui.label(RichText::new("Height:").weak());
            ui.label(exam.dimensions.height);
            ui.end_row();
        });
    });
}
