//! Finished-report view. Pathologists can edit the text in place.

use eframe::egui::{self, RichText, ScrollArea, TextStyle, Ui};
use egui_phosphor::regular::{CHECK, FILE_TEXT, PENCIL_SIMPLE, RULER, X};

use crate::models::report;
use crate::session::{NavEvent, Role};

use super::app::App;
use super::components::{back_button, panel_header, section_frame};

/// Show the report for the selected exam.
pub fn show(app: &mut App, ui: &mut Ui) -> Option<NavEvent> {
    let mut event = None;

    if back_button(ui, "Back to Dashboard") {
        return Some(NavEvent::Back);
    }

    let exam_id = app.session.selected_exam_id.clone().unwrap_or_default();
    let report = report::report_for(&exam_id);

    panel_header(ui, "Exam Report", &report.patient);

    let is_pathologist = app.session.role() == Some(Role::Pathologist);

    ScrollArea::vertical().id_salt("report_scroll").show(ui, |ui| {
        ui.columns(2, |columns| {
            show_metadata_card(&report, &mut columns[0]);
            show_measurements_card(&report, &mut columns[1]);
        });

        ui.add_space(15.0);

        section_frame(ui, &format!("{FILE_TEXT} Report"), |ui| {
            match app.report_edit.clone() {
                Some(mut buffer) => {
                    ui.add(
                        egui::TextEdit::multiline(&mut buffer)
                            .desired_rows(18)
                            .desired_width(f32::INFINITY)
                            .font(TextStyle::Monospace),
                    );
                    app.report_edit = Some(buffer);

                    ui.add_space(10.0);
                    ui.horizontal(|ui| {
                        if ui.button(format!("{CHECK} Save Changes")).clicked() {
                            app.report_edit = None;
                            app.notify_success("Report updated successfully!");
                        }
                        if ui.button(format!("{X} Cancel")).clicked() {
                            app.report_edit = None;
                        }
                    });
                }
                None => {
                    ui.label(RichText::new(&report.body).monospace());

                    if is_pathologist {
                        ui.add_space(10.0);
                        if ui.button(format!("{PENCIL_SIMPLE} Edit Report")).clicked() {
                            app.report_edit = Some(report.body.clone());
                        }
                    }
                }
            }
        });

        ui.add_space(15.0);

        if app.report_edit.is_none() && ui.button(format!("{CHECK} Confirm and Return")).clicked() {
            event = Some(NavEvent::Back);
        }
    });

    event
}

fn show_metadata_card(report: &report::Report, ui: &mut Ui) {
    section_frame(ui, "Exam Data", |ui| {
        egui::Grid::new("report_meta_grid").num_columns(2).spacing([20.0, 6.0]).show(ui, |ui| {
            ui.label(RichText::new("Patient:").weak());
            ui.label(&report.patient);
            ui.end_row();

            ui.label(RichText::new("Exam Type:").weak());
            ui.label(&report.exam_type);
            ui.end_row();

            ui.label(RichText::new("Exam Date:").weak());
            ui.label(report.exam_date.format("%d/%m/%Y").to_string());
            ui.end_row();

            ui.label(RichText::new("Report Date:").weak());
            ui.label(report.report_date.format("%d/%m/%Y").to_string());
            ui.end_row();

            ui.label(RichText::new("Pathologist:").weak());
            ui.label(&report.pathologist);
            ui.end_row();

            ui.label(RichText::new("Requesting Doctor:").weak());
            ui.label(&report.requesting_doctor);
            ui.end_row();
        });
    });
}

fn show_measurements_card(report: &report::Report, ui: &mut Ui) {
    section_frame(ui, &format!("{RULER} Sample Measurements"), |ui| {
        egui::Grid::new("report_measurements_grid").num_columns(2).spacing([20.0, 6.0]).show(ui, |ui| {
            ui.label(RichText::new("Width:").weak());
            ui.label(report.measurements.width);
            ui.end_row();

            ui.label(RichText::new("Length:").weak());
            ui.label(report.measurements.length);
            ui.end_row();

            ui.label(RichText::new("Height:").weak());
            ui.label(report.measurements.height);
            ui.end_row();
        });
    });
}
