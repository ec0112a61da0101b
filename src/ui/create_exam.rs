//! Create-exam screen: patient form plus the pathologist measurement tab.

use eframe::egui::{self, ProgressBar, RichText, ScrollArea, Ui};
use egui_phosphor::regular::{FLOPPY_DISK, MONITOR, PAUSE, PLAY, PULSE, STOP, USER};

use crate::models::MeasurementResults;
use crate::session::{NavEvent, Role};

use super::app::{App, ExamTab};
use super::components::{back_button, badge, colors, panel_header, section_frame};

const GENDERS: [&str; 4] = ["Male", "Female", "Other", "Not informed"];
const EXAM_TYPES: [&str; 5] = [
    "Breast Biopsy",
    "Histopathology Analysis",
    "Cervical Cytology",
    "Skin Biopsy",
    "Other",
];

/// Show the create-exam screen.
pub fn show(app: &mut App, ui: &mut Ui) -> Option<NavEvent> {
    let mut event = None;

    if back_button(ui, "Back to Dashboard") {
        return Some(NavEvent::Back);
    }

    panel_header(ui, "Create New Exam", "");

    let is_pathologist = app.session.role() == Some(Role::Pathologist);

    // Tab strip; the measurement tab is pathologist-only.
    ui.horizontal(|ui| {
        ui.selectable_value(
            &mut app.exam_form.active_tab,
            ExamTab::PatientInfo,
            format!("{USER} Patient Information"),
        );
        if is_pathologist {
            ui.selectable_value(
                &mut app.exam_form.active_tab,
                ExamTab::Measurements,
                format!("{PULSE} LabVision Measurements"),
            );
        }
    });

    ui.add_space(15.0);

    ScrollArea::vertical().id_salt("create_exam_scroll").show(ui, |ui| {
        match app.exam_form.active_tab {
            ExamTab::PatientInfo => show_patient_form(app, ui),
            ExamTab::Measurements if is_pathologist => show_measurements_tab(app, ui),
            // Tab is stale after a role change; fall back to the form.
            ExamTab::Measurements => show_patient_form(app, ui),
        }

        ui.add_space(20.0);
        ui.separator();
        ui.add_space(10.0);

        ui.horizontal(|ui| {
            if ui.button("Cancel").clicked() {
                event = Some(NavEvent::Back);
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let complete = app.exam_form.validate().is_ok();
                if ui
                    .add_enabled(complete, egui::Button::new(format!("{FLOPPY_DISK} Save Exam")))
                    .clicked()
                {
                    event = Some(NavEvent::SaveExam);
                }
            });
        });
    });

    event
}

fn show_patient_form(app: &mut App, ui: &mut Ui) {
    section_frame(ui, "Patient Data", |ui| {
        egui::Grid::new("patient_grid")
            .num_columns(2)
            .spacing([20.0, 10.0])
            .show(ui, |ui| {
                ui.label("Full Name *");
                ui.add(
                    egui::TextEdit::singleline(&mut app.exam_form.name)
                        .desired_width(280.0)
                        .hint_text("Patient's full name"),
                );
                ui.end_row();

                ui.label("Age *");
                ui.add(
                    egui::TextEdit::singleline(&mut app.exam_form.age)
                        .desired_width(80.0)
                        .hint_text("Age"),
                );
                ui.end_row();

                ui.label("Gender *");
                egui::ComboBox::from_id_salt("exam_gender")
                    .width(180.0)
                    .selected_text(app.exam_form.gender.as_deref().unwrap_or("Select..."))
                    .show_ui(ui, |ui| {
                        for gender in GENDERS {
                            if ui
                                .selectable_label(app.exam_form.gender.as_deref() == Some(gender), gender)
                                .clicked()
                            {
                                app.exam_form.gender = Some(gender.to_string());
                            }
                        }
                    });
                ui.end_row();

                ui.label("CPF *");
                ui.add(
                    egui::TextEdit::singleline(&mut app.exam_form.cpf)
                        .desired_width(160.0)
                        .hint_text("000.000.000-00"),
                );
                ui.end_row();

                ui.label("Phone");
                ui.add(
                    egui::TextEdit::singleline(&mut app.exam_form.phone)
                        .desired_width(160.0)
                        .hint_text("(00) 00000-0000"),
                );
                ui.end_row();

                ui.label("E-mail");
                ui.add(
                    egui::TextEdit::singleline(&mut app.exam_form.email)
                        .desired_width(280.0)
                        .hint_text("patient@email.com"),
                );
                ui.end_row();

                ui.label("Address");
                ui.add(
                    egui::TextEdit::singleline(&mut app.exam_form.address)
                        .desired_width(280.0)
                        .hint_text("Patient's full address"),
                );
                ui.end_row();

                ui.label("Exam Type *");
                egui::ComboBox::from_id_salt("exam_type")
                    .width(220.0)
                    .selected_text(app.exam_form.exam_type.as_deref().unwrap_or("Select..."))
                    .show_ui(ui, |ui| {
                        for exam_type in EXAM_TYPES {
                            if ui
                                .selectable_label(app.exam_form.exam_type.as_deref() == Some(exam_type), exam_type)
                                .clicked()
                            {
                                app.exam_form.exam_type = Some(exam_type.to_string());
                            }
                        }
                    });
                ui.end_row();
            });

        ui.add_space(10.0);

        ui.label("Clinical History");
        ui.add(
            egui::TextEdit::multiline(&mut app.exam_form.clinical_history)
                .desired_rows(4)
                .desired_width(f32::INFINITY)
                .hint_text("Relevant clinical history"),
        );

        ui.add_space(10.0);

        ui.label("Observations");
        ui.add(
            egui::TextEdit::multiline(&mut app.exam_form.observations)
                .desired_rows(3)
                .desired_width(f32::INFINITY)
                .hint_text("Additional notes about the exam"),
        );
    });
}

fn show_measurements_tab(app: &mut App, ui: &mut Ui) {
    ui.columns(2, |columns| {
        show_camera_preview(app, &mut columns[0]);
        show_run_controls(app, &mut columns[1]);
    });

    if app.quick_run.is_complete() {
        ui.add_space(15.0);
        show_results(ui);
    }
}

fn show_camera_preview(app: &App, ui: &mut Ui) {
    section_frame(ui, "LabVision Camera - Live", |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(20.0);
            let running = app.quick_run.is_running();
            let color = if running { colors::SUCCESS } else { colors::NEUTRAL };
            ui.label(RichText::new(MONITOR).size(48.0).color(color));
            ui.add_space(5.0);
            if running {
                badge(ui, "Camera Active", colors::SUCCESS);
                ui.label(RichText::new("Capturing images in real time").small().color(colors::SUCCESS));
            } else {
                badge(ui, "Camera Inactive", colors::NEUTRAL);
                ui.label(RichText::new("Start LabVision to activate the camera").small().weak());
            }
            ui.add_space(20.0);
        });

        if app.quick_run.is_running() {
            egui::Grid::new("camera_stats").num_columns(2).spacing([20.0, 4.0]).show(ui, |ui| {
                ui.label(RichText::new("Image quality:").small());
                ui.label(RichText::new("High (1080p)").small().color(colors::SUCCESS));
                ui.end_row();
                ui.label(RichText::new("FPS:").small());
                ui.label(RichText::new("30 fps").small().color(colors::SUCCESS));
                ui.end_row();
                ui.label(RichText::new("Zoom:").small());
                ui.label(RichText::new("40x").small().color(colors::INFO));
                ui.end_row();
            });
        }
    });
}

fn show_run_controls(app: &mut App, ui: &mut Ui) {
    section_frame(ui, "Measurement Controls", |ui| {
        if !app.quick_run.is_running() {
            if ui.button(format!("{PLAY} Start LabVision")).clicked() {
                app.quick_run.start();
            }
        } else {
            ui.horizontal(|ui| {
                if ui.button(format!("{PAUSE} Pause")).clicked() {
                    app.quick_run.toggle_pause();
                }
                if ui.button(format!("{STOP} Stop")).clicked() {
                    app.quick_run.stop();
                }
            });
        }

        ui.add_space(10.0);

        ui.horizontal(|ui| {
            ui.label(RichText::new("Measurement Progress").small().weak());
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("{:.0}%", app.quick_run.progress()));
            });
        });
        ui.add(ProgressBar::new(app.quick_run.progress() / 100.0).animate(app.quick_run.is_running()));

        if app.quick_run.is_active() {
            ui.label(RichText::new("Measurement in progress...").small().color(colors::INFO));
        }
        if app.quick_run.is_complete() {
            badge(ui, "Measurement Completed Successfully!", colors::SUCCESS);
        }

        ui.add_space(10.0);
        ui.separator();
        ui.add_space(5.0);

        ui.label(RichText::new("System Status").small().weak());
        egui::Grid::new("system_status").num_columns(2).spacing([20.0, 4.0]).show(ui, |ui| {
            ui.label(RichText::new("LabVision connection:").small());
            if app.quick_run.is_running() {
                badge(ui, "Connected", colors::SUCCESS);
            } else {
                badge(ui, "Disconnected", colors::NEUTRAL);
            }
            ui.end_row();

            ui.label(RichText::new("Calibration:").small());
            badge(ui, "OK", colors::SUCCESS);
            ui.end_row();

            ui.label(RichText::new("Temperature:").small());
            badge(ui, "25°C", colors::INFO);
            ui.end_row();
        });
    });
}

fn show_results(ui: &mut Ui) {
    let results = MeasurementResults::default();

    section_frame(ui, "Measurement Results", |ui| {
        ui.horizontal(|ui| {
            result_cell(ui, "Total Area", results.area);
            result_cell(ui, "Perimeter", results.perimeter);
            result_cell(ui, "Density", results.density);
        });
    });
}

fn result_cell(ui: &mut Ui, title: &str, value: &str) {
    ui.vertical(|ui| {
        ui.set_min_width(120.0);
        ui.label(RichText::new(title).small().weak());
        ui.label(RichText::new(value).size(18.0).strong());
    });
}
