//! Fullscreen measurement view with the simulated device run.

use eframe::egui::{self, Color32, CornerRadius, Margin, ProgressBar, RichText, Stroke, StrokeKind, Ui};
use egui_phosphor::regular::{ARROW_LEFT, CHECK_CIRCLE, PAUSE, PLAY, STOP};

use crate::measurement::STEPS;
use crate::models::{exam, Exam};
use crate::session::NavEvent;

use super::app::App;
use super::components::{badge, colors};

const CARD_BG: Color32 = Color32::from_rgb(30, 41, 59);

/// Show the measurement screen for the selected exam.
pub fn show(app: &mut App, ui: &mut Ui) -> Option<NavEvent> {
    let mut event = None;

    let exam = app
        .session
        .selected_exam_id
        .as_deref()
        .and_then(|id| exam::find(&app.exams, id).cloned())
        .unwrap_or_else(|| Exam::placeholder("unknown"));

    ui.horizontal(|ui| {
        if ui
            .button(RichText::new(format!("{ARROW_LEFT} Back to Exam Queue")).color(Color32::WHITE))
            .clicked()
        {
            event = Some(NavEvent::BackToLabExams);
        }
    });

    ui.add_space(10.0);

    ui.label(RichText::new("Sample Measurement").size(24.0).strong().color(Color32::WHITE));
    ui.label(
        RichText::new(format!("{} • {}", exam.patient, exam.exam_type))
            .weak()
            .color(colors::NEUTRAL),
    );

    ui.add_space(20.0);

    ui.columns(2, |columns| {
        show_sample_view(app, &mut columns[0]);
        if let Some(e) = show_run_panel(app, &mut columns[1]) {
            event = Some(e);
        }
    });

    event
}

/// Simulated microscope view: a sample circle that fills in as the run
/// progresses.
fn show_sample_view(app: &App, ui: &mut Ui) {
    egui::Frame::new()
        .fill(CARD_BG)
        .inner_margin(Margin::same(14))
        .corner_radius(CornerRadius::same(8))
        .show(ui, |ui| {
            ui.label(RichText::new("Sample View").strong().color(Color32::WHITE));
            ui.add_space(10.0);

            let (rect, _) = ui.allocate_exact_size([260.0, 260.0].into(), egui::Sense::hover());
            if ui.is_rect_visible(rect) {
                let painter = ui.painter();
                let center = rect.center();

                painter.rect_filled(rect, 8.0, Color32::from_rgb(10, 15, 30));
                painter.circle_stroke(center, 110.0, Stroke::new(2.0, colors::NEUTRAL));

                // Scanned fraction rendered as a growing inner disc.
                let radius = 105.0 * app.device_run.progress() / 100.0;
                if radius > 0.0 {
                    painter.circle_filled(center, radius, colors::ACCENT.gamma_multiply(0.35));
                    painter.circle_stroke(center, radius, Stroke::new(1.5, colors::ACCENT));
                }

                painter.rect_stroke(rect, 8.0, Stroke::new(1.0, CARD_BG), StrokeKind::Outside);
            }

            ui.add_space(8.0);
            if app.device_run.is_active() {
                ui.label(
                    RichText::new(format!("Magnification 40x • {}", app.device_run.elapsed_label()))
                        .small()
                        .color(colors::NEUTRAL),
                );
            } else {
                ui.label(RichText::new("Device idle").small().color(colors::NEUTRAL));
            }
        });
}

fn show_run_panel(app: &mut App, ui: &mut Ui) -> Option<NavEvent> {
    let mut event = None;

    egui::Frame::new()
        .fill(CARD_BG)
        .inner_margin(Margin::same(14))
        .corner_radius(CornerRadius::same(8))
        .show(ui, |ui| {
            ui.label(RichText::new("Measurement Progress").strong().color(Color32::WHITE));
            ui.add_space(10.0);

            ui.horizontal(|ui| {
                let step = if app.device_run.is_active() || app.device_run.is_complete() {
                    app.device_run.current_step()
                } else {
                    "Waiting to start"
                };
                ui.label(RichText::new(step).color(Color32::WHITE));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        RichText::new(format!("{:.1}%", app.device_run.progress())).color(Color32::WHITE),
                    );
                });
            });
            ui.add(ProgressBar::new(app.device_run.progress() / 100.0).animate(app.device_run.is_running()));

            ui.add_space(10.0);

            // Step checklist
            for (i, step) in STEPS.iter().enumerate() {
                let step_start = i as f32 * 100.0 / STEPS.len() as f32;
                let done = app.device_run.progress() >= (i + 1) as f32 * 100.0 / STEPS.len() as f32;
                let active = !done && app.device_run.is_active() && app.device_run.progress() >= step_start;

                let (icon, color) = if done {
                    (CHECK_CIRCLE, colors::SUCCESS)
                } else if active {
                    ("•", colors::ACCENT)
                } else {
                    ("•", colors::NEUTRAL)
                };
                ui.label(RichText::new(format!("{icon} {step}")).small().color(color));
            }

            ui.add_space(15.0);

            if app.device_run.is_complete() {
                badge(ui, "Measurement complete", colors::SUCCESS);
                ui.add_space(8.0);
                if ui.button(format!("{CHECK_CIRCLE} View Results")).clicked() {
                    event = Some(NavEvent::MeasurementComplete);
                }
            } else if !app.device_run.is_active() {
                if ui.button(format!("{PLAY} Start Measurement")).clicked() {
                    app.device_run.start();
                }
            } else {
                ui.horizontal(|ui| {
                    let pause_label = if app.device_run.is_paused() {
                        format!("{PLAY} Resume")
                    } else {
                        format!("{PAUSE} Pause")
                    };
                    if ui.button(pause_label).clicked() {
                        app.device_run.toggle_pause();
                    }
                    if ui.button(format!("{STOP} Stop")).clicked() {
                        app.device_run.stop();
                    }
                });
            }
        });

    event
}
