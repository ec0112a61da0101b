//! Main application state.

use std::time::{Duration, Instant};

use eframe::egui::{self, Align2, CornerRadius, Margin, RichText};

use crate::config::AppConfig;
use crate::error::AppError;
use crate::measurement::MeasurementRun;
use crate::models::{exam, lab, Exam, Laboratory};
use crate::session::{NavEvent, Page, Role, Session};

use super::components::{self, colors};
use super::{
    create_exam, doctor_dashboard, exam_details, lab_exams, login, measurement_screen, pathologist_dashboard,
    report_view, unlock_device,
};

/// How long a notice stays on screen.
const NOTICE_TTL: Duration = Duration::from_secs(4);

/// Notice severity for toast messages.
#[derive(Clone, Copy, Debug)]
pub enum LogLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// Toast message shown in the top-right corner.
pub struct Notice {
    pub level: LogLevel,
    pub message: String,
    pub created: Instant,
}

/// Login form state.
#[derive(Default, Clone)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Both fields filled.
    pub fn is_complete(&self) -> bool {
        !self.email.trim().is_empty() && !self.password.is_empty()
    }

    /// Demo login rule: addresses mentioning a doctor get the doctor
    /// dashboard, everyone else is a pathologist.
    pub fn role(&self) -> Role {
        let email = self.email.to_lowercase();
        if email.contains("medico") || email.contains("doctor") {
            Role::Doctor
        } else {
            Role::Pathologist
        }
    }
}

/// Active tab on the create-exam screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExamTab {
    #[default]
    PatientInfo,
    Measurements,
}

/// Create-exam form state.
#[derive(Default, Clone)]
pub struct ExamForm {
    pub active_tab: ExamTab,
    pub name: String,
    pub age: String,
    pub gender: Option<String>,
    pub cpf: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub exam_type: Option<String>,
    pub clinical_history: String,
    pub observations: String,
}

impl ExamForm {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Required fields: name, age, CPF, and exam type.
    pub fn validate(&self) -> crate::Result<()> {
        if self.name.trim().is_empty() {
            return Err(AppError::validation("Patient name is required"));
        }
        if self.age.trim().parse::<u8>().is_err() {
            return Err(AppError::validation("Age must be a number between 0 and 255"));
        }
        if self.cpf.trim().is_empty() {
            return Err(AppError::validation("CPF is required"));
        }
        if self.exam_type.is_none() {
            return Err(AppError::validation("Exam type is required"));
        }
        Ok(())
    }
}

/// Unlock screen state.
#[derive(Default)]
pub struct UnlockState {
    pub password: String,
    pub show_password: bool,
    /// Set while the fake verification delay is running.
    pub verifying_since: Option<Instant>,
}

impl UnlockState {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_verifying(&self) -> bool {
        self.verifying_since.is_some()
    }
}

/// Main application state.
pub struct App {
    pub config: AppConfig,
    pub session: Session,

    // Seeded demo data
    pub exams: Vec<Exam>,
    pub labs: Vec<Laboratory>,

    // Screen state
    pub login_form: LoginForm,
    pub exam_form: ExamForm,
    pub unlock: UnlockState,
    pub result_input: String,
    /// Report edit buffer; `Some` while the pathologist is editing.
    pub report_edit: Option<String>,

    // Simulated device runs
    pub device_run: MeasurementRun,
    pub quick_run: MeasurementRun,

    pub notices: Vec<Notice>,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        let device_run = MeasurementRun::new(config.demo.measurement_secs);
        let quick_run = MeasurementRun::new(config.demo.quick_measurement_secs);

        Self {
            config,
            session: Session::new(),
            exams: exam::seed_exams(),
            labs: lab::seed_labs(),
            login_form: LoginForm::default(),
            exam_form: ExamForm::default(),
            unlock: UnlockState::default(),
            result_input: String::new(),
            report_edit: None,
            device_run,
            quick_run,
            notices: Vec::new(),
        }
    }

    /// Push a toast notice.
    pub fn notify(&mut self, level: LogLevel, message: impl Into<String>) {
        let message = message.into();
        tracing::info!("{}", message);
        self.notices.push(Notice {
            level,
            message,
            created: Instant::now(),
        });
    }

    pub fn notify_success(&mut self, message: impl Into<String>) {
        self.notify(LogLevel::Success, message);
    }

    pub fn notify_info(&mut self, message: impl Into<String>) {
        self.notify(LogLevel::Info, message);
    }

    pub fn notify_error(&mut self, message: impl Into<String>) {
        self.notify(LogLevel::Error, message);
    }

    /// Dispatch a navigation event and run its screen side effects.
    pub fn navigate(&mut self, event: NavEvent) {
        let from = self.session.page();
        let toast = toast_for(&event);

        if self.session.dispatch(event) {
            self.reset_transient(from);
            if let Some((level, message)) = toast {
                self.notify(level, message.to_string());
            }
        }
    }

    /// Clear screen-local state when a page is left.
    fn reset_transient(&mut self, from: Page) {
        if from == self.session.page() {
            return;
        }
        match from {
            Page::Login => self.login_form.reset(),
            Page::CreateExam => {
                self.exam_form.reset();
                self.quick_run.stop();
            }
            // Leaving the screen cancels the simulated run.
            Page::Measurement => self.device_run.stop(),
            Page::UnlockDevice => self.unlock.reset(),
            Page::ExamDetails => self.result_input.clear(),
            Page::ReportView => self.report_edit = None,
            _ => {}
        }
    }

    fn prune_notices(&mut self) {
        self.notices.retain(|n| n.created.elapsed() < NOTICE_TTL);
    }

    /// Render toast notices in the top-right corner.
    fn show_notices(&self, ctx: &egui::Context) {
        if self.notices.is_empty() {
            return;
        }

        egui::Area::new(egui::Id::new("notices"))
            .anchor(Align2::RIGHT_TOP, [-12.0, 12.0])
            .interactable(false)
            .show(ctx, |ui| {
                for notice in &self.notices {
                    let color = match notice.level {
                        LogLevel::Info => colors::INFO,
                        LogLevel::Success => colors::SUCCESS,
                        LogLevel::Warning => colors::WARNING,
                        LogLevel::Error => colors::ERROR,
                    };
                    egui::Frame::new()
                        .fill(ui.style().visuals.extreme_bg_color)
                        .stroke(egui::Stroke::new(1.0, color))
                        .inner_margin(Margin::symmetric(12, 8))
                        .corner_radius(CornerRadius::same(6))
                        .show(ui, |ui| {
                            ui.label(RichText::new(&notice.message).color(color));
                        });
                    ui.add_space(6.0);
                }
            });
    }
}

/// Toast announcement for events that complete a user action.
fn toast_for(event: &NavEvent) -> Option<(LogLevel, &'static str)> {
    match event {
        NavEvent::Login(_) => Some((LogLevel::Success, "Login successful! Welcome to LabVision.")),
        NavEvent::Logout => Some((LogLevel::Info, "Signed out successfully.")),
        NavEvent::SaveExam => Some((LogLevel::Success, "Exam created successfully!")),
        NavEvent::UnlockSuccess => Some((LogLevel::Success, "LabVision unlocked successfully")),
        NavEvent::MeasurementComplete => Some((LogLevel::Success, "Measurement completed successfully!")),
        NavEvent::SendResult => Some((LogLevel::Success, "Result sent successfully!")),
        _ => None,
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Advance whichever simulated run belongs to the current screen.
        let dt = Duration::from_secs_f32(ctx.input(|i| i.stable_dt));
        match self.session.page() {
            Page::Measurement => self.device_run.tick(dt),
            Page::CreateExam => self.quick_run.tick(dt),
            _ => {}
        }

        // Finish the fake unlock verification.
        if self.session.page() == Page::UnlockDevice
            && let Some(started) = self.unlock.verifying_since
            && started.elapsed() >= Duration::from_millis(self.config.demo.unlock_delay_ms)
        {
            self.navigate(NavEvent::UnlockSuccess);
        }

        // Request repaint while anything is animating
        if self.device_run.is_running()
            || self.quick_run.is_running()
            || self.unlock.is_verifying()
            || !self.notices.is_empty()
        {
            ctx.request_repaint();
        }

        self.prune_notices();

        // Header bar on standard pages; the device screens are fullscreen.
        let page = self.session.page();
        if let Some(role) = self.session.role()
            && !matches!(page, Page::Login | Page::LabExams | Page::Measurement)
            && components::header_bar(ctx, role)
        {
            self.navigate(NavEvent::Logout);
        }

        // Main content
        let panel = match self.session.page() {
            Page::LabExams | Page::Measurement => egui::CentralPanel::default().frame(
                egui::Frame::new()
                    .fill(colors::DEVICE_BG)
                    .inner_margin(Margin::same(10)),
            ),
            _ => egui::CentralPanel::default(),
        };

        panel.show(ctx, |ui| {
            let event = match self.session.page() {
                Page::Login => login::show(self, ui),
                Page::DoctorDashboard => doctor_dashboard::show(self, ui),
                Page::PathologistDashboard => pathologist_dashboard::show(self, ui),
                Page::ExamDetails => exam_details::show(self, ui),
                Page::ReportView => report_view::show(self, ui),
                Page::CreateExam => create_exam::show(self, ui),
                Page::LabExams => lab_exams::show(self, ui),
                Page::Measurement => measurement_screen::show(self, ui),
                Page::UnlockDevice => unlock_device::show(self, ui),
            };

            if let Some(event) = event {
                self.navigate(event);
            }
        });

        self.show_notices(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_form_role_rule() {
        let mut form = LoginForm {
            email: "medico@example.com".to_string(),
            password: "x".to_string(),
        };
        assert_eq!(form.role(), Role::Doctor);

        form.email = "doctor.house@clinic.org".to_string();
        assert_eq!(form.role(), Role::Doctor);

        form.email = "patologista@example.com".to_string();
        assert_eq!(form.role(), Role::Pathologist);
    }

    #[test]
    fn test_login_form_completeness() {
        let mut form = LoginForm::default();
        assert!(!form.is_complete());
        form.email = "a@b.com".to_string();
        assert!(!form.is_complete());
        form.password = "secret".to_string();
        assert!(form.is_complete());
    }

    #[test]
    fn test_exam_form_required_fields() {
        let mut form = ExamForm::default();
        assert!(form.validate().is_err());

        form.name = "Maria Silva".to_string();
        form.age = "52".to_string();
        form.cpf = "000.000.000-00".to_string();
        assert!(form.validate().is_err());

        form.exam_type = Some("Breast Biopsy".to_string());
        assert!(form.validate().is_ok());

        form.age = "not-a-number".to_string();
        assert!(form.validate().is_err());
    }

    #[test]
    fn test_leaving_measurement_resets_run() {
        let mut app = App::new(AppConfig::default());
        app.navigate(NavEvent::Login(Role::Pathologist));
        app.navigate(NavEvent::RequestUnlock {
            lab_id: "lab-a".to_string(),
            device_name: "Lab Vision A".to_string(),
        });
        app.navigate(NavEvent::UnlockSuccess);
        app.navigate(NavEvent::StartMeasurement("5".to_string()));

        app.device_run.start();
        app.device_run.tick(Duration::from_secs(3));
        assert!(app.device_run.progress() > 0.0);

        app.navigate(NavEvent::BackToLabExams);
        assert_eq!(app.device_run.progress(), 0.0);
        assert!(!app.device_run.is_running());
    }

    #[test]
    fn test_logout_clears_unlock_state() {
        let mut app = App::new(AppConfig::default());
        app.navigate(NavEvent::Login(Role::Pathologist));
        app.navigate(NavEvent::RequestUnlock {
            lab_id: "lab-a".to_string(),
            device_name: "Lab Vision A".to_string(),
        });
        app.unlock.password = "secret".to_string();
        app.unlock.verifying_since = Some(Instant::now());

        app.navigate(NavEvent::Logout);
        assert!(app.unlock.password.is_empty());
        assert!(!app.unlock.is_verifying());
        assert_eq!(app.session.page(), Page::Login);
    }

    #[test]
    fn test_applied_events_raise_notices() {
        let mut app = App::new(AppConfig::default());
        app.navigate(NavEvent::Login(Role::Doctor));
        assert_eq!(app.notices.len(), 1);

        // Ignored event: no notice.
        app.navigate(NavEvent::UnlockSuccess);
        assert_eq!(app.notices.len(), 1);
    }
}
