//! Session state and screen navigation.
//!
//! All screens render from a single [`Session`] and report user intent back as
//! [`NavEvent`] values; [`Session::dispatch`] is the only place that moves
//! between pages or touches the selection context.

/// Logged-in user role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Doctor,
    Pathologist,
}

impl Role {
    /// Display name for headers and toasts.
    pub fn label(&self) -> &'static str {
        match self {
            Role::Doctor => "Doctor",
            Role::Pathologist => "Pathologist",
        }
    }

    /// Dashboard page for this role.
    pub fn dashboard(&self) -> Page {
        match self {
            Role::Doctor => Page::DoctorDashboard,
            Role::Pathologist => Page::PathologistDashboard,
        }
    }
}

/// Current screen being displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Login,
    DoctorDashboard,
    PathologistDashboard,
    ExamDetails,
    ReportView,
    CreateExam,
    LabExams,
    Measurement,
    UnlockDevice,
}

/// User intent reported by a screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavEvent {
    Login(Role),
    Logout,
    ViewReport(String),
    ViewExamDetails(String),
    CreateExam,
    SaveExam,
    RequestUnlock { lab_id: String, device_name: String },
    UnlockSuccess,
    UnlockCancel,
    StartMeasurement(String),
    BackToLabExams,
    MeasurementComplete,
    SendResult,
    Back,
}

/// Session state: role, current page, and ephemeral selection context.
///
/// Invariant: `role` is `None` exactly when `page` is [`Page::Login`].
#[derive(Debug, Clone, Default)]
pub struct Session {
    role: Option<Role>,
    page: Page,
    pub selected_exam_id: Option<String>,
    pub selected_lab_id: Option<String>,
    pub selected_device_name: Option<String>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn role(&self) -> Option<Role> {
        self.role
    }

    pub fn page(&self) -> Page {
        self.page
    }

    /// Dashboard for the current role. Falls back to the login screen when no
    /// role is set, so a degraded session can never strand the user.
    pub fn dashboard(&self) -> Page {
        self.role.map(|role| role.dashboard()).unwrap_or(Page::Login)
    }

    /// Apply a navigation event.
    ///
    /// Events that are not valid on the current page are ignored and return
    /// `false`; there are no error states.
    pub fn dispatch(&mut self, event: NavEvent) -> bool {
        use Page::*;

        let applied = match event {
            NavEvent::Login(role) if self.page == Login => {
                self.role = Some(role);
                self.page = role.dashboard();
                true
            }
            NavEvent::Logout => {
                self.role = None;
                self.page = Login;
                self.clear_selection();
                true
            }
            NavEvent::ViewReport(exam_id) if self.page == DoctorDashboard => {
                self.selected_exam_id = Some(exam_id);
                self.page = ReportView;
                true
            }
            NavEvent::ViewExamDetails(exam_id) if self.page == PathologistDashboard => {
                self.selected_exam_id = Some(exam_id);
                self.page = ExamDetails;
                true
            }
            NavEvent::CreateExam if matches!(self.page, DoctorDashboard | PathologistDashboard) => {
                self.page = CreateExam;
                true
            }
            NavEvent::SaveExam if self.page == CreateExam => {
                self.page = self.dashboard();
                true
            }
            NavEvent::RequestUnlock { lab_id, device_name } if self.page == PathologistDashboard => {
                self.selected_lab_id = Some(lab_id);
                self.selected_device_name = Some(device_name);
                self.page = UnlockDevice;
                true
            }
            NavEvent::UnlockSuccess if self.page == UnlockDevice => {
                self.page = LabExams;
                true
            }
            NavEvent::UnlockCancel if self.page == UnlockDevice => {
                self.selected_lab_id = None;
                self.selected_device_name = None;
                self.page = PathologistDashboard;
                true
            }
            NavEvent::StartMeasurement(exam_id) if self.page == LabExams => {
                self.selected_exam_id = Some(exam_id);
                self.page = Measurement;
                true
            }
            NavEvent::BackToLabExams if self.page == Measurement => {
                self.selected_exam_id = None;
                self.page = LabExams;
                true
            }
            NavEvent::MeasurementComplete if self.page == Measurement => {
                self.page = ExamDetails;
                true
            }
            NavEvent::SendResult if self.page == ExamDetails => {
                self.page = self.dashboard();
                true
            }
            NavEvent::Back if matches!(self.page, ExamDetails | ReportView | CreateExam | LabExams) => {
                self.clear_selection();
                self.page = self.dashboard();
                true
            }
            other => {
                tracing::debug!("Ignored {:?} on {:?}", other, self.page);
                false
            }
        };

        if applied {
            tracing::debug!("Navigated to {:?}", self.page);
        }
        applied
    }

    fn clear_selection(&mut self) {
        self.selected_exam_id = None;
        self.selected_lab_id = None;
        self.selected_device_name = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn logged_in(role: Role) -> Session {
        let mut s = Session::new();
        assert!(s.dispatch(NavEvent::Login(role)));
        s
    }

    #[test]
    fn test_starts_at_login_without_role() {
        let s = Session::new();
        assert_eq!(s.page(), Page::Login);
        assert!(s.role().is_none());
    }

    #[test]
    fn test_login_routes_by_role() {
        assert_eq!(logged_in(Role::Doctor).page(), Page::DoctorDashboard);
        assert_eq!(logged_in(Role::Pathologist).page(), Page::PathologistDashboard);
    }

    #[test]
    fn test_logout_resets_everything() {
        let mut s = logged_in(Role::Pathologist);
        s.dispatch(NavEvent::RequestUnlock {
            lab_id: "lab-a".to_string(),
            device_name: "Lab Vision A".to_string(),
        });
        assert!(s.dispatch(NavEvent::Logout));

        assert_eq!(s.page(), Page::Login);
        assert!(s.role().is_none());
        assert!(s.selected_exam_id.is_none());
        assert!(s.selected_lab_id.is_none());
        assert!(s.selected_device_name.is_none());
    }

    #[test]
    fn test_role_is_none_iff_on_login_page() {
        // Walk a long event sequence and check the invariant after each step.
        let events = [
            NavEvent::Logout,
            NavEvent::Login(Role::Doctor),
            NavEvent::ViewReport("1".to_string()),
            NavEvent::Back,
            NavEvent::CreateExam,
            NavEvent::SaveExam,
            NavEvent::Logout,
            NavEvent::Login(Role::Pathologist),
            NavEvent::ViewExamDetails("2".to_string()),
            NavEvent::SendResult,
            NavEvent::RequestUnlock {
                lab_id: "lab-b".to_string(),
                device_name: "Lab Vision B".to_string(),
            },
            NavEvent::UnlockSuccess,
            NavEvent::StartMeasurement("3".to_string()),
            NavEvent::MeasurementComplete,
            NavEvent::Back,
            NavEvent::Logout,
        ];

        let mut s = Session::new();
        for event in events {
            s.dispatch(event);
            assert_eq!(s.role().is_none(), s.page() == Page::Login, "at {:?}", s.page());
        }
    }

    #[test]
    fn test_doctor_report_flow() {
        let mut s = logged_in(Role::Doctor);
        assert!(s.dispatch(NavEvent::ViewReport("1".to_string())));
        assert_eq!(s.page(), Page::ReportView);
        assert_eq!(s.selected_exam_id.as_deref(), Some("1"));

        assert!(s.dispatch(NavEvent::Back));
        assert_eq!(s.page(), Page::DoctorDashboard);
        assert!(s.selected_exam_id.is_none());
    }

    #[test]
    fn test_create_exam_returns_to_own_dashboard() {
        let mut s = logged_in(Role::Doctor);
        assert!(s.dispatch(NavEvent::CreateExam));
        assert_eq!(s.page(), Page::CreateExam);
        assert!(s.dispatch(NavEvent::SaveExam));
        assert_eq!(s.page(), Page::DoctorDashboard);

        let mut s = logged_in(Role::Pathologist);
        s.dispatch(NavEvent::CreateExam);
        s.dispatch(NavEvent::SaveExam);
        assert_eq!(s.page(), Page::PathologistDashboard);
    }

    #[test]
    fn test_unlock_flow() {
        let mut s = logged_in(Role::Pathologist);
        assert!(s.dispatch(NavEvent::RequestUnlock {
            lab_id: "lab-a".to_string(),
            device_name: "Lab Vision A".to_string(),
        }));
        assert_eq!(s.page(), Page::UnlockDevice);
        assert_eq!(s.selected_device_name.as_deref(), Some("Lab Vision A"));

        assert!(s.dispatch(NavEvent::UnlockSuccess));
        assert_eq!(s.page(), Page::LabExams);
        assert_eq!(s.selected_lab_id.as_deref(), Some("lab-a"));
    }

    #[test]
    fn test_unlock_cancel_clears_device_context() {
        let mut s = logged_in(Role::Pathologist);
        s.dispatch(NavEvent::RequestUnlock {
            lab_id: "lab-a".to_string(),
            device_name: "Lab Vision A".to_string(),
        });
        assert!(s.dispatch(NavEvent::UnlockCancel));

        assert_eq!(s.page(), Page::PathologistDashboard);
        assert!(s.selected_lab_id.is_none());
        assert!(s.selected_device_name.is_none());
    }

    #[test]
    fn test_measurement_flow() {
        let mut s = logged_in(Role::Pathologist);
        s.dispatch(NavEvent::RequestUnlock {
            lab_id: "lab-a".to_string(),
            device_name: "Lab Vision A".to_string(),
        });
        s.dispatch(NavEvent::UnlockSuccess);

        assert!(s.dispatch(NavEvent::StartMeasurement("5".to_string())));
        assert_eq!(s.page(), Page::Measurement);
        assert_eq!(s.selected_exam_id.as_deref(), Some("5"));

        assert!(s.dispatch(NavEvent::MeasurementComplete));
        assert_eq!(s.page(), Page::ExamDetails);
        assert_eq!(s.selected_exam_id.as_deref(), Some("5"));

        assert!(s.dispatch(NavEvent::SendResult));
        assert_eq!(s.page(), Page::PathologistDashboard);
    }

    #[test]
    fn test_back_from_measurement_clears_exam() {
        let mut s = logged_in(Role::Pathologist);
        s.dispatch(NavEvent::RequestUnlock {
            lab_id: "lab-a".to_string(),
            device_name: "Lab Vision A".to_string(),
        });
        s.dispatch(NavEvent::UnlockSuccess);
        s.dispatch(NavEvent::StartMeasurement("5".to_string()));

        assert!(s.dispatch(NavEvent::BackToLabExams));
        assert_eq!(s.page(), Page::LabExams);
        assert!(s.selected_exam_id.is_none());
    }

    #[test]
    fn test_back_from_lab_exams_returns_to_dashboard() {
        let mut s = logged_in(Role::Pathologist);
        s.dispatch(NavEvent::RequestUnlock {
            lab_id: "lab-a".to_string(),
            device_name: "Lab Vision A".to_string(),
        });
        s.dispatch(NavEvent::UnlockSuccess);

        assert!(s.dispatch(NavEvent::Back));
        assert_eq!(s.page(), Page::PathologistDashboard);
        assert!(s.selected_lab_id.is_none());
        assert!(s.selected_device_name.is_none());
    }

    #[test]
    fn test_guarded_events_are_ignored() {
        let mut s = Session::new();
        assert!(!s.dispatch(NavEvent::SaveExam));
        assert!(!s.dispatch(NavEvent::UnlockSuccess));
        assert_eq!(s.page(), Page::Login);

        let mut s = logged_in(Role::Doctor);
        // Pathologist-only transitions do nothing for a doctor.
        assert!(!s.dispatch(NavEvent::ViewExamDetails("2".to_string())));
        assert!(!s.dispatch(NavEvent::RequestUnlock {
            lab_id: "lab-a".to_string(),
            device_name: "Lab Vision A".to_string(),
        }));
        assert_eq!(s.page(), Page::DoctorDashboard);
        assert!(s.selected_exam_id.is_none());
    }

    #[test]
    fn test_login_ignored_when_already_logged_in() {
        let mut s = logged_in(Role::Doctor);
        assert!(!s.dispatch(NavEvent::Login(Role::Pathologist)));
        assert_eq!(s.page(), Page::DoctorDashboard);
        assert_eq!(s.role(), Some(Role::Doctor));
    }
}
