//! GUI screens and application state.

pub mod app;
pub mod components;
pub mod create_exam;
pub mod doctor_dashboard;
pub mod exam_details;
pub mod lab_exams;
pub mod login;
pub mod measurement_screen;
pub mod pathologist_dashboard;
pub mod report_view;
pub mod unlock_device;

pub use app::App;
