//! Data models for exams, labs, and reports. All demo data lives in memory.

pub mod exam;
pub mod lab;
pub mod report;

pub use exam::{Exam, ExamStatus, Priority};
pub use lab::{LabStatus, Laboratory};
pub use report::{MeasurementResults, Report};
