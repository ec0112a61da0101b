//! Exam records and the seeded demo dataset.

use chrono::NaiveDate;
use eframe::egui::Color32;

use crate::ui::components::colors;

/// Exam processing status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExamStatus {
    Pending,
    InAnalysis,
    Completed,
}

impl ExamStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ExamStatus::Pending => "Pending",
            ExamStatus::InAnalysis => "In Analysis",
            ExamStatus::Completed => "Completed",
        }
    }

    pub fn color(&self) -> Color32 {
        match self {
            ExamStatus::Pending => colors::WARNING,
            ExamStatus::InAnalysis => colors::INFO,
            ExamStatus::Completed => colors::SUCCESS,
        }
    }
}

/// Exam priority assigned by the requesting doctor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn label(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }

    pub fn color(&self) -> Color32 {
        match self {
            Priority::Low => colors::SUCCESS,
            Priority::Medium => colors::WARNING,
            Priority::High => colors::ERROR,
        }
    }
}

/// External dimensions of the received sample.
#[derive(Debug, Clone)]
pub struct SampleDimensions {
    pub width: &'static str,
    pub length: &'static str,
    pub height: &'static str,
}

/// One pathology exam. Demo data only, identified by a string id.
#[derive(Debug, Clone)]
pub struct Exam {
    pub id: String,
    pub patient: String,
    pub exam_type: String,
    pub status: ExamStatus,
    pub date: NaiveDate,
    pub has_report: bool,
    pub priority: Priority,
    pub requesting_doctor: String,
    pub age: u8,
    pub gender: char,
    pub samples: Vec<String>,
    pub clinical_history: String,
    pub dimensions: SampleDimensions,
}

impl Exam {
    /// Placeholder shown when an unknown id is selected.
    pub fn placeholder(id: &str) -> Self {
        Self {
            id: id.to_string(),
            patient: "Patient not found".to_string(),
            exam_type: "Unidentified exam type".to_string(),
            status: ExamStatus::Pending,
            date: date(2024, 1, 1),
            has_report: false,
            priority: Priority::Medium,
            requesting_doctor: "Unidentified doctor".to_string(),
            age: 0,
            gender: '-',
            samples: Vec::new(),
            clinical_history: String::new(),
            dimensions: SampleDimensions {
                width: "-",
                length: "-",
                height: "-",
            },
        }
    }
}

/// Find an exam by id.
pub fn find<'a>(exams: &'a [Exam], id: &str) -> Option<&'a Exam> {
    exams.iter().find(|e| e.id == id)
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid calendar date")
}

fn exam(
    id: &str,
    patient: &str,
    exam_type: &str,
    status: ExamStatus,
    date_: NaiveDate,
    has_report: bool,
    priority: Priority,
    requesting_doctor: &str,
    age: u8,
    gender: char,
) -> Exam {
    Exam {
        id: id.to_string(),
        patient: patient.to_string(),
        exam_type: exam_type.to_string(),
        status,
        date: date_,
        has_report,
        priority,
        requesting_doctor: requesting_doctor.to_string(),
        age,
        gender,
        samples: vec!["Sample A1".to_string(), "Sample A2".to_string()],
        clinical_history: "Male patient, 45 years old, with persistent abdominal pain for the \
                           last 3 months. A previous ultrasound showed a suspicious area in the \
                           liver."
            .to_string(),
        dimensions: SampleDimensions {
            width: "2.5 cm",
            length: "3.2 cm",
            height: "1.8 cm",
        },
    }
}

/// The demo exam dataset. Exists only for the lifetime of the session.
pub fn seed_exams() -> Vec<Exam> {
    vec![
        exam(
            "1",
            "Maria Silva Santos",
            "Breast Biopsy",
            ExamStatus::Completed,
            date(2024, 1, 15),
            true,
            Priority::Medium,
            "Dr. Carlos Mendes",
            52,
            'F',
        ),
        exam(
            "2",
            "João Carlos Oliveira",
            "Histopathology Analysis",
            ExamStatus::InAnalysis,
            date(2024, 1, 18),
            false,
            Priority::High,
            "Dr. Carlos Mendes",
            45,
            'M',
        ),
        exam(
            "3",
            "Ana Paula Costa",
            "Cervical Cytology",
            ExamStatus::Pending,
            date(2024, 1, 20),
            false,
            Priority::Medium,
            "Dr. Maria Fernanda",
            32,
            'F',
        ),
        exam(
            "4",
            "Roberto Ferreira",
            "Skin Biopsy",
            ExamStatus::Completed,
            date(2024, 1, 22),
            true,
            Priority::Low,
            "Dr. Carlos Mendes",
            61,
            'M',
        ),
        exam(
            "5",
            "Pedro Santos Lima",
            "Prostate Biopsy",
            ExamStatus::Pending,
            date(2024, 1, 23),
            false,
            Priority::High,
            "Dr. Roberto Silva",
            58,
            'M',
        ),
        exam(
            "6",
            "Luciana Rocha",
            "Lymph Node Analysis",
            ExamStatus::Pending,
            date(2024, 1, 24),
            false,
            Priority::Low,
            "Dr. João Pereira",
            28,
            'F',
        ),
    ]
}

/// Exams still waiting for a pathologist.
pub fn pending<'a>(exams: &'a [Exam]) -> Vec<&'a Exam> {
    exams.iter().filter(|e| e.status != ExamStatus::Completed).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_has_six_exams() {
        let exams = seed_exams();
        assert_eq!(exams.len(), 6);
        assert!(exams.iter().all(|e| !e.patient.is_empty()));
    }

    #[test]
    fn test_find_by_id() {
        let exams = seed_exams();
        assert_eq!(find(&exams, "2").map(|e| e.patient.as_str()), Some("João Carlos Oliveira"));
        assert!(find(&exams, "99").is_none());
    }

    #[test]
    fn test_pending_excludes_completed() {
        let exams = seed_exams();
        let pending = pending(&exams);
        assert_eq!(pending.len(), 4);
        assert!(pending.iter().all(|e| e.status != ExamStatus::Completed));
    }

    #[test]
    fn test_only_completed_exams_carry_reports() {
        let exams = seed_exams();
        for e in &exams {
            if e.has_report {
                assert_eq!(e.status, ExamStatus::Completed, "exam {}", e.id);
            }
        }
    }
}
