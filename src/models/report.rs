//! Histopathology report mock data.

use chrono::NaiveDate;

/// Measurements attached to a finished report.
#[derive(Debug, Clone)]
pub struct SampleMeasurements {
    pub width: &'static str,
    pub length: &'static str,
    pub height: &'static str,
}

/// Automated measurement summary shown after a LabVision run.
#[derive(Debug, Clone)]
pub struct MeasurementResults {
    pub area: &'static str,
    pub perimeter: &'static str,
    pub density: &'static str,
}

impl Default for MeasurementResults {
    fn default() -> Self {
        Self {
            area: "2.45 mm²",
            perimeter: "8.73 mm",
            density: "74.2%",
        }
    }
}

/// A finished report for a completed exam.
#[derive(Debug, Clone)]
pub struct Report {
    pub exam_id: String,
    pub patient: String,
    pub exam_type: String,
    pub exam_date: NaiveDate,
    pub report_date: NaiveDate,
    pub pathologist: String,
    pub requesting_doctor: String,
    pub measurements: SampleMeasurements,
    pub body: String,
}

const REPORT_BODY: &str = "HISTOPATHOLOGY REPORT

MATERIAL EXAMINED: Breast tissue fragment obtained by core biopsy.

GROSS DESCRIPTION: Received a brownish tissue fragment measuring 1.5 x 1.2 x 0.8 cm.

MICROSCOPIC DESCRIPTION: The examined material shows breast parenchyma with preserved \
architecture. Ducts and lobules of usual appearance, without significant alterations. \
Surrounding fibrous stroma unremarkable. No cellular atypia, atypical mitotic figures, \
or signs of malignancy.

DIAGNOSIS: Breast parenchyma without significant histopathological alterations. \
No malignancy in the examined material.

NOTES: Correlate with clinical data and radiological findings. In case of \
clinical-pathological discordance, consider re-sampling.";

/// The canned report for the selected exam.
pub fn report_for(exam_id: &str) -> Report {
    Report {
        exam_id: exam_id.to_string(),
        patient: "Maria Silva Santos".to_string(),
        exam_type: "Breast Biopsy".to_string(),
        exam_date: NaiveDate::from_ymd_opt(2024, 1, 15).expect("valid calendar date"),
        report_date: NaiveDate::from_ymd_opt(2024, 1, 17).expect("valid calendar date"),
        pathologist: "Dr. Ana Patologista".to_string(),
        requesting_doctor: "Dr. Carlos Mendes".to_string(),
        measurements: SampleMeasurements {
            width: "1.2 cm",
            length: "1.5 cm",
            height: "0.8 cm",
        },
        body: REPORT_BODY.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_carries_exam_id() {
        let report = report_for("1");
        assert_eq!(report.exam_id, "1");
        assert!(report.body.starts_with("HISTOPATHOLOGY REPORT"));
        assert!(report.report_date > report.exam_date);
    }
}
