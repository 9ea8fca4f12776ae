//! Dashboard model: certifications in progress, earned credentials, tools
//! and the KPI row above them.
//!
//! The data is static sample content; nothing is fetched or persisted.

pub mod cert;
pub mod sort;

use chrono::NaiveDate;

pub use cert::{format_date, Certification, CertificationRecord, Tool};
pub use sort::{sort_certifications, CertSort};

// KPI values are sample figures, independent of the lists below them.
const SAMPLE_COMPLETED: u32 = 5;
const SAMPLE_IN_PROGRESS: u32 = 5;
const SAMPLE_HOURS_STUDIED: u32 = 5;

/// One tile of the KPI row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Kpi {
    pub label: &'static str,
    pub value: u32,
}

/// Everything the dashboard screen displays.
#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    pub active: Vec<Certification>,
    pub history: Vec<CertificationRecord>,
    pub tools: Vec<Tool>,
    pub completed: u32,
    pub in_progress: u32,
    pub hours_studied: u32,
}

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn record(id: &str, name: &str, completed: NaiveDate, expires: NaiveDate) -> CertificationRecord {
    CertificationRecord {
        id: id.to_string(),
        name: name.to_string(),
        kind: "Cred".to_string(),
        completed,
        expires,
    }
}

impl Dashboard {
    /// The built-in sample content.
    pub fn sample() -> Self {
        Self {
            active: vec![
                Certification::new("c1", "CompTIA Security+", "Exam", ymd(2025, 11, 15), 0.8),
                Certification::new("c2", "AWS Cloud Practitioner", "Exam", ymd(2025, 12, 1), 0.55),
            ],
            history: vec![
                record("h1", "Linux Essentials", ymd(2025, 8, 14), ymd(2028, 8, 14)),
                record("h2", "Network+", ymd(2025, 9, 1), ymd(2028, 9, 1)),
                record("h3", "ITIL Foundation", ymd(2025, 9, 10), ymd(2028, 9, 10)),
            ],
            tools: vec![Tool {
                badge: 'F',
                name: "Flash Card Generator".to_string(),
                description: "Create study cards from notes (coming soon)".to_string(),
            }],
            completed: SAMPLE_COMPLETED,
            in_progress: SAMPLE_IN_PROGRESS,
            hours_studied: SAMPLE_HOURS_STUDIED,
        }
    }

    /// KPI tiles in display order.
    pub fn summary(&self) -> [Kpi; 3] {
        [
            Kpi {
                label: "Completed Certifications",
                value: self.completed,
            },
            Kpi {
                label: "Certifications in progress",
                value: self.in_progress,
            },
            Kpi {
                label: "Total Hours Studied",
                value: self.hours_studied,
            },
        ]
    }

    /// Active certifications in the requested order.
    pub fn sorted(&self, sort: CertSort) -> Vec<Certification> {
        sort_certifications(&self.active, sort)
    }
}
