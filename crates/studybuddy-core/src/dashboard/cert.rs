//! Certification rows shown on the dashboard.

use std::fmt::Write;

use chrono::NaiveDate;

/// A certification the user is working towards.
#[derive(Debug, Clone, PartialEq)]
pub struct Certification {
    pub id: String,
    pub name: String,
    /// Short kind tag, e.g. `"Exam"`.
    pub kind: String,
    pub due: NaiveDate,
    /// Study progress in `0.0..=1.0`.
    pub progress: f32,
}

impl Certification {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        kind: impl Into<String>,
        due: NaiveDate,
        progress: f32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind: kind.into(),
            due,
            progress: progress.clamp(0.0, 1.0),
        }
    }

    /// Progress as a whole percentage.
    pub fn percent(&self) -> u16 {
        (self.progress * 100.0).round() as u16
    }
}

/// A certification already earned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CertificationRecord {
    pub id: String,
    pub name: String,
    pub kind: String,
    pub completed: NaiveDate,
    pub expires: NaiveDate,
}

/// An entry in the dashboard's tools panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tool {
    /// One-letter badge.
    pub badge: char,
    pub name: String,
    pub description: String,
}

/// Formats `date` with a chrono `strftime` pattern.
///
/// Falls back to ISO 8601 when the pattern is malformed, since chrono
/// reports bad patterns only while writing.
pub fn format_date(date: NaiveDate, pattern: &str) -> String {
    let mut out = String::new();
    match write!(out, "{}", date.format(pattern)) {
        Ok(()) => out,
        Err(_) => {
            tracing::warn!("Invalid date format '{pattern}', using ISO 8601");
            date.format("%Y-%m-%d").to_string()
        }
    }
}
