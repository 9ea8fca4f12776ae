//! Certification orderings offered by the dashboard toolbar.

use std::cmp::Ordering;

use super::cert::Certification;

/// How the active certification list is ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CertSort {
    /// Latest due date first.
    #[default]
    DueDesc,
    /// Earliest due date first.
    DueAsc,
    /// Most progress first.
    Progress,
    /// Alphabetical, case-insensitive.
    Name,
}

impl CertSort {
    pub const ALL: [CertSort; 4] = [Self::DueDesc, Self::DueAsc, Self::Progress, Self::Name];

    /// The next ordering in toolbar order (wrapping around).
    pub fn next(self) -> Self {
        match self {
            Self::DueDesc => Self::DueAsc,
            Self::DueAsc => Self::Progress,
            Self::Progress => Self::Name,
            Self::Name => Self::DueDesc,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::DueDesc => "Due Date - ▼",
            Self::DueAsc => "Due Date - ▲",
            Self::Progress => "Progress",
            Self::Name => "Name",
        }
    }

    /// Identifier used in `default.toml` (`ui.default_sort`).
    pub fn id(self) -> &'static str {
        match self {
            Self::DueDesc => "due-desc",
            Self::DueAsc => "due-asc",
            Self::Progress => "progress",
            Self::Name => "name",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.id() == id.trim())
    }

    fn compare(self, a: &Certification, b: &Certification) -> Ordering {
        match self {
            Self::DueDesc => b.due.cmp(&a.due),
            Self::DueAsc => a.due.cmp(&b.due),
            Self::Progress => b.progress.total_cmp(&a.progress),
            Self::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        }
    }
}

/// Returns a sorted copy of `certs`; the input is left untouched.
///
/// The sort is stable, so ties keep their original relative order.
pub fn sort_certifications(certs: &[Certification], sort: CertSort) -> Vec<Certification> {
    let mut rows = certs.to_vec();
    rows.sort_by(|a, b| sort.compare(a, b));
    rows
}
