//! Project milestone entity.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Completion status of a milestone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MilestoneStatus {
    /// Not yet started.
    Pending,
    /// Actively worked on.
    InProgress,
    /// Finished.
    Completed,
}

impl MilestoneStatus {
    /// Human-readable label for list output.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
        }
    }
}

/// A milestone attached to a research project.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Milestone {
    /// Server-issued opaque identifier.
    pub id: String,
    /// Milestone title.
    pub title: String,
    /// Free-text description.
    #[serde(default)]
    pub description: String,
    /// Deadline.
    pub due_date: NaiveDate,
    /// Current completion status.
    pub status: MilestoneStatus,
    /// Identifier of the owning project.
    pub project_id: String,
    /// Creation timestamp, when the server includes it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Last-update timestamp, when the server includes it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Milestone {
    /// Whether the deadline has passed without completion.
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        self.status != MilestoneStatus::Completed && self.due_date < today
    }

    /// Signed number of days until the deadline (negative when overdue).
    pub fn days_until_due(&self, today: NaiveDate) -> i64 {
        (self.due_date - today).num_days()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn milestone(status: MilestoneStatus, due: &str) -> Milestone {
        Milestone {
            id: "m1".into(),
            title: "Sequencing complete".into(),
            description: String::new(),
            due_date: due.parse().unwrap(),
            status,
            project_id: "p1".into(),
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_overdue_only_when_incomplete() {
        let today: NaiveDate = "2026-06-01".parse().unwrap();
        assert!(milestone(MilestoneStatus::Pending, "2026-05-31").is_overdue(today));
        assert!(!milestone(MilestoneStatus::Completed, "2026-05-31").is_overdue(today));
        assert!(!milestone(MilestoneStatus::Pending, "2026-06-01").is_overdue(today));
    }

    #[test]
    fn test_days_until_due() {
        let today: NaiveDate = "2026-06-01".parse().unwrap();
        assert_eq!(
            milestone(MilestoneStatus::Pending, "2026-06-11").days_until_due(today),
            10
        );
        assert_eq!(
            milestone(MilestoneStatus::Pending, "2026-05-30").days_until_due(today),
            -2
        );
    }
}
