//! Legal task records.

use super::common::Priority;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

labeled_enum! {
    pub enum TaskStatus {
        NotStarted => "Not Started",
        InProgress => "In Progress",
        Review => "Review",
        Completed => "Completed",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub title: String,
    pub description: String,
    pub assignee: String,
    pub priority: Priority,
    pub status: TaskStatus,
    pub estimated_hours: u32,
    #[serde(default)]
    pub actual_hours: Option<u32>,
    pub due_date: NaiveDate,
    pub client: String,
    /// Completion percentage, 0-100.
    pub progress: u8,
}
