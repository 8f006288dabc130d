use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::error::DomainError;

/// Represents the status of a task.
///
/// Variants are declared in enumeration order; [`TaskStatus::ALL`] exposes that order.
#[derive(Debug, Default, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskStatus {
    /// Work has not begun.
    #[default]
    #[serde(rename = "Not started")]
    NotStarted,
    /// Work is under way.
    #[serde(rename = "Started")]
    Started,
    /// Work is waiting on a reviewer.
    #[serde(rename = "In review")]
    InReview,
    /// The reviewer sent the work back.
    #[serde(rename = "Rejected")]
    Rejected,
    /// The reviewer accepted the work.
    #[serde(rename = "Approved")]
    Approved,
}

impl TaskStatus {
    pub const ALL: [TaskStatus; 5] = [
        TaskStatus::NotStarted,
        TaskStatus::Started,
        TaskStatus::InReview,
        TaskStatus::Rejected,
        TaskStatus::Approved,
    ];

    /// The status counted as complete by list completion: the first enumerated value.
    pub const fn completion_marker() -> TaskStatus {
        Self::ALL[0]
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            TaskStatus::NotStarted => "Not started",
            TaskStatus::Started => "Started",
            TaskStatus::InReview => "In review",
            TaskStatus::Rejected => "Rejected",
            TaskStatus::Approved => "Approved",
        }
    }
}

impl FromStr for TaskStatus {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == value)
            .ok_or_else(|| DomainError::InvalidStatus(value.to_string()))
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Represents how far along a task is.
///
/// The wire values are irregular ("25" and "75" carry no percent sign) and are kept
/// exactly as clients already send them.
#[derive(Debug, Default, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskProgress {
    #[default]
    #[serde(rename = "0%")]
    Zero,
    #[serde(rename = "25")]
    Quarter,
    #[serde(rename = "50%")]
    Half,
    #[serde(rename = "75")]
    ThreeQuarters,
    #[serde(rename = "100%")]
    Full,
}

impl TaskProgress {
    pub const ALL: [TaskProgress; 5] = [
        TaskProgress::Zero,
        TaskProgress::Quarter,
        TaskProgress::Half,
        TaskProgress::ThreeQuarters,
        TaskProgress::Full,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            TaskProgress::Zero => "0%",
            TaskProgress::Quarter => "25",
            TaskProgress::Half => "50%",
            TaskProgress::ThreeQuarters => "75",
            TaskProgress::Full => "100%",
        }
    }
}

impl FromStr for TaskProgress {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|progress| progress.as_str() == value)
            .ok_or_else(|| DomainError::InvalidProgress(value.to_string()))
    }
}

impl fmt::Display for TaskProgress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Represents the priority of a task, lowest first.
#[derive(Debug, Default, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskPriority {
    #[serde(rename = "Very low")]
    VeryLow,
    #[serde(rename = "Low")]
    Low,
    #[default]
    #[serde(rename = "Medium")]
    Medium,
    #[serde(rename = "High")]
    High,
    #[serde(rename = "Very high")]
    VeryHigh,
}

impl TaskPriority {
    pub const ALL: [TaskPriority; 5] = [
        TaskPriority::VeryLow,
        TaskPriority::Low,
        TaskPriority::Medium,
        TaskPriority::High,
        TaskPriority::VeryHigh,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            TaskPriority::VeryLow => "Very low",
            TaskPriority::Low => "Low",
            TaskPriority::Medium => "Medium",
            TaskPriority::High => "High",
            TaskPriority::VeryHigh => "Very high",
        }
    }
}

impl FromStr for TaskPriority {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|priority| priority.as_str() == value)
            .ok_or_else(|| DomainError::InvalidPriority(value.to_string()))
    }
}

impl fmt::Display for TaskPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Input structure for creating or updating a task.
///
/// The enumerated fields arrive as raw strings so the use-case layer can validate them
/// in a fixed order (status, progress, priority) and report the first offender.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskInput {
    pub title: String,
    pub description: String,
    pub partner: String,
    pub rol: String,
    /// Defaults to "Not started".
    #[serde(default = "default_status")]
    pub status: String,
    /// Defaults to "0%".
    #[serde(default = "default_progress")]
    pub progress: String,
    /// Defaults to "Medium".
    #[serde(default = "default_priority")]
    pub priority: String,
    /// Username to assign. Absent or empty means "the requester".
    #[serde(default)]
    pub assigned_to: Option<String>,
}

fn default_status() -> String {
    TaskStatus::default().as_str().to_string()
}

fn default_progress() -> String {
    TaskProgress::default().as_str().to_string()
}

fn default_priority() -> String {
    TaskPriority::default().as_str().to_string()
}

/// Represents a task as stored inside its list and returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Task {
    /// Unique identifier for the task (UUID v4).
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub partner: String,
    pub rol: String,
    pub status: TaskStatus,
    pub progress: TaskProgress,
    pub priority: TaskPriority,
    /// Username of the assignee.
    pub assigned_to: Option<String>,
}

/// Body of the status patch endpoint.
#[derive(Debug, Serialize, Deserialize)]
pub struct StatusUpdate {
    pub status: String,
}

/// Query parameters for filtering the tasks of a list.
///
/// Empty values are treated the same as absent ones.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct TaskFilter {
    pub status: Option<String>,
    pub priority: Option<String>,
}
