//! Task model definitions

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Maximum length of task text after trimming, in characters.
pub const MAX_TEXT_LEN: usize = 1000;

/// Task priority level
///
/// The closed set of recognized priorities. Stored tasks keep the raw
/// string they were created with; this enum is the validated view of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskPriority {
    Low,
    Medium,
    High,
}

impl Default for TaskPriority {
    fn default() -> Self {
        Self::Medium
    }
}

impl TaskPriority {
    /// Parse a raw priority string, case-insensitively after trimming.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "low" => Some(Self::Low),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            _ => None,
        }
    }

    /// Ordinal used by the priority sort: low=1, medium=2, high=3.
    /// Anything outside the recognized set ranks 0, below `low`.
    pub fn rank(raw: &str) -> u8 {
        match Self::parse(raw) {
            Some(Self::Low) => 1,
            Some(Self::Medium) => 2,
            Some(Self::High) => 3,
            None => 0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

/// A single todo item
///
/// `id` is 0 until the store assigns one; `due_date = None` means the task
/// has no due date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    #[serde(default)]
    pub id: i64,
    #[serde(rename = "task")]
    pub text: String,
    pub priority: String,
    #[serde(default)]
    pub status: bool,
    #[serde(default)]
    pub due_date: Option<DateTime<Utc>>,
}

impl Task {
    /// Create a new, unpersisted task with the given text
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: 0,
            text: text.into(),
            priority: TaskPriority::default().as_str().to_string(),
            status: false,
            due_date: None,
        }
    }

    /// Set the priority
    pub fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = priority.as_str().to_string();
        self
    }

    /// Set the priority from a raw string, kept as provided
    pub fn with_raw_priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = priority.into();
        self
    }

    /// Set the due date
    pub fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Mark the task completed
    pub fn completed(mut self) -> Self {
        self.status = true;
        self
    }
}
