//! Filter engine
//!
//! Pure predicate evaluation over a task collection. A filter spec holds
//! one restriction per dimension; restrictions combine with logical AND
//! and surviving tasks keep their relative order.
//!
//! Unrecognized filter strings are rejected at parse time rather than
//! silently widened to "all".

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};

use super::model::{Task, TaskPriority};
use crate::{Error, Result};

/// Priority restriction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriorityFilter {
    #[default]
    All,
    Low,
    Medium,
    High,
}

impl PriorityFilter {
    /// Parse a query-string value. Empty and `"all"` mean no restriction.
    pub fn parse(raw: &str) -> Result<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "" | "all" => Ok(Self::All),
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            other => Err(Error::InvalidInput(format!(
                "unknown priority filter: {other}"
            ))),
        }
    }

    fn matches(&self, task: &Task) -> bool {
        let wanted = match self {
            Self::All => return true,
            Self::Low => TaskPriority::Low,
            Self::Medium => TaskPriority::Medium,
            Self::High => TaskPriority::High,
        };
        TaskPriority::parse(&task.priority) == Some(wanted)
    }
}

/// Completion restriction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusFilter {
    #[default]
    All,
    Active,
    Completed,
}

impl StatusFilter {
    pub fn parse(raw: &str) -> Result<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "" | "all" => Ok(Self::All),
            "active" => Ok(Self::Active),
            "completed" => Ok(Self::Completed),
            other => Err(Error::InvalidInput(format!(
                "unknown status filter: {other}"
            ))),
        }
    }

    fn matches(&self, task: &Task) -> bool {
        match self {
            Self::All => true,
            Self::Active => !task.status,
            Self::Completed => task.status,
        }
    }
}

/// Due-date window restriction, computed against the evaluation instant
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateFilter {
    #[default]
    All,
    Today,
    Week,
    Overdue,
}

impl DateFilter {
    pub fn parse(raw: &str) -> Result<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "" | "all" => Ok(Self::All),
            "today" => Ok(Self::Today),
            "week" => Ok(Self::Week),
            "overdue" => Ok(Self::Overdue),
            other => Err(Error::InvalidInput(format!("unknown date filter: {other}"))),
        }
    }

    fn matches(&self, task: &Task, now: DateTime<Utc>) -> bool {
        if *self == Self::All {
            return true;
        }
        // A task without a due date falls in no date window.
        let Some(due) = task.due_date else {
            return false;
        };
        match self {
            Self::All => true,
            Self::Today => due.date_naive() == now.date_naive(),
            Self::Week => due.iso_week() == now.iso_week(),
            Self::Overdue => due < now,
        }
    }
}

/// The combination of restrictions applied to a task collection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterSpec {
    pub priority: PriorityFilter,
    pub status: StatusFilter,
    pub date: DateFilter,
}

impl FilterSpec {
    pub fn matches(&self, task: &Task, now: DateTime<Utc>) -> bool {
        self.priority.matches(task)
            && self.status.matches(task)
            && self.date.matches(task, now)
    }
}

/// Apply `spec` to `tasks`, keeping survivors in their input order.
pub fn filter_tasks(tasks: &[Task], spec: &FilterSpec, now: DateTime<Utc>) -> Vec<Task> {
    tasks
        .iter()
        .filter(|t| spec.matches(t, now))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(y: i32, mo: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, 0, 0).unwrap()
    }

    fn fixture() -> Vec<Task> {
        vec![
            Task::new("high active").with_raw_priority("high"),
            Task::new("low completed").with_raw_priority("low").completed(),
            Task::new("medium active").with_raw_priority("medium"),
        ]
    }

    #[test]
    fn test_all_pass_spec_is_identity() {
        let tasks = fixture();
        let filtered = filter_tasks(&tasks, &FilterSpec::default(), Utc::now());
        assert_eq!(filtered, tasks);
    }

    #[test]
    fn test_priority_filter_is_case_insensitive() {
        let tasks = vec![
            Task::new("a").with_raw_priority("HIGH"),
            Task::new("b").with_raw_priority(" high "),
            Task::new("c").with_raw_priority("low"),
        ];
        let spec = FilterSpec {
            priority: PriorityFilter::High,
            ..Default::default()
        };
        let filtered = filter_tasks(&tasks, &spec, Utc::now());
        assert_eq!(filtered.len(), 2);
    }

    #[test]
    fn test_unrecognized_stored_priority_matches_nothing() {
        let tasks = vec![Task::new("a").with_raw_priority("urgent")];
        for priority in [
            PriorityFilter::Low,
            PriorityFilter::Medium,
            PriorityFilter::High,
        ] {
            let spec = FilterSpec {
                priority,
                ..Default::default()
            };
            assert!(filter_tasks(&tasks, &spec, Utc::now()).is_empty());
        }
    }

    #[test]
    fn test_status_filter() {
        let tasks = fixture();
        let active = FilterSpec {
            status: StatusFilter::Active,
            ..Default::default()
        };
        let completed = FilterSpec {
            status: StatusFilter::Completed,
            ..Default::default()
        };

        let active_tasks = filter_tasks(&tasks, &active, Utc::now());
        assert_eq!(active_tasks.len(), 2);
        assert!(active_tasks.iter().all(|t| !t.status));

        let completed_tasks = filter_tasks(&tasks, &completed, Utc::now());
        assert_eq!(completed_tasks.len(), 1);
        assert!(completed_tasks[0].status);
    }

    #[test]
    fn test_overdue_filter() {
        let now = at(2024, 6, 15, 12);
        let tasks = vec![
            Task::new("past").with_due_date(at(2024, 6, 10, 0)),
            Task::new("future").with_due_date(at(2024, 6, 20, 0)),
            Task::new("no date"),
        ];
        let spec = FilterSpec {
            date: DateFilter::Overdue,
            ..Default::default()
        };
        let filtered = filter_tasks(&tasks, &spec, now);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].text, "past");
    }

    #[test]
    fn test_today_filter_compares_calendar_days() {
        let now = at(2024, 6, 15, 23);
        let tasks = vec![
            Task::new("early same day").with_due_date(at(2024, 6, 15, 1)),
            // Within 24h of now, but a different calendar day
            Task::new("next morning").with_due_date(at(2024, 6, 16, 8)),
            Task::new("no date"),
        ];
        let spec = FilterSpec {
            date: DateFilter::Today,
            ..Default::default()
        };
        let filtered = filter_tasks(&tasks, &spec, now);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].text, "early same day");
    }

    #[test]
    fn test_week_filter_uses_iso_weeks() {
        // 2024-06-15 is a Saturday in ISO week 24
        let now = at(2024, 6, 15, 12);
        let tasks = vec![
            Task::new("monday same week").with_due_date(at(2024, 6, 10, 9)),
            Task::new("sunday same week").with_due_date(at(2024, 6, 16, 9)),
            Task::new("next monday").with_due_date(at(2024, 6, 17, 9)),
            // Same week number, previous year
            Task::new("week 24 of 2023").with_due_date(at(2023, 6, 14, 9)),
        ];
        let spec = FilterSpec {
            date: DateFilter::Week,
            ..Default::default()
        };
        let filtered = filter_tasks(&tasks, &spec, now);
        let texts: Vec<&str> = filtered.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["monday same week", "sunday same week"]);
    }

    #[test]
    fn test_no_due_date_passes_only_all() {
        let task = Task::new("no date");
        let now = Utc::now();
        assert!(DateFilter::All.matches(&task, now));
        assert!(!DateFilter::Today.matches(&task, now));
        assert!(!DateFilter::Week.matches(&task, now));
        assert!(!DateFilter::Overdue.matches(&task, now));
    }

    #[test]
    fn test_dimensions_combine_with_and() {
        let now = at(2024, 6, 15, 12);
        let tasks = vec![
            Task::new("match")
                .with_raw_priority("high")
                .with_due_date(at(2024, 6, 10, 0)),
            Task::new("wrong priority")
                .with_raw_priority("low")
                .with_due_date(at(2024, 6, 10, 0)),
            Task::new("completed")
                .with_raw_priority("high")
                .with_due_date(at(2024, 6, 10, 0))
                .completed(),
        ];
        let spec = FilterSpec {
            priority: PriorityFilter::High,
            status: StatusFilter::Active,
            date: DateFilter::Overdue,
        };
        let filtered = filter_tasks(&tasks, &spec, now);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].text, "match");
    }

    #[test]
    fn test_parse_accepts_all_and_empty() {
        assert_eq!(PriorityFilter::parse("").unwrap(), PriorityFilter::All);
        assert_eq!(PriorityFilter::parse("ALL").unwrap(), PriorityFilter::All);
        assert_eq!(StatusFilter::parse(" all ").unwrap(), StatusFilter::All);
        assert_eq!(DateFilter::parse("").unwrap(), DateFilter::All);
    }

    #[test]
    fn test_parse_rejects_unknown_values() {
        assert!(PriorityFilter::parse("urgent").is_err());
        assert!(StatusFilter::parse("done").is_err());
        assert!(DateFilter::parse("month").is_err());
    }
}
