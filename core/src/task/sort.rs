//! Sort engine
//!
//! Stable ordering of a task collection by a single key. Stability gives
//! deterministic tie-breaking (equal keys keep input order) and makes the
//! sort idempotent.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use super::model::{Task, TaskPriority};
use crate::{Error, Result};

/// Sort key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    Date,
    Priority,
}

impl SortKey {
    /// Parse a query-string value. Empty means "no sorting".
    pub fn parse(raw: &str) -> Result<Option<Self>> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "" => Ok(None),
            "date" => Ok(Some(Self::Date)),
            "priority" => Ok(Some(Self::Priority)),
            other => Err(Error::InvalidInput(format!("unknown sort key: {other}"))),
        }
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn parse(raw: &str) -> Result<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "" | "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            other => Err(Error::InvalidInput(format!("unknown sort order: {other}"))),
        }
    }
}

/// The (key, order) pair determining output ordering
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortSpec {
    pub key: Option<SortKey>,
    pub order: SortOrder,
}

impl SortSpec {
    pub fn new(key: SortKey, order: SortOrder) -> Self {
        Self {
            key: Some(key),
            order,
        }
    }
}

// Tasks without a due date sort as the earliest possible instant: first
// ascending, last descending.
fn due_date_key(task: &Task) -> DateTime<Utc> {
    task.due_date.unwrap_or(DateTime::<Utc>::MIN_UTC)
}

/// Sort `tasks` per `spec`. With no key the input comes back unchanged.
pub fn sort_tasks(mut tasks: Vec<Task>, spec: &SortSpec) -> Vec<Task> {
    let Some(key) = spec.key else {
        return tasks;
    };

    let compare = |a: &Task, b: &Task| -> Ordering {
        match key {
            SortKey::Date => due_date_key(a).cmp(&due_date_key(b)),
            SortKey::Priority => {
                TaskPriority::rank(&a.priority).cmp(&TaskPriority::rank(&b.priority))
            }
        }
    };

    match spec.order {
        SortOrder::Asc => tasks.sort_by(compare),
        SortOrder::Desc => tasks.sort_by(|a, b| compare(a, b).reverse()),
    }
    tasks
}
