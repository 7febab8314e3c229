//! Task service
//!
//! The orchestration layer between a transport and the store. Validation
//! happens here, strictly before any write; querying is one `get_all`
//! followed by in-memory filter and sort.

use chrono::Utc;
use std::sync::Arc;

use super::filter::{filter_tasks, FilterSpec};
use super::model::{Task, MAX_TEXT_LEN};
use super::repository::TaskStore;
use super::sort::{sort_tasks, SortSpec};
use crate::{Error, Result};

/// Stateless orchestrator over a task store
pub struct TaskService {
    store: Arc<dyn TaskStore>,
    /// When set, tasks without a due date are rejected on creation.
    require_due_date: bool,
}

impl TaskService {
    pub fn new(store: Arc<dyn TaskStore>) -> Self {
        Self {
            store,
            require_due_date: false,
        }
    }

    /// Reject tasks without a due date on creation
    pub fn with_required_due_date(mut self) -> Self {
        self.require_due_date = true;
        self
    }

    /// Validate and persist a new task, returning it with its assigned id
    pub async fn add_task(&self, mut task: Task) -> Result<Task> {
        task.text = task.text.trim().to_string();
        if task.text.is_empty() {
            return Err(Error::InvalidInput("task text is empty".to_string()));
        }
        if task.text.chars().count() > MAX_TEXT_LEN {
            return Err(Error::InvalidInput(format!(
                "task text exceeds {MAX_TEXT_LEN} characters"
            )));
        }
        if self.require_due_date && task.due_date.is_none() {
            return Err(Error::InvalidInput("due date is required".to_string()));
        }

        let task = self.store.add(task).await?;
        tracing::debug!(id = task.id, "task added");
        Ok(task)
    }

    pub async fn delete_task(&self, id: i64) -> Result<()> {
        self.store.delete(id).await?;
        tracing::debug!(id, "task deleted");
        Ok(())
    }

    /// All tasks as stored, no filtering or sorting
    pub async fn get_all_tasks(&self) -> Result<Vec<Task>> {
        self.store.get_all().await
    }

    pub async fn update_status(&self, id: i64, status: bool) -> Result<()> {
        self.store.update_status(id, status).await?;
        tracing::debug!(id, status, "task status updated");
        Ok(())
    }

    /// Fetch all tasks, filter against the current instant, then sort
    pub async fn query(&self, filter: &FilterSpec, sort: &SortSpec) -> Result<Vec<Task>> {
        let tasks = self.store.get_all().await?;
        let filtered = filter_tasks(&tasks, filter, Utc::now());
        Ok(sort_tasks(filtered, sort))
    }
}
