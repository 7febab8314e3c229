//! Task store trait
//!
//! Defines the interface for durable task storage. Backings differ
//! (file-backed in production, temp-dir stores in tests) but all of them
//! share the not-found policy: `delete` and `update_status` on an id that
//! does not exist return [`Error::TaskNotFound`](crate::Error::TaskNotFound).

use async_trait::async_trait;

use super::model::Task;
use crate::Result;

/// Repository interface for task CRUD operations
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Persist a new task, assigning its id. Returns the stored task.
    async fn add(&self, task: Task) -> Result<Task>;

    /// Delete the task with the given id
    async fn delete(&self, id: i64) -> Result<()>;

    /// Get all tasks, in insertion order
    async fn get_all(&self) -> Result<Vec<Task>>;

    /// Set the completion flag of the task with the given id
    async fn update_status(&self, id: i64, status: bool) -> Result<()>;
}
