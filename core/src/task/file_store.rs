//! File-based task storage implementation
//!
//! Stores tasks as JSON in a file on disk. Tasks are kept in insertion
//! order, and the id counter is persisted alongside them so ids are never
//! reused after a delete.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tokio::sync::RwLock;

use super::model::Task;
use super::repository::TaskStore;
use crate::{Error, Result};

/// On-disk layout of the store file
#[derive(Debug, Default, Serialize, Deserialize)]
struct StoreFile {
    #[serde(default = "first_id")]
    next_id: i64,
    #[serde(default)]
    tasks: Vec<Task>,
}

fn first_id() -> i64 {
    1
}

/// File-based task store using JSON
pub struct FileTaskStore {
    /// Path to the JSON file
    path: PathBuf,
    /// In-memory copy of the store file
    state: RwLock<StoreFile>,
}

impl FileTaskStore {
    /// Create a new FileTaskStore
    ///
    /// If the file doesn't exist, it will be created on first write.
    pub async fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let state = if path.exists() {
            let content = tokio::fs::read_to_string(&path).await?;
            let mut file: StoreFile = serde_json::from_str(&content)?;
            // Guard against hand-edited files with a stale counter.
            let max_id = file.tasks.iter().map(|t| t.id).max().unwrap_or(0);
            file.next_id = file.next_id.max(max_id + 1);
            file
        } else {
            StoreFile {
                next_id: first_id(),
                tasks: Vec::new(),
            }
        };

        Ok(Self {
            path,
            state: RwLock::new(state),
        })
    }

    /// Persist the current state to disk
    async fn persist(&self) -> Result<()> {
        let content = {
            let state = self.state.read().await;
            serde_json::to_string_pretty(&*state)?
        };

        // Ensure parent directory exists
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        tokio::fs::write(&self.path, content).await?;
        Ok(())
    }
}

#[async_trait]
impl TaskStore for FileTaskStore {
    async fn add(&self, mut task: Task) -> Result<Task> {
        {
            let mut state = self.state.write().await;
            task.id = state.next_id;
            state.next_id += 1;
            state.tasks.push(task.clone());
        }
        self.persist().await?;
        Ok(task)
    }

    async fn delete(&self, id: i64) -> Result<()> {
        {
            let mut state = self.state.write().await;
            let pos = state
                .tasks
                .iter()
                .position(|t| t.id == id)
                .ok_or(Error::TaskNotFound(id))?;
            state.tasks.remove(pos);
        }
        self.persist().await
    }

    async fn get_all(&self) -> Result<Vec<Task>> {
        let state = self.state.read().await;
        Ok(state.tasks.clone())
    }

    async fn update_status(&self, id: i64, status: bool) -> Result<()> {
        {
            let mut state = self.state.write().await;
            let task = state
                .tasks
                .iter_mut()
                .find(|t| t.id == id)
                .ok_or(Error::TaskNotFound(id))?;
            task.status = status;
        }
        self.persist().await
    }
}
