//! Application state

use std::path::PathBuf;
use std::sync::Arc;

use todo_core::task::{FileTaskStore, TaskService};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    service: TaskService,
}

impl AppState {
    /// Create a new AppState backed by a file store in the given data directory
    pub async fn new(data_dir: PathBuf, require_due_date: bool) -> todo_core::Result<Self> {
        let tasks_path = data_dir.join("tasks.json");
        let store = Arc::new(FileTaskStore::new(tasks_path).await?);

        let mut service = TaskService::new(store);
        if require_due_date {
            service = service.with_required_due_date();
        }

        Ok(Self {
            inner: Arc::new(AppStateInner { service }),
        })
    }

    /// Get reference to the task service
    pub fn service(&self) -> &TaskService {
        &self.inner.service
    }
}
