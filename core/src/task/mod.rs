//! Task module
//!
//! This module contains the task entity, the store abstraction, and the
//! filter/sort/service logic built on top of them.

mod file_store;
mod filter;
mod model;
mod repository;
mod service;
mod sort;

pub use file_store::FileTaskStore;
pub use filter::{filter_tasks, DateFilter, FilterSpec, PriorityFilter, StatusFilter};
pub use model::*;
pub use repository::TaskStore;
pub use service::TaskService;
pub use sort::{sort_tasks, SortKey, SortOrder, SortSpec};
