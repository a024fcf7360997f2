//! In-memory task store.
//!
//! The store owns the authoritative ordered sequence of tasks and the
//! next-id counter. Both live behind a single `RwLock` so that id
//! assignment and list mutation are atomic: concurrent creates can never
//! collide on or skip an id, and readers never observe a torn sequence.
//!
//! Ids start at 1, strictly increase with each creation, and are never
//! reused, even after the corresponding task is deleted.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

/// A unit of work tracked by the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier, assigned by the store. Immutable after creation.
    pub id: u64,
    /// Human-readable title
    pub title: String,
    /// Free-form description
    pub description: String,
    /// Expected to be "pending" or "completed", but not enforced
    pub status: String,
}

/// The client-supplied fields of a task.
///
/// A client-supplied `id` is deliberately absent: the store assigns ids,
/// and any id in a request body is ignored. Missing fields decode as
/// empty strings rather than rejecting the body.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TaskDraft {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub status: String,
}

struct Inner {
    /// Tasks in creation order (minus deletions).
    tasks: Vec<Task>,
    /// Next id to assign. Never decremented.
    next_id: u64,
}

/// In-memory store for tasks.
///
/// Cheap to share as [`SharedTaskStore`]; handlers borrow it per request.
pub struct TaskStore {
    inner: RwLock<Inner>,
}

impl TaskStore {
    /// Create an empty store. The first task created gets id 1.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                tasks: Vec::new(),
                next_id: 1,
            }),
        }
    }

    /// Create a task from a draft, assigning the next id. Always succeeds.
    pub async fn create(&self, draft: TaskDraft) -> Task {
        let mut inner = self.inner.write().await;
        let task = Task {
            id: inner.next_id,
            title: draft.title,
            description: draft.description,
            status: draft.status,
        };
        inner.next_id += 1;
        inner.tasks.push(task.clone());
        task
    }

    /// Snapshot of all tasks, in creation order.
    pub async fn list(&self) -> Vec<Task> {
        let inner = self.inner.read().await;
        inner.tasks.clone()
    }

    /// Look up a task by id.
    pub async fn get(&self, id: u64) -> Option<Task> {
        let inner = self.inner.read().await;
        inner.tasks.iter().find(|t| t.id == id).cloned()
    }

    /// Overwrite the mutable fields of the task with the given id.
    ///
    /// The id itself never changes. Returns the updated task, or `None`
    /// if no task has that id.
    pub async fn update(&self, id: u64, draft: TaskDraft) -> Option<Task> {
        let mut inner = self.inner.write().await;
        let task = inner.tasks.iter_mut().find(|t| t.id == id)?;
        task.title = draft.title;
        task.description = draft.description;
        task.status = draft.status;
        Some(task.clone())
    }

    /// Remove the task with the given id, preserving the order of the
    /// remaining tasks. Returns whether a task was removed.
    pub async fn delete(&self, id: u64) -> bool {
        let mut inner = self.inner.write().await;
        match inner.tasks.iter().position(|t| t.id == id) {
            Some(index) => {
                inner.tasks.remove(index);
                true
            }
            None => false,
        }
    }
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Shared task store type.
pub type SharedTaskStore = Arc<TaskStore>;
