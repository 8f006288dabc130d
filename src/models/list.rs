use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Task;

/// A named, ordered container of tasks.
///
/// The list owns its tasks; they keep insertion order and are dropped with the list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TaskList {
    /// Unique identifier for the list (UUID v4).
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub tasks: Vec<Task>,
}

impl TaskList {
    /// Creates an empty list with a freshly generated id.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), name)
    }

    pub fn with_id(id: Uuid, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            tasks: Vec::new(),
        }
    }
}

/// Input structure for creating or renaming a list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListInput {
    pub name: String,
}

/// Response body of the completion endpoint, e.g. `{"completion": "50%"}`.
#[derive(Debug, Serialize, Deserialize)]
pub struct CompletionResponse {
    pub completion: String,
}
