//! In-memory storage for lists and users.
//!
//! The store only holds data. Lookups and mutations live in [`crate::services`], which
//! scan these vectors linearly.

use crate::models::{TaskList, User};

/// Lists and users in insertion order, scoped to the lifetime of the process.
#[derive(Debug, Default, Clone)]
pub struct Store {
    pub lists: Vec<TaskList>,
    pub users: Vec<User>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }
}
