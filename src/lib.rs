#![doc = "The `tasklists` library crate."]
#![doc = ""]
#![doc = "This crate contains the domain models, the in-memory store, the use-case layer for"]
#![doc = "lists and tasks, the bearer-token authentication gate, routing configuration and"]
#![doc = "error handling. It is used by the main binary (`main.rs`) to construct and run the"]
#![doc = "application."]

pub mod auth;
pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
pub mod store;

pub use crate::error::{AppError, AuthError, DomainError};
pub use crate::state::AppState;
