//! # Taskboard
//!
//! A minimal in-memory task CRUD service with a JSON REST API.
//!
//! This library provides:
//! - An HTTP API for creating, listing, updating, and deleting tasks
//! - An in-memory store with monotonically increasing task ids
//!
//! ## Request Flow
//! 1. Receive request via the HTTP API
//! 2. Dispatch by method + path to the matching handler
//! 3. Read or mutate the shared task store
//! 4. Return a JSON response (or a plain-text error)
//!
//! ## Modules
//! - `api`: HTTP routes and handlers
//! - `store`: the in-memory task store
//! - `config`: server configuration from environment variables

pub mod api;
pub mod config;
pub mod store;

pub use config::Config;
pub use store::{SharedTaskStore, Task, TaskDraft, TaskStore};
