//! HTTP API surface.

pub mod error;
pub mod routes;
pub mod tasks;

pub use error::ApiError;
pub use routes::{serve, AppState};
