//! Web layer for the next bus lookup.
//!
//! Serves a form page and a `/next` endpoint answering in HTML or JSON.

mod dto;
mod routes;
mod state;
pub mod templates;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
