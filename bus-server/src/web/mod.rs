//! Web layer for the bus trip planner.
//!
//! Provides HTTP endpoints for browsing routes and planning trips.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
