//! HTTP API module for the Overtime Engine.
//!
//! This module provides the REST endpoint that turns a period's attendance
//! records into an overtime summary.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::OvertimeRequest;
pub use response::{ApiError, ApiErrorResponse, OvertimeResponse};
pub use state::AppState;
