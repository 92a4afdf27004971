//! HTTP API module for the balance engine.
//!
//! This module provides the REST endpoint that turns posted clock events,
//! schedule profiles and an employee directory into a balance report.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::BalanceRequest;
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
